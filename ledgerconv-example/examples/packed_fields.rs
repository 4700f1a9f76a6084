//! Packed decimal example.
//!
//! Decodes a few COMP-3 blocks, rounds a computed amount back to the field's
//! scale and re-encodes it into a fixed-width block.

use ledgerconv::prelude::*;
use ledgerconv_example::{hex, init_logging};
use rust_decimal::Decimal;
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_logging();

    // PIC S9(5)V99 COMP-3: 7 digits, 4 bytes.
    let shape = NumericShape::new(7, 2, true);
    let codec = PackedDecimalCodec::new(shape.scale);
    let width = packed_len(shape.precision);

    for block in [
        &[0x00, 0x12, 0x34, 0x5C][..],
        &[0x00, 0x12, 0x34, 0x5D][..],
        &[0x00, 0x00, 0x00, 0x0F][..],
        &[][..],
    ] {
        let (value, sign) = codec.decode_with_sign(block, "AMOUNT")?;
        info!("[{}] -> {value} ({sign:?})", hex(block));
    }

    // Interest computed at full precision, stored back at scale 2.
    let principal = DecimalValue::new(Decimal::new(1_234_567, 2));
    let rate = Decimal::new(3455, 5);
    let interest = DecimalValue::new(principal.into_inner() * rate);
    let stored = PrecisionGuard::for_shape(&shape).enforce(interest, "INTEREST")?;
    let block = codec.encode_to_len(&stored, width, "INTEREST")?;
    info!("interest {interest} stored as {stored} -> [{}]", hex(&block));

    match codec.decode(&[0x12, 0xA4, 0x5C], "AMOUNT") {
        Ok(value) => info!("unexpected value {value}"),
        Err(err) => info!("rejected: {err}"),
    }

    Ok(())
}
