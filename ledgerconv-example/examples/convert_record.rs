//! Bulk record conversion example.
//!
//! Converts one legacy account record against a JSON schema, then shows the
//! all-or-nothing failure of a record with a corrupted packed field.
//!
//! Run with `RUST_LOG=ledgerconv_engine=trace` to see per-field dispatch.

use bytes::Bytes;
use ledgerconv::prelude::*;
use ledgerconv_example::{account_schema, init_logging};
use tracing::{error, info};

fn account_record(balance: &'static [u8]) -> ValueMap {
    let mut values = ValueMap::new();
    values.insert("ACCT-BALANCE".into(), RawValue::Binary(Bytes::from_static(balance)));
    values.insert("ACCT-RATE".into(), RawValue::Text("0.034550".into()));
    values.insert("ACCT-LIMIT".into(), RawValue::UInt(250_000));
    // Zoned "036", unsigned.
    values.insert(
        "ACCT-TERM".into(),
        RawValue::Binary(Bytes::from_static(&[0xF0, 0xF3, 0xF6])),
    );
    // "J SMITH" padded with legacy blanks, CP037.
    values.insert(
        "ACCT-NAME".into(),
        RawValue::Binary(Bytes::from_static(&[
            0xD1, 0x40, 0xE2, 0xD4, 0xC9, 0xE3, 0xC8, 0x40, 0x40, 0x40,
        ])),
    );
    values.insert("ACCT-OPENED".into(), RawValue::Text("19980315".into()));
    values.insert("BRANCH-MEMO".into(), RawValue::Text("legacy note".into()));
    values
}

fn main() -> anyhow::Result<()> {
    init_logging();

    let shapes = account_schema()?;
    let converter = BulkConverter::new(
        ConverterConfigBuilder::new()
            .code_page(CodePage::Cp037)
            .log_fields(true)
            .build(),
    );

    let values = account_record(&[0x00, 0x01, 0x23, 0x45, 0x67, 0x8D]);
    let converted = converter.convert_all(Some(&values), Some(&shapes), "ACCOUNT-0001")?;
    for (field, value) in &converted {
        info!("{field:<14} {value}");
    }

    let corrupted = account_record(&[0x00, 0x01, 0x23, 0x4F, 0x67, 0x8D]);
    match converter.convert_all(Some(&corrupted), Some(&shapes), "ACCOUNT-0002") {
        Ok(_) => error!("corrupted record unexpectedly converted"),
        Err(err) => {
            info!("rejected: {err}");
            info!(
                "root cause kind {} in field {}",
                err.root_cause().kind(),
                err.field()
            );
        }
    }

    Ok(())
}
