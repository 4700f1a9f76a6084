/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Zoned decimal codec.
//!
//! A zoned (DISPLAY) field stores one digit per byte: the digit sits in the
//! low nibble and the zone `0xF` in the high nibble. The zone of the last
//! byte carries the sign instead, using the same nibbles as a packed block.
//! The decimal point is implied `scale` digits from the right, so
//! `F1 F2 F3 F4 C5` at scale 2 is `123.45`.

use crate::codec::render;
use crate::sign::Sign;
use ledgerconv_core::DecimalValue;
use ledgerconv_core::decimal::{MAX_SUPPORTED_PRECISION, check_scale};
use ledgerconv_core::error::{ConversionError, Result};

/// Zone nibble of every byte but the last, shifted into place.
const ZONE: u8 = 0xF0;

/// Codec for zoned decimal fields at a fixed scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZonedDecimalCodec {
    scale: u32,
    signed: bool,
}

impl ZonedDecimalCodec {
    /// Creates a codec for signed fields with the given scale.
    #[inline]
    #[must_use]
    pub const fn new(scale: u32) -> Self {
        Self {
            scale,
            signed: true,
        }
    }

    /// Switches encoding to the unsigned (0xF) last zone.
    #[inline]
    #[must_use]
    pub const fn unsigned(mut self) -> Self {
        self.signed = false;
        self
    }

    /// Returns the implied scale.
    #[inline]
    #[must_use]
    pub const fn scale(&self) -> u32 {
        self.scale
    }

    /// Returns whether the codec encodes signed values.
    #[inline]
    #[must_use]
    pub const fn is_signed(&self) -> bool {
        self.signed
    }

    /// Decodes a zoned field. An empty field decodes to zero at the scale.
    ///
    /// # Errors
    /// Returns `ConversionError::MalformedNumeric`, carrying the bytes in hex,
    /// if a byte holds a non-digit, a zone other than 0xF precedes the last
    /// byte, or the last zone is not a sign. Returns
    /// `ConversionError::PrecisionExceeded` if the magnitude does not fit the
    /// decimal backend.
    pub fn decode(&self, bytes: &[u8], field: &str) -> Result<DecimalValue> {
        check_scale(self.scale, field)?;

        let Some(&last) = bytes.last() else {
            return Ok(DecimalValue::zero(self.scale));
        };
        let malformed = || ConversionError::MalformedNumeric {
            field: field.to_string(),
            raw: to_hex(bytes),
        };

        let sign = Sign::from_nibble(last >> 4).ok_or_else(malformed)?;
        let (body, _) = bytes.split_at(bytes.len() - 1);
        if body.iter().any(|&b| b & 0xF0 != ZONE) {
            return Err(malformed());
        }

        let mut magnitude: u128 = 0;
        let mut significant: u32 = 0;
        for digit in bytes.iter().map(|&b| b & 0x0F) {
            if digit > 9 {
                return Err(malformed());
            }
            if significant > 0 || digit != 0 {
                significant += 1;
            }
            // u128 holds 38 digits; anything longer is rejected below.
            if significant <= 38 {
                magnitude = magnitude * 10 + u128::from(digit);
            }
        }

        let too_wide = || ConversionError::PrecisionExceeded {
            field: field.to_string(),
            actual: significant,
            limit: MAX_SUPPORTED_PRECISION,
        };
        if significant > 38 {
            return Err(too_wide());
        }
        let mut unscaled = i128::try_from(magnitude).map_err(|_| too_wide())?;
        if sign.is_negative() {
            unscaled = -unscaled;
        }
        DecimalValue::from_unscaled(unscaled, self.scale).ok_or_else(too_wide)
    }

    /// Encodes a value into a field of exactly `digits` bytes, as declared by
    /// `PIC S9(n)` with `USAGE DISPLAY`.
    ///
    /// # Errors
    /// Returns `ConversionError::PrecisionExceeded` if the value needs more
    /// than `digits` digits, `ConversionError::ScaleOutOfRange` if it carries
    /// fractional digits beyond the scale, or `ConversionError::SignNotAllowed`
    /// for a negative value on an unsigned codec.
    pub fn encode_digits(&self, value: &DecimalValue, digits: u32, field: &str) -> Result<Vec<u8>> {
        let (magnitude, sign) = render(value, self.scale, self.signed, field)?;
        let mut buf = itoa::Buffer::new();
        let rendered = buf.format(magnitude).as_bytes();
        let width = digits as usize;
        if rendered.len() > width {
            return Err(ConversionError::PrecisionExceeded {
                field: field.to_string(),
                actual: rendered.len() as u32,
                limit: digits,
            });
        }

        let mut out = vec![ZONE; width];
        for (slot, digit) in out[width - rendered.len()..].iter_mut().zip(rendered) {
            *slot = ZONE | (digit - b'0');
        }
        if let Some(last) = out.last_mut() {
            *last = (sign.to_nibble() << 4) | (*last & 0x0F);
        }
        Ok(out)
    }
}

/// Renders bytes as space-separated upper-case hex pairs.
fn to_hex(bytes: &[u8]) -> String {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";
    let mut out = String::with_capacity(bytes.len() * 3);
    for (i, &b) in bytes.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push(char::from(HEX[usize::from(b >> 4)]));
        out.push(char::from(HEX[usize::from(b & 0x0F)]));
    }
    out
}
