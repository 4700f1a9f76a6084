/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Strict base-10 decimal literal parsing.
//!
//! Accepted forms are `[+-]?digits[.digits]`, `[+-]?digits.` and
//! `[+-]?.digits`. Whitespace, exponents and grouping separators are
//! rejected, so a value never changes meaning depending on locale.

use ledgerconv_core::{ConversionError, DecimalValue, MAX_SCALE, MAX_SUPPORTED_PRECISION, Result};

/// Parses a decimal literal, keeping the scale written in the text.
///
/// # Arguments
/// * `text` - The literal
/// * `field` - Field name used in the diagnosis
///
/// # Errors
/// Returns `MalformedNumeric` for any other textual form, or
/// `PrecisionExceeded` if the literal has more fractional digits than
/// [`MAX_SCALE`] or its digits do not fit the decimal backend's mantissa.
pub fn parse_decimal_literal(text: &str, field: &str) -> Result<DecimalValue> {
    let malformed = || ConversionError::MalformedNumeric {
        field: field.to_string(),
        raw: text.to_string(),
    };

    let bytes = text.as_bytes();
    let (negative, body) = match bytes.first() {
        Some(b'-') => (true, &bytes[1..]),
        Some(b'+') => (false, &bytes[1..]),
        _ => (false, bytes),
    };

    let (integer, fraction) = match memchr::memchr(b'.', body) {
        Some(dot) => (&body[..dot], &body[dot + 1..]),
        None => (body, &body[body.len()..]),
    };

    if integer.is_empty() && fraction.is_empty() {
        return Err(malformed());
    }
    if !integer.iter().chain(fraction).all(u8::is_ascii_digit) {
        return Err(malformed());
    }

    let mut magnitude: u128 = 0;
    let mut significant: u32 = 0;
    for &digit in integer.iter().chain(fraction) {
        if significant == 0 && digit == b'0' {
            continue;
        }
        significant += 1;
        // u128 holds 38 digits; anything longer is rejected below.
        if significant <= 38 {
            magnitude = magnitude * 10 + u128::from(digit - b'0');
        }
    }

    let scale = u32::try_from(fraction.len()).unwrap_or(u32::MAX);
    if scale > MAX_SCALE {
        return Err(ConversionError::PrecisionExceeded {
            field: field.to_string(),
            actual: significant.max(scale),
            limit: MAX_SUPPORTED_PRECISION,
        });
    }

    let too_wide = || ConversionError::PrecisionExceeded {
        field: field.to_string(),
        actual: significant,
        limit: MAX_SUPPORTED_PRECISION,
    };
    if significant > 38 {
        return Err(too_wide());
    }
    let unscaled = i128::try_from(magnitude).map_err(|_| too_wide())?;
    let unscaled = if negative { -unscaled } else { unscaled };
    DecimalValue::from_unscaled(unscaled, scale).ok_or_else(too_wide)
}
