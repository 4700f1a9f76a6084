/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Numeric field converter.

use crate::literal::parse_decimal_literal;
use ledgerconv_core::{ConversionError, DecimalValue, NumericShape, RawValue, Result};
use ledgerconv_packed::ZonedDecimalCodec;
use num_traits::FromPrimitive;
use rust_decimal::Decimal;

/// Converts raw numeric inputs to a decimal at a field's scale.
///
/// The converter does not enforce the shape's precision; compose it with a
/// [`PrecisionGuard`](crate::PrecisionGuard) for that.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NumericFieldConverter;

impl NumericFieldConverter {
    /// Creates a converter.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Converts a raw value into a decimal at `shape.scale`.
    ///
    /// Null yields zero at the scale. Typed numbers are taken as is and text
    /// is parsed as a decimal literal. Binary input is a zoned (DISPLAY)
    /// field whose decimal point is implied at `shape.scale`. The result is
    /// rounded half-up to the scale before the sign is checked, so a negative
    /// value that rounds to zero is accepted by an unsigned shape.
    ///
    /// # Arguments
    /// * `value` - The raw input
    /// * `shape` - Declared numeric shape
    /// * `field` - Field name used in the diagnosis
    ///
    /// # Errors
    /// Returns `MalformedNumeric` for text that is not a decimal literal,
    /// bytes that are not a zoned field or a non-finite float,
    /// `SignNotAllowed` for a negative value in an unsigned shape,
    /// `PrecisionExceeded` if the value cannot be held at the scale, or the
    /// shape's own validation error.
    pub fn convert(
        &self,
        value: &RawValue,
        shape: &NumericShape,
        field: &str,
    ) -> Result<DecimalValue> {
        shape.validate(field)?;

        let parsed = match value {
            RawValue::Null => return Ok(DecimalValue::zero(shape.scale)),
            RawValue::Int(n) => DecimalValue::new(Decimal::from(*n)),
            RawValue::UInt(n) => DecimalValue::new(Decimal::from(*n)),
            RawValue::Decimal(d) => DecimalValue::new(*d),
            RawValue::Float(f) => from_float(*f, field)?,
            RawValue::Text(text) => parse_decimal_literal(text, field)?,
            RawValue::Binary(bytes) => ZonedDecimalCodec::new(shape.scale).decode(bytes, field)?,
        };

        let rescaled = parsed.rescale_checked(shape.scale, field)?;
        if !shape.signed && rescaled.is_negative() {
            return Err(ConversionError::SignNotAllowed {
                field: field.to_string(),
            });
        }
        Ok(rescaled)
    }
}

fn from_float(value: f64, field: &str) -> Result<DecimalValue> {
    if !value.is_finite() {
        return Err(ConversionError::MalformedNumeric {
            field: field.to_string(),
            raw: value.to_string(),
        });
    }
    Decimal::from_f64(value)
        .map(DecimalValue::new)
        .ok_or_else(|| ConversionError::PrecisionExceeded {
            field: field.to_string(),
            actual: value.abs().log10().floor() as u32 + 1,
            limit: ledgerconv_core::MAX_SUPPORTED_PRECISION,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use ledgerconv_core::DiagnosisKind;

    const SHAPE: NumericShape = NumericShape::new(9, 2, true);

    fn convert(value: impl Into<RawValue>) -> Result<DecimalValue> {
        NumericFieldConverter::default().convert(&value.into(), &SHAPE, "amt")
    }

    #[test]
    fn test_null_is_zero() {
        let value = convert(RawValue::Null).unwrap();
        assert!(value.is_zero());
        assert_eq!(value.scale(), 2);
    }

    #[test]
    fn test_typed_numbers() {
        assert_eq!(convert(42i64).unwrap().to_string(), "42.00");
        assert_eq!(convert(-7i64).unwrap().to_string(), "-7.00");
        assert_eq!(convert(42u64).unwrap().to_string(), "42.00");
        assert_eq!(convert(Decimal::new(12345, 3)).unwrap().to_string(), "12.35");
        assert_eq!(convert(2.5f64).unwrap().to_string(), "2.50");
    }

    #[test]
    fn test_text_is_rounded_half_up() {
        assert_eq!(convert("123.455").unwrap().to_string(), "123.46");
        assert_eq!(convert("123.454").unwrap().to_string(), "123.45");
        assert_eq!(convert("-0.005").unwrap().to_string(), "-0.01");
    }

    #[test]
    fn test_malformed_text() {
        assert_eq!(
            convert("12,50").unwrap_err(),
            ConversionError::MalformedNumeric {
                field: "amt".into(),
                raw: "12,50".into(),
            }
        );
        assert_eq!(convert("").unwrap_err().kind(), DiagnosisKind::MalformedNumeric);
    }

    #[test]
    fn test_non_finite_float() {
        for f in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert_eq!(convert(f).unwrap_err().kind(), DiagnosisKind::MalformedNumeric);
        }
    }

    #[test]
    fn test_huge_float() {
        let err = convert(1.0e30f64).unwrap_err();
        assert_eq!(err.kind(), DiagnosisKind::PrecisionExceeded);
    }

    #[test]
    fn test_zoned_bytes_use_implied_point() {
        let bytes = Bytes::from_static(&[0xF0, 0xF0, 0xF1, 0xF2, 0xF5, 0xF5, 0xF0]);
        assert_eq!(convert(bytes).unwrap().to_string(), "125.50");
        let bytes = Bytes::from_static(&[0xF1, 0xF2, 0xF5, 0xD0]);
        assert_eq!(convert(bytes).unwrap().to_string(), "-12.50");
    }

    #[test]
    fn test_zoned_integer_shape() {
        let shape = NumericShape::new(5, 0, true);
        let converter = NumericFieldConverter::new();
        let bytes = RawValue::Binary(Bytes::from_static(&[0xF1, 0xF2, 0xF3, 0xF4, 0xC5]));
        assert_eq!(converter.convert(&bytes, &shape, "qty").unwrap().to_string(), "12345");
        let bytes = RawValue::Binary(Bytes::from_static(&[0xF1, 0xF2, 0xF3, 0xF4, 0xD5]));
        assert_eq!(converter.convert(&bytes, &shape, "qty").unwrap().to_string(), "-12345");
    }

    #[test]
    fn test_display_text_bytes_are_malformed() {
        // "-12.5" in CP037 is text, not a zoned field.
        let bytes = Bytes::from_static(&[0x60, 0xF1, 0xF2, 0x4B, 0xF5]);
        assert_eq!(convert(bytes).unwrap_err().kind(), DiagnosisKind::MalformedNumeric);
    }

    #[test]
    fn test_zoned_negative_in_unsigned_shape() {
        let shape = NumericShape::new(5, 0, false);
        let bytes = RawValue::Binary(Bytes::from_static(&[0xF1, 0xF2, 0xF3, 0xF4, 0xD5]));
        let err = NumericFieldConverter::new()
            .convert(&bytes, &shape, "qty")
            .unwrap_err();
        assert_eq!(err.kind(), DiagnosisKind::SignNotAllowed);
    }

    #[test]
    fn test_unsigned_shape_rejects_negative() {
        let shape = NumericShape::new(5, 0, false);
        let converter = NumericFieldConverter::default();
        assert_eq!(
            converter
                .convert(&RawValue::Int(-1), &shape, "qty")
                .unwrap_err(),
            ConversionError::SignNotAllowed {
                field: "qty".into(),
            }
        );
        assert!(converter.convert(&RawValue::Int(0), &shape, "qty").is_ok());
    }

    #[test]
    fn test_negative_rounding_to_zero_fits_unsigned_shape() {
        let shape = NumericShape::new(5, 2, false);
        let value = NumericFieldConverter::new()
            .convert(&RawValue::Text("-0.001".into()), &shape, "qty")
            .unwrap();
        assert!(value.is_zero());
        assert_eq!(value.to_string(), "0.00");
    }

    #[test]
    fn test_invalid_shape() {
        let shape = NumericShape::new(2, 3, true);
        let err = NumericFieldConverter::default()
            .convert(&RawValue::Int(1), &shape, "amt")
            .unwrap_err();
        assert_eq!(err.kind(), DiagnosisKind::InvalidShape);
    }

    #[test]
    fn test_precision_not_enforced_here() {
        let shape = NumericShape::new(3, 2, true);
        let value = NumericFieldConverter::default()
            .convert(&RawValue::Int(123_456), &shape, "amt")
            .unwrap();
        assert_eq!(value.to_string(), "123456.00");
    }
}
