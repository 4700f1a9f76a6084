/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Field shapes, raw inputs, and converted values.
//!
//! This module provides:
//! - [`NumericShape`]: Precision/scale/sign declaration of a numeric field
//! - [`FieldShape`]: Tagged declaration of how one named field is converted
//! - [`RawValue`]: A field as it arrives from the legacy side
//! - [`FieldValue`]: A field after conversion

use crate::decimal::{DecimalValue, MAX_SCALE};
use crate::error::{ConversionError, Result};
use crate::types::CalendarDate;
use bytes::Bytes;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Precision, scale and sign of a numeric field, as in `PIC S9(5)V99`.
///
/// `PIC S9(5)V99` is `NumericShape::new(7, 2, true)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NumericShape {
    /// Maximum total significant digits.
    pub precision: u32,
    /// Digits to the right of the implied decimal point.
    pub scale: u32,
    /// Whether negative values are allowed.
    #[serde(default = "default_signed")]
    pub signed: bool,
}

const fn default_signed() -> bool {
    true
}

impl NumericShape {
    /// Creates a numeric shape.
    ///
    /// # Arguments
    /// * `precision` - Maximum total digits
    /// * `scale` - Fractional digits (must not exceed `precision`)
    /// * `signed` - Whether negative values are allowed
    #[inline]
    #[must_use]
    pub const fn new(precision: u32, scale: u32, signed: bool) -> Self {
        Self {
            precision,
            scale,
            signed,
        }
    }

    /// Number of integer digits (`precision - scale`).
    #[inline]
    #[must_use]
    pub const fn integer_digits(&self) -> u32 {
        self.precision.saturating_sub(self.scale)
    }

    /// Checks the shape invariants.
    ///
    /// # Errors
    /// Returns `ConversionError::InvalidShape` if scale exceeds precision, or
    /// `ConversionError::ScaleOutOfRange` if scale is beyond the backend limit.
    pub fn validate(&self, field: &str) -> Result<()> {
        if self.scale > self.precision {
            return Err(ConversionError::InvalidShape {
                field: field.to_string(),
                scale: self.scale,
                precision: self.precision,
            });
        }
        if self.scale > MAX_SCALE {
            return Err(ConversionError::ScaleOutOfRange {
                field: field.to_string(),
                scale: self.scale,
                max: MAX_SCALE,
            });
        }
        Ok(())
    }
}

/// Declares how one named field is converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldShape {
    /// Packed binary-coded decimal block (COMP-3).
    PackedDecimal(NumericShape),
    /// Already-typed number or decimal text.
    Numeric(NumericShape),
    /// Legacy code-page text of a fixed length.
    Text {
        /// Declared field length in bytes.
        length: usize,
    },
    /// Eight-digit `CCYYMMDD` date.
    Date,
}

impl FieldShape {
    /// Signed packed decimal field, `PIC S9(p-s)V9(s) COMP-3`.
    #[must_use]
    pub const fn packed(precision: u32, scale: u32) -> Self {
        Self::PackedDecimal(NumericShape::new(precision, scale, true))
    }

    /// Signed plain numeric field.
    #[must_use]
    pub const fn numeric(precision: u32, scale: u32) -> Self {
        Self::Numeric(NumericShape::new(precision, scale, true))
    }

    /// Text field of a fixed length.
    #[must_use]
    pub const fn text(length: usize) -> Self {
        Self::Text { length }
    }

    /// Returns the numeric declaration for packed and plain numeric shapes.
    #[must_use]
    pub const fn numeric_shape(&self) -> Option<&NumericShape> {
        match self {
            Self::PackedDecimal(shape) | Self::Numeric(shape) => Some(shape),
            Self::Text { .. } | Self::Date => None,
        }
    }

    /// Short lowercase name of the shape kind.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::PackedDecimal(_) => "packed-decimal",
            Self::Numeric(_) => "numeric",
            Self::Text { .. } => "text",
            Self::Date => "date",
        }
    }
}

impl fmt::Display for FieldShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PackedDecimal(s) => write!(f, "packed-decimal({},{})", s.precision, s.scale),
            Self::Numeric(s) => write!(f, "numeric({},{})", s.precision, s.scale),
            Self::Text { length } => write!(f, "text({})", length),
            Self::Date => f.write_str("date"),
        }
    }
}

/// A field value as delivered by the legacy side, before conversion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RawValue {
    /// Absent value.
    Null,
    /// Raw record bytes (packed block or legacy text).
    Binary(Bytes),
    /// Modern text.
    Text(String),
    /// Signed integer.
    Int(i64),
    /// Unsigned integer.
    UInt(u64),
    /// Decimal value.
    Decimal(Decimal),
    /// Binary floating point.
    Float(f64),
}

impl RawValue {
    /// Returns true for [`RawValue::Null`].
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Short name of the variant, used in `TypeMismatch` diagnoses.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Binary(_) => "binary",
            Self::Text(_) => "text",
            Self::Int(_) => "int",
            Self::UInt(_) => "uint",
            Self::Decimal(_) => "decimal",
            Self::Float(_) => "float",
        }
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Vec<u8>> for RawValue {
    fn from(value: Vec<u8>) -> Self {
        Self::Binary(Bytes::from(value))
    }
}

impl From<&[u8]> for RawValue {
    fn from(value: &[u8]) -> Self {
        Self::Binary(Bytes::copy_from_slice(value))
    }
}

impl From<Bytes> for RawValue {
    fn from(value: Bytes) -> Self {
        Self::Binary(value)
    }
}

impl From<i64> for RawValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u64> for RawValue {
    fn from(value: u64) -> Self {
        Self::UInt(value)
    }
}

impl From<Decimal> for RawValue {
    fn from(value: Decimal) -> Self {
        Self::Decimal(value)
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl<T: Into<RawValue>> From<Option<T>> for RawValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// A field value after conversion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldValue {
    /// Fixed-scale decimal.
    Decimal(DecimalValue),
    /// Decoded text.
    Text(String),
    /// Validated calendar date.
    Date(CalendarDate),
    /// Field without a declared shape, passed through as received.
    Unconverted(RawValue),
}

impl FieldValue {
    /// Returns the value as a decimal, if it is a Decimal variant.
    #[must_use]
    pub const fn as_decimal(&self) -> Option<&DecimalValue> {
        match self {
            Self::Decimal(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the value as a string, if it is a Text variant.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the value as a date, if it is a Date variant.
    #[must_use]
    pub const fn as_date(&self) -> Option<CalendarDate> {
        match self {
            Self::Date(d) => Some(*d),
            _ => None,
        }
    }

    /// Returns the raw value, if the field was passed through.
    #[must_use]
    pub const fn as_raw(&self) -> Option<&RawValue> {
        match self {
            Self::Unconverted(r) => Some(r),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decimal(v) => write!(f, "{}", v),
            Self::Text(s) => write!(f, "{}", s),
            Self::Date(d) => write!(f, "{}", d),
            Self::Unconverted(RawValue::Binary(b)) => write!(f, "<{} bytes>", b.len()),
            Self::Unconverted(r) => write!(f, "<unconverted {}>", r.type_name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_shape_validate() {
        assert!(NumericShape::new(7, 2, true).validate("AMT").is_ok());
        assert!(NumericShape::new(2, 2, true).validate("AMT").is_ok());

        let err = NumericShape::new(2, 3, true).validate("AMT").unwrap_err();
        assert_eq!(
            err,
            ConversionError::InvalidShape {
                field: "AMT".to_string(),
                scale: 3,
                precision: 2
            }
        );

        let err = NumericShape::new(40, 30, true).validate("AMT").unwrap_err();
        assert!(matches!(err, ConversionError::ScaleOutOfRange { scale: 30, .. }));
    }

    #[test]
    fn test_integer_digits() {
        assert_eq!(NumericShape::new(7, 2, true).integer_digits(), 5);
    }

    #[test]
    fn test_field_shape_serde() {
        let shape = FieldShape::packed(7, 2);
        let json = serde_json::to_string(&shape).unwrap();
        assert_eq!(
            json,
            r#"{"kind":"packed_decimal","precision":7,"scale":2,"signed":true}"#
        );

        let parsed: FieldShape =
            serde_json::from_str(r#"{"kind":"numeric","precision":5,"scale":0}"#).unwrap();
        assert_eq!(parsed, FieldShape::numeric(5, 0));

        let text: FieldShape = serde_json::from_str(r#"{"kind":"text","length":20}"#).unwrap();
        assert_eq!(text, FieldShape::text(20));

        let date: FieldShape = serde_json::from_str(r#"{"kind":"date"}"#).unwrap();
        assert_eq!(date, FieldShape::Date);
    }

    #[test]
    fn test_field_shape_display() {
        assert_eq!(FieldShape::packed(7, 2).to_string(), "packed-decimal(7,2)");
        assert_eq!(FieldShape::text(8).to_string(), "text(8)");
        assert_eq!(FieldShape::Date.kind_name(), "date");
    }

    #[test]
    fn test_raw_value_conversions() {
        assert_eq!(RawValue::from("12.5"), RawValue::Text("12.5".to_string()));
        assert_eq!(RawValue::from(7i64), RawValue::Int(7));
        assert_eq!(RawValue::from(None::<i64>), RawValue::Null);
        assert_eq!(
            RawValue::from(vec![0x12, 0x3C]),
            RawValue::Binary(Bytes::from_static(&[0x12, 0x3C]))
        );
        assert_eq!(RawValue::Float(1.5).type_name(), "float");
        assert!(RawValue::Null.is_null());
    }

    #[test]
    fn test_field_value_display() {
        let v = FieldValue::Decimal(DecimalValue::zero(2));
        assert_eq!(v.to_string(), "0.00");
        assert_eq!(FieldValue::Text("ABC".to_string()).to_string(), "ABC");
        assert_eq!(
            FieldValue::Unconverted(RawValue::from(vec![1, 2, 3])).to_string(),
            "<3 bytes>"
        );
        assert_eq!(
            FieldValue::Unconverted(RawValue::Int(4)).to_string(),
            "<unconverted int>"
        );
    }

    #[test]
    fn test_field_value_accessors() {
        let v = FieldValue::Text("X".to_string());
        assert_eq!(v.as_str(), Some("X"));
        assert!(v.as_decimal().is_none());
        assert!(v.as_date().is_none());
        assert!(v.as_raw().is_none());
    }
}
