/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Error types for the LedgerConv conversion engine.
//!
//! Every failure is a variant of the closed [`ConversionError`] enum carrying
//! structured context (field name, offending raw value where it is safe to
//! keep, actual/limit numbers). Callers match on [`ConversionError::kind`]
//! instead of parsing message text; turning a diagnosis into user-facing
//! wording is the caller's job.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Result type alias using [`ConversionError`] as the error type.
pub type Result<T> = std::result::Result<T, ConversionError>;

/// Diagnosis produced by any failing conversion.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// A digit nibble outside 0-9 was found in a packed decimal block.
    #[error("malformed packed decimal in field '{field}': invalid digit nibble 0x{nibble:X} at nibble {position}")]
    InvalidPackedDigit {
        /// The diagnosed field.
        field: String,
        /// Zero-based nibble index within the block.
        position: usize,
        /// The offending nibble value.
        nibble: u8,
    },

    /// The trailing sign nibble of a packed decimal block is not recognized.
    #[error("malformed packed decimal in field '{field}': invalid sign nibble 0x{nibble:X}")]
    InvalidPackedSign {
        /// The diagnosed field.
        field: String,
        /// The offending nibble value.
        nibble: u8,
    },

    /// Text handed to the numeric converter is not a base-10 decimal literal.
    #[error("malformed numeric in field '{field}': '{raw}' is not a decimal literal")]
    MalformedNumeric {
        /// The diagnosed field.
        field: String,
        /// The rejected text.
        raw: String,
    },

    /// The rescaled value needs more significant digits than the field allows.
    #[error("precision exceeded in field '{field}': {actual} digits exceeds max {limit}")]
    PrecisionExceeded {
        /// The diagnosed field.
        field: String,
        /// Computed precision of the value.
        actual: u32,
        /// Declared maximum precision.
        limit: u32,
    },

    /// Date input is absent, empty, or only whitespace.
    #[error("empty or blank date in field '{field}'")]
    EmptyOrBlank {
        /// The diagnosed field.
        field: String,
    },

    /// Date input is not exactly eight ASCII digits.
    #[error("wrong length date in field '{field}': '{raw}' is not 8 digits")]
    WrongLength {
        /// The diagnosed field.
        field: String,
        /// The rejected text.
        raw: String,
    },

    /// Year outside the supported 1900-2099 range.
    #[error("invalid century in field '{field}': year {year} outside 1900-2099")]
    InvalidCentury {
        /// The diagnosed field.
        field: String,
        /// The rejected year.
        year: u32,
    },

    /// Month outside 1-12.
    #[error("invalid month in field '{field}': {month}")]
    InvalidMonth {
        /// The diagnosed field.
        field: String,
        /// The rejected month.
        month: u32,
    },

    /// Day outside 1..=max day of the month.
    #[error("invalid day in field '{field}': {day} outside 1-{max_day}")]
    InvalidDay {
        /// The diagnosed field.
        field: String,
        /// The rejected day.
        day: u32,
        /// Last valid day of the month in that year.
        max_day: u32,
    },

    /// A character has no byte in the selected legacy code page.
    #[error("unmappable character in field '{field}': U+{code_point:04X} at position {position}")]
    UnmappableCharacter {
        /// The diagnosed field.
        field: String,
        /// Unicode scalar value of the character.
        code_point: u32,
        /// Zero-based character index in the input text.
        position: usize,
    },

    /// Text is longer than the declared fixed field length.
    #[error("text too long in field '{field}': {length} exceeds max {max_length}")]
    TextTooLong {
        /// The diagnosed field.
        field: String,
        /// Actual length.
        length: usize,
        /// Declared fixed length.
        max_length: usize,
    },

    /// The raw value variant cannot feed the declared shape kind.
    #[error("type mismatch in field '{field}': expected {expected}, found {found}")]
    TypeMismatch {
        /// The diagnosed field.
        field: String,
        /// What the shape accepts.
        expected: &'static str,
        /// What the caller supplied.
        found: &'static str,
    },

    /// A negative value was supplied for an unsigned field.
    #[error("sign not allowed in unsigned field '{field}'")]
    SignNotAllowed {
        /// The diagnosed field.
        field: String,
    },

    /// Requested scale is beyond what the decimal backend can represent.
    #[error("scale out of range in field '{field}': {scale} exceeds max {max}")]
    ScaleOutOfRange {
        /// The diagnosed field.
        field: String,
        /// Requested scale.
        scale: u32,
        /// Largest supported scale.
        max: u32,
    },

    /// A numeric shape declares more fractional digits than total digits.
    #[error("invalid shape for field '{field}': scale {scale} exceeds precision {precision}")]
    InvalidShape {
        /// The diagnosed field.
        field: String,
        /// Declared scale.
        scale: u32,
        /// Declared precision.
        precision: u32,
    },

    /// A field failed during a bulk pass; no partial record was produced.
    #[error("bulk conversion of record '{record}' failed at field '{field}': {source}")]
    BulkConversionFailed {
        /// Name of the record being converted.
        record: String,
        /// The field that failed.
        field: String,
        /// The underlying field diagnosis.
        source: Box<ConversionError>,
    },
}

/// Fieldless classification of a [`ConversionError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiagnosisKind {
    /// Invalid digit or sign nibble in a packed block.
    MalformedPackedDecimal,
    /// Non-numeric string passed to the numeric converter.
    MalformedNumeric,
    /// Rescaled value's digit count exceeds the declared maximum.
    PrecisionExceeded,
    /// Date input absent or blank.
    EmptyOrBlank,
    /// Date input not 8 digits.
    WrongLength,
    /// Date year outside the supported centuries.
    InvalidCentury,
    /// Date month outside 1-12.
    InvalidMonth,
    /// Date day outside the month.
    InvalidDay,
    /// Character with no legacy code-page byte.
    UnmappableCharacter,
    /// Text longer than its fixed length.
    TextTooLong,
    /// Raw value cannot feed the shape kind.
    TypeMismatch,
    /// Negative value for an unsigned field.
    SignNotAllowed,
    /// Scale beyond the backend limit.
    ScaleOutOfRange,
    /// Shape declaration is inconsistent.
    InvalidShape,
    /// Wrapper for the first failure of a bulk pass.
    BulkConversionFailed,
}

impl fmt::Display for DiagnosisKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl ConversionError {
    /// Returns the kind of this diagnosis.
    #[must_use]
    pub const fn kind(&self) -> DiagnosisKind {
        match self {
            Self::InvalidPackedDigit { .. } | Self::InvalidPackedSign { .. } => {
                DiagnosisKind::MalformedPackedDecimal
            }
            Self::MalformedNumeric { .. } => DiagnosisKind::MalformedNumeric,
            Self::PrecisionExceeded { .. } => DiagnosisKind::PrecisionExceeded,
            Self::EmptyOrBlank { .. } => DiagnosisKind::EmptyOrBlank,
            Self::WrongLength { .. } => DiagnosisKind::WrongLength,
            Self::InvalidCentury { .. } => DiagnosisKind::InvalidCentury,
            Self::InvalidMonth { .. } => DiagnosisKind::InvalidMonth,
            Self::InvalidDay { .. } => DiagnosisKind::InvalidDay,
            Self::UnmappableCharacter { .. } => DiagnosisKind::UnmappableCharacter,
            Self::TextTooLong { .. } => DiagnosisKind::TextTooLong,
            Self::TypeMismatch { .. } => DiagnosisKind::TypeMismatch,
            Self::SignNotAllowed { .. } => DiagnosisKind::SignNotAllowed,
            Self::ScaleOutOfRange { .. } => DiagnosisKind::ScaleOutOfRange,
            Self::InvalidShape { .. } => DiagnosisKind::InvalidShape,
            Self::BulkConversionFailed { .. } => DiagnosisKind::BulkConversionFailed,
        }
    }

    /// Returns the name of the field this diagnosis is about.
    #[must_use]
    pub fn field(&self) -> &str {
        match self {
            Self::InvalidPackedDigit { field, .. }
            | Self::InvalidPackedSign { field, .. }
            | Self::MalformedNumeric { field, .. }
            | Self::PrecisionExceeded { field, .. }
            | Self::EmptyOrBlank { field }
            | Self::WrongLength { field, .. }
            | Self::InvalidCentury { field, .. }
            | Self::InvalidMonth { field, .. }
            | Self::InvalidDay { field, .. }
            | Self::UnmappableCharacter { field, .. }
            | Self::TextTooLong { field, .. }
            | Self::TypeMismatch { field, .. }
            | Self::SignNotAllowed { field }
            | Self::ScaleOutOfRange { field, .. }
            | Self::InvalidShape { field, .. }
            | Self::BulkConversionFailed { field, .. } => field,
        }
    }

    /// Returns the innermost field-level diagnosis, unwrapping bulk failures.
    #[must_use]
    pub fn root_cause(&self) -> &Self {
        match self {
            Self::BulkConversionFailed { source, .. } => source.root_cause(),
            other => other,
        }
    }

    /// Wraps a field-level diagnosis with the record it occurred in.
    #[must_use]
    pub fn in_record(self, record: impl Into<String>) -> Self {
        Self::BulkConversionFailed {
            record: record.into(),
            field: self.field().to_string(),
            source: Box::new(self),
        }
    }
}
