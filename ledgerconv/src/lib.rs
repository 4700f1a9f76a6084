/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! # LedgerConv
//!
//! A conversion engine for legacy fixed-format financial records.
//!
//! LedgerConv translates packed binary-coded decimal, zoned decimal, EBCDIC
//! text and `CCYYMMDD` date fields into decimals, strings and validated dates,
//! and back, without silent precision loss.
//!
//! ## Features
//!
//! - **Bit-exact packed decimal**: sign nibbles, implied scale, fixed widths
//! - **Round-half-up everywhere**: one rounding rule for every rescale
//! - **Hard precision limits**: too many digits is an error, never a truncation
//! - **Precise diagnoses**: every failure names the field and the reason
//! - **All-or-nothing records**: a record converts completely or not at all
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use ledgerconv::prelude::*;
//!
//! let mut shapes = ShapeMap::new();
//! shapes.insert("BALANCE".to_string(), FieldShape::packed(7, 2));
//!
//! let mut values = ValueMap::new();
//! values.insert("BALANCE".to_string(), RawValue::from(vec![0x12, 0x34, 0x5C]));
//!
//! let converted = BulkConverter::default()
//!     .convert_all(Some(&values), Some(&shapes), "ACCOUNT")?;
//! ```
//!
//! ## Crate Organization
//!
//! - [`core`]: Decimal, shape and value types, and the error taxonomy
//! - [`packed`]: Packed decimal (COMP-3) and zoned decimal codecs
//! - [`text`]: EBCDIC code pages and text codec
//! - [`calendar`]: Date validation
//! - [`numeric`]: Numeric conversion and precision enforcement
//! - [`engine`]: Bulk record conversion and configuration

pub mod core {
    //! Decimal, shape and value types, and the error taxonomy.
    pub use ledgerconv_core::*;
}

pub mod packed {
    //! Packed decimal (COMP-3) and zoned decimal codecs.
    pub use ledgerconv_packed::*;
}

pub mod text {
    //! EBCDIC code pages and text codec.
    pub use ledgerconv_text::*;
}

pub mod calendar {
    //! Date validation.
    pub use ledgerconv_calendar::*;
}

pub mod numeric {
    //! Numeric conversion and precision enforcement.
    pub use ledgerconv_numeric::*;
}

pub mod engine {
    //! Bulk record conversion and configuration.
    pub use ledgerconv_engine::*;
}

/// Prelude module for convenient imports.
pub mod prelude {
    // Core types
    pub use ledgerconv_core::{
        CalendarDate, ConversionError, DecimalValue, DiagnosisKind, FieldShape, FieldValue, Month,
        NumericShape, RawValue, Result,
    };

    // Codecs
    pub use ledgerconv_packed::{PackedDecimalCodec, Sign, ZonedDecimalCodec, packed_len};
    pub use ledgerconv_text::{CodePage, LegacyTextCodec};

    // Validation and conversion
    pub use ledgerconv_calendar::CalendarValidator;
    pub use ledgerconv_numeric::{NumericFieldConverter, PrecisionGuard};

    // Engine
    pub use ledgerconv_engine::{
        BulkConverter, ConverterConfig, ConverterConfigBuilder, FieldMap, ShapeMap, ValueMap,
    };
}
