/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! # LedgerConv Core
//!
//! Core types, traits, and error definitions for the LedgerConv legacy data
//! conversion engine.
//!
//! This crate provides the fundamental building blocks used across all LedgerConv crates:
//! - **Error types**: The closed [`ConversionError`] taxonomy built with `thiserror`
//! - **Decimal values**: [`DecimalValue`], a fixed-scale decimal with precision accounting
//! - **Field types**: [`FieldShape`], [`NumericShape`], [`RawValue`], [`FieldValue`]
//! - **Calendar types**: [`CalendarDate`] and [`Month`]
//!
//! ## Purity
//!
//! Every type here is plain immutable data. Nothing retains state between
//! conversion calls, so all of it is `Send + Sync` and can be shared freely.

pub mod decimal;
pub mod error;
pub mod field;
pub mod types;

pub use decimal::{DecimalValue, MAX_SCALE, MAX_SUPPORTED_PRECISION, check_scale, digit_count};
pub use error::{ConversionError, DiagnosisKind, Result};
pub use field::{FieldShape, FieldValue, NumericShape, RawValue};
pub use types::{CalendarDate, Month};
