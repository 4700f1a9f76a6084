/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! # LedgerConv Engine
//!
//! Record-level conversion for the LedgerConv legacy data conversion engine.
//!
//! This crate provides:
//! - **Bulk conversion**: a whole record, field by field, with all-or-nothing
//!   semantics
//! - **Shape dispatch**: packed, numeric, text and date fields routed to
//!   their codecs, with precision enforcement for numeric kinds
//! - **Configuration**: code page and decoding options shared by every field

pub mod bulk;
pub mod config;

pub use bulk::{BulkConverter, FieldMap, ShapeMap, ValueMap};
pub use config::{ConverterConfig, ConverterConfigBuilder};
