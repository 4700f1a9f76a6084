/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! # LedgerConv Numeric
//!
//! Conversion of heterogeneous numeric inputs into fixed-scale decimals.
//!
//! This crate provides:
//! - [`NumericFieldConverter`]: typed numbers, decimal literals and legacy
//!   zoned (DISPLAY) bytes into a [`DecimalValue`] at a field's scale
//! - [`PrecisionGuard`]: rescaling with round-half-up and a hard
//!   total-digit limit
//!
//! Rounding always uses half away from zero, so `123.455` at scale 2 is
//! `123.46` and `-123.455` is `-123.46`.
//!
//! [`DecimalValue`]: ledgerconv_core::DecimalValue

pub mod converter;
pub mod guard;
pub mod literal;

pub use converter::NumericFieldConverter;
pub use guard::PrecisionGuard;
pub use literal::parse_decimal_literal;
