/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! # LedgerConv Calendar
//!
//! Validation of legacy `CCYYMMDD` date fields.
//!
//! Every input either yields a fully valid [`CalendarDate`] or a single
//! diagnosis naming the component that failed, checked in this order:
//! blank input, length/digits, century, month, day of month.
//!
//! [`CalendarDate`]: ledgerconv_core::CalendarDate

pub mod validator;

pub use validator::{CalendarValidator, DATE_DIGITS};
