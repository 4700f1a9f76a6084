/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! # LedgerConv Text
//!
//! Legacy 8-bit character encoding for fixed-format record text fields.
//!
//! Text fields in legacy records are stored in an EBCDIC code page and padded
//! on the right with the legacy blank (0x40). This crate maps between those
//! bytes and Rust strings through fixed 256-entry tables.
//!
//! ## Features
//!
//! - **Three code pages**: CCSID 037, 500 and 1047, selected by [`CodePage`]
//! - **Lossless where it matters**: decode never fails, unmapped bytes become a
//!   placeholder; encode never drops a character, it reports it
//! - **Fixed-width output**: [`LegacyTextCodec::encode_padded`] fills a
//!   declared field length

pub mod code_page;
pub mod codec;
pub mod tables;

pub use code_page::CodePage;
pub use codec::{DEFAULT_PLACEHOLDER, LegacyTextCodec};
pub use tables::{LEGACY_LOW_VALUE, LEGACY_SPACE};
