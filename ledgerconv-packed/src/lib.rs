/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! # LedgerConv Packed
//!
//! Packed binary-coded decimal (COMP-3) and zoned decimal (DISPLAY) encoding
//! and decoding.
//!
//! A packed block stores two decimal digits per byte; the low nibble of the
//! last byte holds the sign. `+12345` is `0x12 0x34 0x5C`, and a block for
//! `n` digits is `ceil((n + 1) / 2)` bytes long.
//!
//! ## Features
//!
//! - **Total decoding**: every byte sequence either decodes or yields a
//!   diagnosis naming the bad nibble, never a panic
//! - **Exact scale**: the implied decimal point is placed by the caller's scale
//! - **Fixed-width encoding**: render into a declared digit count or block length
//! - **Zoned fields**: [`ZonedDecimalCodec`] reads and writes one digit per
//!   byte with the sign in the last zone, sharing the sign nibbles

pub mod codec;
pub mod sign;
pub mod zoned;

pub use codec::{PackedDecimalCodec, packed_len};
pub use sign::Sign;
pub use zoned::ZonedDecimalCodec;
