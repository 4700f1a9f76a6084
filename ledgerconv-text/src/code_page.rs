/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Supported legacy code pages.

use crate::tables::{
    CP037_TO_UNICODE, CP500_TO_UNICODE, CP1047_TO_UNICODE, UNICODE_TO_CP037, UNICODE_TO_CP500,
    UNICODE_TO_CP1047, lookup, reverse_lookup,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// EBCDIC code page used by a legacy record file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodePage {
    /// CCSID 037, US/Canada.
    #[default]
    Cp037,
    /// CCSID 500, International Latin-1.
    Cp500,
    /// CCSID 1047, Latin-1 Open Systems.
    Cp1047,
}

impl CodePage {
    /// IBM coded character set identifier.
    #[inline]
    #[must_use]
    pub const fn ccsid(self) -> u16 {
        match self {
            Self::Cp037 => 37,
            Self::Cp500 => 500,
            Self::Cp1047 => 1047,
        }
    }

    /// Maps a legacy byte to its character, or `None` if unmapped.
    #[inline]
    #[must_use]
    pub const fn decode_byte(self, byte: u8) -> Option<char> {
        let table = match self {
            Self::Cp037 => &CP037_TO_UNICODE,
            Self::Cp500 => &CP500_TO_UNICODE,
            Self::Cp1047 => &CP1047_TO_UNICODE,
        };
        lookup(table, byte)
    }

    /// Maps a character to its legacy byte, or `None` if it has none.
    #[inline]
    #[must_use]
    pub const fn encode_char(self, ch: char) -> Option<u8> {
        let inverse = match self {
            Self::Cp037 => &UNICODE_TO_CP037,
            Self::Cp500 => &UNICODE_TO_CP500,
            Self::Cp1047 => &UNICODE_TO_CP1047,
        };
        reverse_lookup(inverse, ch)
    }
}

impl fmt::Display for CodePage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CP{:03}", self.ccsid())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_cp037() {
        assert_eq!(CodePage::default(), CodePage::Cp037);
    }

    #[test]
    fn test_display() {
        assert_eq!(CodePage::Cp037.to_string(), "CP037");
        assert_eq!(CodePage::Cp500.to_string(), "CP500");
        assert_eq!(CodePage::Cp1047.to_string(), "CP1047");
    }

    #[test]
    fn test_byte_round_trip() {
        for page in [CodePage::Cp037, CodePage::Cp500, CodePage::Cp1047] {
            for ch in ('A'..='Z').chain('a'..='z').chain('0'..='9') {
                let byte = page.encode_char(ch).unwrap();
                assert_eq!(page.decode_byte(byte), Some(ch));
            }
        }
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&CodePage::Cp1047).unwrap();
        assert_eq!(json, r#""cp1047""#);
        let page: CodePage = serde_json::from_str(r#""cp500""#).unwrap();
        assert_eq!(page, CodePage::Cp500);
    }
}
