/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Legacy text codec.
//!
//! Decoding strips trailing pad bytes before mapping, so interior and leading
//! blanks survive. Bytes without a text meaning decode to a placeholder
//! character instead of failing. Encoding is strict: a character with no byte
//! in the code page is reported with its position.

use crate::code_page::CodePage;
use crate::tables::{LEGACY_LOW_VALUE, LEGACY_SPACE};
use ledgerconv_core::{ConversionError, Result};
use tracing::trace;

/// Placeholder substituted for unmapped bytes on decode.
pub const DEFAULT_PLACEHOLDER: char = '\u{FFFD}';

/// Codec between legacy code-page bytes and Rust strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegacyTextCodec {
    code_page: CodePage,
    placeholder: char,
    trim_low_values: bool,
}

impl LegacyTextCodec {
    /// Creates a codec for the given code page with default settings.
    #[must_use]
    pub const fn new(code_page: CodePage) -> Self {
        Self {
            code_page,
            placeholder: DEFAULT_PLACEHOLDER,
            trim_low_values: false,
        }
    }

    /// Sets the placeholder used for unmapped bytes.
    #[must_use]
    pub const fn with_placeholder(mut self, placeholder: char) -> Self {
        self.placeholder = placeholder;
        self
    }

    /// Also strips trailing low-value (0x00) bytes on decode.
    #[must_use]
    pub const fn with_trim_low_values(mut self, trim: bool) -> Self {
        self.trim_low_values = trim;
        self
    }

    /// Returns the code page.
    #[inline]
    #[must_use]
    pub const fn code_page(&self) -> CodePage {
        self.code_page
    }

    /// Returns the placeholder character.
    #[inline]
    #[must_use]
    pub const fn placeholder(&self) -> char {
        self.placeholder
    }

    /// Returns true if trailing low values are trimmed.
    #[inline]
    #[must_use]
    pub const fn trims_low_values(&self) -> bool {
        self.trim_low_values
    }

    #[inline]
    fn is_pad(&self, byte: u8) -> bool {
        byte == LEGACY_SPACE || (self.trim_low_values && byte == LEGACY_LOW_VALUE)
    }

    /// Decodes legacy bytes into a string, trimming trailing pad bytes.
    ///
    /// Never fails: empty input yields an empty string and unmapped bytes
    /// become the placeholder.
    ///
    /// # Arguments
    /// * `bytes` - Raw field bytes
    /// * `field` - Field name, used only for logging
    #[must_use]
    pub fn decode(&self, bytes: &[u8], field: &str) -> String {
        let end = bytes
            .iter()
            .rposition(|&b| !self.is_pad(b))
            .map_or(0, |i| i + 1);
        let content = &bytes[..end];

        let mut out = String::with_capacity(content.len());
        let mut substituted = 0usize;
        for &byte in content {
            match self.code_page.decode_byte(byte) {
                Some(ch) => out.push(ch),
                None => {
                    substituted += 1;
                    out.push(self.placeholder);
                }
            }
        }

        if substituted > 0 {
            trace!(
                field,
                substituted,
                code_page = %self.code_page,
                "substituted placeholder for unmapped bytes"
            );
        }
        out
    }

    /// Encodes a string into legacy bytes.
    ///
    /// # Errors
    /// Returns `UnmappableCharacter` for the first character with no byte in
    /// the code page.
    pub fn encode(&self, text: &str, field: &str) -> Result<Vec<u8>> {
        let mut out = Vec::with_capacity(text.len());
        self.encode_into(text, field, &mut out)?;
        Ok(out)
    }

    /// Encodes a string into exactly `len` bytes, right-padded with blanks.
    ///
    /// # Errors
    /// Returns `TextTooLong` if the text has more than `len` characters, or
    /// `UnmappableCharacter` as for [`encode`](Self::encode).
    pub fn encode_padded(&self, text: &str, len: usize, field: &str) -> Result<Vec<u8>> {
        let length = text.chars().count();
        if length > len {
            return Err(ConversionError::TextTooLong {
                field: field.to_string(),
                length,
                max_length: len,
            });
        }
        let mut out = Vec::with_capacity(len);
        self.encode_into(text, field, &mut out)?;
        out.resize(len, LEGACY_SPACE);
        Ok(out)
    }

    fn encode_into(&self, text: &str, field: &str, out: &mut Vec<u8>) -> Result<()> {
        for (position, ch) in text.chars().enumerate() {
            let byte = self.code_page.encode_char(ch).ok_or_else(|| {
                ConversionError::UnmappableCharacter {
                    field: field.to_string(),
                    code_point: u32::from(ch),
                    position,
                }
            })?;
            out.push(byte);
        }
        Ok(())
    }
}

impl Default for LegacyTextCodec {
    fn default() -> Self {
        Self::new(CodePage::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ledgerconv_core::DiagnosisKind;

    const HELLO: [u8; 5] = [0xC8, 0xC5, 0xD3, 0xD3, 0xD6];

    #[test]
    fn test_decode_hello() {
        let codec = LegacyTextCodec::default();
        assert_eq!(codec.decode(&HELLO, "greeting"), "HELLO");
    }

    #[test]
    fn test_encode_hello() {
        let codec = LegacyTextCodec::default();
        assert_eq!(codec.encode("HELLO", "greeting").unwrap(), HELLO.to_vec());
    }

    #[test]
    fn test_decode_empty() {
        let codec = LegacyTextCodec::default();
        assert_eq!(codec.decode(&[], "name"), "");
        assert_eq!(codec.decode(&[0x40, 0x40, 0x40], "name"), "");
    }

    #[test]
    fn test_decode_trims_trailing_blanks_only() {
        let codec = LegacyTextCodec::default();
        // " A B  "
        let bytes = [0x40, 0xC1, 0x40, 0xC2, 0x40, 0x40];
        assert_eq!(codec.decode(&bytes, "name"), " A B");
    }

    #[test]
    fn test_low_values_kept_by_default() {
        let codec = LegacyTextCodec::default();
        let bytes = [0xC1, 0x00, 0x40];
        assert_eq!(codec.decode(&bytes, "name"), "A\u{FFFD}");
    }

    #[test]
    fn test_trim_low_values() {
        let codec = LegacyTextCodec::default().with_trim_low_values(true);
        let bytes = [0xC1, 0x00, 0x40, 0x00];
        assert_eq!(codec.decode(&bytes, "name"), "A");
        let interior = [0xC1, 0x00, 0xC2];
        assert_eq!(codec.decode(&interior, "name"), "A\u{FFFD}B");
    }

    #[test]
    fn test_unmapped_byte_uses_placeholder() {
        let codec = LegacyTextCodec::default().with_placeholder('?');
        let bytes = [0xC1, 0x25, 0xC2];
        assert_eq!(codec.decode(&bytes, "name"), "A?B");
    }

    #[test]
    fn test_encode_unmappable_character() {
        let codec = LegacyTextCodec::default();
        let err = codec.encode("AB€C", "name").unwrap_err();
        assert_eq!(err.kind(), DiagnosisKind::UnmappableCharacter);
        assert_eq!(
            err,
            ConversionError::UnmappableCharacter {
                field: "name".into(),
                code_point: 0x20AC,
                position: 2,
            }
        );
    }

    #[test]
    fn test_encode_rejects_control_characters() {
        let codec = LegacyTextCodec::default();
        let err = codec.encode("A\nB", "memo").unwrap_err();
        assert_eq!(err.kind(), DiagnosisKind::UnmappableCharacter);
    }

    #[test]
    fn test_encode_padded() {
        let codec = LegacyTextCodec::default();
        let bytes = codec.encode_padded("AB", 5, "code").unwrap();
        assert_eq!(bytes, vec![0xC1, 0xC2, 0x40, 0x40, 0x40]);
        assert_eq!(codec.decode(&bytes, "code"), "AB");
    }

    #[test]
    fn test_encode_padded_too_long() {
        let codec = LegacyTextCodec::default();
        let err = codec.encode_padded("ABCDEF", 5, "code").unwrap_err();
        assert_eq!(
            err,
            ConversionError::TextTooLong {
                field: "code".into(),
                length: 6,
                max_length: 5,
            }
        );
    }

    #[test]
    fn test_code_pages_differ() {
        let text = "[X]";
        let cp037 = LegacyTextCodec::new(CodePage::Cp037);
        let cp1047 = LegacyTextCodec::new(CodePage::Cp1047);
        let a = cp037.encode(text, "f").unwrap();
        let b = cp1047.encode(text, "f").unwrap();
        assert_ne!(a, b);
        assert_eq!(cp037.decode(&a, "f"), text);
        assert_eq!(cp1047.decode(&b, "f"), text);
    }

    #[test]
    fn test_latin1_round_trip() {
        let codec = LegacyTextCodec::default();
        let text = "Zürich Café ñ";
        let bytes = codec.encode(text, "city").unwrap();
        assert_eq!(codec.decode(&bytes, "city"), text);
    }
}
