/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Packed decimal codec.
//!
//! Decoding concatenates every digit nibble (including the high nibble of
//! the last byte) into an unsigned magnitude, applies the sign nibble, and
//! inserts the decimal point `scale` digits from the right. Encoding is the
//! inverse and always writes the preferred sign nibble (0xC, 0xD or 0xF).

use crate::sign::Sign;
use ledgerconv_core::DecimalValue;
use ledgerconv_core::decimal::{MAX_SUPPORTED_PRECISION, check_scale};
use ledgerconv_core::error::{ConversionError, Result};
use smallvec::SmallVec;

/// Storage size in bytes of a packed field holding `digits` digits.
///
/// Storage = ceil((digits + 1) / 2); the extra nibble is the sign.
#[inline]
#[must_use]
pub const fn packed_len(digits: u32) -> usize {
    (digits as usize + 2) / 2
}

/// Codec for packed decimal blocks at a fixed scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackedDecimalCodec {
    /// Digits to the right of the implied decimal point.
    scale: u32,
    /// Whether encode writes 0xC/0xD (signed) or 0xF (unsigned).
    signed: bool,
}

impl PackedDecimalCodec {
    /// Creates a codec for signed fields with the given scale.
    ///
    /// # Arguments
    /// * `scale` - Number of implied fractional digits
    #[inline]
    #[must_use]
    pub const fn new(scale: u32) -> Self {
        Self {
            scale,
            signed: true,
        }
    }

    /// Switches encoding to the unsigned (0xF) sign nibble.
    #[inline]
    #[must_use]
    pub const fn unsigned(mut self) -> Self {
        self.signed = false;
        self
    }

    /// Returns the implied scale.
    #[inline]
    #[must_use]
    pub const fn scale(&self) -> u32 {
        self.scale
    }

    /// Returns whether the codec encodes signed values.
    #[inline]
    #[must_use]
    pub const fn is_signed(&self) -> bool {
        self.signed
    }

    /// Decodes a packed block. An empty block decodes to zero at the scale.
    ///
    /// # Errors
    /// Returns `ConversionError::InvalidPackedDigit` or
    /// `ConversionError::InvalidPackedSign` for malformed nibbles, and
    /// `ConversionError::PrecisionExceeded` if the magnitude does not fit the
    /// decimal backend.
    pub fn decode(&self, bytes: &[u8], field: &str) -> Result<DecimalValue> {
        self.decode_with_sign(bytes, field).map(|(value, _)| value)
    }

    /// Decodes a packed block and also reports which sign nibble was found.
    ///
    /// An empty block yields zero with [`Sign::Positive`].
    ///
    /// # Errors
    /// See [`PackedDecimalCodec::decode`].
    pub fn decode_with_sign(&self, bytes: &[u8], field: &str) -> Result<(DecimalValue, Sign)> {
        check_scale(self.scale, field)?;

        let Some((&last, body)) = bytes.split_last() else {
            return Ok((DecimalValue::zero(self.scale), Sign::Positive));
        };

        let nibbles = body
            .iter()
            .flat_map(|&b| [b >> 4, b & 0x0F])
            .chain(std::iter::once(last >> 4));

        let mut magnitude: u128 = 0;
        let mut significant: u32 = 0;
        for (position, nibble) in nibbles.enumerate() {
            if nibble > 9 {
                return Err(ConversionError::InvalidPackedDigit {
                    field: field.to_string(),
                    position,
                    nibble,
                });
            }
            if significant > 0 || nibble != 0 {
                significant += 1;
            }
            // u128 holds 38 digits; anything longer is rejected below.
            if significant <= 38 {
                magnitude = magnitude * 10 + u128::from(nibble);
            }
        }

        let sign_nibble = last & 0x0F;
        let sign = Sign::from_nibble(sign_nibble).ok_or_else(|| ConversionError::InvalidPackedSign {
            field: field.to_string(),
            nibble: sign_nibble,
        })?;

        let too_wide = || ConversionError::PrecisionExceeded {
            field: field.to_string(),
            actual: significant,
            limit: MAX_SUPPORTED_PRECISION,
        };
        if significant > 38 {
            return Err(too_wide());
        }
        let mut unscaled = i128::try_from(magnitude).map_err(|_| too_wide())?;
        if sign.is_negative() {
            unscaled = -unscaled;
        }
        let value = DecimalValue::from_unscaled(unscaled, self.scale).ok_or_else(too_wide)?;
        Ok((value, sign))
    }

    /// Encodes a value using the fewest bytes that hold all of its digits.
    ///
    /// # Errors
    /// Returns `ConversionError::ScaleOutOfRange` if the value carries
    /// fractional digits beyond the codec's scale,
    /// `ConversionError::PrecisionExceeded` if the value does not fit the
    /// backend once raised to that scale, or
    /// `ConversionError::SignNotAllowed` for a negative value on an unsigned codec.
    pub fn encode(&self, value: &DecimalValue, field: &str) -> Result<Vec<u8>> {
        let (magnitude, sign) = render(value, self.scale, self.signed, field)?;
        let mut buf = itoa::Buffer::new();
        let digits = buf.format(magnitude).as_bytes();
        Ok(pack_nibbles(digits, digits.len(), sign.to_nibble()))
    }

    /// Encodes a value into a field of exactly `digits` digits, as declared by
    /// `PIC S9(n)`. The block is [`packed_len`]`(digits)` bytes long.
    ///
    /// # Errors
    /// Returns `ConversionError::PrecisionExceeded` if the value needs more
    /// than `digits` digits, plus the errors of [`PackedDecimalCodec::encode`].
    pub fn encode_digits(&self, value: &DecimalValue, digits: u32, field: &str) -> Result<Vec<u8>> {
        let (magnitude, sign) = render(value, self.scale, self.signed, field)?;
        let mut buf = itoa::Buffer::new();
        let rendered = buf.format(magnitude).as_bytes();
        if rendered.len() > digits as usize {
            return Err(ConversionError::PrecisionExceeded {
                field: field.to_string(),
                actual: rendered.len() as u32,
                limit: digits,
            });
        }
        Ok(pack_nibbles(rendered, digits as usize, sign.to_nibble()))
    }

    /// Encodes a value into a block of exactly `len` bytes.
    ///
    /// # Errors
    /// See [`PackedDecimalCodec::encode_digits`].
    pub fn encode_to_len(&self, value: &DecimalValue, len: usize, field: &str) -> Result<Vec<u8>> {
        let digits = len.saturating_mul(2).saturating_sub(1);
        self.encode_digits(value, u32::try_from(digits).unwrap_or(u32::MAX), field)
    }
}

/// Returns the unscaled magnitude of `value` at `scale` and the sign to write.
///
/// The value must already be exact at `scale`; digits beyond it are an
/// error rather than being rounded away.
pub(crate) fn render(
    value: &DecimalValue,
    scale: u32,
    signed: bool,
    field: &str,
) -> Result<(u128, Sign)> {
    check_scale(scale, field)?;
    let scaled = value.rescale_checked(scale, field)?;
    if scaled != *value {
        return Err(ConversionError::ScaleOutOfRange {
            field: field.to_string(),
            scale: value.scale(),
            max: scale,
        });
    }

    let sign = if scaled.is_negative() {
        if !signed {
            return Err(ConversionError::SignNotAllowed {
                field: field.to_string(),
            });
        }
        Sign::Negative
    } else if signed {
        Sign::Positive
    } else {
        Sign::Unsigned
    };

    Ok((scaled.unscaled().unsigned_abs(), sign))
}

/// Packs ASCII digits right-aligned into `width` digit nibbles plus a sign.
fn pack_nibbles(digits: &[u8], width: usize, sign: u8) -> Vec<u8> {
    let total = width + 1;
    let pad = total % 2 + width - digits.len();

    let mut nibbles: SmallVec<[u8; 40]> = SmallVec::with_capacity(total + 1);
    nibbles.extend(std::iter::repeat_n(0u8, pad));
    nibbles.extend(digits.iter().map(|d| d - b'0'));
    nibbles.push(sign);

    nibbles
        .chunks_exact(2)
        .map(|pair| (pair[0] << 4) | pair[1])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ledgerconv_core::DiagnosisKind;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dv(s: &str) -> DecimalValue {
        DecimalValue::new(Decimal::from_str(s).unwrap())
    }

    #[test]
    fn test_decode_positive_with_scale() {
        let value = PackedDecimalCodec::new(2)
            .decode(&[0x12, 0x34, 0x5C], "AMT")
            .unwrap();
        assert_eq!(value.to_string(), "123.45");
        assert_eq!(value.scale(), 2);
    }

    #[test]
    fn test_decode_negative_with_scale() {
        let value = PackedDecimalCodec::new(2)
            .decode(&[0x12, 0x34, 0x5D], "AMT")
            .unwrap();
        assert_eq!(value.to_string(), "-123.45");
        assert!(value.is_negative());
    }

    #[test]
    fn test_decode_leading_zero_byte() {
        // nibbles 0 1 2 3 4 | C -> magnitude 01234
        let codec = PackedDecimalCodec::new(2);
        assert_eq!(codec.decode(&[0x01, 0x23, 0x4C], "AMT").unwrap(), dv("12.34"));
        assert_eq!(codec.decode(&[0x01, 0x23, 0x4D], "AMT").unwrap(), dv("-12.34"));
    }

    #[test]
    fn test_decode_pads_fraction() {
        let value = PackedDecimalCodec::new(4).decode(&[0x5C], "F").unwrap();
        assert_eq!(value.to_string(), "0.0005");
    }

    #[test]
    fn test_decode_empty_is_zero_at_scale() {
        for scale in [0, 2, 9, 28] {
            let value = PackedDecimalCodec::new(scale).decode(&[], "F").unwrap();
            assert!(value.is_zero());
            assert_eq!(value.scale(), scale);
        }
    }

    #[test]
    fn test_decode_unsigned_and_alternate_signs() {
        let codec = PackedDecimalCodec::new(0);
        let (v, sign) = codec.decode_with_sign(&[0x12, 0x34, 0x5F], "F").unwrap();
        assert_eq!(v, dv("12345"));
        assert_eq!(sign, Sign::Unsigned);
        assert_eq!(codec.decode(&[0x5A], "F").unwrap(), dv("5"));
        assert_eq!(codec.decode(&[0x5E], "F").unwrap(), dv("5"));
        assert_eq!(codec.decode(&[0x5B], "F").unwrap(), dv("-5"));
    }

    #[test]
    fn test_decode_negative_zero_is_zero() {
        let value = PackedDecimalCodec::new(2).decode(&[0x00, 0x0D], "F").unwrap();
        assert!(value.is_zero());
        assert!(!value.is_negative());
    }

    #[test]
    fn test_decode_invalid_digit_nibble() {
        let err = PackedDecimalCodec::new(0)
            .decode(&[0x1A, 0x3C], "BAL")
            .unwrap_err();
        assert_eq!(
            err,
            ConversionError::InvalidPackedDigit {
                field: "BAL".to_string(),
                position: 1,
                nibble: 0xA
            }
        );
        assert_eq!(err.kind(), DiagnosisKind::MalformedPackedDecimal);
    }

    #[test]
    fn test_decode_invalid_digit_in_last_byte() {
        let err = PackedDecimalCodec::new(0).decode(&[0xFC], "BAL").unwrap_err();
        assert!(matches!(
            err,
            ConversionError::InvalidPackedDigit { position: 0, nibble: 0xF, .. }
        ));
    }

    #[test]
    fn test_decode_invalid_sign_nibble() {
        let err = PackedDecimalCodec::new(0)
            .decode(&[0x12, 0x34], "BAL")
            .unwrap_err();
        assert_eq!(
            err,
            ConversionError::InvalidPackedSign {
                field: "BAL".to_string(),
                nibble: 0x4
            }
        );
    }

    #[test]
    fn test_decode_18_digits() {
        let bytes = [0x01, 0x23, 0x45, 0x67, 0x89, 0x01, 0x23, 0x45, 0x67, 0x8C];
        let value = PackedDecimalCodec::new(0).decode(&bytes, "F").unwrap();
        assert_eq!(value, dv("123456789012345678"));
    }

    #[test]
    fn test_decode_31_digits_exceeds_backend() {
        let mut bytes = vec![0x99; 15];
        bytes.push(0x9C);
        let err = PackedDecimalCodec::new(0).decode(&bytes, "BIG").unwrap_err();
        assert_eq!(
            err,
            ConversionError::PrecisionExceeded {
                field: "BIG".to_string(),
                actual: 31,
                limit: 28
            }
        );
    }

    #[test]
    fn test_decode_many_leading_zeros() {
        let mut bytes = vec![0x00; 30];
        bytes.push(0x1C);
        let value = PackedDecimalCodec::new(0).decode(&bytes, "F").unwrap();
        assert_eq!(value, dv("1"));
    }

    #[test]
    fn test_decode_scale_out_of_range() {
        let err = PackedDecimalCodec::new(29).decode(&[0x1C], "F").unwrap_err();
        assert_eq!(err.kind(), DiagnosisKind::ScaleOutOfRange);
    }

    #[test]
    fn test_encode_minimal() {
        let codec = PackedDecimalCodec::new(2);
        assert_eq!(codec.encode(&dv("123.45"), "F").unwrap(), vec![0x12, 0x34, 0x5C]);
        assert_eq!(codec.encode(&dv("-123.45"), "F").unwrap(), vec![0x12, 0x34, 0x5D]);
        assert_eq!(codec.encode(&dv("1234.56"), "F").unwrap(), vec![0x01, 0x23, 0x45, 0x6C]);
        assert_eq!(codec.encode(&DecimalValue::zero(2), "F").unwrap(), vec![0x0C]);
    }

    #[test]
    fn test_encode_pads_lower_scale() {
        let codec = PackedDecimalCodec::new(2);
        assert_eq!(codec.encode(&dv("5"), "F").unwrap(), vec![0x50, 0x0C]);
        assert_eq!(codec.encode(&dv("1.50"), "F").unwrap(), vec![0x15, 0x0C]);
    }

    #[test]
    fn test_encode_rejects_extra_fraction() {
        let err = PackedDecimalCodec::new(2).encode(&dv("1.005"), "F").unwrap_err();
        assert_eq!(
            err,
            ConversionError::ScaleOutOfRange {
                field: "F".to_string(),
                scale: 3,
                max: 2
            }
        );
    }

    #[test]
    fn test_encode_unsigned() {
        let codec = PackedDecimalCodec::new(0).unsigned();
        assert_eq!(codec.encode(&dv("12345"), "F").unwrap(), vec![0x12, 0x34, 0x5F]);
        let err = codec.encode(&dv("-1"), "F").unwrap_err();
        assert_eq!(err.kind(), DiagnosisKind::SignNotAllowed);
    }

    #[test]
    fn test_encode_digits() {
        let codec = PackedDecimalCodec::new(0);
        assert_eq!(codec.encode_digits(&dv("0"), 3, "F").unwrap(), vec![0x00, 0x0C]);
        assert_eq!(codec.encode_digits(&dv("5"), 1, "F").unwrap(), vec![0x5C]);
        assert_eq!(
            codec.encode_digits(&dv("123456"), 6, "F").unwrap(),
            vec![0x01, 0x23, 0x45, 0x6C]
        );
        let err = codec.encode_digits(&dv("123456"), 5, "F").unwrap_err();
        assert_eq!(
            err,
            ConversionError::PrecisionExceeded {
                field: "F".to_string(),
                actual: 6,
                limit: 5
            }
        );
    }

    #[test]
    fn test_encode_to_len_round_trips_leading_zeros() {
        let codec = PackedDecimalCodec::new(2);
        let block = [0x00, 0x01, 0x23, 0x4D];
        let value = codec.decode(&block, "F").unwrap();
        assert_eq!(codec.encode_to_len(&value, block.len(), "F").unwrap(), block);
    }

    #[test]
    fn test_encode_to_len_zero_length() {
        let err = PackedDecimalCodec::new(0)
            .encode_to_len(&dv("0"), 0, "F")
            .unwrap_err();
        assert_eq!(err.kind(), DiagnosisKind::PrecisionExceeded);
    }

    #[test]
    fn test_packed_len() {
        assert_eq!(packed_len(1), 1);
        assert_eq!(packed_len(5), 3);
        assert_eq!(packed_len(6), 4);
        assert_eq!(packed_len(7), 4);
        assert_eq!(packed_len(18), 10);
    }

    #[test]
    fn test_encode_raising_scale_past_backend() {
        let err = PackedDecimalCodec::new(10)
            .encode(&dv("99999999999999999999"), "BIG")
            .unwrap_err();
        assert_eq!(
            err,
            ConversionError::PrecisionExceeded {
                field: "BIG".into(),
                actual: 30,
                limit: 28,
            }
        );
    }

    #[test]
    fn test_encode_accepts_equal_value_at_lower_scale() {
        let bytes = PackedDecimalCodec::new(1).encode(&dv("1.50"), "AMT").unwrap();
        assert_eq!(bytes, vec![0x01, 0x5C]);
    }
}
