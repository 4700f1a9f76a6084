/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Sign nibble of a packed decimal block.

/// Sign carried in the last nibble of a packed block or the last zone of a
/// zoned field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    /// Positive (0xC preferred, 0xA and 0xE accepted).
    Positive,
    /// Negative (0xD preferred, 0xB accepted).
    Negative,
    /// Unsigned (0xF), treated as non-negative.
    Unsigned,
}

impl Sign {
    /// Parses a sign nibble. Only the low four bits are inspected.
    #[must_use]
    pub const fn from_nibble(nibble: u8) -> Option<Self> {
        match nibble & 0x0F {
            0x0C | 0x0A | 0x0E => Some(Self::Positive),
            0x0D | 0x0B => Some(Self::Negative),
            0x0F => Some(Self::Unsigned),
            _ => None,
        }
    }

    /// Preferred nibble for this sign.
    #[inline]
    #[must_use]
    pub const fn to_nibble(self) -> u8 {
        match self {
            Self::Positive => 0x0C,
            Self::Negative => 0x0D,
            Self::Unsigned => 0x0F,
        }
    }

    /// Returns true for [`Sign::Negative`].
    #[inline]
    #[must_use]
    pub const fn is_negative(self) -> bool {
        matches!(self, Self::Negative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_nibble() {
        assert_eq!(Sign::from_nibble(0x0C), Some(Sign::Positive));
        assert_eq!(Sign::from_nibble(0x0A), Some(Sign::Positive));
        assert_eq!(Sign::from_nibble(0x0E), Some(Sign::Positive));
        assert_eq!(Sign::from_nibble(0x0D), Some(Sign::Negative));
        assert_eq!(Sign::from_nibble(0x0B), Some(Sign::Negative));
        assert_eq!(Sign::from_nibble(0x0F), Some(Sign::Unsigned));
        for digit in 0..=9 {
            assert_eq!(Sign::from_nibble(digit), None);
        }
    }

    #[test]
    fn test_from_nibble_ignores_high_bits() {
        assert_eq!(Sign::from_nibble(0x5D), Some(Sign::Negative));
    }

    #[test]
    fn test_to_nibble() {
        assert_eq!(Sign::Positive.to_nibble(), 0x0C);
        assert_eq!(Sign::Negative.to_nibble(), 0x0D);
        assert_eq!(Sign::Unsigned.to_nibble(), 0x0F);
        assert!(Sign::Negative.is_negative());
        assert!(!Sign::Unsigned.is_negative());
    }
}
