/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Fixed-scale decimal values.
//!
//! [`DecimalValue`] wraps a [`rust_decimal::Decimal`] and exposes the two
//! numbers legacy field declarations are written in: scale (fractional
//! digits) and precision (total significant digits). Both are always
//! non-negative and precision is never below scale.

use crate::error::{ConversionError, Result};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Largest scale the decimal backend can represent.
pub const MAX_SCALE: u32 = 28;

/// Largest number of significant digits that is always representable.
pub const MAX_SUPPORTED_PRECISION: u32 = 28;

/// Arbitrary-precision signed decimal with an explicit scale.
///
/// Two values compare equal when they denote the same number, regardless of
/// scale (`1.0 == 1.00`); use [`DecimalValue::scale`] to tell them apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct DecimalValue(Decimal);

impl DecimalValue {
    /// Creates a value from a decimal, keeping its scale.
    #[inline]
    #[must_use]
    pub fn new(value: Decimal) -> Self {
        Self(normalize_zero(value))
    }

    /// Returns zero at the given scale.
    ///
    /// Scales above [`MAX_SCALE`] are clamped; callers validate the scale
    /// with [`check_scale`] first.
    #[must_use]
    pub fn zero(scale: u32) -> Self {
        Self(Decimal::new(0, scale.min(MAX_SCALE)))
    }

    /// Builds a value from an unscaled integer and a scale.
    ///
    /// Returns `None` when the magnitude does not fit the backend's 96-bit
    /// mantissa or the scale is above [`MAX_SCALE`].
    #[must_use]
    pub fn from_unscaled(unscaled: i128, scale: u32) -> Option<Self> {
        Decimal::try_from_i128_with_scale(unscaled, scale)
            .ok()
            .map(Self::new)
    }

    /// Returns the underlying decimal.
    #[inline]
    #[must_use]
    pub const fn as_decimal(&self) -> &Decimal {
        &self.0
    }

    /// Consumes the wrapper and returns the underlying decimal.
    #[inline]
    #[must_use]
    pub const fn into_inner(self) -> Decimal {
        self.0
    }

    /// Count of digits to the right of the decimal point.
    #[inline]
    #[must_use]
    pub fn scale(&self) -> u32 {
        self.0.scale()
    }

    /// Total significant digits, never less than the scale nor less than one.
    #[must_use]
    pub fn precision(&self) -> u32 {
        digit_count(self.0.mantissa().unsigned_abs()).max(self.scale())
    }

    /// The value with its decimal point removed (`123.45` gives `12345`).
    #[inline]
    #[must_use]
    pub fn unscaled(&self) -> i128 {
        self.0.mantissa()
    }

    /// Returns true if the value is strictly below zero.
    #[inline]
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Returns true if the value is zero at any scale.
    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Rescales to exactly `scale` fractional digits, rounding half away
    /// from zero when digits are dropped.
    ///
    /// Returns `None` if the result cannot be represented at that scale.
    #[must_use]
    pub fn rescale_half_up(&self, scale: u32) -> Option<Self> {
        if scale > MAX_SCALE {
            return None;
        }
        let mut rounded = self
            .0
            .round_dp_with_strategy(scale, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(scale);
        (rounded.scale() == scale).then(|| Self::new(rounded))
    }

    /// Rescales like [`DecimalValue::rescale_half_up`], naming `field` when
    /// the result is unrepresentable.
    ///
    /// # Errors
    /// Returns `PrecisionExceeded` with the digit count the rescaled value
    /// would need (integer digits plus `scale`) against
    /// [`MAX_SUPPORTED_PRECISION`].
    pub fn rescale_checked(&self, scale: u32, field: &str) -> Result<Self> {
        self.rescale_half_up(scale).ok_or_else(|| {
            let integer_digits = digit_count(self.0.trunc().mantissa().unsigned_abs());
            ConversionError::PrecisionExceeded {
                field: field.to_string(),
                actual: integer_digits + scale,
                limit: MAX_SUPPORTED_PRECISION,
            }
        })
    }
}

impl From<Decimal> for DecimalValue {
    fn from(value: Decimal) -> Self {
        Self::new(value)
    }
}

impl From<DecimalValue> for Decimal {
    fn from(value: DecimalValue) -> Self {
        value.0
    }
}

impl fmt::Display for DecimalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Validates that `scale` is representable, naming `field` on failure.
///
/// # Errors
/// Returns `ConversionError::ScaleOutOfRange` if `scale` exceeds [`MAX_SCALE`].
pub fn check_scale(scale: u32, field: &str) -> Result<()> {
    if scale > MAX_SCALE {
        return Err(ConversionError::ScaleOutOfRange {
            field: field.to_string(),
            scale,
            max: MAX_SCALE,
        });
    }
    Ok(())
}

/// Number of base-10 digits in `n`, counting zero as one digit.
#[inline]
#[must_use]
pub fn digit_count(n: u128) -> u32 {
    n.checked_ilog10().map_or(1, |d| d + 1)
}

/// Clears the sign of a zero so `-0.00` never escapes.
#[inline]
fn normalize_zero(mut value: Decimal) -> Decimal {
    if value.is_zero() {
        value.set_sign_positive(true);
    }
    value
}
