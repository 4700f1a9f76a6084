/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Scale and precision enforcement.

use ledgerconv_core::{ConversionError, DecimalValue, NumericShape, Result, check_scale};

/// Forces a decimal to a fixed scale and rejects values with too many digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrecisionGuard {
    scale: u32,
    max_precision: u32,
}

impl PrecisionGuard {
    /// Creates a guard.
    ///
    /// # Arguments
    /// * `scale` - Required fractional digits
    /// * `max_precision` - Maximum total significant digits
    #[inline]
    #[must_use]
    pub const fn new(scale: u32, max_precision: u32) -> Self {
        Self {
            scale,
            max_precision,
        }
    }

    /// Creates a guard for a numeric field shape.
    #[inline]
    #[must_use]
    pub const fn for_shape(shape: &NumericShape) -> Self {
        Self::new(shape.scale, shape.precision)
    }

    /// Required scale.
    #[inline]
    #[must_use]
    pub const fn scale(&self) -> u32 {
        self.scale
    }

    /// Maximum total significant digits.
    #[inline]
    #[must_use]
    pub const fn max_precision(&self) -> u32 {
        self.max_precision
    }

    /// Rescales `value` to the guard's scale and checks its precision.
    ///
    /// A `None` value yields zero at the required scale.
    ///
    /// # Errors
    /// Returns `ScaleOutOfRange` if the scale is beyond the backend limit, or
    /// `PrecisionExceeded` if the rescaled value has more than
    /// `max_precision` significant digits.
    pub fn enforce(
        &self,
        value: impl Into<Option<DecimalValue>>,
        field: &str,
    ) -> Result<DecimalValue> {
        check_scale(self.scale, field)?;
        let Some(value) = value.into() else {
            return Ok(DecimalValue::zero(self.scale));
        };

        let rescaled = value.rescale_checked(self.scale, field)?;
        let actual = rescaled.precision();
        if actual > self.max_precision {
            return Err(ConversionError::PrecisionExceeded {
                field: field.to_string(),
                actual,
                limit: self.max_precision,
            });
        }
        Ok(rescaled)
    }
}
