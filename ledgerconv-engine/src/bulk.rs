/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Bulk record conversion.
//!
//! A record is a map of field name to raw value plus a map of field name to
//! declared shape. Shaped fields are dispatched to their codec; unshaped
//! fields pass through unconverted. The first failure aborts the whole
//! record and nothing converted so far is returned.

use crate::config::ConverterConfig;
use ledgerconv_calendar::CalendarValidator;
use ledgerconv_core::{ConversionError, FieldShape, FieldValue, NumericShape, RawValue, Result};
use ledgerconv_numeric::{NumericFieldConverter, PrecisionGuard};
use ledgerconv_packed::PackedDecimalCodec;
use ledgerconv_text::LegacyTextCodec;
use std::collections::BTreeMap;
use tracing::{debug, trace, warn};

/// Raw field values of one record, keyed by field name.
pub type ValueMap = BTreeMap<String, RawValue>;

/// Declared field shapes, keyed by field name.
pub type ShapeMap = BTreeMap<String, FieldShape>;

/// Converted field values, keyed by field name.
pub type FieldMap = BTreeMap<String, FieldValue>;

/// Converts whole records according to a shape declaration.
#[derive(Debug, Clone, Copy)]
pub struct BulkConverter {
    config: ConverterConfig,
    text_codec: LegacyTextCodec,
    numeric: NumericFieldConverter,
    calendar: CalendarValidator,
}

impl BulkConverter {
    /// Creates a converter from a configuration.
    #[must_use]
    pub const fn new(config: ConverterConfig) -> Self {
        let text_codec = config.text_codec();
        Self {
            config,
            text_codec,
            numeric: NumericFieldConverter::new(),
            calendar: CalendarValidator::new(),
        }
    }

    /// Returns the configuration.
    #[inline]
    #[must_use]
    pub const fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Converts every field of a record.
    ///
    /// Missing `values` or `shapes` yield an empty result. Fields without a
    /// shape are returned as [`FieldValue::Unconverted`]; shaped fields absent
    /// from `values` are omitted. Fields are processed in name order.
    ///
    /// # Arguments
    /// * `values` - Raw field values
    /// * `shapes` - Declared field shapes
    /// * `record` - Record name used in the diagnosis
    ///
    /// # Errors
    /// Returns `BulkConversionFailed` wrapping the first field failure; no
    /// partial result is produced.
    pub fn convert_all(
        &self,
        values: Option<&ValueMap>,
        shapes: Option<&ShapeMap>,
        record: &str,
    ) -> Result<FieldMap> {
        let (Some(values), Some(shapes)) = (values, shapes) else {
            debug!(record, "record or schema absent, nothing to convert");
            return Ok(FieldMap::new());
        };

        debug!(
            record,
            fields = values.len(),
            shaped = shapes.len(),
            "converting record"
        );

        let mut converted = FieldMap::new();
        for (field, raw) in values {
            let value = match shapes.get(field) {
                Some(shape) => {
                    if self.config.log_fields {
                        trace!(record, field = field.as_str(), shape = %shape, "dispatching field");
                    }
                    match self.convert_field(raw, shape, field) {
                        Ok(value) => value,
                        Err(err) => {
                            warn!(
                                record,
                                field = field.as_str(),
                                kind = %err.kind(),
                                "record conversion failed"
                            );
                            return Err(err.in_record(record));
                        }
                    }
                }
                None => {
                    if self.config.log_fields {
                        trace!(record, field = field.as_str(), "passing field through");
                    }
                    FieldValue::Unconverted(raw.clone())
                }
            };
            converted.insert(field.clone(), value);
        }
        Ok(converted)
    }

    /// Converts one value according to its shape.
    ///
    /// # Errors
    /// Returns the field-level diagnosis of the codec the shape selects, or
    /// `TypeMismatch` if the raw value cannot feed that shape.
    pub fn convert_field(
        &self,
        raw: &RawValue,
        shape: &FieldShape,
        field: &str,
    ) -> Result<FieldValue> {
        match shape {
            FieldShape::PackedDecimal(numeric) => self.convert_packed(raw, numeric, field),
            FieldShape::Numeric(numeric) => {
                let value = self.numeric.convert(raw, numeric, field)?;
                let value = PrecisionGuard::for_shape(numeric).enforce(value, field)?;
                Ok(FieldValue::Decimal(value))
            }
            FieldShape::Text { length } => self.convert_text(raw, *length, field),
            FieldShape::Date => self.convert_date(raw, field),
        }
    }

    fn convert_packed(
        &self,
        raw: &RawValue,
        shape: &NumericShape,
        field: &str,
    ) -> Result<FieldValue> {
        shape.validate(field)?;
        let decoded = match raw {
            RawValue::Null => None,
            RawValue::Binary(bytes) => {
                let codec = PackedDecimalCodec::new(shape.scale);
                let codec = if shape.signed { codec } else { codec.unsigned() };
                Some(codec.decode(bytes, field)?)
            }
            other => return Err(mismatch(field, "binary", other)),
        };
        let value = PrecisionGuard::for_shape(shape).enforce(decoded, field)?;
        if !shape.signed && value.is_negative() {
            return Err(ConversionError::SignNotAllowed {
                field: field.to_string(),
            });
        }
        Ok(FieldValue::Decimal(value))
    }

    fn convert_text(&self, raw: &RawValue, length: usize, field: &str) -> Result<FieldValue> {
        let text = match raw {
            RawValue::Null => String::new(),
            RawValue::Binary(bytes) => {
                if bytes.len() > length {
                    return Err(ConversionError::TextTooLong {
                        field: field.to_string(),
                        length: bytes.len(),
                        max_length: length,
                    });
                }
                self.text_codec.decode(bytes, field)
            }
            RawValue::Text(text) => {
                // Must be storable in the declared legacy field.
                self.text_codec.encode_padded(text, length, field)?;
                text.trim_end_matches(' ').to_string()
            }
            other => return Err(mismatch(field, "text", other)),
        };
        Ok(FieldValue::Text(text))
    }

    fn convert_date(&self, raw: &RawValue, field: &str) -> Result<FieldValue> {
        let date = match raw {
            RawValue::Null => self.calendar.validate(None, field)?,
            RawValue::Text(text) => self.calendar.validate(Some(text.as_str()), field)?,
            RawValue::Binary(bytes) => {
                let text = self.text_codec.decode(bytes, field);
                self.calendar.validate(Some(text.as_str()), field)?
            }
            RawValue::Int(n) => self.calendar.validate(Some(n.to_string().as_str()), field)?,
            RawValue::UInt(n) => self.calendar.validate(Some(n.to_string().as_str()), field)?,
            other => return Err(mismatch(field, "date", other)),
        };
        Ok(FieldValue::Date(date))
    }
}

impl Default for BulkConverter {
    fn default() -> Self {
        Self::new(ConverterConfig::default())
    }
}

fn mismatch(field: &str, expected: &'static str, found: &RawValue) -> ConversionError {
    ConversionError::TypeMismatch {
        field: field.to_string(),
        expected,
        found: found.type_name(),
    }
}
