/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Eight-digit date validator.

use chrono::{Datelike, NaiveDate};
use ledgerconv_core::types::{MAX_YEAR, MIN_YEAR};
use ledgerconv_core::{CalendarDate, ConversionError, Month, Result};

/// Number of characters in a legacy date field.
pub const DATE_DIGITS: usize = 8;

/// Validator for `CCYYMMDD` date strings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CalendarValidator;

impl CalendarValidator {
    /// Creates a validator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Validates an eight-digit date.
    ///
    /// # Arguments
    /// * `input` - The date digits, or `None` when the field is absent
    /// * `field` - Field name used in the diagnosis
    ///
    /// # Errors
    /// Returns the most specific of `EmptyOrBlank`, `WrongLength`,
    /// `InvalidCentury`, `InvalidMonth` or `InvalidDay`.
    pub fn validate(&self, input: Option<&str>, field: &str) -> Result<CalendarDate> {
        let raw = match input {
            Some(s) if !s.trim().is_empty() => s,
            _ => {
                return Err(ConversionError::EmptyOrBlank {
                    field: field.to_string(),
                });
            }
        };

        let bytes = raw.as_bytes();
        if bytes.len() != DATE_DIGITS || !bytes.iter().all(u8::is_ascii_digit) {
            return Err(ConversionError::WrongLength {
                field: field.to_string(),
                raw: raw.to_string(),
            });
        }

        let year = parse_digits(&bytes[0..4]);
        let month = parse_digits(&bytes[4..6]);
        let day = parse_digits(&bytes[6..8]);

        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(ConversionError::InvalidCentury {
                field: field.to_string(),
                year,
            });
        }

        let Some(month_of_year) = Month::from_number(month) else {
            return Err(ConversionError::InvalidMonth {
                field: field.to_string(),
                month,
            });
        };

        let max_day = month_of_year.days_in(year);
        if day < 1 || day > max_day {
            return Err(ConversionError::InvalidDay {
                field: field.to_string(),
                day,
                max_day,
            });
        }

        CalendarDate::new(year, month, day).ok_or_else(|| ConversionError::InvalidDay {
            field: field.to_string(),
            day,
            max_day,
        })
    }

    /// Validates a chrono date against the supported century range.
    ///
    /// # Errors
    /// Returns `InvalidCentury` if the year is outside 1900-2099.
    pub fn from_naive_date(&self, date: NaiveDate, field: &str) -> Result<CalendarDate> {
        CalendarDate::from_naive_date(date).ok_or_else(|| ConversionError::InvalidCentury {
            field: field.to_string(),
            year: u32::try_from(date.year()).unwrap_or(0),
        })
    }
}

/// Parses ASCII digits already checked by the caller.
#[inline]
fn parse_digits(digits: &[u8]) -> u32 {
    digits
        .iter()
        .fold(0, |acc, &d| acc * 10 + u32::from(d - b'0'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ledgerconv_core::DiagnosisKind;

    fn kind(input: &str) -> DiagnosisKind {
        CalendarValidator::new()
            .validate(Some(input), "posted")
            .unwrap_err()
            .kind()
    }

    #[test]
    fn test_leap_days() {
        let v = CalendarValidator::new();
        let d = v.validate(Some("20240229"), "posted").unwrap();
        assert_eq!((d.year(), d.month(), d.day()), (2024, Month::February, 29));
        assert!(v.validate(Some("20000229"), "posted").is_ok());
        assert_eq!(kind("20230229"), DiagnosisKind::InvalidDay);
        assert_eq!(kind("19000229"), DiagnosisKind::InvalidDay);
    }

    #[test]
    fn test_century_bounds() {
        let v = CalendarValidator::new();
        assert_eq!(
            v.validate(Some("18991231"), "posted").unwrap_err(),
            ConversionError::InvalidCentury {
                field: "posted".into(),
                year: 1899,
            }
        );
        assert_eq!(kind("21001231"), DiagnosisKind::InvalidCentury);
        assert!(v.validate(Some("19000101"), "posted").is_ok());
        assert!(v.validate(Some("20991231"), "posted").is_ok());
    }

    #[test]
    fn test_empty_or_blank() {
        let v = CalendarValidator::new();
        for input in [None, Some(""), Some("        "), Some(" \t ")] {
            assert_eq!(
                v.validate(input, "posted").unwrap_err(),
                ConversionError::EmptyOrBlank {
                    field: "posted".into(),
                }
            );
        }
    }

    #[test]
    fn test_wrong_length() {
        assert_eq!(kind("2024022"), DiagnosisKind::WrongLength);
        assert_eq!(kind("202402290"), DiagnosisKind::WrongLength);
        assert_eq!(kind("2024-2-9"), DiagnosisKind::WrongLength);
        assert_eq!(kind(" 2024022"), DiagnosisKind::WrongLength);
        assert_eq!(kind("2024022\u{0663}"), DiagnosisKind::WrongLength);
        assert_eq!(
            CalendarValidator::new()
                .validate(Some("abcdefgh"), "posted")
                .unwrap_err(),
            ConversionError::WrongLength {
                field: "posted".into(),
                raw: "abcdefgh".into(),
            }
        );
    }

    #[test]
    fn test_invalid_month() {
        assert_eq!(
            CalendarValidator::new()
                .validate(Some("20241301"), "posted")
                .unwrap_err(),
            ConversionError::InvalidMonth {
                field: "posted".into(),
                month: 13,
            }
        );
        assert_eq!(kind("20240001"), DiagnosisKind::InvalidMonth);
    }

    #[test]
    fn test_invalid_day() {
        assert_eq!(
            CalendarValidator::new()
                .validate(Some("20240431"), "posted")
                .unwrap_err(),
            ConversionError::InvalidDay {
                field: "posted".into(),
                day: 31,
                max_day: 30,
            }
        );
        assert_eq!(kind("20240100"), DiagnosisKind::InvalidDay);
    }

    #[test]
    fn test_century_checked_before_month() {
        assert_eq!(kind("18991399"), DiagnosisKind::InvalidCentury);
        assert_eq!(kind("20241399"), DiagnosisKind::InvalidMonth);
    }

    #[test]
    fn test_from_naive_date() {
        let v = CalendarValidator::new();
        let naive = NaiveDate::from_ymd_opt(1999, 12, 31).unwrap();
        let d = v.from_naive_date(naive, "posted").unwrap();
        assert_eq!(d.to_digits().as_str(), "19991231");

        let too_late = NaiveDate::from_ymd_opt(2100, 1, 1).unwrap();
        assert_eq!(
            v.from_naive_date(too_late, "posted").unwrap_err(),
            ConversionError::InvalidCentury {
                field: "posted".into(),
                year: 2100,
            }
        );
    }

    #[test]
    fn test_round_trip_through_digits() {
        let v = CalendarValidator::new();
        let d = v.validate(Some("19850715"), "posted").unwrap();
        let again = v.validate(Some(d.to_digits().as_str()), "posted").unwrap();
        assert_eq!(d, again);
    }
}
