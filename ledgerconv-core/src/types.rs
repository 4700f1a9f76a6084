/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Calendar types for legacy date fields.
//!
//! This module provides:
//! - [`Month`]: Month of the year
//! - [`CalendarDate`]: A Gregorian date inside the two supported centuries
//!
//! The day-count table and leap-year rule live here because a
//! [`CalendarDate`] can only be built through a checked constructor.

use arrayvec::ArrayString;
use chrono::{Datelike, NaiveDate};
use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::FromPrimitive;
use serde::{Deserialize, Serialize};
use std::fmt;

/// First supported year (inclusive).
pub const MIN_YEAR: u32 = 1900;

/// Last supported year (inclusive).
pub const MAX_YEAR: u32 = 2099;

/// Days per month in a common year, January first.
const DAYS_IN_MONTH: [u8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Month of the year.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    FromPrimitive,
    ToPrimitive,
)]
#[repr(u8)]
pub enum Month {
    /// January (01).
    January = 1,
    /// February (02).
    February = 2,
    /// March (03).
    March = 3,
    /// April (04).
    April = 4,
    /// May (05).
    May = 5,
    /// June (06).
    June = 6,
    /// July (07).
    July = 7,
    /// August (08).
    August = 8,
    /// September (09).
    September = 9,
    /// October (10).
    October = 10,
    /// November (11).
    November = 11,
    /// December (12).
    December = 12,
}

impl Month {
    /// Returns the month for a 1-based number, or `None` outside 1-12.
    #[must_use]
    pub fn from_number(number: u32) -> Option<Self> {
        Self::from_u32(number)
    }

    /// Returns the 1-based month number.
    #[inline]
    #[must_use]
    pub const fn number(self) -> u32 {
        self as u32
    }

    /// Number of days in this month of `year`.
    #[must_use]
    pub const fn days_in(self, year: u32) -> u32 {
        if matches!(self, Self::February) && is_leap_year(year) {
            29
        } else {
            DAYS_IN_MONTH[self as usize - 1] as u32
        }
    }
}

/// Gregorian leap-year rule.
#[inline]
#[must_use]
pub const fn is_leap_year(year: u32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// A validated Gregorian date between 1900-01-01 and 2099-12-31.
///
/// There is no way to build a partially valid value: every constructor
/// checks the century range, the month and the day of month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "DateParts", into = "DateParts")]
pub struct CalendarDate {
    year: u16,
    month: Month,
    day: u8,
}

impl CalendarDate {
    /// Creates a date if the components form a valid supported date.
    #[must_use]
    pub fn new(year: u32, month: u32, day: u32) -> Option<Self> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return None;
        }
        let month = Month::from_number(month)?;
        if day < 1 || day > month.days_in(year) {
            return None;
        }
        Some(Self {
            year: year as u16,
            month,
            day: day as u8,
        })
    }

    /// Four-digit year.
    #[inline]
    #[must_use]
    pub const fn year(&self) -> u32 {
        self.year as u32
    }

    /// Month of the year.
    #[inline]
    #[must_use]
    pub const fn month(&self) -> Month {
        self.month
    }

    /// Day of the month, starting at 1.
    #[inline]
    #[must_use]
    pub const fn day(&self) -> u32 {
        self.day as u32
    }

    /// Renders the legacy `CCYYMMDD` form.
    #[must_use]
    pub fn to_digits(&self) -> ArrayString<8> {
        let year = u32::from(self.year);
        let month = self.month.number();
        let day = u32::from(self.day);
        let digits = [
            year / 1000,
            year / 100 % 10,
            year / 10 % 10,
            year % 10,
            month / 10,
            month % 10,
            day / 10,
            day % 10,
        ];

        // Eight digits, each below ten: exactly fills the buffer.
        let mut buf = ArrayString::new();
        for digit in digits {
            buf.push(char::from(b'0' + digit as u8));
        }
        buf
    }

    /// Converts to a chrono date.
    #[must_use]
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year as i32, self.month.number(), self.day as u32)
    }

    /// Converts from a chrono date, if it lies in the supported range.
    #[must_use]
    pub fn from_naive_date(date: NaiveDate) -> Option<Self> {
        let year = u32::try_from(date.year()).ok()?;
        Self::new(year, date.month(), date.day())
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.year,
            self.month.number(),
            self.day
        )
    }
}

/// Serialized form of a [`CalendarDate`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct DateParts {
    year: u32,
    month: u32,
    day: u32,
}

impl TryFrom<DateParts> for CalendarDate {
    type Error = String;

    fn try_from(parts: DateParts) -> Result<Self, Self::Error> {
        Self::new(parts.year, parts.month, parts.day).ok_or_else(|| {
            format!(
                "invalid calendar date {:04}-{:02}-{:02}",
                parts.year, parts.month, parts.day
            )
        })
    }
}

impl From<CalendarDate> for DateParts {
    fn from(date: CalendarDate) -> Self {
        Self {
            year: date.year(),
            month: date.month.number(),
            day: date.day(),
        }
    }
}
