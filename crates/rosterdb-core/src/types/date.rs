//! Calendar dates with total ordering.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// A calendar month.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[repr(u8)]
pub enum Month {
    Jan = 1,
    Feb,
    Mar,
    Apr,
    May,
    Jun,
    Jul,
    Aug,
    Sep,
    Oct,
    Nov,
    Dec,
}

impl Month {
    /// The lowercase three-letter name of the month.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Jan => "jan",
            Self::Feb => "feb",
            Self::Mar => "mar",
            Self::Apr => "apr",
            Self::May => "may",
            Self::Jun => "jun",
            Self::Jul => "jul",
            Self::Aug => "aug",
            Self::Sep => "sep",
            Self::Oct => "oct",
            Self::Nov => "nov",
            Self::Dec => "dec",
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Month {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "jan" => Ok(Self::Jan),
            "feb" => Ok(Self::Feb),
            "mar" => Ok(Self::Mar),
            "apr" => Ok(Self::Apr),
            "may" => Ok(Self::May),
            "jun" => Ok(Self::Jun),
            "jul" => Ok(Self::Jul),
            "aug" => Ok(Self::Aug),
            "sep" => Ok(Self::Sep),
            "oct" => Ok(Self::Oct),
            "nov" => Ok(Self::Nov),
            "dec" => Ok(Self::Dec),
            other => Err(CoreError::Parse(format!("unknown month: {other}"))),
        }
    }
}

/// A validated calendar date.
///
/// Ordering is chronological: year first, then month, then day.
/// Construction rejects day 0 or above 31, year 0, and years after 2025.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Date {
    year: u16,
    month: Month,
    day: u8,
}

impl Date {
    /// Create a date, validating the field ranges.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] if the day is 0 or above 31,
    /// or the year is 0 or after 2025.
    pub fn new(day: u8, month: Month, year: u16) -> CoreResult<Self> {
        if day == 0 || day > 31 {
            return Err(CoreError::Validation(format!("day out of range: {day}")));
        }
        if year == 0 || year > 2025 {
            return Err(CoreError::Validation(format!("year out of range: {year}")));
        }
        Ok(Self { year, month, day })
    }

    /// The day of the month (1-31).
    #[must_use]
    pub const fn day(self) -> u8 {
        self.day
    }

    /// The month.
    #[must_use]
    pub const fn month(self) -> Month {
        self.month
    }

    /// The year.
    #[must_use]
    pub const fn year(self) -> u16 {
        self.year
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02} {} {}", self.day, self.month, self.year)
    }
}

impl FromStr for Date {
    type Err = CoreError;

    /// Parse a date in the `"DD mon YYYY"` column format.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let (Some(day_s), Some(month_s), Some(year_s), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(CoreError::Parse(format!("malformed date: {s:?}")));
        };

        if day_s.len() > 2 || !day_s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CoreError::Parse(format!("malformed day: {day_s:?}")));
        }
        let day: u8 = day_s
            .parse()
            .map_err(|_| CoreError::Parse(format!("malformed day: {day_s:?}")))?;

        let month: Month = month_s.parse()?;

        let year: u16 = year_s
            .parse()
            .map_err(|_| CoreError::Parse(format!("malformed year: {year_s:?}")))?;

        Self::new(day, month, year)
    }
}
