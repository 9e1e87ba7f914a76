//! Temporal keys: selectable years and event year-months.

use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

use crate::constants::{DEFAULT_YEAR_MAX, DEFAULT_YEAR_MIN};
use crate::errors::InvalidSelectionError;

/// A year that passed domain validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Year(i32);

impl Year {
    pub fn value(self) -> i32 {
        self.0
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Inclusive range of selectable years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearDomain {
    pub min: i32,
    pub max: i32,
}

impl YearDomain {
    pub fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    /// Validate a raw boundary value.
    pub fn validate(&self, raw: i64) -> Result<Year, InvalidSelectionError> {
        if raw < self.min as i64 || raw > self.max as i64 {
            return Err(InvalidSelectionError::YearOutOfRange {
                year: raw,
                min: self.min,
                max: self.max,
            });
        }
        Ok(Year(raw as i32))
    }

    /// First year of the domain, the default selection.
    pub fn first(&self) -> Year {
        Year(self.min)
    }

    pub fn contains(&self, year: i32) -> bool {
        (self.min..=self.max).contains(&year)
    }
}

impl Default for YearDomain {
    fn default() -> Self {
        Self::new(DEFAULT_YEAR_MIN, DEFAULT_YEAR_MAX)
    }
}

/// Year and month of a disaster declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    pub year: i32,
    pub month: u8,
}

impl YearMonth {
    pub fn new(year: i32, month: u8) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    /// Parse `YYYY-MM`, `YYYY-MM-DD` or an ISO date-time such as
    /// `2017-08-25T00:00:00Z`. Only the year and month are kept.
    pub fn parse_str(s: &str) -> Option<Self> {
        let s = s.trim();
        let date = s.split(['T', ' ']).next().unwrap_or(s);
        let mut parts = date.split(['-', '/']);
        let year_part = parts.next()?;
        let month_part = parts.next()?;
        if year_part.len() != 4 {
            return None;
        }
        let year = year_part.parse::<i32>().ok()?;
        let month = month_part.parse::<u8>().ok()?;
        if let Some(day) = parts.next() {
            let day = day.parse::<u8>().ok()?;
            if !(1..=31).contains(&day) {
                return None;
            }
        }
        if parts.next().is_some() {
            return None;
        }
        Self::new(year, month)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl Serialize for YearMonth {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
