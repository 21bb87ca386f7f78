//! Date-range handling for statement queries.
//!
//! Statement endpoints accept `start_date`/`end_date` as `YYYY-MM-DD`
//! strings with the end date treated as *inclusive*: range queries use
//! `date < end + 1 day` semantics.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// An inclusive calendar date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// First day of the range (inclusive).
    pub start: NaiveDate,
    /// Last day of the range (inclusive).
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a new range, validating that it is not inverted.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` if `end` precedes `start`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, AppError> {
        if end < start {
            return Err(AppError::Validation(format!(
                "end date {end} precedes start date {start}"
            )));
        }
        Ok(Self { start, end })
    }

    /// Parses a range from `YYYY-MM-DD` strings.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` on malformed dates or an inverted range.
    pub fn parse(start: &str, end: &str) -> Result<Self, AppError> {
        Self::new(parse_iso_date(start)?, parse_iso_date(end)?)
    }

    /// Returns the exclusive upper bound (`end + 1 day`).
    #[must_use]
    pub fn end_exclusive(&self) -> NaiveDate {
        // NaiveDate::MAX + 1 day cannot be represented; saturate there.
        self.end.checked_add_days(Days::new(1)).unwrap_or(self.end)
    }

    /// Returns true if the date falls within the range (end inclusive).
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date < self.end_exclusive()
    }
}

/// Parses a single `YYYY-MM-DD` date.
///
/// # Errors
///
/// Returns `AppError::Validation` when the string is malformed.
pub fn parse_iso_date(s: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| AppError::Validation(format!("invalid date '{s}', expected YYYY-MM-DD")))
}
