//! Gregorian date with year context.

use chrono::{Datelike, NaiveDate};

use crate::error::CalendarError;
use crate::month_day::MonthDay;

/// Returns `true` if `year` is a Gregorian leap year.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// A validated Gregorian calendar date.
///
/// Ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    year: i32,
    month: u8,
    day: u8,
}

impl CalendarDate {
    /// Creates a new date from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] or [`CalendarError::InvalidDay`]
    /// if the pair is never valid, and [`CalendarError::InvalidDate`] if the
    /// pair does not exist in `year` (Feb 29 outside leap years).
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        MonthDay::new(month, day)?;
        if NaiveDate::from_ymd_opt(year, month as u32, day as u32).is_none() {
            return Err(CalendarError::InvalidDate { year, month, day });
        }
        Ok(Self { year, month, day })
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns the calendar pair of this date.
    pub fn month_day(self) -> MonthDay {
        // Infallible: the constructor validated the pair.
        MonthDay::new(self.month, self.day).expect("CalendarDate always holds a valid pair")
    }

    /// Returns the date as the integer `YYYYMMDD`.
    pub fn yyyymmdd(self) -> i64 {
        self.year as i64 * 10_000 + self.month as i64 * 100 + self.day as i64
    }

    /// Returns the following day, or `None` past the end of chrono's range.
    pub fn next(self) -> Option<Self> {
        let succ = self.to_naive().succ_opt()?;
        Some(Self {
            year: succ.year(),
            month: succ.month() as u8,
            day: succ.day() as u8,
        })
    }

    fn to_naive(self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month as u32, self.day as u32)
            .expect("CalendarDate always holds a valid date")
    }
}

impl std::fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}
