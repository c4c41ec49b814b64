//! Calendar pair newtype for day-of-year stratification.

use crate::error::CalendarError;

/// Maximum number of days in each month over all years
/// (index 0 unused, index 1 = January, ..., index 12 = December).
///
/// February allows 29 so that the leap day is its own calendar pair.
pub(crate) const MAX_DAYS_PER_MONTH: [u8; 13] = [0, 31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Ordinal (1-based) on which each month starts in a 366-day leap year.
const MONTH_START_ORDINAL: [u16; 13] = [0, 1, 32, 61, 92, 122, 153, 183, 214, 245, 275, 306, 336];

/// A `(month, day)` calendar pair.
///
/// Every pair that occurs in some Gregorian year is valid, including Feb 29.
/// Pairs order chronologically within a leap year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthDay {
    month: u8,
    day: u8,
}

impl MonthDay {
    /// Number of distinct calendar pairs.
    pub const COUNT: usize = 366;

    /// Creates a new calendar pair.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12.
    /// Returns [`CalendarError::InvalidDay`] if `day` is not valid for the
    /// given month in a leap year.
    pub fn new(month: u8, day: u8) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth { month });
        }
        let max_day = MAX_DAYS_PER_MONTH[month as usize];
        if !(1..=max_day).contains(&day) {
            return Err(CalendarError::InvalidDay {
                day,
                month,
                max_day,
            });
        }
        Ok(Self { month, day })
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u8 {
        self.day
    }

    /// Position of this pair in a leap year (1..=366).
    pub fn ordinal(self) -> u16 {
        MONTH_START_ORDINAL[self.month as usize] + self.day as u16 - 1
    }

    /// Returns `true` for February 29.
    pub fn is_leap_day(self) -> bool {
        self.month == 2 && self.day == 29
    }

    /// Iterates over all 366 calendar pairs in chronological order,
    /// January 1 through December 31.
    pub fn all() -> impl Iterator<Item = MonthDay> {
        (1u8..=12).flat_map(|month| {
            (1..=MAX_DAYS_PER_MONTH[month as usize]).map(move |day| MonthDay { month, day })
        })
    }
}

impl std::fmt::Display for MonthDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}-{:02}", self.month, self.day)
    }
}
