//! Eligible-year ranges.

use crate::error::CalendarError;

/// Whether the last year of a [`YearRange`] is part of the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UpperBound {
    /// `start <= year <= end`.
    #[default]
    Inclusive,
    /// `start <= year < end`.
    Exclusive,
}

/// A range of years with an inclusive lower bound and an explicit upper
/// bound rule.
///
/// Calibration eligibility and verification both select indices through this
/// type so the bound semantics live in one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRange {
    start: i32,
    end: i32,
    upper: UpperBound,
}

impl YearRange {
    /// Creates a new range.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidYearRange`] if the range contains no
    /// years.
    pub fn new(start: i32, end: i32, upper: UpperBound) -> Result<Self, CalendarError> {
        let empty = match upper {
            UpperBound::Inclusive => end < start,
            UpperBound::Exclusive => end <= start,
        };
        if empty {
            return Err(CalendarError::InvalidYearRange { start, end });
        }
        Ok(Self { start, end, upper })
    }

    /// Inclusive range `start..=end`.
    pub fn inclusive(start: i32, end: i32) -> Result<Self, CalendarError> {
        Self::new(start, end, UpperBound::Inclusive)
    }

    /// Exclusive range `start..end`.
    pub fn exclusive(start: i32, end: i32) -> Result<Self, CalendarError> {
        Self::new(start, end, UpperBound::Exclusive)
    }

    /// First year of the range.
    pub fn start(&self) -> i32 {
        self.start
    }

    /// Configured end year (inclusive or exclusive per [`Self::upper`]).
    pub fn end(&self) -> i32 {
        self.end
    }

    /// Upper bound rule.
    pub fn upper(&self) -> UpperBound {
        self.upper
    }

    /// Returns `true` if `year` lies inside the range.
    pub fn contains(&self, year: i32) -> bool {
        year >= self.start
            && match self.upper {
                UpperBound::Inclusive => year <= self.end,
                UpperBound::Exclusive => year < self.end,
            }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inclusive_contains_end() {
        let r = YearRange::inclusive(1990, 1995).unwrap();
        assert!(r.contains(1990));
        assert!(r.contains(1995));
        assert!(!r.contains(1989));
        assert!(!r.contains(1996));
    }

    #[test]
    fn exclusive_excludes_end() {
        let r = YearRange::exclusive(1990, 1995).unwrap();
        assert!(r.contains(1994));
        assert!(!r.contains(1995));
    }

    #[test]
    fn single_year_inclusive() {
        let r = YearRange::inclusive(2000, 2000).unwrap();
        assert!(r.contains(2000));
    }

    #[test]
    fn empty_ranges_rejected() {
        assert_eq!(
            YearRange::exclusive(2000, 2000).unwrap_err(),
            CalendarError::InvalidYearRange {
                start: 2000,
                end: 2000,
            }
        );
        assert!(YearRange::inclusive(2001, 2000).is_err());
    }
}
