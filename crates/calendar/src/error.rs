//! Error types for the kairos-calendar crate.

/// Error type for all fallible operations in the kairos-calendar crate.
///
/// Covers validation failures for month numbers, day-within-month values,
/// full dates and year ranges.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[allow(clippy::enum_variant_names)]
pub enum CalendarError {
    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a day number exceeds the number of days in the given month.
    #[error("invalid day: {day} for month {month} (max {max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u8,
        /// The month for which the day is invalid.
        month: u8,
        /// The maximum valid day for the given month.
        max_day: u8,
    },

    /// Returned when a (year, month, day) triple is not a Gregorian date,
    /// e.g. Feb 29 in a non-leap year.
    #[error("invalid date: {year:04}-{month:02}-{day:02}")]
    InvalidDate {
        /// Year of the rejected date.
        year: i32,
        /// Month of the rejected date.
        month: u8,
        /// Day of the rejected date.
        day: u8,
    },

    /// Returned when a year range is empty.
    #[error("invalid year range: {start}..{end} contains no years")]
    InvalidYearRange {
        /// First year of the range.
        start: i32,
        /// Last (or one-past-last) year of the range.
        end: i32,
    },
}
