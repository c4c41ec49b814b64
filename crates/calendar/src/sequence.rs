//! Date sequence generation for the Gregorian calendar.

use crate::date::CalendarDate;

/// Generates a contiguous sequence of Gregorian dates.
///
/// Starting from `start`, produces `n_days` consecutive dates. Leap days are
/// included. The sequence stops early only at the end of the representable
/// date range.
///
/// # Example
///
/// ```ignore
/// let start = CalendarDate::new(2000, 2, 28).unwrap();
/// let dates = date_sequence(start, 3);
/// // Feb 28, Feb 29, Mar 1
/// ```
pub fn date_sequence(start: CalendarDate, n_days: usize) -> Vec<CalendarDate> {
    let mut dates = Vec::with_capacity(n_days);
    if n_days == 0 {
        return dates;
    }
    dates.push(start);
    let mut current = start;
    for _ in 1..n_days {
        match current.next() {
            Some(next) => {
                current = next;
                dates.push(current);
            }
            None => break,
        }
    }
    dates
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty() {
        let start = CalendarDate::new(2000, 1, 1).unwrap();
        assert!(date_sequence(start, 0).is_empty());
    }

    #[test]
    fn leap_year_has_366_days() {
        let start = CalendarDate::new(2000, 1, 1).unwrap();
        let dates = date_sequence(start, 366);
        let last = dates.last().unwrap();
        assert_eq!((last.year(), last.month(), last.day()), (2000, 12, 31));
    }

    #[test]
    fn common_year_has_365_days() {
        let start = CalendarDate::new(2001, 1, 1).unwrap();
        let dates = date_sequence(start, 366);
        assert_eq!(dates[365], CalendarDate::new(2002, 1, 1).unwrap());
    }

    #[test]
    fn year_transition() {
        let start = CalendarDate::new(2000, 12, 30).unwrap();
        let dates = date_sequence(start, 3);
        assert_eq!(dates[2], CalendarDate::new(2001, 1, 1).unwrap());
    }
}
