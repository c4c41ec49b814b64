//! Record validation: every problem found in one pass becomes a single
//! [`IoError::Validation`].

use kairos_calendar::CalendarDate;

use crate::error::IoError;

// Messages spelled out in `details`; `count` still covers all of them.
const MAX_DETAILS: usize = 25;

/// Problems found while loading one record, reported together.
pub(crate) struct ValidationCollector {
    errors: Vec<String>,
}

impl ValidationCollector {
    pub(crate) fn new() -> Self {
        Self { errors: Vec::new() }
    }

    pub(crate) fn push(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    /// Appends the problems of `other` after those already recorded.
    pub(crate) fn extend(&mut self, other: ValidationCollector) {
        self.errors.extend(other.errors);
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.errors.len()
    }

    /// `Ok(())` when nothing was recorded, otherwise one
    /// [`IoError::Validation`] carrying the total count and the first
    /// messages joined with `"; "`.
    pub(crate) fn finish(self) -> Result<(), IoError> {
        let count = self.errors.len();
        if count == 0 {
            return Ok(());
        }
        let mut details = self.errors[..count.min(MAX_DETAILS)].join("; ");
        if count > MAX_DETAILS {
            details.push_str(&format!("; ... and {} more", count - MAX_DETAILS));
        }
        Err(IoError::Validation { count, details })
    }
}

/// Check that every series has one value per date.
pub(crate) fn validate_lengths(n_dates: usize, series: &[(&str, usize)]) -> ValidationCollector {
    let mut c = ValidationCollector::new();
    for &(name, len) in series {
        if len != n_dates {
            c.push(format!("{name} length {len} != dates length {n_dates}"));
        }
    }
    c
}

/// Check that every value is finite.
///
/// Records one message per offending index.
pub(crate) fn validate_finite(name: &str, values: &[f64]) -> ValidationCollector {
    let mut c = ValidationCollector::new();
    for (i, &v) in values.iter().enumerate() {
        if !v.is_finite() {
            c.push(format!("non-finite {name} at index {i}: {v}"));
        }
    }
    c
}

/// Check that each date is the day after its predecessor.
pub(crate) fn validate_contiguous(dates: &[CalendarDate]) -> ValidationCollector {
    let mut c = ValidationCollector::new();
    for (i, pair) in dates.windows(2).enumerate() {
        if pair[0].next() != Some(pair[1]) {
            if pair[1] <= pair[0] {
                c.push(format!(
                    "dates not increasing at index {}: {} follows {}",
                    i + 1,
                    pair[1],
                    pair[0]
                ));
            } else {
                c.push(format!(
                    "gap at index {}: {} follows {}",
                    i + 1,
                    pair[1],
                    pair[0]
                ));
            }
        }
    }
    c
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u8, day: u8) -> CalendarDate {
        CalendarDate::new(y, m, day).unwrap()
    }

    #[test]
    fn collector_empty_is_ok() {
        let c = ValidationCollector::new();
        assert!(c.is_empty());
        assert!(c.finish().is_ok());
    }

    #[test]
    fn collector_counts_and_joins() {
        let mut c = ValidationCollector::new();
        c.push("error one");
        let mut other = ValidationCollector::new();
        other.push("error two");
        c.extend(other);
        assert_eq!(c.len(), 2);
        match c.finish().unwrap_err() {
            IoError::Validation { count, details } => {
                assert_eq!(count, 2);
                assert_eq!(details, "error one; error two");
            }
            other => panic!("expected IoError::Validation, got {other:?}"),
        }
    }

    #[test]
    fn collector_truncates_long_reports() {
        let mut c = ValidationCollector::new();
        for i in 0..40 {
            c.push(format!("bad line {i}"));
        }
        match c.finish().unwrap_err() {
            IoError::Validation { count, details } => {
                assert_eq!(count, 40);
                assert!(details.contains("bad line 24"));
                assert!(!details.contains("bad line 25"));
                assert!(details.ends_with("... and 15 more"));
            }
            other => panic!("expected IoError::Validation, got {other:?}"),
        }
    }

    #[test]
    fn lengths_mismatch() {
        let c = validate_lengths(10, &[("observed", 10), ("model_1", 9)]);
        assert_eq!(c.len(), 1);
        assert!(
            c.finish()
                .unwrap_err()
                .to_string()
                .contains("model_1 length 9 != dates length 10")
        );
    }

    #[test]
    fn non_finite_values() {
        let c = validate_finite("observed", &[1.0, f64::NAN, f64::INFINITY]);
        assert_eq!(c.len(), 2);
    }

    #[test]
    fn contiguous_dates() {
        let ok = [d(2000, 2, 28), d(2000, 2, 29), d(2000, 3, 1)];
        assert!(validate_contiguous(&ok).is_empty());

        let gap = [d(2001, 2, 27), d(2001, 3, 1)];
        let c = validate_contiguous(&gap);
        assert!(c.finish().unwrap_err().to_string().contains("gap at index 1"));

        let back = [d(2001, 3, 2), d(2001, 3, 1)];
        let c = validate_contiguous(&back);
        assert!(c.finish().unwrap_err().to_string().contains("not increasing"));
    }
}
