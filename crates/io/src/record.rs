//! In-memory daily record: dates, forcing, observations and model runs.

use kairos_calendar::CalendarDate;

use crate::error::IoError;
use crate::validate::{validate_contiguous, validate_finite, validate_lengths};

/// One candidate model's simulated series.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulatedSeries {
    id: String,
    values: Vec<f64>,
}

impl SimulatedSeries {
    /// Creates a named series.
    pub fn new(id: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            id: id.into(),
            values,
        }
    }

    /// Model identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Daily values.
    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

/// Validated, gap-free daily record.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyRecord {
    dates: Vec<CalendarDate>,
    precipitation: Vec<f64>,
    observed: Vec<f64>,
    simulated: Vec<SimulatedSeries>,
}

impl DailyRecord {
    /// Builds a record after validating it.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::Validation`] counting every problem: an empty record,
    /// no simulated series, length mismatches, non-finite values, or dates
    /// that are not consecutive days.
    pub fn new(
        dates: Vec<CalendarDate>,
        precipitation: Vec<f64>,
        observed: Vec<f64>,
        simulated: Vec<SimulatedSeries>,
    ) -> Result<Self, IoError> {
        let mut c = crate::validate::ValidationCollector::new();
        if dates.is_empty() {
            c.push("record has no days");
        }
        if simulated.is_empty() {
            c.push("record has no simulated series");
        }

        let mut lengths = vec![
            ("precipitation", precipitation.len()),
            ("observed", observed.len()),
        ];
        lengths.extend(simulated.iter().map(|s| (s.id(), s.values().len())));
        c.extend(validate_lengths(dates.len(), &lengths));

        c.extend(validate_finite("precipitation", &precipitation));
        c.extend(validate_finite("observed", &observed));
        for s in &simulated {
            c.extend(validate_finite(s.id(), s.values()));
        }
        c.extend(validate_contiguous(&dates));
        c.finish()?;

        Ok(Self {
            dates,
            precipitation,
            observed,
            simulated,
        })
    }

    /// Number of days.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Always `false` for a validated record.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Dates of the record.
    pub fn dates(&self) -> &[CalendarDate] {
        &self.dates
    }

    /// Daily precipitation.
    pub fn precipitation(&self) -> &[f64] {
        &self.precipitation
    }

    /// Daily observations.
    pub fn observed(&self) -> &[f64] {
        &self.observed
    }

    /// Candidate model series in file order.
    pub fn simulated(&self) -> &[SimulatedSeries] {
        &self.simulated
    }

    /// Looks up a model series by id.
    pub fn model(&self, id: &str) -> Option<&SimulatedSeries> {
        self.simulated.iter().find(|s| s.id() == id)
    }

    /// First and last date.
    pub fn span(&self) -> (CalendarDate, CalendarDate) {
        (self.dates[0], self.dates[self.dates.len() - 1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kairos_calendar::date_sequence;

    fn dates(n: usize) -> Vec<CalendarDate> {
        date_sequence(CalendarDate::new(2004, 2, 27).unwrap(), n)
    }

    #[test]
    fn valid_record() {
        let r = DailyRecord::new(
            dates(4),
            vec![0.0; 4],
            vec![1.0, 2.0, 3.0, 4.0],
            vec![SimulatedSeries::new("hbv", vec![1.5; 4])],
        )
        .unwrap();
        assert_eq!(r.len(), 4);
        assert_eq!(r.model("hbv").unwrap().values().len(), 4);
        assert!(r.model("gr4j").is_none());
        assert_eq!(r.span().1, CalendarDate::new(2004, 3, 1).unwrap());
    }

    #[test]
    fn collects_every_problem() {
        let err = DailyRecord::new(
            dates(3),
            vec![0.0; 3],
            vec![1.0, f64::NAN, 3.0],
            vec![SimulatedSeries::new("hbv", vec![1.0; 2])],
        )
        .unwrap_err();
        match err {
            IoError::Validation { count, details } => {
                assert_eq!(count, 2);
                assert!(details.contains("hbv length 2"));
                assert!(details.contains("non-finite observed at index 1"));
            }
            other => panic!("expected IoError::Validation, got {other:?}"),
        }
    }

    #[test]
    fn requires_simulated_series() {
        assert!(DailyRecord::new(dates(2), vec![0.0; 2], vec![0.0; 2], vec![]).is_err());
    }
}
