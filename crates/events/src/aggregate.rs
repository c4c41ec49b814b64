//! Canonical event aggregation.

use crate::lead::LeadSpans;

/// Rolling lead-time aggregates of a daily series.
///
/// Stored lead-major in one contiguous buffer: lead `j` occupies
/// `values[j * len .. (j + 1) * len]`.
#[derive(Debug, Clone, PartialEq)]
pub struct EventMatrix {
    n_leads: usize,
    len: usize,
    values: Vec<f64>,
}

impl EventMatrix {
    /// Number of leads.
    pub fn n_leads(&self) -> usize {
        self.n_leads
    }

    /// Record length (number of days).
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the underlying series was empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Aggregates of lead `j` (0-based) for every day of the record.
    ///
    /// # Panics
    ///
    /// Panics if `lead >= n_leads`.
    pub fn lead(&self, lead: usize) -> &[f64] {
        assert!(lead < self.n_leads, "lead {lead} out of range");
        &self.values[lead * self.len..(lead + 1) * self.len]
    }

    /// Aggregate of lead `j` at day `t`.
    ///
    /// # Panics
    ///
    /// Panics if `lead >= n_leads` or `t >= len`.
    pub fn at(&self, lead: usize, t: usize) -> f64 {
        self.lead(lead)[t]
    }

    /// Aggregate of lead `j` at `t`, with `t` clamped into the record.
    pub fn at_clamped(&self, lead: usize, t: isize) -> f64 {
        let last = self.len.saturating_sub(1) as isize;
        self.at(lead, t.clamp(0, last) as usize)
    }
}

/// Aggregates `series` into one rolling-mean row per lead.
///
/// For each lead with span `(begin, end)` and each day `t`, the result is the
/// mean of `series[t..=k]` with `k = min(t + end - begin, N - 1)`.
pub fn aggregate(series: &[f64], spans: &LeadSpans) -> EventMatrix {
    let n = series.len();
    let mut values = Vec::with_capacity(n * spans.len());
    for span in spans.iter() {
        let width = span.width();
        if width == 0 {
            values.extend_from_slice(series);
            continue;
        }
        for t in 0..n {
            let days = &series[t..=(t + width).min(n - 1)];
            values.push(days.iter().sum::<f64>() / days.len() as f64);
        }
    }

    EventMatrix {
        n_leads: spans.len(),
        len: n,
        values,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn single_day_is_identity() {
        let series = [1.0, 4.0, 2.0, 8.0];
        let spans = LeadSpans::single_day(2).unwrap();
        let m = aggregate(&series, &spans);
        assert_eq!(m.lead(0), &series);
        assert_eq!(m.lead(1), &series);
    }

    #[test]
    fn three_day_mean_clipped_at_end() {
        let series = [1.0, 2.0, 3.0, 4.0, 5.0];
        let spans = LeadSpans::new(&[(2, 4)]).unwrap();
        let m = aggregate(&series, &spans);
        assert_relative_eq!(m.at(0, 0), 2.0);
        assert_relative_eq!(m.at(0, 2), 4.0);
        // t=3: k clamps to 4 -> mean(4, 5)
        assert_relative_eq!(m.at(0, 3), 4.5);
        // t=4: single value
        assert_relative_eq!(m.at(0, 4), 5.0);
    }

    #[test]
    fn constant_series_gives_constant_rows() {
        let series = [0.1; 1000];
        let spans = LeadSpans::new(&[(1, 3), (2, 8)]).unwrap();
        let m = aggregate(&series, &spans);
        for lead in 0..2 {
            let row = m.lead(lead);
            // same days summed in the same order: bit-identical away from the end
            assert!(row[..990].iter().all(|&v| v == row[0]));
            for &v in row {
                assert_relative_eq!(v, 0.1, epsilon = 1e-15);
            }
        }
    }

    #[test]
    fn empty_series() {
        let spans = LeadSpans::single_day(3).unwrap();
        let m = aggregate(&[], &spans);
        assert!(m.is_empty());
        assert_eq!(m.n_leads(), 3);
        assert!(m.lead(2).is_empty());
    }

    #[test]
    fn at_clamped_saturates() {
        let series = [1.0, 2.0, 3.0];
        let spans = LeadSpans::single_day(1).unwrap();
        let m = aggregate(&series, &spans);
        assert_eq!(m.at_clamped(0, -4), 1.0);
        assert_eq!(m.at_clamped(0, 10), 3.0);
    }

    #[test]
    #[should_panic(expected = "lead 1 out of range")]
    fn lead_out_of_range_panics() {
        let spans = LeadSpans::single_day(1).unwrap();
        aggregate(&[1.0], &spans).lead(1);
    }
}
