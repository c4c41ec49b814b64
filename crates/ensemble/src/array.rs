//! Flat `[t][lead][member]` ensemble array.

use kairos_events::EventMatrix;

use crate::error::EnsembleError;
use crate::{check_scatter, lead_target};

/// Ensemble members for every issue day and lead of the record.
#[derive(Debug, Clone, PartialEq)]
pub struct EnsembleArray {
    len: usize,
    n_leads: usize,
    n_members: usize,
    values: Vec<f64>,
    touched: Vec<bool>,
}

impl EnsembleArray {
    /// Default-fills every member of `Ens[t][lead]` with the raw simulated
    /// event at the lead's target.
    ///
    /// # Errors
    ///
    /// Returns [`EnsembleError::NoMembers`] if `n_members` is zero.
    pub fn from_simulation(sim_agg: &EventMatrix, n_members: usize) -> Result<Self, EnsembleError> {
        if n_members == 0 {
            return Err(EnsembleError::NoMembers);
        }
        let len = sim_agg.len();
        let n_leads = sim_agg.n_leads();
        let mut values = Vec::with_capacity(len * n_leads * n_members);
        for t in 0..len {
            for lead in 0..n_leads {
                let v = lead_target(sim_agg, lead, t);
                values.extend(std::iter::repeat_n(v, n_members));
            }
        }
        Ok(Self {
            len,
            n_leads,
            n_members,
            values,
            touched: vec![false; len],
        })
    }

    /// Record length.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` for an empty record.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of leads.
    pub fn n_leads(&self) -> usize {
        self.n_leads
    }

    /// Members per cell.
    pub fn n_members(&self) -> usize {
        self.n_members
    }

    /// Members of issue day `t` at `lead`.
    pub fn members(&self, t: usize, lead: usize) -> &[f64] {
        let start = (t * self.n_leads + lead) * self.n_members;
        &self.values[start..start + self.n_members]
    }

    /// Ensemble mean of a cell.
    pub fn mean(&self, t: usize, lead: usize) -> f64 {
        kairos_stats::mean(self.members(t, lead))
    }

    /// Largest member of a cell.
    pub fn max(&self, t: usize, lead: usize) -> f64 {
        self.members(t, lead)
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Smallest member of a cell.
    pub fn min(&self, t: usize, lead: usize) -> f64 {
        self.members(t, lead)
            .iter()
            .copied()
            .fold(f64::INFINITY, f64::min)
    }

    /// Whether any scatter has written issue day `t`.
    pub fn is_touched(&self, t: usize) -> bool {
        self.touched[t]
    }

    /// Number of issue days written by scatters.
    pub fn n_touched(&self) -> usize {
        self.touched.iter().filter(|&&b| b).count()
    }

    /// Copies `realizations` (`[occ][lead][member]`) of each occurrence into
    /// the issue day `targets[occ]`.
    ///
    /// Returns the number of occurrences that overwrote a day already written
    /// by an earlier scatter.
    ///
    /// # Errors
    ///
    /// Returns [`EnsembleError::ShapeMismatch`] or
    /// [`EnsembleError::TargetOutOfRange`]; the array is left unchanged.
    pub fn scatter(&mut self, targets: &[usize], realizations: &[f64]) -> Result<usize, EnsembleError> {
        let stride = self.n_leads * self.n_members;
        check_scatter(targets, self.len, realizations.len(), stride, "realizations")?;

        let mut overlaps = 0;
        for (occ, &t) in targets.iter().enumerate() {
            if self.touched[t] {
                overlaps += 1;
            }
            self.values[t * stride..(t + 1) * stride]
                .copy_from_slice(&realizations[occ * stride..(occ + 1) * stride]);
            self.touched[t] = true;
        }
        Ok(overlaps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use kairos_events::{LeadSpans, aggregate};

    fn sim_agg() -> EventMatrix {
        aggregate(&[1.0, 2.0, 3.0, 4.0, 5.0], &LeadSpans::single_day(2).unwrap())
    }

    #[test]
    fn default_fill_uses_lead_target() {
        let ens = EnsembleArray::from_simulation(&sim_agg(), 3).unwrap();
        assert_eq!(ens.members(0, 0), &[1.0, 1.0, 1.0]);
        assert_eq!(ens.members(0, 1), &[2.0, 2.0, 2.0]);
        // clamped at the record end
        assert_eq!(ens.members(4, 1), &[5.0, 5.0, 5.0]);
        assert_eq!(ens.n_touched(), 0);
    }

    #[test]
    fn zero_members_rejected() {
        assert_eq!(
            EnsembleArray::from_simulation(&sim_agg(), 0).unwrap_err(),
            EnsembleError::NoMembers
        );
    }

    #[test]
    fn scatter_overwrites_and_counts_overlap() {
        let mut ens = EnsembleArray::from_simulation(&sim_agg(), 2).unwrap();
        let first = ens.scatter(&[1, 3], &[10.0, 11.0, 12.0, 13.0, 30.0, 31.0, 32.0, 33.0]).unwrap();
        assert_eq!(first, 0);
        assert_eq!(ens.members(1, 1), &[12.0, 13.0]);
        assert!(ens.is_touched(3));
        assert!(!ens.is_touched(2));

        let second = ens.scatter(&[3], &[7.0, 7.0, 8.0, 8.0]).unwrap();
        assert_eq!(second, 1);
        assert_eq!(ens.members(3, 0), &[7.0, 7.0]);
    }

    #[test]
    fn summary_statistics() {
        let mut ens = EnsembleArray::from_simulation(&sim_agg(), 3).unwrap();
        ens.scatter(&[0], &[1.0, 2.0, 6.0, 0.0, 0.0, 0.0]).unwrap();
        assert_relative_eq!(ens.mean(0, 0), 3.0);
        assert_eq!(ens.max(0, 0), 6.0);
        assert_eq!(ens.min(0, 0), 1.0);
    }

    #[test]
    fn bad_scatter_leaves_array_unchanged() {
        let mut ens = EnsembleArray::from_simulation(&sim_agg(), 1).unwrap();
        let before = ens.clone();
        assert!(matches!(
            ens.scatter(&[9], &[0.0, 0.0]),
            Err(EnsembleError::TargetOutOfRange { target: 9, len: 5 })
        ));
        assert!(matches!(
            ens.scatter(&[0], &[0.0]),
            Err(EnsembleError::ShapeMismatch { .. })
        ));
        assert_eq!(ens, before);
    }
}
