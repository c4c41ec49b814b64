//! Calibrated deterministic simulation, `[t][lead]`.

use kairos_events::EventMatrix;

use crate::error::EnsembleError;
use crate::{check_scatter, lead_target};

/// Calibrated simulation for every issue day and lead.
///
/// Default-filled and scattered exactly like [`crate::EnsembleArray`], with a
/// single value per cell.
#[derive(Debug, Clone, PartialEq)]
pub struct CalibratedSeries {
    len: usize,
    n_leads: usize,
    values: Vec<f64>,
    touched: Vec<bool>,
}

impl CalibratedSeries {
    /// Default-fills each cell with the raw simulated event at the lead's
    /// target.
    pub fn from_simulation(sim_agg: &EventMatrix) -> Self {
        let len = sim_agg.len();
        let n_leads = sim_agg.n_leads();
        let values = (0..len)
            .flat_map(|t| (0..n_leads).map(move |lead| lead_target(sim_agg, lead, t)))
            .collect();
        Self {
            len,
            n_leads,
            values,
            touched: vec![false; len],
        }
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

    /// Value of issue day `t` at `lead`.
    pub fn value(&self, t: usize, lead: usize) -> f64 {
        self.values[t * self.n_leads + lead]
    }

    /// All leads of issue day `t`.
    pub fn row(&self, t: usize) -> &[f64] {
        &self.values[t * self.n_leads..(t + 1) * self.n_leads]
    }

    /// Whether any scatter has written issue day `t`.
    pub fn is_touched(&self, t: usize) -> bool {
        self.touched[t]
    }

    /// Copies `values` (`[occ][lead]`) into the issue days `targets[occ]`.
    ///
    /// Returns the number of occurrences that overwrote an already written day.
    ///
    /// # Errors
    ///
    /// Returns [`EnsembleError::ShapeMismatch`] or
    /// [`EnsembleError::TargetOutOfRange`]; the series is left unchanged.
    pub fn scatter(&mut self, targets: &[usize], values: &[f64]) -> Result<usize, EnsembleError> {
        let stride = self.n_leads;
        check_scatter(targets, self.len, values.len(), stride, "calibrated")?;

        let mut overlaps = 0;
        for (occ, &t) in targets.iter().enumerate() {
            if self.touched[t] {
                overlaps += 1;
            }
            self.values[t * stride..(t + 1) * stride]
                .copy_from_slice(&values[occ * stride..(occ + 1) * stride]);
            self.touched[t] = true;
        }
        Ok(overlaps)
    }
}
