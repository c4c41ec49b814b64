//! Calibration engine contract: request, output and trait.

use kairos_calendar::MonthDay;
use kairos_window::CalendarWindows;

use crate::error::CalibrationError;

/// Inputs for calibrating one calendar pair.
///
/// Borrows the pair's training windows; engines never mutate them.
#[derive(Debug, Clone, Copy)]
pub struct CalibrationRequest<'a> {
    windows: &'a CalendarWindows,
    fit_years: usize,
    ensemble_size: usize,
    seed: u64,
}

impl<'a> CalibrationRequest<'a> {
    /// Creates a request.
    ///
    /// # Errors
    ///
    /// Returns [`CalibrationError::InvalidConfig`] if `fit_years` or
    /// `ensemble_size` is zero.
    pub fn new(
        windows: &'a CalendarWindows,
        fit_years: usize,
        ensemble_size: usize,
        seed: u64,
    ) -> Result<Self, CalibrationError> {
        if fit_years == 0 {
            return Err(CalibrationError::InvalidConfig {
                reason: "fit_years must be at least 1".to_string(),
            });
        }
        if ensemble_size == 0 {
            return Err(CalibrationError::InvalidConfig {
                reason: "ensemble_size must be at least 1".to_string(),
            });
        }
        Ok(Self {
            windows,
            fit_years,
            ensemble_size,
            seed,
        })
    }

    /// Training windows of the calendar pair.
    pub fn windows(&self) -> &'a CalendarWindows {
        self.windows
    }

    /// Calendar pair being calibrated.
    pub fn month_day(&self) -> MonthDay {
        self.windows.month_day()
    }

    /// Requested number of fit occurrences.
    pub fn fit_years(&self) -> usize {
        self.fit_years
    }

    /// Number of occurrences actually used for fitting: the first
    /// `min(fit_years, n_occurrences)` in chronological order.
    pub fn n_fit(&self) -> usize {
        self.fit_years.min(self.windows.n_occurrences())
    }

    /// Ensemble members to draw per lead and occurrence.
    pub fn ensemble_size(&self) -> usize {
        self.ensemble_size
    }

    /// Seed for this pair.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of leads.
    pub fn n_leads(&self) -> usize {
        self.windows.n_leads()
    }

    /// Number of occurrences.
    pub fn n_occurrences(&self) -> usize {
        self.windows.n_occurrences()
    }

    /// Window offset targeted by lead `lead` (0-based).
    pub fn target_offset(&self, lead: usize) -> usize {
        self.windows.target_offset() + lead
    }

    /// Pooled `(observed, simulated)` training values of `lead` over the fit
    /// occurrences.
    pub fn training_pairs(&self, lead: usize) -> (Vec<f64>, Vec<f64>) {
        let n = self.n_fit() * self.windows.ndays();
        let mut obs = Vec::with_capacity(n);
        let mut sim = Vec::with_capacity(n);
        for occ in 0..self.n_fit() {
            obs.extend_from_slice(self.windows.observed_lead(lead, occ));
            sim.extend_from_slice(self.windows.simulated_lead(lead, occ));
        }
        (obs, sim)
    }

    /// Observed value of `lead` at its target for occurrence `occ`.
    pub fn observed_target(&self, lead: usize, occ: usize) -> f64 {
        self.windows.observed_lead(lead, occ)[self.target_offset(lead)]
    }

    /// Simulated value of `lead` at its target for occurrence `occ`.
    pub fn simulated_target(&self, lead: usize, occ: usize) -> f64 {
        self.windows.simulated_lead(lead, occ)[self.target_offset(lead)]
    }
}

/// Result of calibrating one calendar pair.
///
/// Buffers are flat: `obs_aligned` and `sim_aligned` are `[occ][lead]`,
/// `realizations` is `[occ][lead][member]`.
#[derive(Debug, Clone, PartialEq)]
pub struct CalibrationOutput {
    n_leads: usize,
    n_members: usize,
    obs_aligned: Vec<f64>,
    sim_aligned: Vec<f64>,
    realizations: Vec<f64>,
    a: Vec<f64>,
    b: Vec<f64>,
}

impl CalibrationOutput {
    /// Assembles an output from its buffers. Shapes are checked by
    /// [`Self::validate`].
    pub fn new(
        n_leads: usize,
        n_members: usize,
        obs_aligned: Vec<f64>,
        sim_aligned: Vec<f64>,
        realizations: Vec<f64>,
        a: Vec<f64>,
        b: Vec<f64>,
    ) -> Self {
        Self {
            n_leads,
            n_members,
            obs_aligned,
            sim_aligned,
            realizations,
            a,
            b,
        }
    }

    /// Checks every buffer against the expected shape.
    ///
    /// # Errors
    ///
    /// Returns [`CalibrationError::ShapeMismatch`] naming the first
    /// mis-shaped field.
    pub fn validate(
        &self,
        n_occurrences: usize,
        n_leads: usize,
        n_members: usize,
    ) -> Result<(), CalibrationError> {
        let checks = [
            ("n_leads", self.n_leads, n_leads),
            ("n_members", self.n_members, n_members),
            ("a", self.a.len(), n_leads),
            ("b", self.b.len(), n_leads),
            ("obs_aligned", self.obs_aligned.len(), n_occurrences * n_leads),
            ("sim_aligned", self.sim_aligned.len(), n_occurrences * n_leads),
            (
                "realizations",
                self.realizations.len(),
                n_occurrences * n_leads * n_members,
            ),
        ];
        for (field, got, expected) in checks {
            if got != expected {
                return Err(CalibrationError::ShapeMismatch {
                    field,
                    expected,
                    got,
                });
            }
        }
        Ok(())
    }

    /// Number of leads.
    pub fn n_leads(&self) -> usize {
        self.n_leads
    }

    /// Members per lead and occurrence.
    pub fn n_members(&self) -> usize {
        self.n_members
    }

    /// Number of occurrences covered.
    pub fn n_occurrences(&self) -> usize {
        if self.n_leads == 0 {
            0
        } else {
            self.obs_aligned.len() / self.n_leads
        }
    }

    /// Intercepts, one per lead.
    pub fn a(&self) -> &[f64] {
        &self.a
    }

    /// Slopes, one per lead.
    pub fn b(&self) -> &[f64] {
        &self.b
    }

    /// Observed target values of occurrence `occ`, one per lead.
    pub fn obs_aligned(&self, occ: usize) -> &[f64] {
        &self.obs_aligned[occ * self.n_leads..(occ + 1) * self.n_leads]
    }

    /// Calibrated deterministic simulation of occurrence `occ`, one per lead.
    pub fn sim_aligned(&self, occ: usize) -> &[f64] {
        &self.sim_aligned[occ * self.n_leads..(occ + 1) * self.n_leads]
    }

    /// All members of occurrence `occ`, `[lead][member]`.
    pub fn realizations(&self, occ: usize) -> &[f64] {
        let stride = self.n_leads * self.n_members;
        &self.realizations[occ * stride..(occ + 1) * stride]
    }

    /// Members of occurrence `occ` at lead `lead`.
    pub fn members(&self, occ: usize, lead: usize) -> &[f64] {
        let start = (occ * self.n_leads + lead) * self.n_members;
        &self.realizations[start..start + self.n_members]
    }
}

/// A calibration method fitted per calendar pair.
///
/// Implementations must be deterministic for a fixed request seed and must
/// produce exactly `ensemble_size` members per lead and occurrence.
pub trait CalibrationEngine: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Fits the pair's windows and draws realizations for every occurrence.
    fn calibrate(
        &self,
        request: &CalibrationRequest<'_>,
    ) -> Result<CalibrationOutput, CalibrationError>;
}

/// Derives the seed of one calendar pair from the global run seed.
pub fn pair_seed(global: u64, month_day: MonthDay) -> u64 {
    global ^ u64::from(month_day.ordinal()).wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(n_occ: usize, n_leads: usize, n_members: usize) -> CalibrationOutput {
        CalibrationOutput::new(
            n_leads,
            n_members,
            vec![0.0; n_occ * n_leads],
            vec![0.0; n_occ * n_leads],
            (0..n_occ * n_leads * n_members).map(|v| v as f64).collect(),
            vec![0.0; n_leads],
            vec![1.0; n_leads],
        )
    }

    #[test]
    fn validate_accepts_matching_shape() {
        assert!(output(3, 2, 4).validate(3, 2, 4).is_ok());
    }

    #[test]
    fn validate_rejects_member_count() {
        let err = output(3, 2, 4).validate(3, 2, 5).unwrap_err();
        assert_eq!(
            err,
            CalibrationError::ShapeMismatch {
                field: "n_members",
                expected: 5,
                got: 4,
            }
        );
    }

    #[test]
    fn members_are_lead_major_within_occurrence() {
        let out = output(2, 3, 2);
        assert_eq!(out.n_occurrences(), 2);
        assert_eq!(out.members(0, 0), &[0.0, 1.0]);
        assert_eq!(out.members(1, 2), &[10.0, 11.0]);
        assert_eq!(out.realizations(1).len(), 6);
    }

    #[test]
    fn pair_seeds_differ_across_pairs() {
        let a = pair_seed(42, MonthDay::new(1, 1).unwrap());
        let b = pair_seed(42, MonthDay::new(1, 2).unwrap());
        assert_ne!(a, b);
        assert_eq!(a, pair_seed(42, MonthDay::new(1, 1).unwrap()));
    }
}
