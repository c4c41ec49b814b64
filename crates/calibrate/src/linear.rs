//! Linear regression with resampled-residual dressing.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::trace;

use crate::engine::{CalibrationEngine, CalibrationOutput, CalibrationRequest};
use crate::error::CalibrationError;

/// Minimum training pairs per lead.
pub const MIN_TRAINING_PAIRS: usize = 3;

/// Per-lead ordinary least squares `obs = a + b * sim`, dressed with
/// residuals drawn uniformly from the lead's training residuals.
///
/// Suited to streamflow, where errors are roughly additive.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearDressing;

impl LinearDressing {
    /// Creates the engine.
    pub fn new() -> Self {
        Self
    }
}

impl CalibrationEngine for LinearDressing {
    fn name(&self) -> &'static str {
        "linear-dressing"
    }

    fn calibrate(
        &self,
        request: &CalibrationRequest<'_>,
    ) -> Result<CalibrationOutput, CalibrationError> {
        let n_leads = request.n_leads();
        let n_occ = request.n_occurrences();
        let n_members = request.ensemble_size();

        let mut a = Vec::with_capacity(n_leads);
        let mut b = Vec::with_capacity(n_leads);
        let mut residuals = Vec::with_capacity(n_leads);

        for lead in 0..n_leads {
            let (obs, sim) = request.training_pairs(lead);
            if obs.len() < MIN_TRAINING_PAIRS {
                return Err(CalibrationError::InsufficientData {
                    lead: lead + 1,
                    n: obs.len(),
                    required: MIN_TRAINING_PAIRS,
                });
            }
            let (intercept, slope) = kairos_stats::linear_fit(&sim, &obs)
                .ok_or(CalibrationError::DegenerateSample { lead: lead + 1 })?;
            let r: Vec<f64> = obs
                .iter()
                .zip(&sim)
                .map(|(o, s)| o - (intercept + slope * s))
                .collect();
            trace!(lead = lead + 1, intercept, slope, "fitted lead");
            a.push(intercept);
            b.push(slope);
            residuals.push(r);
        }

        let mut rng = StdRng::seed_from_u64(request.seed());
        let mut obs_aligned = Vec::with_capacity(n_occ * n_leads);
        let mut sim_aligned = Vec::with_capacity(n_occ * n_leads);
        let mut realizations = Vec::with_capacity(n_occ * n_leads * n_members);

        for occ in 0..n_occ {
            for lead in 0..n_leads {
                let x = request.simulated_target(lead, occ);
                let fitted = a[lead] + b[lead] * x;
                obs_aligned.push(request.observed_target(lead, occ));
                sim_aligned.push(fitted);

                let r = &residuals[lead];
                for _ in 0..n_members {
                    realizations.push(fitted + r[rng.random_range(0..r.len())]);
                }
            }
        }

        Ok(CalibrationOutput::new(
            n_leads,
            n_members,
            obs_aligned,
            sim_aligned,
            realizations,
            a,
            b,
        ))
    }
}
