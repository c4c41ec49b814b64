//! Meta-Gaussian calibration for intermittent series (precipitation).
//!
//! Observed and simulated values of each lead are mapped to standard-normal
//! scores through mixed zero/Gamma marginals. A linear regression in normal
//! space gives the conditional distribution of the observed score, which is
//! sampled and mapped back through the observed marginal.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::{Distribution, StandardNormal};
use statrs::distribution::{ContinuousCDF, Normal};
use tracing::trace;

use crate::engine::{CalibrationEngine, CalibrationOutput, CalibrationRequest};
use crate::error::CalibrationError;
use crate::gamma::MixedMarginal;

// Bounds on probabilities fed to the normal quantile function.
const PROB_EPS: f64 = 1e-6;

/// Configuration for [`MetaGaussian`].
///
/// # Example
///
/// ```
/// use kairos_calibrate::MetaGaussianConfig;
///
/// let config = MetaGaussianConfig::new()
///     .with_wet_threshold(0.1)
///     .with_min_wet_values(20);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetaGaussianConfig {
    wet_threshold: f64,
    min_wet_values: usize,
}

impl Default for MetaGaussianConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl MetaGaussianConfig {
    /// Defaults: `wet_threshold = 0.1`, `min_wet_values = 10`.
    pub fn new() -> Self {
        Self {
            wet_threshold: 0.1,
            min_wet_values: 10,
        }
    }

    /// Sets the value above which a day counts as wet.
    pub fn with_wet_threshold(mut self, v: f64) -> Self {
        self.wet_threshold = v;
        self
    }

    /// Sets the minimum number of wet training values per marginal.
    pub fn with_min_wet_values(mut self, n: usize) -> Self {
        self.min_wet_values = n;
        self
    }

    /// Wet-day threshold.
    pub fn wet_threshold(&self) -> f64 {
        self.wet_threshold
    }

    /// Minimum wet values per marginal.
    pub fn min_wet_values(&self) -> usize {
        self.min_wet_values
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`CalibrationError::InvalidConfig`] for a negative or
    /// non-finite threshold, or fewer than 3 required wet values.
    pub fn validate(&self) -> Result<(), CalibrationError> {
        if !self.wet_threshold.is_finite() || self.wet_threshold < 0.0 {
            return Err(CalibrationError::InvalidConfig {
                reason: format!(
                    "wet_threshold must be finite and >= 0, got {}",
                    self.wet_threshold
                ),
            });
        }
        if self.min_wet_values < 3 {
            return Err(CalibrationError::InvalidConfig {
                reason: format!(
                    "min_wet_values must be at least 3, got {}",
                    self.min_wet_values
                ),
            });
        }
        Ok(())
    }
}

/// Meta-Gaussian engine.
#[derive(Debug, Clone)]
pub struct MetaGaussian {
    config: MetaGaussianConfig,
}

impl MetaGaussian {
    /// Creates the engine after validating `config`.
    ///
    /// # Errors
    ///
    /// Propagates [`MetaGaussianConfig::validate`] failures.
    pub fn new(config: MetaGaussianConfig) -> Result<Self, CalibrationError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Engine configuration.
    pub fn config(&self) -> &MetaGaussianConfig {
        &self.config
    }
}

struct LeadModel {
    obs: MixedMarginal,
    sim: MixedMarginal,
    a: f64,
    b: f64,
    sigma: f64,
}

impl MetaGaussian {
    fn fit_lead(
        &self,
        request: &CalibrationRequest<'_>,
        lead: usize,
        normal: &Normal,
    ) -> Result<LeadModel, CalibrationError> {
        let (obs, sim) = request.training_pairs(lead);
        let threshold = self.config.wet_threshold;
        let min_wet = self.config.min_wet_values;
        let obs_m = MixedMarginal::fit(&obs, threshold, min_wet, lead, "observed")?;
        let sim_m = MixedMarginal::fit(&sim, threshold, min_wet, lead, "simulated")?;

        let z_obs: Vec<f64> = obs.iter().map(|&v| score(&obs_m, normal, v)).collect();
        let z_sim: Vec<f64> = sim.iter().map(|&v| score(&sim_m, normal, v)).collect();

        let (a, b) = kairos_stats::linear_fit(&z_sim, &z_obs)
            .ok_or(CalibrationError::DegenerateSample { lead: lead + 1 })?;
        let residuals: Vec<f64> = z_obs
            .iter()
            .zip(&z_sim)
            .map(|(o, s)| o - (a + b * s))
            .collect();
        let sigma = kairos_stats::sd(&residuals);
        trace!(lead = lead + 1, a, b, sigma, "fitted lead in normal space");

        Ok(LeadModel {
            obs: obs_m,
            sim: sim_m,
            a,
            b,
            sigma,
        })
    }
}

fn score(marginal: &MixedMarginal, normal: &Normal, x: f64) -> f64 {
    normal.inverse_cdf(marginal.cdf(x).clamp(PROB_EPS, 1.0 - PROB_EPS))
}

impl CalibrationEngine for MetaGaussian {
    fn name(&self) -> &'static str {
        "meta-gaussian"
    }

    fn calibrate(
        &self,
        request: &CalibrationRequest<'_>,
    ) -> Result<CalibrationOutput, CalibrationError> {
        let normal = Normal::new(0.0, 1.0).map_err(|e| CalibrationError::Distribution {
            message: e.to_string(),
        })?;
        let n_leads = request.n_leads();
        let n_occ = request.n_occurrences();
        let n_members = request.ensemble_size();

        let models = (0..n_leads)
            .map(|lead| self.fit_lead(request, lead, &normal))
            .collect::<Result<Vec<_>, _>>()?;

        let mut rng = StdRng::seed_from_u64(request.seed());
        let mut obs_aligned = Vec::with_capacity(n_occ * n_leads);
        let mut sim_aligned = Vec::with_capacity(n_occ * n_leads);
        let mut realizations = Vec::with_capacity(n_occ * n_leads * n_members);

        for occ in 0..n_occ {
            for (lead, m) in models.iter().enumerate() {
                let z_x = score(&m.sim, &normal, request.simulated_target(lead, occ));
                let center = m.a + m.b * z_x;
                obs_aligned.push(request.observed_target(lead, occ));
                sim_aligned.push(m.obs.quantile(normal.cdf(center)));

                for _ in 0..n_members {
                    let eps: f64 = StandardNormal.sample(&mut rng);
                    let z = center + m.sigma * eps;
                    realizations.push(m.obs.quantile(normal.cdf(z)));
                }
            }
        }

        Ok(CalibrationOutput::new(
            n_leads,
            n_members,
            obs_aligned,
            sim_aligned,
            realizations,
            models.iter().map(|m| m.a).collect(),
            models.iter().map(|m| m.b).collect(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(MetaGaussianConfig::default().validate().is_ok());
    }

    #[test]
    fn negative_threshold_rejected() {
        let err = MetaGaussian::new(MetaGaussianConfig::new().with_wet_threshold(-1.0)).unwrap_err();
        assert!(matches!(err, CalibrationError::InvalidConfig { .. }));
    }

    #[test]
    fn too_few_required_wet_values_rejected() {
        assert!(
            MetaGaussianConfig::new()
                .with_min_wet_values(2)
                .validate()
                .is_err()
        );
    }
}
