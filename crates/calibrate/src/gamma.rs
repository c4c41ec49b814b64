//! Mixed zero/Gamma marginal distributions for precipitation.

use statrs::distribution::{ContinuousCDF, Gamma};

use crate::error::CalibrationError;

/// Validated Gamma parameters (shape/scale convention).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GammaParams {
    shape: f64,
    scale: f64,
}

impl GammaParams {
    /// Returns `None` unless both parameters are finite and positive.
    pub fn new(shape: f64, scale: f64) -> Option<Self> {
        if shape.is_finite() && shape > 0.0 && scale.is_finite() && scale > 0.0 {
            Some(Self { shape, scale })
        } else {
            None
        }
    }

    /// Method-of-moments estimate: `shape = mean² / var`, `scale = var / mean`.
    pub fn from_moments(mean: f64, var: f64) -> Option<Self> {
        if !mean.is_finite() || mean <= 0.0 || !var.is_finite() || var <= 0.0 {
            return None;
        }
        Self::new(mean * mean / var, var / mean)
    }

    /// Shape parameter (k).
    pub fn shape(&self) -> f64 {
        self.shape
    }

    /// Scale parameter (theta).
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// statrs parameterises Gamma by rate.
    fn rate(&self) -> f64 {
        1.0 / self.scale
    }
}

/// Fits a Gamma distribution to wet values by the method of moments.
///
/// Returns `None` for fewer than 3 distinct values or a near-zero variance.
pub(crate) fn fit_gamma_mme(values: &[f64]) -> Option<GammaParams> {
    if count_unique(values) < 3 {
        return None;
    }
    let variance = kairos_stats::variance(values);
    if variance <= 1e-10 {
        return None;
    }
    GammaParams::from_moments(kairos_stats::mean(values), variance)
}

fn count_unique(values: &[f64]) -> usize {
    if values.is_empty() {
        return 0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted
        .windows(2)
        .filter(|w| (w[1] - w[0]).abs() > 1e-10)
        .count()
        + 1
}

// Keeps inverse_cdf away from the infinite tail.
const MAX_PROB: f64 = 1.0 - 1e-10;

/// Marginal with a point mass of dry values and a Gamma body for wet values.
///
/// `F(x) = p_dry + (1 - p_dry) G(x)` for wet `x`; a dry value maps to the
/// middle of the dry mass, `p_dry / 2`.
#[derive(Debug, Clone)]
pub struct MixedMarginal {
    p_dry: f64,
    threshold: f64,
    params: GammaParams,
    dist: Gamma,
}

impl MixedMarginal {
    /// Fits the marginal of `values` with wet meaning `> threshold`.
    ///
    /// # Errors
    ///
    /// Returns [`CalibrationError::InsufficientWetDays`] if fewer than
    /// `min_wet` values are wet, [`CalibrationError::GammaFit`] if the wet
    /// values admit no Gamma fit.
    pub fn fit(
        values: &[f64],
        threshold: f64,
        min_wet: usize,
        lead: usize,
        series: &'static str,
    ) -> Result<Self, CalibrationError> {
        let wet: Vec<f64> = values.iter().copied().filter(|&v| v > threshold).collect();
        if wet.len() < min_wet.max(1) {
            return Err(CalibrationError::InsufficientWetDays {
                lead: lead + 1,
                series,
                n: wet.len(),
                required: min_wet.max(1),
            });
        }
        let params = fit_gamma_mme(&wet).ok_or(CalibrationError::GammaFit {
            lead: lead + 1,
            series,
        })?;
        let dist = Gamma::new(params.shape(), params.rate()).map_err(|e| {
            CalibrationError::Distribution {
                message: e.to_string(),
            }
        })?;
        Ok(Self {
            p_dry: (values.len() - wet.len()) as f64 / values.len() as f64,
            threshold,
            params,
            dist,
        })
    }

    /// Probability of a dry value.
    pub fn p_dry(&self) -> f64 {
        self.p_dry
    }

    /// Fitted Gamma body.
    pub fn params(&self) -> GammaParams {
        self.params
    }

    /// Non-exceedance probability of `x`.
    pub fn cdf(&self, x: f64) -> f64 {
        if x <= self.threshold {
            self.p_dry / 2.0
        } else {
            self.p_dry + (1.0 - self.p_dry) * self.dist.cdf(x)
        }
    }

    /// Value at non-exceedance probability `p`; zero inside the dry mass.
    pub fn quantile(&self, p: f64) -> f64 {
        if p <= self.p_dry {
            return 0.0;
        }
        let q = ((p - self.p_dry) / (1.0 - self.p_dry)).clamp(0.0, MAX_PROB);
        self.dist.inverse_cdf(q)
    }
}
