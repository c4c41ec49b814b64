//! Pipeline configuration.

use kairos_calendar::YearRange;
use kairos_events::LeadSpans;
use kairos_window::WindowConfig;

use crate::error::PipelineError;

/// Settings shared by every model of a run.
///
/// # Example
///
/// ```
/// use kairos_calendar::YearRange;
/// use kairos_events::LeadSpans;
/// use kairos_pipeline::PipelineConfig;
///
/// let config = PipelineConfig::new(
///     LeadSpans::single_day(7).unwrap(),
///     YearRange::exclusive(1981, 2001).unwrap(),
///     YearRange::inclusive(2001, 2010).unwrap(),
/// )
/// .with_ensemble_size(50)
/// .with_fit_years(20)
/// .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    window: WindowConfig,
    spans: LeadSpans,
    ensemble_size: usize,
    fit_years: usize,
    calibration: YearRange,
    verification: YearRange,
    models: Vec<String>,
    seed: u64,
    parallel: bool,
}

impl PipelineConfig {
    /// Creates a configuration with the default window, 50 members, 20 fit
    /// years, seed 0, all models and parallel fan-out.
    pub fn new(spans: LeadSpans, calibration: YearRange, verification: YearRange) -> Self {
        Self {
            window: WindowConfig::new(),
            spans,
            ensemble_size: 50,
            fit_years: 20,
            calibration,
            verification,
            models: Vec::new(),
            seed: 0,
            parallel: true,
        }
    }

    /// Sets the window geometry.
    pub fn with_window(mut self, window: WindowConfig) -> Self {
        self.window = window;
        self
    }

    /// Sets the number of ensemble members.
    pub fn with_ensemble_size(mut self, n: usize) -> Self {
        self.ensemble_size = n;
        self
    }

    /// Sets how many leading occurrences are used to fit.
    pub fn with_fit_years(mut self, n: usize) -> Self {
        self.fit_years = n;
        self
    }

    /// Restricts the run to the given model ids. Empty means all.
    pub fn with_models(mut self, models: Vec<String>) -> Self {
        self.models = models;
        self
    }

    /// Sets the global seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Enables or disables the parallel fan-out over calendar pairs.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Window geometry.
    pub fn window(&self) -> &WindowConfig {
        &self.window
    }

    /// Lead-time spans, one per lead.
    pub fn spans(&self) -> &LeadSpans {
        &self.spans
    }

    /// Members per ensemble.
    pub fn ensemble_size(&self) -> usize {
        self.ensemble_size
    }

    /// Occurrences used to fit each pair, oldest first.
    pub fn fit_years(&self) -> usize {
        self.fit_years
    }

    /// Years whose occurrences may enter training windows.
    pub fn calibration(&self) -> &YearRange {
        &self.calibration
    }

    /// Years whose issue days are verified and reported.
    pub fn verification(&self) -> &YearRange {
        &self.verification
    }

    /// Selected model ids; empty means every model in the record.
    pub fn models(&self) -> &[String] {
        &self.models
    }

    /// Global seed from which each pair's seed is derived.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Whether calendar pairs fan out over the rayon pool.
    pub fn parallel(&self) -> bool {
        self.parallel
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::InvalidConfig`] for a zero ensemble size or
    /// fit-year count, and [`PipelineError::Window`] if the window cannot
    /// hold the leads.
    pub fn validate(&self) -> Result<(), PipelineError> {
        if self.ensemble_size == 0 {
            return Err(PipelineError::InvalidConfig {
                reason: "ensemble_size must be at least 1".to_string(),
            });
        }
        if self.fit_years == 0 {
            return Err(PipelineError::InvalidConfig {
                reason: "fit_years must be at least 1".to_string(),
            });
        }
        self.window.validate(self.spans.len())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> PipelineConfig {
        PipelineConfig::new(
            LeadSpans::single_day(3).unwrap(),
            YearRange::exclusive(2000, 2005).unwrap(),
            YearRange::inclusive(2005, 2006).unwrap(),
        )
    }

    #[test]
    fn defaults() {
        let c = config();
        assert_eq!(c.ensemble_size(), 50);
        assert_eq!(c.fit_years(), 20);
        assert!(c.parallel());
        assert!(c.models().is_empty());
        assert!(c.validate().is_ok());
    }

    #[test]
    fn zero_members_rejected() {
        assert!(matches!(
            config().with_ensemble_size(0).validate(),
            Err(PipelineError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn leads_beyond_horizon_rejected() {
        let c = config().with_window(WindowConfig::new().with_forecast_len(2));
        assert!(matches!(c.validate(), Err(PipelineError::Window(_))));
    }
}
