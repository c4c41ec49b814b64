//! Window geometry configuration.

use crate::error::WindowError;

/// Lengths that define a calendar-day training window.
///
/// # Example
///
/// ```
/// use kairos_window::WindowConfig;
///
/// let config = WindowConfig::new()
///     .with_analysis_len(3)
///     .with_forecast_len(7)
///     .with_buffer_len(15);
/// assert_eq!(config.ndays(), 25);
/// assert_eq!(config.target_offset(), 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowConfig {
    analysis_len: usize,
    forecast_len: usize,
    buffer_len: usize,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowConfig {
    /// Creates a configuration with `analysis_len = 3`, `forecast_len = 7`,
    /// `buffer_len = 15`.
    pub fn new() -> Self {
        Self {
            analysis_len: 3,
            forecast_len: 7,
            buffer_len: 15,
        }
    }

    /// Sets the analysis-period length (days before the forecast issue day).
    pub fn with_analysis_len(mut self, v: usize) -> Self {
        self.analysis_len = v;
        self
    }

    /// Sets the forecast horizon length.
    pub fn with_forecast_len(mut self, v: usize) -> Self {
        self.forecast_len = v;
        self
    }

    /// Sets the seasonal buffer length, split around the window.
    pub fn with_buffer_len(mut self, v: usize) -> Self {
        self.buffer_len = v;
        self
    }

    /// Analysis-period length.
    pub fn analysis_len(&self) -> usize {
        self.analysis_len
    }

    /// Forecast horizon length.
    pub fn forecast_len(&self) -> usize {
        self.forecast_len
    }

    /// Seasonal buffer length.
    pub fn buffer_len(&self) -> usize {
        self.buffer_len
    }

    /// Buffer days placed before the analysis period (`floor(buffer / 2)`).
    pub fn half_buffer(&self) -> usize {
        self.buffer_len / 2
    }

    /// Window length: `analysis + forecast + buffer`.
    pub fn ndays(&self) -> usize {
        self.analysis_len + self.forecast_len + self.buffer_len
    }

    /// Offset of the forecast target day from the window start.
    pub fn target_offset(&self) -> usize {
        self.half_buffer() + self.analysis_len
    }

    /// Checks the configuration against the number of leads to be read
    /// from each window.
    ///
    /// # Errors
    ///
    /// Returns [`WindowError::InvalidConfig`] if `forecast_len` is zero or
    /// smaller than `n_leads`.
    pub fn validate(&self, n_leads: usize) -> Result<(), WindowError> {
        if self.forecast_len == 0 {
            return Err(WindowError::InvalidConfig {
                reason: "forecast_len must be at least 1".to_string(),
            });
        }
        if n_leads > self.forecast_len {
            return Err(WindowError::InvalidConfig {
                reason: format!(
                    "{n_leads} leads do not fit a forecast horizon of {} days",
                    self.forecast_len
                ),
            });
        }
        Ok(())
    }
}
