use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level Kairos configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KairosConfig {
    /// Global RNG seed.
    #[serde(default)]
    pub seed: u64,

    /// I/O settings.
    #[serde(default)]
    pub io: IoConfig,

    /// Window geometry.
    #[serde(default)]
    pub window: WindowToml,

    /// Ensemble settings.
    #[serde(default)]
    pub ensemble: EnsembleToml,

    /// Calibration settings.
    pub calibration: CalibrationToml,

    /// Verification range.
    pub verification: VerificationToml,

    /// Lead-time spans.
    #[serde(default)]
    pub leads: LeadsToml,

    /// Run settings.
    #[serde(default)]
    pub run: RunToml,
}

impl KairosConfig {
    /// Reads and parses a TOML configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("invalid config: {}", path.display()))
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IoConfig {
    pub input: Option<PathBuf>,
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

impl Default for IoConfig {
    fn default() -> Self {
        Self {
            input: None,
            output_dir: default_output_dir(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WindowToml {
    #[serde(default = "default_analysis_len")]
    pub analysis_len: usize,
    #[serde(default = "default_forecast_len")]
    pub forecast_len: usize,
    #[serde(default = "default_buffer_len")]
    pub buffer_len: usize,
}

impl Default for WindowToml {
    fn default() -> Self {
        Self {
            analysis_len: default_analysis_len(),
            forecast_len: default_forecast_len(),
            buffer_len: default_buffer_len(),
        }
    }
}

fn default_analysis_len() -> usize {
    3
}
fn default_forecast_len() -> usize {
    7
}
fn default_buffer_len() -> usize {
    15
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnsembleToml {
    #[serde(default = "default_ensemble_size")]
    pub size: usize,
}

impl Default for EnsembleToml {
    fn default() -> Self {
        Self {
            size: default_ensemble_size(),
        }
    }
}

fn default_ensemble_size() -> usize {
    50
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalibrationToml {
    #[serde(default = "default_engine")]
    pub engine: String,
    #[serde(default = "default_fit_years")]
    pub fit_years: usize,
    pub start_year: i32,
    pub end_year: i32,
    #[serde(default = "default_calibration_upper")]
    pub upper: String,
    #[serde(default = "default_wet_threshold")]
    pub wet_threshold: f64,
    #[serde(default = "default_min_wet_values")]
    pub min_wet_values: usize,
}

fn default_engine() -> String {
    "linear".to_string()
}
fn default_fit_years() -> usize {
    20
}
fn default_calibration_upper() -> String {
    "exclusive".to_string()
}
fn default_wet_threshold() -> f64 {
    0.1
}
fn default_min_wet_values() -> usize {
    10
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VerificationToml {
    pub start_year: i32,
    pub end_year: i32,
    #[serde(default = "default_verification_upper")]
    pub upper: String,
}

fn default_verification_upper() -> String {
    "inclusive".to_string()
}

/// Lead spans: either explicit `[begin, end]` day pairs or a number of
/// single-day leads. Both absent means one single-day lead per forecast day.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct LeadsToml {
    pub spans: Option<Vec<[usize; 2]>>,
    pub n_leads: Option<usize>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunToml {
    #[serde(default = "default_true")]
    pub parallel: bool,
    #[serde(default)]
    pub models: Vec<String>,
}

impl Default for RunToml {
    fn default() -> Self {
        Self {
            parallel: true,
            models: Vec::new(),
        }
    }
}

fn default_true() -> bool {
    true
}
