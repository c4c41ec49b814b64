//! Calibration engines for calendar-day training windows.
//!
//! An engine receives the windows of one `(month, day)` pair, fits one
//! correction per lead time on the first `fit_years` occurrences and draws an
//! ensemble of realizations for every occurrence.
//!
//! ```text
//! CalendarWindows ──► CalibrationRequest ──► CalibrationEngine ──► CalibrationOutput
//!                                            ├─ LinearDressing        (a, b, members)
//!                                            └─ MetaGaussian
//! ```
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `engine` | Request/output types and the [`CalibrationEngine`] trait |
//! | `linear` | OLS with resampled residuals |
//! | `meta_gaussian` | Normal-quantile-transform regression with mixed marginals |
//! | `gamma` | Mixed zero/Gamma marginals |
//! | `error` | Error types |

mod engine;
mod error;
mod gamma;
mod linear;
mod meta_gaussian;

pub use engine::{CalibrationEngine, CalibrationOutput, CalibrationRequest, pair_seed};
pub use error::CalibrationError;
pub use gamma::{GammaParams, MixedMarginal};
pub use linear::{LinearDressing, MIN_TRAINING_PAIRS};
pub use meta_gaussian::{MetaGaussian, MetaGaussianConfig};

/// Available calibration engines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EngineKind {
    /// [`LinearDressing`].
    #[default]
    LinearDressing,
    /// [`MetaGaussian`].
    MetaGaussian,
}

/// Builds a boxed engine of the given kind.
///
/// `meta_gaussian` is only consulted for [`EngineKind::MetaGaussian`].
///
/// # Errors
///
/// Propagates configuration errors of the chosen engine.
pub fn build_engine(
    kind: EngineKind,
    meta_gaussian: MetaGaussianConfig,
) -> Result<Box<dyn CalibrationEngine>, CalibrationError> {
    Ok(match kind {
        EngineKind::LinearDressing => Box::new(LinearDressing::new()),
        EngineKind::MetaGaussian => Box::new(MetaGaussian::new(meta_gaussian)?),
    })
}
