//! Work for a single calendar pair.

use kairos_calendar::MonthDay;
use kairos_calibrate::{CalibrationEngine, CalibrationOutput, CalibrationRequest, pair_seed};
use kairos_window::{SeriesView, build_windows};
use tracing::{debug, warn};

use crate::config::PipelineConfig;
use crate::error::PipelineError;

/// What happened to one calendar pair.
#[derive(Debug)]
pub(crate) enum PairOutcome {
    /// The pair never occurs in the calibration years.
    Skipped,
    /// The engine failed; the pair's days keep the default fill.
    Failed,
    /// The engine produced realizations for every occurrence.
    Calibrated {
        /// Issue day of each occurrence.
        targets: Vec<usize>,
        output: CalibrationOutput,
    },
}

/// Builds the pair's windows and runs the engine on them.
///
/// Engine failures become [`PairOutcome::Failed`]; only window and request
/// errors abort the run.
pub(crate) fn process_pair(
    month_day: MonthDay,
    view: &SeriesView<'_>,
    config: &PipelineConfig,
    engine: &dyn CalibrationEngine,
) -> Result<PairOutcome, PipelineError> {
    let Some(windows) = build_windows(month_day, config.calibration(), view, config.window())?
    else {
        debug!(%month_day, "skipping pair without occurrences");
        return Ok(PairOutcome::Skipped);
    };

    let request = CalibrationRequest::new(
        &windows,
        config.fit_years(),
        config.ensemble_size(),
        pair_seed(config.seed(), month_day),
    )?;

    let result = engine.calibrate(&request).and_then(|output| {
        output.validate(
            windows.n_occurrences(),
            windows.n_leads(),
            config.ensemble_size(),
        )?;
        Ok(output)
    });

    match result {
        Ok(output) => Ok(PairOutcome::Calibrated {
            targets: windows.occurrences().iter().map(|o| o.target).collect(),
            output,
        }),
        Err(error) => {
            warn!(%month_day, engine = engine.name(), %error, "calibration failed, keeping default fill");
            Ok(PairOutcome::Failed)
        }
    }
}
