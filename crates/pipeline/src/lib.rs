//! Calendar-day calibration pipeline.
//!
//! For each candidate model the pipeline aggregates the observed and
//! simulated series into canonical events, fans out over all 366 calendar
//! pairs (window construction and calibration, in parallel when enabled),
//! fans the outcomes back in calendar order into the ensemble array and
//! calibrated series, and verifies the result.
//!
//! ```text
//! DailyRecord ─► aggregate ─► [ (month, day) ─► windows ─► engine ]* ─► scatter ─► verify ─► ModelResult
//!                              (rayon fan-out)                   (calendar-order fan-in)
//! ```
//!
//! Failed pairs are logged and keep the default fill; a cancelled run
//! returns [`PipelineError::Cancelled`].

mod cancel;
mod config;
mod error;
mod pass;
mod pipeline;
mod report;
mod result;

pub use cancel::CancelToken;
pub use config::PipelineConfig;
pub use error::PipelineError;
pub use pipeline::Pipeline;
pub use report::{OutputPaths, coefficient_blocks, result_rows, skill_rows, write_model_outputs};
pub use result::{ModelResult, PairCoefficients, RunSummary};
