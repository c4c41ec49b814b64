//! Per-model result bundle.

use kairos_calendar::MonthDay;
use kairos_ensemble::{CalibratedSeries, EnsembleArray};
use kairos_events::EventMatrix;
use kairos_verify::SkillTable;

/// Coefficients fitted for one calendar pair.
#[derive(Debug, Clone, PartialEq)]
pub struct PairCoefficients {
    pub month_day: MonthDay,
    pub a: Vec<f64>,
    pub b: Vec<f64>,
}

/// Counts of what happened to the calendar pairs of one model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub calibrated: usize,
    pub skipped: usize,
    pub failed: usize,
    /// Occurrences that overwrote an issue day written by an earlier pair.
    pub overlaps: usize,
}

/// Everything produced for one candidate model.
#[derive(Debug, Clone)]
pub struct ModelResult {
    pub model_id: String,
    pub observed_events: EventMatrix,
    pub simulated_events: EventMatrix,
    pub ensemble: EnsembleArray,
    pub calibrated: CalibratedSeries,
    /// Calibrated pairs in calendar order.
    pub coefficients: Vec<PairCoefficients>,
    pub skill: SkillTable,
    pub summary: RunSummary,
}

impl ModelResult {
    /// Number of leads.
    pub fn n_leads(&self) -> usize {
        self.observed_events.n_leads()
    }

    /// Members per ensemble cell.
    pub fn n_members(&self) -> usize {
        self.ensemble.n_members()
    }
}
