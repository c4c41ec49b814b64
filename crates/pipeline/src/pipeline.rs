//! Calendar loop over all models of a record.

use kairos_calendar::MonthDay;
use kairos_calibrate::CalibrationEngine;
use kairos_ensemble::{CalibratedSeries, EnsembleArray};
use kairos_events::aggregate;
use kairos_io::{DailyRecord, SimulatedSeries};
use kairos_verify::{VerifyInput, verify};
use kairos_window::{SeriesView, window_bounds};
use rayon::prelude::*;
use tracing::{info, info_span};

use crate::cancel::CancelToken;
use crate::config::PipelineConfig;
use crate::error::PipelineError;
use crate::pass::{PairOutcome, process_pair};
use crate::result::{ModelResult, PairCoefficients, RunSummary};

/// Runs the calibration pipeline with one engine.
pub struct Pipeline {
    config: PipelineConfig,
    engine: Box<dyn CalibrationEngine>,
}

impl Pipeline {
    /// Creates a pipeline after validating `config`.
    ///
    /// # Errors
    ///
    /// Propagates [`PipelineConfig::validate`] failures.
    pub fn new(
        config: PipelineConfig,
        engine: Box<dyn CalibrationEngine>,
    ) -> Result<Self, PipelineError> {
        config.validate()?;
        Ok(Self { config, engine })
    }

    /// Validated configuration.
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Runs every selected model one after another.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::UnknownModel`] for a configured id missing
    /// from the record, [`PipelineError::Cancelled`] if `cancel` fires, or
    /// the first fatal error of any model.
    pub fn run(
        &self,
        record: &DailyRecord,
        cancel: &CancelToken,
    ) -> Result<Vec<ModelResult>, PipelineError> {
        let models: Vec<&SimulatedSeries> = if self.config.models().is_empty() {
            record.simulated().iter().collect()
        } else {
            self.config
                .models()
                .iter()
                .map(|id| {
                    record
                        .model(id)
                        .ok_or_else(|| PipelineError::UnknownModel { id: id.clone() })
                })
                .collect::<Result<_, _>>()?
        };

        models
            .into_iter()
            .map(|model| self.run_model(record, model, cancel))
            .collect()
    }

    /// Runs one model: aggregation, calendar fan-out, calendar-order fan-in
    /// and verification.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::Window`] if the record is too short for the
    /// window, [`PipelineError::Cancelled`] if `cancel` fires, and
    /// [`PipelineError::Verify`] if no day falls in the verification years.
    pub fn run_model(
        &self,
        record: &DailyRecord,
        model: &SimulatedSeries,
        cancel: &CancelToken,
    ) -> Result<ModelResult, PipelineError> {
        let span = info_span!("model", id = model.id(), engine = self.engine.name());
        let _guard = span.enter();

        let config = &self.config;
        let spans = config.spans();
        let observed_events = aggregate(record.observed(), spans);
        let simulated_events = aggregate(model.values(), spans);
        let view = SeriesView::new(
            record.dates(),
            record.observed(),
            model.values(),
            &observed_events,
            &simulated_events,
            spans,
        )?;
        // Reject a record too short for one window before the fan-out.
        window_bounds(0, record.len(), spans.last().width(), config.window())?;

        let pairs: Vec<MonthDay> = MonthDay::all().collect();
        let engine = self.engine.as_ref();
        let work = |&month_day: &MonthDay| {
            cancel.check()?;
            process_pair(month_day, &view, config, engine)
        };
        let outcomes: Vec<PairOutcome> = if config.parallel() {
            pairs.par_iter().map(work).collect::<Result<_, _>>()?
        } else {
            pairs.iter().map(work).collect::<Result<_, _>>()?
        };

        let mut ensemble = EnsembleArray::from_simulation(&simulated_events, config.ensemble_size())?;
        let mut calibrated = CalibratedSeries::from_simulation(&simulated_events);
        let mut coefficients = Vec::new();
        let mut summary = RunSummary::default();

        // Fan-in in calendar order: on overlapping issue days the later pair wins.
        for (month_day, outcome) in pairs.iter().zip(outcomes) {
            match outcome {
                PairOutcome::Skipped => summary.skipped += 1,
                PairOutcome::Failed => summary.failed += 1,
                PairOutcome::Calibrated { targets, output } => {
                    let mut realizations = Vec::with_capacity(
                        targets.len() * output.n_leads() * output.n_members(),
                    );
                    let mut aligned = Vec::with_capacity(targets.len() * output.n_leads());
                    for occ in 0..targets.len() {
                        realizations.extend_from_slice(output.realizations(occ));
                        aligned.extend_from_slice(output.sim_aligned(occ));
                    }
                    summary.overlaps += ensemble.scatter(&targets, &realizations)?;
                    calibrated.scatter(&targets, &aligned)?;
                    coefficients.push(PairCoefficients {
                        month_day: *month_day,
                        a: output.a().to_vec(),
                        b: output.b().to_vec(),
                    });
                    summary.calibrated += 1;
                }
            }
        }

        let skill = verify(
            &VerifyInput {
                dates: record.dates(),
                observed_events: &observed_events,
                simulated_events: &simulated_events,
                ensemble: &ensemble,
                calibrated: &calibrated,
            },
            config.verification(),
        )?;

        info!(
            calibrated = summary.calibrated,
            skipped = summary.skipped,
            failed = summary.failed,
            overlaps = summary.overlaps,
            touched_days = ensemble.n_touched(),
            "model complete"
        );

        Ok(ModelResult {
            model_id: model.id().to_string(),
            observed_events,
            simulated_events,
            ensemble,
            calibrated,
            coefficients,
            skill,
            summary,
        })
    }
}
