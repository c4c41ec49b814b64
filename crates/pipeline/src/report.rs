//! Conversion of model results into output tables and files.

use std::path::{Path, PathBuf};

use kairos_calendar::{CalendarDate, YearRange};
use kairos_io::{
    CoefficientBlock, ResultRow, SkillRow, write_coefficients_file, write_results_file,
    write_skill_file,
};
use kairos_verify::{SkillTable, verification_indices};
use tracing::info;

use crate::error::PipelineError;
use crate::result::ModelResult;

/// Paths written for one model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub results: PathBuf,
    pub skill: PathBuf,
    pub coefficients_a: PathBuf,
    pub coefficients_b: PathBuf,
}

impl OutputPaths {
    /// File names for `model_id` under `dir`.
    pub fn new(dir: &Path, model_id: &str) -> Self {
        Self {
            results: dir.join(format!("{model_id}_results.csv")),
            skill: dir.join(format!("{model_id}_skill.csv")),
            coefficients_a: dir.join(format!("{model_id}_coef_a.txt")),
            coefficients_b: dir.join(format!("{model_id}_coef_b.txt")),
        }
    }
}

/// One row per `(issue day, lead)` in the reporting years.
pub fn result_rows(
    result: &ModelResult,
    dates: &[CalendarDate],
    reporting: &YearRange,
) -> Vec<ResultRow> {
    let n = dates.len();
    let n_leads = result.n_leads();
    let issues = verification_indices(dates, reporting);
    let mut rows = Vec::with_capacity(issues.len() * n_leads);
    for t in issues {
        for lead in 0..n_leads {
            let target = (t + lead).min(n - 1);
            rows.push(ResultRow {
                date: dates[t],
                lead: lead + 1,
                observed: result.observed_events.at(lead, target),
                simulated: result.simulated_events.at(lead, target),
                mean: result.ensemble.mean(t, lead),
                max: result.ensemble.max(t, lead),
                min: result.ensemble.min(t, lead),
                members: result.ensemble.members(t, lead).to_vec(),
            });
        }
    }
    rows
}

/// Skill table rows in output order, numbered `1..=L+2`.
pub fn skill_rows(table: &SkillTable) -> Vec<SkillRow> {
    table
        .records()
        .iter()
        .map(|r| SkillRow {
            lead_time: table.row_number(r.target),
            correlation: r.correlation,
            efficiency: r.efficiency,
            bias: r.bias,
            rmse: r.rmse,
        })
        .collect()
}

/// Intercept and slope blocks in calendar order.
pub fn coefficient_blocks(result: &ModelResult) -> (Vec<CoefficientBlock>, Vec<CoefficientBlock>) {
    result
        .coefficients
        .iter()
        .map(|c| {
            (
                CoefficientBlock {
                    month_day: c.month_day,
                    values: c.a.clone(),
                },
                CoefficientBlock {
                    month_day: c.month_day,
                    values: c.b.clone(),
                },
            )
        })
        .unzip()
}

/// Writes the result table, skill table and both coefficient files of one
/// model into `dir`.
///
/// # Errors
///
/// Returns [`PipelineError::Io`] if any file cannot be written.
pub fn write_model_outputs(
    result: &ModelResult,
    dates: &[CalendarDate],
    reporting: &YearRange,
    dir: &Path,
) -> Result<OutputPaths, PipelineError> {
    let paths = OutputPaths::new(dir, &result.model_id);
    let rows = result_rows(result, dates, reporting);
    write_results_file(&paths.results, result.n_members(), &rows)?;
    write_skill_file(&paths.skill, &skill_rows(&result.skill))?;
    let (a, b) = coefficient_blocks(result);
    write_coefficients_file(&paths.coefficients_a, result.n_leads(), &a)?;
    write_coefficients_file(&paths.coefficients_b, result.n_leads(), &b)?;
    info!(
        model = %result.model_id,
        dir = %dir.display(),
        n_rows = rows.len(),
        "wrote model outputs"
    );
    Ok(paths)
}
