//! Verification of one model's assembled outputs.

use kairos_calendar::{CalendarDate, YearRange};
use kairos_ensemble::{CalibratedSeries, EnsembleArray};
use kairos_events::EventMatrix;
use tracing::debug;

use crate::error::VerifyError;
use crate::skill::{correlation, nash_sutcliffe, ratio_of_sums, rmse};
use crate::table::{SkillRecord, SkillTable, SkillTarget};

/// Finalized outputs of one model, all over the same record.
#[derive(Debug, Clone, Copy)]
pub struct VerifyInput<'a> {
    pub dates: &'a [CalendarDate],
    pub observed_events: &'a EventMatrix,
    pub simulated_events: &'a EventMatrix,
    pub ensemble: &'a EnsembleArray,
    pub calibrated: &'a CalibratedSeries,
}

impl VerifyInput<'_> {
    fn check(&self) -> Result<(), VerifyError> {
        let n = self.dates.len();
        let lengths = [
            ("observed events", self.observed_events.len()),
            ("simulated events", self.simulated_events.len()),
            ("ensemble", self.ensemble.len()),
            ("calibrated", self.calibrated.len()),
        ];
        for (field, got) in lengths {
            if got != n {
                return Err(VerifyError::ShapeMismatch {
                    field,
                    expected: n,
                    got,
                });
            }
        }
        let l = self.observed_events.n_leads();
        let leads = [
            ("simulated event leads", self.simulated_events.n_leads()),
            ("ensemble leads", self.ensemble.n_leads()),
            ("calibrated leads", self.calibrated.n_leads()),
        ];
        for (field, got) in leads {
            if got != l {
                return Err(VerifyError::ShapeMismatch {
                    field,
                    expected: l,
                    got,
                });
            }
        }
        Ok(())
    }
}

/// Record indices whose year lies in `range`.
pub fn verification_indices(dates: &[CalendarDate], range: &YearRange) -> Vec<usize> {
    dates
        .iter()
        .enumerate()
        .filter(|(_, d)| range.contains(d.year()))
        .map(|(i, _)| i)
        .collect()
}

/// Computes the skill table over the issue days in `range`.
///
/// Lead `j` of issue day `t` is verified against the observed event at
/// `min(t + j, N - 1)`.
///
/// # Errors
///
/// Returns [`VerifyError::ShapeMismatch`] if the inputs disagree and
/// [`VerifyError::EmptyRange`] if no issue day falls in `range`.
pub fn verify(input: &VerifyInput<'_>, range: &YearRange) -> Result<SkillTable, VerifyError> {
    input.check()?;
    let issues = verification_indices(input.dates, range);
    if issues.is_empty() {
        return Err(VerifyError::EmptyRange {
            start: range.start(),
            end: range.end(),
        });
    }

    let n = input.dates.len();
    let n_leads = input.observed_events.n_leads();
    let mut records = Vec::with_capacity(n_leads + 2);

    let mut pooled_obs = Vec::with_capacity(issues.len() * n_leads);
    let mut pooled_cal = Vec::with_capacity(issues.len() * n_leads);
    let mut pooled_raw = Vec::with_capacity(issues.len() * n_leads);

    for lead in 0..n_leads {
        let mut obs = Vec::with_capacity(issues.len());
        let mut mean = Vec::with_capacity(issues.len());
        for &t in &issues {
            let target = (t + lead).min(n - 1);
            let o = input.observed_events.at(lead, target);
            obs.push(o);
            mean.push(input.ensemble.mean(t, lead));
            pooled_obs.push(o);
            pooled_cal.push(input.calibrated.value(t, lead));
            pooled_raw.push(input.simulated_events.at(lead, target));
        }
        records.push(SkillRecord {
            target: SkillTarget::EnsembleMean(lead + 1),
            correlation: correlation(&obs, &mean),
            efficiency: nash_sutcliffe(&obs, &mean),
            bias: ratio_of_sums(&obs, &mean),
            rmse: rmse(&obs, &mean),
            n: obs.len(),
        });
    }

    for (target, pred) in [
        (SkillTarget::Calibrated, &pooled_cal),
        (SkillTarget::Raw, &pooled_raw),
    ] {
        records.push(SkillRecord {
            target,
            correlation: correlation(&pooled_obs, pred),
            efficiency: nash_sutcliffe(&pooled_obs, pred),
            // Simulation rows report prediction over observation.
            bias: ratio_of_sums(pred, &pooled_obs),
            rmse: rmse(&pooled_obs, pred),
            n: pooled_obs.len(),
        });
    }

    debug!(n_issues = issues.len(), n_leads, "verified model");
    Ok(SkillTable::new(n_leads, records))
}
