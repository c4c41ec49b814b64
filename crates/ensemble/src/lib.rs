//! Ensemble assembly over the whole record.
//!
//! Both containers start from the raw simulated canonical event at each
//! lead's target day and are overwritten wherever a calendar pair produced
//! calibrated values. Days never written keep the raw simulation in every
//! member.

mod array;
mod calibrated;
mod error;

pub use array::EnsembleArray;
pub use calibrated::CalibratedSeries;
pub use error::EnsembleError;

use kairos_events::EventMatrix;

/// Raw simulated value of `lead` for issue day `t`: the event at the lead's
/// target `min(t + lead, N - 1)`.
pub fn lead_target(sim_agg: &EventMatrix, lead: usize, t: usize) -> f64 {
    sim_agg.at(lead, (t + lead).min(sim_agg.len() - 1))
}

/// Checks targets and buffer length shared by both scatter operations.
fn check_scatter(
    targets: &[usize],
    len: usize,
    values: usize,
    stride: usize,
    field: &'static str,
) -> Result<(), EnsembleError> {
    if values != targets.len() * stride {
        return Err(EnsembleError::ShapeMismatch {
            field,
            expected: targets.len() * stride,
            got: values,
        });
    }
    if let Some(&target) = targets.iter().find(|&&t| t >= len) {
        return Err(EnsembleError::TargetOutOfRange { target, len });
    }
    Ok(())
}
