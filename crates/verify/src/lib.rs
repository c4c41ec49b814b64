//! Forecast skill verification across lead times.
//!
//! For every issue day in the verification years, lead `j` is scored against
//! the observed canonical event at the lead's target. The resulting
//! [`SkillTable`] holds one ensemble-mean row per lead, then one row for the
//! calibrated simulation and one for the raw simulation, each pooled over
//! all leads.

mod error;
mod skill;
mod table;
mod verify;

pub use error::VerifyError;
pub use skill::{correlation, nash_sutcliffe, ratio_of_sums, rmse};
pub use table::{SkillRecord, SkillTable, SkillTarget};
pub use verify::{VerifyInput, verification_indices, verify};
