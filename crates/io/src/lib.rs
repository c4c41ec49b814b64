//! # kairos-io
//!
//! Read daily records from whitespace-delimited column text and write the
//! per-model outputs: the result table, the skill table and the two
//! coefficient files.

mod error;
mod reader;
mod record;
mod validate;
mod writer;

pub use error::IoError;
pub use reader::{parse_record, read_record};
pub use record::{DailyRecord, SimulatedSeries};
pub use writer::{
    CoefficientBlock, ResultRow, SkillRow, write_coefficients, write_coefficients_file,
    write_results, write_results_file, write_skill, write_skill_file,
};
