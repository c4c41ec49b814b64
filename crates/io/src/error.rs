//! Error types for kairos-io.

use std::path::PathBuf;

/// Error type for all fallible operations in the kairos-io crate.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when a required file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Wraps an operating-system I/O failure.
    #[error("i/o error: {source}")]
    Io {
        /// Underlying error.
        #[from]
        source: std::io::Error,
    },

    /// Wraps a CSV serialization failure.
    #[error("csv error: {source}")]
    Csv {
        /// Underlying error.
        #[from]
        source: csv::Error,
    },

    /// Wraps an error originating from the kairos-calendar crate.
    #[error("calendar error: {reason}")]
    Calendar {
        /// Description of the underlying calendar failure.
        reason: String,
    },

    /// Returned when one or more validation checks fail.
    #[error("{count} validation error(s): {details}")]
    Validation {
        /// Number of accumulated validation failures.
        count: usize,
        /// Human-readable summary of the failures.
        details: String,
    },

    /// Returned when rows handed to a writer disagree with its header.
    #[error("{what}: expected {expected} columns, got {got}")]
    ColumnMismatch {
        /// What was being written.
        what: &'static str,
        /// Expected column count.
        expected: usize,
        /// Actual column count.
        got: usize,
    },
}

impl From<kairos_calendar::CalendarError> for IoError {
    fn from(e: kairos_calendar::CalendarError) -> Self {
        IoError::Calendar {
            reason: e.to_string(),
        }
    }
}
