//! Error types for the kairos-verify crate.

/// Error type for verification.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VerifyError {
    /// Returned when no record day falls inside the verification years.
    #[error("no days of the record fall in verification years {start}..{end}")]
    EmptyRange {
        /// First verification year.
        start: i32,
        /// Configured last verification year.
        end: i32,
    },

    /// Returned when inputs disagree in shape.
    #[error("{field}: expected {expected}, got {got}")]
    ShapeMismatch {
        /// Name of the mis-shaped input.
        field: &'static str,
        /// Expected size.
        expected: usize,
        /// Actual size.
        got: usize,
    },
}
