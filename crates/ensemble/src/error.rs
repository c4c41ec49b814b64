//! Error types for the kairos-ensemble crate.

/// Error type for ensemble assembly.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EnsembleError {
    /// Returned when an ensemble is requested with no members.
    #[error("ensemble must have at least one member")]
    NoMembers,

    /// Returned when a scattered buffer does not match the array shape.
    #[error("{field}: expected {expected} values, got {got}")]
    ShapeMismatch {
        /// Name of the mis-shaped input.
        field: &'static str,
        /// Expected number of values.
        expected: usize,
        /// Actual number of values.
        got: usize,
    },

    /// Returned when a scatter target lies outside the record.
    #[error("target index {target} outside record of {len} days")]
    TargetOutOfRange {
        /// Offending target index.
        target: usize,
        /// Record length.
        len: usize,
    },
}
