//! Error types for the kairos-window crate.

/// Error type for window construction.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WindowError {
    /// Returned when a configuration parameter is invalid.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when input slices differ in length.
    #[error("{field}: expected {expected} elements, got {got}")]
    LengthMismatch {
        /// Name of the mismatched input.
        field: &'static str,
        /// Expected length.
        expected: usize,
        /// Actual length.
        got: usize,
    },

    /// Returned when the record cannot hold a single full window.
    #[error(
        "record of {len} days is too short for {ndays}-day windows with {lookahead} days of look-ahead"
    )]
    RecordTooShort {
        /// Record length.
        len: usize,
        /// Window length.
        ndays: usize,
        /// Look-ahead of the final lead.
        lookahead: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_record_too_short() {
        let err = WindowError::RecordTooShort {
            len: 10,
            ndays: 25,
            lookahead: 0,
        };
        assert_eq!(
            err.to_string(),
            "record of 10 days is too short for 25-day windows with 0 days of look-ahead"
        );
    }

    #[test]
    fn display_length_mismatch() {
        let err = WindowError::LengthMismatch {
            field: "simulated",
            expected: 10,
            got: 9,
        };
        assert_eq!(err.to_string(), "simulated: expected 10 elements, got 9");
    }

    #[test]
    fn error_is_send_sync_and_std_error() {
        fn assert_bounds<T: Send + Sync + std::error::Error>() {}
        assert_bounds::<WindowError>();
    }
}
