//! Error types for the kairos-calibrate crate.

/// Error type for calibration engines.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalibrationError {
    /// Returned when a request or engine parameter is invalid.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when a lead has too few training pairs to fit.
    #[error("lead {lead}: {n} training pairs, at least {required} required")]
    InsufficientData {
        /// Lead time (1-based).
        lead: usize,
        /// Number of training pairs available.
        n: usize,
        /// Minimum number required.
        required: usize,
    },

    /// Returned when the simulated training values carry no spread.
    #[error("lead {lead}: simulated training values are constant")]
    DegenerateSample {
        /// Lead time (1-based).
        lead: usize,
    },

    /// Returned when a mixed marginal has too few wet values.
    #[error("lead {lead}: {series} has {n} wet values, at least {required} required")]
    InsufficientWetDays {
        /// Lead time (1-based).
        lead: usize,
        /// Which series (`"observed"` or `"simulated"`).
        series: &'static str,
        /// Number of wet values.
        n: usize,
        /// Minimum number required.
        required: usize,
    },

    /// Returned when method-of-moments estimation yields no valid Gamma.
    #[error("lead {lead}: gamma fit failed for {series} wet values")]
    GammaFit {
        /// Lead time (1-based).
        lead: usize,
        /// Which series (`"observed"` or `"simulated"`).
        series: &'static str,
    },

    /// Returned when a statrs distribution cannot be constructed.
    ///
    /// `message` is a `String` because statrs errors are not `Clone`.
    #[error("distribution construction failed: {message}")]
    Distribution {
        /// Error message from statrs.
        message: String,
    },

    /// Returned when an engine output does not have the requested shape.
    #[error("{field}: expected {expected} values, got {got}")]
    ShapeMismatch {
        /// Name of the mis-shaped output.
        field: &'static str,
        /// Expected number of values.
        expected: usize,
        /// Actual number of values.
        got: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_insufficient_data() {
        let e = CalibrationError::InsufficientData {
            lead: 2,
            n: 1,
            required: 3,
        };
        assert_eq!(e.to_string(), "lead 2: 1 training pairs, at least 3 required");
    }

    #[test]
    fn display_wet_days() {
        let e = CalibrationError::InsufficientWetDays {
            lead: 1,
            series: "observed",
            n: 4,
            required: 10,
        };
        assert!(e.to_string().contains("observed has 4 wet values"));
    }

    #[test]
    fn display_shape_mismatch() {
        let e = CalibrationError::ShapeMismatch {
            field: "a",
            expected: 7,
            got: 6,
        };
        assert_eq!(e.to_string(), "a: expected 7 values, got 6");
    }

    #[test]
    fn is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CalibrationError>();
    }

    #[test]
    fn implements_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<CalibrationError>();
    }
}
