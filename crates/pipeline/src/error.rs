//! Error types for the kairos-pipeline crate.

use kairos_calibrate::CalibrationError;
use kairos_ensemble::EnsembleError;
use kairos_io::IoError;
use kairos_verify::VerifyError;
use kairos_window::WindowError;

/// Error type for pipeline runs.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Returned when a configuration parameter is invalid.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when a requested model is not in the record.
    #[error("model '{id}' not found in record")]
    UnknownModel {
        /// Requested model id.
        id: String,
    },

    /// Returned when the run was cancelled between calendar pairs.
    #[error("run cancelled")]
    Cancelled,

    /// Window construction failure.
    #[error(transparent)]
    Window(#[from] WindowError),

    /// Calibration request failure. Engine failures per pair are not errors.
    #[error(transparent)]
    Calibration(#[from] CalibrationError),

    /// Ensemble assembly failure.
    #[error(transparent)]
    Ensemble(#[from] EnsembleError),

    /// Verification failure.
    #[error(transparent)]
    Verify(#[from] VerifyError),

    /// Output writing failure.
    #[error(transparent)]
    Io(#[from] IoError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_unknown_model() {
        let e = PipelineError::UnknownModel {
            id: "hbv".to_string(),
        };
        assert_eq!(e.to_string(), "model 'hbv' not found in record");
    }

    #[test]
    fn transparent_window_error() {
        let e: PipelineError = WindowError::InvalidConfig {
            reason: "bad".to_string(),
        }
        .into();
        assert_eq!(e.to_string(), "invalid configuration: bad");
    }

    #[test]
    fn is_send_sync() {
        fn assert_send_sync<T: Send + Sync + std::error::Error>() {}
        assert_send_sync::<PipelineError>();
    }
}
