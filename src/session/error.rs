use thiserror::Error;

use crate::capture::FailureKind;

/// Why an attempt ended without a score
///
/// Display strings are meant to be shown to the learner as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("Speech recognition is not supported in this environment.")]
    CapabilityUnavailable,
    #[error("Error recording: {kind}")]
    CaptureFailed { kind: FailureKind },
    #[error("Error initializing speech recognition: {message}")]
    InitializationFailed { message: String },
}

impl SessionError {
    /// Whether a fresh `start()` in the same runtime can succeed
    pub fn is_retryable(&self) -> bool {
        !matches!(self, SessionError::CapabilityUnavailable)
    }
}
