use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::SessionError;
use crate::capture::AttemptId;
use crate::scoring::FeedbackTier;

/// Lifecycle of one practice attempt
///
/// Score and error live in different variants, so a session never holds both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Recording {
        attempt: AttemptId,
        started_at: DateTime<Utc>,
    },
    Completed {
        score: u8,
    },
    Errored(SessionError),
}

impl SessionState {
    pub fn status(&self) -> CaptureStatus {
        match self {
            SessionState::Idle => CaptureStatus::Idle,
            SessionState::Recording { .. } => CaptureStatus::Recording,
            SessionState::Completed { .. } => CaptureStatus::Completed,
            SessionState::Errored(_) => CaptureStatus::Errored,
        }
    }

    pub fn is_recording(&self) -> bool {
        matches!(self, SessionState::Recording { .. })
    }

    pub fn score(&self) -> Option<u8> {
        match self {
            SessionState::Completed { score } => Some(*score),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&SessionError> {
        match self {
            SessionState::Errored(e) => Some(e),
            _ => None,
        }
    }
}

/// Capture status as seen by the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaptureStatus {
    Idle,
    Recording,
    Completed,
    Errored,
}

/// Read model a rendering layer binds to
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    /// Phrase the next transcript is scored against
    pub target: String,

    pub status: CaptureStatus,

    /// Similarity score, only when Completed
    pub score: Option<u8>,

    /// Feedback tier of `score`
    pub tier: Option<FeedbackTier>,

    /// Presentable error message, only when Errored
    pub error: Option<String>,

    /// Number of attempts handed to the capability so far
    pub attempts: u64,

    /// When the current attempt started listening, only when Recording
    pub started_at: Option<DateTime<Utc>>,
}

impl SessionSnapshot {
    /// Line to show the learner, if there is anything to show
    pub fn feedback(&self) -> Option<String> {
        if let Some(error) = &self.error {
            return Some(error.clone());
        }
        match (self.tier, self.score) {
            (Some(tier), Some(score)) => Some(tier.message(score)),
            _ => None,
        }
    }
}
