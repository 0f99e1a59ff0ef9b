use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tracing::debug;
use uuid::Uuid;

/// Identifies one `start()` of a session
///
/// Every signal a capability emits carries the attempt it belongs to, so a
/// signal from a stopped or reset attempt can be told apart from a live one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttemptId(Uuid);

impl AttemptId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for AttemptId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for AttemptId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Why the capability failed mid-capture
///
/// Known platform error codes get their own variant; anything else is kept
/// verbatim so it can still be shown to the learner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FailureKind {
    NoSpeech,
    Aborted,
    AudioCapture,
    Network,
    NotAllowed,
    ServiceNotAllowed,
    LanguageNotSupported,
    Other(String),
}

impl FailureKind {
    pub fn from_code(code: &str) -> Self {
        match code.trim() {
            "no-speech" => FailureKind::NoSpeech,
            "aborted" => FailureKind::Aborted,
            "audio-capture" => FailureKind::AudioCapture,
            "network" => FailureKind::Network,
            "not-allowed" => FailureKind::NotAllowed,
            "service-not-allowed" => FailureKind::ServiceNotAllowed,
            "language-not-supported" => FailureKind::LanguageNotSupported,
            other => FailureKind::Other(other.to_string()),
        }
    }

    pub fn code(&self) -> &str {
        match self {
            FailureKind::NoSpeech => "no-speech",
            FailureKind::Aborted => "aborted",
            FailureKind::AudioCapture => "audio-capture",
            FailureKind::Network => "network",
            FailureKind::NotAllowed => "not-allowed",
            FailureKind::ServiceNotAllowed => "service-not-allowed",
            FailureKind::LanguageNotSupported => "language-not-supported",
            FailureKind::Other(code) => code,
        }
    }
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            FailureKind::NoSpeech => "no speech was detected",
            FailureKind::Aborted => "listening was aborted",
            FailureKind::AudioCapture => "no microphone could be captured",
            FailureKind::Network => "the recognition service could not be reached",
            FailureKind::NotAllowed => "microphone permission was denied",
            FailureKind::ServiceNotAllowed => "the recognition service is not allowed",
            FailureKind::LanguageNotSupported => "the selected language is not supported",
            FailureKind::Other(code) => code,
        };
        f.write_str(text)
    }
}

/// What a capability reports for an attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureSignal {
    /// Final transcript of the utterance
    Transcript(String),
    /// Capture failed
    Error(FailureKind),
    /// Listening ended (always sent last, with or without a result)
    Ended,
}

/// A signal tagged with the attempt it belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureEvent {
    pub attempt: AttemptId,
    pub signal: CaptureSignal,
}

/// Per-attempt handle a capability uses to report back to its session
#[derive(Debug, Clone)]
pub struct SignalSink {
    attempt: AttemptId,
    tx: mpsc::UnboundedSender<CaptureEvent>,
}

impl SignalSink {
    pub fn new(attempt: AttemptId, tx: mpsc::UnboundedSender<CaptureEvent>) -> Self {
        Self { attempt, tx }
    }

    pub fn attempt(&self) -> AttemptId {
        self.attempt
    }

    pub fn transcript(&self, text: impl Into<String>) -> bool {
        self.send(CaptureSignal::Transcript(text.into()))
    }

    pub fn error(&self, kind: FailureKind) -> bool {
        self.send(CaptureSignal::Error(kind))
    }

    pub fn ended(&self) -> bool {
        self.send(CaptureSignal::Ended)
    }

    /// Returns false once the owning session is gone
    pub fn send(&self, signal: CaptureSignal) -> bool {
        let event = CaptureEvent {
            attempt: self.attempt,
            signal,
        };
        if self.tx.send(event).is_err() {
            debug!("Session for attempt {} dropped, signal discarded", self.attempt);
            return false;
        }
        true
    }
}
