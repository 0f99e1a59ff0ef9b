pub mod capture;
pub mod config;
pub mod scoring;
pub mod session;

pub use capture::{
    AttemptId, CaptureEvent, CaptureFactory, CaptureScript, CaptureSignal, CaptureSource,
    ConsoleCapture, FailureKind, ListenRequest, ScriptController, ScriptedCapture, SignalSink,
    SpeechCapture,
};
pub use config::Config;
pub use scoring::{levenshtein_distance, similarity, FeedbackTier};
pub use session::{
    CaptureStatus, RecordingSession, SessionConfig, SessionError, SessionSnapshot, SessionState,
};
