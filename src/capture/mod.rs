pub mod backend;
pub mod console;
pub mod scripted;
pub mod signal;

pub use backend::{CaptureFactory, CaptureSource, ListenRequest, SpeechCapture};
pub use console::ConsoleCapture;
pub use scripted::{CaptureScript, ScriptController, ScriptedCapture};
pub use signal::{AttemptId, CaptureEvent, CaptureSignal, FailureKind, SignalSink};
