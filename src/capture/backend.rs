use anyhow::Result;

use super::console::ConsoleCapture;
use super::scripted::{CaptureScript, ScriptedCapture};
use super::signal::SignalSink;

/// What to listen for on one attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListenRequest {
    /// BCP 47 locale, e.g. "en-US"
    pub locale: String,
    /// Keep listening after the first utterance
    pub continuous: bool,
    /// Report partial transcripts while the user is still speaking
    pub interim_results: bool,
    /// Number of alternative transcripts per result
    pub max_alternatives: u32,
}

impl ListenRequest {
    /// One utterance, final transcript only
    pub fn single_utterance(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            continuous: false,
            interim_results: false,
            max_alternatives: 1,
        }
    }
}

/// Speech-to-text capture capability
///
/// Platform-specific implementations live outside this crate; the crate ships:
/// - Scripted: plays back queued outcomes (tests, demos)
/// - Console: reads a typed line from stdin in place of dictation
///
/// A capability reports through the `SignalSink` it was handed, at most one
/// transcript or error per attempt, followed by `Ended`.
#[async_trait::async_trait]
pub trait SpeechCapture: Send {
    /// Whether the runtime offers this capability at all
    fn is_available(&self) -> bool;

    /// Begin listening for one utterance
    ///
    /// An error here means the capability could not be set up.
    async fn begin_listening(&mut self, request: ListenRequest, sink: SignalSink) -> Result<()>;

    /// Stop listening; must not wait for in-flight results
    async fn end_listening(&mut self) -> Result<()>;

    /// Check if the capability is currently listening
    fn is_listening(&self) -> bool;

    /// Get capability name for logging
    fn name(&self) -> &str;
}

/// Capture source type
#[derive(Debug, Clone)]
pub enum CaptureSource {
    /// Typed transcript from stdin
    Console,
    /// Scripted outcomes, one per attempt
    Scripted(Vec<CaptureScript>),
    /// No capability present in this runtime
    Unavailable,
}

/// Capture capability factory
pub struct CaptureFactory;

impl CaptureFactory {
    pub fn create(source: CaptureSource) -> Box<dyn SpeechCapture> {
        match source {
            CaptureSource::Console => Box::new(ConsoleCapture::new()),
            CaptureSource::Scripted(scripts) => Box::new(ScriptedCapture::new(scripts)),
            CaptureSource::Unavailable => Box::new(ScriptedCapture::unavailable()),
        }
    }
}
