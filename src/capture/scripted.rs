use anyhow::{bail, Result};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, info};

use super::backend::{ListenRequest, SpeechCapture};
use super::signal::{FailureKind, SignalSink};

/// Outcome played back for one attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureScript {
    /// Emit a transcript, then end
    Transcript(String),
    /// Emit an error, then end
    Error(FailureKind),
    /// End without a result
    Silence,
    /// Emit nothing; the test drives the attempt through the controller
    Hold,
}

#[derive(Debug, Default)]
struct Recorded {
    sinks: Vec<SignalSink>,
    requests: Vec<ListenRequest>,
    end_calls: usize,
}

/// Shared view into a `ScriptedCapture` after it has been boxed into a session
#[derive(Debug, Clone, Default)]
pub struct ScriptController {
    recorded: Arc<Mutex<Recorded>>,
}

impl ScriptController {
    fn lock(&self) -> MutexGuard<'_, Recorded> {
        self.recorded.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Sink handed over on the n-th `begin_listening` call
    pub fn sink(&self, index: usize) -> Option<SignalSink> {
        self.lock().sinks.get(index).cloned()
    }

    pub fn last_sink(&self) -> Option<SignalSink> {
        self.lock().sinks.last().cloned()
    }

    pub fn requests(&self) -> Vec<ListenRequest> {
        self.lock().requests.clone()
    }

    pub fn begin_count(&self) -> usize {
        self.lock().sinks.len()
    }

    pub fn end_count(&self) -> usize {
        self.lock().end_calls
    }
}

/// Capability that replays queued outcomes instead of listening to a microphone
///
/// Each `begin_listening` pops the next script; an empty queue behaves like
/// `CaptureScript::Hold`.
pub struct ScriptedCapture {
    available: bool,
    init_failure: Option<String>,
    scripts: VecDeque<CaptureScript>,
    listening: bool,
    controller: ScriptController,
}

impl ScriptedCapture {
    pub fn new(scripts: impl IntoIterator<Item = CaptureScript>) -> Self {
        Self {
            available: true,
            init_failure: None,
            scripts: scripts.into_iter().collect(),
            listening: false,
            controller: ScriptController::default(),
        }
    }

    /// A runtime with no speech capture at all
    pub fn unavailable() -> Self {
        Self {
            available: false,
            ..Self::new(Vec::new())
        }
    }

    /// Every `begin_listening` fails with the given message
    pub fn failing_init(message: impl Into<String>) -> Self {
        Self {
            init_failure: Some(message.into()),
            ..Self::new(Vec::new())
        }
    }

    pub fn controller(&self) -> ScriptController {
        self.controller.clone()
    }
}

#[async_trait::async_trait]
impl SpeechCapture for ScriptedCapture {
    fn is_available(&self) -> bool {
        self.available
    }

    async fn begin_listening(&mut self, request: ListenRequest, sink: SignalSink) -> Result<()> {
        if !self.available {
            bail!("Scripted capture is unavailable");
        }
        if let Some(message) = &self.init_failure {
            bail!("{}", message);
        }

        info!(
            "Scripted capture listening (attempt={}, locale={})",
            sink.attempt(),
            request.locale
        );

        {
            let mut recorded = self.controller.lock();
            recorded.requests.push(request);
            recorded.sinks.push(sink.clone());
        }
        self.listening = true;

        let script = self.scripts.pop_front().unwrap_or(CaptureScript::Hold);
        debug!("Playing script {:?}", script);

        match script {
            CaptureScript::Transcript(text) => {
                sink.transcript(text);
                sink.ended();
                self.listening = false;
            }
            CaptureScript::Error(kind) => {
                sink.error(kind);
                sink.ended();
                self.listening = false;
            }
            CaptureScript::Silence => {
                sink.ended();
                self.listening = false;
            }
            CaptureScript::Hold => {}
        }

        Ok(())
    }

    async fn end_listening(&mut self) -> Result<()> {
        self.controller.lock().end_calls += 1;
        self.listening = false;
        Ok(())
    }

    fn is_listening(&self) -> bool {
        self.listening
    }

    fn name(&self) -> &str {
        "scripted"
    }
}
