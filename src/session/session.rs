use super::config::SessionConfig;
use super::error::SessionError;
use super::state::{SessionSnapshot, SessionState};
use crate::capture::{
    AttemptId, CaptureEvent, CaptureSignal, FailureKind, ListenRequest, SignalSink, SpeechCapture,
};
use crate::scoring::{similarity, FeedbackTier};
use chrono::Utc;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

/// A practice session that drives one speech capture at a time and scores the
/// transcript against the attached target phrase
///
/// All transitions happen on the caller's task. Capture signals queue up on an
/// internal channel and are applied by `handle_event`, `drain_pending` or
/// `wait_for_outcome`; signals from an attempt that is no longer current are
/// discarded.
pub struct RecordingSession {
    /// Phrase transcripts are scored against
    target: String,

    /// Session configuration
    config: SessionConfig,

    /// Injected speech-to-text capability
    capture: Box<dyn SpeechCapture>,

    /// Current lifecycle state
    state: SessionState,

    /// Number of attempts handed to the capability
    attempts: u64,

    /// Cloned into every attempt's sink
    events_tx: mpsc::UnboundedSender<CaptureEvent>,

    /// Signals from the capability, in delivery order
    events_rx: mpsc::UnboundedReceiver<CaptureEvent>,
}

impl RecordingSession {
    /// Create an idle session bound to a target phrase
    pub fn new(
        target: impl Into<String>,
        config: SessionConfig,
        capture: Box<dyn SpeechCapture>,
    ) -> Self {
        let target = target.into();
        info!(
            "Creating recording session (capture={}, locale={})",
            capture.name(),
            config.locale
        );

        let (events_tx, events_rx) = mpsc::unbounded_channel();

        Self {
            target,
            config,
            capture,
            state: SessionState::Idle,
            attempts: 0,
            events_tx,
            events_rx,
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Bind the session to a new phrase
    ///
    /// Always resets first, so a capture started for the previous phrase can
    /// never be scored against this one.
    pub async fn attach_target(&mut self, phrase: impl Into<String>) {
        self.reset().await;
        self.target = phrase.into();
        info!("Attached target phrase: {:?}", self.target);
    }

    /// Locale for the next `start()`; an attempt already listening keeps its own
    pub fn set_locale(&mut self, locale: impl Into<String>) {
        self.config.locale = locale.into();
        debug!("Session locale set to {}", self.config.locale);
    }

    /// Begin a new attempt
    ///
    /// No-op while already recording. Failures land in `SessionState::Errored`.
    pub async fn start(&mut self) {
        if self.state.is_recording() {
            warn!("Recording already started");
            return;
        }

        if !self.capture.is_available() {
            warn!("Speech capture '{}' is not available", self.capture.name());
            self.state = SessionState::Errored(SessionError::CapabilityUnavailable);
            return;
        }

        let attempt = AttemptId::new();
        let sink = SignalSink::new(attempt, self.events_tx.clone());
        let request = ListenRequest {
            interim_results: self.config.interim_results,
            max_alternatives: self.config.max_alternatives,
            ..ListenRequest::single_utterance(self.config.locale.clone())
        };
        self.attempts += 1;

        match self.capture.begin_listening(request, sink).await {
            Ok(()) => {
                info!("Recording attempt {} for {:?}", attempt, self.target);
                self.state = SessionState::Recording {
                    attempt,
                    started_at: Utc::now(),
                };
            }
            Err(e) => {
                error!("Failed to start {} capture: {:#}", self.capture.name(), e);
                self.state = SessionState::Errored(SessionError::InitializationFailed {
                    message: e.to_string(),
                });
            }
        }
    }

    /// User-initiated stop; returns to Idle without waiting for the capability
    ///
    /// Signals already queued for the stopped attempt are discarded.
    pub async fn stop(&mut self) {
        let SessionState::Recording { attempt, .. } = self.state else {
            warn!("Recording not active");
            return;
        };

        info!("Stopping attempt {}", attempt);
        self.end_capture().await;
        self.state = SessionState::Idle;
        self.drain_pending();
    }

    /// Back to Idle, clearing any score or error and discarding queued
    /// signals; idempotent
    pub async fn reset(&mut self) {
        match self.state {
            SessionState::Idle => return,
            SessionState::Recording { attempt, .. } => {
                info!("Resetting while recording, abandoning attempt {}", attempt);
                self.end_capture().await;
            }
            SessionState::Completed { .. } | SessionState::Errored(_) => {
                debug!("Clearing previous result");
            }
        }
        self.state = SessionState::Idle;
        self.drain_pending();
    }

    /// Apply one capture signal
    ///
    /// Returns false when the signal was stale and ignored.
    pub fn handle_event(&mut self, event: CaptureEvent) -> bool {
        let SessionState::Recording { attempt, .. } = self.state else {
            debug!(
                "Discarding {:?} for attempt {}: not recording",
                event.signal, event.attempt
            );
            return false;
        };

        if event.attempt != attempt {
            debug!(
                "Discarding {:?} from superseded attempt {}",
                event.signal, event.attempt
            );
            return false;
        }

        match event.signal {
            CaptureSignal::Transcript(transcript) => {
                let score = similarity(&self.target, &transcript);
                info!(
                    "Heard {:?} for {:?}: {}% ({})",
                    transcript,
                    self.target,
                    score,
                    FeedbackTier::from_score(score)
                );
                self.state = SessionState::Completed { score };
            }
            CaptureSignal::Error(kind) => {
                warn!("Capture failed on attempt {}: {}", attempt, kind);
                self.state = SessionState::Errored(SessionError::CaptureFailed { kind });
            }
            CaptureSignal::Ended => {
                info!("Attempt {} ended without a transcript", attempt);
                self.state = SessionState::Idle;
            }
        }

        true
    }

    /// Apply every signal already queued, without waiting
    ///
    /// Returns the number of signals taken off the queue, stale ones included.
    pub fn drain_pending(&mut self) -> usize {
        let mut drained = 0;
        while let Ok(event) = self.events_rx.try_recv() {
            self.handle_event(event);
            drained += 1;
        }
        drained
    }

    /// Wait until the current attempt leaves Recording
    ///
    /// Gives up after `listen_timeout`, stopping the capture and recording a
    /// no-speech failure.
    pub async fn wait_for_outcome(&mut self) -> &SessionState {
        self.drain_pending();

        let timeout = self.config.listen_timeout;
        let deadline = tokio::time::Instant::now() + timeout;

        while self.state.is_recording() {
            match tokio::time::timeout_at(deadline, self.events_rx.recv()).await {
                Ok(Some(event)) => {
                    self.handle_event(event);
                }
                // The session holds a sender, so the channel never closes
                Ok(None) => break,
                Err(_) => {
                    warn!("No transcript within {:?}, stopping capture", timeout);
                    self.end_capture().await;
                    self.state = SessionState::Errored(SessionError::CaptureFailed {
                        kind: FailureKind::NoSpeech,
                    });
                    self.drain_pending();
                }
            }
        }

        &self.state
    }

    /// Current read model for presentation
    pub fn snapshot(&self) -> SessionSnapshot {
        let score = self.state.score();
        let started_at = match &self.state {
            SessionState::Recording { started_at, .. } => Some(*started_at),
            _ => None,
        };

        SessionSnapshot {
            target: self.target.clone(),
            status: self.state.status(),
            score,
            tier: score.map(FeedbackTier::from_score),
            error: self.state.error().map(|e| e.to_string()),
            attempts: self.attempts,
            started_at,
        }
    }

    async fn end_capture(&mut self) {
        if let Err(e) = self.capture.end_listening().await {
            warn!("Failed to stop {} capture: {:#}", self.capture.name(), e);
        }
    }
}
