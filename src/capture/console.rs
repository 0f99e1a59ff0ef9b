use anyhow::{Context, Result};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use super::backend::{ListenRequest, SpeechCapture};
use super::signal::{FailureKind, SignalSink};

type LineReceiver = Arc<Mutex<mpsc::UnboundedReceiver<std::io::Result<String>>>>;

/// Capability that takes one typed line per attempt as the transcript
///
/// Stands in for platform dictation when no speech engine is wired up. A blank
/// line counts as no speech; end of input counts as an aborted capture.
///
/// A single reader task owns the input for the lifetime of the capture and
/// queues every line it reads, so lines typed or piped ahead of an attempt are
/// kept for it, and stopping an attempt never loses input.
pub struct ConsoleCapture {
    /// Input not yet handed to the reader task
    input: Option<Box<dyn AsyncRead + Send + Unpin>>,

    /// Lines read so far, shared by every attempt
    lines: Option<LineReceiver>,

    /// Handle for the reader task
    reader_task: Option<JoinHandle<()>>,

    /// Handle for the task waiting on the current attempt's line
    attempt_task: Option<JoinHandle<()>>,
}

impl ConsoleCapture {
    /// Read from stdin
    pub fn new() -> Self {
        Self::from_reader(tokio::io::stdin())
    }

    /// Read from any async source (pipes, in-memory buffers)
    pub fn from_reader(reader: impl AsyncRead + Send + Unpin + 'static) -> Self {
        Self {
            input: Some(Box::new(reader)),
            lines: None,
            reader_task: None,
            attempt_task: None,
        }
    }

    fn line_receiver(&mut self) -> Result<LineReceiver> {
        if let Some(lines) = &self.lines {
            return Ok(Arc::clone(lines));
        }

        let handle = tokio::runtime::Handle::try_current()
            .context("Console capture needs a tokio runtime")?;
        let input = self
            .input
            .take()
            .context("Console input already consumed")?;

        let (line_tx, line_rx) = mpsc::unbounded_channel();

        let reader_task = handle.spawn(async move {
            let mut lines = BufReader::new(input).lines();

            loop {
                match lines.next_line().await {
                    Ok(Some(line)) => {
                        if line_tx.send(Ok(line)).is_err() {
                            break;
                        }
                    }
                    Ok(None) => {
                        debug!("Console input closed");
                        break;
                    }
                    Err(e) => {
                        let _ = line_tx.send(Err(e));
                        break;
                    }
                }
            }
        });

        let lines = Arc::new(Mutex::new(line_rx));
        self.lines = Some(Arc::clone(&lines));
        self.reader_task = Some(reader_task);

        Ok(lines)
    }
}

impl Default for ConsoleCapture {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ConsoleCapture {
    fn drop(&mut self) {
        if let Some(task) = self.attempt_task.take() {
            task.abort();
        }
        if let Some(task) = self.reader_task.take() {
            task.abort();
        }
    }
}

#[async_trait::async_trait]
impl SpeechCapture for ConsoleCapture {
    fn is_available(&self) -> bool {
        self.lines.is_some() || self.input.is_some()
    }

    async fn begin_listening(&mut self, request: ListenRequest, sink: SignalSink) -> Result<()> {
        if let Some(task) = self.attempt_task.take() {
            task.abort();
        }

        let lines = self.line_receiver()?;

        info!("Console capture listening (locale={})", request.locale);

        let attempt_task = tokio::spawn(async move {
            // Cancelling recv() leaves queued lines in place for the next attempt
            let next = lines.lock().await.recv().await;

            match next {
                Some(Ok(line)) if !line.trim().is_empty() => {
                    sink.transcript(line.trim());
                }
                Some(Ok(_)) => {
                    sink.error(FailureKind::NoSpeech);
                }
                Some(Err(e)) => {
                    warn!("Failed to read console input: {}", e);
                    sink.error(FailureKind::AudioCapture);
                }
                None => {
                    sink.error(FailureKind::Aborted);
                }
            }

            sink.ended();
        });

        self.attempt_task = Some(attempt_task);
        Ok(())
    }

    async fn end_listening(&mut self) -> Result<()> {
        if let Some(task) = self.attempt_task.take() {
            task.abort();
        }
        Ok(())
    }

    fn is_listening(&self) -> bool {
        self.attempt_task
            .as_ref()
            .map(|task| !task.is_finished())
            .unwrap_or(false)
    }

    fn name(&self) -> &str {
        "console"
    }
}
