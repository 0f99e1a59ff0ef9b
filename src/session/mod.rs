//! Recording session management
//!
//! This module provides the `RecordingSession` state machine that manages:
//! - The lifecycle of one speech capture at a time (start, stop, reset)
//! - Discarding signals from superseded attempts
//! - Scoring each transcript against the attached target phrase
//! - A read model for the presentation layer

mod config;
mod error;
mod session;
mod state;

pub use config::{locale_for_language, SessionConfig};
pub use error::SessionError;
pub use session::RecordingSession;
pub use state::{CaptureStatus, SessionSnapshot, SessionState};
