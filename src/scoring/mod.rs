//! Pronunciation scoring
//!
//! Converts a target phrase and a speech transcript into a bounded match
//! percentage, and buckets that percentage into a feedback tier for display.

mod feedback;
mod similarity;

pub use feedback::FeedbackTier;
pub use similarity::{levenshtein_distance, similarity};
