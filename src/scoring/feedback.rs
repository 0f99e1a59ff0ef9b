use serde::{Deserialize, Serialize};

/// Coarse bucket of a similarity score, used only for presentation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackTier {
    /// 0-60
    Low,
    /// 61-80
    Medium,
    /// 81-100
    High,
}

impl FeedbackTier {
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=60 => FeedbackTier::Low,
            61..=80 => FeedbackTier::Medium,
            _ => FeedbackTier::High,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FeedbackTier::Low => "low",
            FeedbackTier::Medium => "medium",
            FeedbackTier::High => "high",
        }
    }

    /// Learner-facing feedback line for a score in this tier
    pub fn message(&self, score: u8) -> String {
        match self {
            FeedbackTier::Low => format!("{}% match, you can try again.", score),
            FeedbackTier::Medium => format!("{}% match. Well done.", score),
            FeedbackTier::High => format!("{}% match, excellent pronunciation!", score),
        }
    }
}

impl std::fmt::Display for FeedbackTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
