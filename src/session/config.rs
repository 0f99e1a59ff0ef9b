use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for a recording session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Locale the capability listens in (e.g., "en-US")
    pub locale: String,

    /// How long one attempt may stay in Recording before it is abandoned
    /// Default: 10 seconds
    pub listen_timeout: Duration,

    /// Ask the capability for partial transcripts while the user speaks
    /// Only the final transcript is ever reported to the session
    pub interim_results: bool,

    /// Number of alternative transcripts the capability may consider
    pub max_alternatives: u32,
}

impl SessionConfig {
    /// Config for one of the built-in practice languages
    pub fn for_language(language: &str) -> Option<Self> {
        locale_for_language(language).map(|locale| Self {
            locale: locale.to_string(),
            ..Self::default()
        })
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            locale: "en-US".to_string(),
            listen_timeout: Duration::from_secs(10),
            interim_results: false,
            max_alternatives: 1,
        }
    }
}

/// Built-in language name to recognition locale table
pub fn locale_for_language(language: &str) -> Option<&'static str> {
    match language.trim().to_ascii_lowercase().as_str() {
        "english" | "en" => Some("en-US"),
        "portuguese" | "pt" => Some("pt-BR"),
        _ => None,
    }
}
