use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;

use crate::session::{locale_for_language, SessionConfig};

#[derive(Debug, Deserialize)]
pub struct Config {
    pub service: ServiceConfig,
    pub practice: PracticeConfig,
    /// Language name → recognition locale, on top of the built-in table
    #[serde(default)]
    pub languages: HashMap<String, String>,
}

#[derive(Debug, Deserialize)]
pub struct ServiceConfig {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct PracticeConfig {
    pub language: String,
    pub listen_timeout_secs: u64,
    #[serde(default)]
    pub interim_results: bool,
    #[serde(default = "default_max_alternatives")]
    pub max_alternatives: u32,
}

fn default_max_alternatives() -> u32 {
    1
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path))
            .build()
            .with_context(|| format!("Failed to read config {}", path))?;

        Ok(settings.try_deserialize()?)
    }

    pub fn locale_for(&self, language: &str) -> Option<String> {
        self.languages
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(language.trim()))
            .map(|(_, locale)| locale.clone())
            .or_else(|| locale_for_language(language).map(str::to_string))
    }

    /// Session settings for the configured practice language
    pub fn session_config(&self) -> Result<SessionConfig> {
        self.session_config_for(&self.practice.language)
    }

    pub fn session_config_for(&self, language: &str) -> Result<SessionConfig> {
        let locale = self
            .locale_for(language)
            .with_context(|| format!("No locale configured for language '{}'", language))?;

        Ok(SessionConfig {
            locale,
            listen_timeout: Duration::from_secs(self.practice.listen_timeout_secs),
            interim_results: self.practice.interim_results,
            max_alternatives: self.practice.max_alternatives,
        })
    }
}
