use std::path::Path;

use crate::error::ConfigError;
use crate::state::round::MAX_WRONG_GUESSES;

/// Session configuration, loadable from JSON.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Wrong guesses allowed per round
    pub max_wrong_guesses: u8,
    /// Language used for the alphabet lookup when the word set has none
    pub fallback_language: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            max_wrong_guesses: MAX_WRONG_GUESSES,
            fallback_language: "English".to_string(),
        }
    }
}

impl SessionConfig {
    /// Parse and validate configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SessionConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_json(&content)
    }

    /// Load configuration from a JSON file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_wrong_guesses == 0 || self.max_wrong_guesses > MAX_WRONG_GUESSES {
            return Err(ConfigError::Validation(format!(
                "max_wrong_guesses must be in 1..={MAX_WRONG_GUESSES}"
            )));
        }
        if self.fallback_language.trim().is_empty() {
            return Err(ConfigError::Validation(
                "fallback_language must not be blank".into(),
            ));
        }
        Ok(())
    }

    /// Language to use for the alphabet lookup.
    pub fn language_or_fallback<'a>(&'a self, language: &'a str) -> &'a str {
        if language.trim().is_empty() {
            &self.fallback_language
        } else {
            language
        }
    }
}
