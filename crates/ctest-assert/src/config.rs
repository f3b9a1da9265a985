//! Assertion configuration: message verbosity, failure ignoring, message size.

use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to parse assertion config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid assertion config: {reason}")]
    Invalid { reason: String },
}

/// How much to say about a failed assertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    /// Progress character only.
    Quiet,
    /// One summary line.
    #[default]
    Normal,
    /// Summary plus the rendered value/index correspondence.
    Detailed,
}

/// Configuration threaded through every assertion via [`crate::AssertContext`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssertConfig {
    pub verbosity: Verbosity,
    /// Count failures as ignored instead of failed.
    pub ignore_failures: bool,
    /// Longest diagnostic message, in characters, before truncation.
    pub max_message_chars: usize,
}

impl Default for AssertConfig {
    fn default() -> Self {
        Self {
            verbosity: Verbosity::Normal,
            ignore_failures: false,
            max_message_chars: 4096,
        }
    }
}

impl AssertConfig {
    /// Parse a JSON config. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_message_chars == 0 {
            return Err(ConfigError::Invalid {
                reason: "max_message_chars must be positive".to_string(),
            });
        }
        Ok(())
    }

    pub fn detailed() -> Self {
        Self {
            verbosity: Verbosity::Detailed,
            ..Default::default()
        }
    }
}
