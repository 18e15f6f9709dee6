//! Engine configuration module.
//!
//! This module defines the query defaults and the seed vocabulary the engine is
//! loaded with at startup.

use super::{ConfigResult, Validate};
use crate::engine::{DEFAULT_MAX_SUGGESTIONS, DEFAULT_MAX_SUGGESTIONS_LIMIT};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Words inserted at startup when no other vocabulary is configured.
pub const SAMPLE_WORDS: [&str; 11] = [
    "apple", "app", "apricot", "banana", "bat", "ball", "car", "cat", "cake", "dog", "door",
];

/// Engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Number of suggestions returned when a request does not specify a limit
    pub default_max_suggestions: usize,

    /// Upper bound applied to every requested limit
    pub max_suggestions_limit: usize,

    /// Words inserted at startup, in order
    pub seed_words: Vec<String>,

    /// Optional file with one word per line, inserted after `seed_words`
    pub seed_file: Option<PathBuf>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_max_suggestions: DEFAULT_MAX_SUGGESTIONS,
            max_suggestions_limit: DEFAULT_MAX_SUGGESTIONS_LIMIT,
            seed_words: SAMPLE_WORDS.iter().map(|w| w.to_string()).collect(),
            seed_file: None,
        }
    }
}

impl Validate for EngineConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_suggestions_limit == 0 {
            return Err(ConfigError::ValidationError(
                "max_suggestions_limit must be greater than 0".to_string(),
            ));
        }

        if self.default_max_suggestions == 0 {
            return Err(ConfigError::ValidationError(
                "default_max_suggestions must be greater than 0".to_string(),
            ));
        }

        if self.default_max_suggestions > self.max_suggestions_limit {
            return Err(ConfigError::ValidationError(format!(
                "default_max_suggestions ({}) must be less than or equal to max_suggestions_limit ({})",
                self.default_max_suggestions, self.max_suggestions_limit
            )));
        }

        Ok(())
    }
}
