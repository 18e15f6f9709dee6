//! Server configuration module.
//!
//! This module defines configuration for the line-delimited JSON adapter that
//! exposes the engine over standard I/O.

use super::ConfigResult;
use super::Validate;
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Name of the server (used in logs)
    pub name: String,

    /// Number of worker threads for the async runtime
    pub worker_threads: usize,

    /// Maximum request line size in bytes
    pub max_line_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: "kilo-autocomplete".to_string(),
            worker_threads: num_cpus::get(),
            max_line_bytes: 64 * 1024, // 64 KiB
        }
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> ConfigResult<()> {
        // Validate server name
        if self.name.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "Server name cannot be empty".to_string(),
            ));
        }

        // Validate worker threads
        if self.worker_threads == 0 {
            return Err(ConfigError::ValidationError(
                "worker_threads must be greater than 0".to_string(),
            ));
        }

        // Validate max_line_bytes
        if self.max_line_bytes == 0 {
            return Err(ConfigError::ValidationError(
                "max_line_bytes must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
