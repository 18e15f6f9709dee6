//! Configuration module for the Kilo autocomplete service.
//!
//! This module provides a layered configuration system: built-in defaults, then
//! an optional file (TOML, YAML, JSON), then environment variables. All
//! configuration values are validated for correctness before use.

use crate::engine::{EngineOptions, FileVocabulary, StaticVocabulary, VocabularySource};
use crate::error::config::ConfigError;
use config::{Config, ConfigError as ExternalConfigError, Environment, File};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub mod cache;
pub mod engine;
pub mod server;

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Default environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "KILO";

/// A trait for types that can be validated.
pub trait Validate {
    /// Validates that the configuration is correct.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if the configuration is valid
    /// * `Err(ConfigError)` if the configuration is invalid
    fn validate(&self) -> ConfigResult<()>;
}

/// Main configuration for the Kilo autocomplete service.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct KiloConfig {
    /// Engine configuration
    pub engine: engine::EngineConfig,

    /// Cache configuration
    pub cache: cache::CacheConfig,

    /// Server configuration
    pub server: server::ServerConfig,

    /// Log configuration
    pub log: LogConfig,
}

impl KiloConfig {
    /// Builds the engine options described by this configuration.
    pub fn engine_options(&self) -> EngineOptions {
        EngineOptions {
            default_max_suggestions: self.engine.default_max_suggestions,
            max_suggestions_limit: self.engine.max_suggestions_limit,
            cache_enabled: self.cache.enabled,
            cache: self.cache.to_cache_config(),
            invalidate_on_insert: self.cache.invalidate_on_insert,
        }
    }

    /// Returns the seed vocabularies in the order they should be inserted.
    pub fn seed_sources(&self) -> Vec<Box<dyn VocabularySource>> {
        let mut sources: Vec<Box<dyn VocabularySource>> = Vec::new();
        if !self.engine.seed_words.is_empty() {
            sources.push(Box::new(StaticVocabulary::new(
                self.engine.seed_words.iter().cloned(),
            )));
        }
        if let Some(path) = &self.engine.seed_file {
            sources.push(Box::new(FileVocabulary::new(path)));
        }
        sources
    }
}

impl Validate for KiloConfig {
    fn validate(&self) -> ConfigResult<()> {
        self.engine.validate()?;
        self.cache.validate()?;
        self.server.validate()?;
        self.log.validate()?;
        Ok(())
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Whether to log in JSON format
    pub json: bool,

    /// Whether to include source code locations in logs
    pub source_location: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            source_location: true,
        }
    }
}

impl Validate for LogConfig {
    fn validate(&self) -> ConfigResult<()> {
        match self.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
            _ => Err(ConfigError::ValidationError(format!(
                "Invalid log level: {}",
                self.level
            ))),
        }
    }
}

/// Configuration loader for the Kilo autocomplete service.
#[derive(Debug)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    env_prefix: String,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    ///
    /// # Arguments
    ///
    /// * `config_path` - Optional path to the configuration file
    /// * `env_prefix` - Prefix for environment variables that override configuration values
    pub fn new<P: AsRef<Path>>(config_path: Option<P>, env_prefix: &str) -> Self {
        Self {
            config_path: config_path.map(|p| p.as_ref().to_path_buf()),
            env_prefix: env_prefix.to_string(),
        }
    }

    /// Loads the configuration from a file and environment variables.
    ///
    /// # Returns
    ///
    /// * `Ok(KiloConfig)` if the configuration was loaded successfully
    /// * `Err(ConfigError)` if there was an error loading the configuration
    pub fn load(&self) -> ConfigResult<KiloConfig> {
        let mut builder = Config::builder();

        // Add default configuration values
        builder = builder.add_source(
            Config::try_from(&KiloConfig::default())
                .map_err(|e| ConfigError::ParseError(e.to_string()))?,
        );

        // Add configuration from file if provided
        if let Some(path) = &self.config_path {
            if !path.exists() {
                return Err(ConfigError::FileNotFound(path.clone()));
            }

            let name = path.to_str().ok_or_else(|| {
                ConfigError::ParseError(format!("Configuration path is not valid UTF-8: {path:?}"))
            })?;

            builder = match path.extension().and_then(|ext| ext.to_str()) {
                Some("toml") => builder.add_source(File::with_name(name)),
                Some("json") => {
                    builder.add_source(File::with_name(name).format(config::FileFormat::Json))
                }
                Some("yaml" | "yml") => {
                    builder.add_source(File::with_name(name).format(config::FileFormat::Yaml))
                }
                _ => {
                    return Err(ConfigError::ParseError(format!(
                        "Unsupported file extension for: {path:?}"
                    )))
                }
            };
        }

        // Add environment variables with prefix
        builder = builder.add_source(
            Environment::with_prefix(&self.env_prefix)
                .separator("__")
                .try_parsing(true),
        );

        // Build the configuration
        let config = builder.build().map_err(|e| match e {
            ExternalConfigError::NotFound(path) => ConfigError::FileNotFound(PathBuf::from(path)),
            ExternalConfigError::FileParse { cause, .. } => {
                ConfigError::ParseError(format!("Error parsing config file: {cause}"))
            }
            other => ConfigError::ParseError(other.to_string()),
        })?;

        // Deserialize the configuration
        let kilo_config: KiloConfig = config
            .try_deserialize()
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        // Validate the configuration
        kilo_config.validate()?;

        Ok(kilo_config)
    }
}

/// Global service configuration.
static GLOBAL_CONFIG: OnceCell<KiloConfig> = OnceCell::new();

/// Initialize the global configuration.
///
/// # Arguments
///
/// * `config` - The configuration to set as global
pub fn init_global_config(config: KiloConfig) {
    if GLOBAL_CONFIG.set(config).is_err() {
        tracing::warn!("Global configuration was already initialized, ignoring new configuration");
    }
}

/// Get the global service configuration.
///
/// # Returns
///
/// The global configuration, or `None` before [`init_global_config`] ran.
pub fn get_global_config() -> Option<&'static KiloConfig> {
    GLOBAL_CONFIG.get()
}
