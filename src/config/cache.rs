//! Cache configuration module.
//!
//! This module defines configuration for the suggestion cache: its size, its
//! eviction rule, and how it reacts to new words.

use super::{ConfigResult, Validate};
use crate::data_structures::kauai_cache::{EvictionPolicy, KauaiCacheConfig, DEFAULT_CAPACITY};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Cache configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Whether query results are cached
    pub enabled: bool,

    /// Maximum number of cached results
    pub capacity: usize,

    /// Which entry to evict when the cache is full
    pub eviction_policy: EvictionPolicy,

    /// Whether inserting a word drops cached results for its prefixes
    pub invalidate_on_insert: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            capacity: DEFAULT_CAPACITY,
            eviction_policy: EvictionPolicy::default(),
            invalidate_on_insert: true,
        }
    }
}

impl CacheConfig {
    /// Builds the cache configuration used by the engine.
    pub fn to_cache_config(&self) -> KauaiCacheConfig {
        KauaiCacheConfig::new()
            .with_capacity(self.capacity)
            .with_policy(self.eviction_policy)
    }
}

impl Validate for CacheConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.capacity == 0 {
            return Err(ConfigError::ValidationError(
                "capacity must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
