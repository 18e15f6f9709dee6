// Copyright (c) 2025 Kilo Autocomplete Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Configuration options for the Kauai cache.

use super::policy::EvictionPolicy;

/// Default number of entries a cache holds.
pub const DEFAULT_CAPACITY: usize = 100;

/// Configuration for the Kauai cache.
#[derive(Debug, Clone)]
pub struct KauaiCacheConfig {
    /// Maximum number of entries. Values below 1 are raised to 1.
    pub capacity: usize,

    /// Victim selection rule used when the cache is full.
    pub policy: EvictionPolicy,
}

impl KauaiCacheConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum number of entries.
    ///
    /// # Arguments
    ///
    /// * `capacity` - The entry limit, clamped to at least 1.
    ///
    /// # Returns
    ///
    /// Self with the updated configuration.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity.max(1);
        self
    }

    /// Sets the eviction policy.
    pub fn with_policy(mut self, policy: EvictionPolicy) -> Self {
        self.policy = policy;
        self
    }
}

impl Default for KauaiCacheConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            policy: EvictionPolicy::LargestResult,
        }
    }
}
