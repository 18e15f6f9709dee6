// Copyright (c) 2025 Kilo Autocomplete Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Engine counters.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Point-in-time view of the engine's counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineStats {
    /// Subtree traversals actually run
    pub collections: u64,
    /// Queries answered from the cache
    pub cache_hits: u64,
    /// Queries that had to collect
    pub cache_misses: u64,
    /// Non-empty words inserted
    pub inserts: u64,
    /// Cache entries evicted to make room
    pub evictions: u64,
    /// Entries currently cached
    pub cached_entries: usize,
}

#[derive(Debug, Default)]
pub(super) struct StatCounters {
    collections: AtomicU64,
    cache_hits: AtomicU64,
    cache_misses: AtomicU64,
    inserts: AtomicU64,
    evictions: AtomicU64,
}

impl StatCounters {
    pub(super) fn record_collection(&self) {
        self.collections.fetch_add(1, Ordering::Relaxed);
    }

    pub(super) fn record_hit(&self) {
        self.cache_hits.fetch_add(1, Ordering::Relaxed);
    }

    pub(super) fn record_miss(&self) {
        self.cache_misses.fetch_add(1, Ordering::Relaxed);
    }

    pub(super) fn record_insert(&self) {
        self.inserts.fetch_add(1, Ordering::Relaxed);
    }

    pub(super) fn record_eviction(&self) {
        self.evictions.fetch_add(1, Ordering::Relaxed);
    }

    pub(super) fn snapshot(&self, cached_entries: usize) -> EngineStats {
        EngineStats {
            collections: self.collections.load(Ordering::Relaxed),
            cache_hits: self.cache_hits.load(Ordering::Relaxed),
            cache_misses: self.cache_misses.load(Ordering::Relaxed),
            inserts: self.inserts.load(Ordering::Relaxed),
            evictions: self.evictions.load(Ordering::Relaxed),
            cached_entries,
        }
    }
}
