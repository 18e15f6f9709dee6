// Copyright (c) 2025 Kilo Autocomplete Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Autocomplete engine.
//!
//! The engine composes the [`LanaiTrie`], the completion collector and the
//! [`KauaiCache`] into the two operations the rest of the service uses:
//! `insert` and `query`. It is constructed once at startup and shared by
//! handle (`Arc<AutocompleteEngine>`) with every caller.
//!
//! # Concurrency
//!
//! The trie sits behind a read/write lock and the cache behind a mutex. Locks
//! are always taken trie first, cache second. A query that misses keeps its
//! trie read guard until its result is stored, and an insert keeps its write
//! guard until the affected cache entries are invalidated, so a result can
//! never be cached after an insert that should have changed it.
//!
//! # Caching
//!
//! Results are cached per `(normalized prefix, limit)`, so a hit never returns
//! a result computed under a different limit. Prefixes with no completions
//! still cache their empty result.

mod stats;
mod vocabulary;

use parking_lot::{Mutex, RwLock};
use tracing::{debug, info};

use crate::data_structures::kauai_cache::{EvictionPolicy, KauaiCache, KauaiCacheConfig};
use crate::data_structures::lanai_trie::{collect_completions, normalize, LanaiTrie, Suggestion};
use crate::error::KiloResult;

pub use stats::EngineStats;
use stats::StatCounters;
pub use vocabulary::{FileVocabulary, StaticVocabulary, VocabularySource};

#[cfg(test)]
pub use vocabulary::MockVocabularySource;

/// Number of suggestions returned when the caller does not ask for a limit.
pub const DEFAULT_MAX_SUGGESTIONS: usize = 5;

/// Largest limit a single query may request.
pub const DEFAULT_MAX_SUGGESTIONS_LIMIT: usize = 100;

/// Cache key: a normalized prefix together with the limit it was queried with.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QueryKey {
    /// Normalized prefix
    pub prefix: String,
    /// Effective result limit
    pub limit: usize,
}

/// Options for the Autocomplete engine.
#[derive(Debug, Clone)]
pub struct EngineOptions {
    /// Limit used by [`AutocompleteEngine::query_default`]
    pub default_max_suggestions: usize,

    /// Requests above this limit are clamped to it
    pub max_suggestions_limit: usize,

    /// Whether query results are cached at all
    pub cache_enabled: bool,

    /// Cache capacity and eviction policy
    pub cache: KauaiCacheConfig,

    /// Whether an insert drops cached results it makes stale
    pub invalidate_on_insert: bool,
}

impl EngineOptions {
    /// Creates options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the cache capacity.
    pub fn with_cache_capacity(mut self, capacity: usize) -> Self {
        self.cache = self.cache.with_capacity(capacity);
        self
    }

    /// Sets the cache eviction policy.
    pub fn with_eviction_policy(mut self, policy: EvictionPolicy) -> Self {
        self.cache = self.cache.with_policy(policy);
        self
    }

    /// Enables or disables result caching.
    pub fn with_cache_enabled(mut self, enabled: bool) -> Self {
        self.cache_enabled = enabled;
        self
    }

    /// Enables or disables invalidation of stale results on insert.
    pub fn with_invalidate_on_insert(mut self, invalidate: bool) -> Self {
        self.invalidate_on_insert = invalidate;
        self
    }

    /// Sets the default limit used by [`AutocompleteEngine::query_default`].
    pub fn with_default_max_suggestions(mut self, limit: usize) -> Self {
        self.default_max_suggestions = limit;
        self
    }

    /// Sets the upper bound applied to every query's limit.
    pub fn with_max_suggestions_limit(mut self, limit: usize) -> Self {
        self.max_suggestions_limit = limit;
        self
    }
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            default_max_suggestions: DEFAULT_MAX_SUGGESTIONS,
            max_suggestions_limit: DEFAULT_MAX_SUGGESTIONS_LIMIT,
            cache_enabled: true,
            cache: KauaiCacheConfig::default(),
            invalidate_on_insert: true,
        }
    }
}

/// Prefix-completion engine with popularity counts and a bounded result cache.
#[derive(Debug)]
pub struct AutocompleteEngine {
    trie: RwLock<LanaiTrie>,
    cache: Mutex<KauaiCache<QueryKey, Vec<Suggestion>>>,
    options: EngineOptions,
    stats: StatCounters,
}

impl AutocompleteEngine {
    /// Creates an empty engine with default options.
    pub fn new() -> Self {
        Self::with_options(EngineOptions::default())
    }

    /// Creates an empty engine with the given options.
    pub fn with_options(options: EngineOptions) -> Self {
        Self {
            trie: RwLock::new(LanaiTrie::new()),
            cache: Mutex::new(KauaiCache::with_config(options.cache.clone())),
            options,
            stats: StatCounters::default(),
        }
    }

    /// Inserts a word, bumping its popularity if it already exists.
    ///
    /// With invalidation enabled, every cached result whose prefix is a prefix
    /// of the word is dropped.
    ///
    /// # Returns
    ///
    /// The word's new frequency, or `0` if the word was empty.
    pub fn insert(&self, word: &str) -> u64 {
        let word = normalize(word);
        let mut trie = self.trie.write();
        let frequency = trie.insert(&word);
        if frequency == 0 {
            debug!("ignoring empty word");
            return 0;
        }
        self.stats.record_insert();

        if self.options.cache_enabled && self.options.invalidate_on_insert {
            let removed = self
                .cache
                .lock()
                .remove_where(|key| word.starts_with(key.prefix.as_str()));
            if removed > 0 {
                debug!(word = %word, removed, "invalidated cached prefixes");
            }
        }

        frequency
    }

    /// Inserts every word from `words` in order.
    ///
    /// # Returns
    ///
    /// The number of non-empty words inserted.
    pub fn insert_all<I, W>(&self, words: I) -> usize
    where
        I: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        let mut inserted = 0;
        for word in words {
            if self.insert(word.as_ref()) > 0 {
                inserted += 1;
            }
        }
        inserted
    }

    /// Loads a vocabulary from `source` and inserts it in order.
    ///
    /// # Returns
    ///
    /// The number of words inserted.
    pub fn seed_from(&self, source: &dyn VocabularySource) -> KiloResult<usize> {
        let words = source.words()?;
        let inserted = self.insert_all(&words);
        info!(source = %source.describe(), inserted, "seeded vocabulary");
        Ok(inserted)
    }

    /// Returns up to `max_suggestions` completions for `prefix`.
    ///
    /// The limit is clamped to the configured maximum. A limit of zero returns
    /// an empty result without touching the cache.
    pub fn query(&self, prefix: &str, max_suggestions: usize) -> Vec<Suggestion> {
        let limit = max_suggestions.min(self.options.max_suggestions_limit);
        if limit == 0 {
            return Vec::new();
        }
        let prefix = normalize(prefix);

        if !self.options.cache_enabled {
            let trie = self.trie.read();
            return self.collect(&trie, &prefix, limit);
        }

        let key = QueryKey { prefix, limit };
        if let Some(hit) = self.cache.lock().get(&key).cloned() {
            self.stats.record_hit();
            return hit;
        }
        self.stats.record_miss();

        let trie = self.trie.read();
        let suggestions = self.collect(&trie, &key.prefix, limit);

        let mut cache = self.cache.lock();
        if let Some((evicted, _)) = cache.put(key, suggestions.clone()) {
            self.stats.record_eviction();
            debug!(prefix = %evicted.prefix, limit = evicted.limit, "evicted cached result");
        }
        drop(cache);
        drop(trie);

        suggestions
    }

    /// Returns completions for `prefix` using the default limit.
    pub fn query_default(&self, prefix: &str) -> Vec<Suggestion> {
        self.query(prefix, self.options.default_max_suggestions)
    }

    /// Returns a snapshot of the engine's counters.
    pub fn stats(&self) -> EngineStats {
        self.stats.snapshot(self.cache.lock().len())
    }

    /// Returns how many times `word` has been inserted.
    pub fn frequency(&self, word: &str) -> u64 {
        self.trie.read().frequency(word)
    }

    /// Returns the number of distinct words.
    pub fn word_count(&self) -> usize {
        self.trie.read().len()
    }

    /// Returns the number of trie nodes, root included.
    pub fn node_count(&self) -> usize {
        self.trie.read().node_count()
    }

    /// Returns the options the engine was built with.
    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    fn collect(&self, trie: &LanaiTrie, prefix: &str, limit: usize) -> Vec<Suggestion> {
        self.stats.record_collection();
        collect_completions(trie.locate(prefix), prefix, limit)
    }
}

impl Default for AutocompleteEngine {
    fn default() -> Self {
        Self::new()
    }
}
