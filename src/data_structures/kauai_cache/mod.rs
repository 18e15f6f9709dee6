// Copyright (c) 2025 Kilo Autocomplete Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Kauai bounded result cache.
//!
//! A capacity-bounded map used to remember completion results per lookup key.
//! When the cache is full and a new key arrives, exactly one existing entry is
//! evicted first. Overwriting a key that is already present never evicts.
//!
//! # Eviction
//!
//! The default [`EvictionPolicy::LargestResult`] removes the entry with the
//! largest weight (for result lists, the most results). It is backed by a
//! max-heap with lazy deletion: overwritten and removed entries leave stale
//! heap records that are skipped on pop and dropped when the heap is rebuilt.
//!
//! [`EvictionPolicy::LeastRecentlyUsed`] removes the entry touched longest ago.
//! Victim selection scans the entries, which is linear in the capacity.
//!
//! The cache is not synchronized. Callers that share it wrap it in a lock so
//! that the capacity check, eviction, and insertion happen as one step.
//!
//! # Example
//!
//! ```
//! use kilo_autocomplete_lib::data_structures::kauai_cache::{KauaiCache, KauaiCacheConfig};
//!
//! let mut cache = KauaiCache::with_config(KauaiCacheConfig::new().with_capacity(2));
//! cache.put("a", vec![1, 2, 3]);
//! cache.put("b", vec![1]);
//!
//! // Full: the longest result goes first.
//! let evicted = cache.put("c", vec![1, 2]);
//! assert_eq!(evicted.map(|(key, _)| key), Some("a"));
//! assert!(cache.contains(&"b") && cache.contains(&"c"));
//! ```

mod config;
mod policy;

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::hash::Hash;

use fnv::FnvHashMap;
use tracing::trace;

pub use config::{KauaiCacheConfig, DEFAULT_CAPACITY};
pub use policy::{EntryWeight, EvictionPolicy};
use policy::WeightRecord;

/// Minimum number of stale heap records tolerated before a rebuild.
const HEAP_SLACK: usize = 32;

#[derive(Debug)]
struct Slot<V> {
    value: V,
    stamp: u64,
    last_access: u64,
}

/// Capacity-bounded cache with a pluggable eviction rule.
///
/// # Type Parameters
///
/// * `K` - Key type. `Ord` is used to break eviction ties deterministically.
/// * `V` - Value type, weighed by [`EntryWeight`].
#[derive(Debug)]
pub struct KauaiCache<K, V>
where
    K: Hash + Eq + Ord + Clone,
{
    entries: FnvHashMap<K, Slot<V>>,
    heap: BinaryHeap<WeightRecord<K>>,
    capacity: usize,
    policy: EvictionPolicy,
    clock: u64,
    evictions: u64,
}

impl<K, V> KauaiCache<K, V>
where
    K: Hash + Eq + Ord + Clone,
    V: EntryWeight,
{
    /// Creates a new cache with the default configuration.
    pub fn new() -> Self {
        Self::with_config(KauaiCacheConfig::default())
    }

    /// Creates a new cache with the specified configuration.
    pub fn with_config(config: KauaiCacheConfig) -> Self {
        let capacity = config.capacity.max(1);
        Self {
            entries: FnvHashMap::with_capacity_and_hasher(capacity, Default::default()),
            heap: BinaryHeap::new(),
            capacity,
            policy: config.policy,
            clock: 0,
            evictions: 0,
        }
    }

    /// Looks up `key`, counting the lookup as a use for recency tracking.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        let now = self.tick();
        self.entries.get_mut(key).map(|slot| {
            slot.last_access = now;
            &slot.value
        })
    }

    /// Looks up `key` without touching its recency.
    pub fn peek(&self, key: &K) -> Option<&V> {
        self.entries.get(key).map(|slot| &slot.value)
    }

    /// Stores `value` under `key`.
    ///
    /// If the cache is full and `key` is new, one entry is evicted first.
    /// Overwriting an existing key replaces its value in place.
    ///
    /// # Returns
    ///
    /// The evicted entry, if an eviction took place.
    pub fn put(&mut self, key: K, value: V) -> Option<(K, V)> {
        let evicted = if !self.entries.contains_key(&key) && self.entries.len() >= self.capacity {
            self.evict_one()
        } else {
            None
        };

        let stamp = self.tick();
        if self.policy == EvictionPolicy::LargestResult {
            self.heap.push(WeightRecord {
                weight: value.weight(),
                key: Reverse(key.clone()),
                stamp,
            });
        }
        self.entries.insert(
            key,
            Slot {
                value,
                stamp,
                last_access: stamp,
            },
        );
        self.compact_heap();

        evicted
    }

    /// Removes `key` and returns its value.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let removed = self.entries.remove(key).map(|slot| slot.value);
        self.compact_heap();
        removed
    }

    /// Removes every entry whose key matches `predicate`.
    ///
    /// # Returns
    ///
    /// The number of entries removed.
    pub fn remove_where<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(&K) -> bool,
    {
        let before = self.entries.len();
        self.entries.retain(|key, _| !predicate(key));
        let removed = before - self.entries.len();
        if removed > 0 {
            self.compact_heap();
        }
        removed
    }

    /// Checks whether `key` is cached.
    pub fn contains(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    /// Removes all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.heap.clear();
    }

    /// Returns the number of cached entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Checks whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the eviction policy in use.
    pub fn policy(&self) -> EvictionPolicy {
        self.policy
    }

    /// Returns how many entries have been evicted over the cache's lifetime.
    pub fn evictions(&self) -> u64 {
        self.evictions
    }

    fn tick(&mut self) -> u64 {
        self.clock += 1;
        self.clock
    }

    fn evict_one(&mut self) -> Option<(K, V)> {
        let victim = match self.policy {
            EvictionPolicy::LargestResult => loop {
                let record = self.heap.pop()?;
                let live = self
                    .entries
                    .get(&record.key.0)
                    .is_some_and(|slot| slot.stamp == record.stamp);
                if live {
                    break record.key.0;
                }
            },
            EvictionPolicy::LeastRecentlyUsed => self
                .entries
                .iter()
                .min_by_key(|(_, slot)| slot.last_access)
                .map(|(key, _)| key.clone())?,
        };

        let slot = self.entries.remove(&victim)?;
        self.evictions += 1;
        trace!(policy = ?self.policy, "evicted cache entry");
        Some((victim, slot.value))
    }

    /// Rebuilds the heap from the live entries once stale records pile up.
    fn compact_heap(&mut self) {
        if self.policy != EvictionPolicy::LargestResult
            || self.heap.len() <= self.entries.len() * 2 + HEAP_SLACK
        {
            return;
        }

        self.heap = self
            .entries
            .iter()
            .map(|(key, slot)| WeightRecord {
                weight: slot.value.weight(),
                key: Reverse(key.clone()),
                stamp: slot.stamp,
            })
            .collect();
    }
}

impl<K, V> Default for KauaiCache<K, V>
where
    K: Hash + Eq + Ord + Clone,
    V: EntryWeight,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn cache_with(capacity: usize, policy: EvictionPolicy) -> KauaiCache<String, Vec<u32>> {
        KauaiCache::with_config(
            KauaiCacheConfig::new()
                .with_capacity(capacity)
                .with_policy(policy),
        )
    }

    #[test]
    fn test_cache_basic_operations() {
        let mut cache = KauaiCache::<String, Vec<u32>>::new();

        assert!(cache.is_empty());
        assert_eq!(cache.capacity(), DEFAULT_CAPACITY);

        assert!(cache.put("ap".to_string(), vec![1, 2]).is_none());
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get(&"ap".to_string()), Some(&vec![1, 2]));
        assert_eq!(cache.peek(&"ap".to_string()), Some(&vec![1, 2]));
        assert!(cache.get(&"zz".to_string()).is_none());

        assert_eq!(cache.remove(&"ap".to_string()), Some(vec![1, 2]));
        assert!(cache.is_empty());
    }

    #[test]
    fn test_largest_result_eviction() {
        let mut cache = cache_with(2, EvictionPolicy::LargestResult);
        cache.put("a".to_string(), vec![1, 2, 3]);
        cache.put("b".to_string(), vec![1]);

        let evicted = cache.put("c".to_string(), vec![1, 2]);

        assert_eq!(evicted, Some(("a".to_string(), vec![1, 2, 3])));
        assert!(cache.contains(&"b".to_string()));
        assert!(cache.contains(&"c".to_string()));
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.evictions(), 1);
    }

    #[test]
    fn test_largest_result_ignores_recency() {
        let mut cache = cache_with(2, EvictionPolicy::LargestResult);
        cache.put("big".to_string(), vec![1, 2, 3, 4]);
        cache.put("small".to_string(), vec![1]);
        for _ in 0..5 {
            cache.get(&"big".to_string());
        }

        let evicted = cache.put("new".to_string(), vec![]);
        assert_eq!(evicted.map(|(k, _)| k), Some("big".to_string()));
    }

    #[test]
    fn test_overwrite_does_not_evict() {
        let mut cache = cache_with(2, EvictionPolicy::LargestResult);
        cache.put("a".to_string(), vec![1]);
        cache.put("b".to_string(), vec![1, 2]);

        assert!(cache.put("a".to_string(), vec![1, 2, 3, 4]).is_none());
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.peek(&"a".to_string()), Some(&vec![1, 2, 3, 4]));

        // The stale weight-1 record for "a" must not shield the new weight.
        let evicted = cache.put("c".to_string(), vec![]);
        assert_eq!(evicted.map(|(k, _)| k), Some("a".to_string()));
    }

    #[test]
    fn test_tie_goes_to_smallest_key() {
        let mut cache = cache_with(3, EvictionPolicy::LargestResult);
        cache.put("m".to_string(), vec![1, 2]);
        cache.put("d".to_string(), vec![1, 2]);
        cache.put("x".to_string(), vec![1, 2]);

        let evicted = cache.put("q".to_string(), vec![1]);
        assert_eq!(evicted.map(|(k, _)| k), Some("d".to_string()));
    }

    #[test]
    fn test_least_recently_used_eviction() {
        let mut cache = cache_with(2, EvictionPolicy::LeastRecentlyUsed);
        cache.put("a".to_string(), vec![1]);
        cache.put("b".to_string(), vec![1, 2, 3]);
        cache.get(&"a".to_string());

        let evicted = cache.put("c".to_string(), vec![]);
        assert_eq!(evicted.map(|(k, _)| k), Some("b".to_string()));

        // peek does not refresh recency
        cache.peek(&"a".to_string());
        let evicted = cache.put("d".to_string(), vec![]);
        assert_eq!(evicted.map(|(k, _)| k), Some("a".to_string()));
    }

    #[test]
    fn test_remove_where() {
        let mut cache = cache_with(10, EvictionPolicy::LargestResult);
        for key in ["", "a", "ap", "app", "b"] {
            cache.put(key.to_string(), vec![0; key.len()]);
        }

        let removed = cache.remove_where(|key| "apple".starts_with(key.as_str()));
        assert_eq!(removed, 4);
        assert_eq!(cache.len(), 1);
        assert!(cache.contains(&"b".to_string()));

        // Stale heap records for removed keys are skipped
        for key in ["c", "d", "e", "f", "g", "h", "i", "j", "k"] {
            cache.put(key.to_string(), vec![]);
        }
        let evicted = cache.put("l".to_string(), vec![]);
        assert_eq!(evicted.map(|(k, _)| k), Some("b".to_string()));
    }

    #[test]
    fn test_heap_stays_bounded_under_overwrites() {
        let mut cache = cache_with(4, EvictionPolicy::LargestResult);
        for round in 0..1_000u32 {
            cache.put(format!("k{}", round % 4), vec![round]);
        }
        assert!(cache.heap.len() <= cache.len() * 2 + HEAP_SLACK + 1);
        assert_eq!(cache.len(), 4);
        assert_eq!(cache.evictions(), 0);
    }

    #[test]
    fn test_clear() {
        let mut cache = cache_with(2, EvictionPolicy::LargestResult);
        cache.put("a".to_string(), vec![1]);
        cache.clear();
        assert!(cache.is_empty());
        assert!(cache.put("b".to_string(), vec![1]).is_none());
    }

    #[test_case(0, 1 ; "zero is raised to one")]
    #[test_case(1, 1 ; "one")]
    #[test_case(100, 100 ; "default size")]
    fn test_capacity_clamp(requested: usize, expected: usize) {
        let cache = cache_with(requested, EvictionPolicy::LargestResult);
        assert_eq!(cache.capacity(), expected);
    }

    #[test_case(EvictionPolicy::LargestResult ; "largest result")]
    #[test_case(EvictionPolicy::LeastRecentlyUsed ; "least recently used")]
    fn test_never_exceeds_capacity(policy: EvictionPolicy) {
        let mut cache = cache_with(3, policy);
        for i in 0..50u32 {
            cache.put(format!("key{i}"), vec![0; (i % 5) as usize]);
            assert!(cache.len() <= 3);
        }
        assert_eq!(cache.evictions(), 47);
    }
}
