// Copyright (c) 2025 Kilo Autocomplete Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Eviction policies for the Kauai cache.

use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

/// Rule that picks the victim when a full cache must admit a new key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvictionPolicy {
    /// Evict the entry holding the longest result.
    ///
    /// Ties go to the smallest key. This is not recency-based: a hot entry
    /// with many results is still the first to go.
    #[default]
    LargestResult,

    /// Evict the entry whose last read or write is the oldest.
    LeastRecentlyUsed,
}

/// Size measure used by [`EvictionPolicy::LargestResult`].
pub trait EntryWeight {
    /// Returns the weight of this value. For result lists, the number of results.
    fn weight(&self) -> usize;
}

impl<T> EntryWeight for Vec<T> {
    fn weight(&self) -> usize {
        self.len()
    }
}

/// Heap record for the largest-result policy.
///
/// Field order drives the derived ordering: heavier entries first, then the
/// smallest key. `stamp` ties a record to one specific `put`, so records left
/// behind by overwrites or removals can be recognised and skipped.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub(super) struct WeightRecord<K: Ord> {
    pub(super) weight: usize,
    pub(super) key: Reverse<K>,
    pub(super) stamp: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BinaryHeap;

    #[test]
    fn test_heap_prefers_heaviest_then_smallest_key() {
        let mut heap = BinaryHeap::new();
        for (weight, key, stamp) in [(2, "b", 0), (3, "c", 1), (3, "a", 2), (1, "z", 3)] {
            heap.push(WeightRecord {
                weight,
                key: Reverse(key),
                stamp,
            });
        }

        let order: Vec<&str> = std::iter::from_fn(|| heap.pop().map(|r| r.key.0)).collect();
        assert_eq!(order, vec!["a", "c", "b", "z"]);
    }

    #[test]
    fn test_policy_serde_names() {
        let json = serde_json::to_string(&EvictionPolicy::LeastRecentlyUsed).unwrap();
        assert_eq!(json, r#""least_recently_used""#);
        assert_eq!(EvictionPolicy::default(), EvictionPolicy::LargestResult);
    }
}
