//! Data structures for the Kilo autocomplete service.
//!
//! This module contains the two building blocks of the completion engine:
//! - A prefix tree that stores the vocabulary with popularity counts
//! - A bounded cache with configurable eviction for query results

pub mod kauai_cache;
pub mod lanai_trie;

// Re-export common data structures
pub use kauai_cache::{EvictionPolicy, KauaiCache, KauaiCacheConfig};
pub use lanai_trie::{LanaiTrie, Suggestion};
