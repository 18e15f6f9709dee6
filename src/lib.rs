//! Kilo Autocomplete Library
//!
//! This library contains the core components of the Kilo autocomplete service:
//! a prefix-completion engine that stores a vocabulary with per-word
//! popularity counts, answers bounded prefix queries, and caches results.
//! The library is designed to be used by the binary crate, but can also
//! be used as a dependency by other projects.
//!
//! # Architecture
//!
//! - [`data_structures`]: the completion trie and the bounded result cache
//! - [`engine`]: the shared engine composing both behind `insert` and `query`
//! - [`protocol`]: a line-delimited JSON adapter over any async reader/writer
//! - [`config`] and [`error`]: layered configuration and error types

// Re-export public modules
pub mod config;
pub mod data_structures;
pub mod engine;
pub mod error;
pub mod protocol;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for the Kilo autocomplete service.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use engine::{AutocompleteEngine, EngineOptions};
