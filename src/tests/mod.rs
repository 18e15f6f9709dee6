//! Test modules for the Kilo autocomplete service.
//!
//! This module contains the crate-level test suites:
//! - Configuration loading and validation
//! - Error types and the global error reporter
//! - Property-based tests of the engine using proptest
//! - Shared fixtures and strategies

pub mod test_utils;

// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{create_test_dir, prefix_strategy, vocabulary_strategy, word_strategy, TestFixture};
