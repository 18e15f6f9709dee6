//! Test utilities and fixtures for the Kilo autocomplete service.
//!
//! This module provides reusable strategies for property-based testing and a
//! fixture that owns a temporary directory and environment overrides.

use proptest::prelude::*;
use proptest::strategy::{BoxedStrategy, Strategy};
use std::path::PathBuf;
use tempfile::TempDir;

use crate::engine::AutocompleteEngine;

/// Maximum word length for generated test data.
const MAX_WORD_LENGTH: usize = 12;

/// Maximum vocabulary size for generated test data.
const MAX_VOCABULARY_SIZE: usize = 40;

/// Create a temporary directory for test files.
///
/// # Returns
///
/// A result containing the temporary directory or an error if creation fails.
pub fn create_test_dir() -> std::io::Result<TempDir> {
    tempfile::tempdir()
}

/// Generate a strategy for non-empty words over a small alphabet.
///
/// A small alphabet makes shared prefixes likely, which is where the
/// interesting trie behavior lives. Upper case letters are included so
/// normalization is exercised.
pub fn word_strategy() -> BoxedStrategy<String> {
    proptest::string::string_regex(&format!("[abcAB]{{1,{MAX_WORD_LENGTH}}}"))
        .expect("valid word regex")
        .boxed()
}

/// Generate a strategy for prefixes, including the empty prefix.
pub fn prefix_strategy() -> BoxedStrategy<String> {
    proptest::string::string_regex("[abc]{0,4}")
        .expect("valid prefix regex")
        .boxed()
}

/// Generate a strategy for vocabularies in insertion order.
pub fn vocabulary_strategy() -> BoxedStrategy<Vec<String>> {
    proptest::collection::vec(word_strategy(), 1..MAX_VOCABULARY_SIZE).boxed()
}

/// Builds an engine seeded with `words` in order.
pub fn seeded_engine<W: AsRef<str>>(words: &[W]) -> AutocompleteEngine {
    let engine = AutocompleteEngine::new();
    for word in words {
        engine.insert(word.as_ref());
    }
    engine
}

/// Test fixture for tests requiring files on disk or environment overrides.
///
/// Environment variables set through the fixture are removed when it drops.
pub struct TestFixture {
    /// Temporary directory for test files
    pub temp_dir: TempDir,
    /// Environment variables to clean up after the test
    env_vars: Vec<String>,
}

impl TestFixture {
    /// Create a new test fixture.
    pub fn new() -> std::io::Result<Self> {
        Ok(Self {
            temp_dir: create_test_dir()?,
            env_vars: Vec::new(),
        })
    }

    /// Set an environment variable for this test.
    ///
    /// # Parameters
    ///
    /// * `key` - The name of the environment variable.
    /// * `value` - The value to set.
    pub fn set_env<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        let key_str = key.into();
        std::env::set_var(&key_str, value.into());
        self.env_vars.push(key_str);
    }

    /// Write a file named `name` inside the fixture directory.
    ///
    /// # Returns
    ///
    /// A result containing the path to the file or an error.
    pub fn create_file<C: AsRef<[u8]>>(&self, name: &str, contents: C) -> std::io::Result<PathBuf> {
        let path = self.temp_dir.path().join(name);
        std::fs::write(&path, contents)?;
        Ok(path)
    }
}

impl Drop for TestFixture {
    fn drop(&mut self) {
        for key in &self.env_vars {
            std::env::remove_var(key);
        }
    }
}
