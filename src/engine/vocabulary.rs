// Copyright (c) 2025 Kilo Autocomplete Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Seed vocabularies.
//!
//! The engine is seeded once at startup. Order matters: the order in which
//! words are first inserted fixes the order in which completions come back.

use std::path::{Path, PathBuf};

use crate::error::KiloResult;

/// A source of words to seed the engine with.
#[cfg_attr(test, mockall::automock)]
pub trait VocabularySource: Send + Sync {
    /// Short human-readable description, used in logs.
    fn describe(&self) -> String;

    /// Returns the words in insertion order.
    fn words(&self) -> KiloResult<Vec<String>>;
}

/// A fixed, in-memory word list.
#[derive(Debug, Clone, Default)]
pub struct StaticVocabulary {
    words: Vec<String>,
}

impl StaticVocabulary {
    /// Creates a vocabulary from any list of words.
    pub fn new<I, W>(words: I) -> Self
    where
        I: IntoIterator<Item = W>,
        W: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }
}

impl VocabularySource for StaticVocabulary {
    fn describe(&self) -> String {
        format!("static list ({} words)", self.words.len())
    }

    fn words(&self) -> KiloResult<Vec<String>> {
        Ok(self.words.clone())
    }
}

/// A word list read from a text file, one word per line.
///
/// Surrounding whitespace is trimmed. Blank lines and lines starting with `#`
/// are skipped.
#[derive(Debug, Clone)]
pub struct FileVocabulary {
    path: PathBuf,
}

impl FileVocabulary {
    /// Creates a vocabulary backed by the file at `path`.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl VocabularySource for FileVocabulary {
    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }

    fn words(&self) -> KiloResult<Vec<String>> {
        let contents = std::fs::read_to_string(&self.path)?;
        Ok(contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_string)
            .collect())
    }
}
