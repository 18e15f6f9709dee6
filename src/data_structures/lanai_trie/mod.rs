// Copyright (c) 2025 Kilo Autocomplete Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Lanai Completion Trie Implementation
//!
//! This module provides a character-indexed prefix tree that stores a
//! vocabulary together with per-word popularity counts. Words are normalized
//! to lowercase on the way in, and prefix lookups use the same normalization.
//!
//! The trie only grows: there is no removal operation, and inserting a word
//! that is already present only increments its frequency.
//!
//! # Example
//!
//! ```
//! use kilo_autocomplete_lib::data_structures::lanai_trie::{LanaiTrie, Suggestion};
//!
//! let mut trie = LanaiTrie::new();
//! trie.insert("Apple");
//! trie.insert("app");
//! trie.insert("apple");
//!
//! assert_eq!(trie.frequency("APPLE"), 2);
//! assert_eq!(
//!     trie.complete("ap", 5),
//!     vec![Suggestion::new("app", 1), Suggestion::new("apple", 2)]
//! );
//! ```

mod collector;
mod node;

pub use collector::{collect_completions, Suggestion};
pub use node::TrieNode;

/// Normalizes a word or prefix to the trie's canonical (lowercase) form.
pub fn normalize(input: &str) -> String {
    input.to_lowercase()
}

/// Lanai Trie is a prefix tree indexing a vocabulary by shared prefixes.
///
/// Key features:
/// * Case-insensitive insertion and lookup
/// * Popularity tracking through repeated insertion
/// * Child edges kept in creation order for reproducible traversal
/// * Node and word counts maintained incrementally
#[derive(Debug, Default)]
pub struct LanaiTrie {
    /// The root node of the trie
    root: TrieNode,

    /// Number of distinct words stored
    words: usize,

    /// Number of nodes, root included
    nodes: usize,
}

impl LanaiTrie {
    /// Creates a new empty `LanaiTrie`.
    pub fn new() -> Self {
        Self {
            root: TrieNode::new(),
            words: 0,
            nodes: 1,
        }
    }

    /// Inserts a word, creating any missing path nodes.
    ///
    /// # Arguments
    ///
    /// * `word` - The word to insert. It is lowercased first.
    ///
    /// # Returns
    ///
    /// The word's frequency after this insertion, or `0` if the word was empty
    /// and nothing was stored.
    pub fn insert<W>(&mut self, word: W) -> u64
    where
        W: AsRef<str>,
    {
        let word = normalize(word.as_ref());
        if word.is_empty() {
            return 0;
        }

        let mut node = &mut self.root;
        for c in word.chars() {
            let (next, created) = node.child_or_insert(c);
            if created {
                self.nodes += 1;
            }
            node = next;
        }

        if !node.is_terminal() {
            self.words += 1;
        }
        node.record_word()
    }

    /// Walks the trie along `prefix`.
    ///
    /// # Returns
    ///
    /// The node the prefix leads to, or `None` if some character has no
    /// matching edge. The empty prefix locates the root.
    pub fn locate<P>(&self, prefix: P) -> Option<&TrieNode>
    where
        P: AsRef<str>,
    {
        normalize(prefix.as_ref())
            .chars()
            .try_fold(&self.root, |node, c| node.child(c))
    }

    /// Returns up to `max_suggestions` completions for `prefix`.
    ///
    /// This is [`LanaiTrie::locate`] followed by [`collect_completions`].
    pub fn complete<P>(&self, prefix: P, max_suggestions: usize) -> Vec<Suggestion>
    where
        P: AsRef<str>,
    {
        let prefix = normalize(prefix.as_ref());
        collect_completions(self.locate(&prefix), &prefix, max_suggestions)
    }

    /// Returns how many times `word` has been inserted, `0` if never.
    pub fn frequency<W>(&self, word: W) -> u64
    where
        W: AsRef<str>,
    {
        self.locate(word).map_or(0, TrieNode::frequency)
    }

    /// Checks whether `word` was inserted at least once.
    pub fn contains<W>(&self, word: W) -> bool
    where
        W: AsRef<str>,
    {
        self.locate(word).is_some_and(TrieNode::is_terminal)
    }

    /// Returns the number of distinct words in the trie.
    pub fn len(&self) -> usize {
        self.words
    }

    /// Checks whether the trie holds no words.
    pub fn is_empty(&self) -> bool {
        self.words == 0
    }

    /// Returns the number of nodes in the tree, root included.
    pub fn node_count(&self) -> usize {
        self.nodes
    }

    /// Returns the root node.
    pub fn root(&self) -> &TrieNode {
        &self.root
    }
}
