// Copyright (c) 2025 Kilo Autocomplete Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the Lanai completion trie.
//!
//! Each node owns its children directly. Child edges are kept in a vector in
//! the order they were first created, which is the order the collector visits
//! them in.

/// A node in the Lanai completion trie.
///
/// Each node represents one character position in the vocabulary's shared
/// prefix tree. Terminal nodes carry the popularity count of the word that
/// ends at them.
#[derive(Debug, Default)]
pub struct TrieNode {
    /// Child edges in creation order. Keys are unique.
    children: Vec<(char, TrieNode)>,

    /// Whether some inserted word ends exactly at this node
    is_terminal: bool,

    /// Number of times the word ending here has been inserted
    frequency: u64,
}

impl TrieNode {
    /// Creates a new empty trie node.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the child reached through `c`, if that edge exists.
    pub fn child(&self, c: char) -> Option<&TrieNode> {
        self.children
            .iter()
            .find(|(edge, _)| *edge == c)
            .map(|(_, child)| child)
    }

    /// Returns the child reached through `c`, creating the edge if needed.
    ///
    /// The boolean is `true` when a new node was created. New edges are
    /// appended, so existing edges keep their position.
    pub(crate) fn child_or_insert(&mut self, c: char) -> (&mut TrieNode, bool) {
        let (index, created) = match self.children.iter().position(|(edge, _)| *edge == c) {
            Some(index) => (index, false),
            None => {
                self.children.push((c, TrieNode::new()));
                (self.children.len() - 1, true)
            }
        };
        (&mut self.children[index].1, created)
    }

    /// Iterates over the child edges in creation order.
    pub fn children(&self) -> impl DoubleEndedIterator<Item = (char, &TrieNode)> + '_ {
        self.children.iter().map(|(edge, child)| (*edge, child))
    }

    /// Number of direct children.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Whether a word ends at this node.
    pub fn is_terminal(&self) -> bool {
        self.is_terminal
    }

    /// Popularity count of the word ending here, `0` for non-terminal nodes.
    pub fn frequency(&self) -> u64 {
        self.frequency
    }

    /// Marks this node as the end of a word and bumps its count.
    ///
    /// Returns the updated frequency.
    pub(crate) fn record_word(&mut self) -> u64 {
        self.is_terminal = true;
        self.frequency = self.frequency.saturating_add(1);
        self.frequency
    }
}
