// Copyright (c) 2025 Kilo Autocomplete Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Bounded completion collection over a trie subtree.
//!
//! The collector walks a subtree depth-first in pre-order, emitting a terminal
//! node before any of its descendants and visiting children in the order their
//! edges were created. No sorting pass is made, so the result order reflects
//! historical insertion order rather than lexical or popularity order.
//!
//! The walk uses an explicit stack, so word length never limits stack depth.
//! It stops as soon as `max_suggestions` results have been produced and never
//! looks at the remaining subtrees.

use serde::{Deserialize, Serialize};

use super::node::TrieNode;

/// A single completion: a vocabulary word and its popularity count.
///
/// On the wire a suggestion is a two-element array `[word, frequency]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(String, u64)", into = "(String, u64)")]
pub struct Suggestion {
    /// The completed word, in normalized (lowercase) form
    pub word: String,

    /// How many times the word has been inserted
    pub frequency: u64,
}

impl Suggestion {
    /// Creates a new suggestion.
    pub fn new(word: impl Into<String>, frequency: u64) -> Self {
        Self {
            word: word.into(),
            frequency,
        }
    }
}

impl From<(String, u64)> for Suggestion {
    fn from((word, frequency): (String, u64)) -> Self {
        Self { word, frequency }
    }
}

impl From<Suggestion> for (String, u64) {
    fn from(suggestion: Suggestion) -> Self {
        (suggestion.word, suggestion.frequency)
    }
}

/// Collects up to `max_suggestions` completions from the subtree rooted at `start`.
///
/// # Arguments
///
/// * `start` - The subtree root, or `None` when the prefix was not found.
/// * `prefix` - The normalized prefix that leads to `start`.
/// * `max_suggestions` - Upper bound on the number of results.
///
/// # Returns
///
/// The completions in pre-order, empty when `start` is `None` or
/// `max_suggestions` is zero.
pub fn collect_completions(
    start: Option<&TrieNode>,
    prefix: &str,
    max_suggestions: usize,
) -> Vec<Suggestion> {
    let start = match start {
        Some(node) if max_suggestions > 0 => node,
        _ => return Vec::new(),
    };

    let mut suggestions = Vec::with_capacity(max_suggestions.min(16));
    if start.is_terminal() {
        suggestions.push(Suggestion::new(prefix, start.frequency()));
    }

    // Each frame remembers the buffer length of its parent path so the buffer
    // can be rewound before the frame's own edge is appended.
    let mut buffer = String::with_capacity(prefix.len() + 16);
    buffer.push_str(prefix);
    let mut stack: Vec<(usize, char, &TrieNode)> = start
        .children()
        .rev()
        .map(|(c, child)| (prefix.len(), c, child))
        .collect();

    while suggestions.len() < max_suggestions {
        let Some((parent_len, c, node)) = stack.pop() else {
            break;
        };

        buffer.truncate(parent_len);
        buffer.push(c);

        if node.is_terminal() {
            suggestions.push(Suggestion::new(buffer.as_str(), node.frequency()));
        }

        let depth_len = buffer.len();
        stack.extend(node.children().rev().map(|(c, child)| (depth_len, c, child)));
    }

    suggestions
}
