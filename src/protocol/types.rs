// Copyright (c) 2025 Kilo Autocomplete Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Request and response types for the line-delimited JSON protocol.
//!
//! Every request and every response is a single JSON object on its own line.
//! Query results use the wire form of [`Suggestion`]: an array of
//! `[word, frequency]` pairs, `[]` when nothing matches.

use serde::{Deserialize, Serialize};

use crate::data_structures::lanai_trie::Suggestion;
use crate::engine::EngineStats;

/// A request sent to the adapter, tagged by its `op` field.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Request {
    /// Completions for a prefix
    Query {
        /// Raw prefix text. Missing means the empty prefix.
        #[serde(default)]
        prefix: String,

        /// Result limit. Missing means the configured default.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max_suggestions: Option<usize>,
    },

    /// Add one occurrence of a word
    Insert {
        /// The word to insert
        word: String,
    },

    /// Engine counters
    Stats,
}

/// Outcome of an insert request.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct InsertOutcome {
    /// The normalized word
    pub word: String,

    /// Its frequency after the insert
    pub frequency: u64,
}

/// Payload of a successful response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ResponseBody {
    /// Query result in wire form
    Suggestions(Vec<Suggestion>),

    /// Insert result
    Inserted(InsertOutcome),

    /// Stats snapshot
    Stats(EngineStats),
}

/// A response line.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Response {
    /// Whether the request succeeded
    pub ok: bool,

    /// Payload, present on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<ResponseBody>,

    /// Error message, present on failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Response {
    /// Creates a successful response.
    pub fn success(result: ResponseBody) -> Self {
        Self {
            ok: true,
            result: Some(result),
            error: None,
        }
    }

    /// Creates a failed response.
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            result: None,
            error: Some(error.into()),
        }
    }
}
