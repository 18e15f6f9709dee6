// Copyright (c) 2025 Kilo Autocomplete Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Request dispatching for the line-delimited JSON protocol.

use std::sync::Arc;

use tracing::{debug, warn};

use super::types::{InsertOutcome, Request, Response, ResponseBody};
use crate::data_structures::lanai_trie::normalize;
use crate::engine::AutocompleteEngine;
use crate::error::protocol::ProtocolError;

/// Decodes request lines and runs them against a shared engine.
#[derive(Debug, Clone)]
pub struct RequestHandler {
    engine: Arc<AutocompleteEngine>,
    max_line_bytes: usize,
}

impl RequestHandler {
    /// Creates a handler for `engine` that rejects lines above `max_line_bytes`.
    pub fn new(engine: Arc<AutocompleteEngine>, max_line_bytes: usize) -> Self {
        Self {
            engine,
            max_line_bytes,
        }
    }

    /// Returns the engine this handler dispatches to.
    pub fn engine(&self) -> &Arc<AutocompleteEngine> {
        &self.engine
    }

    /// Parses one request line.
    pub fn decode(&self, line: &str) -> Result<Request, ProtocolError> {
        if line.len() > self.max_line_bytes {
            return Err(ProtocolError::RequestTooLarge {
                size: line.len(),
                max_size: self.max_line_bytes,
            });
        }

        let line = line.trim();
        if line.is_empty() {
            return Err(ProtocolError::EmptyRequest);
        }

        serde_json::from_str(line).map_err(|e| ProtocolError::InvalidRequest(e.to_string()))
    }

    /// Runs a decoded request.
    pub fn handle(&self, request: Request) -> ResponseBody {
        match request {
            Request::Query {
                prefix,
                max_suggestions,
            } => {
                let limit =
                    max_suggestions.unwrap_or(self.engine.options().default_max_suggestions);
                debug!(prefix = %prefix, limit, "query");
                ResponseBody::Suggestions(self.engine.query(&prefix, limit))
            }
            Request::Insert { word } => {
                let frequency = self.engine.insert(&word);
                ResponseBody::Inserted(InsertOutcome {
                    word: normalize(&word),
                    frequency,
                })
            }
            Request::Stats => ResponseBody::Stats(self.engine.stats()),
        }
    }

    /// Returns the largest accepted request line, in bytes.
    pub fn max_line_bytes(&self) -> usize {
        self.max_line_bytes
    }

    /// Decodes and runs one request line. Failures become error responses.
    pub fn handle_line(&self, line: &str) -> Response {
        match self.decode(line) {
            Ok(request) => Response::success(self.handle(request)),
            Err(e) => self.reject(e),
        }
    }

    /// Like [`handle_line`](Self::handle_line), for a line read as raw bytes.
    ///
    /// A line that is not valid UTF-8 gets an error response.
    pub fn handle_bytes(&self, line: &[u8]) -> Response {
        match std::str::from_utf8(line) {
            Ok(text) => self.handle_line(text),
            Err(e) => self.reject(ProtocolError::InvalidRequest(format!(
                "request is not valid UTF-8: {e}"
            ))),
        }
    }

    /// Builds the error response for a rejected request.
    pub fn reject(&self, error: ProtocolError) -> Response {
        warn!(error = %error, "rejected request");
        Response::failure(error.to_string())
    }
}
