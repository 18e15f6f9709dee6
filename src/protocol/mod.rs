// Copyright (c) 2025 Kilo Autocomplete Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Protocol module for the Kilo autocomplete service.
//!
//! This module exposes the engine over a line-delimited JSON protocol: request
//! and response types, a dispatcher, and an async serving loop over any
//! buffered reader and writer (standard I/O in the binary).
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use kilo_autocomplete_lib::engine::AutocompleteEngine;
//! use kilo_autocomplete_lib::protocol::RequestHandler;
//!
//! let engine = Arc::new(AutocompleteEngine::new());
//! engine.insert("door");
//!
//! let handler = RequestHandler::new(engine, 64 * 1024);
//! let response = handler.handle_line(r#"{"op":"query","prefix":"do"}"#);
//! assert_eq!(
//!     serde_json::to_string(&response).unwrap(),
//!     r#"{"ok":true,"result":[["door",1]]}"#
//! );
//! ```

pub mod handler;
pub mod server;
pub mod types;

pub use handler::RequestHandler;
pub use server::{serve, ServeSummary};
pub use types::{InsertOutcome, Request, Response, ResponseBody};
