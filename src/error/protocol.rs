//! Protocol error module.
//!
//! This module defines error types that may occur while decoding requests
//! for the line-delimited JSON adapter.

use thiserror::Error;

/// Errors that can occur during protocol operations.
#[derive(Error, Debug)]
pub enum ProtocolError {
    /// Error when a request line is not a valid request object.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Error when a request line is empty or only whitespace.
    #[error("Empty request line")]
    EmptyRequest,

    /// Error when a request line exceeds the maximum allowed size.
    #[error("Request size exceeds maximum allowed: {size} > {max_size}")]
    RequestTooLarge {
        /// The actual size of the line in bytes
        size: usize,
        /// The maximum allowed size in bytes
        max_size: usize,
    },
}
