// Copyright (c) 2025 Kilo Autocomplete Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Line-delimited JSON serving loop.
//!
//! Reads one request per line until end of input and writes one response per
//! line. A bad request produces an error response and the loop carries on;
//! only I/O failures end it early.
//!
//! Lines are read as raw bytes and never buffered past the handler's
//! `max_line_bytes`. The remainder of an over-long line is skipped without
//! being stored.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tracing::info;

use super::handler::RequestHandler;
use crate::error::protocol::ProtocolError;
use crate::error::KiloResult;

/// Totals for one serving session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ServeSummary {
    /// Lines answered
    pub requests: usize,
    /// Lines answered with an error response
    pub failures: usize,
}

/// Serves requests from `reader`, writing responses to `writer`.
///
/// # Returns
///
/// * `Ok(ServeSummary)` - once `reader` reaches end of input
/// * `Err(KiloError)` - if reading or writing fails
pub async fn serve<R, W>(
    handler: &RequestHandler,
    mut reader: R,
    mut writer: W,
) -> KiloResult<ServeSummary>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let max_line_bytes = handler.max_line_bytes();
    let read_limit = (max_line_bytes as u64).saturating_add(1);
    let mut summary = ServeSummary::default();
    let mut line = Vec::new();

    loop {
        line.clear();
        let read = (&mut reader)
            .take(read_limit)
            .read_until(b'\n', &mut line)
            .await?;
        if read == 0 {
            break;
        }

        let terminated = line.last() == Some(&b'\n');
        let response = if !terminated && line.len() > max_line_bytes {
            let skipped = skip_line(&mut reader).await?;
            handler.reject(ProtocolError::RequestTooLarge {
                size: line.len() + skipped,
                max_size: max_line_bytes,
            })
        } else {
            handler.handle_bytes(trim_line_ending(&line))
        };

        summary.requests += 1;
        if !response.ok {
            summary.failures += 1;
        }

        let mut encoded = serde_json::to_vec(&response)?;
        encoded.push(b'\n');
        writer.write_all(&encoded).await?;
        writer.flush().await?;
    }

    info!(
        requests = summary.requests,
        failures = summary.failures,
        "input closed, stopping"
    );
    Ok(summary)
}

/// Consumes input up to and including the next newline without storing it.
///
/// Returns the number of bytes skipped, newline excluded.
async fn skip_line<R>(reader: &mut R) -> std::io::Result<usize>
where
    R: AsyncBufRead + Unpin,
{
    let mut skipped = 0;
    loop {
        let available = reader.fill_buf().await?;
        if available.is_empty() {
            return Ok(skipped);
        }

        match available.iter().position(|&b| b == b'\n') {
            Some(index) => {
                reader.consume(index + 1);
                return Ok(skipped + index);
            }
            None => {
                let len = available.len();
                reader.consume(len);
                skipped += len;
            }
        }
    }
}

/// Strips a trailing `\n` or `\r\n`.
fn trim_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
