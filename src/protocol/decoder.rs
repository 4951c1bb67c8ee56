//! Protocol decoder
//!
//! Turns inbound buffers into [`Request`] and [`Response`] records.
//!
//! ## Request Grammar (per command chunk)
//! ```text
//! line[0]          *N
//! line[1]          $len(command)
//! line[2]          command
//! line[3] (N >= 2) $len(key)
//! line[4] (N >= 2) key
//! line[5] (N >= 3) $len(value)
//! line[6] (N >= 3) value
//! line[last]       correlation id
//! ```
//!
//! All operations are pure: they read the input buffer and return freshly
//! owned records, so one [`Decoder`] can be shared across connection threads.

use crate::config::DecoderConfig;
use crate::error::{CodecError, Field, Result};
use super::message::{
    HeartbeatRequest, HeartbeatResponse, Request, Response, ResponseType, NONE_SENTINEL,
};
use super::tokenizer::{split_commands, LineScanner};
use super::INNER_DELIMITER;

/// Payload used for the null bulk reply `$-1\r\n`
const NULL_BULK_PAYLOAD: &str = "-1";

const ARRAY_MARKER: char = '*';
const BULK_MARKER: char = '$';

/// Stateless decoder parameterized by a [`DecoderConfig`]
#[derive(Debug, Clone, Default)]
pub struct Decoder {
    config: DecoderConfig,
}

impl Decoder {
    pub fn new(config: DecoderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    // =========================================================================
    // Requests
    // =========================================================================

    /// Decode every pipelined request in `buffer`
    ///
    /// Fails as a whole if any chunk fails; no partial results are returned.
    pub fn decode_requests(&self, buffer: &[u8]) -> Result<Vec<Request>> {
        if buffer.len() < self.config.min_request_len {
            return Err(CodecError::Framing {
                len: buffer.len(),
                min: self.config.min_request_len,
            });
        }
        let text = self.check_buffer(buffer)?;

        let chunks = split_commands(text);
        tracing::debug!("Decoding {} command(s) from {} bytes", chunks.len(), buffer.len());

        chunks
            .into_iter()
            .map(|chunk| self.decode_request_chunk(chunk))
            .collect()
    }

    fn decode_request_chunk(&self, chunk: &str) -> Result<Request> {
        let lines = LineScanner::new(chunk);

        let correlation_id = lines.correlation_id()?;
        let arity = lines.header(0, ARRAY_MARKER)?;

        let command = lines.line(2)?.to_uppercase();
        check_length(&lines, 1, Field::Command, &command)?;

        // Arity 1 and the introspection probe carry no key
        if arity < 2 || command == self.config.introspection_command {
            tracing::trace!("Decoded key-less command {} (arity {})", command, arity);
            return Ok(Request::new(command, NONE_SENTINEL, NONE_SENTINEL, correlation_id));
        }

        let key = lines.line(4)?;
        check_length(&lines, 3, Field::Key, key)?;

        // The value is present whenever the chunk reaches line 6, whatever N says
        let value = if lines.len() >= 7 {
            let value = lines.line(6)?;
            check_length(&lines, 5, Field::Value, value)?;
            value
        } else {
            NONE_SENTINEL
        };

        let request = Request::new(command, key, value, correlation_id);
        tracing::trace!("Decoded request (arity {}): {:?}", arity, request);
        Ok(request)
    }

    // =========================================================================
    // Responses
    // =========================================================================

    /// Decode a single response, with its optional trailing correlation id
    pub fn decode_response(&self, buffer: &[u8]) -> Result<Response> {
        if buffer.is_empty() {
            return Err(CodecError::EmptyResponse);
        }
        let text = self.check_buffer(buffer)?;

        let segments = split_commands(text);
        let (data, correlation_id) = match segments.as_slice() {
            [data, id, ..] => (*data, *id),
            [data] => (*data, ""),
            [] => (text, ""),
        };

        let marker = data.chars().next().ok_or(CodecError::EmptyResponse)?;
        let response_type =
            ResponseType::from_marker(marker).ok_or(CodecError::UnknownMarker(marker))?;

        let payload = match response_type {
            ResponseType::SimpleString | ResponseType::Error | ResponseType::Integer => {
                data[marker.len_utf8()..]
                    .strip_suffix(INNER_DELIMITER)
                    .ok_or(CodecError::Unterminated)?
                    .to_string()
            }
            ResponseType::BulkString => decode_bulk(data)?,
            ResponseType::Array => {
                tracing::warn!("Array response left undecoded ({} bytes)", data.len());
                String::new()
            }
        };

        Ok(Response::new(response_type, payload, correlation_id))
    }

    // =========================================================================
    // Heartbeats
    // =========================================================================

    /// Placeholder: the heartbeat wire format is not defined yet, so the
    /// buffer is ignored and a fixed record is returned.
    pub fn decode_heartbeat_request(&self, buffer: &[u8]) -> Result<HeartbeatRequest> {
        tracing::debug!(
            "Heartbeat request decode is a placeholder; ignoring {} bytes",
            buffer.len()
        );
        Ok(HeartbeatRequest {
            ip_port: String::new(),
            status: String::new(),
            memory_available: 10_000_000,
        })
    }

    /// Placeholder, see [`Decoder::decode_heartbeat_request`].
    pub fn decode_heartbeat_response(&self, buffer: &[u8]) -> Result<HeartbeatResponse> {
        tracing::debug!(
            "Heartbeat response decode is a placeholder; ignoring {} bytes",
            buffer.len()
        );
        Ok(HeartbeatResponse {
            ok: true,
            data_node_count: 5,
            next_server: None,
        })
    }

    fn check_buffer<'a>(&self, buffer: &'a [u8]) -> Result<&'a str> {
        if buffer.len() > self.config.max_buffer_len {
            return Err(CodecError::BufferTooLarge {
                len: buffer.len(),
                max: self.config.max_buffer_len,
            });
        }
        std::str::from_utf8(buffer).map_err(|_| CodecError::InvalidUtf8)
    }
}

/// Compare the length declared on line `index` with the byte length of `actual`
fn check_length(lines: &LineScanner<'_>, index: usize, field: Field, actual: &str) -> Result<()> {
    let declared = lines.header(index, BULK_MARKER)?;
    if declared != actual.len() as i64 {
        return Err(CodecError::LengthMismatch {
            field,
            declared,
            actual: actual.len(),
        });
    }
    Ok(())
}

/// `$-1\r\n` is null, `$0\r\n\r\n` is empty, anything else carries line 1
fn decode_bulk(data: &str) -> Result<String> {
    let lines = LineScanner::new(data);
    match lines.header(0, BULK_MARKER)? {
        -1 => Ok(NULL_BULK_PAYLOAD.to_string()),
        0 => Ok(String::new()),
        _ => Ok(lines.line(1)?.to_string()),
    }
}

// =============================================================================
// Default-config entry points
// =============================================================================

/// Decode requests with the default configuration
pub fn decode_requests(buffer: &[u8]) -> Result<Vec<Request>> {
    Decoder::default().decode_requests(buffer)
}

/// Decode a response with the default configuration
pub fn decode_response(buffer: &[u8]) -> Result<Response> {
    Decoder::default().decode_response(buffer)
}

/// Placeholder heartbeat request decode with the default configuration
pub fn decode_heartbeat_request(buffer: &[u8]) -> Result<HeartbeatRequest> {
    Decoder::default().decode_heartbeat_request(buffer)
}

/// Placeholder heartbeat response decode with the default configuration
pub fn decode_heartbeat_response(buffer: &[u8]) -> Result<HeartbeatResponse> {
    Decoder::default().decode_heartbeat_response(buffer)
}
