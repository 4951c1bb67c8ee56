//! Message definitions
//!
//! Records produced by the decoder and handed to the dispatch layer.

use serde::{Deserialize, Serialize};

/// Placeholder for an absent key or value
pub const NONE_SENTINEL: &str = "none";

/// A decoded client request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    /// Upper-cased command name, never empty
    pub command: String,

    /// Key, or [`NONE_SENTINEL`] for key-less commands
    pub key: String,

    /// Value, or [`NONE_SENTINEL`] when the command carries none
    pub value: String,

    /// Client-supplied token echoed back with the response
    pub correlation_id: String,
}

impl Request {
    pub fn new(
        command: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
        correlation_id: impl Into<String>,
    ) -> Self {
        Self {
            command: command.into(),
            key: key.into(),
            value: value.into(),
            correlation_id: correlation_id.into(),
        }
    }

    pub fn has_key(&self) -> bool {
        self.key != NONE_SENTINEL
    }

    pub fn has_value(&self) -> bool {
        self.value != NONE_SENTINEL
    }
}

/// Reply type, selected by the first byte of a response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResponseType {
    SimpleString,
    Error,
    Integer,
    BulkString,
    Array,
}

impl ResponseType {
    /// Map a leading marker to its reply type
    pub fn from_marker(marker: char) -> Option<Self> {
        match marker {
            '+' => Some(ResponseType::SimpleString),
            '-' => Some(ResponseType::Error),
            ':' => Some(ResponseType::Integer),
            '$' => Some(ResponseType::BulkString),
            '*' => Some(ResponseType::Array),
            _ => None,
        }
    }

    /// The marker byte for this reply type
    pub fn marker(self) -> char {
        match self {
            ResponseType::SimpleString => '+',
            ResponseType::Error => '-',
            ResponseType::Integer => ':',
            ResponseType::BulkString => '$',
            ResponseType::Array => '*',
        }
    }
}

/// A decoded server response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    /// Reply type
    pub response_type: ResponseType,

    /// Reply text. `"-1"` marks a null bulk string; always empty for arrays.
    pub payload: String,

    /// Correlation id echoed by the client, empty when absent
    pub correlation_id: String,
}

impl Response {
    pub fn new(
        response_type: ResponseType,
        payload: impl Into<String>,
        correlation_id: impl Into<String>,
    ) -> Self {
        Self {
            response_type,
            payload: payload.into(),
            correlation_id: correlation_id.into(),
        }
    }

    /// True for the null bulk reply `$-1\r\n`
    pub fn is_null(&self) -> bool {
        self.response_type == ResponseType::BulkString && self.payload == "-1"
    }

    /// False when the payload was not extracted (array replies)
    pub fn is_decoded(&self) -> bool {
        self.response_type != ResponseType::Array
    }
}

/// Liveness report sent by a data node
///
/// Not parsed from the wire yet; see [`crate::protocol::decode_heartbeat_request`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeartbeatRequest {
    pub ip_port: String,
    pub status: String,
    pub memory_available: u64,
}

/// Reply to a heartbeat
///
/// Not parsed from the wire yet; see [`crate::protocol::decode_heartbeat_response`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeartbeatResponse {
    pub ok: bool,
    pub data_node_count: u32,
    pub next_server: Option<String>,
}
