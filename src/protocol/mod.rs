//! Protocol Module
//!
//! Decodes the RESP subset spoken between cache clients and data nodes.
//!
//! ## Request Format
//! ```text
//! *N\r\n
//! $len\r\n<command>\r\n
//! [$len\r\n<key>\r\n
//! [$len\r\n<value>\r\n]]
//! <correlation id>
//! ```
//! Several requests may be pipelined in one buffer, separated by `\t\n`.
//!
//! ## Response Format
//! - `+<msg>\r\n`      simple string
//! - `-<msg>\r\n`      error
//! - `:<msg>\r\n`      integer
//! - `$-1\r\n`         null bulk string
//! - `$<len>\r\n<data>\r\n` bulk string
//! - `*...`            array (marker only, body is not decoded)
//!
//! A response may be followed by `\t\n<correlation id>`.

mod message;
mod tokenizer;
mod decoder;

pub use message::{
    HeartbeatRequest, HeartbeatResponse, Request, Response, ResponseType, NONE_SENTINEL,
};
pub use tokenizer::{split_commands, split_lines, LineScanner};
pub use decoder::{
    decode_heartbeat_request, decode_heartbeat_response, decode_requests, decode_response,
    Decoder,
};

/// Separates pipelined commands in one buffer (not part of RESP)
pub const OUTER_DELIMITER: &str = "\t\n";

/// RESP line terminator
pub const INNER_DELIMITER: &str = "\r\n";
