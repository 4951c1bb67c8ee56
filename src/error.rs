//! Error types for cachewire
//!
//! Every decode failure is reported through one error type so the
//! connection layer can decide whether to close or answer with an error reply.

use std::fmt;

use thiserror::Error;

/// Result type alias using CodecError
pub type Result<T> = std::result::Result<T, CodecError>;

/// Request field whose declared length is checked against its content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Command,
    Key,
    Value,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Command => "command",
            Field::Key => "key",
            Field::Value => "value",
        };
        f.write_str(name)
    }
}

/// Unified error type for decode operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    // -------------------------------------------------------------------------
    // Framing Errors
    // -------------------------------------------------------------------------
    #[error("Framing error: buffer of {len} bytes is shorter than the minimum of {min}")]
    Framing { len: usize, min: usize },

    #[error("Framing error: buffer of {len} bytes exceeds the maximum of {max}")]
    BufferTooLarge { len: usize, max: usize },

    #[error("Buffer is not valid UTF-8")]
    InvalidUtf8,

    // -------------------------------------------------------------------------
    // Field Errors
    // -------------------------------------------------------------------------
    #[error("{field} length mismatch: declared {declared}, actual {actual}")]
    LengthMismatch {
        field: Field,
        declared: i64,
        actual: usize,
    },

    #[error("Invalid integer on line {line}: {text:?}")]
    NumericParse { line: usize, text: String },

    #[error("Line {line} should start with {expected:?}: {text:?}")]
    UnexpectedMarker {
        line: usize,
        expected: char,
        text: String,
    },

    #[error("Missing line {index}: chunk has only {available} lines")]
    MissingLine { index: usize, available: usize },

    // -------------------------------------------------------------------------
    // Response Errors
    // -------------------------------------------------------------------------
    #[error("Empty response buffer")]
    EmptyResponse,

    #[error("Unknown response marker: {0:?}")]
    UnknownMarker(char),

    #[error("Response line is not terminated by CRLF")]
    Unterminated,
}

impl CodecError {
    /// True for errors raised before any field was parsed
    pub fn is_framing(&self) -> bool {
        matches!(
            self,
            CodecError::Framing { .. } | CodecError::BufferTooLarge { .. }
        )
    }

    /// True if a declared field length did not match the field
    pub fn is_length_mismatch(&self) -> bool {
        matches!(self, CodecError::LengthMismatch { .. })
    }
}
