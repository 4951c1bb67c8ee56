//! # cachewire
//!
//! Decoder for the RESP-style protocol used between cache clients and
//! key-value data nodes:
//! - Pipelined multi-bulk requests with a trailing correlation id
//! - Declared-length validation for command, key and value
//! - Typed replies (simple string, error, integer, bulk string, array)
//!
//! ## Data Flow
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                 Inbound buffer (one read)                    │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                    Line Tokenizer                            │
//! │        (split on \t\n into chunks, \r\n into lines)          │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │  Requests   │          │  Response   │
//!   │ (Vec, N>=1) │          │  (single)   │
//!   └─────────────┘          └─────────────┘
//! ```
//!
//! Transport, command execution and cluster liveness live outside this crate.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod protocol;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{CodecError, Field, Result};
pub use config::DecoderConfig;
pub use protocol::{Decoder, Request, Response, ResponseType};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of cachewire
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
