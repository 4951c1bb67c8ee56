//! Configuration for the decoder
//!
//! Centralized configuration with sensible defaults. The wire delimiters are
//! fixed by the protocol and live in [`crate::protocol`] as constants.

/// Decoder configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecoderConfig {
    // -------------------------------------------------------------------------
    // Framing
    // -------------------------------------------------------------------------
    /// Request buffers shorter than this are rejected before parsing
    pub min_request_len: usize,

    /// Buffers longer than this are rejected before parsing
    pub max_buffer_len: usize,

    // -------------------------------------------------------------------------
    // Commands
    // -------------------------------------------------------------------------
    /// Command that carries no key (sent by redis-cli on connect)
    pub introspection_command: String,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            min_request_len: 6,
            max_buffer_len: 16 * 1024 * 1024, // 16 MB
            introspection_command: "COMMAND".to_string(),
        }
    }
}

impl DecoderConfig {
    /// Create a new config builder
    pub fn builder() -> DecoderConfigBuilder {
        DecoderConfigBuilder::default()
    }
}

/// Builder for DecoderConfig
#[derive(Default)]
pub struct DecoderConfigBuilder {
    config: DecoderConfig,
}

impl DecoderConfigBuilder {
    /// Set the minimum request buffer length (in bytes)
    pub fn min_request_len(mut self, len: usize) -> Self {
        self.config.min_request_len = len;
        self
    }

    /// Set the maximum buffer length (in bytes)
    pub fn max_buffer_len(mut self, len: usize) -> Self {
        self.config.max_buffer_len = len;
        self
    }

    /// Set the key-less introspection command; stored upper-cased
    pub fn introspection_command(mut self, command: impl Into<String>) -> Self {
        self.config.introspection_command = command.into().to_uppercase();
        self
    }

    pub fn build(self) -> DecoderConfig {
        self.config
    }
}
