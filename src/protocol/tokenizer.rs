//! Line tokenizer
//!
//! Splits raw buffers into command chunks and protocol lines. No validation
//! happens here apart from the typed accessors on [`LineScanner`].

use crate::error::{CodecError, Result};
use super::{INNER_DELIMITER, OUTER_DELIMITER};

/// Split `text` on `delimiter`, dropping trailing empty segments.
///
/// Interior empty segments are kept so line indexes stay aligned with the
/// wire layout.
fn split_trimmed<'a>(text: &'a str, delimiter: &str) -> Vec<&'a str> {
    let mut parts: Vec<&str> = text.split(delimiter).collect();
    while parts.last().is_some_and(|part| part.is_empty()) {
        parts.pop();
    }
    parts
}

/// Split a buffer into pipelined command chunks
pub fn split_commands(buffer: &str) -> Vec<&str> {
    split_trimmed(buffer, OUTER_DELIMITER)
}

/// Split one command chunk into protocol lines
pub fn split_lines(chunk: &str) -> Vec<&str> {
    split_trimmed(chunk, INNER_DELIMITER)
}

/// Indexed access to the lines of one command chunk
#[derive(Debug, Clone)]
pub struct LineScanner<'a> {
    lines: Vec<&'a str>,
}

impl<'a> LineScanner<'a> {
    pub fn new(chunk: &'a str) -> Self {
        Self {
            lines: split_lines(chunk),
        }
    }

    /// Number of lines in the chunk
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Line at `index`
    pub fn line(&self, index: usize) -> Result<&'a str> {
        self.lines
            .get(index)
            .copied()
            .ok_or(CodecError::MissingLine {
                index,
                available: self.lines.len(),
            })
    }

    /// The final line, which carries the correlation id
    pub fn correlation_id(&self) -> Result<&'a str> {
        self.lines.last().copied().ok_or(CodecError::MissingLine {
            index: 0,
            available: 0,
        })
    }

    /// Parse the integer following `marker` on line `index`
    ///
    /// Used for both `*N` arity lines and `$len` length lines. Only an
    /// optional `-` sign and ASCII digits may follow the marker.
    pub fn header(&self, index: usize, marker: char) -> Result<i64> {
        let line = self.line(index)?;
        let digits = line
            .strip_prefix(marker)
            .ok_or_else(|| CodecError::UnexpectedMarker {
                line: index,
                expected: marker,
                text: line.to_string(),
            })?;

        let numeric = digits.strip_prefix('-').unwrap_or(digits);
        if numeric.is_empty() || !numeric.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CodecError::NumericParse {
                line: index,
                text: line.to_string(),
            });
        }
        digits.parse::<i64>().map_err(|_| CodecError::NumericParse {
            line: index,
            text: line.to_string(),
        })
    }
}
