//! Error types for row reading

use thiserror::Error;

/// Errors produced while reading rows
#[derive(Debug, Error)]
pub enum CsvError {
    /// The underlying stream failed (including invalid UTF-8 input)
    #[error("Failed to read line: {0}")]
    Io(#[from] std::io::Error),

    /// A line did not contain the configured number of fields (checked mode only)
    #[error("line {line}: expected {expected} fields, found {found}")]
    FieldCount {
        /// 1-based number of the offending line
        line: u64,
        /// Column count the reader was built for
        expected: usize,
        /// Fields actually present on the line
        found: usize,
    },

    /// The delimiter cannot split a line on `char` boundaries
    #[error("invalid delimiter byte 0x{0:02x}: must be ASCII and not a line terminator")]
    InvalidDelimiter(u8),
}

impl CsvError {
    /// Whether this is a field-count mismatch
    pub fn is_field_count(&self) -> bool {
        matches!(self, CsvError::FieldCount { .. })
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, CsvError>;
