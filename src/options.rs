//! Reader configuration

use crate::error::{CsvError, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Delimiter used when none is configured
pub const DEFAULT_DELIMITER: u8 = b',';

/// How a line is scanned for delimiters
///
/// The mode is fixed when the reader is built; it is never switched per line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ScanMode {
    /// Stop at the `N-1`th delimiter without looking at the rest of the line.
    ///
    /// Extra delimiters end up inside the last field. A line with too few
    /// delimiters is a caller error and panics.
    #[default]
    Fast,
    /// Count every delimiter and reject lines that do not have exactly `N-1`.
    Checked,
}

/// Options for building a [`RowReader`](crate::RowReader)
///
/// # Examples
///
/// ```
/// use fixedcsv::{ReaderOptions, ScanMode};
///
/// let options = ReaderOptions::new()
///     .delimiter(b'|')
///     .mode(ScanMode::Checked);
///
/// assert_eq!(options.delimiter, b'|');
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ReaderOptions {
    /// Field separator, a single ASCII byte
    pub delimiter: u8,
    /// Delimiter scanning strategy
    pub mode: ScanMode,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            mode: ScanMode::Fast,
        }
    }
}

impl ReaderOptions {
    /// Default options: `,` delimiter, fast scanning
    pub fn new() -> Self {
        Self::default()
    }

    /// Set custom delimiter (builder pattern)
    pub fn delimiter(mut self, delim: u8) -> Self {
        self.delimiter = delim;
        self
    }

    /// Set scan mode (builder pattern)
    pub fn mode(mut self, mode: ScanMode) -> Self {
        self.mode = mode;
        self
    }

    /// Shorthand for `.mode(ScanMode::Checked)`
    pub fn checked(self) -> Self {
        self.mode(ScanMode::Checked)
    }

    /// Reject delimiters that could split a line inside a multi-byte
    /// character or collide with the line terminator.
    pub fn validate(&self) -> Result<()> {
        let d = self.delimiter;
        if !d.is_ascii() || d == b'\n' || d == b'\r' {
            return Err(CsvError::InvalidDelimiter(d));
        }
        Ok(())
    }
}
