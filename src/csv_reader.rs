//! Streaming fixed-arity row reading
//!
//! [`RowReader`] is a cursor over a line stream. Once bound to a stream it
//! always holds the most recent row; [`RowReader::advance`] replaces it with
//! the next one. When the stream runs dry the reader becomes the end
//! sentinel, which compares equal to every other end sentinel.

use crate::csv::{LineSource, RowSplitter};
use crate::error::{CsvError, Result};
use crate::options::{ReaderOptions, ScanMode};
use crate::types::{Row, Span};
use std::cell::RefCell;
use std::fmt;
use std::ptr;
use tracing::{debug, trace, warn};

const LINE_CAPACITY: usize = 1024;

/// Streaming reader producing rows of exactly `N` fields
///
/// The reader borrows its stream and owns the buffer the current row points
/// into. Rows are handed out as [`Row`] views borrowed from the reader, so no
/// field string is allocated per line.
///
/// # Examples
///
/// ```
/// use fixedcsv::RowReader;
/// use std::cell::RefCell;
/// use std::io::Cursor;
///
/// let stream = RefCell::new(Cursor::new("not|much|to|say\n1|2|3|4\n"));
/// let mut reader = RowReader::<_, 4>::with_delimiter(&stream, b'|')?;
///
/// while let Some(row) = reader.row() {
///     println!("{}", row);
///     reader.advance()?;
/// }
/// assert!(reader.is_end());
/// # Ok::<(), fixedcsv::CsvError>(())
/// ```
///
/// # Validating input
///
/// ```
/// use fixedcsv::{CsvError, ReaderOptions, RowReader};
/// use std::cell::RefCell;
/// use std::io::Cursor;
///
/// let stream = RefCell::new(Cursor::new("a,b,c\n1,2\n"));
/// let mut reader = RowReader::<_, 3>::with_options(&stream, ReaderOptions::new().checked())?;
///
/// let err = reader.advance().unwrap_err();
/// assert!(matches!(err, CsvError::FieldCount { line: 2, expected: 3, found: 2 }));
/// // The previous row is still available
/// assert_eq!(reader.row().unwrap(), ["a", "b", "c"]);
/// # Ok::<(), fixedcsv::CsvError>(())
/// ```
pub struct RowReader<'s, S, const N: usize> {
    // None marks the end sentinel
    stream: Option<&'s RefCell<S>>,
    splitter: RowSplitter,

    // Current line and the spans into it
    line: String,
    spans: [Span; N],

    // Lines are read here first so a rejected line never clobbers `line`
    scratch: String,
    line_number: u64,
}

impl<'s, S, const N: usize> RowReader<'s, S, N> {
    /// The end sentinel: bound to no stream, holds no row
    pub fn end() -> Self {
        let options = ReaderOptions::default();
        RowReader {
            stream: None,
            splitter: RowSplitter::new(options.delimiter, options.mode),
            line: String::new(),
            spans: [Span::default(); N],
            scratch: String::new(),
            line_number: 0,
        }
    }

    /// Whether the reader is exhausted (or was built as the end sentinel)
    pub fn is_end(&self) -> bool {
        self.stream.is_none()
    }

    /// Current row, `None` once the reader has reached the end
    pub fn row(&self) -> Option<Row<'_, N>> {
        self.stream?;
        Some(Row::from_spans(&self.line, &self.spans))
    }

    /// Raw text of the current row, terminator stripped
    pub fn line(&self) -> Option<&str> {
        self.stream.map(|_| self.line.as_str())
    }

    /// Field separator
    pub fn delimiter(&self) -> u8 {
        self.splitter.delimiter()
    }

    /// Scan mode chosen at construction
    pub fn mode(&self) -> ScanMode {
        self.splitter.mode()
    }

    /// Number of lines consumed from the stream so far
    ///
    /// Counts rejected lines too, so it is the 1-based number of the last
    /// line read.
    pub fn line_number(&self) -> u64 {
        self.line_number
    }

    /// Exchange the complete state of two readers
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(self, other);
    }
}

impl<'s, S: LineSource, const N: usize> RowReader<'s, S, N> {
    /// Bind to `stream` with the default `,` delimiter and fast scanning
    ///
    /// Reads the first line immediately. An empty stream yields a reader
    /// that is already at the end.
    pub fn new(stream: &'s RefCell<S>) -> Result<Self> {
        Self::with_options(stream, ReaderOptions::default())
    }

    /// Bind to `stream` with a custom delimiter and fast scanning
    pub fn with_delimiter(stream: &'s RefCell<S>, delimiter: u8) -> Result<Self> {
        Self::with_options(stream, ReaderOptions::new().delimiter(delimiter))
    }

    /// Bind to `stream` with explicit options
    ///
    /// # Errors
    ///
    /// Returns [`CsvError::InvalidDelimiter`] for a delimiter that is not
    /// ASCII or is a line terminator, and any error produced while reading
    /// the first row.
    pub fn with_options(stream: &'s RefCell<S>, options: ReaderOptions) -> Result<Self> {
        options.validate()?;

        let mut reader = RowReader {
            stream: Some(stream),
            splitter: RowSplitter::new(options.delimiter, options.mode),
            line: String::with_capacity(LINE_CAPACITY),
            spans: [Span::default(); N],
            scratch: String::with_capacity(LINE_CAPACITY),
            line_number: 0,
        };
        reader.advance()?;
        Ok(reader)
    }

    /// Read the next line and make it the current row
    ///
    /// At the end this is a no-op. Reaching the end of the stream moves the
    /// reader to the end state. A read failure does the same and returns
    /// the error.
    ///
    /// # Errors
    ///
    /// - [`CsvError::Io`] if the stream fails; the reader is at the end
    ///   afterwards.
    /// - [`CsvError::FieldCount`] in checked mode when the line has the
    ///   wrong number of fields. The previous row stays current and the next
    ///   call continues with the following line.
    ///
    /// # Panics
    ///
    /// In fast mode, panics if the line has fewer than `N` fields.
    pub fn advance(&mut self) -> Result<()> {
        let stream = match self.stream {
            Some(stream) => stream,
            None => return Ok(()),
        };

        let read = stream.borrow_mut().next_line(&mut self.scratch);
        match read {
            Ok(true) => {}
            Ok(false) => {
                debug!(lines = self.line_number, "end of stream");
                self.stream = None;
                return Ok(());
            }
            Err(e) => {
                warn!(line = self.line_number + 1, error = %e, "read failed, ending iteration");
                self.stream = None;
                return Err(CsvError::Io(e));
            }
        }
        self.line_number += 1;

        match self.splitter.split::<N>(&self.scratch) {
            Ok(spans) => {
                std::mem::swap(&mut self.line, &mut self.scratch);
                self.spans = spans;
                trace!(line = self.line_number, len = self.line.len(), "row parsed");
                Ok(())
            }
            Err(mismatch) => {
                warn!(
                    line = self.line_number,
                    expected = mismatch.expected,
                    found = mismatch.found,
                    "field count mismatch"
                );
                Err(CsvError::FieldCount {
                    line: self.line_number,
                    expected: mismatch.expected,
                    found: mismatch.found,
                })
            }
        }
    }

    /// Advance, returning the reader as it was before the call
    pub fn step(&mut self) -> Result<Self> {
        let previous = self.clone();
        self.advance()?;
        Ok(previous)
    }

    /// Turn the reader into an iterator of owned rows
    ///
    /// Starts with the current row. Each item allocates its fields; use
    /// [`RowReader::row`] and [`RowReader::advance`] to stay allocation free.
    pub fn into_owned_rows(self) -> OwnedRows<'s, S, N> {
        OwnedRows {
            reader: self,
            pending: true,
        }
    }
}

impl<'s, S, const N: usize> Default for RowReader<'s, S, N> {
    fn default() -> Self {
        Self::end()
    }
}

impl<'s, S, const N: usize> Clone for RowReader<'s, S, N> {
    // Spans are offsets, so the copied buffer needs no re-slicing
    fn clone(&self) -> Self {
        RowReader {
            stream: self.stream,
            splitter: self.splitter,
            line: self.line.clone(),
            spans: self.spans,
            scratch: String::with_capacity(self.line.capacity()),
            line_number: self.line_number,
        }
    }
}

/// Readers are equal when they read the same stream, or are both at the end
impl<'s, S, const N: usize> PartialEq for RowReader<'s, S, N> {
    fn eq(&self, other: &Self) -> bool {
        match (self.stream, other.stream) {
            (None, None) => true,
            (Some(a), Some(b)) => ptr::eq(a, b),
            _ => false,
        }
    }
}

impl<'s, S, const N: usize> Eq for RowReader<'s, S, N> {}

impl<'s, S, const N: usize> fmt::Debug for RowReader<'s, S, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RowReader")
            .field("columns", &N)
            .field("delimiter", &char::from(self.delimiter()))
            .field("mode", &self.mode())
            .field("line_number", &self.line_number)
            .field("row", &self.row())
            .finish()
    }
}

impl<'s, S: LineSource, const N: usize> IntoIterator for RowReader<'s, S, N> {
    type Item = Result<[String; N]>;
    type IntoIter = OwnedRows<'s, S, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_owned_rows()
    }
}

/// Iterator over owned rows, see [`RowReader::into_owned_rows`]
///
/// After an error item iteration continues with the next line; a read
/// failure ends it.
#[derive(Debug)]
pub struct OwnedRows<'s, S, const N: usize> {
    reader: RowReader<'s, S, N>,
    // Current row has not been yielded yet
    pending: bool,
}

impl<'s, S, const N: usize> OwnedRows<'s, S, N> {
    /// Give the underlying reader back
    pub fn into_inner(self) -> RowReader<'s, S, N> {
        self.reader
    }
}

impl<'s, S: LineSource, const N: usize> Iterator for OwnedRows<'s, S, N> {
    type Item = Result<[String; N]>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.pending {
            if let Err(e) = self.reader.advance() {
                return Some(Err(e));
            }
        }
        self.pending = false;

        let row = self.reader.row()?;
        Some(Ok(row.to_owned_fields()))
    }
}
