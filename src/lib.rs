//! # fixedcsv
//!
//! Streaming CSV reader for files whose column count is known up front.
//!
//! Every line becomes a [`Row`] of exactly `N` fields. Fields are `&str`
//! slices into a line buffer owned by the [`RowReader`], which is reused for
//! every line, so reading does not allocate per row.
//!
//! There is no quoting: a delimiter byte always separates fields. Lines end
//! at `\n` (an optional preceding `\r` is dropped).
//!
//! ## Scan modes
//!
//! - [`ScanMode::Fast`] stops at the `N-1`th delimiter. Extra delimiters end
//!   up in the last field; a line with too few fields panics.
//! - [`ScanMode::Checked`] validates every line and reports
//!   [`CsvError::FieldCount`] instead.
//!
//! ## Quick start
//!
//! ```
//! use fixedcsv::RowReader;
//! use std::cell::RefCell;
//! use std::io::Cursor;
//!
//! let stream = RefCell::new(Cursor::new("id,name\n1,alice\n2,bob\n"));
//! let mut reader = RowReader::<_, 2>::new(&stream)?;
//!
//! let mut names = Vec::new();
//! while let Some(row) = reader.row() {
//!     names.push(row[1].to_string());
//!     reader.advance()?;
//! }
//! assert_eq!(names, ["name", "alice", "bob"]);
//! # Ok::<(), fixedcsv::CsvError>(())
//! ```

pub mod csv;
pub mod csv_reader;
pub mod error;
pub mod options;
pub mod types;

pub use csv::{LineSource, RowSplitter};
pub use csv_reader::{OwnedRows, RowReader};
pub use error::{CsvError, Result};
pub use options::{ReaderOptions, ScanMode, DEFAULT_DELIMITER};
pub use types::{Row, Span};
