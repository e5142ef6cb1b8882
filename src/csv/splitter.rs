//! Delimiter scanning and field slicing
//!
//! A line with `N` fields has exactly `N-1` delimiters. The splitter finds
//! them and carves the line into `N` adjacent spans: each span stops before
//! the delimiter that ends it, the last one runs to the end of the line.
//! Empty fields come out as zero-length spans; nothing is trimmed.

use crate::options::ScanMode;
use crate::types::Span;
use memchr::memchr_iter;

/// Compile-time guard for the column count
struct Arity<const N: usize>;

impl<const N: usize> Arity<N> {
    const AT_LEAST_ONE: () = assert!(N >= 1, "a row needs at least one column");
}

/// A line whose field count differs from the reader's column count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldCountMismatch {
    /// Column count the splitter was asked for
    pub expected: usize,
    /// Fields present on the line
    pub found: usize,
}

/// Splits lines into a fixed number of fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowSplitter {
    delimiter: u8,
    mode: ScanMode,
}

impl RowSplitter {
    /// Create a splitter with a delimiter and scan mode
    pub fn new(delimiter: u8, mode: ScanMode) -> Self {
        Self { delimiter, mode }
    }

    /// Delimiter byte
    pub fn delimiter(&self) -> u8 {
        self.delimiter
    }

    /// Scan mode
    pub fn mode(&self) -> ScanMode {
        self.mode
    }

    /// Split `line` into `N` spans
    ///
    /// In [`ScanMode::Checked`] a line without exactly `N-1` delimiters is
    /// rejected. In [`ScanMode::Fast`] extra delimiters are folded into the
    /// last field.
    ///
    /// # Panics
    ///
    /// In [`ScanMode::Fast`], panics if the line has fewer than `N-1`
    /// delimiters. Use [`ScanMode::Checked`] for input that is not known to
    /// be well formed.
    pub fn split<const N: usize>(
        &self,
        line: &str,
    ) -> Result<[Span; N], FieldCountMismatch> {
        #[allow(clippy::let_unit_value)]
        let () = Arity::<N>::AT_LEAST_ONE;

        let bytes = line.as_bytes();
        if N == 1 {
            return Ok([Span::new(0, bytes.len()); N]);
        }

        match self.mode {
            ScanMode::Fast => Ok(self.split_fast(bytes)),
            ScanMode::Checked => self.split_checked(bytes),
        }
    }

    fn split_fast<const N: usize>(&self, bytes: &[u8]) -> [Span; N] {
        let mut positions = [0usize; N];
        let mut found = 0;
        for pos in memchr_iter(self.delimiter, bytes).take(N - 1) {
            positions[found] = pos;
            found += 1;
        }

        assert!(
            found == N - 1,
            "line has {} fields but the reader expects {}; use ScanMode::Checked for unvalidated input",
            found + 1,
            N
        );

        carve(bytes.len(), &positions[..N - 1])
    }

    fn split_checked<const N: usize>(
        &self,
        bytes: &[u8],
    ) -> Result<[Span; N], FieldCountMismatch> {
        let mut positions = [0usize; N];
        let mut count = 0;
        for pos in memchr_iter(self.delimiter, bytes) {
            if count < N - 1 {
                positions[count] = pos;
            }
            count += 1;
        }

        if count != N - 1 {
            return Err(FieldCountMismatch {
                expected: N,
                found: count + 1,
            });
        }

        Ok(carve(bytes.len(), &positions[..N - 1]))
    }
}

/// Turn `N-1` delimiter positions into `N` spans over a line of `len` bytes
fn carve<const N: usize>(len: usize, delimiters: &[usize]) -> [Span; N] {
    debug_assert_eq!(delimiters.len() + 1, N);

    let mut spans = [Span::default(); N];
    let mut start = 0;
    for (span, &pos) in spans.iter_mut().zip(delimiters) {
        *span = Span::new(start, pos);
        start = pos + 1;
    }
    spans[N - 1] = Span::new(start, len);
    spans
}
