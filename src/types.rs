//! Row and field span types

use std::fmt;
use std::ops::Index;

/// Byte range of one field inside a line buffer
///
/// Spans are offsets, not pointers, so they stay valid when the buffer that
/// holds the line is cloned or moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    /// First byte of the field
    pub start: usize,
    /// One past the last byte of the field
    pub end: usize,
}

impl Span {
    /// Create a span covering `start..end`
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        Span { start, end }
    }

    /// Field length in bytes
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the field is empty
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Resolve the span against the line it was computed from
    pub fn slice<'a>(&self, line: &'a str) -> &'a str {
        &line[self.start..self.end]
    }
}

/// One parsed line: exactly `N` fields borrowed from a reader's buffer
///
/// A `Row` cannot outlive the borrow of the reader it came from, so it can
/// never observe a buffer that was overwritten by a later advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Row<'a, const N: usize> {
    fields: [&'a str; N],
}

impl<'a, const N: usize> Row<'a, N> {
    /// Build a row by resolving `spans` against `line`
    pub fn from_spans(line: &'a str, spans: &[Span; N]) -> Self {
        Row {
            fields: std::array::from_fn(|i| spans[i].slice(line)),
        }
    }

    /// Number of fields (always `N`)
    pub const fn len(&self) -> usize {
        N
    }

    /// Always `false` for `N >= 1`
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Get field by index
    pub fn get(&self, index: usize) -> Option<&'a str> {
        self.fields.get(index).copied()
    }

    /// All fields as an array reference
    pub fn fields(&self) -> &[&'a str; N] {
        &self.fields
    }

    /// Consume the view and return the field array
    pub fn into_array(self) -> [&'a str; N] {
        self.fields
    }

    /// Iterate over fields in column order
    pub fn iter(&self) -> std::array::IntoIter<&'a str, N> {
        self.fields.into_iter()
    }

    /// Copy every field into an owned `String`
    pub fn to_owned_fields(&self) -> [String; N] {
        std::array::from_fn(|i| self.fields[i].to_owned())
    }

    /// Rebuild the line by joining fields with `delimiter`
    pub fn join(&self, delimiter: u8) -> String {
        let total = self.fields.iter().map(|f| f.len()).sum::<usize>() + N.saturating_sub(1);
        let mut line = String::with_capacity(total);
        for (i, field) in self.fields.iter().enumerate() {
            if i > 0 {
                line.push(char::from(delimiter));
            }
            line.push_str(field);
        }
        line
    }
}

impl<'a, const N: usize> Index<usize> for Row<'a, N> {
    type Output = str;

    fn index(&self, index: usize) -> &str {
        self.fields[index]
    }
}

impl<'a, const N: usize> IntoIterator for Row<'a, N> {
    type Item = &'a str;
    type IntoIter = std::array::IntoIter<&'a str, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl<'a, 'b, const N: usize> PartialEq<[&'b str; N]> for Row<'a, N> {
    fn eq(&self, other: &[&'b str; N]) -> bool {
        self.fields == *other
    }
}

impl<'a, const N: usize> fmt::Display for Row<'a, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, field) in self.fields.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            f.write_str(field)?;
        }
        Ok(())
    }
}
