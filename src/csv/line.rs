//! Line source: one terminator-delimited line per call

use std::io::{self, BufRead};

/// Produces lines of text from an underlying stream
///
/// Implemented for every [`BufRead`]; custom sources can implement it
/// directly.
pub trait LineSource {
    /// Overwrite `buf` with the next line, terminator stripped
    ///
    /// Returns `Ok(false)` once the stream is exhausted. A last line without
    /// a trailing newline is still returned.
    fn next_line(&mut self, buf: &mut String) -> io::Result<bool>;
}

impl<R: BufRead> LineSource for R {
    fn next_line(&mut self, buf: &mut String) -> io::Result<bool> {
        buf.clear();
        let bytes_read = BufRead::read_line(self, buf)?;
        if bytes_read == 0 {
            return Ok(false);
        }

        if buf.ends_with('\n') {
            buf.pop();
            if buf.ends_with('\r') {
                buf.pop();
            }
        }
        Ok(true)
    }
}
