//! Line reading and row splitting

mod line;
mod splitter;

pub use line::LineSource;
pub use splitter::{FieldCountMismatch, RowSplitter};
