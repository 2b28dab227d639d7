//! Table store abstraction over the order workbook
//!
//! The workbook is a set of named tables, each a header row followed by data
//! rows. Rows are addressed by absolute 0-based index, so the header is row 0.

pub mod memory;
pub mod workbook_file;

pub use memory::MemoryStore;
pub use workbook_file::JsonWorkbookStore;

use crate::error::Result;
use crate::types::Row;
use std::ops::Range;

/// Operations the workflow needs from the spreadsheet
///
/// Implementations perform no locking. Callers run one action at a time.
pub trait TableStore {
    /// Header plus every row up to the last one with a non-empty cell
    fn read_all(&self, table: &str) -> Result<Vec<Row>>;

    /// Append below the last non-empty row, in order, as one write
    fn append_rows(&mut self, table: &str, rows: Vec<Row>) -> Result<()>;

    /// Blank the given cells. Rows stay in place.
    fn clear_cells(&mut self, table: &str, rows: Range<usize>, cols: Range<usize>) -> Result<()>;

    /// Remove a row, shifting the rows below it up by one
    fn delete_row(&mut self, table: &str, index: usize) -> Result<()>;
}
