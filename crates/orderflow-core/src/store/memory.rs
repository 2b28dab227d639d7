//! In-memory workbook

use super::TableStore;
use crate::constants::{APPROVED_TABLE, ORDERED_TABLE, RAW_RESPONSES_TABLE, REQUESTED_TABLE};
use crate::error::{OrderflowError, Result};
use crate::types::{row_is_blank, CellValue, Row};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ops::Range;

/// Tables held as plain row vectors, keyed by table name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemoryStore {
    tables: BTreeMap<String, Vec<Row>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Workbook with the four order tables, each holding only its header
    pub fn with_order_tables(item_headers: &[&str]) -> Self {
        let mut store = Self::new();
        for (table, first) in [
            (REQUESTED_TABLE, Some("Approve")),
            (RAW_RESPONSES_TABLE, None),
            (APPROVED_TABLE, Some("Approved At")),
            (ORDERED_TABLE, Some("Ordered At")),
        ] {
            let mut header: Row = Vec::with_capacity(item_headers.len() + 1);
            header.extend(first.map(CellValue::from));
            header.extend(item_headers.iter().map(|h| CellValue::from(*h)));
            store.insert_table(table, vec![header]);
        }
        store
    }

    /// Replace or create a table with the given rows, header included
    pub fn insert_table(&mut self, table: &str, rows: Vec<Row>) {
        self.tables.insert(table.to_string(), rows);
    }

    /// Stored rows including blank rows left behind by clears
    pub fn table(&self, table: &str) -> Option<&Vec<Row>> {
        self.tables.get(table)
    }

    pub fn table_names(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }

    fn rows_mut(&mut self, table: &str) -> Result<&mut Vec<Row>> {
        self.tables
            .get_mut(table)
            .ok_or_else(|| unknown_table(table))
    }
}

fn unknown_table(table: &str) -> OrderflowError {
    OrderflowError::Store(format!("Unknown table '{}'", table))
}

/// Number of rows up to and including the last non-blank one
fn data_extent(rows: &[Row]) -> usize {
    rows.iter()
        .rposition(|row| !row_is_blank(row))
        .map_or(0, |last| last + 1)
}

impl TableStore for MemoryStore {
    fn read_all(&self, table: &str) -> Result<Vec<Row>> {
        let rows = self.tables.get(table).ok_or_else(|| unknown_table(table))?;
        Ok(rows[..data_extent(rows)].to_vec())
    }

    fn append_rows(&mut self, table: &str, rows: Vec<Row>) -> Result<()> {
        let existing = self.rows_mut(table)?;
        let extent = data_extent(existing);
        let count = rows.len();

        // Trailing blank rows are overwritten, like a spreadsheet's last-row append
        for (offset, row) in rows.into_iter().enumerate() {
            match existing.get_mut(extent + offset) {
                Some(slot) => *slot = row,
                None => existing.push(row),
            }
        }

        log::debug!("Appended {} rows to '{}' at row {}", count, table, extent);
        Ok(())
    }

    fn clear_cells(&mut self, table: &str, rows: Range<usize>, cols: Range<usize>) -> Result<()> {
        let existing = self.rows_mut(table)?;
        let end = rows.end.min(existing.len());

        for row in existing[rows.start.min(end)..end].iter_mut() {
            let col_end = cols.end.min(row.len());
            for cell in row[cols.start.min(col_end)..col_end].iter_mut() {
                *cell = CellValue::Empty;
            }
        }

        Ok(())
    }

    fn delete_row(&mut self, table: &str, index: usize) -> Result<()> {
        let existing = self.rows_mut(table)?;
        if index >= existing.len() {
            return Err(OrderflowError::Store(format!(
                "Row {} is out of range for table '{}' ({} rows)",
                index,
                table,
                existing.len()
            )));
        }

        existing.remove(index);
        Ok(())
    }
}
