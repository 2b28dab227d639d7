//! Workbook persisted as a single JSON file
//!
//! The file holds one object mapping table names to row arrays. Every mutation
//! is written through immediately so an interrupted action leaves the same
//! partial state a spreadsheet would.

use super::{MemoryStore, TableStore};
use crate::error::{OrderflowError, Result};
use crate::types::Row;
use std::fs;
use std::ops::Range;
use std::path::{Path, PathBuf};

pub struct JsonWorkbookStore {
    path: PathBuf,
    tables: MemoryStore,
}

impl JsonWorkbookStore {
    /// Open an existing workbook file
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let json = fs::read_to_string(&path).map_err(|e| {
            OrderflowError::Store(format!("Failed to read workbook {}: {}", path.display(), e))
        })?;

        let tables: MemoryStore = serde_json::from_str(&json).map_err(|e| {
            OrderflowError::Store(format!("Failed to parse workbook {}: {}", path.display(), e))
        })?;

        log::debug!("Opened workbook {} ({} tables)", path.display(), tables.table_names().count());
        Ok(Self { path, tables })
    }

    /// Write a new workbook with the four order tables. Refuses to overwrite.
    pub fn create<P: AsRef<Path>>(path: P, item_headers: &[&str]) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if path.exists() {
            return Err(OrderflowError::Store(format!(
                "Workbook {} already exists",
                path.display()
            )));
        }

        let store = Self {
            path,
            tables: MemoryStore::with_order_tables(item_headers),
        };
        store.flush()?;

        log::info!("Created workbook {}", store.path.display());
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn tables(&self) -> &MemoryStore {
        &self.tables
    }

    /// Write the workbook through a sibling temp file and rename it into place
    fn flush(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.tables)?;
        let tmp_path = self.path.with_extension("json.tmp");

        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}

impl TableStore for JsonWorkbookStore {
    fn read_all(&self, table: &str) -> Result<Vec<Row>> {
        self.tables.read_all(table)
    }

    fn append_rows(&mut self, table: &str, rows: Vec<Row>) -> Result<()> {
        self.tables.append_rows(table, rows)?;
        self.flush()
    }

    fn clear_cells(&mut self, table: &str, rows: Range<usize>, cols: Range<usize>) -> Result<()> {
        self.tables.clear_cells(table, rows, cols)?;
        self.flush()
    }

    fn delete_row(&mut self, table: &str, index: usize) -> Result<()> {
        self.tables.delete_row(table, index)?;
        self.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{APPROVED_TABLE, REQUESTED_TABLE};
    use crate::types::CellValue;
    use tempfile::TempDir;

    #[test]
    fn test_create_then_open() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("workbook.json");

        JsonWorkbookStore::create(&path, &["Item"]).unwrap();
        assert!(path.exists());

        let reopened = JsonWorkbookStore::open(&path).unwrap();
        assert_eq!(
            reopened.read_all(REQUESTED_TABLE).unwrap(),
            vec![vec![CellValue::text("Approve"), CellValue::text("Item")]]
        );
    }

    #[test]
    fn test_create_refuses_to_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("workbook.json");

        JsonWorkbookStore::create(&path, &["Item"]).unwrap();
        assert!(JsonWorkbookStore::create(&path, &["Item"]).is_err());
    }

    #[test]
    fn test_mutations_are_written_through() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("workbook.json");
        let mut store = JsonWorkbookStore::create(&path, &["Item"]).unwrap();

        store
            .append_rows(APPROVED_TABLE, vec![vec![CellValue::Bool(true), CellValue::text("Pens")]])
            .unwrap();

        let on_disk = JsonWorkbookStore::open(&path).unwrap();
        assert_eq!(on_disk.read_all(APPROVED_TABLE).unwrap().len(), 2);
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn test_open_rejects_corrupt_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("workbook.json");
        fs::write(&path, "{ not json").unwrap();

        let err = JsonWorkbookStore::open(&path).err().unwrap();
        assert!(err.to_string().contains("Failed to parse workbook"));
    }
}
