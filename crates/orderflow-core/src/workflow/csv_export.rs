//! Order CSV rendering
//!
//! Cells are joined with `||` and rows with `\n`. There is no header, no
//! trailing newline and no escaping, so a field that itself contains `||`
//! makes the output ambiguous.

use crate::constants::CSV_DELIMITER;
use crate::error::Result;
use crate::types::{CsvUpload, ExportBatch};
use std::fs;
use std::path::{Path, PathBuf};

pub fn build_csv(batch: &ExportBatch) -> String {
    batch
        .rows
        .iter()
        .map(|row| {
            row.iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(CSV_DELIMITER)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// CSV plus the `Order_<date>.csv` name it travels under
pub fn csv_upload(batch: &ExportBatch) -> CsvUpload {
    CsvUpload {
        file_name: batch.file_name(),
        content: build_csv(batch),
    }
}

/// Write the order CSV into `out_dir`, creating the directory if needed
pub fn write_order_csv(batch: &ExportBatch, out_dir: &Path) -> Result<PathBuf> {
    let upload = csv_upload(batch);
    fs::create_dir_all(out_dir)?;

    let path = out_dir.join(&upload.file_name);
    fs::write(&path, upload.content)?;

    log::info!("Wrote {} rows to {}", batch.row_count, path.display());
    Ok(path)
}
