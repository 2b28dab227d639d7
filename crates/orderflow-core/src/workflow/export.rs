//! Export preparation and order finalization

use super::pipeline::OrderWorkflow;
use crate::constants::FIRST_DATA_ROW;
use crate::error::Result;
use crate::store::TableStore;
use crate::types::{ExportBatch, Row, StampedRow};
use log::{debug, info};

impl<S: TableStore> OrderWorkflow<S> {
    /// Snapshot the approved table, every row stamped with one shared instant
    ///
    /// Returns `None` when there is nothing approved. The table is not modified.
    pub fn prepare_export(&self) -> Result<Option<ExportBatch>> {
        let approved = self.store.read_all(&self.tables.approved)?;
        let col_count = approved.iter().map(Vec::len).max().unwrap_or(0);
        let data_rows = approved.get(FIRST_DATA_ROW..).unwrap_or_default();

        if data_rows.is_empty() {
            info!("No approved rows to export from '{}'", self.tables.approved);
            return Ok(None);
        }

        let stamped_at = self.clock.now();
        let rows: Vec<Row> = data_rows
            .iter()
            .map(|cells| StampedRow::restamp(cells, stamped_at).into_cells())
            .collect();

        debug!("Prepared export of {} rows x {} columns", rows.len(), col_count);

        Ok(Some(ExportBatch {
            row_count: rows.len(),
            col_count,
            rows,
            stamped_at,
        }))
    }

    /// Append the batch to the ordered table and blank its source cells in the approved table
    ///
    /// Assumes the approved table has not changed since the batch was prepared.
    pub fn finalize(&mut self, batch: &ExportBatch) -> Result<()> {
        self.store.append_rows(&self.tables.ordered, batch.rows.clone())?;

        self.store.clear_cells(
            &self.tables.approved,
            FIRST_DATA_ROW..FIRST_DATA_ROW + batch.row_count,
            0..batch.col_count,
        )?;

        info!(
            "Finalized {} rows from '{}' into '{}'",
            batch.row_count, self.tables.approved, self.tables.ordered
        );
        Ok(())
    }
}
