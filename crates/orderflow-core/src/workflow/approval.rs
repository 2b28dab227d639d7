//! Approval of checked rows in the requested view

use super::pipeline::OrderWorkflow;
use crate::constants::FIRST_DATA_ROW;
use crate::error::{OrderflowError, Result};
use crate::store::TableStore;
use crate::types::{ApprovalSummary, IntakeRow, Row, StampedRow};
use log::{error, info};

impl<S: TableStore> OrderWorkflow<S> {
    /// Move every checked requested row to the approved table
    ///
    /// Checked rows are appended to the approved table with the current time in
    /// column 0, every checkbox in the requested view is cleared, and the
    /// positional counterparts are deleted from the raw responses. Requested and
    /// raw rows are matched by position only. There is no rollback if a later
    /// step fails.
    ///
    /// The requested view mirrors the raw responses row for row, so the moved
    /// rows are dropped from it too and the next run sees the same positions
    /// in both tables.
    pub fn approve_selected(&mut self) -> Result<ApprovalSummary> {
        let requested = self.store.read_all(&self.tables.requested)?;
        let data_rows = requested.get(FIRST_DATA_ROW..).unwrap_or_default();

        if data_rows.is_empty() {
            return Err(OrderflowError::EmptyInput(format!(
                "'{}' has no rows to approve",
                self.tables.requested
            )));
        }

        let now = self.clock.now();
        let mut approved_positions = Vec::new();
        let mut approved_rows: Vec<Row> = Vec::new();

        for (position, cells) in data_rows.iter().enumerate() {
            let intake = IntakeRow::from_cells(cells);
            if intake.approved {
                approved_positions.push(position);
                approved_rows.push(StampedRow::new(now, intake.attributes).into_cells());
            }
        }

        if approved_rows.is_empty() {
            return Err(OrderflowError::NoSelection);
        }

        let moved_count = approved_rows.len();
        self.store.append_rows(&self.tables.approved, approved_rows)?;

        // Every flag is reset, not just the approved ones
        let data_range = FIRST_DATA_ROW..FIRST_DATA_ROW + data_rows.len();
        self.store.clear_cells(&self.tables.requested, data_range, 0..1)?;

        // Highest index first so pending deletions keep their positions
        for position in approved_positions.iter().rev() {
            let index = FIRST_DATA_ROW + position;
            if let Err(e) = self.store.delete_row(&self.tables.raw_responses, index) {
                error!(
                    "Failed to delete row {} from '{}' after approval; approved rows are now duplicated: {}",
                    index, self.tables.raw_responses, e
                );
                return Err(e);
            }
        }

        self.drop_from_requested_view(&approved_positions)?;

        info!(
            "Approved {} of {} rows from '{}'",
            moved_count,
            data_rows.len(),
            self.tables.requested
        );

        Ok(ApprovalSummary { moved_count })
    }

    /// Remove moved rows from the requested view, highest position first
    fn drop_from_requested_view(&mut self, positions: &[usize]) -> Result<()> {
        for position in positions.iter().rev() {
            let index = FIRST_DATA_ROW + position;
            if let Err(e) = self.store.delete_row(&self.tables.requested, index) {
                error!(
                    "Failed to drop row {} from '{}' after approval; it no longer lines up with '{}': {}",
                    index, self.tables.requested, self.tables.raw_responses, e
                );
                return Err(e);
            }
        }
        Ok(())
    }
}
