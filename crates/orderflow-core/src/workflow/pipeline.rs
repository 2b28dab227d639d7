//! Order workflow over a table store

use super::clock::{Clock, SystemClock};
use crate::config::TableNames;
use crate::store::TableStore;

/// Moves rows from the requested view through approval to the ordered table
///
/// Holds the workbook for the duration of one or more user actions. The
/// individual steps live in `approval`, `export` and `actions`.
pub struct OrderWorkflow<S: TableStore> {
    pub(crate) store: S,
    pub(crate) tables: TableNames,
    pub(crate) clock: Box<dyn Clock>,
}

impl<S: TableStore> OrderWorkflow<S> {
    pub fn new(store: S, tables: TableNames) -> Self {
        Self {
            store,
            tables,
            clock: Box::new(SystemClock),
        }
    }

    pub fn with_clock<C: Clock + 'static>(mut self, clock: C) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn tables(&self) -> &TableNames {
        &self.tables
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;
    use crate::constants::{RAW_RESPONSES_TABLE, REQUESTED_TABLE};
    use crate::store::MemoryStore;
    use crate::types::{CellValue, Row};
    use crate::workflow::clock::FixedClock;
    use chrono::{DateTime, TimeZone, Utc};

    pub fn approval_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 18, 9, 0, 0).unwrap()
    }

    pub fn requested_row(checked: bool, item: &str, qty: f64) -> Row {
        vec![CellValue::Bool(checked), CellValue::text(item), CellValue::Number(qty)]
    }

    pub fn raw_row(item: &str, qty: f64) -> Row {
        vec![CellValue::text(item), CellValue::Number(qty)]
    }

    /// Workbook whose requested view mirrors the raw responses, checked as given
    pub fn workbook(items: &[(bool, &str, f64)]) -> MemoryStore {
        let mut store = MemoryStore::with_order_tables(&["Item", "Qty"]);

        let mut requested = store.read_all(REQUESTED_TABLE).unwrap();
        let mut raw = store.read_all(RAW_RESPONSES_TABLE).unwrap();
        for (checked, item, qty) in items {
            requested.push(requested_row(*checked, item, *qty));
            raw.push(raw_row(item, *qty));
        }

        store.insert_table(REQUESTED_TABLE, requested);
        store.insert_table(RAW_RESPONSES_TABLE, raw);
        store
    }

    pub fn workflow(items: &[(bool, &str, f64)]) -> OrderWorkflow<MemoryStore> {
        OrderWorkflow::new(workbook(items), TableNames::default())
            .with_clock(FixedClock(approval_time()))
    }
}
