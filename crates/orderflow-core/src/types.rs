//! Common types used throughout the order workflow

use crate::constants::{CSV_MIME_TYPE, ORDER_FILE_PREFIX, TIMESTAMP_FORMAT};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single spreadsheet cell
///
/// Cells are loosely typed in the workbook. Timestamps are only ever written
/// by the workflow into column 0 of a stamped row; they are stored as RFC 3339
/// text and load back as `Text`, so item content is never reinterpreted.
/// Use [`CellValue::as_timestamp`] to read a stamp back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum CellValue {
    #[default]
    Empty,
    Bool(bool),
    Number(f64),
    #[serde(skip_deserializing)]
    Timestamp(DateTime<Utc>),
    Text(String),
}

impl CellValue {
    pub fn text(value: impl Into<String>) -> Self {
        CellValue::Text(value.into())
    }

    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.is_empty(),
            _ => false,
        }
    }

    /// Checkbox reading of a cell. Only a checked box counts.
    pub fn is_checked(&self) -> bool {
        matches!(self, CellValue::Bool(true))
    }

    /// Stamp held by column 0 of an approved or ordered row
    pub fn as_timestamp(&self) -> Option<DateTime<Utc>> {
        match self {
            CellValue::Timestamp(ts) => Some(*ts),
            CellValue::Text(s) => DateTime::parse_from_rfc3339(s)
                .ok()
                .map(|ts| ts.with_timezone(&Utc)),
            _ => None,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Bool(b) => write!(f, "{}", b),
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Timestamp(ts) => write!(f, "{}", ts.format(TIMESTAMP_FORMAT)),
            CellValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<DateTime<Utc>> for CellValue {
    fn from(value: DateTime<Utc>) -> Self {
        CellValue::Timestamp(value)
    }
}

/// One table row as the store sees it
pub type Row = Vec<CellValue>;

pub fn row_is_blank(row: &[CellValue]) -> bool {
    row.iter().all(CellValue::is_empty)
}

/// A row of the requested view, column 0 read as the approval checkbox
#[derive(Debug, Clone, PartialEq)]
pub struct IntakeRow {
    pub approved: bool,
    pub attributes: Vec<CellValue>,
}

impl IntakeRow {
    pub fn from_cells(row: &[CellValue]) -> Self {
        match row.split_first() {
            Some((flag, rest)) => Self {
                approved: flag.is_checked(),
                attributes: rest.to_vec(),
            },
            None => Self {
                approved: false,
                attributes: Vec::new(),
            },
        }
    }
}

/// An approved or ordered row, column 0 repurposed as a timestamp
#[derive(Debug, Clone, PartialEq)]
pub struct StampedRow {
    pub stamp: DateTime<Utc>,
    pub attributes: Vec<CellValue>,
}

impl StampedRow {
    pub fn new(stamp: DateTime<Utc>, attributes: Vec<CellValue>) -> Self {
        Self { stamp, attributes }
    }

    /// Re-stamp a stored row, discarding whatever column 0 held
    pub fn restamp(row: &[CellValue], stamp: DateTime<Utc>) -> Self {
        let attributes = row.get(1..).map(<[CellValue]>::to_vec).unwrap_or_default();
        Self { stamp, attributes }
    }

    pub fn into_cells(self) -> Row {
        let mut cells = Vec::with_capacity(self.attributes.len() + 1);
        cells.push(CellValue::Timestamp(self.stamp));
        cells.extend(self.attributes);
        cells
    }
}

/// Snapshot of the approved table prepared for download or upload
#[derive(Debug, Clone, PartialEq)]
pub struct ExportBatch {
    pub rows: Vec<Row>,
    pub row_count: usize,
    pub col_count: usize,
    /// Shared timestamp written into column 0 of every row
    pub stamped_at: DateTime<Utc>,
}

impl ExportBatch {
    /// `Order_YYYY-MM-DD.csv`
    pub fn file_name(&self) -> String {
        order_file_name(self.stamped_at)
    }
}

pub fn order_file_name(date: DateTime<Utc>) -> String {
    format!("{}{}.csv", ORDER_FILE_PREFIX, date.format("%Y-%m-%d"))
}

/// CSV payload as uploaded to the order server
#[derive(Debug, Clone, PartialEq)]
pub struct CsvUpload {
    pub file_name: String,
    pub content: String,
}

impl CsvUpload {
    pub fn mime_type(&self) -> &'static str {
        CSV_MIME_TYPE
    }
}

/// Raw response of the order server. Never converted into an error by the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerResponse {
    pub status: u16,
    pub body: String,
}

impl ServerResponse {
    pub fn is_accepted(&self) -> bool {
        self.status == 200
    }
}

/// Result of an approval run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApprovalSummary {
    pub moved_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_cell_deserialization() {
        let cells: Row =
            serde_json::from_str(r#"[null, true, 3.5, "2026-10-18T09:30:00Z", "Widget"]"#).unwrap();

        assert_eq!(cells[0], CellValue::Empty);
        assert_eq!(cells[1], CellValue::Bool(true));
        assert_eq!(cells[2], CellValue::Number(3.5));
        assert_eq!(cells[3], CellValue::text("2026-10-18T09:30:00Z"), "date-like text stays text");
        assert_eq!(cells[4], CellValue::text("Widget"));
    }

    #[test]
    fn test_stamp_survives_serialization() {
        let ts = Utc.with_ymd_and_hms(2026, 10, 18, 9, 30, 0).unwrap();
        let json = serde_json::to_string(&vec![CellValue::Timestamp(ts)]).unwrap();
        let cells: Row = serde_json::from_str(&json).unwrap();

        assert_eq!(cells[0].as_timestamp(), Some(ts));
        assert_eq!(CellValue::text("Widget").as_timestamp(), None);
        assert_eq!(CellValue::Number(1.0).as_timestamp(), None);
    }

    #[test]
    fn test_cell_display() {
        assert_eq!(CellValue::Empty.to_string(), "");
        assert_eq!(CellValue::Bool(false).to_string(), "false");
        assert_eq!(CellValue::Number(3.0).to_string(), "3");
        assert_eq!(CellValue::Number(2.5).to_string(), "2.5");
        let ts = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(CellValue::Timestamp(ts).to_string(), "2026-01-02 03:04:05");
    }

    #[test]
    fn test_checkbox_parsing() {
        assert!(IntakeRow::from_cells(&[true.into(), "A".into()]).approved);
        assert!(!IntakeRow::from_cells(&["TRUE".into()]).approved, "text is not a checkbox");
        assert!(!IntakeRow::from_cells(&[false.into(), "A".into()]).approved);
        assert!(!IntakeRow::from_cells(&[CellValue::Empty, "A".into()]).approved);
        assert!(!IntakeRow::from_cells(&["yes".into()]).approved);
        assert!(!IntakeRow::from_cells(&[]).approved);

        let row = IntakeRow::from_cells(&[true.into(), "A".into(), 2.0.into()]);
        assert_eq!(row.attributes, vec![CellValue::text("A"), CellValue::Number(2.0)]);
    }

    #[test]
    fn test_restamp_replaces_column_zero() {
        let old = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        let new = Utc.with_ymd_and_hms(2026, 2, 1, 0, 0, 0).unwrap();
        let cells = StampedRow::restamp(&[old.into(), "A".into()], new).into_cells();
        assert_eq!(cells, vec![CellValue::Timestamp(new), CellValue::text("A")]);
    }

    #[test]
    fn test_order_file_name() {
        let ts = Utc.with_ymd_and_hms(2026, 10, 8, 23, 59, 0).unwrap();
        assert_eq!(order_file_name(ts), "Order_2026-10-08.csv");
    }
}
