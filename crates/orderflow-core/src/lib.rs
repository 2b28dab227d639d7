//! Orderflow Core Library
//!
//! Moves requested items through approval into orders inside a spreadsheet-like
//! workbook, and exports approved items as a `||`-delimited CSV, either
//! written to disk or uploaded to the order server.

pub mod config;
pub mod clients;
pub mod constants;
pub mod store;
pub mod workflow;
pub mod types;
pub mod error;

// Re-export main types for easy access
pub use config::OrderflowConfig;
pub use error::{OrderflowError, Result, SendError};

pub use clients::{OrderSender, OrderServerClient};

pub use store::{JsonWorkbookStore, MemoryStore, TableStore};

pub use workflow::{
    ActionContext,
    ActionOutcome,
    MenuAction,
    OrderWorkflow,
    Severity,
};

pub use types::{ApprovalSummary, CellValue, CsvUpload, ExportBatch, Row, ServerResponse};
