//! Order workflow: approval, export and finalization

pub mod actions;
pub mod approval;
pub mod clock;
pub mod csv_export;
pub mod export;
pub mod pipeline;

pub use actions::{ActionContext, ActionOutcome, DownloadReceipt, MenuAction, SendReceipt, Severity};
pub use clock::{Clock, FixedClock, SystemClock};
pub use csv_export::{build_csv, csv_upload, write_order_csv};
pub use pipeline::OrderWorkflow;
