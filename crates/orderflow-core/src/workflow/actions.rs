//! User-facing menu actions
//!
//! Each action runs to completion and every error is turned into a message
//! here. Nothing escapes a single action.

use super::csv_export::{csv_upload, write_order_csv};
use super::pipeline::OrderWorkflow;
use crate::clients::OrderSender;
use crate::error::{OrderflowError, Result};
use crate::store::TableStore;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Items of the workbook's order menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuAction {
    ApproveChecked,
    DownloadCsv,
    SendToServer,
}

impl MenuAction {
    pub const ALL: [MenuAction; 3] = [
        MenuAction::ApproveChecked,
        MenuAction::DownloadCsv,
        MenuAction::SendToServer,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MenuAction::ApproveChecked => "Approve Checked Items",
            MenuAction::DownloadCsv => "Download Approved Items as CSV",
            MenuAction::SendToServer => "Send Approved Items to Server",
        }
    }
}

impl fmt::Display for MenuAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Error,
}

/// What the user is shown after an action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionOutcome {
    pub action: MenuAction,
    pub severity: Severity,
    pub message: String,
}

impl ActionOutcome {
    fn info(action: MenuAction, message: impl Into<String>) -> Self {
        Self {
            action,
            severity: Severity::Info,
            message: message.into(),
        }
    }

    fn error(action: MenuAction, message: impl Into<String>) -> Self {
        Self {
            action,
            severity: Severity::Error,
            message: message.into(),
        }
    }

    pub fn is_failure(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// Collaborators the export actions need
pub struct ActionContext<'a> {
    pub out_dir: &'a Path,
    pub sender: &'a dyn OrderSender,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadReceipt {
    pub path: PathBuf,
    pub row_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendReceipt {
    pub file_name: String,
    pub row_count: usize,
    /// Response body of the order server, verbatim
    pub server_reply: String,
}

impl<S: TableStore> OrderWorkflow<S> {
    /// Write the approved rows to `Order_<date>.csv`, then finalize them
    ///
    /// Returns `None` if nothing is approved.
    pub fn download_approved(&mut self, out_dir: &Path) -> Result<Option<DownloadReceipt>> {
        let Some(batch) = self.prepare_export()? else {
            return Ok(None);
        };

        let path = write_order_csv(&batch, out_dir)?;
        self.finalize(&batch)?;

        Ok(Some(DownloadReceipt {
            path,
            row_count: batch.row_count,
        }))
    }

    /// Upload the approved rows and finalize them only if the server accepted the upload
    ///
    /// On any send failure the approved table is left as it was, ready for a retry.
    pub async fn send_approved(&mut self, sender: &dyn OrderSender) -> Result<Option<SendReceipt>> {
        let Some(batch) = self.prepare_export()? else {
            return Ok(None);
        };

        let upload = csv_upload(&batch);
        let server_reply = sender.send_batch(&upload).await?;
        self.finalize(&batch)?;

        Ok(Some(SendReceipt {
            file_name: upload.file_name,
            row_count: batch.row_count,
            server_reply,
        }))
    }

    /// Run one menu action and describe the result for the user
    pub async fn run_action(&mut self, action: MenuAction, ctx: &ActionContext<'_>) -> ActionOutcome {
        let result = match action {
            MenuAction::ApproveChecked => self.approve_selected().map(|summary| {
                format!(
                    "Moved {} item(s) to '{}'.",
                    summary.moved_count, self.tables.approved
                )
            }),
            MenuAction::DownloadCsv => self.download_approved(ctx.out_dir).map(|receipt| match receipt {
                Some(r) => format!(
                    "Downloaded {} item(s) to {}. They are now in '{}'.",
                    r.row_count,
                    r.path.display(),
                    self.tables.ordered
                ),
                None => format!("No items in '{}' to download.", self.tables.approved),
            }),
            MenuAction::SendToServer => self.send_approved(ctx.sender).await.map(|receipt| match receipt {
                Some(r) => format!(
                    "Sent {} item(s) as {}. Server replied: {}",
                    r.row_count, r.file_name, r.server_reply
                ),
                None => format!("No items in '{}' to send.", self.tables.approved),
            }),
        };

        match result {
            Ok(message) => {
                log::info!("{}: {}", action, message);
                ActionOutcome::info(action, message)
            }
            Err(e) => self.describe_error(action, e),
        }
    }

    fn describe_error(&self, action: MenuAction, error: OrderflowError) -> ActionOutcome {
        match error {
            OrderflowError::EmptyInput(_) => ActionOutcome::info(
                action,
                format!("No items found in '{}'.", self.tables.requested),
            ),
            OrderflowError::NoSelection => {
                ActionOutcome::info(action, "No items are checked for approval.")
            }
            OrderflowError::Send(e) => {
                log::error!("{} failed: {}", action, e);
                ActionOutcome::error(
                    action,
                    format!("Sending failed, nothing was moved to '{}': {}", self.tables.ordered, e),
                )
            }
            other => {
                log::error!("{} failed: {}", action, other);
                ActionOutcome::error(action, format!("{} failed: {}", action, other))
            }
        }
    }
}
