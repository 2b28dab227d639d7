//! Error types for the order workflow

use thiserror::Error;

/// Failure of the single order upload to the remote server
#[derive(Error, Debug)]
pub enum SendError {
    /// The server answered, but not with 200. The body is logged, not carried.
    #[error("order server responded with HTTP {0}")]
    Status(u16),

    #[error("order upload failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl SendError {
    /// Status code of the rejected upload, if the server answered at all
    pub fn status_code(&self) -> Option<u16> {
        match self {
            SendError::Status(code) => Some(*code),
            SendError::Transport(e) => e.status().map(|s| s.as_u16()),
        }
    }
}

/// Main error type for all workflow operations
#[derive(Error, Debug)]
pub enum OrderflowError {
    /// Nothing to process. Informational rather than a fault.
    #[error("Nothing to process: {0}")]
    EmptyInput(String),

    #[error("No rows are checked for approval")]
    NoSelection,

    #[error(transparent)]
    Send(#[from] SendError),

    #[error("Table store error: {0}")]
    Store(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("File system error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl OrderflowError {
    /// Outcomes the user should see as a notice rather than a failure
    pub fn is_informational(&self) -> bool {
        matches!(self, OrderflowError::EmptyInput(_) | OrderflowError::NoSelection)
    }
}

/// Result type for workflow operations
pub type Result<T> = std::result::Result<T, OrderflowError>;
