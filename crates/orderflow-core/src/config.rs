//! Configuration management for the order workflow

use crate::constants::{
    APPROVED_TABLE, DEFAULT_ORDER_ENDPOINT, DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_WORKBOOK_PATH,
    ORDERED_TABLE, RAW_RESPONSES_TABLE, REQUESTED_TABLE,
};
use crate::error::{OrderflowError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Prefix of environment overrides, e.g. `ORDERFLOW__ORDER_SERVER__URL`
pub const ENV_PREFIX: &str = "ORDERFLOW";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OrderflowConfig {
    #[serde(default)]
    pub workbook: WorkbookConfig,

    #[serde(default)]
    pub tables: TableNames,

    #[serde(default)]
    pub order_server: OrderServerConfig,

    #[serde(default)]
    pub export: ExportConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkbookConfig {
    #[serde(alias = "file", default = "default_workbook_path")]
    pub path: PathBuf,
}

impl Default for WorkbookConfig {
    fn default() -> Self {
        Self {
            path: default_workbook_path(),
        }
    }
}

/// Names of the four workbook tables
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableNames {
    #[serde(default = "default_requested")]
    pub requested: String,

    #[serde(default = "default_raw_responses")]
    pub raw_responses: String,

    #[serde(default = "default_approved")]
    pub approved: String,

    #[serde(default = "default_ordered")]
    pub ordered: String,
}

impl Default for TableNames {
    fn default() -> Self {
        Self {
            requested: default_requested(),
            raw_responses: default_raw_responses(),
            approved: default_approved(),
            ordered: default_ordered(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderServerConfig {
    #[serde(alias = "endpoint", default = "default_order_endpoint")]
    pub url: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for OrderServerConfig {
    fn default() -> Self {
        Self {
            url: default_order_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Where downloaded order CSVs are written
    #[serde(default = "default_out_dir")]
    pub out_dir: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            out_dir: default_out_dir(),
        }
    }
}

// Default functions
fn default_workbook_path() -> PathBuf {
    PathBuf::from(DEFAULT_WORKBOOK_PATH)
}

fn default_requested() -> String {
    REQUESTED_TABLE.to_string()
}

fn default_raw_responses() -> String {
    RAW_RESPONSES_TABLE.to_string()
}

fn default_approved() -> String {
    APPROVED_TABLE.to_string()
}

fn default_ordered() -> String {
    ORDERED_TABLE.to_string()
}

fn default_order_endpoint() -> String {
    DEFAULT_ORDER_ENDPOINT.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

fn default_out_dir() -> PathBuf {
    PathBuf::from(".")
}

impl OrderflowConfig {
    /// Load configuration from a file, with `ORDERFLOW__SECTION__KEY` environment overrides
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(OrderflowError::Config(format!(
                "Config file {} does not exist",
                path.display()
            )));
        }

        let config: Self = ::config::Config::builder()
            .add_source(::config::File::from(path))
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(|e| OrderflowError::Config(format!("Failed to load config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| OrderflowError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        let tables = &self.tables;
        for (key, name) in [
            ("requested", &tables.requested),
            ("raw_responses", &tables.raw_responses),
            ("approved", &tables.approved),
            ("ordered", &tables.ordered),
        ] {
            if name.trim().is_empty() {
                return Err(OrderflowError::Config(format!("Table name '{}' is required", key)));
            }
        }

        let url = self.order_server.url.trim();
        if url.is_empty() {
            return Err(OrderflowError::Config("Order server URL is required".to_string()));
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(OrderflowError::Config(format!(
                "Order server URL must be http(s): {}",
                url
            )));
        }

        if self.order_server.timeout_secs == 0 {
            return Err(OrderflowError::Config(
                "Order server timeout must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}
