//! Order server client for uploading the order CSV

use crate::config::OrderServerConfig;
use crate::constants::UPLOAD_FIELD_NAME;
use crate::error::{OrderflowError, Result, SendError};
use crate::types::{CsvUpload, ServerResponse};
use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::{multipart, Client as HttpClient};

/// Anything that can deliver an order CSV and report the server's answer
#[async_trait]
pub trait OrderSender: Send + Sync {
    /// Upload the CSV. Succeeds only on HTTP 200, returning the response body verbatim.
    async fn send_batch(&self, upload: &CsvUpload) -> std::result::Result<String, SendError>;
}

pub struct OrderServerClient {
    config: OrderServerConfig,
    http_client: HttpClient,
}

impl OrderServerClient {
    pub fn new(config: OrderServerConfig) -> Result<Self> {
        let http_client = HttpClient::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| OrderflowError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            config,
            http_client,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.config.url
    }

    /// POST the CSV as a single multipart file field
    ///
    /// Non-2xx answers come back as a `ServerResponse`, never as an error.
    /// Only transport failures are errors here. The status is captured before
    /// the body is read, so a rejection whose body cannot be read still comes
    /// back as a rejection with an empty body.
    pub async fn post_csv(&self, upload: &CsvUpload) -> std::result::Result<ServerResponse, reqwest::Error> {
        let file_part = multipart::Part::text(upload.content.clone())
            .file_name(upload.file_name.clone())
            .mime_str(upload.mime_type())?;

        let form = multipart::Form::new().part(UPLOAD_FIELD_NAME, file_part);

        debug!("Posting {} ({} bytes) to {}", upload.file_name, upload.content.len(), self.config.url);

        let response = self.http_client
            .post(&self.config.url)
            .multipart(form)
            .send()
            .await?;

        let status = response.status().as_u16();
        response_from(status, response.text().await)
    }
}

fn response_from(
    status: u16,
    body: std::result::Result<String, reqwest::Error>,
) -> std::result::Result<ServerResponse, reqwest::Error> {
    match body {
        Ok(body) => Ok(ServerResponse { status, body }),
        Err(e) if status != 200 => {
            warn!("Failed to read body of HTTP {} response: {}", status, e);
            Ok(ServerResponse { status, body: String::new() })
        }
        Err(e) => Err(e),
    }
}

#[async_trait]
impl OrderSender for OrderServerClient {
    async fn send_batch(&self, upload: &CsvUpload) -> std::result::Result<String, SendError> {
        let response = self.post_csv(upload).await?;

        if !response.is_accepted() {
            warn!(
                "Order server rejected {} with HTTP {}: {}",
                upload.file_name, response.status, response.body
            );
            return Err(SendError::Status(response.status));
        }

        info!("Order server accepted {}", upload.file_name);
        Ok(response.body)
    }
}
