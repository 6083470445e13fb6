//! HTTP client for the catalog admin API

use crate::{ClientConfig, ClientError, ClientResult};
use reqwest::Client;
use serde::de::DeserializeOwned;
use shared::models::{BatchNumberResponse, ErrorBody, SyncOutcome, SyncReport, Template};

/// HTTP client for making requests to the catalog backend
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Make a GET request
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.client.get(self.url(path)).send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request without body
    async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.client.post(self.url(path)).send().await?;
        Self::handle_response(response).await
    }

    /// Make a DELETE request, expecting no meaningful body
    async fn delete(&self, path: &str) -> ClientResult<()> {
        let response = self.client.delete(self.url(path)).send().await?;
        Self::check_status(response).await?;
        Ok(())
    }

    /// Map a non-2xx response to a backend error
    async fn check_status(response: reqwest::Response) -> ClientResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await?;
        let (message, needs_setup) = match serde_json::from_str::<ErrorBody>(&text) {
            Ok(body) => (body.error, body.needs_setup.unwrap_or(false)),
            // Body is not the standard `{error}` shape; keep the raw text
            Err(_) => (text, false),
        };
        Err(ClientError::Backend {
            status: status.as_u16(),
            message,
            needs_setup,
        })
    }

    /// Handle the HTTP response, decoding the success body
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let response = Self::check_status(response).await?;
        let text = response.text().await?;
        serde_json::from_str(&text).map_err(|e| ClientError::MalformedResponse(e.to_string()))
    }

    // ========== Catalog API ==========

    /// Request a fresh server-generated batch number
    pub async fn generate_batch(&self) -> ClientResult<String> {
        let response: BatchNumberResponse = self.post_empty("api/generate_batch").await?;
        Ok(response.batch_number)
    }

    /// Fetch a template with its default attributes
    pub async fn fetch_template(&self, template_id: i64) -> ClientResult<Template> {
        self.get(&format!("api/template/{}", template_id)).await
    }

    /// Delete the COA document attached to a product
    pub async fn delete_coa(&self, product_id: &str) -> ClientResult<()> {
        self.delete(&format!("api/delete_coa/{}", product_id)).await
    }

    /// Delete a product
    pub async fn delete_product(&self, product_id: &str) -> ClientResult<()> {
        self.delete(&format!("api/delete_product/{}", product_id)).await
    }

    /// Push the catalog to Square
    ///
    /// An empty success body is treated as a report with zero counts.
    pub async fn sync_to_square(&self) -> ClientResult<SyncReport> {
        let response = self.client.get(self.url("api/sync_to_square")).send().await?;
        let response = Self::check_status(response).await?;
        let text = response.text().await?;
        if text.trim().is_empty() {
            return Ok(SyncReport::default());
        }
        serde_json::from_str(&text).map_err(|e| ClientError::MalformedResponse(e.to_string()))
    }

    /// Sync action as seen by the UI: never errors, classifies instead.
    ///
    /// A backend refusal with `needs_setup` points the user at Square
    /// settings; everything else becomes a plain failure message.
    pub async fn sync_to_square_outcome(&self) -> SyncOutcome {
        match self.sync_to_square().await {
            Ok(report) => SyncOutcome::Completed(report),
            Err(err) if err.needs_setup() => SyncOutcome::NeedsSetup(err.inline_message()),
            Err(err) => {
                tracing::warn!(error = %err, "square sync failed");
                SyncOutcome::Failed(err.inline_message())
            }
        }
    }
}
