//! Exa API client module
//!
//! Encapsulates the single outbound call to the Exa `/contents` endpoint.

use reqwest::Client;
use serde_json::Value;
use tracing::info;

use crate::core::models::ContentsRequest;
use crate::errors::ExaError;

const EXA_CONTENTS_URL: &str = "https://api.exa.ai/contents";

/// Client for the Exa content-summarization API.
pub struct ExaClient {
    api_key: String,
    endpoint: String,
}

impl ExaClient {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            endpoint: EXA_CONTENTS_URL.to_string(),
        }
    }

    /// Same as [`ExaClient::new`] but against an explicit endpoint instead of
    /// the production Exa URL.
    pub fn with_endpoint(api_key: String, endpoint: String) -> Self {
        Self { api_key, endpoint }
    }

    /// Sends one POST with the given request body and returns the decoded
    /// response. Non-2xx statuses surface with the response body text
    /// attached; nothing is retried.
    pub async fn fetch_contents(&self, request: &ContentsRequest) -> Result<Value, ExaError> {
        #[cfg(feature = "debug-logs")]
        info!("Exa request body: {:?}", request);

        #[cfg(not(feature = "debug-logs"))]
        info!(
            "Fetching Exa contents for {} url(s)",
            request.urls.len()
        );

        let client = Client::new();
        let response = client
            .post(&self.endpoint)
            .header("x-api-key", &self.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ExaError::UpstreamStatus {
                status: status.as_u16(),
                body,
            });
        }

        let decoded = response.json::<Value>().await?;
        Ok(decoded)
    }
}
