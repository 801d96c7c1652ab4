use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::ports::analyzer::{ensure_logs_present, AnalysisError, LogAnalyzer};

/// Maximum response size accepted from the analysis service (4 MB).
const MAX_RESPONSE_BYTES: usize = 4 * 1024 * 1024;

/// Maximum body bytes quoted back in error messages.
const MAX_ERROR_BODY_BYTES: usize = 512;

#[derive(Serialize)]
struct AnalyzeRequest<'a> {
    logs: &'a str,
}

#[derive(Deserialize)]
struct GeneratedLogs {
    logs: String,
}

/// Talks to the analysis service over HTTP.
///
/// One request per call; retries are left to whoever schedules the calls.
pub struct HttpAnalysisClient {
    base_url: String,
    client: reqwest::Client,
}

impl HttpAnalysisClient {
    /// Build a client for `base_url` with the given request timeout.
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::Transport` if the HTTP client cannot be
    /// initialized (e.g. TLS backend failure).
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, AnalysisError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AnalysisError::Transport(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            client,
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn analyze_url(&self) -> String {
        format!("{}/analyze", self.base_url)
    }

    /// Ask the service for a sample log batch (`GET /generate-logs`).
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`LogAnalyzer::analyze_raw`].
    pub async fn fetch_generated_logs(&self) -> Result<String, AnalysisError> {
        let url = format!("{}/generate-logs", self.base_url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AnalysisError::Transport(format!("request to {url} failed: {e}")))?;
        let body = read_body(response).await?;
        let generated: GeneratedLogs = serde_json::from_slice(&body)
            .map_err(|e| AnalysisError::Transport(format!("invalid generate-logs body: {e}")))?;
        Ok(generated.logs)
    }
}

#[async_trait]
impl LogAnalyzer for HttpAnalysisClient {
    async fn analyze_raw(&self, logs: &str) -> Result<Value, AnalysisError> {
        ensure_logs_present(logs)?;

        let url = self.analyze_url();
        tracing::debug!(%url, bytes = logs.len(), "posting logs for analysis");
        let response = self
            .client
            .post(&url)
            .json(&AnalyzeRequest { logs })
            .send()
            .await
            .map_err(|e| AnalysisError::Transport(format!("request to {url} failed: {e}")))?;

        let body = read_body(response).await?;
        serde_json::from_slice(&body)
            .map_err(|e| AnalysisError::Transport(format!("response is not valid JSON: {e}")))
    }
}

/// Check the status and read a bounded body.
async fn read_body(response: reqwest::Response) -> Result<Vec<u8>, AnalysisError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.bytes().await.unwrap_or_default();
        tracing::debug!(
            status = status.as_u16(),
            body = %String::from_utf8_lossy(&body[..body.len().min(MAX_ERROR_BODY_BYTES)]),
            "analysis service rejected request"
        );
        return Err(AnalysisError::Http {
            status_code: status.as_u16(),
        });
    }

    if response
        .content_length()
        .is_some_and(|len| len > MAX_RESPONSE_BYTES as u64)
    {
        return Err(AnalysisError::Transport("response too large".into()));
    }

    let body = response
        .bytes()
        .await
        .map_err(|e| AnalysisError::Transport(format!("failed to read response body: {e}")))?;
    if body.len() > MAX_RESPONSE_BYTES {
        return Err(AnalysisError::Transport(format!(
            "response too large: {} bytes",
            body.len()
        )));
    }
    Ok(body.to_vec())
}
