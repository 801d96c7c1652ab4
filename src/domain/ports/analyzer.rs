use async_trait::async_trait;
use thiserror::Error;

use crate::domain::entities::diagnosis::HealthCheck;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("analysis service returned HTTP {status_code}")]
    Http { status_code: u16 },
    #[error("transport error: {0}")]
    Transport(String),
    #[error("invalid request: {0}")]
    Validation(String),
}

#[async_trait]
pub trait LogAnalyzer: Send + Sync {
    /// Send `logs` to the analysis service and return the response body as-is.
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::Http` for a non-2xx status,
    /// `AnalysisError::Transport` when the service cannot be reached or the
    /// body is not JSON, and `AnalysisError::Validation` for empty input.
    async fn analyze_raw(&self, logs: &str) -> Result<serde_json::Value, AnalysisError>;

    /// Analyze `logs` and parse the response into a [`HealthCheck`].
    ///
    /// # Errors
    ///
    /// Same as [`LogAnalyzer::analyze_raw`]; a body that does not have the
    /// health check shape is a `Transport` error.
    async fn analyze(&self, logs: &str) -> Result<HealthCheck, AnalysisError> {
        let body = self.analyze_raw(logs).await?;
        serde_json::from_value(body)
            .map_err(|e| AnalysisError::Transport(format!("unexpected response shape: {e}")))
    }
}

/// Reject payloads the service would have nothing to analyze in.
///
/// # Errors
///
/// Returns `AnalysisError::Validation` when `logs` is blank.
pub fn ensure_logs_present(logs: &str) -> Result<(), AnalysisError> {
    if logs.trim().is_empty() {
        return Err(AnalysisError::Validation("log payload is empty".into()));
    }
    Ok(())
}
