use std::sync::Arc;

use serde::Serialize;
use serde_json::{json, Value};

use crate::domain::ports::analyzer::{AnalysisError, LogAnalyzer};

pub const STATUS_OK: u16 = 200;
pub const STATUS_BAD_REQUEST: u16 = 400;
pub const STATUS_INTERNAL_ERROR: u16 = 500;

/// A log file handed to the relay.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub name: String,
    pub content: Vec<u8>,
}

/// Status code and JSON body the relay answers with.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelayResponse {
    pub status: u16,
    pub body: Value,
}

impl RelayResponse {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Forwards an uploaded log file to the analysis service.
///
/// Failures are reported as structured JSON with a status code rather than
/// as errors.
pub struct UploadRelay {
    analyzer: Arc<dyn LogAnalyzer>,
}

impl UploadRelay {
    #[must_use]
    pub fn new(analyzer: Arc<dyn LogAnalyzer>) -> Self {
        Self { analyzer }
    }

    pub async fn relay(&self, file: Option<UploadedFile>) -> RelayResponse {
        let Some(file) = file else {
            return RelayResponse {
                status: STATUS_BAD_REQUEST,
                body: json!({ "error": "No file uploaded" }),
            };
        };

        let text = String::from_utf8_lossy(&file.content);
        tracing::info!(file = %file.name, bytes = file.content.len(), "relaying upload for analysis");

        match self.analyzer.analyze_raw(&text).await {
            Ok(body) => RelayResponse {
                status: STATUS_OK,
                body,
            },
            Err(AnalysisError::Validation(details)) => RelayResponse {
                status: STATUS_BAD_REQUEST,
                body: json!({ "error": "Invalid upload", "details": details }),
            },
            Err(e) => {
                tracing::error!(file = %file.name, "Upload error: {e}");
                RelayResponse {
                    status: STATUS_INTERNAL_ERROR,
                    body: json!({ "error": "Upload failed", "details": e.to_string() }),
                }
            }
        }
    }
}
