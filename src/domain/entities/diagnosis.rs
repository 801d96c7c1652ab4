use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::severity::Severity;
use crate::domain::value_objects::status_label::StatusLabel;

/// Structured explanation of a log snippet, as returned by the analysis service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnosis {
    #[serde(default)]
    pub error: String,
    #[serde(default)]
    pub cause: String,
    #[serde(default)]
    pub solution: String,
    #[serde(default)]
    pub severity: Severity,
}

/// One completed analysis cycle.
///
/// Fields the service leaves out fall back to empty text, and the timestamp
/// to the moment the response was parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthCheck {
    #[serde(default = "Utc::now")]
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub status: String,
    pub analysis: Diagnosis,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub provider: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_response: Option<String>,
}

impl HealthCheck {
    #[must_use]
    pub const fn severity(&self) -> &Severity {
        &self.analysis.severity
    }

    #[must_use]
    pub const fn status_label(&self) -> StatusLabel {
        StatusLabel::for_severity(&self.analysis.severity)
    }
}
