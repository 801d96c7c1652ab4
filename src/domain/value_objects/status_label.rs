use serde::{Deserialize, Serialize};

use super::severity::Severity;

/// Headline status derived from a diagnosis severity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum StatusLabel {
    Healthy,
    Alert,
}

impl StatusLabel {
    /// Only `LOW` counts as healthy; unrecognized severities raise an alert.
    #[must_use]
    pub const fn for_severity(severity: &Severity) -> Self {
        match severity {
            Severity::Low => Self::Healthy,
            Severity::Critical | Severity::High | Severity::Medium | Severity::Unknown(_) => {
                Self::Alert
            }
        }
    }

    #[must_use]
    pub const fn is_healthy(self) -> bool {
        matches!(self, Self::Healthy)
    }
}

impl std::fmt::Display for StatusLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Healthy => write!(f, "Healthy"),
            Self::Alert => write!(f, "Alert"),
        }
    }
}
