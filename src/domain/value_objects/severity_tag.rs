use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::severity::Severity;

/// Selection used to filter the analysis history.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum SeverityTag {
    #[default]
    All,
    Critical,
    High,
    Medium,
    Low,
}

/// Tags in the order the filter bar shows them.
pub const ALL_TAGS: [SeverityTag; 5] = [
    SeverityTag::All,
    SeverityTag::Critical,
    SeverityTag::High,
    SeverityTag::Medium,
    SeverityTag::Low,
];

impl SeverityTag {
    /// Whether an item with `severity` passes this filter.
    ///
    /// `Unknown` severities only ever pass `All`.
    #[must_use]
    pub const fn matches(self, severity: &Severity) -> bool {
        matches!(
            (self, severity),
            (Self::All, _)
                | (Self::Critical, Severity::Critical)
                | (Self::High, Severity::High)
                | (Self::Medium, Severity::Medium)
                | (Self::Low, Severity::Low)
        )
    }

    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::All => Self::Critical,
            Self::Critical => Self::High,
            Self::High => Self::Medium,
            Self::Medium => Self::Low,
            Self::Low => Self::All,
        }
    }

    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::All => Self::Low,
            Self::Critical => Self::All,
            Self::High => Self::Critical,
            Self::Medium => Self::High,
            Self::Low => Self::Medium,
        }
    }
}

impl std::fmt::Display for SeverityTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "ALL"),
            Self::Critical => write!(f, "CRITICAL"),
            Self::High => write!(f, "HIGH"),
            Self::Medium => write!(f, "MEDIUM"),
            Self::Low => write!(f, "LOW"),
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown severity filter '{0}' (expected one of: all, critical, high, medium, low)")]
pub struct ParseSeverityTagError(String);

impl FromStr for SeverityTag {
    type Err = ParseSeverityTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ALL" => Ok(Self::All),
            "CRITICAL" => Ok(Self::Critical),
            "HIGH" => Ok(Self::High),
            "MEDIUM" => Ok(Self::Medium),
            "LOW" => Ok(Self::Low),
            _ => Err(ParseSeverityTagError(s.to_owned())),
        }
    }
}
