use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Severity attached to a diagnosis by the analysis service.
///
/// The service returns free text; only the four upper-case labels are
/// recognized. Anything else is kept verbatim in [`Severity::Unknown`] so it
/// still compares by its original value while displaying as `UNKNOWN`.
/// Null or non-string wire values also land in `Unknown`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
    Unknown(String),
}

impl Severity {
    /// Parse a wire value. Matching is exact: `"high"` is not `HIGH`.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw {
            "CRITICAL" => Self::Critical,
            "HIGH" => Self::High,
            "MEDIUM" => Self::Medium,
            "LOW" => Self::Low,
            other => Self::Unknown(other.to_owned()),
        }
    }

    /// Display label; unrecognized values collapse to `UNKNOWN`.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Critical => "CRITICAL",
            Self::High => "HIGH",
            Self::Medium => "MEDIUM",
            Self::Low => "LOW",
            Self::Unknown(_) => "UNKNOWN",
        }
    }

    /// The value as the service sent it.
    #[must_use]
    pub fn raw(&self) -> &str {
        match self {
            Self::Unknown(raw) => raw,
            known => known.label(),
        }
    }

    #[must_use]
    pub const fn emoji(&self) -> &str {
        match self {
            Self::Critical => "🔴",
            Self::High => "🔶",
            Self::Medium => "⚠️",
            Self::Low => "✅",
            Self::Unknown(_) => "❔",
        }
    }

    #[must_use]
    pub const fn color(&self) -> SeverityColor {
        match self {
            Self::Critical => SeverityColor::Red,
            Self::High => SeverityColor::LightRed,
            Self::Medium => SeverityColor::Yellow,
            Self::Low => SeverityColor::Green,
            Self::Unknown(_) => SeverityColor::Gray,
        }
    }
}

/// Palette shared by every severity rendering (TUI and CLI).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeverityColor {
    Red,
    LightRed,
    Yellow,
    Green,
    Gray,
}

impl Default for Severity {
    fn default() -> Self {
        Self::Unknown(String::new())
    }
}

impl From<String> for Severity {
    fn from(raw: String) -> Self {
        match Self::parse(&raw) {
            Self::Unknown(_) => Self::Unknown(raw),
            known => known,
        }
    }
}

impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(raw) => Self::from(raw),
            Value::Null => Self::default(),
            other => Self::Unknown(other.to_string()),
        })
    }
}

impl From<&str> for Severity {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl From<Severity> for String {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Unknown(raw) => raw,
            known => known.label().to_owned(),
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
