use chrono::{DateTime, Duration, Utc};

use crate::domain::entities::history::HistoryItem;
use crate::domain::ports::history::{HistoryError, HistorySource};
use crate::domain::value_objects::severity::Severity;

/// Built-in sample history, newest first, anchored at construction time.
pub struct StaticHistorySource {
    anchor: DateTime<Utc>,
}

impl StaticHistorySource {
    #[must_use]
    pub fn new() -> Self {
        Self::anchored_at(Utc::now())
    }

    const fn anchored_at(anchor: DateTime<Utc>) -> Self {
        Self { anchor }
    }
}

impl Default for StaticHistorySource {
    fn default() -> Self {
        Self::new()
    }
}

impl HistorySource for StaticHistorySource {
    fn load(&self) -> Result<Vec<HistoryItem>, HistoryError> {
        let entries = [
            ("1", 0, Severity::High, "Database connection failed", "Resolved"),
            ("2", 1, Severity::Medium, "API timeout", "Monitoring"),
            ("3", 2, Severity::Low, "Slow query detected", "Fixed"),
            ("4", 3, Severity::Critical, "Service outage", "Resolved"),
            ("5", 4, Severity::High, "Memory leak detected", "In Progress"),
        ];
        Ok(entries
            .into_iter()
            .map(|(id, hours_ago, severity, error, status)| HistoryItem {
                id: id.into(),
                timestamp: self.anchor - Duration::hours(hours_ago),
                severity,
                error: error.into(),
                status: status.into(),
            })
            .collect())
    }
}
