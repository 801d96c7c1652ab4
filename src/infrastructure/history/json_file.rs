use std::path::PathBuf;

use crate::domain::entities::history::HistoryItem;
use crate::domain::ports::history::{HistoryError, HistorySource};

/// History stored as a JSON array of items, kept in file order.
pub struct JsonFileHistorySource {
    path: PathBuf,
}

impl JsonFileHistorySource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl HistorySource for JsonFileHistorySource {
    fn load(&self) -> Result<Vec<HistoryItem>, HistoryError> {
        let content = std::fs::read_to_string(&self.path).map_err(|source| HistoryError::Io {
            path: self.path.display().to_string(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|e| HistoryError::Parse(e.to_string()))
    }
}
