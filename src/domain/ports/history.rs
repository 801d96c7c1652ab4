use thiserror::Error;

use crate::domain::entities::history::HistoryItem;

#[derive(Error, Debug)]
pub enum HistoryError {
    #[error("failed to read history file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("invalid history data: {0}")]
    Parse(String),
}

/// Ordered source of past diagnoses, oldest last.
pub trait HistorySource: Send + Sync {
    /// # Errors
    ///
    /// Returns `HistoryError` if the backing data cannot be read or parsed.
    fn load(&self) -> Result<Vec<HistoryItem>, HistoryError>;
}
