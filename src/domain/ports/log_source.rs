use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LogSourceError {
    #[error("failed to read log file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("log source unavailable: {0}")]
    Unavailable(String),
}

/// Supplies the log payload sent to the analysis service on each cycle.
#[async_trait]
pub trait LogSource: Send + Sync {
    /// # Errors
    ///
    /// Returns `LogSourceError` if the logs cannot be obtained.
    async fn fetch(&self) -> Result<String, LogSourceError>;

    /// Short human-readable description, used in logs and the TUI header.
    fn describe(&self) -> String;
}
