use std::path::PathBuf;

use async_trait::async_trait;

use crate::domain::ports::log_source::{LogSource, LogSourceError};

/// Reads the last `tail_lines` lines of a log file on every cycle.
pub struct FileLogSource {
    path: PathBuf,
    tail_lines: usize,
}

impl FileLogSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, tail_lines: usize) -> Self {
        Self {
            path: path.into(),
            tail_lines: tail_lines.max(1),
        }
    }
}

#[async_trait]
impl LogSource for FileLogSource {
    async fn fetch(&self) -> Result<String, LogSourceError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| LogSourceError::Io {
                path: self.path.display().to_string(),
                source,
            })?;
        Ok(tail(&String::from_utf8_lossy(&bytes), self.tail_lines))
    }

    fn describe(&self) -> String {
        format!("file {} (last {} lines)", self.path.display(), self.tail_lines)
    }
}

fn tail(text: &str, lines: usize) -> String {
    let all: Vec<&str> = text.lines().collect();
    let start = all.len().saturating_sub(lines);
    all[start..].join("\n")
}
