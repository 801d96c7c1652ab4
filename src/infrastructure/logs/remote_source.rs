use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::log_source::{LogSource, LogSourceError};
use crate::infrastructure::http::HttpAnalysisClient;

/// Asks the analysis service itself for a fresh sample batch each cycle.
pub struct RemoteLogSource {
    client: Arc<HttpAnalysisClient>,
}

impl RemoteLogSource {
    #[must_use]
    pub const fn new(client: Arc<HttpAnalysisClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl LogSource for RemoteLogSource {
    async fn fetch(&self) -> Result<String, LogSourceError> {
        self.client
            .fetch_generated_logs()
            .await
            .map_err(|e| LogSourceError::Unavailable(e.to_string()))
    }

    fn describe(&self) -> String {
        format!("{}/generate-logs", self.client.base_url())
    }
}
