use async_trait::async_trait;

use crate::domain::ports::log_source::{LogSource, LogSourceError};

/// Sends the same configured log text every cycle.
pub struct StaticLogSource {
    text: String,
}

impl StaticLogSource {
    #[must_use]
    pub const fn new(text: String) -> Self {
        Self { text }
    }
}

#[async_trait]
impl LogSource for StaticLogSource {
    async fn fetch(&self) -> Result<String, LogSourceError> {
        Ok(self.text.clone())
    }

    fn describe(&self) -> String {
        "static sample".into()
    }
}
