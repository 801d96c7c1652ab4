pub mod file_source;
pub mod remote_source;
pub mod static_source;

use std::sync::Arc;

use crate::application::config::LogsConfig;
use crate::domain::ports::log_source::LogSource;
use crate::infrastructure::http::HttpAnalysisClient;

use self::file_source::FileLogSource;
use self::remote_source::RemoteLogSource;
use self::static_source::StaticLogSource;

/// Create the log source selected in configuration.
///
/// Falls back to [`StaticLogSource`] when the kind is unknown or `file` has
/// no path.
#[must_use]
pub fn create_log_source(config: &LogsConfig, client: Arc<HttpAnalysisClient>) -> Arc<dyn LogSource> {
    match config.source.trim() {
        "static" => Arc::new(StaticLogSource::new(config.text.clone())),
        "file" => match config.path {
            Some(ref path) => Arc::new(FileLogSource::new(path, config.tail_lines)),
            None => {
                tracing::warn!("logs.source = \"file\" but logs.path is not set, using static sample");
                Arc::new(StaticLogSource::new(config.text.clone()))
            }
        },
        "remote" => Arc::new(RemoteLogSource::new(client)),
        _ => {
            tracing::warn!(
                source = %config.source,
                "unknown log source, falling back to static sample"
            );
            Arc::new(StaticLogSource::new(config.text.clone()))
        }
    }
}
