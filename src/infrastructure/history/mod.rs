pub mod json_file;
pub mod static_source;

use crate::application::config::HistoryConfig;
use crate::domain::ports::history::HistorySource;

use self::json_file::JsonFileHistorySource;
use self::static_source::StaticHistorySource;

/// Use the configured JSON file, or the built-in sample list without one.
#[must_use]
pub fn create_history_source(config: &HistoryConfig) -> Box<dyn HistorySource> {
    match config.path {
        Some(ref path) => Box::new(JsonFileHistorySource::new(path)),
        None => Box::new(StaticHistorySource::new()),
    }
}
