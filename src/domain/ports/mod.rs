pub mod analyzer;
pub mod history;
pub mod log_source;
pub mod notifier;

pub use analyzer::{ensure_logs_present, AnalysisError, LogAnalyzer};
pub use history::{HistoryError, HistorySource};
pub use log_source::{LogSource, LogSourceError};
pub use notifier::{Notification, NotificationError, Notifier};
