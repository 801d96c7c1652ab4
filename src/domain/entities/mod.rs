pub mod diagnosis;
pub mod history;

pub use diagnosis::{Diagnosis, HealthCheck};
pub use history::HistoryItem;
