pub mod severity;
pub mod severity_tag;
pub mod status_label;

pub use severity::{Severity, SeverityColor};
pub use severity_tag::{SeverityTag, ALL_TAGS};
pub use status_label::StatusLabel;
