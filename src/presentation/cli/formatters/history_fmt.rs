use colored::Colorize;

use crate::domain::entities::history::HistoryItem;
use crate::domain::services::history_filter::empty_state_message;
use crate::domain::value_objects::severity::Severity;
use crate::domain::value_objects::severity_tag::SeverityTag;

fn colorize_severity(severity: &Severity, cell: String) -> String {
    match severity {
        Severity::Critical => cell.red().bold().to_string(),
        Severity::High => cell.bright_red().to_string(),
        Severity::Medium => cell.yellow().to_string(),
        Severity::Low => cell.green().to_string(),
        Severity::Unknown(_) => cell.bright_black().to_string(),
    }
}

/// Formats already-filtered history items as an aligned table.
///
/// An empty slice renders the explicit empty-state message for `tag`.
#[must_use]
pub fn format_history_table(items: &[HistoryItem], tag: SeverityTag) -> String {
    if items.is_empty() {
        return empty_state_message(tag).dimmed().to_string();
    }

    let header = format!(
        "{:<6} {:<20} {:<10} {:<36} {:<12}",
        "ID", "TIME", "SEVERITY", "ERROR", "STATUS"
    );
    let separator = "─".repeat(header.chars().count());
    let mut rows = vec![header, separator];

    for item in items {
        let error: String = item.error.chars().take(35).collect();
        let severity = colorize_severity(&item.severity, format!("{:<10}", item.severity.label()));
        rows.push(format!(
            "{:<6} {:<20} {} {:<36} {:<12}",
            item.id.chars().take(6).collect::<String>(),
            item.timestamp.format("%Y-%m-%d %H:%M"),
            severity,
            error,
            item.status
        ));
    }

    rows.join("\n")
}
