use colored::Colorize;

use crate::domain::entities::diagnosis::HealthCheck;
use crate::domain::state::DashboardSnapshot;
use crate::domain::value_objects::severity::{Severity, SeverityColor};
use crate::domain::value_objects::status_label::StatusLabel;

/// Drops ESC, C1 controls and the other non-printing characters (newlines and
/// tabs survive) so service text cannot inject terminal escape sequences.
fn sanitize_terminal(input: &str) -> String {
    input
        .chars()
        .filter(|&c| c == '\n' || c == '\t' || !c.is_control())
        .collect()
}

#[must_use]
pub fn severity_badge(severity: &Severity) -> String {
    let label = format!(" {severity} ");
    match severity.color() {
        SeverityColor::Red => format!("{}", label.on_red().white().bold()),
        SeverityColor::LightRed => format!("{}", label.on_bright_red().white().bold()),
        SeverityColor::Yellow => format!("{}", label.on_yellow().black()),
        SeverityColor::Green => format!("{}", label.on_green().black()),
        SeverityColor::Gray => format!("{}", label.on_bright_black().white()),
    }
}

#[must_use]
pub fn status_badge(status: StatusLabel) -> String {
    match status {
        StatusLabel::Healthy => format!("{}", "✅ Healthy".green().bold()),
        StatusLabel::Alert => format!("{}", "🚨 Alert".red().bold()),
    }
}

pub fn print_section_header(title: &str) {
    println!("{}", title.bold().cyan());
    let display_width = title.chars().count();
    println!("{}", "─".repeat(display_width).cyan());
}

/// Multi-line human rendering of a health check.
#[must_use]
pub fn format_health_check(check: &HealthCheck) -> String {
    let analysis = &check.analysis;
    let mut lines = vec![
        format!(
            "{}  {}  {}",
            status_badge(check.status_label()),
            severity_badge(&analysis.severity),
            check
                .timestamp
                .format("%Y-%m-%d %H:%M:%S UTC")
                .to_string()
                .dimmed()
        ),
        String::new(),
        format!("{} {}", "❌ Error:".bold(), sanitize_terminal(&analysis.error)),
        format!("{} {}", "🔍 Cause:".bold(), sanitize_terminal(&analysis.cause)),
        format!("{}", "💡 Solution:".bold()),
    ];
    lines.extend(
        sanitize_terminal(&analysis.solution)
            .lines()
            .map(|line| format!("   {line}")),
    );
    if !check.model.is_empty() || !check.provider.is_empty() {
        lines.push(String::new());
        lines.push(
            format!(
                "model: {}  provider: {}",
                sanitize_terminal(&check.model),
                sanitize_terminal(&check.provider)
            )
                .dimmed()
                .to_string(),
        );
    }
    lines.join("\n")
}

#[must_use]
pub fn format_error_banner(message: &str) -> String {
    format!("{} {}", "⚠ ".red().bold(), sanitize_terminal(message).red())
}

/// Dashboard snapshot as text: last check (if any) plus the error banner.
#[must_use]
pub fn format_snapshot(snapshot: &DashboardSnapshot) -> String {
    let mut sections = Vec::new();
    match snapshot.last_check() {
        Some(check) => sections.push(format_health_check(check)),
        None => sections.push("No diagnosis yet".dimmed().to_string()),
    }
    if let Some(error) = snapshot.error() {
        sections.push(format_error_banner(error));
    }
    sections.join("\n\n")
}
