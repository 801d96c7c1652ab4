use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};
use ratatui::Frame;

use crate::domain::entities::diagnosis::HealthCheck;
use crate::domain::state::DashboardSnapshot;
use crate::domain::value_objects::status_label::StatusLabel;

use super::history::severity_color;

fn card(title: &str) -> Block<'_> {
    Block::bordered()
        .title(title)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray))
}

pub fn render_dashboard(frame: &mut Frame, snapshot: &DashboardSnapshot, area: Rect) {
    let banner_height = if snapshot.error().is_some() { 3 } else { 0 };
    let [banner_area, cards_area, detail_area] = Layout::vertical([
        Constraint::Length(banner_height),
        Constraint::Length(3),
        Constraint::Fill(1),
    ])
    .areas(area);

    if let Some(error) = snapshot.error() {
        render_error_banner(frame, error, banner_area);
    }

    let [status_area, time_area, severity_area] =
        Layout::horizontal([Constraint::Ratio(1, 3); 3]).areas(cards_area);

    match snapshot.last_check() {
        Some(check) => {
            render_status_card(frame, check.status_label(), status_area);
            let time = Paragraph::new(check.timestamp.format("%Y-%m-%d %H:%M:%S").to_string())
                .block(card("Last check"));
            frame.render_widget(time, time_area);
            let severity = check.severity();
            let severity_card = Paragraph::new(Span::styled(
                format!("{} {severity}", severity.emoji()),
                Style::default()
                    .fg(severity_color(severity))
                    .add_modifier(Modifier::BOLD),
            ))
            .block(card("Severity"));
            frame.render_widget(severity_card, severity_area);
            render_diagnosis(frame, check, detail_area);
        }
        None => {
            let placeholder = if snapshot.loading() {
                "Analyzing logs..."
            } else {
                "No diagnosis yet"
            };
            for (title, cell) in [
                ("Status", status_area),
                ("Last check", time_area),
                ("Severity", severity_area),
            ] {
                frame.render_widget(Paragraph::new("--").dark_gray().block(card(title)), cell);
            }
            frame.render_widget(
                Paragraph::new(placeholder).dark_gray().block(card("Diagnosis")),
                detail_area,
            );
        }
    }
}

fn render_status_card(frame: &mut Frame, status: StatusLabel, area: Rect) {
    let (text, color) = match status {
        StatusLabel::Healthy => ("✅ Healthy", Color::Green),
        StatusLabel::Alert => ("🚨 Alert", Color::Red),
    };
    let paragraph = Paragraph::new(Span::styled(
        text,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))
    .block(card("Status"));
    frame.render_widget(paragraph, area);
}

fn render_error_banner(frame: &mut Frame, message: &str, area: Rect) {
    let banner = Paragraph::new(Line::from(vec![
        Span::styled("⚠ ", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
        Span::styled(message, Style::default().fg(Color::Red)),
    ]))
    .block(
        Block::bordered()
            .title("Error")
            .border_style(Style::default().fg(Color::Red)),
    );
    frame.render_widget(banner, area);
}

fn render_diagnosis(frame: &mut Frame, check: &HealthCheck, area: Rect) {
    let label = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    let analysis = &check.analysis;
    let mut lines = vec![
        Line::from(vec![Span::styled("Error: ", label), Span::raw(&analysis.error)]),
        Line::from(vec![Span::styled("Cause: ", label), Span::raw(&analysis.cause)]),
        Line::from(Span::styled("Solution:", label)),
    ];
    lines.extend(analysis.solution.lines().map(|l| Line::from(format!("  {l}"))));
    if !check.model.is_empty() {
        lines.push(Line::default());
        lines.push(
            Line::from(format!("model: {}  provider: {}", check.model, check.provider)).dark_gray(),
        );
    }

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(card("Diagnosis"));
    frame.render_widget(paragraph, area);
}
