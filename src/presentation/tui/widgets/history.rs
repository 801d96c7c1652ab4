use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::domain::entities::history::HistoryItem;
use crate::domain::services::history_filter::{count_by_tag, empty_state_message, filter_history};
use crate::domain::value_objects::severity::{Severity, SeverityColor};
use crate::domain::value_objects::severity_tag::SeverityTag;

pub const fn severity_color(severity: &Severity) -> Color {
    match severity.color() {
        SeverityColor::Red => Color::Red,
        SeverityColor::LightRed => Color::LightRed,
        SeverityColor::Yellow => Color::Yellow,
        SeverityColor::Green => Color::Green,
        SeverityColor::Gray => Color::Gray,
    }
}

fn severity_style(severity: &Severity) -> Style {
    let style = Style::default().fg(severity_color(severity));
    if matches!(severity, Severity::Critical) {
        style.add_modifier(Modifier::BOLD)
    } else {
        style
    }
}

fn render_filter_bar(frame: &mut Frame, items: &[HistoryItem], active: SeverityTag, area: Rect) {
    let mut spans = vec![Span::raw(" ")];
    for (tag, count) in count_by_tag(items) {
        let style = if tag == active {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!(" {tag} ({count}) "), style));
        spans.push(Span::raw(" "));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Filter bar plus the history entries matching `filter`.
pub fn render_history(
    frame: &mut Frame,
    items: &[HistoryItem],
    filter: SeverityTag,
    list_state: &mut ListState,
    area: Rect,
) {
    let [bar_area, list_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Fill(1)]).areas(area);
    render_filter_bar(frame, items, filter, bar_area);

    let block = Block::default()
        .title("History")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));

    let visible = filter_history(items, filter);
    let list_items: Vec<ListItem<'_>> = if visible.is_empty() {
        vec![ListItem::new(Line::from(Span::styled(
            empty_state_message(filter),
            Style::default().fg(Color::DarkGray),
        )))]
    } else {
        visible
            .iter()
            .map(|item| {
                let line1 = Line::from(vec![Span::styled(
                    format!(
                        "{} [{}] {}",
                        item.severity.emoji(),
                        item.severity,
                        item.error
                    ),
                    severity_style(&item.severity),
                )]);
                let line2 = Line::from(vec![Span::styled(
                    format!(
                        "  #{} {} · {}",
                        item.id,
                        item.timestamp.format("%Y-%m-%d %H:%M"),
                        item.status
                    ),
                    Style::default().add_modifier(Modifier::DIM),
                )]);
                ListItem::new(vec![line1, line2])
            })
            .collect()
    };

    let list = List::new(list_items)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("▶ ");

    frame.render_stateful_widget(list, list_area, list_state);
}
