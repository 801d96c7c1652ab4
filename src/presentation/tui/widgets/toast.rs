use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Clear, Paragraph};
use ratatui::Frame;

use crate::domain::ports::notifier::Notification;

const TOAST_WIDTH: u16 = 44;
const TOAST_HEIGHT: u16 = 4;

/// Top-right corner of `area`, clipped to fit.
fn toast_area(area: Rect) -> Rect {
    let width = TOAST_WIDTH.min(area.width);
    let height = TOAST_HEIGHT.min(area.height);
    Rect {
        x: area.x + area.width - width,
        y: area.y,
        width,
        height,
    }
}

pub fn render_toast(frame: &mut Frame, notification: &Notification, area: Rect) {
    let (color, icon, body) = match notification {
        Notification::Progress { .. } => (Color::Cyan, "⏳", ""),
        Notification::Success { subtitle, .. } => (Color::Green, "✅", subtitle.as_str()),
        Notification::Error { message, .. } => (Color::Red, "❌", message.as_str()),
    };

    let lines = vec![
        Line::from(Span::styled(
            format!("{icon} {}", notification.title()),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(body),
    ];
    let popup = Paragraph::new(lines).block(
        Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(color)),
    );

    let target = toast_area(area);
    frame.render_widget(Clear, target);
    frame.render_widget(popup, target);
}
