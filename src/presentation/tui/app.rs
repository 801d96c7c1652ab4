use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::Context;
use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, ListState, Paragraph};
use ratatui::{Frame, Terminal};

use crate::application::services::dashboard::DashboardController;
use crate::application::services::scheduler::SchedulerHandle;
use crate::domain::entities::history::HistoryItem;
use crate::domain::ports::history::HistorySource;
use crate::domain::ports::notifier::Notification;
use crate::domain::services::history_filter::filter_history;
use crate::domain::state::DashboardSnapshot;
use crate::domain::value_objects::severity_tag::SeverityTag;
use crate::infrastructure::notifications::toast::ToastNotifier;
use crate::presentation::tui::event::ActiveView;
use crate::presentation::tui::widgets::dashboard::render_dashboard;
use crate::presentation::tui::widgets::history::render_history;
use crate::presentation::tui::widgets::toast::render_toast;

/// Redraw cadence; state changes land asynchronously from the scheduler.
const FRAME_RATE: Duration = Duration::from_millis(250);

struct App<'a> {
    controller: &'a DashboardController,
    toasts: &'a ToastNotifier,
    history_source: &'a dyn HistorySource,
    request_refresh: Box<dyn Fn() -> bool + 'a>,

    snapshot: DashboardSnapshot,
    toast: Option<Notification>,
    history: Vec<HistoryItem>,
    history_error: Option<String>,

    active_view: ActiveView,
    filter: SeverityTag,
    list_state: ListState,

    should_quit: bool,
}

impl<'a> App<'a> {
    #[must_use]
    fn new(
        controller: &'a DashboardController,
        toasts: &'a ToastNotifier,
        history_source: &'a dyn HistorySource,
        request_refresh: Box<dyn Fn() -> bool + 'a>,
    ) -> Self {
        Self {
            controller,
            toasts,
            history_source,
            request_refresh,
            snapshot: DashboardSnapshot::default(),
            toast: None,
            history: Vec::new(),
            history_error: None,
            active_view: ActiveView::default(),
            filter: SeverityTag::default(),
            list_state: ListState::default(),
            should_quit: false,
        }
    }

    /// Pull the latest dashboard snapshot and toast.
    fn sync(&mut self) {
        self.snapshot = self.controller.snapshot();
        self.toast = self.toasts.current();
    }

    fn reload_history(&mut self) {
        match self.history_source.load() {
            Ok(items) => {
                self.history = items;
                self.history_error = None;
            }
            Err(e) => {
                tracing::warn!("History unavailable: {e}");
                self.history_error = Some(e.to_string());
            }
        }
        self.clamp_selection();
    }

    fn visible_count(&self) -> usize {
        filter_history(&self.history, self.filter).len()
    }

    fn clamp_selection(&mut self) {
        let count = self.visible_count();
        if let Some(sel) = self.list_state.selected() {
            if count == 0 {
                self.list_state.select(None);
            } else if sel >= count {
                self.list_state.select(Some(count - 1));
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab | KeyCode::BackTab => self.active_view = self.active_view.toggle(),
            KeyCode::Char('j') | KeyCode::Down => self.scroll_down(),
            KeyCode::Char('k') | KeyCode::Up => self.scroll_up(),
            KeyCode::Char('f') => self.set_filter(self.filter.next()),
            KeyCode::Char('F') => self.set_filter(self.filter.prev()),
            KeyCode::Char('r') => {
                if !(self.request_refresh)() {
                    tracing::warn!("Refresh ignored: polling has stopped");
                }
                self.reload_history();
            }
            _ => {}
        }
    }

    fn set_filter(&mut self, filter: SeverityTag) {
        self.filter = filter;
        self.list_state.select(None);
    }

    fn scroll_down(&mut self) {
        if self.active_view != ActiveView::History {
            return;
        }
        let count = self.visible_count();
        if count > 0 {
            let i = self
                .list_state
                .selected()
                .map_or(0, |i| if i >= count - 1 { 0 } else { i + 1 });
            self.list_state.select(Some(i));
        }
    }

    fn scroll_up(&mut self) {
        if self.active_view != ActiveView::History {
            return;
        }
        let count = self.visible_count();
        if count > 0 {
            let i = self
                .list_state
                .selected()
                .map_or(count - 1, |i| if i == 0 { count - 1 } else { i - 1 });
            self.list_state.select(Some(i));
        }
    }

    fn draw(&mut self, frame: &mut Frame) {
        let area = frame.area();

        let [header_area, body_area, status_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(area);

        self.render_header(frame, header_area);

        match self.active_view {
            ActiveView::Dashboard => render_dashboard(frame, &self.snapshot, body_area),
            ActiveView::History => {
                if let Some(ref error) = self.history_error {
                    let failed = Paragraph::new(format!("History unavailable: {error}"))
                        .style(Style::default().fg(Color::Red))
                        .block(Block::bordered().title("History"));
                    frame.render_widget(failed, body_area);
                } else {
                    render_history(
                        frame,
                        &self.history,
                        self.filter,
                        &mut self.list_state,
                        body_area,
                    );
                }
            }
        }

        if let Some(ref toast) = self.toast {
            render_toast(frame, toast, body_area);
        }

        self.render_status_bar(frame, status_area);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let (phase, phase_color) = if self.snapshot.loading() {
            ("analyzing…".to_string(), Color::Cyan)
        } else {
            (self.snapshot.phase().to_string(), Color::DarkGray)
        };

        let (status, status_color) = match self.snapshot.last_check() {
            Some(check) if check.status_label().is_healthy() => ("● Healthy", Color::Green),
            Some(_) => ("● Alert", Color::Red),
            None => ("● n/a", Color::DarkGray),
        };

        let header = Line::from(vec![
            Span::styled(
                " HEALTHWATCH ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("│ "),
            Span::styled(status, Style::default().fg(status_color)),
            Span::raw(" │ "),
            Span::styled(
                format!("[{}]", self.active_view),
                Style::default().fg(Color::Yellow),
            ),
            Span::raw(" │ "),
            Span::styled(phase, Style::default().fg(phase_color)),
            Span::raw(" │ "),
            Span::styled(
                self.controller.log_source_description(),
                Style::default().fg(Color::DarkGray),
            ),
        ]);

        frame.render_widget(Paragraph::new(header), area);
    }

    #[allow(clippy::unused_self)]
    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let key_style = Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD);

        let bar = Line::from(vec![
            Span::styled(" q", key_style),
            Span::raw(":quit "),
            Span::styled("Tab", key_style),
            Span::raw(":view "),
            Span::styled("r", key_style),
            Span::raw(":refresh "),
            Span::styled("f/F", key_style),
            Span::raw(":filter "),
            Span::styled("j/k", key_style),
            Span::raw(":nav"),
        ]);

        frame.render_widget(
            Paragraph::new(bar).style(Style::default().bg(Color::DarkGray)),
            area,
        );
    }
}

/// Restore the terminal to its normal state.
fn restore_terminal() {
    if let Err(e) = disable_raw_mode() {
        eprintln!("Failed to disable raw mode: {e}");
    }
    if let Err(e) = execute!(io::stdout(), LeaveAlternateScreen) {
        eprintln!("Failed to leave alternate screen: {e}");
    }
}

/// Launch the interactive dashboard.
///
/// Blocks the calling thread; polling keeps running on the tokio runtime
/// behind `scheduler`. Call from `tokio::task::block_in_place`.
///
/// # Errors
///
/// Returns an error if terminal setup, rendering, or event handling fails.
pub fn run_tui(
    controller: &DashboardController,
    scheduler: &SchedulerHandle,
    toasts: &ToastNotifier,
    history: &dyn HistorySource,
) -> anyhow::Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(e).context("Failed to enter alternate screen");
    }

    // Restore the terminal even on panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore_terminal();
        default_hook(info);
    }));

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new(controller, toasts, history, Box::new(|| scheduler.refresh()));
    app.reload_history();

    let result = run_app_loop(&mut terminal, &mut app);

    restore_terminal();
    let _ = terminal.show_cursor();
    let _ = std::panic::take_hook();

    result
}

fn run_app_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App<'_>,
) -> anyhow::Result<()> {
    loop {
        app.sync();
        terminal.draw(|frame| app.draw(frame))?;

        if event::poll(FRAME_RATE)? {
            if let CrosstermEvent::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
