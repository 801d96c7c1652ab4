use std::borrow::Cow;
use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

use colored::Colorize;

use crate::domain::ports::notifier::{Notification, NotificationError, Notifier};

/// Erase the current line and return the cursor to column 0.
const CLEAR_LINE: &str = "\r\x1b[2K";

/// Prints notifications as single terminal lines.
///
/// The progress line is written without a newline so that dismissing it can
/// erase it in place.
pub struct TerminalNotifier {
    out: Mutex<Box<dyn Write + Send>>,
    progress_on_line: Mutex<bool>,
}

impl TerminalNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self::with_writer(Box::new(io::stdout()))
    }

    #[must_use]
    pub fn with_writer(out: Box<dyn Write + Send>) -> Self {
        Self {
            out: Mutex::new(out),
            progress_on_line: Mutex::new(false),
        }
    }
}

impl Default for TerminalNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for TerminalNotifier {
    fn show(&self, notification: &Notification) -> Result<(), NotificationError> {
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        let mut progress = self
            .progress_on_line
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let result = match notification {
            Notification::Progress { title } => {
                *progress = true;
                write!(out, "\u{23f3} {}", sanitize(title).dimmed())
            }
            Notification::Success { title, subtitle } => writeln!(
                out,
                "{} {} {}",
                "\u{2714}".green().bold(),
                sanitize(title).green().bold(),
                sanitize(subtitle).dimmed()
            ),
            Notification::Error { title, message } => writeln!(
                out,
                "{} {} {}",
                "\u{2718}".red().bold(),
                sanitize(title).red().bold(),
                sanitize(message)
            ),
        };
        result
            .and_then(|()| out.flush())
            .map_err(|e| NotificationError::SendFailed(e.to_string()))
    }

    fn dismiss(&self) -> Result<(), NotificationError> {
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        let mut progress = self
            .progress_on_line
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if !*progress {
            return Ok(());
        }
        *progress = false;
        write!(out, "{CLEAR_LINE}")
            .and_then(|()| out.flush())
            .map_err(|e| NotificationError::SendFailed(e.to_string()))
    }
}

/// Characters removed before printing: C0 and C1 controls plus DEL.
/// Newlines and tabs are kept.
fn is_stripped(c: char) -> bool {
    c != '\n' && c != '\t' && c.is_control()
}

/// Remove control characters from service-supplied text so it cannot carry
/// terminal escape sequences.
fn sanitize(s: &str) -> Cow<'_, str> {
    if s.chars().any(is_stripped) {
        Cow::Owned(s.chars().filter(|&c| !is_stripped(c)).collect())
    } else {
        Cow::Borrowed(s)
    }
}
