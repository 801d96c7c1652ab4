use std::sync::{Arc, Mutex, PoisonError};

use crate::domain::ports::notifier::{Notification, Notifier};
use crate::domain::state::{CycleState, DashboardSnapshot, Phase, Transition};

pub const PROGRESS_TITLE: &str = "Analyzing logs...";
pub const SUCCESS_TITLE: &str = "Analysis complete";
pub const FAILURE_TITLE: &str = "Analysis failed";

/// Turns dashboard transitions into user-facing notifications.
///
/// The only state kept is whether a notification is currently displayed, so
/// the previous one can be dismissed before the next is shown. Notifier
/// failures are logged and never feed back into the dashboard state.
pub struct NotificationEmitter {
    notifier: Arc<dyn Notifier>,
    shown: Mutex<bool>,
}

impl NotificationEmitter {
    #[must_use]
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self {
            notifier,
            shown: Mutex::new(false),
        }
    }

    /// React to `transition`, reading any payload from `current`.
    pub fn on_transition(&self, transition: Transition, current: &DashboardSnapshot) {
        let notification = match (transition.to, current.state()) {
            (Phase::Loading, _) => Notification::Progress {
                title: PROGRESS_TITLE.into(),
            },
            (Phase::Success, CycleState::Success(check)) => Notification::Success {
                title: SUCCESS_TITLE.into(),
                subtitle: check.severity().to_string(),
            },
            (Phase::Failure, CycleState::Failure(message)) => Notification::Error {
                title: FAILURE_TITLE.into(),
                message: message.clone(),
            },
            _ => return,
        };
        self.replace_with(&notification);
    }

    #[cfg(test)]
    fn is_shown(&self) -> bool {
        *self.shown.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn replace_with(&self, notification: &Notification) {
        let mut shown = self.shown.lock().unwrap_or_else(PoisonError::into_inner);
        if *shown {
            if let Err(e) = self.notifier.dismiss() {
                tracing::warn!("Failed to dismiss notification: {e}");
            }
            *shown = false;
        }
        match self.notifier.show(notification) {
            Ok(()) => *shown = true,
            Err(e) => tracing::warn!(title = notification.title(), "Notification failed: {e}"),
        }
    }
}
