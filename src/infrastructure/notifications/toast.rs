use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

use crate::domain::ports::notifier::{Notification, NotificationError, Notifier};

/// How long an outcome toast stays on screen.
pub const TOAST_TTL: Duration = Duration::from_secs(5);

/// Holds the one notification the TUI should draw.
///
/// Outcome toasts expire after [`TOAST_TTL`]; progress toasts stay until
/// dismissed.
#[derive(Default)]
pub struct ToastNotifier {
    slot: Mutex<Option<(Notification, Instant)>>,
}

impl ToastNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Notification to draw right now, if any.
    #[must_use]
    pub fn current(&self) -> Option<Notification> {
        self.current_at(Instant::now())
    }

    fn current_at(&self, now: Instant) -> Option<Notification> {
        let slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        slot.as_ref()
            .filter(|(n, shown_at)| {
                n.is_persistent() || now.saturating_duration_since(*shown_at) < TOAST_TTL
            })
            .map(|(n, _)| n.clone())
    }
}

impl Notifier for ToastNotifier {
    fn show(&self, notification: &Notification) -> Result<(), NotificationError> {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) =
            Some((notification.clone(), Instant::now()));
        Ok(())
    }

    fn dismiss(&self) -> Result<(), NotificationError> {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = None;
        Ok(())
    }
}
