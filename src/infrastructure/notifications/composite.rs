use std::sync::Arc;

use crate::domain::ports::notifier::{Notification, NotificationError, Notifier};

/// Forwards notifications to multiple notifiers.
///
/// Calls each notifier in order, collecting errors.
/// Returns the first error encountered (if any), but always calls all notifiers.
pub struct CompositeNotifier {
    notifiers: Vec<Arc<dyn Notifier>>,
}

impl CompositeNotifier {
    #[must_use]
    pub fn new(notifiers: Vec<Arc<dyn Notifier>>) -> Self {
        Self { notifiers }
    }

    fn for_each(
        &self,
        what: &str,
        f: impl Fn(&dyn Notifier) -> Result<(), NotificationError>,
    ) -> Result<(), NotificationError> {
        let mut first_error = None;
        for notifier in &self.notifiers {
            if let Err(e) = f(notifier.as_ref()) {
                tracing::warn!("{what} failed: {e}");
                if first_error.is_none() {
                    first_error = Some(e);
                }
            }
        }
        first_error.map_or(Ok(()), Err)
    }
}

impl Default for CompositeNotifier {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl Notifier for CompositeNotifier {
    fn show(&self, notification: &Notification) -> Result<(), NotificationError> {
        self.for_each("Notification", |n| n.show(notification))
    }

    fn dismiss(&self) -> Result<(), NotificationError> {
        self.for_each("Dismiss", |n| n.dismiss())
    }
}
