use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotificationError {
    #[error("failed to send notification: {0}")]
    SendFailed(String),
}

/// User-facing message emitted around an analysis cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// Persistent until dismissed.
    Progress { title: String },
    Success { title: String, subtitle: String },
    Error { title: String, message: String },
}

impl Notification {
    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::Progress { title } | Self::Success { title, .. } | Self::Error { title, .. } => {
                title
            }
        }
    }

    #[must_use]
    pub const fn is_persistent(&self) -> bool {
        matches!(self, Self::Progress { .. })
    }
}

pub trait Notifier: Send + Sync {
    /// Display `notification`.
    ///
    /// # Errors
    ///
    /// Returns `NotificationError` if the notification fails to send.
    fn show(&self, notification: &Notification) -> Result<(), NotificationError>;

    /// Remove the currently displayed notification, if any.
    ///
    /// # Errors
    ///
    /// Returns `NotificationError` if the notifier cannot clear its output.
    fn dismiss(&self) -> Result<(), NotificationError>;
}
