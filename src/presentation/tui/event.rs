use std::fmt;

/// Which view fills the body of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Dashboard,
    History,
}

impl ActiveView {
    /// Switch to the other view.
    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Dashboard => Self::History,
            Self::History => Self::Dashboard,
        }
    }
}

impl fmt::Display for ActiveView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dashboard => write!(f, "Dashboard"),
            Self::History => write!(f, "History"),
        }
    }
}
