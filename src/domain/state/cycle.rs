//! Pure state machine behind the dashboard.
//!
//! The controller owns one [`DashboardSnapshot`] and replaces it wholesale
//! with the output of [`reduce`]; readers only ever see complete snapshots.

use serde::Serialize;

use crate::domain::entities::diagnosis::HealthCheck;

/// Monotonic identifier handed out for each started cycle.
pub type CycleId = u64;

/// State of the current request cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "value")]
pub enum CycleState {
    #[default]
    Idle,
    Loading,
    Success(HealthCheck),
    Failure(String),
}

/// Tag of a [`CycleState`] without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Phase {
    Idle,
    Loading,
    Success,
    Failure,
}

impl CycleState {
    #[must_use]
    pub const fn phase(&self) -> Phase {
        match self {
            Self::Idle => Phase::Idle,
            Self::Loading => Phase::Loading,
            Self::Success(_) => Phase::Success,
            Self::Failure(_) => Phase::Failure,
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Loading => write!(f, "loading"),
            Self::Success => write!(f, "success"),
            Self::Failure => write!(f, "failure"),
        }
    }
}

/// Inputs to the reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleEvent {
    Started(CycleId),
    Succeeded(CycleId, HealthCheck),
    Failed(CycleId, String),
}

/// Everything the presentation layer reads about the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DashboardSnapshot {
    state: CycleState,
    last_check: Option<HealthCheck>,
    error: Option<String>,
    active_cycle: Option<CycleId>,
}

impl DashboardSnapshot {
    #[must_use]
    pub const fn state(&self) -> &CycleState {
        &self.state
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Most recent successful check. Survives later failures.
    #[must_use]
    pub const fn last_check(&self) -> Option<&HealthCheck> {
        self.last_check.as_ref()
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub const fn loading(&self) -> bool {
        matches!(self.state, CycleState::Loading)
    }

    #[must_use]
    pub const fn active_cycle(&self) -> Option<CycleId> {
        self.active_cycle
    }
}

/// Phase change between two snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: Phase,
    pub to: Phase,
}

impl Transition {
    /// Compare two snapshots; `None` when nothing changed.
    ///
    /// `Loading → Loading` never happens (a new cycle cannot start while one
    /// is active), but `Success → Success` does on consecutive cycles, so
    /// terminal phases are reported whenever the snapshot moved.
    #[must_use]
    pub fn between(prev: &DashboardSnapshot, next: &DashboardSnapshot) -> Option<Self> {
        if prev == next {
            return None;
        }
        Some(Self {
            from: prev.phase(),
            to: next.phase(),
        })
    }
}

/// Apply one event to a snapshot.
///
/// Results for a cycle that is not the active one are stale and leave the
/// snapshot untouched.
#[must_use]
pub fn reduce(snapshot: &DashboardSnapshot, event: CycleEvent) -> DashboardSnapshot {
    match event {
        CycleEvent::Started(id) => DashboardSnapshot {
            state: CycleState::Loading,
            last_check: snapshot.last_check.clone(),
            error: None,
            active_cycle: Some(id),
        },
        CycleEvent::Succeeded(id, check) if snapshot.active_cycle == Some(id) => {
            DashboardSnapshot {
                state: CycleState::Success(check.clone()),
                last_check: Some(check),
                error: None,
                active_cycle: None,
            }
        }
        CycleEvent::Failed(id, message) if snapshot.active_cycle == Some(id) => {
            DashboardSnapshot {
                state: CycleState::Failure(message.clone()),
                last_check: snapshot.last_check.clone(),
                error: Some(message),
                active_cycle: None,
            }
        }
        CycleEvent::Succeeded(..) | CycleEvent::Failed(..) => snapshot.clone(),
    }
}
