use std::sync::{Arc, Mutex, PoisonError, RwLock};
use std::time::Instant;

use crate::domain::entities::diagnosis::HealthCheck;
use crate::domain::ports::analyzer::LogAnalyzer;
use crate::domain::ports::log_source::LogSource;
use crate::domain::ports::notifier::Notifier;
use crate::domain::state::{reduce, CycleEvent, CycleId, DashboardSnapshot, Transition};

use super::notification_emitter::NotificationEmitter;

/// What started a cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Timer,
    Manual,
}

impl std::fmt::Display for Trigger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Timer => write!(f, "timer"),
            Self::Manual => write!(f, "manual"),
        }
    }
}

/// Result of one call to [`DashboardController::run_cycle`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    /// Another cycle was still in flight; this trigger was dropped.
    Skipped,
    Succeeded { cycle: CycleId, check: HealthCheck },
    Failed { cycle: CycleId, message: String },
}

/// Hands out cycle ids and allows at most one outstanding cycle.
#[derive(Default)]
struct InFlightGuard {
    state: Mutex<GuardState>,
}

#[derive(Default)]
struct GuardState {
    last_id: CycleId,
    active: Option<CycleId>,
}

/// Releases the guard when dropped, including when the cycle future is
/// cancelled mid-request.
struct InFlightToken<'a> {
    guard: &'a InFlightGuard,
    id: CycleId,
}

impl InFlightGuard {
    /// Atomically check for an outstanding cycle and claim the slot.
    fn try_claim(&self) -> Option<InFlightToken<'_>> {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        if state.active.is_some() {
            return None;
        }
        state.last_id += 1;
        let id = state.last_id;
        state.active = Some(id);
        drop(state);
        Some(InFlightToken { guard: self, id })
    }

    fn is_busy(&self) -> bool {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .active
            .is_some()
    }
}

impl Drop for InFlightToken<'_> {
    fn drop(&mut self) {
        let mut state = self
            .guard
            .state
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if state.active == Some(self.id) {
            state.active = None;
        }
    }
}

/// Drives the dashboard: one request per cycle, one authoritative snapshot.
///
/// Overlapping triggers are dropped while a cycle is in flight, whether they
/// come from the timer or a manual refresh.
pub struct DashboardController {
    analyzer: Arc<dyn LogAnalyzer>,
    log_source: Arc<dyn LogSource>,
    emitter: NotificationEmitter,
    store: RwLock<DashboardSnapshot>,
    guard: InFlightGuard,
}

impl DashboardController {
    #[must_use]
    pub fn new(
        analyzer: Arc<dyn LogAnalyzer>,
        log_source: Arc<dyn LogSource>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            analyzer,
            log_source,
            emitter: NotificationEmitter::new(notifier),
            store: RwLock::new(DashboardSnapshot::default()),
            guard: InFlightGuard::default(),
        }
    }

    /// Copy of the current snapshot.
    #[must_use]
    pub fn snapshot(&self) -> DashboardSnapshot {
        self.store
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Whether a cycle is outstanding.
    #[must_use]
    pub fn in_flight(&self) -> bool {
        self.guard.is_busy()
    }

    #[must_use]
    pub fn log_source_description(&self) -> String {
        self.log_source.describe()
    }

    /// Run one trigger → request → transition → notification cycle.
    pub async fn run_cycle(&self, trigger: Trigger) -> CycleOutcome {
        let Some(token) = self.guard.try_claim() else {
            tracing::debug!(%trigger, "cycle already in flight, trigger dropped");
            return CycleOutcome::Skipped;
        };
        let cycle = token.id;
        let started = Instant::now();
        tracing::debug!(cycle, %trigger, "analysis cycle started");
        self.apply(CycleEvent::Started(cycle));

        let outcome = match self.request().await {
            Ok(check) => {
                tracing::info!(
                    cycle,
                    severity = %check.severity(),
                    status = %check.status_label(),
                    elapsed_ms = elapsed_ms(started),
                    "analysis cycle succeeded"
                );
                self.apply(CycleEvent::Succeeded(cycle, check.clone()));
                CycleOutcome::Succeeded { cycle, check }
            }
            Err(message) => {
                tracing::warn!(
                    cycle,
                    elapsed_ms = elapsed_ms(started),
                    "analysis cycle failed: {message}"
                );
                self.apply(CycleEvent::Failed(cycle, message.clone()));
                CycleOutcome::Failed { cycle, message }
            }
        };
        drop(token);
        outcome
    }

    async fn request(&self) -> Result<HealthCheck, String> {
        let logs = self.log_source.fetch().await.map_err(|e| e.to_string())?;
        self.analyzer.analyze(&logs).await.map_err(|e| e.to_string())
    }

    /// Reduce under the write lock, then notify outside it.
    fn apply(&self, event: CycleEvent) {
        let (prev, next) = {
            let mut store = self.store.write().unwrap_or_else(PoisonError::into_inner);
            let next = reduce(&store, event);
            let prev = std::mem::replace(&mut *store, next.clone());
            (prev, next)
        };
        if let Some(transition) = Transition::between(&prev, &next) {
            tracing::trace!(from = %transition.from, to = %transition.to, "dashboard transition");
            self.emitter.on_transition(transition, &next);
        }
    }
}

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}
