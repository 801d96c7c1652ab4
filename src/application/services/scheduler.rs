use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use super::dashboard::{CycleOutcome, DashboardController, Trigger};

/// Default dashboard refresh period.
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(60);

/// Runs dashboard cycles immediately, then on a fixed interval, plus on demand.
pub struct PollScheduler;

impl PollScheduler {
    /// Start polling on the current tokio runtime.
    ///
    /// Every trigger, timer or manual, spawns its cycle as a separate task so
    /// the loop keeps ticking while a request is outstanding; the controller's
    /// in-flight guard drops the overlap.
    #[must_use]
    pub fn start(controller: Arc<DashboardController>, interval: Duration) -> SchedulerHandle {
        let (trigger_tx, mut trigger_rx) = mpsc::unbounded_channel::<()>();
        let (stop_tx, mut stop_rx) = oneshot::channel::<()>();

        let task = tokio::spawn(async move {
            tracing::info!("Polling started (interval: {}ms)", interval.as_millis());
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                let trigger = tokio::select! {
                    _ = ticker.tick() => Trigger::Timer,
                    Some(()) = trigger_rx.recv() => Trigger::Manual,
                    _ = &mut stop_rx => break,
                };
                spawn_cycle(Arc::clone(&controller), trigger);
            }
            tracing::info!("Polling stopped");
        });

        SchedulerHandle {
            trigger_tx,
            stop_tx,
            task,
        }
    }
}

fn spawn_cycle(controller: Arc<DashboardController>, trigger: Trigger) {
    tokio::spawn(async move {
        match controller.run_cycle(trigger).await {
            CycleOutcome::Skipped => {
                tracing::debug!(%trigger, "trigger ignored, previous cycle still running");
            }
            CycleOutcome::Succeeded { cycle, .. } | CycleOutcome::Failed { cycle, .. } => {
                tracing::trace!(cycle, %trigger, "cycle finished");
            }
        }
    });
}

/// Control over a running [`PollScheduler`]. Dropping it stops the timer.
pub struct SchedulerHandle {
    trigger_tx: mpsc::UnboundedSender<()>,
    stop_tx: oneshot::Sender<()>,
    task: JoinHandle<()>,
}

impl SchedulerHandle {
    /// Request a cycle through the same path as the timer.
    ///
    /// Returns `false` if the scheduler has already stopped.
    pub fn refresh(&self) -> bool {
        self.trigger_tx.send(()).is_ok()
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }

    /// Stop future timer firings and wait for the loop to exit.
    ///
    /// Cycles already spawned run to completion.
    pub async fn stop(self) {
        let Self { stop_tx, task, .. } = self;
        // The loop may already be gone; nothing to signal then.
        let _ = stop_tx.send(());
        if let Err(e) = task.await {
            tracing::warn!("Polling task ended abnormally: {e}");
        }
    }
}
