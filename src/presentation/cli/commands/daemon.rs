use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use crate::application::services::dashboard::DashboardController;
use crate::application::services::scheduler::PollScheduler;

/// Poll the analysis service headless until Ctrl+C.
///
/// Each cycle's outcome reaches the terminal through the configured
/// notifiers; failures are logged and never stop the loop. SIGTERM is not
/// handled.
///
/// # Errors
///
/// Returns an error if the Ctrl+C handler cannot be installed.
pub async fn run_daemon(
    controller: Arc<DashboardController>,
    interval: Duration,
) -> anyhow::Result<()> {
    let mut signal_error = None;
    run_daemon_until(controller, interval, async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            signal_error = Some(e);
        }
    })
    .await;
    match signal_error {
        Some(e) => Err(e.into()),
        None => Ok(()),
    }
}

/// Run the scheduler until `shutdown` resolves, then stop it cleanly.
pub async fn run_daemon_until<F>(
    controller: Arc<DashboardController>,
    interval: Duration,
    shutdown: F,
) where
    F: Future<Output = ()>,
{
    tracing::info!(
        "Daemon started (interval: {}s, source: {})",
        interval.as_secs(),
        controller.log_source_description()
    );
    let handle = PollScheduler::start(controller, interval);
    shutdown.await;
    tracing::info!("Shutdown signal received, stopping...");
    handle.stop().await;
    println!("\nhealthwatch stopped.");
}
