use crate::application::services::dashboard::{CycleOutcome, DashboardController, Trigger};
use crate::domain::state::DashboardSnapshot;
use crate::presentation::cli::formatters::diagnosis_fmt::{format_snapshot, print_section_header};

/// Runs one analysis cycle and prints the diagnosis.
///
/// # Errors
///
/// Returns an error if the cycle fails or JSON serialization fails.
pub async fn run_check(controller: &DashboardController, json: bool) -> anyhow::Result<()> {
    let outcome = controller.run_cycle(Trigger::Manual).await;

    if json {
        print_snapshot_json(&controller.snapshot())?;
    } else {
        print_snapshot_human(&controller.snapshot(), &controller.log_source_description());
    }

    match outcome {
        CycleOutcome::Failed { message, .. } => anyhow::bail!("Analysis failed: {message}"),
        CycleOutcome::Skipped => anyhow::bail!("Another analysis is already running"),
        CycleOutcome::Succeeded { .. } => Ok(()),
    }
}

fn print_snapshot_json(snapshot: &DashboardSnapshot) -> anyhow::Result<()> {
    let output = serde_json::to_string_pretty(snapshot.state())?;
    println!("{output}");
    Ok(())
}

fn print_snapshot_human(snapshot: &DashboardSnapshot, source: &str) {
    print_section_header("🩺 Log health check");
    println!("source: {source}\n");
    println!("{}", format_snapshot(snapshot));
}
