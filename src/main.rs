use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use healthwatch::application::config::{AppConfig, API_URL_ENV};
use healthwatch::application::services::dashboard::DashboardController;
use healthwatch::application::services::scheduler::PollScheduler;
use healthwatch::application::services::upload_relay::UploadRelay;
use healthwatch::domain::ports::analyzer::LogAnalyzer;
use healthwatch::domain::ports::notifier::Notifier;
use healthwatch::infrastructure::history::create_history_source;
use healthwatch::infrastructure::http::HttpAnalysisClient;
use healthwatch::infrastructure::logs::create_log_source;
use healthwatch::infrastructure::notifications::{
    CompositeNotifier, TerminalNotifier, ToastNotifier,
};
use healthwatch::presentation::cli::app::{Cli, Commands};
use healthwatch::presentation::cli::commands::check::run_check;
use healthwatch::presentation::cli::commands::daemon::run_daemon;
use healthwatch::presentation::cli::commands::history::run_history;
use healthwatch::presentation::cli::commands::upload::run_upload;
use healthwatch::presentation::tui::app::run_tui;

fn print_banner() {
    println!("{}", "━".repeat(40).cyan());
    println!("{}", "  HEALTHWATCH · AI log diagnosis".bold().cyan());
    println!("{}", "━".repeat(40).cyan());
}

/// The TUI owns the terminal, so it only gets log output with `--verbose`.
fn setup_tracing(verbose: bool, interactive: bool) {
    let level = match (verbose, interactive) {
        (true, _) => "debug",
        (false, true) => "warn",
        (false, false) => "info",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if interactive && !verbose {
        builder.with_writer(std::io::sink).init();
    } else {
        builder.with_writer(std::io::stderr).init();
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<AppConfig> {
    match cli.config {
        Some(ref path) => {
            let mut config = AppConfig::load_from(path)?;
            config.apply_env_override(std::env::var(API_URL_ENV).ok());
            Ok(config)
        }
        None => AppConfig::load(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let interactive = matches!(cli.command, None | Some(Commands::Watch { .. }));

    setup_tracing(cli.verbose, interactive);

    let config = load_config(&cli)?;
    let interval = cli
        .command
        .as_ref()
        .and_then(Commands::interval_override)
        .map_or_else(|| config.polling.interval(), |secs| Duration::from_secs(secs.max(1)));

    // Manual DI: main.rs is the only place that knows concrete types
    let client = Arc::new(HttpAnalysisClient::new(
        &config.service.base_url,
        config.service.timeout(),
    )?);
    tracing::debug!("Analysis service: {}", client.analyze_url());
    let analyzer: Arc<dyn LogAnalyzer> = Arc::clone(&client) as Arc<dyn LogAnalyzer>;

    // Toasts inside the TUI, terminal lines everywhere else
    let toasts = Arc::new(ToastNotifier::new());
    let mut notifiers: Vec<Arc<dyn Notifier>> = Vec::new();
    if interactive {
        notifiers.push(Arc::clone(&toasts) as Arc<dyn Notifier>);
    } else if config.notifications.terminal {
        notifiers.push(Arc::new(TerminalNotifier::new()));
    }
    let notifier = Arc::new(CompositeNotifier::new(notifiers));

    let log_source = create_log_source(&config.logs, Arc::clone(&client));
    let controller = Arc::new(DashboardController::new(
        Arc::clone(&analyzer),
        log_source,
        notifier,
    ));

    match cli.command {
        Some(Commands::Watch { .. }) | None => {
            let history = create_history_source(&config.history);
            let handle = PollScheduler::start(Arc::clone(&controller), interval);
            let result = tokio::task::block_in_place(|| {
                run_tui(&controller, &handle, &toasts, history.as_ref())
            });
            handle.stop().await;
            result?;
        }
        Some(Commands::Daemon { .. }) => {
            print_banner();
            run_daemon(controller, interval).await?;
        }
        Some(Commands::Check { json }) => {
            run_check(&controller, json).await?;
        }
        Some(Commands::History { severity, json }) => {
            let history = create_history_source(&config.history);
            run_history(history.as_ref(), severity, json)?;
        }
        Some(Commands::Upload { ref file, json }) => {
            let relay = UploadRelay::new(analyzer);
            run_upload(&relay, file, json).await?;
        }
    }

    Ok(())
}
