use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::domain::value_objects::severity_tag::SeverityTag;

/// healthwatch: AI log health dashboard
///
/// Sends log excerpts to an analysis service on a fixed cadence and shows
/// the resulting diagnosis, severity and history.
#[derive(Parser, Debug)]
#[command(name = "healthwatch")]
#[command(version, about, long_about)]
pub struct Cli {
    /// Subcommand to execute (defaults to the interactive dashboard)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to custom config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Launch the interactive dashboard
    #[command(alias = "w")]
    Watch {
        /// Refresh interval in seconds (default: config)
        #[arg(short, long)]
        interval: Option<u64>,
    },

    /// Poll the analysis service headless, logging each outcome
    #[command(alias = "d")]
    Daemon {
        /// Refresh interval in seconds (default: config)
        #[arg(short, long)]
        interval: Option<u64>,
    },

    /// Run a single analysis cycle and print the diagnosis
    #[command(alias = "c")]
    Check {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List past analyses
    #[command(alias = "h")]
    History {
        /// Severity filter: all, critical, high, medium, low
        #[arg(short, long, default_value = "all")]
        severity: SeverityTag,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Send a log file to the analysis service
    #[command(alias = "u")]
    Upload {
        /// Log file to analyze
        file: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Commands {
    /// Interval override shared by the polling commands.
    #[must_use]
    pub const fn interval_override(&self) -> Option<u64> {
        match self {
            Self::Watch { interval } | Self::Daemon { interval } => *interval,
            _ => None,
        }
    }
}
