//! Shared components for CLI commands
//!
//! This module contains common types, utilities, and functions used across
//! multiple CLI command implementations.

use crate::Result;
use crate::app::services::worksheet_parser::ParseStats;
use chrono::{DateTime, Utc};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::path::PathBuf;
use tracing::debug;

/// Summary of a load or check run, reported to the user at exit
#[derive(Debug, Clone, Serialize)]
pub struct LoadSummary {
    /// Worksheet the measurements were read from
    pub input_path: PathBuf,

    /// Database that was written; absent for check runs
    pub database_path: Option<PathBuf>,

    /// Rows inserted into the measurement table; zero for check runs
    pub measurements_written: usize,

    /// Parsing statistics, including any incomplete blocks
    pub parse: ParseStats,

    /// Wall-clock duration of the run in seconds
    pub elapsed_secs: f64,

    /// UTC timestamp of completion
    pub completed_at: DateTime<Utc>,
}

impl LoadSummary {
    /// True when every block filled its quota and no record failed to decode
    pub fn is_clean(&self) -> bool {
        self.parse.is_complete() && self.parse.record_errors == 0
    }
}

/// Set up structured logging for a command
///
/// `RUST_LOG` in the environment wins over the CLI-derived level, so a
/// targeted filter can always be applied without touching the flags.
pub fn setup_logging(log_level: &str, quiet: bool) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    // Create filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("flagella_loader={}", log_level)));

    // Set up subscriber based on output format preference
    if quiet {
        // Minimal logging for quiet mode
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        // Standard logging with timestamps
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Create a simple spinner for indeterminate operations
pub fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

/// Print a summary in human-readable form
pub fn print_summary_human(title: &str, summary: &LoadSummary) {
    println!("\n{}", title.bright_green().bold());
    println!(
        "  {} {}",
        "Worksheet:".bright_cyan(),
        summary.input_path.display()
    );
    if let Some(database_path) = &summary.database_path {
        println!(
            "  {} {}",
            "Database:".bright_cyan(),
            database_path.display()
        );
    }
    println!(
        "  {} {}",
        "Lines read:".bright_cyan(),
        summary.parse.lines_read
    );
    println!(
        "  {} {}",
        "Rows accepted:".bright_cyan(),
        summary.parse.rows_accepted
    );
    println!(
        "  {} {}",
        "Rows discarded:".bright_cyan(),
        summary.parse.rows_discarded
    );
    println!(
        "  {} {}",
        "Measurements parsed:".bright_cyan(),
        summary
            .parse
            .measurements_emitted
            .to_string()
            .bright_white()
            .bold()
    );
    if summary.database_path.is_some() {
        println!(
            "  {} {}",
            "Measurements written:".bright_cyan(),
            summary
                .measurements_written
                .to_string()
                .bright_white()
                .bold()
        );
    }
    println!(
        "  {} {:.2}s",
        "Time elapsed:".bright_cyan(),
        summary.elapsed_secs
    );

    if summary.parse.record_errors > 0 {
        println!(
            "  {} {}",
            "Undecodable records:".bright_red(),
            summary.parse.record_errors.to_string().bright_red().bold()
        );
    }

    if !summary.parse.shortfalls.is_empty() {
        println!(
            "\n{} ({} rows missing)",
            "Incomplete blocks".bright_yellow().bold(),
            summary.parse.rows_missing()
        );
        for shortfall in &summary.parse.shortfalls {
            println!("  {} {}", "•".bright_yellow(), shortfall);
        }
    }

    println!();
}

/// Print a summary as pretty JSON for scripting
pub fn print_summary_json(summary: &LoadSummary) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(summary)?);
    Ok(())
}
