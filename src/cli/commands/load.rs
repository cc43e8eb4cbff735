//! Load command implementation for the flagella loader
//!
//! This module contains the complete load workflow: configuration resolution,
//! worksheet parsing, SQLite writing and report generation.

use super::shared::{
    LoadSummary, create_spinner, print_summary_human, print_summary_json, setup_logging,
};
use crate::Result;
use crate::app::services::sqlite_writer::SqliteWriter;
use crate::app::services::worksheet_parser::WorksheetParser;
use crate::cli::args::{LoadArgs, OutputFormat};
use crate::config::Config;
use chrono::Utc;
use std::time::Instant;
use tracing::{debug, info};

/// Load command runner
///
/// This function orchestrates the entire load workflow:
/// 1. Set up logging and resolve configuration
/// 2. Parse the worksheet into measurement records
/// 3. Rebuild the measurement table and write every record
/// 4. Report summary statistics
pub fn run_load(args: LoadArgs) -> Result<LoadSummary> {
    let start_time = Instant::now();

    // Set up logging
    setup_logging(args.get_log_level(), args.quiet)?;

    info!("Starting worksheet load");
    debug!("Command line arguments: {:?}", args);

    // Validate arguments
    args.validate()?;

    // Resolve configuration from defaults and CLI overrides
    let config = build_config(&args);
    debug!("Resolved configuration: {:?}", config);
    config.validate()?;

    // Parse the worksheet into measurement records
    let spinner = config
        .show_progress
        .then(|| create_spinner("Parsing worksheet..."));
    let parser = WorksheetParser::new();
    let parse_result = parser.parse_file(&config.input_path)?;
    if let Some(pb) = &spinner {
        pb.finish_and_clear();
    }

    info!(
        "Parsed {} measurements from {}",
        parse_result.measurements.len(),
        config.input_path.display()
    );

    // Rebuild the table and write everything in one transaction
    let spinner = config
        .show_progress
        .then(|| create_spinner("Writing measurements to SQLite..."));
    let writer = SqliteWriter::open(&config.database_path)?;
    writer.initialize()?;
    let measurements_written = writer.write_measurements(&parse_result.measurements)?;
    if let Some(pb) = &spinner {
        pb.finish_and_clear();
    }

    info!(
        "Load complete: {} measurements in {}",
        measurements_written,
        config.database_path.display()
    );

    let summary = LoadSummary {
        input_path: config.input_path.clone(),
        database_path: Some(config.database_path.clone()),
        measurements_written,
        parse: parse_result.stats,
        elapsed_secs: start_time.elapsed().as_secs_f64(),
        completed_at: Utc::now(),
    };

    generate_report(&args, &summary)?;

    Ok(summary)
}

/// Resolve the effective configuration from defaults and CLI overrides
fn build_config(args: &LoadArgs) -> Config {
    let mut config = Config::default();

    if let Some(input_path) = &args.input_path {
        config = config.with_input_path(input_path.clone());
    }
    if let Some(database_path) = &args.database_path {
        config = config.with_database_path(database_path.clone());
    }
    if !args.show_progress() {
        config = config.without_progress();
    }

    config
}

/// Generate the final load report
fn generate_report(args: &LoadArgs, summary: &LoadSummary) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            if !args.quiet {
                print_summary_human("Worksheet load complete", summary);
            }
            Ok(())
        }
        OutputFormat::Json => print_summary_json(summary),
    }
}
