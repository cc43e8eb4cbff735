//! Check command implementation for the flagella loader
//!
//! Parses a worksheet and reports everything a load would store, without
//! writing a database. Useful for verifying a fresh export before replacing
//! the shared analysis database.

use super::shared::{LoadSummary, print_summary_human, print_summary_json, setup_logging};
use crate::Result;
use crate::app::services::worksheet_parser::WorksheetParser;
use crate::cli::args::{CheckArgs, OutputFormat};
use crate::config::Config;
use chrono::Utc;
use std::time::Instant;
use tracing::{debug, info};

/// Check command runner
///
/// Runs the same parse as the load command and reports the statistics a load
/// would produce. No database is opened or written.
pub fn run_check(args: CheckArgs) -> Result<LoadSummary> {
    let start_time = Instant::now();

    // Set up logging
    setup_logging(args.get_log_level(), args.quiet)?;

    info!("Starting worksheet check");
    debug!("Command line arguments: {:?}", args);

    // Validate arguments
    args.validate()?;

    // Resolve the input path through the config layer
    let mut config = Config::default();
    if let Some(input_path) = &args.input_path {
        config = config.with_input_path(input_path.clone());
    }
    config.validate()?;

    // Parse the worksheet
    let parser = WorksheetParser::new();
    let parse_result = parser.parse_file(&config.input_path)?;

    info!(
        "Check complete: {} measurements would be written",
        parse_result.measurements.len()
    );

    let summary = LoadSummary {
        input_path: config.input_path.clone(),
        database_path: None,
        measurements_written: 0,
        parse: parse_result.stats,
        elapsed_secs: start_time.elapsed().as_secs_f64(),
        completed_at: Utc::now(),
    };

    generate_report(&args, &summary)?;

    Ok(summary)
}

/// Generate the final check report
fn generate_report(args: &CheckArgs, summary: &LoadSummary) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            if !args.quiet {
                print_summary_human("Worksheet check complete", summary);
            }
            Ok(())
        }
        OutputFormat::Json => print_summary_json(summary),
    }
}
