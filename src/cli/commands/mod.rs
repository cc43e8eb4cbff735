//! Command implementations for the flagella loader CLI
//!
//! This module contains the main command execution logic, progress reporting,
//! and error handling for the CLI interface. Each command is implemented in
//! its own module for better organization and maintainability.

pub mod check;
pub mod load;
pub mod shared;

// Re-export the summary type shared by all commands
pub use shared::LoadSummary;

use crate::cli::args::{Args, Commands};
use crate::{Error, Result};

/// Main command runner for the flagella loader
///
/// This function dispatches to the appropriate subcommand handler based on CLI
/// args. Each command is implemented in its own module:
/// - `load`: worksheet parsing with SQLite output
/// - `check`: worksheet parsing and reporting only
pub fn run(args: Args) -> Result<LoadSummary> {
    match args.command {
        Some(Commands::Load(load_args)) => load::run_load(load_args),
        Some(Commands::Check(check_args)) => check::run_check(check_args),
        None => Err(Error::configuration(
            "No command specified; run with --help for usage".to_string(),
        )),
    }
}
