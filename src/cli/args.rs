//! Command-line argument definitions for the flagella loader
//!
//! This module defines the complete CLI interface using the clap derive API.

use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the flagella measurement loader
///
/// Loads flagella-length measurement worksheets exported from the lab
/// spreadsheet into a SQLite database ready for analysis.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "flagella-loader",
    version,
    about = "Load flagella measurement worksheets into SQLite",
    long_about = "Reads a flagella-length measurement worksheet exported as CSV, locates the \
                  weekly experiment sections, collects each condition block's timepoint rows, \
                  and writes one database row per replicate measurement. The output table is \
                  rebuilt on every load, so the database always reflects exactly one worksheet."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the loader
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Load a worksheet into a SQLite database (default workflow)
    Load(LoadArgs),
    /// Parse a worksheet and report what a load would store, without writing
    Check(CheckArgs),
}

/// Arguments for the load command (worksheet to SQLite)
#[derive(Debug, Clone, Parser)]
pub struct LoadArgs {
    /// Input path to the measurement worksheet
    ///
    /// A CSV export of the lab spreadsheet containing the week one and week
    /// two experiment sections. Defaults to flagella_data.csv in the current
    /// directory.
    #[arg(
        short = 'i',
        long = "input",
        value_name = "FILE",
        help = "Input path to the measurement worksheet CSV"
    )]
    pub input_path: Option<PathBuf>,

    /// Output path for the SQLite database
    ///
    /// Created if it does not exist. Defaults to flagella_data.sqlite in the
    /// current directory.
    #[arg(
        short = 'o',
        long = "database",
        value_name = "FILE",
        help = "Output path for the SQLite database"
    )]
    pub database_path: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors and critical messages. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,

    /// Output format for the run summary
    #[arg(
        short = 'f',
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for the run summary"
    )]
    pub output_format: OutputFormat,
}

/// Arguments for the check command (parse without writing)
#[derive(Debug, Clone, Parser)]
pub struct CheckArgs {
    /// Input path to the measurement worksheet
    ///
    /// Defaults to flagella_data.csv in the current directory.
    #[arg(
        short = 'i',
        long = "input",
        value_name = "FILE",
        help = "Input path to the measurement worksheet CSV"
    )]
    pub input_path: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,

    /// Output format for the check report
    #[arg(
        short = 'f',
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for the check report"
    )]
    pub output_format: OutputFormat,
}

/// Output format options for machine-readable results
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

impl LoadArgs {
    /// Validate the load command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        // Validate input path exists (only if explicitly provided)
        if let Some(input_path) = &self.input_path {
            if !input_path.exists() {
                return Err(Error::configuration(format!(
                    "Input worksheet does not exist: {}",
                    input_path.display()
                )));
            }

            if !input_path.is_file() {
                return Err(Error::configuration(format!(
                    "Input path is not a file: {}",
                    input_path.display()
                )));
            }
        }

        // Validate database directory exists if an explicit path was given
        if let Some(database_path) = &self.database_path {
            if let Some(parent) = database_path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    return Err(Error::configuration(format!(
                        "Database directory does not exist: {}",
                        parent.display()
                    )));
                }
            }
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show progress bars (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}

impl CheckArgs {
    /// Validate the check command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if let Some(input_path) = &self.input_path {
            if !input_path.exists() {
                return Err(Error::configuration(format!(
                    "Input worksheet does not exist: {}",
                    input_path.display()
                )));
            }

            if !input_path.is_file() {
                return Err(Error::configuration(format!(
                    "Input path is not a file: {}",
                    input_path.display()
                )));
            }
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}

impl Default for LoadArgs {
    fn default() -> Self {
        Self {
            input_path: None,
            database_path: None,
            verbose: 0,
            quiet: false,
            output_format: OutputFormat::Human,
        }
    }
}

impl Default for CheckArgs {
    fn default() -> Self {
        Self {
            input_path: None,
            verbose: 0,
            quiet: false,
            output_format: OutputFormat::Human,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_args_validation() {
        let temp_dir = TempDir::new().unwrap();
        let worksheet = temp_dir.path().join("data.csv");
        fs::write(&worksheet, "WEEK ONE FLAGELLA\n").unwrap();

        let args = LoadArgs {
            input_path: Some(worksheet.clone()),
            database_path: Some(temp_dir.path().join("out.sqlite")),
            ..Default::default()
        };
        assert!(args.validate().is_ok());

        // Nonexistent input path
        let mut invalid_args = args.clone();
        invalid_args.input_path = Some(PathBuf::from("/nonexistent/data.csv"));
        assert!(invalid_args.validate().is_err());

        // Input path is a directory
        let mut invalid_args = args.clone();
        invalid_args.input_path = Some(temp_dir.path().to_path_buf());
        assert!(invalid_args.validate().is_err());

        // Database directory missing
        let mut invalid_args = args.clone();
        invalid_args.database_path = Some(temp_dir.path().join("missing").join("out.sqlite"));
        assert!(invalid_args.validate().is_err());

        // Bare database filename has no directory to check
        let mut bare_args = args;
        bare_args.database_path = Some(PathBuf::from("out.sqlite"));
        assert!(bare_args.validate().is_ok());
    }

    #[test]
    fn test_load_args_defaults_pass_validation() {
        // Both paths default at the config layer; no args means nothing to check
        let args = LoadArgs::default();
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_check_args_validation() {
        let temp_dir = TempDir::new().unwrap();
        let worksheet = temp_dir.path().join("data.csv");
        fs::write(&worksheet, "WEEK ONE FLAGELLA\n").unwrap();

        let args = CheckArgs {
            input_path: Some(worksheet),
            ..Default::default()
        };
        assert!(args.validate().is_ok());

        let invalid_args = CheckArgs {
            input_path: Some(PathBuf::from("/nonexistent/data.csv")),
            ..Default::default()
        };
        assert!(invalid_args.validate().is_err());
    }

    #[test]
    fn test_load_log_level() {
        let mut args = LoadArgs::default();

        // Default level
        assert_eq!(args.get_log_level(), "warn");

        // Verbose levels
        args.verbose = 1;
        assert_eq!(args.get_log_level(), "info");

        args.verbose = 2;
        assert_eq!(args.get_log_level(), "debug");

        args.verbose = 3;
        assert_eq!(args.get_log_level(), "trace");

        // Quiet mode
        args.quiet = true;
        assert_eq!(args.get_log_level(), "error");
    }

    #[test]
    fn test_check_log_level() {
        let mut args = CheckArgs::default();

        assert_eq!(args.get_log_level(), "warn");

        args.verbose = 2;
        assert_eq!(args.get_log_level(), "debug");

        args.quiet = true;
        assert_eq!(args.get_log_level(), "error");
    }

    #[test]
    fn test_show_progress() {
        let mut args = LoadArgs::default();
        assert!(args.show_progress());

        args.quiet = true;
        assert!(!args.show_progress());
    }

    #[test]
    fn test_subcommand_parsing() {
        let args = Args::try_parse_from(["flagella-loader", "load", "-i", "week.csv"]).unwrap();
        match args.command {
            Some(Commands::Load(load_args)) => {
                assert_eq!(load_args.input_path, Some(PathBuf::from("week.csv")));
                assert_eq!(load_args.database_path, None);
            }
            other => panic!("Expected load command, got {other:?}"),
        }

        let args = Args::try_parse_from(["flagella-loader"]).unwrap();
        assert!(args.command.is_none());
    }
}
