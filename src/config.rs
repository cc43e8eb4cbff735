//! Configuration management and validation.
//!
//! Provides the resolved run settings for a load: where the worksheet CSV
//! lives, where the SQLite database goes, and presentation toggles. Defaults
//! mirror the legacy filenames so running the tool in a lab data directory
//! with no arguments keeps working.

use crate::{Error, Result, constants};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Global configuration for a loader run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the worksheet CSV to parse
    pub input_path: PathBuf,

    /// Path of the SQLite database to create
    pub database_path: PathBuf,

    /// Show progress output while parsing and writing
    pub show_progress: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(constants::DEFAULT_INPUT_FILENAME),
            database_path: PathBuf::from(constants::DEFAULT_DATABASE_FILENAME),
            show_progress: true,
        }
    }
}

impl Config {
    /// Create configuration with a custom input path
    pub fn with_input_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.input_path = path.into();
        self
    }

    /// Create configuration with a custom database path
    pub fn with_database_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.database_path = path.into();
        self
    }

    /// Disable progress output
    pub fn without_progress(mut self) -> Self {
        self.show_progress = false;
        self
    }

    /// Validate that the configured paths are usable
    pub fn validate(&self) -> Result<()> {
        if !self.input_path.exists() {
            return Err(Error::configuration(format!(
                "Input file does not exist: {}",
                self.input_path.display()
            )));
        }

        if !self.input_path.is_file() {
            return Err(Error::configuration(format!(
                "Input path is not a file: {}",
                self.input_path.display()
            )));
        }

        if let Some(parent) = nonempty_parent(&self.database_path) {
            if !parent.exists() {
                return Err(Error::configuration(format!(
                    "Database directory does not exist: {}",
                    parent.display()
                )));
            }
        }

        Ok(())
    }
}

/// Parent directory of a path, ignoring the empty parent of bare filenames
fn nonempty_parent(path: &Path) -> Option<&Path> {
    path.parent().filter(|p| !p.as_os_str().is_empty())
}
