//! Core SQLite writer implementation for flagella measurements
//!
//! This module contains the main SqliteWriter struct and its implementation
//! for transactional batch insertion of worksheet-derived measurements.

use crate::app::models::Measurement;
use crate::app::services::sqlite_writer::schema::{initialize_schema, table_exists};
use crate::constants::MEASUREMENTS_TABLE;
use crate::{Error, Result};

use rusqlite::{Connection, params};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// SQLite writer for worksheet-derived measurement records
///
/// The writer owns its connection and performs all inserts inside a single
/// transaction, so a failed write never exposes a half-written table: the
/// rows either all land or the table stays as `initialize()` left it.
pub struct SqliteWriter {
    /// Connection to the target database
    conn: Connection,
    /// Path the connection was opened against, if file-backed
    database_path: Option<PathBuf>,
}

impl SqliteWriter {
    /// Open a writer against a database file, creating the file if needed.
    pub fn open(database_path: &Path) -> Result<Self> {
        info!("Opening SQLite database at {}", database_path.display());

        let conn = Connection::open(database_path).map_err(|e| {
            Error::database(
                format!("Failed to open database '{}'", database_path.display()),
                e,
            )
        })?;

        Ok(Self {
            conn,
            database_path: Some(database_path.to_path_buf()),
        })
    }

    /// Open a writer against an in-memory database.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .map_err(|e| Error::database("Failed to open in-memory database".to_string(), e))?;

        Ok(Self {
            conn,
            database_path: None,
        })
    }

    /// Path of the backing database file, if any.
    pub fn database_path(&self) -> Option<&Path> {
        self.database_path.as_deref()
    }

    /// Drop and recreate the measurement table.
    ///
    /// Call this once before [`write_measurements`](Self::write_measurements);
    /// each load replaces whatever the table held before.
    pub fn initialize(&self) -> Result<()> {
        initialize_schema(&self.conn)
    }

    /// Insert a batch of measurements inside one transaction.
    ///
    /// Records are inserted in slice order, so `measurement_id` reflects the
    /// order measurements were produced from the worksheet. Returns the number
    /// of rows inserted.
    pub fn write_measurements(&self, measurements: &[Measurement]) -> Result<usize> {
        if !table_exists(&self.conn)? {
            return Err(Error::configuration(format!(
                "Table '{MEASUREMENTS_TABLE}' does not exist; call initialize() before writing"
            )));
        }

        debug!("Inserting {} measurements", measurements.len());

        let tx = self
            .conn
            .unchecked_transaction()
            .map_err(|e| Error::database("Failed to begin transaction".to_string(), e))?;

        let mut inserted = 0usize;
        {
            let mut stmt = tx
                .prepare(
                    "INSERT INTO flagella_measurements
                         (week, researcher, condition, density, time_min, replicate, length_um)
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                )
                .map_err(|e| Error::database("Failed to prepare insert".to_string(), e))?;

            for measurement in measurements {
                inserted += stmt
                    .execute(params![
                        measurement.week.number(),
                        measurement.researcher,
                        measurement.condition,
                        measurement.density,
                        measurement.time_min,
                        measurement.replicate,
                        measurement.length_um,
                    ])
                    .map_err(|e| Error::database("Failed to insert measurement".to_string(), e))?;
            }
        }

        tx.commit()
            .map_err(|e| Error::database("Failed to commit transaction".to_string(), e))?;

        info!(
            "Committed {} measurements to '{}'",
            inserted, MEASUREMENTS_TABLE
        );

        Ok(inserted)
    }

    /// Count the rows currently stored in the measurement table.
    pub fn stored_count(&self) -> Result<i64> {
        self.conn
            .query_row(
                "SELECT COUNT(*) FROM flagella_measurements",
                [],
                |row| row.get(0),
            )
            .map_err(|e| Error::database(format!("Failed to count rows in '{MEASUREMENTS_TABLE}'"), e))
    }
}

impl std::fmt::Debug for SqliteWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteWriter")
            .field("database_path", &self.database_path)
            .finish_non_exhaustive()
    }
}
