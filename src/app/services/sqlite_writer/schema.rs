//! SQLite schema management for flagella measurements
//!
//! This module owns the DDL for the measurement table and the drop-and-recreate
//! lifecycle used on every load. The table layout mirrors the worksheet-derived
//! records one column per field, with nullable columns wherever a measurement
//! may legitimately be absent.

use crate::constants::MEASUREMENTS_TABLE;
use crate::{Error, Result};

use rusqlite::Connection;
use tracing::debug;

/// DDL for the measurement table.
///
/// Column notes:
/// - `researcher` is nullable: rows whose condition label maps to no known
///   researcher are stored with a NULL assignment rather than rejected.
/// - `density` is nullable for the same reason (unknown condition labels).
/// - `length_um` is nullable: a replicate cell left empty in the worksheet is
///   a real observation gap and must survive the round trip to SQL.
pub const CREATE_MEASUREMENTS_TABLE: &str = "
CREATE TABLE flagella_measurements (
    measurement_id INTEGER PRIMARY KEY AUTOINCREMENT,
    week           INTEGER NOT NULL,
    researcher     INTEGER,
    condition      TEXT NOT NULL,
    density        REAL,
    time_min       REAL NOT NULL,
    replicate      INTEGER NOT NULL,
    length_um      REAL
);
";

/// Drop statement paired with [`CREATE_MEASUREMENTS_TABLE`].
pub const DROP_MEASUREMENTS_TABLE: &str = "DROP TABLE IF EXISTS flagella_measurements;";

/// Reset the measurement table to an empty, freshly created state.
///
/// Every load replaces the previous contents wholesale, so the table is
/// dropped and recreated rather than truncated. Running this against a
/// connection with no existing table is fine.
pub fn initialize_schema(conn: &Connection) -> Result<()> {
    debug!("Recreating table '{}'", MEASUREMENTS_TABLE);

    conn.execute_batch(DROP_MEASUREMENTS_TABLE)
        .map_err(|e| Error::database(format!("Failed to drop table '{MEASUREMENTS_TABLE}'"), e))?;
    conn.execute_batch(CREATE_MEASUREMENTS_TABLE)
        .map_err(|e| {
            Error::database(format!("Failed to create table '{MEASUREMENTS_TABLE}'"), e)
        })?;

    Ok(())
}

/// Check whether the measurement table exists on the given connection.
pub fn table_exists(conn: &Connection) -> Result<bool> {
    let count: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
            [MEASUREMENTS_TABLE],
            |row| row.get(0),
        )
        .map_err(|e| Error::database("Failed to query sqlite_master".to_string(), e))?;

    Ok(count > 0)
}
