//! SQLite persistence for flagella measurements
//!
//! This module writes worksheet-derived measurement records to a SQLite
//! database. Each load drops and recreates the measurement table, then inserts
//! every record inside a single transaction so the database never exposes a
//! half-written table.
//!
//! # Architecture
//!
//! - [`schema`] - DDL constants and the drop-and-recreate lifecycle
//! - [`writer`] - Core SqliteWriter implementation
//!
//! # Basic Usage
//!
//! ```rust
//! use std::path::Path;
//! use flagella_loader::app::services::sqlite_writer::SqliteWriter;
//! use flagella_loader::Measurement;
//!
//! # fn example(measurements: Vec<Measurement>) -> flagella_loader::Result<()> {
//! let writer = SqliteWriter::open(Path::new("flagella_data.sqlite"))?;
//! writer.initialize()?;
//! let written = writer.write_measurements(&measurements)?;
//!
//! println!("Wrote {} measurements", written);
//! # Ok(())
//! # }
//! ```

pub mod schema;
pub mod writer;

#[cfg(test)]
pub mod tests;

// Re-export main types for convenient access
pub use schema::{CREATE_MEASUREMENTS_TABLE, DROP_MEASUREMENTS_TABLE};
pub use writer::SqliteWriter;
