//! Unit tests for the sqlite_writer module
//!
//! This module contains unit tests for schema management and the writer,
//! organized by logical functionality. All tests run against in-memory
//! databases.


// Common test utilities used across multiple test modules
use crate::app::models::{Measurement, Week};

/// Create a fully populated test measurement
pub fn create_test_measurement(replicate: i64) -> Measurement {
    Measurement {
        week: Week::One,
        researcher: Some(1),
        condition: "2C".to_string(),
        density: Some(5.58e6),
        time_min: 30.0,
        replicate,
        length_um: Some(4.0 + replicate as f64 * 0.1),
    }
}

/// Create a measurement with every nullable field absent
pub fn create_sparse_measurement() -> Measurement {
    Measurement {
        week: Week::Two,
        researcher: None,
        condition: "mystery".to_string(),
        density: None,
        time_min: 60.0,
        replicate: 3,
        length_um: None,
    }
}
