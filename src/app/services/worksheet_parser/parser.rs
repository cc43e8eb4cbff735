//! Core worksheet parser implementation
//!
//! This module provides the main parser orchestration: reading the file,
//! locating each week's section by its marker row, and driving the block
//! reader and record expander over the fixed block layout.

use std::path::Path;

use csv::StringRecord;
use tracing::{debug, info};

use super::block_reader::read_block;
use super::row_parser::record_contains_marker;
use super::stats::{ParseResult, ParseStats};
use crate::app::models::{Measurement, Week};
use crate::app::services::record_expander::expand_reading;
use crate::{Error, Result};

/// Parser for the two-week flagella worksheet
///
/// The parser makes a single forward pass over the document. Everything
/// below the I/O layer degrades gracefully: malformed cells become nulls,
/// noise lines are discarded, and blocks that run short are reported as
/// warnings rather than errors.
#[derive(Debug, Default)]
pub struct WorksheetParser;

impl WorksheetParser {
    /// Create a new parser
    pub fn new() -> Self {
        Self
    }

    /// Parse a worksheet CSV file and return measurements with statistics
    pub fn parse_file(&self, file_path: &Path) -> Result<ParseResult> {
        info!("Parsing worksheet: {}", file_path.display());

        let content = std::fs::read_to_string(file_path).map_err(|e| {
            Error::io(
                format!("Failed to read worksheet {}", file_path.display()),
                e,
            )
        })?;

        self.parse_content(&content)
    }

    /// Parse worksheet content from a string
    ///
    /// The record iterator is the single shared cursor over the document:
    /// the marker scan leaves it positioned at the first row after the
    /// marker, and each block consumes rows from where the previous one
    /// stopped.
    pub fn parse_content(&self, content: &str) -> Result<ParseResult> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(content.as_bytes());
        let mut records = reader.records();

        let mut stats = ParseStats::new();
        let mut measurements = Vec::new();

        for week in Week::both() {
            if !seek_section(&mut records, week.marker(), &mut stats) {
                debug!(
                    "Marker '{}' not found; week {} blocks will report shortfalls",
                    week.marker(),
                    week
                );
            }
            parse_week(week, &mut records, &mut measurements, &mut stats);
        }

        stats.measurements_emitted = measurements.len();
        info!(
            "Parsed {} measurements from {} accepted rows ({} blocks short)",
            stats.measurements_emitted,
            stats.rows_accepted,
            stats.shortfalls.len()
        );

        Ok(ParseResult {
            measurements,
            stats,
        })
    }
}

/// Run one week's fixed block layout against the stream
///
/// Blocks run in declared order; within a row the left side expands before
/// the right, so measurement order matches the worksheet.
fn parse_week<I>(
    week: Week,
    records: &mut I,
    measurements: &mut Vec<Measurement>,
    stats: &mut ParseStats,
) where
    I: Iterator<Item = csv::Result<StringRecord>>,
{
    for spec in week.blocks() {
        let rows = read_block(records, week, spec, stats);

        for row in &rows {
            if let (Some(label), Some(reading)) = (spec.left, row.left.as_ref()) {
                measurements.extend(expand_reading(week, label, reading));
            }
            if let (Some(label), Some(reading)) = (spec.right, row.right.as_ref()) {
                measurements.extend(expand_reading(week, label, reading));
            }
        }
    }
}

/// Advance the stream cursor past the row containing the marker
///
/// Returns false when the stream exhausts without finding the marker; the
/// cursor is then spent and the caller's remaining blocks read nothing.
fn seek_section<I>(records: &mut I, marker: &str, stats: &mut ParseStats) -> bool
where
    I: Iterator<Item = csv::Result<StringRecord>>,
{
    for result in records {
        stats.lines_read += 1;
        match result {
            Ok(record) => {
                if record_contains_marker(&record, marker) {
                    return true;
                }
            }
            Err(e) => {
                stats.record_errors += 1;
                debug!("Skipping unreadable record while scanning for marker: {}", e);
            }
        }
    }
    false
}
