//! Row-level parsing utilities for worksheet records
//!
//! This module provides the helpers that decide what a single CSV record
//! holds: a side reading at a given offset, a blank spacer line, or a
//! section marker.

use csv::StringRecord;

use crate::app::models::SideReading;
use crate::constants::REPLICATE_COUNT;

/// Parse one side of a worksheet row starting at the given column offset
///
/// The cell at `start_offset` must hold the time in minutes; the following
/// ten cells hold replicate lengths. Returns `None` when the offset is
/// beyond the record or the time cell is empty or non-numeric. Replicate
/// cells fail soft: missing, empty or non-numeric cells become `None`
/// entries at their position.
pub fn parse_side(record: &StringRecord, start_offset: usize) -> Option<SideReading> {
    let time_str = record.get(start_offset)?.trim();
    if time_str.is_empty() {
        return None;
    }
    let time_min: f64 = time_str.parse().ok()?;

    let mut replicates = Vec::with_capacity(REPLICATE_COUNT);
    for i in 1..=REPLICATE_COUNT {
        replicates.push(parse_cell(record, start_offset + i));
    }

    Some(SideReading::new(time_min, replicates))
}

/// Parse a single cell as a float, treating absent and empty cells as `None`
pub fn parse_cell(record: &StringRecord, index: usize) -> Option<f64> {
    record
        .get(index)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse().ok())
}

/// Check whether every cell in a record is empty or whitespace
pub fn is_blank_record(record: &StringRecord) -> bool {
    record.iter().all(|cell| cell.trim().is_empty())
}

/// Check whether a record contains a section marker
///
/// Cells are uppercased and comma-joined before the search, so the marker
/// matches regardless of case but not when it is split across cells.
pub fn record_contains_marker(record: &StringRecord, marker: &str) -> bool {
    let joined = record
        .iter()
        .map(|cell| cell.to_uppercase())
        .collect::<Vec<_>>()
        .join(",");
    joined.contains(marker)
}
