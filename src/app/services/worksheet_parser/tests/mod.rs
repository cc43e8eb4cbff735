//! Test utilities for worksheet parser testing
//!
//! This module provides helpers for building CSV records, record streams
//! and complete worksheet documents used across the test modules.

use csv::StringRecord;

use crate::constants::{REPLICATE_COUNT, RIGHT_SIDE_OFFSET};


/// Build a record from a slice of cells
pub fn record_from(cells: &[&str]) -> StringRecord {
    StringRecord::from(cells.to_vec())
}

/// Build a record with a left side at column 0 and a right side at the
/// fixed right offset, padding the gap with empty cells
pub fn padded_row(left: &[&str], right: &[&str]) -> StringRecord {
    let mut cells: Vec<String> = left.iter().map(|s| s.to_string()).collect();
    while cells.len() < RIGHT_SIDE_OFFSET {
        cells.push(String::new());
    }
    cells.extend(right.iter().map(|s| s.to_string()));
    StringRecord::from(cells)
}

/// Turn records into the stream shape the block reader consumes
pub fn record_stream(rows: Vec<StringRecord>) -> std::vec::IntoIter<csv::Result<StringRecord>> {
    rows.into_iter()
        .map(Ok)
        .collect::<Vec<csv::Result<StringRecord>>>()
        .into_iter()
}

/// Build a full paired data record from formatted replicate cells
pub fn paired_record(
    left_time: &str,
    left: Vec<String>,
    right_time: &str,
    right: Vec<String>,
) -> StringRecord {
    let mut cells = vec![left_time.to_string()];
    cells.extend(left);
    while cells.len() < RIGHT_SIDE_OFFSET {
        cells.push(String::new());
    }
    cells.push(right_time.to_string());
    cells.extend(right);
    StringRecord::from(cells)
}

/// Replicate cells for one side of a data row
///
/// Cell at 1-based position `r` holds `r + time/100 + bump`, so tests can
/// predict any value from its block, row and position.
pub fn replicate_cells(time: f64, bump: f64) -> Vec<String> {
    (1..=REPLICATE_COUNT)
        .map(|r| format!("{:.2}", r as f64 + time / 100.0 + bump))
        .collect()
}

/// Complete two-week worksheet with full blocks and realistic clutter
///
/// Layout per week: marker row, a column-header line (noise), two paired
/// 9-row blocks separated by a blank line, then the 2-row NDF control
/// block. Left cells follow [`replicate_cells`] with bump 0.0, right cells
/// with bump 0.5.
pub fn create_test_worksheet() -> String {
    let mut lines: Vec<String> = vec![
        "Chlamydomonas flagella regeneration assay,,".to_string(),
        "Recorded over two sessions,,".to_string(),
        ",,".to_string(),
        "Week One Flagella,,".to_string(),
    ];
    push_week_section(&mut lines);

    lines.push(",,,,".to_string());
    lines.push("WEEK TWO FLAGELLA,,".to_string());
    push_week_section(&mut lines);

    lines.join("\n")
}

fn push_week_section(lines: &mut Vec<String>) {
    lines.push("Time (min),1,2,3,4,5,6,7,8,9,10,,,Time (min),1,2,3,4,5,6,7,8,9,10".to_string());
    push_paired_block(lines);
    lines.push(",,,,".to_string());
    push_paired_block(lines);
    push_control_block(lines);
}

fn push_paired_block(lines: &mut Vec<String>) {
    for i in 0..9 {
        let time = (i * 10) as f64;
        let mut cells = vec![format!("{}", time)];
        cells.extend(replicate_cells(time, 0.0));
        while cells.len() < RIGHT_SIDE_OFFSET {
            cells.push(String::new());
        }
        cells.push(format!("{}", time));
        cells.extend(replicate_cells(time, 0.5));
        lines.push(cells.join(","));
    }
}

fn push_control_block(lines: &mut Vec<String>) {
    for time in [0.0, 90.0] {
        let mut cells = vec![format!("{}", time)];
        cells.extend(replicate_cells(time, 0.0));
        lines.push(cells.join(","));
    }
}
