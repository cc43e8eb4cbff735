//! Block reading over the worksheet record stream
//!
//! A block is a run of data rows belonging to one labeled section of a
//! week. The reader pulls records off the shared stream cursor until the
//! block's expected row count is met or the stream runs out, skipping
//! blank lines and discarding rows where neither side parses.

use csv::StringRecord;
use tracing::{debug, warn};

use super::row_parser::{is_blank_record, parse_side};
use super::stats::{BlockShortfall, ParseStats};
use crate::app::models::{BlockRow, BlockSpec, Week};
use crate::constants::{LEFT_SIDE_OFFSET, RIGHT_SIDE_OFFSET};

/// Read one block's worth of rows from the record stream
///
/// Returns at most `spec.expected_rows` accepted rows. Blank lines and
/// noise lines (neither side parses) are consumed without counting toward
/// the quota. Exhausting the stream early is not an error: the shortfall
/// is logged as a warning, recorded in the stats, and whatever rows were
/// collected are returned.
pub fn read_block<I>(
    records: &mut I,
    week: Week,
    spec: &BlockSpec,
    stats: &mut ParseStats,
) -> Vec<BlockRow>
where
    I: Iterator<Item = csv::Result<StringRecord>>,
{
    let mut rows = Vec::with_capacity(spec.expected_rows);

    while rows.len() < spec.expected_rows {
        let result = match records.next() {
            Some(result) => result,
            None => break,
        };
        stats.lines_read += 1;

        let record = match result {
            Ok(record) => record,
            Err(e) => {
                stats.record_errors += 1;
                debug!("Skipping unreadable record in block {}: {}", spec, e);
                continue;
            }
        };

        if is_blank_record(&record) {
            stats.blank_lines += 1;
            continue;
        }

        let left = if spec.left.is_some() {
            parse_side(&record, LEFT_SIDE_OFFSET)
        } else {
            None
        };
        let right = if spec.right.is_some() {
            parse_side(&record, RIGHT_SIDE_OFFSET)
        } else {
            None
        };

        let row = BlockRow::new(left, right);
        if !row.has_reading() {
            stats.rows_discarded += 1;
            debug!("Discarding row with no parseable side in block {}", spec);
            continue;
        }

        rows.push(row);
        stats.rows_accepted += 1;
    }

    if rows.len() < spec.expected_rows {
        let shortfall = BlockShortfall::new(week, spec, rows.len());
        warn!("{}", shortfall);
        stats.shortfalls.push(shortfall);
    }

    rows
}
