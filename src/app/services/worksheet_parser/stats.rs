//! Parsing statistics and result structures for worksheet processing
//!
//! This module provides types for tracking how the parse went: how many
//! rows were read, accepted and discarded, and which blocks came up short
//! of their expected row counts.

use crate::app::models::{BlockSpec, Measurement, Week};
use std::fmt;

/// Parsing result with measurements and statistics
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Measurement records in worksheet order, ready for the sink
    pub measurements: Vec<Measurement>,

    /// Parsing statistics
    pub stats: ParseStats,
}

/// Statistics for one worksheet parse
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ParseStats {
    /// Total number of CSV records pulled from the stream
    pub lines_read: usize,

    /// Records where every cell was empty or whitespace
    pub blank_lines: usize,

    /// Non-blank records where neither side parsed (noise)
    pub rows_discarded: usize,

    /// Rows accepted into a block (at least one side parsed)
    pub rows_accepted: usize,

    /// Records the CSV reader itself could not decode
    pub record_errors: usize,

    /// Measurement records emitted by expansion
    pub measurements_emitted: usize,

    /// Blocks that ran out of input before their expected row count
    pub shortfalls: Vec<BlockShortfall>,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self {
            lines_read: 0,
            blank_lines: 0,
            rows_discarded: 0,
            rows_accepted: 0,
            record_errors: 0,
            measurements_emitted: 0,
            shortfalls: Vec::new(),
        }
    }

    /// Check whether every block reached its expected row count
    pub fn is_complete(&self) -> bool {
        self.shortfalls.is_empty()
    }

    /// Number of rows missing across all short blocks
    pub fn rows_missing(&self) -> usize {
        self.shortfalls
            .iter()
            .map(|s| s.expected - s.found)
            .sum()
    }
}

impl Default for ParseStats {
    fn default() -> Self {
        Self::new()
    }
}

/// One block that exhausted the input before filling its row quota
///
/// A block that was missing from the document entirely reports the same
/// shape with `found` = 0; only the observed count distinguishes the two.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BlockShortfall {
    /// Week number the block belongs to
    pub week: i64,

    /// Left condition label, if the block had one
    pub left: Option<String>,

    /// Right condition label, if the block had one
    pub right: Option<String>,

    /// Rows the block layout expected
    pub expected: usize,

    /// Rows actually collected before the stream ran out
    pub found: usize,
}

impl BlockShortfall {
    /// Record a shortfall for a block
    pub fn new(week: Week, spec: &BlockSpec, found: usize) -> Self {
        Self {
            week: week.number(),
            left: spec.left.map(str::to_string),
            right: spec.right.map(str::to_string),
            expected: spec.expected_rows,
            found,
        }
    }

    /// Label pair for log messages, e.g. `(NDF, none)`
    pub fn block_description(&self) -> String {
        format!(
            "({}, {})",
            self.left.as_deref().unwrap_or("none"),
            self.right.as_deref().unwrap_or("none")
        )
    }
}

impl fmt::Display for BlockShortfall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Found only {} of {} expected rows for block {} in week {}",
            self.found,
            self.expected,
            self.block_description(),
            self.week
        )
    }
}
