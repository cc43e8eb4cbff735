//! Worksheet parser for flagella regeneration lab data
//!
//! This module parses the semi-structured CSV export of the two-week
//! flagella regeneration worksheet. The document carries a marker row per
//! week followed by a fixed layout of measurement blocks; the parser scans
//! forward to each marker and reads the blocks off a single shared cursor.
//!
//! ## Architecture
//!
//! The parser is organized into logical components:
//! - [`parser`] - Core parsing orchestration and file handling
//! - [`row_parser`] - Row-level cell parsing and marker detection
//! - [`block_reader`] - Fixed-count block accumulation with shortfall
//!   reporting
//! - [`stats`] - Parsing statistics and result structures
//!
//! ## Usage
//!
//! ```rust
//! use flagella_loader::app::services::worksheet_parser::WorksheetParser;
//!
//! # fn example() -> flagella_loader::Result<()> {
//! let parser = WorksheetParser::new();
//! let result = parser.parse_file(std::path::Path::new("flagella_data.csv"))?;
//!
//! println!("Parsed {} measurements from {} accepted rows",
//!          result.stats.measurements_emitted,
//!          result.stats.rows_accepted);
//! # Ok(())
//! # }
//! ```

pub mod block_reader;
pub mod parser;
pub mod row_parser;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use parser::WorksheetParser;
pub use stats::{BlockShortfall, ParseResult, ParseStats};
