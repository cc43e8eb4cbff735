//! Data models for the flagella worksheet loader
//!
//! This module contains the core data structures for representing the
//! two-week flagella regeneration experiment: the fixed block layout of the
//! worksheet, the readings parsed from it, and the flattened measurement
//! records written to the database.

use crate::constants::{self, conditions, researchers};
use std::fmt;

// =============================================================================
// Experimental Week
// =============================================================================

/// One of the two experimental weeks recorded in the worksheet
///
/// Each week is a self-contained section of the document with its own
/// marker row, block layout, baseline cell density and researcher
/// assignments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Week {
    /// First week of the experiment
    One,

    /// Second week of the experiment
    Two,
}

impl Week {
    /// Both weeks in worksheet order
    pub fn both() -> [Week; 2] {
        [Week::One, Week::Two]
    }

    /// Week number as stored in the database
    pub fn number(self) -> i64 {
        match self {
            Week::One => 1,
            Week::Two => 2,
        }
    }

    /// Marker text that opens this week's section of the worksheet
    pub fn marker(self) -> &'static str {
        match self {
            Week::One => constants::WEEK_ONE_MARKER,
            Week::Two => constants::WEEK_TWO_MARKER,
        }
    }

    /// Baseline cell density for this week's culture (cells/mL)
    pub fn base_density(self) -> f64 {
        match self {
            Week::One => constants::BASE_DENSITY_WEEK_ONE,
            Week::Two => constants::BASE_DENSITY_WEEK_TWO,
        }
    }

    /// Block layout for this week's section, in worksheet order
    pub fn blocks(self) -> &'static [BlockSpec] {
        match self {
            Week::One => constants::WEEK_ONE_BLOCKS,
            Week::Two => constants::WEEK_TWO_BLOCKS,
        }
    }

    /// Look up the researcher assigned to a condition in this week
    ///
    /// The assignment table is keyed by (week, normalized label). NDF swaps
    /// researchers between the weeks; the remaining conditions split by
    /// concentration. Labels outside the table yield `None`.
    pub fn researcher_for(self, condition: &str) -> Option<i64> {
        let normalized = constants::normalize_condition(condition);
        match (self, normalized.as_str()) {
            (Week::One, conditions::NDF) => Some(researchers::TWO),
            (Week::Two, conditions::NDF) => Some(researchers::ONE),
            (Week::One, conditions::TWO_C | conditions::C) => Some(researchers::ONE),
            (Week::One, conditions::FOUR_C | conditions::HALF_C) => Some(researchers::TWO),
            (Week::Two, conditions::FOUR_C | conditions::HALF_C) => Some(researchers::ONE),
            (Week::Two, conditions::TWO_C | conditions::C) => Some(researchers::TWO),
            _ => None,
        }
    }

    /// Look up the absolute cell density for a condition in this week
    ///
    /// Multiplies this week's baseline by the per-label multiplier.
    /// Labels outside the table yield `None`.
    pub fn density_for(self, condition: &str) -> Option<f64> {
        constants::density_multiplier(condition).map(|multiplier| multiplier * self.base_density())
    }
}

impl fmt::Display for Week {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

// =============================================================================
// Block Layout
// =============================================================================

/// Layout of one labeled block within a week's section
///
/// A block carries up to two conditions side by side: the left reading
/// starts at column 0, the right reading 13 columns in. Single-sided blocks
/// (the NDF control) have no right label. `expected_rows` is the number of
/// valid data rows the block should contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockSpec {
    /// Condition label for the left side, if any
    pub left: Option<&'static str>,

    /// Condition label for the right side, if any
    pub right: Option<&'static str>,

    /// Number of valid rows this block should contain
    pub expected_rows: usize,
}

impl BlockSpec {
    /// Create a block layout entry
    pub const fn new(
        left: Option<&'static str>,
        right: Option<&'static str>,
        expected_rows: usize,
    ) -> Self {
        Self {
            left,
            right,
            expected_rows,
        }
    }

    /// Human-readable label pair for log messages, e.g. `(2C, 4C)`
    pub fn description(&self) -> String {
        format!(
            "({}, {})",
            self.left.unwrap_or("none"),
            self.right.unwrap_or("none")
        )
    }
}

impl fmt::Display for BlockSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

// =============================================================================
// Parsed Readings
// =============================================================================

/// One parsed (time, replicates) reading from a single side of a row
///
/// A reading exists only if its time cell parsed as a number. Individual
/// replicate cells fail soft: a cell that is missing, empty or non-numeric
/// becomes `None` without invalidating the reading, and its position is
/// preserved.
#[derive(Debug, Clone, PartialEq)]
pub struct SideReading {
    /// Minutes since deflagellation
    pub time_min: f64,

    /// Replicate flagella lengths (µm) in worksheet column order
    pub replicates: Vec<Option<f64>>,
}

impl SideReading {
    /// Create a reading from a parsed time and replicate list
    pub fn new(time_min: f64, replicates: Vec<Option<f64>>) -> Self {
        Self {
            time_min,
            replicates,
        }
    }

    /// Number of replicate cells that actually held a value
    pub fn recorded_count(&self) -> usize {
        self.replicates.iter().filter(|r| r.is_some()).count()
    }
}

/// One accepted data row of a block: left and/or right readings
///
/// A row is only accepted when at least one side parsed, so both sides
/// being `None` does not occur in block reader output.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockRow {
    /// Reading parsed at the left offset, if the side parsed
    pub left: Option<SideReading>,

    /// Reading parsed at the right offset, if the side parsed
    pub right: Option<SideReading>,
}

impl BlockRow {
    /// Create a block row from its parsed sides
    pub fn new(left: Option<SideReading>, right: Option<SideReading>) -> Self {
        Self { left, right }
    }

    /// Check whether either side holds a reading
    pub fn has_reading(&self) -> bool {
        self.left.is_some() || self.right.is_some()
    }
}

// =============================================================================
// Measurement Record
// =============================================================================

/// One flattened measurement, as written to the database
///
/// Created as a pure projection of a reading plus its condition label and
/// week; never mutated afterwards. `replicate` is the 1-based position of
/// the value in the source replicate list, and a missing value is kept as
/// `None` rather than dropped so positions stay meaningful.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    /// Experimental week the measurement belongs to
    pub week: Week,

    /// Assigned researcher, if the condition is in the assignment table
    pub researcher: Option<i64>,

    /// Condition label as it appeared in the block layout
    pub condition: String,

    /// Absolute cell density (cells/mL), if the condition is in the table
    pub density: Option<f64>,

    /// Minutes since deflagellation
    pub time_min: f64,

    /// 1-based replicate index within the source reading
    pub replicate: i64,

    /// Measured flagella length (µm), if the cell held a value
    pub length_um: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    mod week_tests {
        use super::*;

        #[test]
        fn test_week_numbers_and_markers() {
            assert_eq!(Week::One.number(), 1);
            assert_eq!(Week::Two.number(), 2);
            assert_eq!(Week::One.marker(), "WEEK ONE FLAGELLA");
            assert_eq!(Week::Two.marker(), "WEEK TWO FLAGELLA");
            assert_eq!(format!("{}", Week::Two), "2");
        }

        #[test]
        fn test_week_order() {
            assert_eq!(Week::both(), [Week::One, Week::Two]);
        }

        #[test]
        fn test_researcher_table_week_one() {
            assert_eq!(Week::One.researcher_for("2C"), Some(1));
            assert_eq!(Week::One.researcher_for("C"), Some(1));
            assert_eq!(Week::One.researcher_for("4C"), Some(2));
            assert_eq!(Week::One.researcher_for("1/2C"), Some(2));
            assert_eq!(Week::One.researcher_for("NDF"), Some(2));
        }

        #[test]
        fn test_researcher_table_week_two() {
            assert_eq!(Week::Two.researcher_for("4C"), Some(1));
            assert_eq!(Week::Two.researcher_for("1/2C"), Some(1));
            assert_eq!(Week::Two.researcher_for("2C"), Some(2));
            assert_eq!(Week::Two.researcher_for("C"), Some(2));
            assert_eq!(Week::Two.researcher_for("NDF"), Some(1));
        }

        #[test]
        fn test_researcher_ndf_swaps_between_weeks() {
            // The control condition changes hands between the weeks
            assert_eq!(Week::One.researcher_for("NDF"), Some(2));
            assert_eq!(Week::Two.researcher_for("NDF"), Some(1));
        }

        #[test]
        fn test_researcher_normalizes_label() {
            assert_eq!(Week::One.researcher_for(" 2c "), Some(1));
            assert_eq!(Week::Two.researcher_for("ndf"), Some(1));
        }

        #[test]
        fn test_researcher_unknown_label() {
            assert_eq!(Week::One.researcher_for("3C"), None);
            assert_eq!(Week::Two.researcher_for(""), None);
        }

        #[test]
        fn test_density_lookup() {
            assert_eq!(
                Week::One.density_for("4C"),
                Some(4.0 * constants::BASE_DENSITY_WEEK_ONE)
            );
            assert_eq!(
                Week::One.density_for("2C"),
                Some(2.0 * constants::BASE_DENSITY_WEEK_ONE)
            );
            assert_eq!(
                Week::One.density_for("NDF"),
                Some(constants::BASE_DENSITY_WEEK_ONE)
            );
            assert_eq!(
                Week::Two.density_for("1/2C"),
                Some(0.5 * constants::BASE_DENSITY_WEEK_TWO)
            );
            assert_eq!(
                Week::Two.density_for("C"),
                Some(constants::BASE_DENSITY_WEEK_TWO)
            );
            assert_eq!(Week::One.density_for("unknown"), None);
        }

        #[test]
        fn test_blocks_wiring() {
            assert_eq!(Week::One.blocks(), constants::WEEK_ONE_BLOCKS);
            assert_eq!(Week::Two.blocks(), constants::WEEK_TWO_BLOCKS);
        }
    }

    mod block_spec_tests {
        use super::*;

        #[test]
        fn test_description_paired() {
            let spec = BlockSpec::new(Some("2C"), Some("4C"), 9);
            assert_eq!(spec.description(), "(2C, 4C)");
        }

        #[test]
        fn test_description_single_sided() {
            let spec = BlockSpec::new(Some("NDF"), None, 2);
            assert_eq!(spec.description(), "(NDF, none)");
            assert_eq!(format!("{}", spec), "(NDF, none)");
        }
    }

    mod reading_tests {
        use super::*;

        #[test]
        fn test_recorded_count() {
            let reading = SideReading::new(30.0, vec![Some(1.0), None, Some(2.5), None]);
            assert_eq!(reading.recorded_count(), 2);
        }

        #[test]
        fn test_block_row_has_reading() {
            let reading = SideReading::new(0.0, vec![None; 10]);
            assert!(BlockRow::new(Some(reading.clone()), None).has_reading());
            assert!(BlockRow::new(None, Some(reading)).has_reading());
            assert!(!BlockRow::new(None, None).has_reading());
        }
    }
}
