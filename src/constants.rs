//! Application constants for the flagella worksheet loader
//!
//! This module contains the fixed worksheet layout (section markers, column
//! offsets, block definitions), the condition lookup tables, and default
//! values used throughout the loader.

use crate::app::models::BlockSpec;

// =============================================================================
// Worksheet Section Markers
// =============================================================================

/// Marker text that opens the week-one section of the worksheet
///
/// Matched case-insensitively against the comma-joined cells of each row,
/// so the marker is found whether it sits in one cell or alongside others.
pub const WEEK_ONE_MARKER: &str = "WEEK ONE FLAGELLA";

/// Marker text that opens the week-two section of the worksheet
pub const WEEK_TWO_MARKER: &str = "WEEK TWO FLAGELLA";

// =============================================================================
// Row Layout Constants
// =============================================================================

/// Column offset of the left-hand reading within a worksheet row
pub const LEFT_SIDE_OFFSET: usize = 0;

/// Column offset of the right-hand reading within a worksheet row
///
/// The lab template places the second condition 13 columns in: one time
/// column, ten replicate columns and two spacer columns after the left side.
pub const RIGHT_SIDE_OFFSET: usize = 13;

/// Number of replicate measurement columns following each time cell
pub const REPLICATE_COUNT: usize = 10;

// =============================================================================
// Condition Labels
// =============================================================================

/// Experimental condition labels as they appear in the worksheet
pub mod conditions {
    /// Four times baseline cell concentration
    pub const FOUR_C: &str = "4C";

    /// Twice baseline cell concentration
    pub const TWO_C: &str = "2C";

    /// Baseline cell concentration
    pub const C: &str = "C";

    /// Half baseline cell concentration
    pub const HALF_C: &str = "1/2C";

    /// Non-deflagellated control
    pub const NDF: &str = "NDF";

    /// All condition labels recognized by the lookup tables
    pub const ALL: &[&str] = &[FOUR_C, TWO_C, C, HALF_C, NDF];
}

// =============================================================================
// Researcher Identifiers
// =============================================================================

/// Researcher identifiers used by the assignment table
pub mod researchers {
    /// First researcher (R1)
    pub const ONE: i64 = 1;

    /// Second researcher (R2)
    pub const TWO: i64 = 2;
}

// =============================================================================
// Cell Density Constants
// =============================================================================

/// Baseline cell density for the week-one culture (cells/mL)
pub const BASE_DENSITY_WEEK_ONE: f64 = 2.79e6;

/// Baseline cell density for the week-two culture (cells/mL)
pub const BASE_DENSITY_WEEK_TWO: f64 = 4.50e6;

// =============================================================================
// Block Definitions
// =============================================================================

/// Week-one blocks in worksheet order: (left, right, expected rows)
///
/// The paired blocks carry nine time points each; the NDF control block
/// records only the first and last time point and has no right side.
pub const WEEK_ONE_BLOCKS: &[BlockSpec] = &[
    BlockSpec::new(Some(conditions::TWO_C), Some(conditions::FOUR_C), 9),
    BlockSpec::new(Some(conditions::C), Some(conditions::HALF_C), 9),
    BlockSpec::new(Some(conditions::NDF), None, 2),
];

/// Week-two blocks in worksheet order
///
/// Same shape as week one with the paired conditions swapped between sides.
pub const WEEK_TWO_BLOCKS: &[BlockSpec] = &[
    BlockSpec::new(Some(conditions::FOUR_C), Some(conditions::TWO_C), 9),
    BlockSpec::new(Some(conditions::HALF_C), Some(conditions::C), 9),
    BlockSpec::new(Some(conditions::NDF), None, 2),
];

// =============================================================================
// Database Constants
// =============================================================================

/// Name of the measurements table in the output database
pub const MEASUREMENTS_TABLE: &str = "flagella_measurements";

/// Default input worksheet filename
pub const DEFAULT_INPUT_FILENAME: &str = "flagella_data.csv";

/// Default output database filename
pub const DEFAULT_DATABASE_FILENAME: &str = "flagella_data.sqlite";

// =============================================================================
// Helper Functions
// =============================================================================

/// Normalize a condition label for table lookups (trim + uppercase)
pub fn normalize_condition(condition: &str) -> String {
    condition.trim().to_uppercase()
}

/// Get the density multiplier for a condition label
///
/// The multiplier is the same in both weeks; only the baseline differs.
/// Unrecognized labels have no multiplier.
pub fn density_multiplier(condition: &str) -> Option<f64> {
    match normalize_condition(condition).as_str() {
        conditions::FOUR_C => Some(4.0),
        conditions::TWO_C => Some(2.0),
        conditions::C => Some(1.0),
        conditions::HALF_C => Some(0.5),
        conditions::NDF => Some(1.0),
        _ => None,
    }
}

/// Check whether a label is one of the recognized condition labels
pub fn is_known_condition(condition: &str) -> bool {
    conditions::ALL.contains(&normalize_condition(condition).as_str())
}
