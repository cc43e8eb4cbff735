//! Block-to-record expansion for parsed readings
//!
//! This module turns one (time, replicates) reading into individual
//! measurement records, one per replicate position, attaching the
//! researcher assignment and absolute cell density derived from the week's
//! lookup tables.

use crate::app::models::{Measurement, SideReading, Week};

/// Expand a side reading into per-replicate measurement records
///
/// Emits exactly one record per entry in the replicate list, with the
/// 1-based replicate index preserving the worksheet column position. A
/// `None` replicate still produces a record with a null length, so missing
/// values stay addressable by position. Conditions outside the lookup
/// tables get null researcher and density but are never dropped.
///
/// Pure function: the caller decides what to do with the records.
pub fn expand_reading(week: Week, condition: &str, reading: &SideReading) -> Vec<Measurement> {
    let researcher = week.researcher_for(condition);
    let density = week.density_for(condition);

    reading
        .replicates
        .iter()
        .enumerate()
        .map(|(index, length_um)| Measurement {
            week,
            researcher,
            condition: condition.to_string(),
            density,
            time_min: reading.time_min,
            replicate: (index + 1) as i64,
            length_um: *length_um,
        })
        .collect()
}
