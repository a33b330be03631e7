//! Aggregated staff count models.
//!
//! This module contains the per-unit count types produced by the roster
//! aggregator and the final weekly report handed to the upload
//! collaborator.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Per-category staff counts for a single unit.
///
/// One instance per unit per aggregation run (active or dismissed).
/// Skipped and unrecognised positions, and records with no position at
/// all, are excluded from every field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitStaffCounts {
    /// The unit the counts belong to.
    pub unit_uuid: Uuid,
    /// Number of managers.
    pub managers_count: u32,
    /// Number of kitchen specialists (including reclassified candidates).
    pub specialists_count: u32,
    /// Number of couriers.
    pub couriers_count: u32,
    /// Number of candidates.
    pub candidates_count: u32,
    /// Number of interns.
    pub interns_count: u32,
}

impl UnitStaffCounts {
    /// Creates an all-zero count record for a unit.
    pub fn zero(unit_uuid: Uuid) -> Self {
        Self {
            unit_uuid,
            managers_count: 0,
            specialists_count: 0,
            couriers_count: 0,
            candidates_count: 0,
            interns_count: 0,
        }
    }

    /// Sum of all category counts.
    pub fn total(&self) -> u32 {
        self.managers_count
            + self.specialists_count
            + self.couriers_count
            + self.candidates_count
            + self.interns_count
    }
}

/// The weekly staff report for one configured unit.
///
/// One report per configured unit per week, whether or not any raw
/// records existed for it. `new_candidates_count` and
/// `new_specialists_count` are reserved columns and always zero; the
/// engine does not compute incremental hiring deltas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitWeeklyStaffReport {
    /// Display name of the unit.
    pub unit_name: String,
    /// Report year.
    pub year: i32,
    /// Report month.
    pub month: u32,
    /// Report week number within the month.
    pub week: u32,
    /// Active managers.
    pub active_managers_count: u32,
    /// Managers dismissed during the week.
    pub dismissed_managers_count: u32,
    /// Active kitchen specialists.
    pub active_specialists_count: u32,
    /// Kitchen specialists dismissed during the week.
    pub dismissed_specialists_count: u32,
    /// Active couriers.
    pub active_couriers_count: u32,
    /// Couriers dismissed during the week.
    pub dismissed_couriers_count: u32,
    /// Active candidates.
    pub active_candidates_count: u32,
    /// Candidates dismissed during the week.
    pub dismissed_candidates_count: u32,
    /// Active interns.
    pub active_interns_count: u32,
    /// Interns dismissed during the week.
    pub dismissed_interns_count: u32,
    /// Reserved: candidates hired during the week. Always zero.
    pub new_candidates_count: u32,
    /// Reserved: specialists hired during the week. Always zero.
    pub new_specialists_count: u32,
}
