//! Position classification against the injected reference table.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Coarse staff role derived from a fine-grained position identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StaffCategory {
    /// Shift and unit managers.
    Manager,
    /// Kitchen specialists.
    Specialist,
    /// Delivery couriers.
    Courier,
    /// Provisional hires whose final role is not yet settled.
    Candidate,
    /// Trainees.
    Intern,
    /// Positions explicitly excluded from every count.
    Skipped,
    /// A position identifier absent from every known set. Excluded from
    /// counts but surfaced as a diagnostic so the reference table can be
    /// extended.
    Unknown,
}

impl std::fmt::Display for StaffCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StaffCategory::Manager => write!(f, "Manager"),
            StaffCategory::Specialist => write!(f, "Specialist"),
            StaffCategory::Courier => write!(f, "Courier"),
            StaffCategory::Candidate => write!(f, "Candidate"),
            StaffCategory::Intern => write!(f, "Intern"),
            StaffCategory::Skipped => write!(f, "Skipped"),
            StaffCategory::Unknown => write!(f, "Unknown"),
        }
    }
}

/// The table of category-defining position identifiers.
///
/// Six disjoint identifier sets, loaded from configuration rather than
/// hard-coded: the sets are external reference data maintained alongside
/// the upstream position catalogue and change without touching the
/// classification algorithm.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PositionTable {
    /// Positions excluded from every count.
    #[serde(default)]
    pub skipped: HashSet<Uuid>,
    /// Manager positions.
    #[serde(default)]
    pub managers: HashSet<Uuid>,
    /// Kitchen specialist positions.
    #[serde(default)]
    pub specialists: HashSet<Uuid>,
    /// Courier positions.
    #[serde(default)]
    pub couriers: HashSet<Uuid>,
    /// Candidate positions.
    #[serde(default)]
    pub candidates: HashSet<Uuid>,
    /// Intern positions.
    #[serde(default)]
    pub interns: HashSet<Uuid>,
}

/// Classifies a position identifier against the table.
///
/// A record with no position at all yields `None` and is silently
/// excluded from aggregation. Lookup is first-match in a fixed priority
/// order: skipped, manager, specialist, courier, candidate, intern. An
/// identifier absent from every set yields
/// [`StaffCategory::Unknown`].
pub fn classify_position(
    positions: &PositionTable,
    position_id: Option<Uuid>,
) -> Option<StaffCategory> {
    let position_id = position_id?;

    let category = if positions.skipped.contains(&position_id) {
        StaffCategory::Skipped
    } else if positions.managers.contains(&position_id) {
        StaffCategory::Manager
    } else if positions.specialists.contains(&position_id) {
        StaffCategory::Specialist
    } else if positions.couriers.contains(&position_id) {
        StaffCategory::Courier
    } else if positions.candidates.contains(&position_id) {
        StaffCategory::Candidate
    } else if positions.interns.contains(&position_id) {
        StaffCategory::Intern
    } else {
        StaffCategory::Unknown
    };
    Some(category)
}
