//! Per-unit roster aggregation.

use std::collections::{HashMap, HashSet};

use serde::Serialize;
use tracing::warn;
use uuid::Uuid;

use crate::models::{StaffMember, UnitStaffCounts};

use super::classifier::{PositionTable, StaffCategory, classify_position};

/// A staff record whose position identifier matched no known set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnknownPosition {
    /// The staff member carrying the unknown position.
    pub staff_id: Uuid,
    /// The unit the member belongs to.
    pub unit_uuid: Uuid,
    /// The unrecognised position identifier.
    pub position_id: Uuid,
    /// The position display name, when the snapshot carried one.
    pub position_name: Option<String>,
}

/// Diagnostic sink for classification gaps.
///
/// Passed into [`count_staff_by_position`] by the caller; each
/// unrecognised position identifier is recorded here and emitted as a
/// structured `tracing` warning, so the reference table can be extended.
/// Records with no position at all are not recorded. Dropping unknown
/// positions without any signal is treated as a defect, hence the
/// explicit sink instead of a hidden global.
#[derive(Debug, Default)]
pub struct ClassificationDiagnostics {
    unknown: Vec<UnknownPosition>,
}

impl ClassificationDiagnostics {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records excluded as unknown.
    pub fn unknown_count(&self) -> usize {
        self.unknown.len()
    }

    /// The recorded unknown positions, in input order.
    pub fn unknown_positions(&self) -> &[UnknownPosition] {
        &self.unknown
    }

    fn record_unknown(&mut self, member: &StaffMember, position_id: Uuid) {
        warn!(
            staff_id = %member.id,
            unit_uuid = %member.unit_uuid,
            position_id = %position_id,
            position_name = member.position_name.as_deref().unwrap_or("<none>"),
            "Unknown staff position"
        );
        self.unknown.push(UnknownPosition {
            staff_id: member.id,
            unit_uuid: member.unit_uuid,
            position_id,
            position_name: member.position_name.clone(),
        });
    }
}

/// Groups staff records by unit and accumulates per-category counts.
///
/// Every unit with at least one input record gets an entry, even if all
/// of its records end up excluded. Skipped positions, unknown positions
/// and records with no position are excluded from every count; unknown
/// positions are additionally reported through `diagnostics`.
///
/// When `specialist_staff_ids` is supplied, a record classified as
/// candidate whose id appears in the set is counted under specialist
/// instead — the historical reclassification of provisional hires.
///
/// The caller decides which record set to aggregate; the engine runs
/// this once for the active snapshot and once for the dismissed one.
/// Iteration order of the returned map is unspecified.
pub fn count_staff_by_position(
    staff_members: &[StaffMember],
    positions: &PositionTable,
    specialist_staff_ids: Option<&HashSet<Uuid>>,
    diagnostics: &mut ClassificationDiagnostics,
) -> HashMap<Uuid, UnitStaffCounts> {
    let mut counts: HashMap<Uuid, UnitStaffCounts> = HashMap::new();

    for member in staff_members {
        let entry = counts
            .entry(member.unit_uuid)
            .or_insert_with(|| UnitStaffCounts::zero(member.unit_uuid));

        let Some(category) = classify_position(positions, member.position_id) else {
            continue;
        };

        match category {
            StaffCategory::Skipped => {}
            StaffCategory::Manager => entry.managers_count += 1,
            StaffCategory::Specialist => entry.specialists_count += 1,
            StaffCategory::Courier => entry.couriers_count += 1,
            StaffCategory::Candidate => {
                if specialist_staff_ids.is_some_and(|ids| ids.contains(&member.id)) {
                    entry.specialists_count += 1;
                } else {
                    entry.candidates_count += 1;
                }
            }
            StaffCategory::Intern => entry.interns_count += 1,
            StaffCategory::Unknown => {
                // Unknown only comes back for a present position id.
                if let Some(position_id) = member.position_id {
                    diagnostics.record_unknown(member, position_id);
                }
            }
        }
    }

    counts
}
