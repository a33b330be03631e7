//! Historical reclassification of provisional candidates.

use std::collections::HashSet;

use uuid::Uuid;

use crate::models::PositionAssignment;

use super::classifier::PositionTable;

/// Returns the ids of staff members who ever held a specialist position.
///
/// A "candidate" position label is a provisional status: whether the
/// person is really a specialist hire is only knowable from their
/// assignment history, not from the current snapshot. The aggregator
/// recounts candidates whose id appears in this set under specialist.
///
/// Assignments are considered regardless of whether they are still
/// active or were left long ago. The history may be concatenated from
/// any number of paged, batched fetches; ids are deduplicated here.
pub fn specialist_staff_ids(
    history: &[PositionAssignment],
    positions: &PositionTable,
) -> HashSet<Uuid> {
    history
        .iter()
        .filter(|assignment| positions.specialists.contains(&assignment.position_id))
        .map(|assignment| assignment.staff_id)
        .collect()
}
