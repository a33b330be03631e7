//! Position assignment history model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One entry of a staff member's position-assignment history.
///
/// The external API pages this history and batches requests by staff id;
/// the engine accepts entries concatenated from any number of batches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionAssignment {
    /// The staff member the assignment belongs to.
    pub staff_id: Uuid,
    /// The unit the assignment was held at.
    pub unit_uuid: Uuid,
    /// The position that was assigned.
    pub position_id: Uuid,
    /// The date the position was taken.
    pub taken_on: NaiveDate,
    /// The date the position was left, if it was.
    #[serde(default)]
    pub left_on: Option<NaiveDate>,
    /// Whether the assignment is still active.
    pub is_active: bool,
}
