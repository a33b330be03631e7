//! Staff member model and related types.
//!
//! This module defines the [`StaffMember`] record as supplied by the
//! external workforce API, read-only to the engine.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Employment status of a staff member at snapshot time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StaffMemberStatus {
    /// Currently employed.
    Active,
    /// Employment terminated.
    Dismissed,
    /// Temporarily not working (leave, suspension).
    Suspended,
}

/// A raw per-person staff record from the workforce snapshot.
///
/// The `status` field determines which input list a record belongs to
/// (active or dismissed aggregation run); it never enters position
/// classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffMember {
    /// Unique identifier of the staff member.
    pub id: Uuid,
    /// The unit (retail location) the member belongs to.
    pub unit_uuid: Uuid,
    /// Employment status at snapshot time.
    pub status: StaffMemberStatus,
    /// Identifier of the member's current position, if any.
    #[serde(default)]
    pub position_id: Option<Uuid>,
    /// Display name of the position, if any.
    #[serde(default)]
    pub position_name: Option<String>,
}
