//! Request types for the roster engine API.
//!
//! This module defines the JSON request structures for the
//! `/reports/weekly-staff` and `/periods/resolve` endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{PositionAssignment, StaffMember, StaffMemberStatus};
use crate::period::PeriodSelector;

/// Request body for the `/reports/weekly-staff` endpoint.
///
/// Carries the already-fetched workforce snapshots for one report week:
/// the active member list, the members dismissed inside the week, and
/// the position-assignment history of everyone involved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyStaffReportRequest {
    /// Report year.
    pub year: i32,
    /// Year-relative week number used to label the report.
    pub week: u32,
    /// Report month. Derived from `year`/`week` when omitted.
    #[serde(default)]
    pub month: Option<u32>,
    /// Snapshot of active staff members.
    #[serde(default)]
    pub active_members: Vec<StaffMemberRequest>,
    /// Staff members dismissed during the report week.
    #[serde(default)]
    pub dismissed_members: Vec<StaffMemberRequest>,
    /// Position-assignment history for the snapshot members.
    #[serde(default)]
    pub positions_history: Vec<PositionAssignmentRequest>,
}

/// Staff member record in a report request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffMemberRequest {
    /// Unique identifier of the staff member.
    pub id: Uuid,
    /// The unit the member belongs to.
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

/// Position assignment record in a report request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PositionAssignmentRequest {
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
    #[serde(default)]
    pub is_active: bool,
}

/// Request body for the `/periods/resolve` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodResolveRequest {
    /// The period to resolve.
    pub selector: PeriodSelector,
    /// IANA timezone to anchor the interval to. Defaults to the
    /// configured reporting timezone.
    #[serde(default)]
    pub timezone: Option<String>,
    /// Advance the interval end to the next whole hour, for callers
    /// talking to the hour-granular statistics API.
    #[serde(default)]
    pub round_to_upper_hour: bool,
}

impl From<StaffMemberRequest> for StaffMember {
    fn from(req: StaffMemberRequest) -> Self {
        StaffMember {
            id: req.id,
            unit_uuid: req.unit_uuid,
            status: req.status,
            position_id: req.position_id,
            position_name: req.position_name,
        }
    }
}

impl From<PositionAssignmentRequest> for PositionAssignment {
    fn from(req: PositionAssignmentRequest) -> Self {
        PositionAssignment {
            staff_id: req.staff_id,
            unit_uuid: req.unit_uuid,
            position_id: req.position_id,
            taken_on: req.taken_on,
            left_on: req.left_on,
            is_active: req.is_active,
        }
    }
}
