//! Core data models for the roster engine.
//!
//! This module contains all the domain models used throughout the engine.

mod position_assignment;
mod report;
mod staff_member;
mod unit;

pub use position_assignment::PositionAssignment;
pub use report::{UnitStaffCounts, UnitWeeklyStaffReport};
pub use staff_member::{StaffMember, StaffMemberStatus};
pub use unit::Unit;
