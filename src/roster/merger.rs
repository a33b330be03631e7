//! Weekly merge of active and dismissed counts across configured units.

use std::collections::HashMap;

use uuid::Uuid;

use crate::models::{Unit, UnitStaffCounts, UnitWeeklyStaffReport};

/// Merges active and dismissed per-unit counts into weekly reports.
///
/// The configured unit list is the driving set: every configured unit
/// yields exactly one report, with counts copied from the matching map
/// entries or zero-filled when a unit had no data. Units present in the
/// maps but absent from configuration are dropped. The
/// `new_candidates_count` and `new_specialists_count` columns are
/// reserved and always zero.
pub fn merge_weekly_staff_counts(
    units: &[Unit],
    active: &HashMap<Uuid, UnitStaffCounts>,
    dismissed: &HashMap<Uuid, UnitStaffCounts>,
    year: i32,
    month: u32,
    week: u32,
) -> Vec<UnitWeeklyStaffReport> {
    units
        .iter()
        .map(|unit| {
            let active_counts = active
                .get(&unit.uuid)
                .copied()
                .unwrap_or_else(|| UnitStaffCounts::zero(unit.uuid));
            let dismissed_counts = dismissed
                .get(&unit.uuid)
                .copied()
                .unwrap_or_else(|| UnitStaffCounts::zero(unit.uuid));

            UnitWeeklyStaffReport {
                unit_name: unit.name.clone(),
                year,
                month,
                week,
                active_managers_count: active_counts.managers_count,
                dismissed_managers_count: dismissed_counts.managers_count,
                active_specialists_count: active_counts.specialists_count,
                dismissed_specialists_count: dismissed_counts.specialists_count,
                active_couriers_count: active_counts.couriers_count,
                dismissed_couriers_count: dismissed_counts.couriers_count,
                active_candidates_count: active_counts.candidates_count,
                dismissed_candidates_count: dismissed_counts.candidates_count,
                active_interns_count: active_counts.interns_count,
                dismissed_interns_count: dismissed_counts.interns_count,
                new_candidates_count: 0,
                new_specialists_count: 0,
            }
        })
        .collect()
}
