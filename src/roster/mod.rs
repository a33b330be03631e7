//! Staff roster classification and aggregation.
//!
//! This module contains the logic that turns raw per-person staff
//! records into per-unit weekly category counts: position
//! classification against the injected reference table, historical
//! reclassification of provisional candidates, per-unit aggregation,
//! and the final zero-filled merge across configured units.

mod aggregator;
mod classifier;
mod merger;
mod reclassifier;

pub use aggregator::{ClassificationDiagnostics, UnknownPosition, count_staff_by_position};
pub use classifier::{PositionTable, StaffCategory, classify_position};
pub use merger::merge_weekly_staff_counts;
pub use reclassifier::specialist_staff_ids;
