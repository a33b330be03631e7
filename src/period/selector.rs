//! Period selector type.

use serde::{Deserialize, Serialize};

/// A request for a calendar period.
///
/// Two week conventions coexist because historical call sites use
/// either: a week counted inside a month (1-based 7-day blocks, the
/// last one clamped to the month end) and a week counted inside a year
/// (7-day blocks after January 1st, normalized to Monday). Both are
/// kept as tagged variants rather than reconciled.
///
/// # Example
///
/// ```
/// use roster_engine::period::PeriodSelector;
///
/// let selector: PeriodSelector =
///     serde_json::from_str(r#"{"type": "month_week", "year": 2025, "month": 3, "week": 2}"#)
///         .unwrap();
/// assert_eq!(
///     selector,
///     PeriodSelector::MonthWeek { year: 2025, month: 3, week: 2 }
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PeriodSelector {
    /// A whole calendar month.
    Month {
        /// The year.
        year: i32,
        /// The month, `1..=12`.
        month: u32,
    },
    /// A week counted inside a month: week `w` covers days
    /// `(w-1)*7 + 1 ..= (w-1)*7 + 7`, clamped to the month end.
    MonthWeek {
        /// The year.
        year: i32,
        /// The month, `1..=12`.
        month: u32,
        /// The week within the month, `1..=5`.
        week: u32,
    },
    /// A week counted inside a year: the `week`-th 7-day block after
    /// January 1st, normalized to that week's Monday.
    IsoWeek {
        /// The year.
        year: i32,
        /// The week within the year, `1..=53`.
        week: u32,
    },
}
