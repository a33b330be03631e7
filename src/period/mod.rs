//! Calendar period computation for the roster engine.
//!
//! This module turns year/month/week selectors into precise
//! timezone-aware intervals, decomposes months into week slices, and
//! provides the week-number helpers used to label weekly reports.

mod calculator;
mod interval;
mod selector;

pub use calculator::{
    current_month_interval, current_week_of_month, current_week_of_year, month_interval,
    month_of_year_week, month_weeks, resolve_period, week_of_month_interval, week_of_month_number,
    week_of_year_interval,
};
pub use interval::Interval;
pub use selector::PeriodSelector;
