//! Staff roster aggregation engine for retail unit reporting.
//!
//! This crate turns period selectors into precise timezone-aware calendar
//! intervals and merges raw per-person staff records into per-unit weekly
//! staff category counts for a reporting dashboard.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod period;
pub mod roster;
