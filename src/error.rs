//! Error types for the roster engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during period resolution and
//! roster aggregation.

use thiserror::Error;

/// The main error type for the roster engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use roster_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configured timezone name is not a recognised IANA identifier.
    #[error("Invalid timezone: {name}")]
    InvalidTimezone {
        /// The timezone name that failed to parse.
        name: String,
    },

    /// Month number outside `[1, 12]`.
    #[error("Invalid month: {month}. Month must be between 1 and 12.")]
    InvalidMonth {
        /// The month number that was rejected.
        month: u32,
    },

    /// Month-relative week number outside `[1, 5]`.
    #[error("Invalid week number: {week}. Week number must be between 1 and 5.")]
    InvalidWeekOfMonth {
        /// The week number that was rejected.
        week: u32,
    },

    /// Month-relative week number whose first day falls past the end of
    /// the month (week 5 of a 28-day February selects no days).
    #[error("Week {week} of {year}-{month:02} has no days: the month ends before day {start_day}")]
    WeekOutsideMonth {
        /// The requested year.
        year: i32,
        /// The requested month.
        month: u32,
        /// The rejected week number.
        week: u32,
        /// The first day the week would have covered.
        start_day: u32,
    },

    /// Year-relative week number outside `[1, 53]`.
    #[error("Invalid week number: {week}. Week number must be between 1 and 53.")]
    InvalidWeekOfYear {
        /// The week number that was rejected.
        week: u32,
    },

    /// A calendar date or local time that does not exist, for example a
    /// midnight skipped by a daylight saving transition.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// A description of the invalid date.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
