//! HTTP API module for the roster engine.
//!
//! This module provides the REST endpoints for resolving report periods
//! and computing weekly staff reports from raw workforce snapshots. The
//! snapshots themselves are fetched by an external collaborator; the
//! API only transforms them.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{PeriodResolveRequest, WeeklyStaffReportRequest};
pub use response::{ApiError, PeriodResponse, WeeklyStaffReportResponse};
pub use state::AppState;
