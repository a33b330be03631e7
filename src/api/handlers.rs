//! HTTP request handlers for the roster engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};
use chrono_tz::Tz;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{PositionAssignment, StaffMember};
use crate::period::{month_of_year_week, resolve_period};
use crate::roster::{
    ClassificationDiagnostics, count_staff_by_position, merge_weekly_staff_counts,
    specialist_staff_ids,
};

use super::request::{PeriodResolveRequest, WeeklyStaffReportRequest};
use super::response::{ApiError, ApiErrorResponse, PeriodResponse, WeeklyStaffReportResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/reports/weekly-staff", post(weekly_staff_report_handler))
        .route("/periods/resolve", post(resolve_period_handler))
        .with_state(state)
}

/// Handler for the POST /reports/weekly-staff endpoint.
///
/// Accepts raw active/dismissed snapshots plus position history and
/// returns one merged weekly report per configured unit.
async fn weekly_staff_report_handler(
    State(state): State<AppState>,
    payload: Result<Json<WeeklyStaffReportRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Correlation id for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing weekly staff report request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = rejection_error(correlation_id, rejection);
            return (StatusCode::BAD_REQUEST, Json(error)).into_response();
        }
    };

    let month = match resolve_report_month(&request) {
        Ok(month) => month,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Invalid report period");
            return ApiErrorResponse::from(err).into_response();
        }
    };

    let active: Vec<StaffMember> = request.active_members.into_iter().map(Into::into).collect();
    let dismissed: Vec<StaffMember> = request
        .dismissed_members
        .into_iter()
        .map(Into::into)
        .collect();
    let history: Vec<PositionAssignment> = request
        .positions_history
        .into_iter()
        .map(Into::into)
        .collect();

    let config = state.config();
    let specialist_ids = specialist_staff_ids(&history, config.positions());

    let mut diagnostics = ClassificationDiagnostics::new();
    let active_counts = count_staff_by_position(
        &active,
        config.positions(),
        Some(&specialist_ids),
        &mut diagnostics,
    );
    let dismissed_counts = count_staff_by_position(
        &dismissed,
        config.positions(),
        Some(&specialist_ids),
        &mut diagnostics,
    );

    let reports = merge_weekly_staff_counts(
        config.units(),
        &active_counts,
        &dismissed_counts,
        request.year,
        month,
        request.week,
    );

    info!(
        correlation_id = %correlation_id,
        year = request.year,
        month,
        week = request.week,
        units = reports.len(),
        active_records = active.len(),
        dismissed_records = dismissed.len(),
        unknown_positions = diagnostics.unknown_count(),
        "Weekly staff report computed"
    );

    let response = WeeklyStaffReportResponse {
        reports,
        unknown_positions: diagnostics.unknown_positions().to_vec(),
    };
    (StatusCode::OK, Json(response)).into_response()
}

/// Handler for the POST /periods/resolve endpoint.
///
/// Resolves a period selector into a concrete timezone-anchored
/// interval.
async fn resolve_period_handler(
    State(state): State<AppState>,
    payload: Result<Json<PeriodResolveRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing period resolution request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = rejection_error(correlation_id, rejection);
            return (StatusCode::BAD_REQUEST, Json(error)).into_response();
        }
    };

    let timezone = match request.timezone {
        Some(name) => match name.parse::<Tz>() {
            Ok(timezone) => timezone,
            Err(_) => {
                warn!(correlation_id = %correlation_id, timezone = %name, "Unknown timezone");
                return ApiErrorResponse::from(EngineError::InvalidTimezone { name })
                    .into_response();
            }
        },
        None => state.config().timezone(),
    };

    match resolve_period(request.selector, timezone) {
        Ok(interval) => {
            let interval = if request.round_to_upper_hour {
                interval.rounded_to_upper_hour()
            } else {
                interval
            };
            info!(
                correlation_id = %correlation_id,
                from = %interval.start,
                to = %interval.end,
                "Period resolved"
            );
            let response = PeriodResponse {
                from: interval.start.to_rfc3339(),
                to: interval.end.to_rfc3339(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Period resolution failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Picks the report month: explicit when supplied, otherwise derived
/// from the year-relative week number.
fn resolve_report_month(request: &WeeklyStaffReportRequest) -> EngineResult<u32> {
    if !(1..=53).contains(&request.week) {
        return Err(EngineError::InvalidWeekOfYear { week: request.week });
    }
    match request.month {
        Some(month) if (1..=12).contains(&month) => Ok(month),
        Some(month) => Err(EngineError::InvalidMonth { month }),
        None => month_of_year_week(request.year, request.week),
    }
}

/// Maps a JSON extraction failure to an API error body.
fn rejection_error(correlation_id: Uuid, rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries the detailed error from serde.
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {err}"))
        }
        JsonRejection::MissingJsonContentType(_) => ApiError::new(
            "MISSING_CONTENT_TYPE",
            "Content-Type must be application/json",
        ),
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}
