//! Response types for the roster engine API.
//!
//! This module defines the success and error response structures and
//! the mapping from engine errors to HTTP statuses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::UnitWeeklyStaffReport;
use crate::roster::UnknownPosition;

/// Response body for the `/periods/resolve` endpoint.
///
/// Boundaries are RFC 3339 timestamps carrying the resolved timezone's
/// UTC offset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodResponse {
    /// First instant of the interval (inclusive).
    pub from: String,
    /// Last instant of the interval (inclusive).
    pub to: String,
}

/// Response body for the `/reports/weekly-staff` endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct WeeklyStaffReportResponse {
    /// One report per configured unit, in configuration order.
    pub reports: Vec<UnitWeeklyStaffReport>,
    /// Records excluded because their position matched no known set.
    /// Non-empty output means the position table needs extending.
    pub unknown_positions: Vec<UnknownPosition>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {path}"),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {path}: {message}"),
                ),
            },
            EngineError::InvalidTimezone { name } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_TIMEZONE",
                    format!("Invalid timezone: {name}"),
                    "Timezone must be a recognised IANA identifier such as 'Europe/Moscow'",
                ),
            },
            error @ (EngineError::InvalidMonth { .. }
            | EngineError::InvalidWeekOfMonth { .. }
            | EngineError::WeekOutsideMonth { .. }
            | EngineError::InvalidWeekOfYear { .. }
            | EngineError::InvalidDate { .. }) => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::validation_error(error.to_string()),
            },
        }
    }
}
