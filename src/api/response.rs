//! Response types for the roster engine API.
//!
//! This module defines the success payloads, the error response
//! structures and the error mapping for the HTTP API.

use std::collections::BTreeMap;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::scheduling::ScheduleAssignment;

/// Response body for `POST /schedule/generate`.
///
/// Echoes the seed that drove the run so a schedule can be reproduced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleResponse {
    /// The seed actually used for this run.
    pub seed: u64,
    /// Generated assignments, keyed by employee id then date.
    pub schedule: ScheduleAssignment,
}

/// Response body for `POST /conflicts`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConflictsResponse {
    /// Conflict reasons keyed by `"{employee_id}-{date}"`.
    pub conflicts: BTreeMap<String, String>,
}

/// Response body for `GET /calendar/{year}/holidays`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HolidaysResponse {
    /// The year the holidays were computed for.
    pub year: i32,
    /// Public holidays in ascending order.
    pub holidays: Vec<NaiveDate>,
}

/// Response body for `GET /calendar/{year}/{month}/days`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthDaysResponse {
    /// The requested year.
    pub year: i32,
    /// The requested month (1-12).
    pub month: u32,
    /// Every date of the month in ascending order.
    pub days: Vec<NaiveDate>,
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
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidTime { value } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_TIME",
                    format!("Invalid time '{}': expected HH:mm", value),
                    "Custom shift times must be 24-hour HH:mm strings",
                ),
            },
            EngineError::InvalidMonth { month } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_MONTH",
                    format!("Invalid month: {}", month),
                    "Months are numbered 1 through 12",
                ),
            },
            EngineError::InvalidYear { year } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_YEAR",
                    format!("Invalid year: {}", year),
                    "Years are supported from 1583 through 9999",
                ),
            },
            EngineError::EmptyRoster => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new(
                    "EMPTY_ROSTER",
                    "Cannot generate a schedule for an empty roster",
                ),
            },
        }
    }
}
