//! HTTP request handlers for the roster engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calendar::{generate_month_days, holidays_for_calendar};
use crate::models::Employee;
use crate::scheduling::{
    auto_generate_schedule_with, compute_employee_work_hours_with, detect_all_shift_conflicts,
};

use super::request::{ConflictsRequest, ScheduleRequest, WorkHoursRequest};
use super::response::{
    ApiError, ApiErrorResponse, ConflictsResponse, HolidaysResponse, MonthDaysResponse,
    ScheduleResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/schedule/generate", post(generate_handler))
        .route("/work-hours", post(work_hours_handler))
        .route("/conflicts", post(conflicts_handler))
        .route("/calendar/:year/holidays", get(holidays_handler))
        .route("/calendar/:year/:month/days", get(month_days_handler))
        .with_state(state)
}

/// Maps a JSON extraction rejection onto the API error shape.
fn json_rejection_error(rejection: JsonRejection, correlation_id: Uuid) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries the detailed error from serde
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
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}

fn bad_request(error: ApiError) -> axum::response::Response {
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}

fn engine_error(err: crate::error::EngineError) -> axum::response::Response {
    let api_error: ApiErrorResponse = err.into();
    (
        api_error.status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(api_error.error),
    )
        .into_response()
}

fn ok_json<T: serde::Serialize>(body: T) -> axum::response::Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Handler for the POST /schedule/generate endpoint.
///
/// Generates a full-month schedule for the requested roster and echoes
/// the seed so the run can be reproduced.
async fn generate_handler(
    State(state): State<AppState>,
    payload: Result<Json<ScheduleRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing schedule generation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_request(json_rejection_error(rejection, correlation_id)),
    };

    let employees: Vec<Employee> = request.employees.into_iter().map(Into::into).collect();
    let seed = request.seed.unwrap_or_else(rand::random);
    let config = state.config();

    let start_time = Instant::now();
    match auto_generate_schedule_with(
        config.calendar(),
        config.policy(),
        &employees,
        &request.days,
        seed,
    ) {
        Ok(schedule) => {
            info!(
                correlation_id = %correlation_id,
                employees = employees.len(),
                days = request.days.len(),
                seed,
                duration_us = start_time.elapsed().as_micros(),
                "Schedule generated"
            );
            ok_json(ScheduleResponse { seed, schedule })
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Schedule generation failed");
            engine_error(err)
        }
    }
}

/// Handler for the POST /work-hours endpoint.
async fn work_hours_handler(
    State(state): State<AppState>,
    payload: Result<Json<WorkHoursRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing work-hours request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_request(json_rejection_error(rejection, correlation_id)),
    };

    let employee: Employee = request.employee.into();
    match compute_employee_work_hours_with(state.config().calendar(), &employee, &request.days) {
        Ok(stats) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %employee.id,
                expected = %stats.expected,
                actual = %stats.actual,
                "Work hours computed"
            );
            ok_json(stats)
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Work-hours computation failed");
            engine_error(err)
        }
    }
}

/// Handler for the POST /conflicts endpoint.
async fn conflicts_handler(
    State(_state): State<AppState>,
    payload: Result<Json<ConflictsRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing conflicts request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_request(json_rejection_error(rejection, correlation_id)),
    };

    let employees: Vec<Employee> = request.employees.into_iter().map(Into::into).collect();
    match detect_all_shift_conflicts(&employees, &request.days) {
        Ok(conflicts) => {
            info!(
                correlation_id = %correlation_id,
                employees = employees.len(),
                conflicts = conflicts.len(),
                "Conflict scan completed"
            );
            ok_json(ConflictsResponse { conflicts })
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Conflict scan failed");
            engine_error(err)
        }
    }
}

/// Handler for the GET /calendar/{year}/holidays endpoint.
async fn holidays_handler(
    State(state): State<AppState>,
    Path(year): Path<i32>,
) -> impl IntoResponse {
    match holidays_for_calendar(state.config().calendar(), year) {
        Ok(holidays) => ok_json(HolidaysResponse {
            year,
            holidays: holidays.into_iter().collect(),
        }),
        Err(err) => engine_error(err),
    }
}

/// Handler for the GET /calendar/{year}/{month}/days endpoint.
async fn month_days_handler(Path((year, month)): Path<(i32, u32)>) -> impl IntoResponse {
    match generate_month_days(year, month) {
        Ok(days) => ok_json(MonthDaysResponse { year, month, days }),
        Err(err) => engine_error(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::request::EmployeeRequest;
    use crate::config::ConfigLoader;
    use crate::models::DailyHours;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use std::collections::BTreeMap;
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        let config = ConfigLoader::load("./config/bg").expect("Failed to load config");
        AppState::new(config)
    }

    fn employee_request(id: &str, hours: DailyHours) -> EmployeeRequest {
        EmployeeRequest {
            id: id.to_string(),
            name: format!("Employee {}", id),
            daily_hours: hours,
            max_monthly_hours: None,
            shifts: BTreeMap::new(),
        }
    }

    async fn post_json(router: Router, uri: &str, body: String) -> axum::response::Response {
        router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_generate_returns_200_with_seed() {
        let router = create_router(create_test_state());
        let days = crate::calendar::generate_month_days(2026, 6).unwrap();
        let request = ScheduleRequest {
            employees: vec![
                employee_request("emp_001", DailyHours::Eight),
                employee_request("emp_002", DailyHours::Four),
            ],
            days,
            seed: Some(7),
        };
        let body = serde_json::to_string(&request).unwrap();

        let response = post_json(router, "/schedule/generate", body).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let result: ScheduleResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(result.seed, 7);
        assert_eq!(result.schedule.len(), 2);
    }

    #[tokio::test]
    async fn test_generate_empty_roster_returns_400() {
        let router = create_router(create_test_state());
        let request = ScheduleRequest {
            employees: vec![],
            days: crate::calendar::generate_month_days(2026, 6).unwrap(),
            seed: None,
        };
        let body = serde_json::to_string(&request).unwrap();

        let response = post_json(router, "/schedule/generate", body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "EMPTY_ROSTER");
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let router = create_router(create_test_state());
        let response = post_json(router, "/schedule/generate", "{invalid json".to_string()).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_holidays_endpoint_returns_2024_calendar() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/calendar/2024/holidays")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let result: HolidaysResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(result.holidays.len(), 14);
    }

    #[tokio::test]
    async fn test_holidays_rejects_out_of_era_year() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/calendar/-3996/holidays")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "INVALID_YEAR");
    }

    #[tokio::test]
    async fn test_month_days_rejects_month_13() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/calendar/2026/13/days")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "INVALID_MONTH");
    }
}
