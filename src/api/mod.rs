//! HTTP API module for the roster engine.
//!
//! This module provides the REST endpoints for schedule generation,
//! work-hour accounting, conflict detection and calendar lookups.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{ConflictsRequest, EmployeeRequest, ScheduleRequest, WorkHoursRequest};
pub use response::{
    ApiError, ConflictsResponse, HolidaysResponse, MonthDaysResponse, ScheduleResponse,
};
pub use state::AppState;
