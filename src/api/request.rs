//! Request types for the roster engine API.
//!
//! This module defines the JSON request structures for the scheduling
//! endpoints.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{DailyHours, Employee, ShiftValue};

/// Employee information in an API request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRequest {
    /// Unique identifier for the employee.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Contracted hours per working day (4, 6 or 8).
    pub daily_hours: DailyHours,
    /// Optional override for expected monthly hours.
    #[serde(default)]
    pub max_monthly_hours: Option<Decimal>,
    /// Already-assigned shifts, keyed by date.
    #[serde(default)]
    pub shifts: BTreeMap<NaiveDate, ShiftValue>,
}

/// Request body for the `/schedule/generate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleRequest {
    /// The roster to schedule.
    pub employees: Vec<EmployeeRequest>,
    /// The dates to cover, normally one full month.
    pub days: Vec<NaiveDate>,
    /// Optional seed; omitted means a fresh random run.
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Request body for the `/work-hours` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkHoursRequest {
    /// The employee whose hours to compute.
    pub employee: EmployeeRequest,
    /// The dates to account over.
    pub days: Vec<NaiveDate>,
}

/// Request body for the `/conflicts` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConflictsRequest {
    /// The roster to scan.
    pub employees: Vec<EmployeeRequest>,
    /// The dates to scan.
    pub days: Vec<NaiveDate>,
}

impl From<EmployeeRequest> for Employee {
    fn from(req: EmployeeRequest) -> Self {
        Employee {
            id: req.id,
            name: req.name,
            daily_hours: req.daily_hours,
            max_monthly_hours: req.max_monthly_hours,
            shifts: req.shifts,
        }
    }
}
