//! Employee model and related types.
//!
//! This module defines the [`Employee`] struct and [`DailyHours`] enum
//! for representing roster members in the scheduling engine.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::ShiftValue;

/// Contracted hours per working day.
///
/// Only 4, 6 and 8 hour contracts exist; the value is serialized as the
/// plain number so roster data reads naturally.
///
/// # Example
///
/// ```
/// use roster_engine::models::DailyHours;
///
/// let hours: DailyHours = serde_json::from_str("6").unwrap();
/// assert_eq!(hours, DailyHours::Six);
/// assert_eq!(hours.as_hours(), 6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum DailyHours {
    /// A 4-hour contract (half day).
    Four,
    /// A 6-hour contract.
    Six,
    /// A full 8-hour contract.
    Eight,
}

impl DailyHours {
    /// Returns the contracted hours as a plain number.
    pub fn as_hours(self) -> u32 {
        match self {
            DailyHours::Four => 4,
            DailyHours::Six => 6,
            DailyHours::Eight => 8,
        }
    }
}

impl TryFrom<u8> for DailyHours {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            4 => Ok(DailyHours::Four),
            6 => Ok(DailyHours::Six),
            8 => Ok(DailyHours::Eight),
            other => Err(format!("invalid daily hours: {} (expected 4, 6 or 8)", other)),
        }
    }
}

impl From<DailyHours> for u8 {
    fn from(value: DailyHours) -> Self {
        value.as_hours() as u8
    }
}

/// A roster member subject to scheduling.
///
/// The engine only reads and derives from this snapshot; creation and
/// persistence belong to the host application.
///
/// # Example
///
/// ```
/// use roster_engine::models::{DailyHours, Employee};
///
/// let employee = Employee::new("emp_001", "Maria Petrova", DailyHours::Eight);
/// assert!(employee.shifts.is_empty());
/// assert!(employee.max_monthly_hours.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Contracted hours per working day.
    pub daily_hours: DailyHours,
    /// Optional manual override for expected monthly hours.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_monthly_hours: Option<Decimal>,
    /// Assigned shifts, keyed by date.
    #[serde(default)]
    pub shifts: BTreeMap<NaiveDate, ShiftValue>,
}

impl Employee {
    /// Creates an employee with no shifts and no monthly-hours override.
    pub fn new(id: impl Into<String>, name: impl Into<String>, daily_hours: DailyHours) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            daily_hours,
            max_monthly_hours: None,
            shifts: BTreeMap::new(),
        }
    }

    /// Returns the shift assigned on the given date, if any.
    ///
    /// A missing entry means the employee is off that day; callers treat
    /// `None` as [`ShiftValue::Off`] for accounting purposes.
    pub fn shift_on(&self, date: NaiveDate) -> Option<&ShiftValue> {
        self.shifts.get(&date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_daily_hours_round_trip() {
        for (value, expected) in [(4u8, DailyHours::Four), (6, DailyHours::Six), (8, DailyHours::Eight)] {
            assert_eq!(DailyHours::try_from(value).unwrap(), expected);
            assert_eq!(u8::from(expected), value);
        }
    }

    #[test]
    fn test_daily_hours_rejects_other_values() {
        for value in [0u8, 1, 5, 7, 12] {
            assert!(DailyHours::try_from(value).is_err());
        }
    }

    #[test]
    fn test_daily_hours_serializes_as_number() {
        assert_eq!(serde_json::to_string(&DailyHours::Eight).unwrap(), "8");
        let parsed: DailyHours = serde_json::from_str("4").unwrap();
        assert_eq!(parsed, DailyHours::Four);
    }

    #[test]
    fn test_deserialize_employee() {
        let json = r#"{
            "id": "emp_001",
            "name": "Maria Petrova",
            "daily_hours": 8,
            "shifts": {
                "2026-06-01": {"type": "morning"},
                "2026-06-02": {"type": "custom", "start_time": "10:00", "end_time": "15:00"}
            }
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.id, "emp_001");
        assert_eq!(employee.daily_hours, DailyHours::Eight);
        assert_eq!(employee.max_monthly_hours, None);
        assert_eq!(
            employee.shift_on(date("2026-06-01")),
            Some(&ShiftValue::Morning)
        );
        assert!(employee.shift_on(date("2026-06-03")).is_none());
    }

    #[test]
    fn test_deserialize_employee_with_override() {
        let json = r#"{
            "id": "emp_002",
            "name": "Ivan Dimitrov",
            "daily_hours": 4,
            "max_monthly_hours": "100"
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.max_monthly_hours, Some(Decimal::from(100)));
        assert!(employee.shifts.is_empty());
    }

    #[test]
    fn test_serialize_employee_round_trip() {
        let mut employee = Employee::new("emp_003", "Elena Georgieva", DailyHours::Six);
        employee
            .shifts
            .insert(date("2026-06-05"), ShiftValue::Night);

        let json = serde_json::to_string(&employee).unwrap();
        let deserialized: Employee = serde_json::from_str(&json).unwrap();
        assert_eq!(employee, deserialized);
    }

    #[test]
    fn test_serialize_skips_missing_override() {
        let employee = Employee::new("emp_004", "Petar Iliev", DailyHours::Eight);
        let json = serde_json::to_string(&employee).unwrap();
        assert!(!json.contains("max_monthly_hours"));
    }
}
