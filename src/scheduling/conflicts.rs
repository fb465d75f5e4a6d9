//! Shift conflict detection.
//!
//! Two entry points: a pairwise check used during interactive editing
//! ([`detect_shift_conflict`]) and a batch pass over a whole roster
//! ([`detect_all_shift_conflicts`]). Both are pure over the employees'
//! current shift snapshots and produce fresh results on every call.

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};

use crate::error::EngineResult;
use crate::models::{Employee, ShiftValue, parse_time_minutes};

/// Number of calendar days after a night shift that must stay free.
const NIGHT_REST_DAYS: i64 = 2;

/// Builds the conflict-map key for an employee/date cell.
///
/// # Example
///
/// ```
/// use roster_engine::scheduling::conflict_key;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2026, 6, 2).unwrap();
/// assert_eq!(conflict_key("emp_001", date), "emp_001-2026-06-02");
/// ```
pub fn conflict_key(employee_id: &str, date: NaiveDate) -> String {
    format!("{}-{}", employee_id, date)
}

/// Checks a proposed shift against the employee's existing shift on the
/// same date.
///
/// Returns `Ok(None)` when either side is `Off`, `SickLeave`, `Vacation`
/// or absent. Otherwise both time ranges are derived and an overlap is
/// reported when `existing.start < proposed.end && proposed.start <
/// existing.end`. An employee holds at most one shift per date, so this
/// is a single-interval test.
///
/// # Errors
///
/// Propagates [`crate::error::EngineError::InvalidTime`] for malformed
/// custom time strings, or when the proposed custom range does not end
/// strictly after it starts.
///
/// # Example
///
/// ```
/// use roster_engine::models::{DailyHours, Employee, ShiftValue};
/// use roster_engine::scheduling::detect_shift_conflict;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2026, 6, 1).unwrap();
/// let mut employee = Employee::new("emp_001", "Maria", DailyHours::Eight);
/// employee.shifts.insert(date, ShiftValue::Morning);
///
/// let proposed = ShiftValue::Custom {
///     start_time: "13:00".to_string(),
///     end_time: "15:00".to_string(),
/// };
/// assert!(detect_shift_conflict(&employee, date, &proposed).unwrap().is_some());
/// assert!(detect_shift_conflict(&employee, date, &ShiftValue::Off).unwrap().is_none());
/// ```
pub fn detect_shift_conflict(
    employee: &Employee,
    date: NaiveDate,
    proposed: &ShiftValue,
) -> EngineResult<Option<String>> {
    proposed.validate()?;

    let Some(existing) = employee.shift_on(date) else {
        return Ok(None);
    };
    if !existing.is_working() || !proposed.is_working() {
        return Ok(None);
    }

    let (Some(existing_range), Some(proposed_range)) =
        (existing.time_range()?, proposed.time_range()?)
    else {
        return Ok(None);
    };

    if existing_range.overlaps(&proposed_range) {
        Ok(Some(format!(
            "{} overlaps the existing {} shift on {}",
            proposed, existing, date
        )))
    } else {
        Ok(None)
    }
}

/// Scans the whole roster for rule violations.
///
/// Two rules are checked for every employee and date:
///
/// - **Invalid custom range**: a `Custom` shift whose end is not strictly
///   after its start. The input layer is expected to reject these, but
///   the detector does not assume it.
/// - **Night-shift rest**: a `Night` shift on day D requires the two
///   following calendar days to be free (`Off`, `SickLeave`, `Vacation`
///   or absent). Violations are keyed at the later date, and both days
///   are flagged independently. The follow-up days come from literal
///   date arithmetic and may fall outside `days`.
///
/// When both rules hit the same cell, the invalid-custom-range reason
/// wins; rest violations never overwrite an existing entry.
///
/// # Errors
///
/// Propagates [`crate::error::EngineError::InvalidTime`] for malformed
/// custom time strings.
pub fn detect_all_shift_conflicts(
    employees: &[Employee],
    days: &[NaiveDate],
) -> EngineResult<BTreeMap<String, String>> {
    let mut conflicts = BTreeMap::new();

    for employee in employees {
        // Invalid custom ranges first: a cell's own defect takes
        // precedence over a rest violation spilling onto it.
        for &day in days {
            if let Some(ShiftValue::Custom {
                start_time,
                end_time,
            }) = employee.shift_on(day)
            {
                let start = parse_time_minutes(start_time)?;
                let end = parse_time_minutes(end_time)?;
                if end <= start {
                    conflicts.insert(
                        conflict_key(&employee.id, day),
                        format!(
                            "{}: end time before start time ({} - {})",
                            employee.name, start_time, end_time
                        ),
                    );
                }
            }
        }

        for &day in days {
            if employee.shift_on(day) != Some(&ShiftValue::Night) {
                continue;
            }
            for offset in 1..=NIGHT_REST_DAYS {
                let rest_day = day + Duration::days(offset);
                let violates = employee
                    .shift_on(rest_day)
                    .is_some_and(|shift| shift.is_working());
                if violates {
                    conflicts
                        .entry(conflict_key(&employee.id, rest_day))
                        .or_insert_with(|| {
                            format!(
                                "{}: insufficient rest after the night shift on {}",
                                employee.name, day
                            )
                        });
                }
            }
        }
    }

    Ok(conflicts)
}
