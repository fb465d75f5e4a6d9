//! Work-hour accounting.
//!
//! Computes expected contracted hours and actual assigned hours for one
//! employee over a list of dates, and flags overwork. Pure over the
//! employee's current shift snapshot.

use chrono::{Datelike, NaiveDate, Weekday};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::calendar::holidays_for_calendar;
use crate::config::HolidayCalendar;
use crate::error::EngineResult;
use crate::models::{Employee, WorkHourStats};

/// Returns true for Saturday and Sunday.
pub(crate) fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Counts the dates that are neither a weekend day nor a public holiday.
///
/// Holidays are looked up for the year of the first date in the list; a
/// month's date list never spans two years.
pub(crate) fn count_working_days(
    calendar: &HolidayCalendar,
    days: &[NaiveDate],
) -> EngineResult<usize> {
    let Some(first) = days.first() else {
        return Ok(0);
    };
    let holidays = holidays_for_calendar(calendar, first.year())?;

    Ok(days
        .iter()
        .filter(|d| !is_weekend(**d) && !holidays.contains(d))
        .count())
}

/// Computes expected and actual work hours for an employee.
///
/// Expected hours are the employee's `max_monthly_hours` override when
/// set, otherwise the number of working days in `days` (excluding
/// weekends and public holidays) times the contracted daily hours.
/// Actual hours sum the assigned shift durations over `days`, with
/// missing entries counting as [`ShiftValue::Off`], rounded half-up to
/// one decimal place.
///
/// # Errors
///
/// Propagates [`crate::error::EngineError::InvalidTime`] when an assigned
/// custom shift carries a malformed time string, and
/// [`crate::error::EngineError::InvalidYear`] when the dates fall outside
/// the supported Gregorian era.
///
/// # Example
///
/// ```
/// use roster_engine::calendar::generate_month_days;
/// use roster_engine::models::{DailyHours, Employee};
/// use roster_engine::scheduling::compute_employee_work_hours;
/// use rust_decimal::Decimal;
///
/// // June 2026 has 22 working days and no Bulgarian holidays.
/// let days = generate_month_days(2026, 6).unwrap();
/// let employee = Employee::new("emp_001", "Maria Petrova", DailyHours::Eight);
///
/// let stats = compute_employee_work_hours(&employee, &days).unwrap();
/// assert_eq!(stats.expected, Decimal::from(176));
/// assert_eq!(stats.actual, Decimal::ZERO);
/// assert!(!stats.is_overworked);
/// ```
pub fn compute_employee_work_hours(
    employee: &Employee,
    days: &[NaiveDate],
) -> EngineResult<WorkHourStats> {
    compute_employee_work_hours_with(&HolidayCalendar::default(), employee, days)
}

/// Computes work-hour statistics under an explicit holiday calendar.
pub fn compute_employee_work_hours_with(
    calendar: &HolidayCalendar,
    employee: &Employee,
    days: &[NaiveDate],
) -> EngineResult<WorkHourStats> {
    let expected = match employee.max_monthly_hours {
        Some(hours) => hours,
        None => {
            let working_days = count_working_days(calendar, days)?;
            Decimal::from(working_days as u64) * Decimal::from(employee.daily_hours.as_hours())
        }
    };

    let mut actual = Decimal::ZERO;
    for day in days {
        if let Some(shift) = employee.shift_on(*day) {
            actual += shift.duration_hours(employee.daily_hours)?;
        }
    }
    let actual = actual.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);

    Ok(WorkHourStats {
        expected,
        actual,
        is_overworked: actual > expected,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::generate_month_days;
    use crate::models::{DailyHours, ShiftValue};

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn custom(start: &str, end: &str) -> ShiftValue {
        ShiftValue::Custom {
            start_time: start.to_string(),
            end_time: end.to_string(),
        }
    }

    #[test]
    fn test_idle_employee_over_june_2026() {
        // 30 days, 22 working days, no holidays: expected 22 x 8 = 176.
        let days = generate_month_days(2026, 6).unwrap();
        let employee = Employee::new("emp_001", "Maria", DailyHours::Eight);

        let stats = compute_employee_work_hours(&employee, &days).unwrap();
        assert_eq!(stats.expected, Decimal::from(176));
        assert_eq!(stats.actual, Decimal::ZERO);
        assert!(!stats.is_overworked);
    }

    #[test]
    fn test_holidays_reduce_expected_hours() {
        // May 2026: 31 days, weekends 2,3,9,10,16,17,23,24,30,31 (10 days).
        // Holidays May 1 (Fri), May 6 (Wed); May 24 falls on a Sunday.
        // Working days = 31 - 10 - 2 = 19.
        let days = generate_month_days(2026, 5).unwrap();
        let employee = Employee::new("emp_001", "Maria", DailyHours::Six);

        let stats = compute_employee_work_hours(&employee, &days).unwrap();
        assert_eq!(stats.expected, Decimal::from(19 * 6));
    }

    #[test]
    fn test_max_monthly_hours_override_is_used_verbatim() {
        let days = generate_month_days(2026, 6).unwrap();
        let mut employee = Employee::new("emp_001", "Maria", DailyHours::Eight);
        employee.max_monthly_hours = Some(Decimal::from(100));

        let stats = compute_employee_work_hours(&employee, &days).unwrap();
        assert_eq!(stats.expected, Decimal::from(100));
    }

    #[test]
    fn test_overwork_flag_for_nightly_four_hour_contract() {
        // Mon 2026-06-01 through Fri 2026-06-05: 5 working days.
        // Expected = 5 x 4 = 20; actual = 5 nights x 8 = 40.
        let days: Vec<NaiveDate> = (1..=5)
            .map(|d| NaiveDate::from_ymd_opt(2026, 6, d).unwrap())
            .collect();
        let mut employee = Employee::new("emp_001", "Ivan", DailyHours::Four);
        for day in &days {
            employee.shifts.insert(*day, ShiftValue::Night);
        }

        let stats = compute_employee_work_hours(&employee, &days).unwrap();
        assert_eq!(stats.expected, Decimal::from(20));
        assert_eq!(stats.actual, Decimal::from(40));
        assert!(stats.is_overworked);
    }

    #[test]
    fn test_missing_entries_count_as_off() {
        let days = generate_month_days(2026, 6).unwrap();
        let mut employee = Employee::new("emp_001", "Maria", DailyHours::Eight);
        employee
            .shifts
            .insert(date("2026-06-01"), ShiftValue::Morning);

        let stats = compute_employee_work_hours(&employee, &days).unwrap();
        assert_eq!(stats.actual, Decimal::from(8));
    }

    #[test]
    fn test_shifts_outside_the_date_list_are_ignored() {
        let days = generate_month_days(2026, 6).unwrap();
        let mut employee = Employee::new("emp_001", "Maria", DailyHours::Eight);
        employee
            .shifts
            .insert(date("2026-07-01"), ShiftValue::Morning);

        let stats = compute_employee_work_hours(&employee, &days).unwrap();
        assert_eq!(stats.actual, Decimal::ZERO);
    }

    #[test]
    fn test_actual_rounds_half_up_to_one_decimal() {
        // 09:00-16:27 is 447 minutes = 7.45h; rounds up to 7.5.
        let days = vec![date("2026-06-01")];
        let mut employee = Employee::new("emp_001", "Maria", DailyHours::Eight);
        employee
            .shifts
            .insert(date("2026-06-01"), custom("09:00", "16:27"));

        let stats = compute_employee_work_hours(&employee, &days).unwrap();
        assert_eq!(stats.actual, Decimal::new(75, 1));
    }

    #[test]
    fn test_vacation_counts_flat_eight_even_for_four_hour_contract() {
        let days = vec![date("2026-06-01"), date("2026-06-02")];
        let mut employee = Employee::new("emp_001", "Ivan", DailyHours::Four);
        employee
            .shifts
            .insert(date("2026-06-01"), ShiftValue::Vacation);
        employee
            .shifts
            .insert(date("2026-06-02"), ShiftValue::SickLeave);

        let stats = compute_employee_work_hours(&employee, &days).unwrap();
        assert_eq!(stats.actual, Decimal::from(8));
    }

    #[test]
    fn test_empty_date_list() {
        let employee = Employee::new("emp_001", "Maria", DailyHours::Eight);
        let stats = compute_employee_work_hours(&employee, &[]).unwrap();
        assert_eq!(stats.expected, Decimal::ZERO);
        assert_eq!(stats.actual, Decimal::ZERO);
        assert!(!stats.is_overworked);
    }

    #[test]
    fn test_malformed_custom_time_propagates() {
        let days = vec![date("2026-06-01")];
        let mut employee = Employee::new("emp_001", "Maria", DailyHours::Eight);
        employee
            .shifts
            .insert(date("2026-06-01"), custom("nine", "17:00"));

        assert!(compute_employee_work_hours(&employee, &days).is_err());
    }

    #[test]
    fn test_out_of_era_year_is_rejected() {
        let days = vec![NaiveDate::from_ymd_opt(1500, 6, 1).unwrap()];
        let employee = Employee::new("emp_001", "Maria", DailyHours::Eight);

        assert!(compute_employee_work_hours(&employee, &days).is_err());
    }

    #[test]
    fn test_is_weekend() {
        assert!(is_weekend(date("2026-06-06"))); // Saturday
        assert!(is_weekend(date("2026-06-07"))); // Sunday
        assert!(!is_weekend(date("2026-06-08"))); // Monday
    }
}
