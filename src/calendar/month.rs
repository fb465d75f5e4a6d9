//! Calendar month enumeration.

use chrono::{Datelike, NaiveDate};

use super::SUPPORTED_YEARS;
use crate::error::{EngineError, EngineResult};

/// Enumerates every day of a calendar month in ascending order.
///
/// The month is 1-based (January = 1). The result always has 28-31
/// entries, starts on the 1st and ends on the month's last day.
///
/// # Errors
///
/// Returns [`EngineError::InvalidMonth`] when `month` is outside 1-12,
/// and [`EngineError::InvalidYear`] when `year` is outside the supported
/// Gregorian era (1583-9999).
///
/// # Example
///
/// ```
/// use roster_engine::calendar::generate_month_days;
/// use chrono::NaiveDate;
///
/// let days = generate_month_days(2026, 6).unwrap();
/// assert_eq!(days.len(), 30);
/// assert_eq!(days[0], NaiveDate::from_ymd_opt(2026, 6, 1).unwrap());
/// assert_eq!(days[29], NaiveDate::from_ymd_opt(2026, 6, 30).unwrap());
/// ```
pub fn generate_month_days(year: i32, month: u32) -> EngineResult<Vec<NaiveDate>> {
    if !(1..=12).contains(&month) {
        return Err(EngineError::InvalidMonth { month });
    }
    if !SUPPORTED_YEARS.contains(&year) {
        return Err(EngineError::InvalidYear { year });
    }
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or(EngineError::InvalidYear { year })?;

    let mut days = Vec::with_capacity(31);
    let mut current = first;
    while current.month() == month {
        days.push(current);
        current = match current.succ_opt() {
            Some(next) => next,
            None => break, // end of the supported calendar range
        };
    }

    Ok(days)
}
