//! Public holiday computation.
//!
//! Holidays come from two sources: fixed-date entries in a
//! [`HolidayCalendar`] and a movable set derived from Easter via the
//! Meeus/Jones/Butcher algorithm. No external almanac is consulted; the
//! same year always yields the same set.

use std::collections::BTreeSet;

use chrono::{Duration, NaiveDate};

use super::SUPPORTED_YEARS;
use crate::config::HolidayCalendar;
use crate::error::{EngineError, EngineResult};

/// Computes Gregorian Easter Sunday for the given year.
///
/// Implements the Meeus/Jones/Butcher algorithm in pure modular
/// arithmetic over the Gregorian calendar.
///
/// # Errors
///
/// Returns [`EngineError::InvalidYear`] for years outside the Gregorian
/// era (1583-9999), where the formula does not apply.
///
/// # Example
///
/// ```
/// use roster_engine::calendar::easter_sunday;
/// use chrono::NaiveDate;
///
/// assert_eq!(
///     easter_sunday(2024).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 3, 31).unwrap()
/// );
/// assert_eq!(
///     easter_sunday(2025).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 4, 20).unwrap()
/// );
/// assert!(easter_sunday(-3996).is_err());
/// ```
pub fn easter_sunday(year: i32) -> EngineResult<NaiveDate> {
    if !SUPPORTED_YEARS.contains(&year) {
        return Err(EngineError::InvalidYear { year });
    }

    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;

    // The formula lands in March or April for every year in range.
    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
        .ok_or(EngineError::InvalidYear { year })
}

/// Computes the public holidays for a year under the given calendar.
///
/// Fixed entries that do not form a valid date in the given year (e.g. a
/// February 29 entry in a non-leap year) are skipped. Easter-relative
/// entries are offsets in days from Easter Sunday.
///
/// # Errors
///
/// Returns [`EngineError::InvalidYear`] for years outside the Gregorian
/// era (1583-9999).
pub fn holidays_for_calendar(
    calendar: &HolidayCalendar,
    year: i32,
) -> EngineResult<BTreeSet<NaiveDate>> {
    let easter = easter_sunday(year)?;

    let mut holidays: BTreeSet<NaiveDate> = calendar
        .fixed
        .iter()
        .filter_map(|h| NaiveDate::from_ymd_opt(year, h.month, h.day))
        .collect();

    holidays.extend(
        calendar
            .easter_offsets
            .iter()
            .map(|&offset| easter + Duration::days(offset)),
    );

    Ok(holidays)
}

/// Returns the Bulgarian public holidays for a year.
///
/// Ten fixed-date holidays plus Good Friday, Holy Saturday, Easter Sunday
/// and Easter Monday. Pure function; repeated calls with the same year
/// return the same set.
///
/// # Errors
///
/// Returns [`EngineError::InvalidYear`] for years outside the Gregorian
/// era (1583-9999).
///
/// # Example
///
/// ```
/// use roster_engine::calendar::get_public_holidays;
/// use chrono::NaiveDate;
///
/// let holidays = get_public_holidays(2024).unwrap();
/// assert_eq!(holidays.len(), 14);
/// assert!(holidays.contains(&NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()));
/// ```
pub fn get_public_holidays(year: i32) -> EngineResult<BTreeSet<NaiveDate>> {
    holidays_for_calendar(&HolidayCalendar::default(), year)
}
