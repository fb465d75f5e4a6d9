//! Calendar utilities: month-day enumeration and public holidays.

use std::ops::RangeInclusive;

mod holidays;
mod month;

/// Years the engine accepts: the Gregorian calendar era. The Easter
/// formula is not defined before 1583, and the arithmetic breaks down
/// for years far outside it.
pub(crate) const SUPPORTED_YEARS: RangeInclusive<i32> = 1583..=9999;

pub use holidays::{easter_sunday, get_public_holidays, holidays_for_calendar};
pub use month::generate_month_days;
