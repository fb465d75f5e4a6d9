//! Shift value model and related types.
//!
//! This module defines the [`ShiftValue`] tagged union for representing
//! a single day's shift assignment, together with the rules for deriving
//! a duration and a clock-time range from each variant.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::DailyHours;

/// Minutes in one hour, used when converting custom shift spans.
const MINUTES_PER_HOUR: i64 = 60;

/// A single day's shift assignment for one employee.
///
/// Named variants carry no payload; `Custom` carries its start and end
/// times as `HH:mm` strings. Every derivation (duration, time range,
/// display) pattern-matches exhaustively on the variant.
///
/// # Example
///
/// ```
/// use roster_engine::models::ShiftValue;
///
/// let shift = ShiftValue::Custom {
///     start_time: "09:00".to_string(),
///     end_time: "17:30".to_string(),
/// };
/// assert_eq!(shift.to_string(), "09:00 - 17:30");
/// assert_eq!(ShiftValue::Morning.to_string(), "Morning");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ShiftValue {
    /// Morning shift, 06:00-14:00.
    Morning,
    /// Evening shift, 14:00-22:00.
    Evening,
    /// Night shift, 22:00-06:00 the next day.
    Night,
    /// Designated rest day; no hours, no time range.
    Off,
    /// Sick leave; no hours, no time range.
    SickLeave,
    /// Vacation day; counts 8 hours flat, no time range.
    Vacation,
    /// Custom shift with explicit start and end times.
    Custom {
        /// Start time in `HH:mm` format.
        start_time: String,
        /// End time in `HH:mm` format, strictly after the start time.
        end_time: String,
    },
}

impl ShiftValue {
    /// Returns true if this shift occupies working time.
    ///
    /// `Off`, `SickLeave` and `Vacation` never participate in overlap
    /// detection or night-rest checks.
    pub fn is_working(&self) -> bool {
        !matches!(
            self,
            ShiftValue::Off | ShiftValue::SickLeave | ShiftValue::Vacation
        )
    }

    /// Calculates the duration of this shift in hours.
    ///
    /// Duration rules:
    /// - `Off` and `SickLeave` count 0 hours
    /// - `Vacation` counts 8 hours flat
    /// - `Night` counts 8 hours flat
    /// - `Morning` and `Evening` count the employee's contracted daily hours
    /// - `Custom` counts `(end - start)` minutes divided by 60; fractional
    ///   hours are permitted
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidTime`] if a `Custom` time string is not
    /// parseable as `HH:mm`.
    ///
    /// # Example
    ///
    /// ```
    /// use roster_engine::models::{DailyHours, ShiftValue};
    /// use rust_decimal::Decimal;
    ///
    /// assert_eq!(
    ///     ShiftValue::Morning.duration_hours(DailyHours::Six).unwrap(),
    ///     Decimal::from(6)
    /// );
    ///
    /// let custom = ShiftValue::Custom {
    ///     start_time: "09:00".to_string(),
    ///     end_time: "16:30".to_string(),
    /// };
    /// assert_eq!(
    ///     custom.duration_hours(DailyHours::Eight).unwrap(),
    ///     Decimal::new(75, 1) // 7.5 hours
    /// );
    /// ```
    pub fn duration_hours(&self, daily_hours: DailyHours) -> EngineResult<Decimal> {
        match self {
            ShiftValue::Off | ShiftValue::SickLeave => Ok(Decimal::ZERO),
            ShiftValue::Vacation | ShiftValue::Night => Ok(Decimal::from(8)),
            ShiftValue::Morning | ShiftValue::Evening => {
                Ok(Decimal::from(daily_hours.as_hours()))
            }
            ShiftValue::Custom {
                start_time,
                end_time,
            } => {
                let start = parse_time_minutes(start_time)?;
                let end = parse_time_minutes(end_time)?;
                Ok(Decimal::new(end - start, 0) / Decimal::new(MINUTES_PER_HOUR, 0))
            }
        }
    }

    /// Returns the clock-time range this shift occupies, if any.
    ///
    /// Ranges are expressed in minutes since midnight on a 0-1800 scale so
    /// the overnight `Night` shift (22:00-06:00 next day) remains a single
    /// numeric interval. Used only for overlap detection, never for
    /// duration accounting.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidTime`] if a `Custom` time string is not
    /// parseable as `HH:mm`.
    ///
    /// # Example
    ///
    /// ```
    /// use roster_engine::models::ShiftValue;
    ///
    /// let range = ShiftValue::Night.time_range().unwrap().unwrap();
    /// assert_eq!(range.start_minutes, 22 * 60);
    /// assert_eq!(range.end_minutes, 30 * 60);
    ///
    /// assert!(ShiftValue::Vacation.time_range().unwrap().is_none());
    /// ```
    pub fn time_range(&self) -> EngineResult<Option<TimeRange>> {
        match self {
            ShiftValue::Morning => Ok(Some(TimeRange::new(6 * 60, 14 * 60))),
            ShiftValue::Evening => Ok(Some(TimeRange::new(14 * 60, 22 * 60))),
            // 22:00 to 06:00 next day, mapped onto the extended scale.
            ShiftValue::Night => Ok(Some(TimeRange::new(22 * 60, 30 * 60))),
            ShiftValue::Off | ShiftValue::SickLeave | ShiftValue::Vacation => Ok(None),
            ShiftValue::Custom {
                start_time,
                end_time,
            } => {
                let start = parse_time_minutes(start_time)?;
                let end = parse_time_minutes(end_time)?;
                Ok(Some(TimeRange::new(start, end)))
            }
        }
    }

    /// Validates the invariant that a `Custom` shift ends strictly after it
    /// starts. Named variants are always valid.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidTime`] for a malformed time string or
    /// a custom range whose end is not after its start.
    pub fn validate(&self) -> EngineResult<()> {
        if let ShiftValue::Custom {
            start_time,
            end_time,
        } = self
        {
            let start = parse_time_minutes(start_time)?;
            let end = parse_time_minutes(end_time)?;
            if end <= start {
                return Err(EngineError::InvalidTime {
                    value: format!("{} - {}", start_time, end_time),
                });
            }
        }
        Ok(())
    }
}

impl fmt::Display for ShiftValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShiftValue::Morning => write!(f, "Morning"),
            ShiftValue::Evening => write!(f, "Evening"),
            ShiftValue::Night => write!(f, "Night"),
            ShiftValue::Off => write!(f, "Off"),
            ShiftValue::SickLeave => write!(f, "Sick Leave"),
            ShiftValue::Vacation => write!(f, "Vacation"),
            ShiftValue::Custom {
                start_time,
                end_time,
            } => write!(f, "{} - {}", start_time, end_time),
        }
    }
}

/// A half-open interval of minutes since midnight, on a 0-1800 scale.
///
/// The extended upper bound lets the overnight night shift stay a single
/// interval: 22:00-06:00 becomes `[1320, 1800)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    /// Inclusive start, in minutes since midnight.
    pub start_minutes: i64,
    /// Exclusive end, in minutes since midnight (may exceed 1440).
    pub end_minutes: i64,
}

impl TimeRange {
    /// Creates a range from start/end minute offsets.
    pub fn new(start_minutes: i64, end_minutes: i64) -> Self {
        Self {
            start_minutes,
            end_minutes,
        }
    }

    /// Returns true when two ranges share at least one minute.
    ///
    /// Uses the standard half-open interval test; empty or inverted ranges
    /// never overlap anything.
    pub fn overlaps(&self, other: &TimeRange) -> bool {
        self.start_minutes < other.end_minutes && other.start_minutes < self.end_minutes
    }
}

/// Parses an `HH:mm` time string into minutes since midnight.
///
/// Parsing is strict: exactly two colon-separated fields, hours 0-23,
/// minutes 0-59.
///
/// # Errors
///
/// Returns [`EngineError::InvalidTime`] for any other shape.
///
/// # Example
///
/// ```
/// use roster_engine::models::parse_time_minutes;
///
/// assert_eq!(parse_time_minutes("06:00").unwrap(), 360);
/// assert_eq!(parse_time_minutes("23:59").unwrap(), 1439);
/// assert!(parse_time_minutes("24:00").is_err());
/// assert!(parse_time_minutes("9am").is_err());
/// ```
pub fn parse_time_minutes(value: &str) -> EngineResult<i64> {
    let invalid = || EngineError::InvalidTime {
        value: value.to_string(),
    };

    let (hours_str, minutes_str) = value.split_once(':').ok_or_else(invalid)?;
    let hours: i64 = hours_str.parse().map_err(|_| invalid())?;
    let minutes: i64 = minutes_str.parse().map_err(|_| invalid())?;

    if !(0..24).contains(&hours) || !(0..60).contains(&minutes) {
        return Err(invalid());
    }

    Ok(hours * 60 + minutes)
}
