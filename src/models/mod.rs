//! Core data models for the roster scheduling engine.
//!
//! This module contains all the domain models used throughout the engine.

mod employee;
mod shift;
mod work_hours;

pub use employee::{DailyHours, Employee};
pub use shift::{ShiftValue, TimeRange, parse_time_minutes};
pub use work_hours::WorkHourStats;
