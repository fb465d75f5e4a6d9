//! Configuration loading and management for the scheduling engine.
//!
//! This module provides functionality to load the holiday calendar and
//! auto-scheduler policy from YAML files, with compiled-in defaults for
//! the pure-function API.
//!
//! # Example
//!
//! ```no_run
//! use roster_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/bg").unwrap();
//! println!("Loaded calendar: {}", config.calendar().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{FixedHoliday, HolidayCalendar, MorningTarget, SchedulePolicy};
