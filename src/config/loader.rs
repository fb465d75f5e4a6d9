//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the holiday
//! calendar and scheduling policy from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{HolidayCalendar, SchedulePolicy};

/// Loads and provides access to the engine configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory.
///
/// # Directory Structure
///
/// ```text
/// config/bg/
/// ├── calendar.yaml   # Holiday calendar (fixed dates + Easter offsets)
/// └── policy.yaml     # Auto-scheduler policy knobs
/// ```
///
/// # Example
///
/// ```no_run
/// use roster_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/bg").unwrap();
/// println!("Calendar: {}", loader.calendar().name);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    calendar: HolidayCalendar,
    policy: SchedulePolicy,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/bg")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let calendar = Self::load_yaml::<HolidayCalendar>(&path.join("calendar.yaml"))?;
        let policy = Self::load_yaml::<SchedulePolicy>(&path.join("policy.yaml"))?;

        Ok(Self { calendar, policy })
    }

    /// Creates a loader backed by the compiled-in defaults, with no file
    /// access.
    pub fn builtin() -> Self {
        Self {
            calendar: HolidayCalendar::default(),
            policy: SchedulePolicy::default(),
        }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded holiday calendar.
    pub fn calendar(&self) -> &HolidayCalendar {
        &self.calendar
    }

    /// Returns the loaded scheduling policy.
    pub fn policy(&self) -> &SchedulePolicy {
        &self.policy
    }
}
