//! Error types for the roster scheduling engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during scheduling.

use thiserror::Error;

/// The main error type for the roster scheduling engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use roster_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A time string could not be parsed as `HH:mm`.
    #[error("Invalid time '{value}': expected HH:mm")]
    InvalidTime {
        /// The value that failed to parse.
        value: String,
    },

    /// A month number was outside the 1-12 range.
    #[error("Invalid month: {month} (expected 1-12)")]
    InvalidMonth {
        /// The month that was rejected.
        month: u32,
    },

    /// A year was outside the supported Gregorian era.
    #[error("Invalid year: {year} (expected 1583-9999)")]
    InvalidYear {
        /// The year that was rejected.
        year: i32,
    },

    /// An empty roster was passed to the auto-scheduler.
    #[error("Cannot generate a schedule for an empty roster")]
    EmptyRoster,
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
