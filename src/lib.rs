//! Scheduling engine for monthly work-shift rosters
//!
//! This crate generates complete monthly shift assignments for a roster,
//! computes expected and actual work hours against the Bulgarian public
//! holiday calendar, and detects shift conflicts such as overlapping
//! assignments and missing rest after night shifts.

#![warn(missing_docs)]

pub mod api;
pub mod calendar;
pub mod config;
pub mod error;
pub mod models;
pub mod scheduling;
