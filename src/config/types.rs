//! Configuration types for the scheduling engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files. Both structures carry
//! compiled-in defaults so the engine's pure functions work without any
//! file on disk.

use serde::Deserialize;

/// A holiday that falls on the same month/day every year.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FixedHoliday {
    /// Calendar month (1-12).
    pub month: u32,
    /// Day of the month.
    pub day: u32,
    /// Human-readable name of the holiday.
    pub name: String,
}

/// A national holiday calendar: fixed-date holidays plus offsets (in days)
/// from Easter Sunday for the movable feast block.
///
/// The default is the Bulgarian calendar: ten fixed holidays and the
/// Good Friday through Easter Monday block.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HolidayCalendar {
    /// Name of the calendar (e.g. "Bulgaria").
    pub name: String,
    /// Fixed-date holidays.
    pub fixed: Vec<FixedHoliday>,
    /// Day offsets from Easter Sunday (-2 = Good Friday, 1 = Easter Monday).
    #[serde(default = "default_easter_offsets")]
    pub easter_offsets: Vec<i64>,
}

fn default_easter_offsets() -> Vec<i64> {
    vec![-2, -1, 0, 1]
}

impl Default for HolidayCalendar {
    fn default() -> Self {
        let fixed = [
            (1, 1, "New Year's Day"),
            (3, 3, "Liberation Day"),
            (5, 1, "Labour Day"),
            (5, 6, "St. George's Day"),
            (5, 24, "Day of Slavonic Alphabet and Culture"),
            (9, 6, "Unification Day"),
            (9, 22, "Independence Day"),
            (12, 24, "Christmas Eve"),
            (12, 25, "Christmas Day"),
            (12, 26, "Second Day of Christmas"),
        ]
        .into_iter()
        .map(|(month, day, name)| FixedHoliday {
            month,
            day,
            name: name.to_string(),
        })
        .collect();

        Self {
            name: "Bulgaria".to_string(),
            fixed,
            easter_offsets: default_easter_offsets(),
        }
    }
}

/// A weekend morning-coverage target for a minimum team size.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MorningTarget {
    /// Smallest available headcount this target applies to.
    pub min_team_size: usize,
    /// Number of morning shifts to fill.
    pub morning_shifts: usize,
}

/// Tunable rules for the auto-scheduler.
///
/// Defaults reproduce the standard policy: two rest days for a full week,
/// one for a 3-4 day partial week, and weekend morning targets of 3/2/1
/// for teams of 9+/4-8/fewer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SchedulePolicy {
    /// Week length (in days) from which the full rest-day count applies.
    pub full_week_min_days: usize,
    /// Rest days per employee in a full week.
    pub full_week_rest_days: usize,
    /// Week length (in days) from which the partial rest-day count applies.
    pub partial_week_min_days: usize,
    /// Rest days per employee in a partial week.
    pub partial_week_rest_days: usize,
    /// Weekend morning targets, checked from the largest team size down.
    pub weekend_morning_targets: Vec<MorningTarget>,
}

impl Default for SchedulePolicy {
    fn default() -> Self {
        Self {
            full_week_min_days: 5,
            full_week_rest_days: 2,
            partial_week_min_days: 3,
            partial_week_rest_days: 1,
            weekend_morning_targets: vec![
                MorningTarget {
                    min_team_size: 9,
                    morning_shifts: 3,
                },
                MorningTarget {
                    min_team_size: 4,
                    morning_shifts: 2,
                },
                MorningTarget {
                    min_team_size: 0,
                    morning_shifts: 1,
                },
            ],
        }
    }
}

impl SchedulePolicy {
    /// Returns the rest-day target for a week of the given length.
    pub fn rest_days_for_week(&self, week_days: usize) -> usize {
        if week_days >= self.full_week_min_days {
            self.full_week_rest_days
        } else if week_days >= self.partial_week_min_days {
            self.partial_week_rest_days
        } else {
            0
        }
    }

    /// Returns the weekend morning-shift target for the given available
    /// headcount.
    ///
    /// Targets are scanned from the largest `min_team_size` down; the
    /// first match wins. An empty target list means one morning shift.
    pub fn weekend_morning_target(&self, available: usize) -> usize {
        let mut targets: Vec<&MorningTarget> = self.weekend_morning_targets.iter().collect();
        targets.sort_by(|a, b| b.min_team_size.cmp(&a.min_team_size));
        targets
            .iter()
            .find(|t| available >= t.min_team_size)
            .map(|t| t.morning_shifts)
            .unwrap_or(1)
    }
}
