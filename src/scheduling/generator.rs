//! Monthly schedule generation.
//!
//! Produces a draft roster that balances morning and evening coverage,
//! rotates rest days week by week, and evens out accumulated hours
//! across the team. Night shifts are never assigned automatically; they
//! are left for manual planning together with the rest rules enforced by
//! [`super::detect_all_shift_conflicts`].
//!
//! Randomness drives the rest-day rotation and hour tie-breaking. Every
//! entry point bottoms out in a seeded generator so a run can be
//! reproduced exactly.

use std::collections::{BTreeMap, HashMap};

use chrono::{Datelike, NaiveDate};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::config::{HolidayCalendar, SchedulePolicy};
use crate::error::{EngineError, EngineResult};
use crate::models::{DailyHours, Employee, ShiftValue};
use crate::scheduling::work_hours::{count_working_days, is_weekend};

/// Generated assignments: employee id to date to shift.
pub type ScheduleAssignment = BTreeMap<String, BTreeMap<NaiveDate, ShiftValue>>;

/// Generates a schedule with a seed drawn from the thread RNG.
///
/// See [`auto_generate_schedule_seeded`] for the rules.
///
/// # Errors
///
/// Returns [`EngineError::EmptyRoster`] when `employees` is empty.
pub fn auto_generate_schedule(
    employees: &[Employee],
    days: &[NaiveDate],
) -> EngineResult<ScheduleAssignment> {
    auto_generate_schedule_seeded(employees, days, rand::random())
}

/// Generates a schedule deterministically from an explicit seed.
///
/// The roster is built week by week over the ISO weeks covered by
/// `days`:
///
/// - Each employee gets rest days per week length (two for five or more
///   days, one for three or four, none below that), rotated randomly
///   with at most `employees.len() - 2` resting on any single day.
/// - Four-hour employees always work the evening shift.
/// - Weekend mornings are staffed by available headcount (three for
///   nine-plus, two for four-plus, otherwise one); weekday mornings take
///   half of the available standard employees, rounded up.
/// - Everyone else goes to the evening shift, and employees with fewer
///   accumulated hours are picked for mornings first.
///
/// # Errors
///
/// Returns [`EngineError::EmptyRoster`] when `employees` is empty.
///
/// # Example
///
/// ```
/// use roster_engine::calendar::generate_month_days;
/// use roster_engine::models::{DailyHours, Employee};
/// use roster_engine::scheduling::auto_generate_schedule_seeded;
///
/// let days = generate_month_days(2026, 6).unwrap();
/// let employees = vec![
///     Employee::new("emp_001", "Maria", DailyHours::Eight),
///     Employee::new("emp_002", "Ivan", DailyHours::Eight),
///     Employee::new("emp_003", "Elena", DailyHours::Four),
/// ];
///
/// let schedule = auto_generate_schedule_seeded(&employees, &days, 7).unwrap();
/// assert_eq!(schedule["emp_001"].len(), days.len());
/// ```
pub fn auto_generate_schedule_seeded(
    employees: &[Employee],
    days: &[NaiveDate],
    seed: u64,
) -> EngineResult<ScheduleAssignment> {
    auto_generate_schedule_with(
        &HolidayCalendar::default(),
        &SchedulePolicy::default(),
        employees,
        days,
        seed,
    )
}

/// Generates a schedule under an explicit calendar and policy.
pub fn auto_generate_schedule_with(
    calendar: &HolidayCalendar,
    policy: &SchedulePolicy,
    employees: &[Employee],
    days: &[NaiveDate],
    seed: u64,
) -> EngineResult<ScheduleAssignment> {
    if employees.is_empty() {
        return Err(EngineError::EmptyRoster);
    }
    let mut rng = StdRng::seed_from_u64(seed);

    let mut schedule: ScheduleAssignment = employees
        .iter()
        .map(|emp| (emp.id.clone(), BTreeMap::new()))
        .collect();

    let working_days = count_working_days(calendar, days)?;
    let mut accumulated: HashMap<&str, u32> = HashMap::new();
    for emp in employees {
        accumulated.insert(&emp.id, 0);
        tracing::debug!(
            employee = %emp.id,
            expected_hours = working_days as u32 * emp.daily_hours.as_hours(),
            "roster target"
        );
    }

    // ISO weeks keep weekends at the end of each group and handle the
    // year rollover of early-January days.
    let mut week_groups: BTreeMap<(i32, u32), Vec<NaiveDate>> = BTreeMap::new();
    for &day in days {
        let week = day.iso_week();
        week_groups
            .entry((week.year(), week.week()))
            .or_default()
            .push(day);
    }

    let max_rest_per_day = employees.len().saturating_sub(2);

    for week_days in week_groups.values() {
        // Least accumulated hours first; ties broken randomly by the
        // shuffle ahead of the stable sort.
        let mut ordered: Vec<&Employee> = employees.iter().collect();
        ordered.shuffle(&mut rng);
        ordered.sort_by_key(|emp| accumulated[emp.id.as_str()]);

        let target_rest = policy.rest_days_for_week(week_days.len());
        let mut rest_days: HashMap<&str, Vec<NaiveDate>> = HashMap::new();
        let mut daily_rest_counts: HashMap<NaiveDate, usize> =
            week_days.iter().map(|&d| (d, 0)).collect();

        for emp in &ordered {
            let assigned = rest_days.entry(&emp.id).or_default();
            let mut pool = week_days.clone();
            pool.shuffle(&mut rng);

            for day in pool {
                if assigned.len() >= target_rest {
                    break;
                }
                let count = daily_rest_counts.entry(day).or_insert(0);
                if *count < max_rest_per_day {
                    assigned.push(day);
                    *count += 1;
                }
            }
        }

        for &day in week_days {
            let resting =
                |id: &str| rest_days.get(id).is_some_and(|ds| ds.contains(&day));

            for emp in &ordered {
                if resting(&emp.id) {
                    if let Some(cells) = schedule.get_mut(&emp.id) {
                        cells.insert(day, ShiftValue::Off);
                    }
                }
            }

            let mut available: Vec<&Employee> = ordered
                .iter()
                .copied()
                .filter(|emp| !resting(&emp.id))
                .collect();

            // Never leave a day uncovered: pull the lowest-hours
            // employee back off rest if everyone landed on it.
            if available.is_empty() {
                let emergency = ordered[0];
                if let Some(assigned) = rest_days.get_mut(emergency.id.as_str()) {
                    assigned.retain(|&d| d != day);
                }
                if let Some(cells) = schedule.get_mut(&emergency.id) {
                    cells.remove(&day);
                }
                available = vec![emergency];
            }

            let (four_hour, standard): (Vec<&Employee>, Vec<&Employee>) = available
                .into_iter()
                .partition(|emp| emp.daily_hours == DailyHours::Four);

            // Four-hour contracts cover evenings only.
            for emp in &four_hour {
                if let Some(cells) = schedule.get_mut(&emp.id) {
                    cells.insert(day, ShiftValue::Evening);
                }
                *accumulated.entry(&emp.id).or_insert(0) += emp.daily_hours.as_hours();
            }

            let target_morning = if is_weekend(day) {
                policy.weekend_morning_target(standard.len() + four_hour.len())
            } else {
                standard.len().div_ceil(2)
            };

            for (index, emp) in standard.iter().enumerate() {
                let shift = if index < target_morning {
                    ShiftValue::Morning
                } else {
                    ShiftValue::Evening
                };
                if let Some(cells) = schedule.get_mut(&emp.id) {
                    cells.insert(day, shift);
                }
                *accumulated.entry(&emp.id).or_insert(0) += emp.daily_hours.as_hours();
            }
        }
    }

    Ok(schedule)
}
