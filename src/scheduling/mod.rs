//! Scheduling engine: work-hour accounting, conflict detection and
//! automatic roster generation.
//!
//! All entry points are pure functions over employee snapshots and date
//! lists; the generator additionally takes a seed so runs can be
//! reproduced.

mod conflicts;
mod generator;
mod work_hours;

pub use conflicts::{conflict_key, detect_all_shift_conflicts, detect_shift_conflict};
pub use generator::{
    ScheduleAssignment, auto_generate_schedule, auto_generate_schedule_seeded,
    auto_generate_schedule_with,
};
pub use work_hours::{compute_employee_work_hours, compute_employee_work_hours_with};
