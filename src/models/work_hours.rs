//! Work-hour statistics model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Expected versus actual work hours for one employee over a date range.
///
/// Derived on demand from the employee's shift snapshot; never persisted
/// by the engine.
///
/// # Example
///
/// ```
/// use roster_engine::models::WorkHourStats;
/// use rust_decimal::Decimal;
///
/// let stats = WorkHourStats {
///     expected: Decimal::from(176),
///     actual: Decimal::new(1825, 1), // 182.5
///     is_overworked: true,
/// };
/// assert!(stats.is_overworked);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkHourStats {
    /// Contracted hours for the period (working days x daily hours, or the
    /// employee's manual override).
    pub expected: Decimal,
    /// Sum of assigned shift durations, rounded to one decimal place.
    pub actual: Decimal,
    /// True when actual hours exceed expected hours.
    pub is_overworked: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_work_hour_stats_serialization() {
        let stats = WorkHourStats {
            expected: Decimal::from(160),
            actual: Decimal::new(1205, 1),
            is_overworked: false,
        };

        let json = serde_json::to_string(&stats).unwrap();
        assert!(json.contains("\"expected\":\"160\""));
        assert!(json.contains("\"actual\":\"120.5\""));
        assert!(json.contains("\"is_overworked\":false"));

        let deserialized: WorkHourStats = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, stats);
    }
}
