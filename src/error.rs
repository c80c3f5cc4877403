//! Engine errors.
//!
//! Only configuration errors abort a run, and both are detected before
//! assignment begins. Capacity shortfalls are reported as warnings on
//! the resulting [`crate::models::Schedule`] instead.

use chrono::NaiveTime;
use thiserror::Error;

/// A configuration problem that makes scheduling impossible.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    /// No category produced a pool with at least 2 teams, so no match
    /// could be generated.
    #[error("no category has at least 2 registered teams; nothing to schedule")]
    NoSchedulableCategory,

    /// The daily playing window is too short for even one match.
    #[error("no time slots fit in the daily window {day_start}-{day_end}")]
    EmptySlotGrid {
        /// Configured daily window start.
        day_start: NaiveTime,
        /// Configured daily window end.
        day_end: NaiveTime,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ScheduleError::NoSchedulableCategory.to_string(),
            "no category has at least 2 registered teams; nothing to schedule"
        );

        let err = ScheduleError::EmptySlotGrid {
            day_start: NaiveTime::from_hms_opt(10, 30, 0).unwrap(),
            day_end: NaiveTime::from_hms_opt(10, 40, 0).unwrap(),
        };
        assert_eq!(
            err.to_string(),
            "no time slots fit in the daily window 10:30:00-10:40:00"
        );
    }
}
