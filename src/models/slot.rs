//! Tournament day and time-slot models.
//!
//! A slot is a (day, field, start time) window capable of hosting one
//! match. Slots are immutable records; consumption is tracked by the
//! assignment table, not by a flag on the slot itself.

use std::fmt;

use chrono::{NaiveDateTime, TimeDelta};
use serde::{Deserialize, Serialize};

/// Required gap between the end of one match and the start of a team's
/// next match, in minutes.
pub const BREAK_BUFFER_MIN: i64 = 5;

/// One of the two tournament days.
///
/// Day 1 is the configured start date, day 2 the following day. The
/// tournament always runs Saturday and Sunday; Display uses the
/// Norwegian labels from the published programme.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Day {
    /// Day 1.
    Saturday,
    /// Day 2.
    Sunday,
}

impl Day {
    /// Both days, in order.
    pub const ALL: [Day; 2] = [Day::Saturday, Day::Sunday];
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Day::Saturday => "Lørdag",
            Day::Sunday => "Søndag",
        };
        f.write_str(label)
    }
}

/// A candidate (day, field, time) window for one match.
///
/// `end` is always `start` + match duration; the break buffer lives
/// between slots, not inside them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Tournament day this slot belongs to.
    pub day: Day,
    /// Slot start.
    pub start: NaiveDateTime,
    /// Slot end (start + match duration).
    pub end: NaiveDateTime,
    /// Field number, 1-based.
    pub field: u32,
}

impl TimeSlot {
    /// Creates a new slot.
    pub fn new(day: Day, start: NaiveDateTime, end: NaiveDateTime, field: u32) -> Self {
        Self {
            day,
            start,
            end,
            field,
        }
    }

    /// Slot length.
    #[inline]
    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    #[test]
    fn test_day_ordering_and_labels() {
        assert!(Day::Saturday < Day::Sunday);
        assert_eq!(Day::Saturday.to_string(), "Lørdag");
        assert_eq!(Day::Sunday.to_string(), "Søndag");
    }

    #[test]
    fn test_slot_duration() {
        let date = NaiveDate::from_ymd_opt(2026, 6, 6).unwrap();
        let start = date.and_time(NaiveTime::from_hms_opt(10, 30, 0).unwrap());
        let end = start + TimeDelta::minutes(15);
        let slot = TimeSlot::new(Day::Saturday, start, end, 1);
        assert_eq!(slot.duration(), TimeDelta::minutes(15));
    }
}
