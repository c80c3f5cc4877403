//! Tournament settings model.
//!
//! Owned by the external settings collaborator and consumed read-only
//! by the scheduler. The engine trusts that the record has already
//! passed [`crate::validation::validate_input`].

use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use serde::{Deserialize, Serialize};

use super::Day;

/// Settings for a two-day tournament.
///
/// The tournament spans exactly two consecutive days starting at
/// `start_date`. Both days share the same daily playing window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TournamentSettings {
    /// Signup deadline. Must precede `start_date`.
    pub signup_deadline: NaiveDateTime,
    /// First tournament day (a Saturday).
    pub start_date: NaiveDate,
    /// Match duration in minutes (≥ 5).
    pub match_duration_min: u32,
    /// Number of fields available (≥ 1).
    pub num_fields: u32,
    /// Daily playing window start.
    pub day_start: NaiveTime,
    /// Daily playing window end. Must be after `day_start`.
    pub day_end: NaiveTime,
}

impl TournamentSettings {
    /// Creates settings with the club's standard defaults:
    /// 15-minute matches on 2 fields, hall time 10:30-18:00, signup
    /// closing at 17:00 two days before the start.
    pub fn new(start_date: NaiveDate) -> Self {
        let deadline_date = start_date - Days::new(2);
        Self {
            signup_deadline: deadline_date.and_time(NaiveTime::from_hms_opt(17, 0, 0).unwrap()),
            start_date,
            match_duration_min: 15,
            num_fields: 2,
            day_start: NaiveTime::from_hms_opt(10, 30, 0).unwrap(),
            day_end: NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
        }
    }

    /// Sets the signup deadline.
    pub fn with_signup_deadline(mut self, deadline: NaiveDateTime) -> Self {
        self.signup_deadline = deadline;
        self
    }

    /// Sets the match duration in minutes.
    pub fn with_match_duration(mut self, minutes: u32) -> Self {
        self.match_duration_min = minutes;
        self
    }

    /// Sets the number of fields.
    pub fn with_fields(mut self, num_fields: u32) -> Self {
        self.num_fields = num_fields;
        self
    }

    /// Sets the daily playing window.
    pub fn with_daily_window(mut self, start: NaiveTime, end: NaiveTime) -> Self {
        self.day_start = start;
        self.day_end = end;
        self
    }

    /// Match duration as a time delta.
    #[inline]
    pub fn match_duration(&self) -> TimeDelta {
        TimeDelta::minutes(i64::from(self.match_duration_min))
    }

    /// Calendar date of the given tournament day.
    pub fn date_of(&self, day: Day) -> NaiveDate {
        match day {
            Day::Saturday => self.start_date,
            Day::Sunday => self.start_date + Days::new(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn saturday() -> NaiveDate {
        // 2026-06-06 is a Saturday.
        NaiveDate::from_ymd_opt(2026, 6, 6).unwrap()
    }

    #[test]
    fn test_defaults() {
        let settings = TournamentSettings::new(saturday());
        assert_eq!(settings.match_duration_min, 15);
        assert_eq!(settings.num_fields, 2);
        assert_eq!(settings.day_start, NaiveTime::from_hms_opt(10, 30, 0).unwrap());
        assert_eq!(settings.day_end, NaiveTime::from_hms_opt(18, 0, 0).unwrap());
        // Deadline is the Thursday before, at 17:00.
        assert_eq!(
            settings.signup_deadline,
            NaiveDate::from_ymd_opt(2026, 6, 4)
                .unwrap()
                .and_time(NaiveTime::from_hms_opt(17, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_date_of_day() {
        let settings = TournamentSettings::new(saturday());
        assert_eq!(settings.date_of(Day::Saturday), saturday());
        assert_eq!(
            settings.date_of(Day::Sunday),
            NaiveDate::from_ymd_opt(2026, 6, 7).unwrap()
        );
    }

    #[test]
    fn test_builders() {
        let settings = TournamentSettings::new(saturday())
            .with_match_duration(12)
            .with_fields(3)
            .with_daily_window(
                NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
                NaiveTime::from_hms_opt(16, 0, 0).unwrap(),
            );
        assert_eq!(settings.match_duration(), TimeDelta::minutes(12));
        assert_eq!(settings.num_fields, 3);
        assert_eq!(settings.day_end, NaiveTime::from_hms_opt(16, 0, 0).unwrap());
    }
}
