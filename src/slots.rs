//! Time-slot generation.
//!
//! Enumerates every (day, field, start time) window the tournament
//! settings allow. Slots come out day-major, then field-major, then by
//! time; the assigner imposes chronological order itself.
//!
//! # Algorithm
//!
//! For each of the two days and each field 1..=num_fields: start a
//! cursor at the daily window start, emit a slot of match length while
//! it still ends inside the window, and advance the cursor by match
//! duration plus the 5-minute break buffer.

use chrono::TimeDelta;
use log::debug;

use crate::models::{Day, TimeSlot, TournamentSettings, BREAK_BUFFER_MIN};

/// Enumerates all candidate slots for both tournament days.
///
/// Returns an empty list when the daily window cannot host even one
/// match; the caller treats that as a configuration error.
pub fn generate_slots(settings: &TournamentSettings) -> Vec<TimeSlot> {
    let duration = settings.match_duration();
    let step = duration + TimeDelta::minutes(BREAK_BUFFER_MIN);
    let mut slots = Vec::new();

    for day in Day::ALL {
        let date = settings.date_of(day);
        let day_start = date.and_time(settings.day_start);
        let day_end = date.and_time(settings.day_end);

        for field in 1..=settings.num_fields {
            let mut cursor = day_start;
            while cursor + duration <= day_end {
                slots.push(TimeSlot::new(day, cursor, cursor + duration, field));
                cursor += step;
            }
        }
    }

    debug!(
        "generated {} slots ({} fields, {} min matches)",
        slots.len(),
        settings.num_fields,
        settings.match_duration_min
    );
    slots
}
