//! Post-run diagnostics and presentation ordering.
//!
//! Joins the assignment table back onto the match and slot lists,
//! splits placed from unplaced matches, and accumulates advisory
//! warnings. Warnings never abort a run; a partial schedule is still
//! handed out.

use std::collections::HashMap;

use log::warn;

use crate::models::{Assignment, Match, MatchId, Schedule, ScheduledMatch, TimeSlot};

/// Minimum matches each team should get before a warning is raised.
pub const MIN_MATCHES_PER_TEAM: u32 = 3;

/// Builds the final [`Schedule`] from an assignment run.
///
/// Emits one warning when matches were left unplaced and one when
/// teams fall below [`MIN_MATCHES_PER_TEAM`] (counted over every team
/// named by any generated match). Placed matches are sorted by day,
/// then start time, then field.
pub fn finalize(matches: Vec<Match>, slots: &[TimeSlot], assignments: &[Assignment]) -> Schedule {
    let slot_for: HashMap<MatchId, usize> = assignments
        .iter()
        .map(|a| (a.match_id, a.slot_index))
        .collect();

    // Matches-played per team, including teams that never got a slot.
    let mut played: HashMap<&str, u32> = HashMap::new();
    for m in &matches {
        let placed = u32::from(slot_for.contains_key(&m.id));
        *played.entry(m.team_a.as_str()).or_insert(0) += placed;
        *played.entry(m.team_b.as_str()).or_insert(0) += placed;
    }
    let teams_below_min = played
        .values()
        .filter(|&&count| count < MIN_MATCHES_PER_TEAM)
        .count();

    let mut warnings = Vec::new();
    let unplaced_count = matches.len() - slot_for.len();
    if unplaced_count > 0 {
        warnings.push(format!(
            "{unplaced_count} matches could not be placed due to time, field, or break limits"
        ));
    }
    if teams_below_min > 0 {
        warnings.push(format!(
            "{teams_below_min} teams have fewer than {MIN_MATCHES_PER_TEAM} matches"
        ));
    }
    for w in &warnings {
        warn!("{w}");
    }

    let mut scheduled = Vec::new();
    let mut unscheduled = Vec::new();
    for m in matches {
        match slot_for.get(&m.id) {
            Some(&si) => scheduled.push(ScheduledMatch::from_placement(&m, &slots[si])),
            None => unscheduled.push(m),
        }
    }
    scheduled.sort_by_key(|m| (m.day, m.start, m.field));

    Schedule {
        matches: scheduled,
        unscheduled,
        warnings,
    }
}
