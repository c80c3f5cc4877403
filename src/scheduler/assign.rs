//! Greedy first-fit match assignment.
//!
//! # Algorithm
//!
//! 1. Shuffle the match order once (fairness, not correctness).
//! 2. Sort slot indices chronologically (start time, then field).
//! 3. For each slot, place the first still-open match in shuffled
//!    order whose both teams satisfy every constraint, then move on.
//!
//! Single pass, no backtracking: an early placement can block a later,
//! better one, so a feasible schedule is not guaranteed even when one
//! exists. The shuffled order is pre-split into per-day eligibility
//! lists so a slot never rescans matches whose category forbids its
//! day; observable behavior is the same as the full scan.
//!
//! # Constraints, in check order
//!
//! 1. Category-day: the match's category must allow the slot's day.
//! 2. Team-day: a team with a locked day only plays that day.
//! 3. Cap: neither team may exceed [`MAX_MATCHES_PER_TEAM`].
//! 4. Break: a team that has played is unavailable until its last
//!    match's end plus match duration plus the 5-minute buffer.
//! 5. Play window: from a team's first start to the candidate slot's
//!    end must stay within 4 hours.

use std::collections::HashMap;

use chrono::{NaiveDateTime, TimeDelta};
use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::{Assignment, Day, Match, TimeSlot, BREAK_BUFFER_MIN};

/// Maximum matches any team may play in one run.
pub const MAX_MATCHES_PER_TEAM: u32 = 5;

/// Maximum elapsed time from a team's first match start to its last
/// match end, in minutes.
const MAX_PLAY_WINDOW_MIN: i64 = 4 * 60;

/// Per-team bookkeeping for one assignment pass.
///
/// Created lazily when a team's first match is placed; a fresh team is
/// unconstrained apart from the category-day rule.
#[derive(Debug, Default)]
struct TeamState {
    first_start: Option<NaiveDateTime>,
    last_end: Option<NaiveDateTime>,
    played: u32,
    day: Option<Day>,
}

impl TeamState {
    /// Checks constraints 2-5 for one team against a candidate slot.
    fn admits(&self, slot: &TimeSlot, duration: TimeDelta) -> bool {
        if self.day.is_some_and(|d| d != slot.day) {
            return false;
        }
        if self.played >= MAX_MATCHES_PER_TEAM {
            return false;
        }
        if let Some(last_end) = self.last_end {
            let available_at = last_end + duration + TimeDelta::minutes(BREAK_BUFFER_MIN);
            if slot.start < available_at {
                return false;
            }
        }
        if let Some(first_start) = self.first_start {
            if slot.end - first_start > TimeDelta::minutes(MAX_PLAY_WINDOW_MIN) {
                return false;
            }
        }
        true
    }

    /// Records a placement. The day locks here, at the moment a match
    /// is actually scheduled, never earlier.
    fn record(&mut self, slot: &TimeSlot) {
        self.played += 1;
        self.first_start.get_or_insert(slot.start);
        self.day.get_or_insert(slot.day);
        self.last_end = Some(slot.end);
    }
}

/// Assigns matches to slots, first-fit greedy, and returns the
/// assignment table.
///
/// Neither input list is mutated; a slot is consumed iff its index
/// appears in the table. Matches left out of the table stay
/// unscheduled for this run.
pub fn assign<R: Rng>(matches: &[Match], slots: &[TimeSlot], rng: &mut R) -> Vec<Assignment> {
    let mut slot_order: Vec<usize> = (0..slots.len()).collect();
    slot_order.sort_by_key(|&i| (slots[i].start, slots[i].field));

    let mut match_order: Vec<usize> = (0..matches.len()).collect();
    match_order.shuffle(rng);

    // Shuffled order, filtered per day by the category-day rule.
    let mut eligible: [Vec<usize>; 2] = [Vec::new(), Vec::new()];
    for &mi in &match_order {
        for day in Day::ALL {
            if matches[mi].category.allows(day) {
                eligible[day as usize].push(mi);
            }
        }
    }

    let mut assignments: Vec<Assignment> = Vec::new();
    let mut placed = vec![false; matches.len()];
    let mut states: HashMap<String, TeamState> = HashMap::new();

    for &si in &slot_order {
        let slot = &slots[si];
        for &mi in &eligible[slot.day as usize] {
            if placed[mi] {
                continue;
            }
            let m = &matches[mi];
            let duration = TimeDelta::minutes(i64::from(m.duration_min));

            let fits = |name: &str| states.get(name).is_none_or(|s| s.admits(slot, duration));
            if !fits(&m.team_a) || !fits(&m.team_b) {
                continue;
            }

            assignments.push(Assignment {
                slot_index: si,
                match_id: m.id,
            });
            placed[mi] = true;
            states.entry(m.team_a.clone()).or_default().record(slot);
            states.entry(m.team_b.clone()).or_default().record(slot);
            break;
        }
    }

    debug!(
        "placed {} of {} matches across {} slots",
        assignments.len(),
        matches.len(),
        slots.len()
    );
    assignments
}
