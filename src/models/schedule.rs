//! Schedule (solution) model.
//!
//! A run produces an assignment table (slot → match) which is joined
//! into denormalized [`ScheduledMatch`] rows for the display
//! collaborator. Keeping placements out of the match and slot records
//! makes an assignment pass auditable from its table alone.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::{Category, Day, Match, MatchId, TimeSlot};

/// One row of the assignment table: a consumed slot and the match
/// placed in it.
///
/// `slot_index` refers to the slot list handed to the assigner. A slot
/// index appears at most once per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// Index into the generated slot list.
    pub slot_index: usize,
    /// Match placed in that slot.
    pub match_id: MatchId,
}

/// A match with its placement, ready for presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledMatch {
    /// Run-unique match identifier.
    pub match_id: MatchId,
    /// Category of both teams.
    pub category: Category,
    /// Pool index within the category.
    pub pool_index: usize,
    /// First team name.
    pub team_a: String,
    /// Second team name.
    pub team_b: String,
    /// Assigned tournament day.
    pub day: Day,
    /// Match start.
    pub start: NaiveDateTime,
    /// Match end.
    pub end: NaiveDateTime,
    /// Assigned field, 1-based.
    pub field: u32,
    /// Match duration in minutes.
    pub duration_min: u32,
}

impl ScheduledMatch {
    /// Joins a match with the slot it was placed in.
    pub fn from_placement(m: &Match, slot: &TimeSlot) -> Self {
        Self {
            match_id: m.id,
            category: m.category,
            pool_index: m.pool_index,
            team_a: m.team_a.clone(),
            team_b: m.team_b.clone(),
            day: slot.day,
            start: slot.start,
            end: slot.end,
            field: slot.field,
            duration_min: m.duration_min,
        }
    }

    /// Whether the named team plays in this match.
    pub fn involves(&self, team_name: &str) -> bool {
        self.team_a == team_name || self.team_b == team_name
    }
}

/// The outcome of a scheduling run.
///
/// `matches` is sorted chronologically (day, start, field). A nonempty
/// `unscheduled` or `warnings` list marks a partial schedule; the run
/// is still usable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Schedule {
    /// Placed matches in presentation order.
    pub matches: Vec<ScheduledMatch>,
    /// Matches no slot could legally host.
    pub unscheduled: Vec<Match>,
    /// Human-readable capacity warnings.
    pub warnings: Vec<String>,
}

impl Schedule {
    /// Number of placed matches.
    pub fn match_count(&self) -> usize {
        self.matches.len()
    }

    /// Whether every generated match found a slot.
    pub fn is_fully_scheduled(&self) -> bool {
        self.unscheduled.is_empty()
    }

    /// All placed matches involving the named team.
    pub fn matches_for_team(&self, team_name: &str) -> Vec<&ScheduledMatch> {
        self.matches
            .iter()
            .filter(|m| m.involves(team_name))
            .collect()
    }

    /// All placed matches on the given day.
    pub fn matches_on(&self, day: Day) -> Vec<&ScheduledMatch> {
        self.matches.iter().filter(|m| m.day == day).collect()
    }

    /// All placed matches in the given category.
    pub fn matches_in(&self, category: Category) -> Vec<&ScheduledMatch> {
        self.matches
            .iter()
            .filter(|m| m.category == category)
            .collect()
    }
}
