//! Match (pairing) model.
//!
//! A match is an unordered pairing of two teams from the same pool.
//! Matches are immutable records: placement lives in the assignment
//! table, never on the match itself.

use serde::{Deserialize, Serialize};

use super::Category;

/// Identifier of a match, unique across one scheduling run.
pub type MatchId = u32;

/// A team-vs-team match awaiting (or denied) a slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    /// Run-unique identifier, assigned monotonically across all
    /// categories and pools.
    pub id: MatchId,
    /// Category both teams belong to.
    pub category: Category,
    /// Index of the pool within its category.
    pub pool_index: usize,
    /// First team name.
    pub team_a: String,
    /// Second team name.
    pub team_b: String,
    /// Match duration in minutes, copied from the settings.
    pub duration_min: u32,
}

impl Match {
    /// Creates a new match.
    pub fn new(
        id: MatchId,
        category: Category,
        pool_index: usize,
        team_a: impl Into<String>,
        team_b: impl Into<String>,
        duration_min: u32,
    ) -> Self {
        Self {
            id,
            category,
            pool_index,
            team_a: team_a.into(),
            team_b: team_b.into(),
            duration_min,
        }
    }

    /// Whether the named team plays in this match.
    pub fn involves(&self, team_name: &str) -> bool {
        self.team_a == team_name || self.team_b == team_name
    }
}
