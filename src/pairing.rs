//! Round-robin pairing.
//!
//! Turns each pool into the full set of unordered team pairs (every
//! team meets every other team exactly once) and materializes them as
//! [`Match`] records with run-unique identifiers.

use crate::models::{Category, Match, MatchId, Team};

/// All unordered pairs within a pool, iterating indices i < j in pool
/// order.
///
/// A pool of n teams yields exactly n(n-1)/2 pairs; pools smaller than
/// 2 yield none.
pub fn round_robin_pairs(pool: &[Team]) -> Vec<(&str, &str)> {
    let mut pairs = Vec::new();
    for i in 0..pool.len() {
        for j in (i + 1)..pool.len() {
            pairs.push((pool[i].name.as_str(), pool[j].name.as_str()));
        }
    }
    pairs
}

/// Creates match records with identifiers that stay unique across all
/// categories and pools of one scheduling run.
#[derive(Debug)]
pub struct PairingGenerator {
    next_id: MatchId,
}

impl PairingGenerator {
    /// Creates a generator starting at match id 1.
    pub fn new() -> Self {
        Self { next_id: 1 }
    }

    /// Generates one match per round-robin pair of the pool.
    ///
    /// Each match is tagged with the pool's category and index and
    /// copies the match duration from the settings.
    pub fn pool_matches(
        &mut self,
        category: Category,
        pool_index: usize,
        pool: &[Team],
        duration_min: u32,
    ) -> Vec<Match> {
        round_robin_pairs(pool)
            .into_iter()
            .map(|(a, b)| {
                let id = self.next_id;
                self.next_id += 1;
                Match::new(id, category, pool_index, a, b, duration_min)
            })
            .collect()
    }
}

impl Default for PairingGenerator {
    fn default() -> Self {
        Self::new()
    }
}
