//! Pool construction.
//!
//! Partitions the teams of one category into balanced pools of roughly
//! [`TARGET_POOL_SIZE`] teams. Teams are shuffled before distribution
//! so pool membership does not depend on registration order.
//!
//! # Algorithm
//!
//! With n teams and target size t: if n ≤ t, one pool holds everyone.
//! Otherwise ceil(n / t) pools are filled cyclically from a shuffled
//! order (shuffled position i goes to pool i mod pool_count), so pool
//! sizes differ by at most one.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::Team;

/// Preferred number of teams per pool.
pub const TARGET_POOL_SIZE: usize = 5;

/// Splits same-category teams into balanced pools.
///
/// Callers must pass teams of a single category; pools never mix
/// categories. Pools with fewer than 2 teams can occur (a one-team
/// category) and are skipped by the pairing stage.
pub fn build_pools<R: Rng>(teams: &[Team], target_size: usize, rng: &mut R) -> Vec<Vec<Team>> {
    if teams.len() <= target_size {
        return vec![teams.to_vec()];
    }

    let pool_count = teams.len().div_ceil(target_size);
    let mut shuffled: Vec<Team> = teams.to_vec();
    shuffled.shuffle(rng);

    let mut pools: Vec<Vec<Team>> = vec![Vec::new(); pool_count];
    for (i, team) in shuffled.into_iter().enumerate() {
        pools[i % pool_count].push(team);
    }

    pools
}
