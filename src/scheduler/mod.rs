//! Scheduling runs: generation pipeline and entry point.
//!
//! A run is a single synchronous pass with no I/O: group teams by
//! category, build pools, pair them round-robin, enumerate slots,
//! assign greedily, then attach diagnostics. The two hard
//! configuration checks (at least one match generated, at least one
//! slot generated) happen before assignment; everything after that
//! degrades to warnings instead of failing.

mod assign;
mod diagnostics;

pub use assign::{assign, MAX_MATCHES_PER_TEAM};
pub use diagnostics::{finalize, MIN_MATCHES_PER_TEAM};

use std::collections::BTreeMap;

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::ScheduleError;
use crate::models::{Category, Schedule, Team, TournamentSettings};
use crate::pairing::PairingGenerator;
use crate::pools::{build_pools, TARGET_POOL_SIZE};
use crate::slots::generate_slots;

/// Runs the whole pipeline with the given randomness source.
///
/// Categories are visited in a fixed order, so a seeded run is fully
/// reproducible.
///
/// # Errors
///
/// [`ScheduleError::NoSchedulableCategory`] when no category has a
/// pool of at least 2 teams, [`ScheduleError::EmptySlotGrid`] when the
/// daily window fits no match. Both are raised before any assignment.
pub fn generate_schedule<R: Rng>(
    teams: &[Team],
    settings: &TournamentSettings,
    rng: &mut R,
) -> Result<Schedule, ScheduleError> {
    let mut by_category: BTreeMap<Category, Vec<Team>> = BTreeMap::new();
    for team in teams {
        by_category.entry(team.category).or_default().push(team.clone());
    }

    let mut generator = PairingGenerator::new();
    let mut matches = Vec::new();
    for (category, group) in &by_category {
        if group.len() < 2 {
            debug!("skipping category {category}: fewer than 2 teams");
            continue;
        }
        for (pool_index, pool) in build_pools(group, TARGET_POOL_SIZE, rng).iter().enumerate() {
            if pool.len() < 2 {
                continue;
            }
            matches.extend(generator.pool_matches(
                *category,
                pool_index,
                pool,
                settings.match_duration_min,
            ));
        }
    }
    if matches.is_empty() {
        return Err(ScheduleError::NoSchedulableCategory);
    }

    let slots = generate_slots(settings);
    if slots.is_empty() {
        return Err(ScheduleError::EmptySlotGrid {
            day_start: settings.day_start,
            day_end: settings.day_end,
        });
    }

    let generated = matches.len();
    let assignments = assign(&matches, &slots, rng);
    let schedule = finalize(matches, &slots, &assignments);
    info!(
        "scheduled {} of {generated} matches across {} slots",
        schedule.match_count(),
        slots.len()
    );
    Ok(schedule)
}

/// Tournament scheduling entry point.
///
/// Owns the randomness source used for pool distribution and match
/// shuffling. Use [`TournamentScheduler::seeded`] for reproducible
/// runs (tests, replaying a published draw).
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use minicup::models::{Category, Team, TournamentSettings};
/// use minicup::scheduler::TournamentScheduler;
///
/// let teams = vec![
///     Team::new(1, "Ulv", Category::Mini),
///     Team::new(2, "Rev", Category::Mini),
///     Team::new(3, "Gaupe", Category::Mini),
/// ];
/// let settings = TournamentSettings::new(NaiveDate::from_ymd_opt(2026, 6, 6).unwrap());
///
/// let mut scheduler = TournamentScheduler::seeded(42);
/// let schedule = scheduler.generate(&teams, &settings).unwrap();
/// assert_eq!(schedule.match_count(), 3);
/// ```
#[derive(Debug)]
pub struct TournamentScheduler {
    rng: StdRng,
}

impl TournamentScheduler {
    /// Creates a scheduler with OS-seeded randomness.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Creates a scheduler with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generates a schedule for the given teams and settings.
    ///
    /// # Errors
    ///
    /// See [`generate_schedule`].
    pub fn generate(
        &mut self,
        teams: &[Team],
        settings: &TournamentSettings,
    ) -> Result<Schedule, ScheduleError> {
        generate_schedule(teams, settings, &mut self.rng)
    }
}

impl Default for TournamentScheduler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Day, BREAK_BUFFER_MIN};
    use chrono::{NaiveDate, NaiveTime, TimeDelta};
    use std::collections::HashSet;

    fn settings() -> TournamentSettings {
        TournamentSettings::new(NaiveDate::from_ymd_opt(2026, 6, 6).unwrap())
    }

    fn weekend_teams() -> Vec<Team> {
        let mut teams = Vec::new();
        let mut id = 1;
        for name in ["Mus", "Ekorn", "Pinnsvin", "Hare"] {
            teams.push(Team::new(id, name, Category::Mikro));
            id += 1;
        }
        for name in ["Ulv", "Rev", "Gaupe", "Bjørn", "Elg"] {
            teams.push(Team::new(id, name, Category::Mini));
            id += 1;
        }
        for name in ["Ørn", "Falk", "Hauk", "Ugle"] {
            teams.push(Team::new(id, name, Category::LilleguttJente));
            id += 1;
        }
        teams
    }

    #[test]
    fn test_no_schedulable_category_aborts() {
        // One team per category: no pool reaches 2 teams.
        let teams = vec![
            Team::new(1, "Ulv", Category::Mini),
            Team::new(2, "Mus", Category::Mikro),
        ];
        let err = TournamentScheduler::seeded(42)
            .generate(&teams, &settings())
            .unwrap_err();
        assert_eq!(err, ScheduleError::NoSchedulableCategory);

        let err = TournamentScheduler::seeded(42)
            .generate(&[], &settings())
            .unwrap_err();
        assert_eq!(err, ScheduleError::NoSchedulableCategory);
    }

    #[test]
    fn test_empty_slot_grid_aborts() {
        let teams = vec![
            Team::new(1, "Ulv", Category::Mini),
            Team::new(2, "Rev", Category::Mini),
        ];
        let narrow = settings().with_daily_window(
            NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(10, 10, 0).unwrap(),
        );
        let err = TournamentScheduler::seeded(42)
            .generate(&teams, &narrow)
            .unwrap_err();
        assert!(matches!(err, ScheduleError::EmptySlotGrid { .. }));
    }

    #[test]
    fn test_weekend_run_satisfies_all_constraints() {
        let teams = weekend_teams();
        let schedule = TournamentScheduler::seeded(42)
            .generate(&teams, &settings())
            .unwrap();
        assert!(schedule.match_count() > 0);

        // No two matches share a (day, start, field) triple.
        let mut triples = HashSet::new();
        for m in &schedule.matches {
            assert!(triples.insert((m.day, m.start, m.field)));
        }

        // Each team: one day, at most 5 matches, proper breaks.
        for team in &teams {
            let mut mine = schedule.matches_for_team(&team.name);
            assert!(mine.len() <= MAX_MATCHES_PER_TEAM as usize);
            mine.sort_by_key(|m| m.start);
            let days: HashSet<Day> = mine.iter().map(|m| m.day).collect();
            assert!(days.len() <= 1);
            for pair in mine.windows(2) {
                let rest = TimeDelta::minutes(i64::from(pair[0].duration_min) + BREAK_BUFFER_MIN);
                assert!(pair[1].start >= pair[0].end + rest);
            }
        }

        // Category-day restrictions.
        for m in schedule.matches_in(Category::Mikro) {
            assert_eq!(m.day, Day::Saturday);
        }
        for m in schedule.matches_in(Category::LilleguttJente) {
            assert_eq!(m.day, Day::Sunday);
        }

        // Presentation order.
        for pair in schedule.matches.windows(2) {
            assert!((pair[0].day, pair[0].start, pair[0].field)
                <= (pair[1].day, pair[1].start, pair[1].field));
        }
    }

    #[test]
    fn test_seeded_scheduler_is_reproducible() {
        let teams = weekend_teams();
        let a = TournamentScheduler::seeded(7)
            .generate(&teams, &settings())
            .unwrap();
        let b = TournamentScheduler::seeded(7)
            .generate(&teams, &settings())
            .unwrap();
        assert_eq!(a.matches, b.matches);
        assert_eq!(a.unscheduled, b.unscheduled);
        assert_eq!(a.warnings, b.warnings);
    }

    #[test]
    fn test_small_weekend_fully_scheduled() {
        // 3 Mini teams, default settings: 3 matches, ample slots.
        let teams = vec![
            Team::new(1, "Ulv", Category::Mini),
            Team::new(2, "Rev", Category::Mini),
            Team::new(3, "Gaupe", Category::Mini),
        ];
        let schedule = TournamentScheduler::seeded(42)
            .generate(&teams, &settings())
            .unwrap();
        assert_eq!(schedule.match_count(), 3);
        assert!(schedule.is_fully_scheduled());
        // 3 teams cannot reach 3 matches each from 3 pairings.
        assert!(schedule
            .warnings
            .iter()
            .any(|w| w.contains("fewer than 3 matches")));
    }
}
