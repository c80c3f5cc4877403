//! Scheduling domain models.
//!
//! Core data types for a two-day mini-tournament: registered teams and
//! their age categories, tournament settings, candidate time slots,
//! generated matches, and the resulting schedule.
//!
//! Matches and slots are immutable records. A run's placements live in
//! a separate assignment table ([`Assignment`]), so inputs can be
//! inspected unchanged after a run and the assignment step is auditable
//! on its own.

mod matches;
mod schedule;
mod settings;
mod slot;
mod team;

pub use matches::{Match, MatchId};
pub use schedule::{Assignment, Schedule, ScheduledMatch};
pub use settings::TournamentSettings;
pub use slot::{Day, TimeSlot, BREAK_BUFFER_MIN};
pub use team::{Category, Team};
