//! Scheduling engine for a two-day mini-tournament.
//!
//! Takes registered teams and tournament settings and produces a
//! weekend match programme: same-category teams are split into
//! balanced pools, each pool plays a full round-robin, and the
//! resulting matches are placed greedily into (day, field, time)
//! slots under break, cap, and category-day constraints.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Team`, `Category`, `TournamentSettings`,
//!   `Match`, `TimeSlot`, `Assignment`, `Schedule`
//! - **`pools`**: Balanced pool construction within a category
//! - **`pairing`**: Round-robin pair and match generation
//! - **`slots`**: Candidate slot enumeration from the settings
//! - **`scheduler`**: Greedy first-fit assignment, diagnostics, and the
//!   `TournamentScheduler` entry point
//! - **`validation`**: Input integrity checks (duplicate teams,
//!   malformed settings)
//!
//! # Guarantees
//!
//! The assignment is a best-effort heuristic: it never backtracks and
//! does not promise a complete schedule. Matches it cannot place are
//! returned unscheduled alongside human-readable warnings; only a
//! configuration that admits no match or no slot at all aborts a run.

pub mod error;
pub mod models;
pub mod pairing;
pub mod pools;
pub mod scheduler;
pub mod slots;
pub mod validation;

pub use error::ScheduleError;
