//! Team and age-category models.
//!
//! Teams are created by the external registry and consumed read-only by
//! the scheduler. The age category determines which tournament day a
//! team's matches may land on.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Day;

/// Age category of a team.
///
/// The set is fixed by the tournament rules. Each category carries a
/// day restriction: the youngest play day 1, the oldest play day 2,
/// and Mini may play either.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Youngest age group. Plays day 1 only.
    Mikro,
    /// Middle age group. May play either day.
    Mini,
    /// Oldest age group. Plays day 2 only.
    #[serde(rename = "Lillegutt/jente")]
    LilleguttJente,
}

impl Category {
    /// All categories, in scheduling order.
    pub const ALL: [Category; 3] = [Category::Mikro, Category::Mini, Category::LilleguttJente];

    /// The day this category is restricted to, or `None` if it may play
    /// on either day.
    pub fn allowed_day(self) -> Option<Day> {
        match self {
            Category::Mikro => Some(Day::Saturday),
            Category::Mini => None,
            Category::LilleguttJente => Some(Day::Sunday),
        }
    }

    /// Whether this category may play on the given day.
    pub fn allows(self, day: Day) -> bool {
        self.allowed_day().is_none_or(|d| d == day)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Category::Mikro => "Mikro",
            Category::Mini => "Mini",
            Category::LilleguttJente => "Lillegutt/jente",
        };
        f.write_str(label)
    }
}

/// A registered team.
///
/// Immutable once referenced by a match. Names are unique
/// case-insensitively within a tournament (enforced by
/// [`crate::validation::validate_input`], not here).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    /// Unique, stable identifier assigned by the registry.
    pub id: u32,
    /// Display name.
    pub name: String,
    /// Age category.
    pub category: Category,
}

impl Team {
    /// Creates a new team.
    pub fn new(id: u32, name: impl Into<String>, category: Category) -> Self {
        Self {
            id,
            name: name.into(),
            category,
        }
    }
}
