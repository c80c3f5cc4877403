//! Input integrity checks.
//!
//! The engine itself trusts its input (the settings collaborator
//! validates its own form); callers that cannot make that guarantee
//! run [`validate_input`] first. All problems are collected in one
//! pass rather than failing on the first.

use std::collections::HashSet;

use chrono::{Datelike, Weekday};

use crate::models::{Team, TournamentSettings};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two teams share the same id.
    DuplicateTeamId,
    /// Two teams share the same name (compared case-insensitively).
    DuplicateTeamName,
    /// The signup deadline does not precede the tournament start.
    DeadlineAfterStart,
    /// Match duration is below the 5-minute minimum.
    MatchTooShort,
    /// No fields are available.
    NoFields,
    /// The daily window end is not after its start.
    WindowInverted,
    /// The start date is not a Saturday (day 1 of the weekend).
    StartNotSaturday,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates teams and settings before a scheduling run.
///
/// Checks:
/// 1. No duplicate team ids
/// 2. No duplicate team names, case-insensitively
/// 3. Signup deadline before tournament start
/// 4. Match duration at least 5 minutes
/// 5. At least 1 field
/// 6. Daily window start before end
/// 7. Start date falls on a Saturday
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(teams: &[Team], settings: &TournamentSettings) -> ValidationResult {
    let mut errors = Vec::new();

    let mut ids = HashSet::new();
    let mut names = HashSet::new();
    for team in teams {
        if !ids.insert(team.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateTeamId,
                format!("Duplicate team id: {}", team.id),
            ));
        }
        if !names.insert(team.name.to_lowercase()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateTeamName,
                format!("A team named '{}' is already registered", team.name),
            ));
        }
    }

    if settings.signup_deadline.date() >= settings.start_date {
        errors.push(ValidationError::new(
            ValidationErrorKind::DeadlineAfterStart,
            "Signup deadline must be before the tournament start",
        ));
    }
    if settings.match_duration_min < 5 {
        errors.push(ValidationError::new(
            ValidationErrorKind::MatchTooShort,
            "Match duration must be at least 5 minutes",
        ));
    }
    if settings.num_fields < 1 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NoFields,
            "At least 1 field must be available",
        ));
    }
    if settings.day_start >= settings.day_end {
        errors.push(ValidationError::new(
            ValidationErrorKind::WindowInverted,
            "Daily start time must be before the end time",
        ));
    }
    if settings.start_date.weekday() != Weekday::Sat {
        errors.push(ValidationError::new(
            ValidationErrorKind::StartNotSaturday,
            format!(
                "Tournament start {} is not a Saturday",
                settings.start_date
            ),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
