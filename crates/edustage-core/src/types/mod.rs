//! # Core Type Definitions
//!
//! This module contains all core types for the edustage table:
//! - Age spans (`AgeRange`)
//! - Table records (`Stage`, `Grade`, `CountryEducationProfile`)
//! - Error types (`EduError`)
//!
//! ## Immutability
//!
//! Records are plain values. The table hands out shared references only,
//! so nothing reachable from it can be mutated after construction.

use crate::isced::IscedLevel;
use crate::primitives::{AGE_BOUNDARY_TOLERANCE, MAX_AGE, is_country_code, normalize_name};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// AGE RANGE
// =============================================================================

/// Approximate span of ages, in whole years.
///
/// `start` is the age at which pupils usually begin, `end` the age at which
/// they usually complete: the range is half-open, `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AgeRange {
    pub start: u8,
    pub end: u8,
}

impl AgeRange {
    /// Create a new age range.
    #[must_use]
    pub const fn new(start: u8, end: u8) -> Self {
        Self { start, end }
    }

    /// A single school year starting at `start`.
    #[must_use]
    pub const fn year(start: u8) -> Self {
        Self {
            start,
            end: start.saturating_add(1),
        }
    }

    /// Check if `age` falls inside the range.
    #[must_use]
    pub const fn contains(&self, age: u8) -> bool {
        self.start <= age && age < self.end
    }

    /// Number of years covered.
    #[must_use]
    pub const fn years(&self) -> u8 {
        self.end.saturating_sub(self.start)
    }

    /// Check that the range is non-empty and within `MAX_AGE`.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.start < self.end && self.end <= MAX_AGE
    }
}

impl std::fmt::Display for AgeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

// =============================================================================
// STAGE
// =============================================================================

/// A named segment of the educational progression of one country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stage {
    /// Human-readable stage name, e.g. "Primary education".
    pub name: String,
    /// Country or region specific synonyms, e.g. "Elementary school".
    pub local_names: Vec<String>,
    /// Approximate age span, when known.
    pub age_range: Option<AgeRange>,
    /// ISCED classification, when known.
    pub isced_level: Option<IscedLevel>,
}

impl Stage {
    /// Create a stage with no synonyms, ages or ISCED level.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            local_names: Vec::new(),
            age_range: None,
            isced_level: None,
        }
    }

    #[must_use]
    pub fn with_isced(mut self, level: IscedLevel) -> Self {
        self.isced_level = Some(level);
        self
    }

    #[must_use]
    pub fn with_ages(mut self, start: u8, end: u8) -> Self {
        self.age_range = Some(AgeRange::new(start, end));
        self
    }

    #[must_use]
    pub fn with_local_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.local_names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Check if this stage is known by `name`, either its own or a synonym.
    #[must_use]
    pub fn is_named(&self, name: &str) -> bool {
        let wanted = normalize_name(name);
        normalize_name(&self.name) == wanted
            || self.local_names.iter().any(|n| normalize_name(n) == wanted)
    }
}

// =============================================================================
// GRADE
// =============================================================================

/// One school year within a country's system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grade {
    /// Year number. The first year of primary school is 1; pre-primary
    /// years are 0 or negative.
    pub level: i8,
    /// Name given to this grade, e.g. "Cours préparatoire".
    pub name: String,
    /// Short name given to this grade, e.g. "CP".
    pub short_name: Option<String>,
    /// Ages at which pupils usually begin and complete this grade.
    pub age_range: AgeRange,
}

impl Grade {
    /// Create a one-year grade starting at `start_age`.
    #[must_use]
    pub fn new(level: i8, name: impl Into<String>, start_age: u8) -> Self {
        Self {
            level,
            name: name.into(),
            short_name: None,
            age_range: AgeRange::year(start_age),
        }
    }

    #[must_use]
    pub fn with_short_name(mut self, short_name: impl Into<String>) -> Self {
        self.short_name = Some(short_name.into());
        self
    }
}

// =============================================================================
// COUNTRY EDUCATION PROFILE
// =============================================================================

/// The full ordered sequence of stages and grades of one country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryEducationProfile {
    /// ISO 3166-1 alpha-2 code, upper-case. Unique across the table.
    pub country: String,
    /// English country name.
    pub name: String,
    /// Stages ordered by increasing age.
    pub stages: Vec<Stage>,
    /// Grades ordered by increasing level.
    pub grades: Vec<Grade>,
}

impl CountryEducationProfile {
    /// Create an empty profile.
    #[must_use]
    pub fn new(country: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            country: country.into(),
            name: name.into(),
            stages: Vec::new(),
            grades: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_stages(mut self, stages: Vec<Stage>) -> Self {
        self.stages = stages;
        self
    }

    #[must_use]
    pub fn with_grades(mut self, grades: Vec<Grade>) -> Self {
        self.grades = grades;
        self
    }

    /// First stage whose age range contains `age`.
    #[must_use]
    pub fn stage_at_age(&self, age: u8) -> Option<&Stage> {
        self.stages
            .iter()
            .find(|s| s.age_range.is_some_and(|r| r.contains(age)))
    }

    /// Stages classified at the given ISCED level, in profile order.
    pub fn stages_at(&self, level: IscedLevel) -> impl Iterator<Item = &Stage> {
        self.stages
            .iter()
            .filter(move |s| s.isced_level == Some(level))
    }

    /// Stages known by `name` (own name or a local synonym), in profile order.
    pub fn stages_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Stage> + 'a {
        self.stages.iter().filter(move |s| s.is_named(name))
    }

    /// Find a grade by its year number.
    pub fn grade_by_level(&self, level: i8) -> Result<&Grade, EduError> {
        self.grades
            .iter()
            .find(|g| g.level == level)
            .ok_or_else(|| self.grade_not_found(format!("level {}", level)))
    }

    /// Find a grade by its name, ignoring case and surrounding whitespace.
    pub fn grade_by_name(&self, name: &str) -> Result<&Grade, EduError> {
        let wanted = normalize_name(name);
        self.grades
            .iter()
            .find(|g| normalize_name(&g.name) == wanted)
            .ok_or_else(|| self.grade_not_found(format!("name '{}'", name.trim())))
    }

    /// Find a grade by its short name, ignoring case and surrounding whitespace.
    pub fn grade_by_short_name(&self, short_name: &str) -> Result<&Grade, EduError> {
        let wanted = normalize_name(short_name);
        self.grades
            .iter()
            .find(|g| {
                g.short_name
                    .as_deref()
                    .is_some_and(|s| normalize_name(s) == wanted)
            })
            .ok_or_else(|| self.grade_not_found(format!("short name '{}'", short_name.trim())))
    }

    fn grade_not_found(&self, criterion: String) -> EduError {
        EduError::GradeNotFound {
            country: self.country.clone(),
            criterion,
        }
    }

    /// Check the profile invariants.
    ///
    /// - The country code is an upper-case ISO 3166-1 alpha-2 code
    /// - There is at least one stage
    /// - Every age range is valid
    /// - Stage start ages never decrease, and a stage ends no later than
    ///   `AGE_BOUNDARY_TOLERANCE` years after the next one starts
    /// - Grade levels strictly increase
    pub fn validate(&self) -> Result<(), EduError> {
        if !is_country_code(&self.country) {
            return Err(self.invalid("country code must be an upper-case ISO 3166-1 alpha-2 code"));
        }
        if self.name.trim().is_empty() {
            return Err(self.invalid("country name is empty"));
        }
        if self.stages.is_empty() {
            return Err(self.invalid("profile has no stages"));
        }

        let mut previous: Option<(&Stage, AgeRange)> = None;
        for stage in &self.stages {
            if stage.name.trim().is_empty() {
                return Err(self.invalid("stage name is empty"));
            }
            let Some(range) = stage.age_range else {
                continue;
            };
            if !range.is_valid() {
                return Err(self.invalid(format!(
                    "stage '{}' has invalid age range {}",
                    stage.name, range
                )));
            }
            if let Some((prev, prev_range)) = previous {
                if range.start < prev_range.start
                    || prev_range.end > range.start.saturating_add(AGE_BOUNDARY_TOLERANCE)
                {
                    return Err(self.invalid(format!(
                        "stage '{}' ({}) is out of order after '{}' ({})",
                        stage.name, range, prev.name, prev_range
                    )));
                }
            }
            previous = Some((stage, range));
        }

        for pair in self.grades.windows(2) {
            if pair[0].level >= pair[1].level {
                return Err(self.invalid(format!(
                    "grade levels out of order: {} then {}",
                    pair[0].level, pair[1].level
                )));
            }
        }
        for grade in &self.grades {
            if !grade.age_range.is_valid() {
                return Err(self.invalid(format!(
                    "grade '{}' has invalid age range {}",
                    grade.name, grade.age_range
                )));
            }
        }

        Ok(())
    }

    fn invalid(&self, reason: impl Into<String>) -> EduError {
        EduError::InvalidProfile {
            country: self.country.clone(),
            reason: reason.into(),
        }
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur in edustage.
///
/// Lookups over a well-formed table only ever fail with the not-found kinds.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EduError {
    /// The requested country is absent from the table.
    #[error("Country not found: {0}")]
    CountryNotFound(String),

    /// No grade of the country matches the criterion.
    #[error("Grade not found for country {country}: {criterion}")]
    GradeNotFound { country: String, criterion: String },

    /// The ISCED code is outside 0..=8.
    #[error("Invalid ISCED level: {0} (expected 0-8)")]
    InvalidIscedLevel(u8),

    /// Two profiles share the same country code or name.
    #[error("Duplicate country: {0}")]
    DuplicateCountry(String),

    /// A profile breaks a table invariant.
    #[error("Invalid profile for {country}: {reason}")]
    InvalidProfile { country: String, reason: String },
}

// =============================================================================
// TESTS
// =============================================================================
