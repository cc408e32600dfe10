//! # CLI Command Implementations
//!
//! This module contains the actual implementations of CLI commands.
//! Each command renders through [`crate::output`] and prints to stdout;
//! diagnostics go through `tracing` to stderr.

use super::GradeCriterion;
use crate::error::AppError;
use crate::output;
use edustage_core::{CountryEducationProfile, EducationLevelTable, IscedLevel};

// =============================================================================
// COUNTRIES COMMAND
// =============================================================================

/// List known countries.
pub fn cmd_countries(table: &EducationLevelTable, json_mode: bool) -> Result<(), AppError> {
    tracing::debug!("Listing {} countries", table.len());
    print!("{}", output::render_countries(table, json_mode)?);
    Ok(())
}

// =============================================================================
// PROFILE COMMAND
// =============================================================================

/// Show the education profile of a country.
pub fn cmd_profile(
    table: &EducationLevelTable,
    json_mode: bool,
    country: &str,
    with_grades: bool,
    stage: Option<&str>,
) -> Result<(), AppError> {
    let profile = table.get_profile(country)?;
    tracing::debug!(
        "Resolved '{}' to {} ({} stages, {} grades)",
        country,
        profile.country,
        profile.stages.len(),
        profile.grades.len()
    );

    let rendered = match stage {
        Some(name) => {
            let view = stage_view(profile, name);
            if view.stages.is_empty() {
                tracing::info!("No stage of {} is named '{}'", profile.country, name);
            }
            output::render_profile(&view, json_mode, with_grades)?
        }
        None => output::render_profile(profile, json_mode, with_grades)?,
    };
    print!("{}", rendered);
    Ok(())
}

/// Copy of `profile` keeping only the stages known by `name`.
#[must_use]
pub fn stage_view(profile: &CountryEducationProfile, name: &str) -> CountryEducationProfile {
    CountryEducationProfile {
        stages: profile.stages_named(name).cloned().collect(),
        ..profile.clone()
    }
}

// =============================================================================
// ISCED COMMANDS
// =============================================================================

/// Show every stage at an ISCED level.
pub fn cmd_isced(table: &EducationLevelTable, json_mode: bool, code: u8) -> Result<(), AppError> {
    let level = IscedLevel::try_from(code)?;
    let rows = table.stages_by_isced(level);
    tracing::debug!("{} stages at ISCED {}", rows.len(), code);

    if rows.is_empty() {
        tracing::info!("No country records a stage at ISCED {}", code);
    }

    print!("{}", output::render_isced(level, &rows, json_mode)?);
    Ok(())
}

/// List the ISCED 2011 levels.
pub fn cmd_levels(json_mode: bool) -> Result<(), AppError> {
    print!("{}", output::render_levels(json_mode)?);
    Ok(())
}

// =============================================================================
// GRADE COMMAND
// =============================================================================

/// Find a grade of a country.
pub fn cmd_grade(
    table: &EducationLevelTable,
    json_mode: bool,
    country: &str,
    criterion: &GradeCriterion,
) -> Result<(), AppError> {
    tracing::debug!("Looking up grade {:?} in '{}'", criterion, country);

    let grade = match criterion {
        GradeCriterion::Level(level) => table.find_grade_by_level(country, *level)?,
        GradeCriterion::Name(name) => table.find_grade_by_name(country, name)?,
        GradeCriterion::ShortName(short) => table.find_grade_by_short_name(country, short)?,
    };
    let code = &table.get_profile(country)?.country;

    print!("{}", output::render_grade(code, grade, json_mode)?);
    Ok(())
}

// =============================================================================
// AGE COMMAND
// =============================================================================

/// Show the stage a pupil of the given age is in.
pub fn cmd_age(
    table: &EducationLevelTable,
    json_mode: bool,
    country: &str,
    age: u8,
) -> Result<(), AppError> {
    let profile = table.get_profile(country)?;
    let stage = profile.stage_at_age(age);

    if stage.is_none() {
        tracing::info!("No stage of {} covers age {}", profile.country, age);
    }

    print!("{}", output::render_age(profile, age, stage, json_mode)?);
    Ok(())
}
