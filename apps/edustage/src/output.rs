//! # Output Rendering
//!
//! Text and JSON renderings of table lookups. Every function returns the
//! full output as a `String`; printing is left to the commands.

use crate::error::AppError;
use edustage_core::{CountryEducationProfile, EducationLevelTable, Grade, IscedLevel, Stage};
use serde::Serialize;
use serde_json::json;

// =============================================================================
// JSON VIEWS
// =============================================================================

/// One row of `countries`.
#[derive(Debug, Clone, Serialize)]
pub struct CountrySummary<'a> {
    pub country: &'a str,
    pub name: &'a str,
    pub stages: usize,
    pub grades: usize,
}

/// One row of `isced`.
#[derive(Debug, Clone, Serialize)]
pub struct IscedStageRow<'a> {
    pub country: &'a str,
    #[serde(flatten)]
    pub stage: &'a Stage,
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, AppError> {
    Ok(serde_json::to_string_pretty(value)?)
}

fn ages(stage: &Stage) -> String {
    stage
        .age_range
        .map(|r| r.to_string())
        .unwrap_or_else(|| "?".to_string())
}

fn span(stage: &Stage) -> String {
    stage
        .age_range
        .map(|r| format!("{} yrs", r.years()))
        .unwrap_or_default()
}

fn isced(stage: &Stage) -> String {
    stage
        .isced_level
        .map(|l| l.code().to_string())
        .unwrap_or_else(|| "-".to_string())
}

// =============================================================================
// COUNTRIES
// =============================================================================

pub fn render_countries(table: &EducationLevelTable, json_mode: bool) -> Result<String, AppError> {
    let rows: Vec<CountrySummary<'_>> = table
        .profiles()
        .map(|p| CountrySummary {
            country: &p.country,
            name: &p.name,
            stages: p.stages.len(),
            grades: p.grades.len(),
        })
        .collect();

    if json_mode {
        return to_json(&rows);
    }

    let mut out = String::new();
    out.push_str("Countries\n");
    out.push_str("=========\n");
    for row in &rows {
        out.push_str(&format!(
            "{:<4}{:<20}{} stages, {} grades\n",
            row.country, row.name, row.stages, row.grades
        ));
    }
    Ok(out)
}

// =============================================================================
// PROFILE
// =============================================================================

pub fn render_profile(
    profile: &CountryEducationProfile,
    json_mode: bool,
    with_grades: bool,
) -> Result<String, AppError> {
    if json_mode {
        if with_grades {
            return to_json(profile);
        }
        return to_json(&json!({
            "country": profile.country,
            "name": profile.name,
            "stages": profile.stages,
        }));
    }

    let title = format!("{} ({})", profile.name, profile.country);
    let mut out = format!("{}\n{}\n\n", title, "=".repeat(title.chars().count()));

    out.push_str("Stages:\n");
    for stage in &profile.stages {
        out.push_str(&format!(
            "  ISCED {:<2} {:<6} {:<7} {:<26} {}\n",
            isced(stage),
            ages(stage),
            span(stage),
            stage.name,
            stage.local_names.join(", ")
        ));
    }

    if with_grades && !profile.grades.is_empty() {
        out.push_str("\nGrades:\n");
        for grade in &profile.grades {
            out.push_str(&format!("  {}\n", grade_line(grade)));
        }
    }

    Ok(out)
}

fn grade_line(grade: &Grade) -> String {
    format!(
        "{:>3}  {:<6} {:<6} {}",
        grade.level,
        grade.short_name.as_deref().unwrap_or("-"),
        grade.age_range.to_string(),
        grade.name
    )
}

// =============================================================================
// ISCED
// =============================================================================

pub fn render_isced(
    level: IscedLevel,
    rows: &[(&str, &Stage)],
    json_mode: bool,
) -> Result<String, AppError> {
    if json_mode {
        let rows: Vec<IscedStageRow<'_>> = rows
            .iter()
            .map(|&(country, stage)| IscedStageRow { country, stage })
            .collect();
        return to_json(&json!({
            "level": level.code(),
            "level_name": level.name(),
            "stages": rows,
        }));
    }

    let mut out = format!("{}\n\n", level);
    if rows.is_empty() {
        out.push_str("No stage recorded at this level\n");
        return Ok(out);
    }
    for (country, stage) in rows {
        out.push_str(&format!(
            "  {:<4}{:<6} {:<26} {}\n",
            country,
            ages(stage),
            stage.name,
            stage.local_names.join(", ")
        ));
    }
    Ok(out)
}

pub fn render_levels(json_mode: bool) -> Result<String, AppError> {
    if json_mode {
        let levels: Vec<_> = IscedLevel::ALL
            .iter()
            .map(|l| {
                json!({
                    "level": l.code(),
                    "name": l.name(),
                    "broad_stage": l.broad_stage(),
                })
            })
            .collect();
        return to_json(&levels);
    }

    let mut out = String::from("ISCED 2011 Levels\n=================\n");
    for level in IscedLevel::ALL {
        out.push_str(&format!(
            "  {}  {:<40} {}\n",
            level.code(),
            level.name(),
            level.broad_stage()
        ));
    }
    Ok(out)
}

// =============================================================================
// GRADE / AGE
// =============================================================================

pub fn render_grade(country: &str, grade: &Grade, json_mode: bool) -> Result<String, AppError> {
    if json_mode {
        return to_json(&json!({ "country": country, "grade": grade }));
    }
    Ok(format!("{}: {}\n", country, grade_line(grade).trim_start()))
}

pub fn render_age(
    profile: &CountryEducationProfile,
    age: u8,
    stage: Option<&Stage>,
    json_mode: bool,
) -> Result<String, AppError> {
    if json_mode {
        return to_json(&json!({
            "country": profile.country,
            "age": age,
            "stage": stage,
        }));
    }

    Ok(match stage {
        Some(stage) => format!(
            "{}, age {}: {} (ISCED {}, {})\n",
            profile.country,
            age,
            stage.name,
            isced(stage),
            ages(stage)
        ),
        None => format!("{}, age {}: no stage recorded\n", profile.country, age),
    })
}

// =============================================================================
// TESTS
// =============================================================================
