//! # edustage CLI Module
//!
//! This module implements the CLI interface for edustage.
//!
//! ## Available Commands
//!
//! - `countries` - List known countries
//! - `profile` - Show the stages and grades of a country
//! - `isced` - Show every stage at an ISCED level
//! - `levels` - List the ISCED 2011 levels
//! - `grade` - Find a grade by level, name or short name
//! - `age` - Show the stage a pupil of a given age is in

mod commands;

use crate::config::AppConfig;
use crate::error::AppError;
use clap::{ArgGroup, Parser, Subcommand};
use edustage_core::EducationLevelTable;
use std::path::PathBuf;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// edustage - education levels per country
///
/// Educational stages, ISCED levels and school grades, from a table
/// compiled into the binary.
#[derive(Parser, Debug)]
#[command(name = "edustage")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Path to a TOML config file (default: ./edustage.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// List known countries
    Countries,

    /// Show the education profile of a country
    Profile {
        /// ISO 3166-1 alpha-2 code or English name (default: config default_country)
        country: Option<String>,

        /// Hide the grade list
        #[arg(long)]
        no_grades: bool,

        /// Only show stages known by this name or local name
        #[arg(long)]
        stage: Option<String>,
    },

    /// Show every stage at an ISCED level (0-8)
    Isced {
        /// ISCED level code
        level: u8,
    },

    /// List the ISCED 2011 levels
    Levels,

    /// Find a grade of a country
    #[command(group(
        ArgGroup::new("criterion")
            .required(true)
            .args(["level", "name", "short_name"])
    ))]
    Grade {
        /// ISO 3166-1 alpha-2 code or English name (default: config default_country)
        country: Option<String>,

        /// Year number (1 = first year of primary school)
        #[arg(short, long, allow_negative_numbers = true)]
        level: Option<i8>,

        /// Grade name, case-insensitive
        #[arg(short, long)]
        name: Option<String>,

        /// Grade short name, case-insensitive
        #[arg(short, long)]
        short_name: Option<String>,
    },

    /// Show the stage a pupil of the given age is in
    Age {
        /// Age in years
        age: u8,

        /// ISO 3166-1 alpha-2 code or English name (default: config default_country)
        country: Option<String>,
    },
}

/// How to look up a grade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GradeCriterion {
    Level(i8),
    Name(String),
    ShortName(String),
}

impl GradeCriterion {
    /// Pick the criterion from the mutually exclusive `grade` flags.
    #[must_use]
    pub fn from_args(
        level: Option<i8>,
        name: Option<String>,
        short_name: Option<String>,
    ) -> Option<Self> {
        level
            .map(GradeCriterion::Level)
            .or_else(|| name.map(GradeCriterion::Name))
            .or_else(|| short_name.map(GradeCriterion::ShortName))
    }
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// JSON output is on when either `--json-mode` or `[output] json` asks for it.
#[must_use]
pub fn json_mode(cli: &Cli, config: &AppConfig) -> bool {
    cli.json_mode || config.output.json
}

/// Execute the CLI with parsed arguments against the built-in table.
pub fn execute(cli: Cli, config: &AppConfig) -> Result<(), AppError> {
    let table = EducationLevelTable::builtin();
    let json_mode = json_mode(&cli, config);

    match cli.command {
        Some(Commands::Countries) | None => cmd_countries(table, json_mode),
        Some(Commands::Profile {
            country,
            no_grades,
            stage,
        }) => {
            let country = config.resolve_country(country)?;
            cmd_profile(table, json_mode, &country, !no_grades, stage.as_deref())
        }
        Some(Commands::Isced { level }) => cmd_isced(table, json_mode, level),
        Some(Commands::Levels) => cmd_levels(json_mode),
        Some(Commands::Grade {
            country,
            level,
            name,
            short_name,
        }) => {
            let country = config.resolve_country(country)?;
            let criterion = GradeCriterion::from_args(level, name, short_name)
                .ok_or(AppError::MissingCriterion)?;
            cmd_grade(table, json_mode, &country, &criterion)
        }
        Some(Commands::Age { age, country }) => {
            let country = config.resolve_country(country)?;
            cmd_age(table, json_mode, &country, age)
        }
    }
}
