//! Integration tests for the edustage CLI: argument parsing, configuration
//! loading and rendered output.

// Allow unwrap and panic in tests - these are standard for test code
#![allow(clippy::unwrap_used, clippy::panic)]

use clap::Parser;
use edustage::cli::{Cli, Commands, GradeCriterion, execute, json_mode, stage_view};
use edustage::config::{
    AppConfig, DEFAULT_CONFIG_FILE, DEFAULT_LOG_FILTER, LogFormat, MAX_CONFIG_FILE_SIZE,
    QUIET_LOG_FILTER, VERBOSE_LOG_FILTER,
};
use edustage::output;
use edustage::AppError;
use edustage_core::{EduError, EducationLevelTable, IscedLevel};
use std::io::Write;
use std::path::PathBuf;

fn table() -> &'static EducationLevelTable {
    EducationLevelTable::builtin()
}

// =============================================================================
// ARGUMENT PARSING
// =============================================================================

#[test]
fn test_no_subcommand_defaults_to_none() {
    let cli = Cli::try_parse_from(["edustage"]).unwrap();
    assert!(cli.command.is_none());
    assert!(!cli.verbose);
    assert!(!cli.json_mode);
}

#[test]
fn test_global_flags_after_subcommand() {
    let cli = Cli::try_parse_from(["edustage", "profile", "FR", "--json-mode", "-v"]).unwrap();
    assert!(cli.json_mode);
    assert!(cli.verbose);
    assert_eq!(
        cli.command,
        Some(Commands::Profile {
            country: Some("FR".to_string()),
            no_grades: false,
            stage: None,
        })
    );
}

#[test]
fn test_quiet_flag_is_global() {
    let cli = Cli::try_parse_from(["edustage", "--quiet", "countries"]).unwrap();
    assert!(cli.quiet);
    assert_eq!(cli.command, Some(Commands::Countries));

    let cli = Cli::try_parse_from(["edustage", "levels", "-q"]).unwrap();
    assert!(cli.quiet);
}

#[test]
fn test_quiet_conflicts_with_verbose() {
    assert!(Cli::try_parse_from(["edustage", "--quiet", "--verbose", "countries"]).is_err());
}

#[test]
fn test_profile_stage_filter_flag() {
    let cli =
        Cli::try_parse_from(["edustage", "profile", "FR", "--stage", "Collège", "--no-grades"])
            .unwrap();
    assert_eq!(
        cli.command,
        Some(Commands::Profile {
            country: Some("FR".to_string()),
            no_grades: true,
            stage: Some("Collège".to_string()),
        })
    );
}

#[test]
fn test_config_path_flag() {
    let cli = Cli::try_parse_from(["edustage", "--config", "custom.toml", "levels"]).unwrap();
    assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
    assert_eq!(cli.command, Some(Commands::Levels));
}

#[test]
fn test_grade_accepts_negative_level() {
    let cli = Cli::try_parse_from(["edustage", "grade", "FR", "--level", "-2"]).unwrap();
    match cli.command {
        Some(Commands::Grade { level, .. }) => assert_eq!(level, Some(-2)),
        other => panic!("unexpected command: {:?}", other),
    }
}

#[test]
fn test_grade_requires_exactly_one_criterion() {
    assert!(Cli::try_parse_from(["edustage", "grade", "FR"]).is_err());
    assert!(
        Cli::try_parse_from(["edustage", "grade", "FR", "--level", "1", "--name", "CP"]).is_err()
    );
    assert!(Cli::try_parse_from(["edustage", "grade", "FR", "-s", "CP"]).is_ok());
}

#[test]
fn test_age_with_optional_country() {
    let cli = Cli::try_parse_from(["edustage", "age", "15"]).unwrap();
    assert_eq!(
        cli.command,
        Some(Commands::Age {
            age: 15,
            country: None,
        })
    );

    let cli = Cli::try_parse_from(["edustage", "age", "15", "United Kingdom"]).unwrap();
    assert_eq!(
        cli.command,
        Some(Commands::Age {
            age: 15,
            country: Some("United Kingdom".to_string()),
        })
    );
}

#[test]
fn test_age_takes_age_before_country() {
    // The country is optional, so it comes last.
    assert!(Cli::try_parse_from(["edustage", "age", "GB", "15"]).is_err());
}

#[test]
fn test_grade_criterion_from_args() {
    assert_eq!(
        GradeCriterion::from_args(Some(3), None, None),
        Some(GradeCriterion::Level(3))
    );
    assert_eq!(
        GradeCriterion::from_args(None, None, Some("CP".to_string())),
        Some(GradeCriterion::ShortName("CP".to_string()))
    );
    assert_eq!(GradeCriterion::from_args(None, None, None), None);
}

// =============================================================================
// CONFIGURATION
// =============================================================================

#[test]
fn test_config_defaults() {
    let config = AppConfig::default();
    assert_eq!(config.default_country, None);
    assert!(!config.output.json);
    assert_eq!(config.logging.format, LogFormat::Text);
    assert_eq!(config.logging.resolve_filter(false, false), DEFAULT_LOG_FILTER);
    assert_eq!(config.logging.resolve_filter(true, false), VERBOSE_LOG_FILTER);
    assert_eq!(config.logging.resolve_filter(false, true), QUIET_LOG_FILTER);
}

#[test]
fn test_config_parse_full() {
    let toml = r#"
        default_country = "FR"

        [output]
        json = true

        [logging]
        format = "json"
        filter = "edustage=warn"
    "#;
    let config = AppConfig::parse(toml, PathBuf::from("inline.toml")).unwrap();

    assert_eq!(config.default_country.as_deref(), Some("FR"));
    assert!(config.output.json);
    assert_eq!(config.logging.format, LogFormat::Json);
    assert_eq!(config.logging.resolve_filter(false, false), "edustage=warn");
}

#[test]
fn test_config_rejects_unknown_keys() {
    let err = AppConfig::parse("colour = true", PathBuf::from("bad.toml")).unwrap_err();
    assert!(matches!(err, AppError::ConfigParse { .. }));
    assert!(err.to_string().contains("bad.toml"));
}

#[test]
fn test_log_format_env_override() {
    let config = AppConfig::default();
    assert_eq!(config.logging.resolve_format(None), LogFormat::Text);
    assert_eq!(config.logging.resolve_format(Some("JSON")), LogFormat::Json);
    assert_eq!(config.logging.resolve_format(Some("pretty")), LogFormat::Text);
}

#[test]
fn test_config_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "default_country = \"jp\"").unwrap();

    let config = AppConfig::load(Some(file.path())).unwrap();
    assert_eq!(config.default_country.as_deref(), Some("jp"));
}

#[test]
fn test_default_config_file_picked_up_from_directory() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join(DEFAULT_CONFIG_FILE),
        "default_country = \"DE\"\n\n[output]\njson = true\n",
    )
    .unwrap();

    let config = AppConfig::load_in(None, dir.path()).unwrap();
    assert_eq!(config.default_country.as_deref(), Some("DE"));
    assert!(config.output.json);
}

#[test]
fn test_no_default_config_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig::load_in(None, dir.path()).unwrap();
    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_explicit_config_wins_over_default_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "default_country = \"DE\"").unwrap();
    let explicit = dir.path().join("other.toml");
    std::fs::write(&explicit, "default_country = \"JP\"").unwrap();

    let config = AppConfig::load_in(Some(&explicit), dir.path()).unwrap();
    assert_eq!(config.default_country.as_deref(), Some("JP"));
}

#[test]
fn test_invalid_log_filter_is_reported() {
    let config = AppConfig::parse(
        "[logging]\nfilter = \"edustage=notalevel\"",
        PathBuf::from("log.toml"),
    )
    .unwrap();

    let err = config.logging.env_filter(false, false).unwrap_err();
    assert!(matches!(
        err,
        AppError::InvalidLogFilter { ref filter, .. } if filter == "edustage=notalevel"
    ));
}

#[test]
fn test_valid_log_filters_build() {
    let config = AppConfig::default();
    assert!(config.logging.env_filter(false, false).is_ok());
    assert!(config.logging.env_filter(true, false).is_ok());
    assert!(config.logging.env_filter(false, true).is_ok());
}

#[test]
fn test_json_mode_combines_flag_and_config() {
    let text_config = AppConfig::default();
    let mut json_config = AppConfig::default();
    json_config.output.json = true;

    let plain = Cli::try_parse_from(["edustage", "countries"]).unwrap();
    let flagged = Cli::try_parse_from(["edustage", "countries", "--json-mode"]).unwrap();

    assert!(!json_mode(&plain, &text_config));
    assert!(json_mode(&plain, &json_config));
    assert!(json_mode(&flagged, &text_config));
    assert!(json_mode(&flagged, &json_config));
}

#[test]
fn test_missing_explicit_config_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");

    let err = AppConfig::load(Some(&path)).unwrap_err();
    assert!(matches!(err, AppError::ConfigRead { .. }));
}

#[test]
fn test_oversized_config_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    let padding = "#".repeat(MAX_CONFIG_FILE_SIZE as usize + 1);
    writeln!(file, "{}", padding).unwrap();

    let err = AppConfig::from_file(file.path()).unwrap_err();
    assert!(matches!(err, AppError::ConfigTooLarge { .. }));
}

#[test]
fn test_resolve_country() {
    let config = AppConfig {
        default_country: Some("VN".to_string()),
        ..AppConfig::default()
    };
    assert_eq!(config.resolve_country(None).unwrap(), "VN");
    assert_eq!(
        config.resolve_country(Some("FR".to_string())).unwrap(),
        "FR"
    );

    let empty = AppConfig::default();
    assert!(matches!(
        empty.resolve_country(None),
        Err(AppError::MissingCountry)
    ));
}

// =============================================================================
// EXECUTION
// =============================================================================

#[test]
fn test_execute_unknown_country_fails() {
    let cli = Cli::try_parse_from(["edustage", "profile", "Nonexistent-Country"]).unwrap();
    let err = execute(cli, &AppConfig::default()).unwrap_err();
    assert!(matches!(
        err,
        AppError::Lookup(EduError::CountryNotFound(ref c)) if c == "Nonexistent-Country"
    ));
}

#[test]
fn test_execute_invalid_isced_level_fails() {
    let cli = Cli::try_parse_from(["edustage", "isced", "9"]).unwrap();
    let err = execute(cli, &AppConfig::default()).unwrap_err();
    assert!(matches!(err, AppError::Lookup(EduError::InvalidIscedLevel(9))));
}

#[test]
fn test_execute_profile_without_country_needs_default() {
    let cli = Cli::try_parse_from(["edustage", "profile"]).unwrap();
    let err = execute(cli, &AppConfig::default()).unwrap_err();
    assert!(matches!(err, AppError::MissingCountry));
}

#[test]
fn test_execute_grade_lookup_succeeds() {
    let cli = Cli::try_parse_from(["edustage", "grade", "US", "--short-name", "k"]).unwrap();
    assert!(execute(cli, &AppConfig::default()).is_ok());
}

// =============================================================================
// OUTPUT
// =============================================================================

#[test]
fn test_render_countries_text() {
    let text = output::render_countries(table(), false).unwrap();
    assert!(text.starts_with("Countries\n"));
    assert!(text.contains("US  United States"));
    assert!(text.contains("VN  Vietnam"));
}

#[test]
fn test_render_countries_json() {
    let json = output::render_countries(table(), true).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let rows = value.as_array().unwrap();
    assert_eq!(rows.len(), table().len());
    assert_eq!(rows[0]["country"], "DE");
}

#[test]
fn test_render_profile_json_round_trips() {
    let profile = table().get_profile("FR").unwrap();
    let json = output::render_profile(profile, true, true).unwrap();
    let parsed: edustage_core::CountryEducationProfile = serde_json::from_str(&json).unwrap();
    assert_eq!(&parsed, profile);
}

#[test]
fn test_render_profile_without_grades() {
    let profile = table().get_profile("US").unwrap();

    let json = output::render_profile(profile, true, false).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert!(value.get("grades").is_none());
    assert_eq!(value["stages"][0]["name"], "Early childhood education");
    assert_eq!(value["stages"][0]["isced_level"], 0);

    let text = output::render_profile(profile, false, false).unwrap();
    assert!(text.starts_with("United States (US)\n"));
    assert!(!text.contains("Grades:"));
}

#[test]
fn test_render_profile_shows_stage_span() {
    let profile = table().get_profile("FR").unwrap();
    let text = output::render_profile(profile, false, false).unwrap();
    assert!(text.contains("6-11   5 yrs"));
}

#[test]
fn test_stage_view_keeps_matching_stages() {
    let profile = table().get_profile("FR").unwrap();

    let view = stage_view(profile, "  lycée ");
    assert_eq!(view.country, "FR");
    assert_eq!(view.grades, profile.grades);
    assert_eq!(view.stages.len(), 1);
    assert_eq!(view.stages[0].isced_level, Some(IscedLevel::Level3));

    let json = output::render_profile(&view, true, false).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["stages"].as_array().unwrap().len(), 1);
    assert_eq!(value["stages"][0]["name"], "Secondary education");

    assert!(stage_view(profile, "Kindergarten").stages.is_empty());
}

#[test]
fn test_execute_profile_with_stage_filter_succeeds() {
    let cli = Cli::try_parse_from(["edustage", "profile", "JP", "--stage", "nothing"]).unwrap();
    assert!(execute(cli, &AppConfig::default()).is_ok());
}

#[test]
fn test_render_isced_json() {
    let rows = table().stages_by_isced(IscedLevel::Level3);
    let json = output::render_isced(IscedLevel::Level3, &rows, true).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["level"], 3);
    assert_eq!(value["level_name"], "Upper secondary education");
    let stages = value["stages"].as_array().unwrap();
    assert!(stages.iter().any(|s| s["name"] == "Secondary education"));
    assert!(stages.iter().all(|s| s["country"].is_string()));
}

#[test]
fn test_render_isced_empty_text() {
    let rows = table().stages_by_isced(IscedLevel::Level5);
    let text = output::render_isced(IscedLevel::Level5, &rows, false).unwrap();
    assert!(text.contains("No stage recorded at this level"));
}

#[test]
fn test_render_levels_lists_all_nine() {
    let json = output::render_levels(true).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 9);
    assert_eq!(value[8]["broad_stage"], "tertiary");

    let text = output::render_levels(false).unwrap();
    assert!(text.contains("Doctoral or equivalent level"));
}

#[test]
fn test_render_grade_and_age() {
    let cp = table().find_grade_by_short_name("FR", "CP").unwrap();
    let text = output::render_grade("FR", cp, false).unwrap();
    assert!(text.starts_with("FR: 1  CP"));
    assert!(text.contains("Cours préparatoire"));

    let gb = table().get_profile("GB").unwrap();
    let text = output::render_age(gb, 17, gb.stage_at_age(17), false).unwrap();
    assert_eq!(text, "GB, age 17: Secondary education (ISCED 3, 16-18)\n");

    let text = output::render_age(gb, 1, gb.stage_at_age(1), false).unwrap();
    assert_eq!(text, "GB, age 1: no stage recorded\n");
}
