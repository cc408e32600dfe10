//! # Application Errors
//!
//! Everything the binary can fail with. Lookup failures come straight from
//! the core; the rest is configuration and output plumbing.

use edustage_core::EduError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// A table lookup failed.
    #[error(transparent)]
    Lookup(#[from] EduError),

    /// The config file could not be read.
    #[error("Cannot read config file '{}': {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file exceeds `MAX_CONFIG_FILE_SIZE`.
    #[error("Config file '{}' is {size} bytes, above the {max} byte limit", .path.display())]
    ConfigTooLarge { path: PathBuf, size: u64, max: u64 },

    /// The config file is not valid TOML or has unknown keys.
    #[error("Invalid config file '{}': {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// `logging.filter` is not a valid tracing filter directive.
    #[error("Invalid log filter '{filter}': {source}")]
    InvalidLogFilter {
        filter: String,
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },

    /// JSON output could not be rendered.
    #[error("JSON rendering failed: {0}")]
    Json(#[from] serde_json::Error),

    /// A command needs a country and none was given or configured.
    #[error("No country given and no default_country configured")]
    MissingCountry,

    /// `grade` was run without `--level`, `--name` or `--short-name`.
    #[error("One of --level, --name or --short-name is required")]
    MissingCriterion,
}
