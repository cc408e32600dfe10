//! # Configuration
//!
//! Optional TOML configuration for the CLI.
//!
//! ```toml
//! default_country = "FR"
//!
//! [output]
//! json = false
//!
//! [logging]
//! format = "text"          # or "json"
//! filter = "edustage=info" # EnvFilter directive
//! ```
//!
//! Lookup order: `--config <PATH>`, then `edustage.toml` in the working
//! directory, then built-in defaults.

use crate::error::AppError;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "edustage.toml";

/// Environment variable overriding `logging.format`.
pub const LOG_FORMAT_ENV: &str = "EDUSTAGE_LOG_FORMAT";

/// Default tracing filter.
pub const DEFAULT_LOG_FILTER: &str = "edustage=info";

/// Tracing filter used with `--verbose`.
pub const VERBOSE_LOG_FILTER: &str = "edustage=debug,edustage_core=debug";

/// Tracing filter used with `--quiet`.
pub const QUIET_LOG_FILTER: &str = "edustage=warn,edustage_core=warn";

/// Maximum config file size (64 KB).
pub const MAX_CONFIG_FILE_SIZE: u64 = 64 * 1024;

// =============================================================================
// CONFIG STRUCTURE
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Country used by `profile`, `grade` and `age` when none is given.
    pub default_country: Option<String>,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Render JSON instead of text, as with `--json-mode`.
    pub json: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    pub format: LogFormat,
    /// EnvFilter directive; `RUST_LOG` still takes precedence.
    pub filter: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl LogFormat {
    /// Parse an environment override; anything but "json" means text.
    #[must_use]
    pub fn from_env_value(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("json") {
            LogFormat::Json
        } else {
            LogFormat::Text
        }
    }
}

impl LoggingConfig {
    /// Effective log format, given the value of `EDUSTAGE_LOG_FORMAT`.
    #[must_use]
    pub fn resolve_format(&self, env_value: Option<&str>) -> LogFormat {
        env_value.map_or(self.format, LogFormat::from_env_value)
    }

    /// Effective filter directive.
    #[must_use]
    pub fn resolve_filter(&self, verbose: bool, quiet: bool) -> String {
        if verbose {
            return VERBOSE_LOG_FILTER.to_string();
        }
        if quiet {
            return QUIET_LOG_FILTER.to_string();
        }
        self.filter
            .clone()
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
    }

    /// Build the `EnvFilter` for the effective directive.
    ///
    /// Unlike `EnvFilter::from`, malformed directives are reported instead of
    /// being skipped.
    pub fn env_filter(&self, verbose: bool, quiet: bool) -> Result<EnvFilter, AppError> {
        let directive = self.resolve_filter(verbose, quiet);
        EnvFilter::try_new(&directive).map_err(|source| AppError::InvalidLogFilter {
            filter: directive,
            source,
        })
    }
}

// =============================================================================
// LOADING
// =============================================================================

impl AppConfig {
    /// Load the configuration.
    ///
    /// An explicit `path` must exist. Without one, `edustage.toml` is read if
    /// present and defaults are used otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self, AppError> {
        Self::load_in(path, Path::new(""))
    }

    /// Like [`AppConfig::load`], looking for `edustage.toml` in `dir`.
    pub fn load_in(path: Option<&Path>, dir: &Path) -> Result<Self, AppError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let fallback = dir.join(DEFAULT_CONFIG_FILE);
                if fallback.is_file() {
                    Self::from_file(&fallback)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Read and parse a config file.
    pub fn from_file(path: &Path) -> Result<Self, AppError> {
        let read_error = |source| AppError::ConfigRead {
            path: path.to_path_buf(),
            source,
        };

        let size = std::fs::metadata(path).map_err(read_error)?.len();
        if size > MAX_CONFIG_FILE_SIZE {
            return Err(AppError::ConfigTooLarge {
                path: path.to_path_buf(),
                size,
                max: MAX_CONFIG_FILE_SIZE,
            });
        }

        let contents = std::fs::read_to_string(path).map_err(read_error)?;
        Self::parse(&contents, path.to_path_buf())
    }

    /// Parse TOML contents; `origin` is only used in error messages.
    pub fn parse(contents: &str, origin: PathBuf) -> Result<Self, AppError> {
        toml::from_str(contents).map_err(|source| AppError::ConfigParse {
            path: origin,
            source,
        })
    }

    /// The country to use: the explicit one, else `default_country`.
    pub fn resolve_country(&self, explicit: Option<String>) -> Result<String, AppError> {
        explicit
            .or_else(|| self.default_country.clone())
            .filter(|c| !c.trim().is_empty())
            .ok_or(AppError::MissingCountry)
    }
}
