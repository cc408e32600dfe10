//! # edustage
//!
//! The main binary for the edustage education level table.
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────┐
//! │            apps/edustage (THE BINARY)         │
//! │                                               │
//! │  ┌──────────┐   ┌──────────┐   ┌───────────┐  │
//! │  │   CLI    │   │  Config  │   │  Output   │  │
//! │  │  (clap)  │   │  (toml)  │   │(text/json)│  │
//! │  └────┬─────┘   └────┬─────┘   └─────┬─────┘  │
//! │       └──────────────┼───────────────┘        │
//! │                      ▼                        │
//! │              ┌───────────────┐                │
//! │              │ edustage-core │                │
//! │              │  (THE LOGIC)  │                │
//! │              └───────────────┘                │
//! └───────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! edustage countries
//! edustage profile FR
//! edustage isced 3 --json-mode
//! edustage grade US --short-name K
//! edustage age 15 "United Kingdom"
//! ```

use clap::Parser;
use edustage::cli::{self, Cli};
use edustage::AppError;
use edustage::config::{AppConfig, DEFAULT_LOG_FILTER, LOG_FORMAT_ENV, LogFormat, LoggingConfig};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

fn main() -> ExitCode {
    // Parse CLI arguments first: they name the config file.
    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref());
    let logging = config
        .as_ref()
        .map(|c| c.logging.clone())
        .unwrap_or_default();
    let filter = init_tracing(&logging, cli.verbose, cli.quiet);

    let result = filter.and(config).and_then(|config| {
        tracing::debug!(?config, "Configuration loaded");
        cli::execute(cli, &config)
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Initialize tracing. EDUSTAGE_LOG_FORMAT=json enables machine-parseable output.
///
/// An invalid `logging.filter` still initializes tracing with the default
/// filter, so the returned error can be logged.
fn init_tracing(logging: &LoggingConfig, verbose: bool, quiet: bool) -> Result<(), AppError> {
    let env_format = std::env::var(LOG_FORMAT_ENV).ok();
    let format = logging.resolve_format(env_format.as_deref());

    let (filter, result) = match EnvFilter::try_from_default_env() {
        Ok(filter) => (filter, Ok(())),
        Err(_) => match logging.env_filter(verbose, quiet) {
            Ok(filter) => (filter, Ok(())),
            Err(e) => (EnvFilter::new(DEFAULT_LOG_FILTER), Err(e)),
        },
    };

    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init(),
        LogFormat::Text => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
    }
    result
}
