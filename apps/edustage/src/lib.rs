//! # edustage
//!
//! Command-line viewer over the `edustage-core` table.
//!
//! The library half exists so that integration tests can drive the CLI
//! parser, the configuration loader and the renderers directly.

pub mod cli;
pub mod config;
pub mod error;
pub mod output;

pub use config::AppConfig;
pub use error::AppError;
