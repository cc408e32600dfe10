//! # ISCED Module
//!
//! The International Standard Classification of Education (ISCED 2011),
//! maintained by UNESCO, and the broad educational stages it refines.
//!
//! Levels are compiled into the crate and never change at runtime.

mod level;

pub use level::*;
