//! # edustage-core
//!
//! The static education level table for edustage - THE LOGIC.
//!
//! Educational stages are subdivisions of formal learning, typically
//! covering early childhood education, primary education, secondary
//! education and tertiary education. This crate maps countries to the
//! ordered stages of their school systems, annotated with approximate ages,
//! ISCED 2011 levels and the school grades pupils go through.
//!
//! ```text
//! Age  Educational stage           2-stage system   3-stage system   ISCED
//!  4   Early childhood education   Preschool        Preschool          0
//!  6   Primary education           Primary school   Elementary school  1
//! 11                                                Middle school      2
//! 13   Secondary education         Secondary school
//! 16                                                High school        3
//! ```
//!
//! Terms and ages vary from one country to another.
//!
//! ## Architectural Constraints
//!
//! - The table is immutable after construction; it is built once per process
//! - Lookups are pure and in-memory: no I/O, no async, no locking
//! - Ordering is deterministic: BTreeMap/BTreeSet only
//!
//! ## Example
//!
//! ```
//! use edustage_core::{EducationLevelTable, IscedLevel};
//!
//! let table = EducationLevelTable::builtin();
//! let us = table.get_profile("US")?;
//! assert_eq!(us.stages[0].name, "Early childhood education");
//! assert_eq!(us.stages[0].isced_level, Some(IscedLevel::Level0));
//!
//! let upper_secondary = table.stages_by_isced(IscedLevel::Level3);
//! assert!(upper_secondary.iter().any(|(_, s)| s.name == "Secondary education"));
//! # Ok::<(), edustage_core::EduError>(())
//! ```

// =============================================================================
// MODULES
// =============================================================================

mod dataset;
pub mod isced;
pub mod primitives;
pub mod table;
pub mod types;

// =============================================================================
// RE-EXPORTS
// =============================================================================

pub use isced::{BroadStage, IscedLevel};
pub use table::EducationLevelTable;
pub use types::{AgeRange, CountryEducationProfile, EduError, Grade, Stage};
