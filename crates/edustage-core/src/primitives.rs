//! # Table Primitives
//!
//! Hardcoded constants for the edustage CORE.
//!
//! These primitives are compiled into the binary and are immutable at runtime.

/// Lowest ISCED 2011 level code (early childhood education).
pub const MIN_ISCED_CODE: u8 = 0;

/// Highest ISCED 2011 level code (doctoral or equivalent).
pub const MAX_ISCED_CODE: u8 = 8;

/// Length of an ISO 3166-1 alpha-2 country code.
pub const COUNTRY_CODE_LENGTH: usize = 2;

/// Number of years a stage may overlap the next one.
///
/// Stage boundaries vary by locale, so the end of one stage may run past the
/// start of the next by at most this many years.
pub const AGE_BOUNDARY_TOLERANCE: u8 = 1;

/// Upper bound for any age recorded in the table.
pub const MAX_AGE: u8 = 99;

/// Normalize a country code for lookup: trimmed, ASCII upper-case.
#[must_use]
pub fn normalize_country_code(raw: &str) -> String {
    raw.trim().to_ascii_uppercase()
}

/// Normalize a free-form name for case-insensitive comparison.
#[must_use]
pub fn normalize_name(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Check that a code is a well-formed, upper-case ISO 3166-1 alpha-2 code.
#[must_use]
pub fn is_country_code(code: &str) -> bool {
    code.len() == COUNTRY_CODE_LENGTH && code.bytes().all(|b| b.is_ascii_uppercase())
}
