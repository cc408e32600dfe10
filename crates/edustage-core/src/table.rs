//! # Education Level Table
//!
//! Read-only lookup over country education profiles.
//!
//! - Country keys are ISO 3166-1 alpha-2 codes, matched after trimming and
//!   upper-casing; English country names are accepted as well
//! - Results are ordered deterministically (BTreeMap iteration order)
//! - The built-in table is created once, on first access, and shared by
//!   `&'static` reference

use crate::dataset;
use crate::isced::IscedLevel;
use crate::primitives::{normalize_country_code, normalize_name};
use crate::types::{CountryEducationProfile, EduError, Grade, Stage};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;

static BUILTIN: LazyLock<EducationLevelTable> =
    LazyLock::new(|| EducationLevelTable::from_trusted(dataset::builtin_profiles()));

/// Immutable mapping from country to education profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EducationLevelTable {
    /// Profiles keyed by upper-case country code.
    profiles: BTreeMap<String, CountryEducationProfile>,
    /// Normalized country name -> country code.
    names: BTreeMap<String, String>,
}

impl EducationLevelTable {
    /// The process-wide table compiled into the crate.
    #[must_use]
    pub fn builtin() -> &'static EducationLevelTable {
        &BUILTIN
    }

    /// Build a table from profiles, checking every invariant.
    ///
    /// Returns `EduError::InvalidProfile` if a profile is malformed and
    /// `EduError::DuplicateCountry` if two profiles share a code or a name.
    pub fn from_profiles(profiles: Vec<CountryEducationProfile>) -> Result<Self, EduError> {
        let mut table = Self::empty();
        for profile in profiles {
            profile.validate()?;

            let name_key = normalize_name(&profile.name);
            if table.profiles.contains_key(&profile.country) {
                return Err(EduError::DuplicateCountry(profile.country));
            }
            if table.names.contains_key(&name_key) {
                return Err(EduError::DuplicateCountry(profile.name));
            }

            table.names.insert(name_key, profile.country.clone());
            table.profiles.insert(profile.country.clone(), profile);
        }
        Ok(table)
    }

    /// Build a table from profiles already known to be well-formed.
    ///
    /// Only used for the embedded dataset, whose invariants are covered by
    /// the test suite.
    fn from_trusted(profiles: Vec<CountryEducationProfile>) -> Self {
        let mut table = Self::empty();
        for profile in profiles {
            table
                .names
                .insert(normalize_name(&profile.name), profile.country.clone());
            table.profiles.insert(profile.country.clone(), profile);
        }
        table
    }

    fn empty() -> Self {
        Self {
            profiles: BTreeMap::new(),
            names: BTreeMap::new(),
        }
    }

    /// Check every invariant of every profile.
    pub fn validate(&self) -> Result<(), EduError> {
        self.profiles.values().try_for_each(|p| p.validate())
    }

    /// Get the profile of a country.
    ///
    /// `country` is either an ISO 3166-1 alpha-2 code or an English country
    /// name; both are matched ignoring case and surrounding whitespace.
    ///
    /// Returns `EduError::CountryNotFound` if the country is absent.
    pub fn get_profile(&self, country: &str) -> Result<&CountryEducationProfile, EduError> {
        if let Some(profile) = self.profiles.get(&normalize_country_code(country)) {
            return Ok(profile);
        }

        self.names
            .get(&normalize_name(country))
            .and_then(|code| self.profiles.get(code))
            .ok_or_else(|| EduError::CountryNotFound(country.trim().to_string()))
    }

    /// Check if a country is known.
    #[must_use]
    pub fn contains(&self, country: &str) -> bool {
        self.get_profile(country).is_ok()
    }

    /// All known country codes.
    #[must_use]
    pub fn list_countries(&self) -> BTreeSet<&str> {
        self.profiles.keys().map(String::as_str).collect()
    }

    /// All profiles, ordered by country code.
    pub fn profiles(&self) -> impl Iterator<Item = &CountryEducationProfile> {
        self.profiles.values()
    }

    /// Every stage classified at `level`, across all countries.
    ///
    /// Ordered by country code, then by position in the profile. Empty if no
    /// stage matches.
    #[must_use]
    pub fn stages_by_isced(&self, level: IscedLevel) -> Vec<(&str, &Stage)> {
        self.profiles
            .iter()
            .flat_map(|(code, profile)| {
                profile
                    .stages_at(level)
                    .map(move |stage| (code.as_str(), stage))
            })
            .collect()
    }

    /// Like [`stages_by_isced`](Self::stages_by_isced), from a numeric code.
    ///
    /// Returns `EduError::InvalidIscedLevel` if `code` is outside 0..=8.
    pub fn stages_by_isced_code(&self, code: u8) -> Result<Vec<(&str, &Stage)>, EduError> {
        let level = IscedLevel::try_from(code)?;
        Ok(self.stages_by_isced(level))
    }

    /// Find a grade of a country by its year number.
    pub fn find_grade_by_level(&self, country: &str, level: i8) -> Result<&Grade, EduError> {
        self.get_profile(country)?.grade_by_level(level)
    }

    /// Find a grade of a country by its name.
    pub fn find_grade_by_name(&self, country: &str, name: &str) -> Result<&Grade, EduError> {
        self.get_profile(country)?.grade_by_name(name)
    }

    /// Find a grade of a country by its short name.
    pub fn find_grade_by_short_name(
        &self,
        country: &str,
        short_name: &str,
    ) -> Result<&Grade, EduError> {
        self.get_profile(country)?.grade_by_short_name(short_name)
    }

    /// Number of countries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

// =============================================================================
// TESTS
// =============================================================================
