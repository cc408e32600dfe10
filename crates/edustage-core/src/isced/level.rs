//! # ISCED Levels
//!
//! ## Level Definitions
//!
//! | Code | Name | Broad stage |
//! |------|------|-------------|
//! | 0 | Early childhood education | Early childhood |
//! | 1 | Primary education | Primary |
//! | 2 | Lower secondary education | Secondary |
//! | 3 | Upper secondary education | Secondary |
//! | 4 | Post-secondary non-tertiary education | Secondary |
//! | 5 | Short-cycle tertiary education | Tertiary |
//! | 6 | Bachelor's or equivalent level | Tertiary |
//! | 7 | Master's or equivalent level | Tertiary |
//! | 8 | Doctoral or equivalent level | Tertiary |
//!
//! Level 4 is grouped with secondary education: it is taken after upper
//! secondary school but is not tertiary.

use crate::EduError;
use crate::primitives::{MAX_ISCED_CODE, MIN_ISCED_CODE};
use serde::{Deserialize, Serialize};

// =============================================================================
// ISCED LEVEL ENUM
// =============================================================================

/// ISCED 2011 level, from 0 (early childhood) to 8 (doctoral).
///
/// Serialized as its numeric code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum IscedLevel {
    /// ISCED 0: Early childhood education
    Level0,
    /// ISCED 1: Primary education
    Level1,
    /// ISCED 2: Lower secondary education
    Level2,
    /// ISCED 3: Upper secondary education
    Level3,
    /// ISCED 4: Post-secondary non-tertiary education
    Level4,
    /// ISCED 5: Short-cycle tertiary education
    Level5,
    /// ISCED 6: Bachelor's or equivalent level
    Level6,
    /// ISCED 7: Master's or equivalent level
    Level7,
    /// ISCED 8: Doctoral or equivalent level
    Level8,
}

impl IscedLevel {
    /// All levels in ascending order.
    pub const ALL: [IscedLevel; 9] = [
        IscedLevel::Level0,
        IscedLevel::Level1,
        IscedLevel::Level2,
        IscedLevel::Level3,
        IscedLevel::Level4,
        IscedLevel::Level5,
        IscedLevel::Level6,
        IscedLevel::Level7,
        IscedLevel::Level8,
    ];

    /// Get the numeric ISCED code.
    #[must_use]
    pub const fn code(&self) -> u8 {
        match self {
            IscedLevel::Level0 => 0,
            IscedLevel::Level1 => 1,
            IscedLevel::Level2 => 2,
            IscedLevel::Level3 => 3,
            IscedLevel::Level4 => 4,
            IscedLevel::Level5 => 5,
            IscedLevel::Level6 => 6,
            IscedLevel::Level7 => 7,
            IscedLevel::Level8 => 8,
        }
    }

    /// Get the level from its numeric code, if it is in range.
    #[must_use]
    pub const fn from_code(code: u8) -> Option<IscedLevel> {
        match code {
            0 => Some(IscedLevel::Level0),
            1 => Some(IscedLevel::Level1),
            2 => Some(IscedLevel::Level2),
            3 => Some(IscedLevel::Level3),
            4 => Some(IscedLevel::Level4),
            5 => Some(IscedLevel::Level5),
            6 => Some(IscedLevel::Level6),
            7 => Some(IscedLevel::Level7),
            8 => Some(IscedLevel::Level8),
            _ => None,
        }
    }

    /// Get the ISCED 2011 level name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            IscedLevel::Level0 => "Early childhood education",
            IscedLevel::Level1 => "Primary education",
            IscedLevel::Level2 => "Lower secondary education",
            IscedLevel::Level3 => "Upper secondary education",
            IscedLevel::Level4 => "Post-secondary non-tertiary education",
            IscedLevel::Level5 => "Short-cycle tertiary education",
            IscedLevel::Level6 => "Bachelor's or equivalent level",
            IscedLevel::Level7 => "Master's or equivalent level",
            IscedLevel::Level8 => "Doctoral or equivalent level",
        }
    }

    /// Get the broad educational stage this level belongs to.
    #[must_use]
    pub fn broad_stage(&self) -> BroadStage {
        match self {
            IscedLevel::Level0 => BroadStage::EarlyChildhood,
            IscedLevel::Level1 => BroadStage::Primary,
            IscedLevel::Level2 | IscedLevel::Level3 | IscedLevel::Level4 => BroadStage::Secondary,
            IscedLevel::Level5 | IscedLevel::Level6 | IscedLevel::Level7 | IscedLevel::Level8 => {
                BroadStage::Tertiary
            }
        }
    }

    /// Get the next level, if any.
    #[must_use]
    pub fn next(&self) -> Option<IscedLevel> {
        Self::from_code(self.code().saturating_add(1))
    }

    /// Get the previous level, if any.
    #[must_use]
    pub fn previous(&self) -> Option<IscedLevel> {
        self.code().checked_sub(1).and_then(Self::from_code)
    }

    /// Check if this level is tertiary education (5 to 8).
    #[must_use]
    pub fn is_tertiary(&self) -> bool {
        self.broad_stage() == BroadStage::Tertiary
    }

    /// Check if this level is terminal (8).
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, IscedLevel::Level8)
    }
}

impl TryFrom<u8> for IscedLevel {
    type Error = EduError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or(EduError::InvalidIscedLevel(code))
    }
}

impl From<IscedLevel> for u8 {
    fn from(level: IscedLevel) -> Self {
        level.code()
    }
}

impl std::fmt::Display for IscedLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ISCED {}: {}", self.code(), self.name())
    }
}

// Keep the code range and the enum in lockstep.
const _: () = assert!(IscedLevel::Level0.code() == MIN_ISCED_CODE);
const _: () = assert!(IscedLevel::Level8.code() == MAX_ISCED_CODE);

// =============================================================================
// BROAD STAGE
// =============================================================================

/// The broad educational stages, as commonly named outside of ISCED.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BroadStage {
    /// Preschool, nursery school or kindergarten.
    EarlyChildhood,
    /// Primary school or elementary school.
    Primary,
    /// Middle school, secondary school or high school.
    Secondary,
    /// Higher or vocational education.
    Tertiary,
}

impl BroadStage {
    /// Get the stage name, e.g. "Secondary education".
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            BroadStage::EarlyChildhood => "Early childhood education",
            BroadStage::Primary => "Primary education",
            BroadStage::Secondary => "Secondary education",
            BroadStage::Tertiary => "Tertiary education",
        }
    }
}

impl std::fmt::Display for BroadStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// TESTS
// =============================================================================
