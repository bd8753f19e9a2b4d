//! Proficiency tiers and the level-to-tier classifier.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::rules::TierThresholds;

/// A proficiency band derived from a skill's level.
///
/// The tier decides how a skill bonus is spread across the dice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// Half the skill level (rounded up) on one die.
    Novice,
    /// The full skill level on one die.
    Expert,
    /// The skill level split across two dice.
    Master,
    /// The skill level spread over any number of dice.
    Grandmaster,
}

impl Tier {
    /// All tiers, lowest first.
    pub const ALL: [Tier; 4] = [Tier::Novice, Tier::Expert, Tier::Master, Tier::Grandmaster];

    /// Classify a skill level using the standard thresholds.
    ///
    /// Total over all integers: zero and negative levels are novice.
    pub fn from_level(level: i64) -> Self {
        TierThresholds::STANDARD.classify(level)
    }

    /// Storage key ("novice", "grandmaster", ...).
    pub fn key(self) -> &'static str {
        match self {
            Self::Novice => "novice",
            Self::Expert => "expert",
            Self::Master => "master",
            Self::Grandmaster => "grandmaster",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Novice => "Novice",
            Self::Expert => "Expert",
            Self::Master => "Master",
            Self::Grandmaster => "Grand Master",
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a tier name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown tier: {0}")]
pub struct UnknownTier(pub String);

impl FromStr for Tier {
    type Err = UnknownTier;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        match normalized.as_str() {
            "novice" => Ok(Self::Novice),
            "expert" => Ok(Self::Expert),
            "master" => Ok(Self::Master),
            "grandmaster" | "grand master" | "grand_master" => Ok(Self::Grandmaster),
            _ => Err(UnknownTier(s.to_string())),
        }
    }
}
