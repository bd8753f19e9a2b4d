//! Ruleset configuration: thresholds, tier bands, pool cap, and critical
//! cascade.
//!
//! A [`RuleSet`] is an immutable value handed to the engine. The standard
//! Rise of Arcane and Valor numbers live in [`preset::standard`]; a ruleset
//! can also be loaded from JSON via [`RuleSet::from_json`], where omitted
//! fields fall back to the standard values.

pub mod preset;

use serde::{Deserialize, Serialize};

use crate::dice::Die;
use crate::error::{MechError, MechResult};
use crate::tier::Tier;

/// A die showing this value or higher is a success.
pub const SUCCESS_THRESHOLD: u32 = 7;

/// The die every check pool is made of.
pub const CHECK_DIE: Die = Die::D10;

/// The die rolled once per session for luck points.
pub const LUCK_DIE: Die = Die::D6;

/// Most base dice a standard check rolls. Larger requests are clamped.
pub const MAX_POOL: u32 = 100;

/// Skill level at which each tier unlocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TierThresholds {
    /// Lowest novice level.
    pub novice: i64,
    /// Lowest expert level.
    pub expert: i64,
    /// Lowest master level.
    pub master: i64,
    /// Lowest grand master level.
    pub grandmaster: i64,
}

impl TierThresholds {
    /// The standard bands: novice 1, expert 4, master 7, grand master 9.
    pub const STANDARD: TierThresholds = TierThresholds {
        novice: 1,
        expert: 4,
        master: 7,
        grandmaster: 9,
    };

    /// Map a skill level to its tier. Anything below expert is novice.
    pub fn classify(&self, level: i64) -> Tier {
        if level >= self.grandmaster {
            Tier::Grandmaster
        } else if level >= self.master {
            Tier::Master
        } else if level >= self.expert {
            Tier::Expert
        } else {
            Tier::Novice
        }
    }

    /// The level at which `tier` unlocks.
    pub fn threshold(&self, tier: Tier) -> i64 {
        match tier {
            Tier::Novice => self.novice,
            Tier::Expert => self.expert,
            Tier::Master => self.master,
            Tier::Grandmaster => self.grandmaster,
        }
    }
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// How far natural 10s keep exploding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CriticalCascade {
    /// Base 10s add one die each; a 10 on one of those adds one more, and
    /// the chain ends there.
    #[default]
    Bounded,
    /// Every new generation of critical dice is scanned again until a
    /// generation rolls no 10.
    Unbounded,
}

impl CriticalCascade {
    /// Number of critical generations to draw, or `None` for no limit.
    pub fn max_generations(self) -> Option<usize> {
        match self {
            Self::Bounded => Some(2),
            Self::Unbounded => None,
        }
    }
}

/// A complete roll-engine configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleSet {
    /// System name.
    pub name: String,
    /// Final die value counted as a success.
    pub success_threshold: u32,
    /// Skill level bands for the tier classifier.
    pub tier_thresholds: TierThresholds,
    /// Most base dice one check rolls.
    pub max_pool: u32,
    /// Critical explosion depth.
    pub cascade: CriticalCascade,
}

impl Default for RuleSet {
    fn default() -> Self {
        preset::standard()
    }
}

impl RuleSet {
    /// Load a ruleset from JSON. Missing fields take the standard values.
    pub fn from_json(json: &str) -> MechResult<Self> {
        let rules: Self =
            serde_json::from_str(json).map_err(|e| MechError::InvalidConfig(e.to_string()))?;
        rules.validate()?;
        Ok(rules)
    }

    /// Check that the thresholds are usable with a d10 pool.
    pub fn validate(&self) -> MechResult<()> {
        if !CHECK_DIE.has_face(self.success_threshold) {
            return Err(MechError::InvalidConfig(format!(
                "success_threshold {} is not a face of {CHECK_DIE}",
                self.success_threshold
            )));
        }
        if self.max_pool == 0 {
            return Err(MechError::InvalidConfig(
                "max_pool must be at least 1".to_string(),
            ));
        }
        let t = &self.tier_thresholds;
        if t.novice > t.expert || t.expert > t.master || t.master > t.grandmaster {
            return Err(MechError::InvalidConfig(
                "tier thresholds must be ascending".to_string(),
            ));
        }
        Ok(())
    }

    /// Classify a skill level under this ruleset's bands.
    pub fn tier_for(&self, level: i64) -> Tier {
        self.tier_thresholds.classify(level)
    }

    /// Clamp a requested pool to `1..=max_pool`.
    pub fn clamp_pool(&self, requested: usize) -> usize {
        let cap = usize::try_from(self.max_pool).unwrap_or(usize::MAX);
        requested.clamp(1, cap.max(1))
    }
}
