//! Roll outcomes: per-die results and the assembled check result.

use serde::{Deserialize, Serialize};

use crate::bonus::BonusApplication;

/// The result of one die in a resolved roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DieResult {
    /// Face rolled, after any luck reroll and before skill bonus.
    pub base: u32,
    /// Face after skill bonus, clamped to the die.
    pub value: u32,
    /// True if this die was added by an exploding 10.
    pub critical: bool,
}

impl DieResult {
    /// Skill points added to this die.
    pub fn bonus(&self) -> u32 {
        self.value.saturating_sub(self.base)
    }

    /// Returns true if the final face meets `threshold`.
    pub fn is_success(&self, threshold: u32) -> bool {
        self.value >= threshold
    }
}

/// A luck point spent to reroll the worst base die.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LuckReroll {
    /// Which base die was rerolled.
    pub die_index: usize,
    /// Face before the reroll.
    pub previous: u32,
    /// Face after the reroll.
    pub rerolled: u32,
}

/// Everything a renderer needs to show a resolved check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollOutcome {
    /// Base pool first, then critical dice in discovery order.
    pub dice: Vec<DieResult>,
    /// Dice meeting the threshold, plus flat successes.
    pub successes: u32,
    /// How many dice exploding 10s added.
    pub critical_dice_added: u32,
    /// Skill bonus changes, in the order they were applied.
    pub bonus_applications: Vec<BonusApplication>,
    /// The luck reroll, if one was spent.
    pub luck_reroll: Option<LuckReroll>,
    /// Successes granted without dice.
    pub flat_successes: u32,
    /// Face a die needed to count as a success.
    pub success_threshold: u32,
}

impl RollOutcome {
    /// Final faces in dice order.
    pub fn values(&self) -> Vec<u32> {
        self.dice.iter().map(|d| d.value).collect()
    }

    /// Pre-bonus faces in dice order.
    pub fn base_values(&self) -> Vec<u32> {
        self.dice.iter().map(|d| d.base).collect()
    }

    /// Dice added by exploding 10s.
    pub fn critical_dice(&self) -> impl Iterator<Item = &DieResult> {
        self.dice.iter().filter(|d| d.critical)
    }

    /// Successes scored by dice alone.
    pub fn dice_successes(&self) -> u32 {
        self.successes.saturating_sub(self.flat_successes)
    }

    /// Returns true if the check scored at least one success.
    pub fn is_success(&self) -> bool {
        self.successes > 0
    }

    /// Total skill points that landed on dice.
    pub fn bonus_total(&self) -> u32 {
        self.bonus_applications.iter().map(|b| b.amount).sum()
    }
}

impl std::fmt::Display for RollOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let faces: Vec<String> = self
            .dice
            .iter()
            .map(|d| {
                let mut face = if d.base == d.value {
                    d.value.to_string()
                } else {
                    format!("{}→{}", d.base, d.value)
                };
                if d.critical {
                    face.push('*');
                }
                face
            })
            .collect();
        write!(f, "[{}]", faces.join(", "))?;
        if self.flat_successes > 0 {
            write!(f, " +{}", self.flat_successes)?;
        }
        let noun = if self.successes == 1 {
            "success"
        } else {
            "successes"
        };
        write!(f, " = {} {noun}", self.successes)
    }
}
