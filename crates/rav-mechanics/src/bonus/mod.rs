//! Skill-bonus distribution across a rolled pool.
//!
//! A skill adds points to die faces after the roll. The character's tier
//! decides how those points are spread:
//! - **Novice**: half the level (rounded up) on one die
//! - **Expert**: the full level on one die
//! - **Master**: the level split in two halves, each on one die
//! - **Grand Master**: the level spread greedily over as many dice as needed
//!
//! Every policy mutates the faces in place and returns a trace of what it
//! added where, so a renderer can show "3 → 7 (+4)" without recomputing.

pub mod greedy;
pub mod single;

pub use greedy::apply_bonus_greedy;
pub use single::apply_bonus_to_one;

use serde::{Deserialize, Serialize};

use crate::rules::CHECK_DIE;
use crate::tier::Tier;

/// Highest face a bonus can push a die to.
pub const MAX_FACE: u32 = CHECK_DIE.sides();

/// One bonus added to one die.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BonusApplication {
    /// Position of the die in the outcome's dice list.
    pub die_index: usize,
    /// Points actually added, after clamping at the maximum face.
    pub amount: u32,
}

/// How a skill bonus is spread over the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BonusPolicy {
    /// No bonus: a pure attribute check, or no tier matched.
    None,
    /// The whole amount on the single best die.
    SingleDie {
        /// Points to add.
        amount: u32,
    },
    /// Two single-die applications, the second seeing the first's result.
    Split {
        /// Points for the first application.
        first: u32,
        /// Points for the second application (skipped when zero).
        second: u32,
    },
    /// Nearest-to-success first, across as many dice as the amount covers.
    Greedy {
        /// Points to distribute.
        amount: u32,
    },
}

impl BonusPolicy {
    /// Select the policy for a tier and skill level.
    ///
    /// A level of zero, or a missing tier, means no bonus.
    pub fn for_tier(tier: Option<Tier>, skill_level: u32) -> Self {
        if skill_level == 0 {
            return Self::None;
        }
        match tier {
            None => Self::None,
            Some(Tier::Novice) => Self::SingleDie {
                amount: skill_level.div_ceil(2),
            },
            Some(Tier::Expert) => Self::SingleDie {
                amount: skill_level,
            },
            Some(Tier::Master) => Self::Split {
                first: skill_level.div_ceil(2),
                second: skill_level / 2,
            },
            Some(Tier::Grandmaster) => Self::Greedy {
                amount: skill_level,
            },
        }
    }

    /// Total points this policy tries to add.
    pub fn total(&self) -> u32 {
        match *self {
            Self::None => 0,
            Self::SingleDie { amount } | Self::Greedy { amount } => amount,
            Self::Split { first, second } => first + second,
        }
    }

    /// Apply the policy to `dice`, returning the changes in order.
    pub fn apply(&self, dice: &mut [u32], threshold: u32) -> Vec<BonusApplication> {
        match *self {
            Self::None => Vec::new(),
            Self::SingleDie { amount } => apply_bonus_to_one(dice, amount, threshold)
                .into_iter()
                .collect(),
            Self::Split { first, second } => {
                let mut applied: Vec<BonusApplication> =
                    apply_bonus_to_one(dice, first, threshold).into_iter().collect();
                if second > 0 {
                    applied.extend(apply_bonus_to_one(dice, second, threshold));
                }
                applied
            }
            Self::Greedy { amount } => apply_bonus_greedy(dice, amount, threshold),
        }
    }
}

/// Add up to `amount` to `dice[index]`, clamped at [`MAX_FACE`].
///
/// Returns `None` when nothing could be added.
pub(crate) fn raise(dice: &mut [u32], index: usize, amount: u32) -> Option<BonusApplication> {
    let current = *dice.get(index)?;
    let raised = current.saturating_add(amount).min(MAX_FACE);
    let added = raised.saturating_sub(current);
    if added == 0 {
        return None;
    }
    dice[index] = raised;
    Some(BonusApplication {
        die_index: index,
        amount: added,
    })
}

/// Index of the highest face satisfying `eligible`, first on ties.
pub(crate) fn highest_where(dice: &[u32], eligible: impl Fn(u32) -> bool) -> Option<usize> {
    let mut best: Option<(usize, u32)> = None;
    for (index, &value) in dice.iter().enumerate() {
        if !eligible(value) {
            continue;
        }
        match best {
            Some((_, top)) if top >= value => {}
            _ => best = Some((index, value)),
        }
    }
    best.map(|(index, _)| index)
}
