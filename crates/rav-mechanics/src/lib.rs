//! d10 dice-pool roll engine for Rise of Arcane and Valor.
//!
//! Roll a pool of d10s sized by an attribute, reroll the worst die with
//! luck, explode natural 10s into critical dice, spread the skill bonus
//! according to the character's tier, and count faces of 7 or more as
//! successes. Randomness is always injected through [`RandomSource`].

pub mod bonus;
pub mod dice;
pub mod engine;
pub mod error;
pub mod rules;
pub mod sheet;
pub mod tier;

pub use bonus::{BonusApplication, BonusPolicy, apply_bonus_greedy, apply_bonus_to_one};
pub use dice::{Die, DieResult, LuckReroll, RandomSource, RngSource, RollOutcome, ScriptedSource};
pub use engine::{RollEngine, RollRequest, resolve_roll};
pub use error::{MechError, MechResult};
pub use rules::{CriticalCascade, MAX_POOL, RuleSet, SUCCESS_THRESHOLD, TierThresholds};
pub use sheet::{Attribute, CharacterSheet, Skill, Track, UnknownAttribute};
pub use tier::{Tier, UnknownTier};
