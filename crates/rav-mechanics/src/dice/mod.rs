//! Dice types, random sources, and roll results.
//!
//! Checks roll pools of d10s. The d6 is only used for the per-session
//! luck roll.

pub mod roll;
pub mod source;

pub use roll::{DieResult, LuckReroll, RollOutcome};
pub use source::{RandomSource, RngSource, ScriptedSource};

use serde::{Deserialize, Serialize};

/// A polyhedral die type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Die {
    /// Six-sided die.
    D6,
    /// Ten-sided die.
    D10,
}

impl Die {
    /// Returns the number of sides on this die.
    pub const fn sides(self) -> u32 {
        match self {
            Self::D6 => 6,
            Self::D10 => 10,
        }
    }

    /// Returns true if `value` is a face of this die.
    pub fn has_face(self, value: u32) -> bool {
        (1..=self.sides()).contains(&value)
    }
}

impl std::fmt::Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "d{}", self.sides())
    }
}
