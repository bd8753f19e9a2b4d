//! The five attributes. A rating is the number of d10s rolled.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A character attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Attribute {
    /// Physical strength.
    Might,
    /// Speed and coordination.
    Agility,
    /// Toughness; sets health and magic.
    Endurance,
    /// Reasoning and lore.
    Intellect,
    /// Presence and charm.
    Personality,
}

impl Attribute {
    /// All attributes in sheet order.
    pub const ALL: [Attribute; 5] = [
        Attribute::Might,
        Attribute::Agility,
        Attribute::Endurance,
        Attribute::Intellect,
        Attribute::Personality,
    ];

    /// Storage key.
    pub fn key(self) -> &'static str {
        match self {
            Self::Might => "might",
            Self::Agility => "agility",
            Self::Endurance => "endurance",
            Self::Intellect => "intellect",
            Self::Personality => "personality",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Might => "Might",
            Self::Agility => "Agility",
            Self::Endurance => "Endurance",
            Self::Intellect => "Intellect",
            Self::Personality => "Personality",
        }
    }
}

impl std::fmt::Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when an attribute name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown attribute: {0}")]
pub struct UnknownAttribute(pub String);

impl FromStr for Attribute {
    type Err = UnknownAttribute;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|a| a.key() == key)
            .ok_or_else(|| UnknownAttribute(s.to_string()))
    }
}
