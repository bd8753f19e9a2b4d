//! Character sheets: attributes, skills, and resource tracks.
//!
//! The sheet is the adapter between a character and the roll engine. It
//! turns "roll Agility" or "roll Swords with Might" into a [`RollRequest`],
//! classifying skill and specialty tiers under the ruleset's bands, and
//! keeps the health, magic, and luck tracks. Persistence is left to the
//! host.

pub mod attribute;
pub mod derived;
pub mod track;

pub use attribute::{Attribute, UnknownAttribute};
pub use track::Track;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::dice::RandomSource;
use crate::dice::source::draw_face;
use crate::engine::RollRequest;
use crate::error::{MechError, MechResult};
use crate::rules::{LUCK_DIE, RuleSet};
use crate::tier::Tier;

/// Attribute rating used when a sheet has none recorded.
pub const DEFAULT_RATING: u32 = 1;

/// A trained skill or specialty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    /// Display name.
    pub label: String,
    /// Skill level; zero means untrained.
    pub level: u32,
}

impl Skill {
    /// Tier implied by the level under `rules`.
    pub fn tier(&self, rules: &RuleSet) -> Tier {
        rules.tier_for(i64::from(self.level))
    }
}

/// A character's mechanical state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterSheet {
    /// Character name.
    pub name: String,
    /// Attribute ratings.
    pub attributes: BTreeMap<Attribute, u32>,
    /// Skills keyed by lowercase name.
    pub skills: BTreeMap<String, Skill>,
    /// Narrow specialties keyed by lowercase name, tiered like skills.
    #[serde(default)]
    pub specialties: BTreeMap<String, Skill>,
    /// Hit points; maximum follows Endurance.
    pub health: Track,
    /// Magic points; maximum follows Endurance.
    pub magic: Track,
    /// Luck points for the current session.
    pub luck: Track,
}

impl CharacterSheet {
    /// A fresh sheet with every attribute at [`DEFAULT_RATING`].
    pub fn new(name: impl Into<String>) -> Self {
        let attributes = Attribute::ALL
            .into_iter()
            .map(|a| (a, DEFAULT_RATING))
            .collect();
        let mut sheet = Self {
            name: name.into(),
            attributes,
            skills: BTreeMap::new(),
            specialties: BTreeMap::new(),
            health: Track::new("Health", 0),
            magic: Track::new("Magic", 0),
            luck: Track::empty("Luck", i32::try_from(LUCK_DIE.sides()).unwrap_or(i32::MAX)),
        };
        sheet.refresh_derived();
        sheet.health.set(sheet.health.max);
        sheet.magic.set(sheet.magic.max);
        sheet
    }

    /// Set an attribute rating, refreshing derived stats.
    pub fn with_attribute(mut self, attribute: Attribute, rating: u32) -> Self {
        self.set_attribute(attribute, rating);
        self
    }

    /// Add or replace a skill.
    pub fn with_skill(mut self, label: impl Into<String>, level: u32) -> Self {
        let label = label.into();
        self.skills.insert(label.to_lowercase(), Skill { label, level });
        self
    }

    /// Add or replace a specialty.
    pub fn with_specialty(mut self, label: impl Into<String>, level: u32) -> Self {
        let label = label.into();
        self.specialties
            .insert(label.to_lowercase(), Skill { label, level });
        self
    }

    /// Set an attribute rating, refreshing derived stats.
    pub fn set_attribute(&mut self, attribute: Attribute, rating: u32) {
        self.attributes.insert(attribute, rating);
        if attribute == Attribute::Endurance {
            self.refresh_derived();
        }
    }

    /// An attribute's rating, or [`DEFAULT_RATING`] if unset.
    pub fn attribute(&self, attribute: Attribute) -> u32 {
        self.attributes
            .get(&attribute)
            .copied()
            .unwrap_or(DEFAULT_RATING)
    }

    /// Look up a skill by name, case-insensitively.
    pub fn skill(&self, name: &str) -> Option<&Skill> {
        self.skills.get(&name.to_lowercase())
    }

    /// Look up a specialty by name, case-insensitively.
    pub fn specialty(&self, name: &str) -> Option<&Skill> {
        self.specialties.get(&name.to_lowercase())
    }

    /// Recompute health and magic maximums from Endurance.
    pub fn refresh_derived(&mut self) {
        let endurance = self.attribute(Attribute::Endurance);
        self.health.set_max(derived::health_max(endurance));
        self.magic.set_max(derived::magic_max(endurance));
    }

    /// A pure attribute check.
    pub fn attribute_check(&self, attribute: Attribute) -> RollRequest {
        RollRequest::attribute(i64::from(self.attribute(attribute)))
    }

    /// A skill check paired with an attribute, tiered under `rules`.
    pub fn skill_check(
        &self,
        skill: &str,
        attribute: Attribute,
        rules: &RuleSet,
    ) -> MechResult<RollRequest> {
        let skill = self
            .skill(skill)
            .ok_or_else(|| MechError::UnknownSkill(skill.to_string()))?;
        Ok(self.trained_check(skill, attribute, rules))
    }

    /// A specialty check paired with an attribute, tiered under `rules`.
    pub fn specialty_check(
        &self,
        specialty: &str,
        attribute: Attribute,
        rules: &RuleSet,
    ) -> MechResult<RollRequest> {
        let specialty = self
            .specialty(specialty)
            .ok_or_else(|| MechError::UnknownSpecialty(specialty.to_string()))?;
        Ok(self.trained_check(specialty, attribute, rules))
    }

    fn trained_check(&self, skill: &Skill, attribute: Attribute, rules: &RuleSet) -> RollRequest {
        RollRequest::classified(
            i64::from(self.attribute(attribute)),
            skill.level,
            &rules.tier_thresholds,
        )
    }

    /// Roll the session's luck points (1d6), replacing any left over.
    pub fn roll_luck<S: RandomSource + ?Sized>(&mut self, source: &mut S) -> MechResult<u32> {
        let points = draw_face(source, LUCK_DIE)?;
        self.luck.set(i32::try_from(points).unwrap_or(self.luck.max));
        Ok(points)
    }

    /// Spend one luck point. Returns whether one was available.
    pub fn spend_luck(&mut self) -> bool {
        self.luck.spend_one()
    }
}
