//! The roll engine: from a [`RollRequest`] to a [`RollOutcome`].
//!
//! Resolution runs in a fixed order, and the random source is drawn from in
//! that same order:
//!
//! 1. roll the base pool (at least one die)
//! 2. if luck is spent, reroll the lowest base die
//! 3. explode natural 10s into critical dice
//! 4. spread the skill bonus according to the tier
//! 5. count successes
//!
//! Reordering any of the draws changes outcomes for a given source, so the
//! engine only ever draws sequentially within one call.

use serde::{Deserialize, Deserializer, Serialize};
use tracing::{debug, instrument};

use crate::bonus::BonusPolicy;
use crate::dice::source::draw_face;
use crate::dice::{DieResult, LuckReroll, RandomSource, RollOutcome};
use crate::error::MechResult;
use crate::rules::{CHECK_DIE, CriticalCascade, RuleSet, TierThresholds};
use crate::tier::Tier;

/// A request to resolve one check.
///
/// Every field is normalized rather than rejected: a pool below one die
/// rolls one die, a pool above the ruleset's `max_pool` rolls `max_pool`
/// dice, and a missing tier means no skill bonus is applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RollRequest {
    /// Number of d10s in the pool, usually the attribute rating.
    pub dice_count: i64,
    /// Skill level added as a bonus. Zero is a pure attribute check.
    pub skill_level: u32,
    /// Tier selecting the bonus policy. Trusted as given.
    #[serde(deserialize_with = "lenient_tier")]
    pub tier: Option<Tier>,
    /// Spend a luck point to reroll the lowest die.
    pub use_luck: bool,
    /// Successes added without rolling.
    pub flat_successes: u32,
}

impl Default for RollRequest {
    fn default() -> Self {
        Self {
            dice_count: 1,
            skill_level: 0,
            tier: Some(Tier::Novice),
            use_luck: false,
            flat_successes: 0,
        }
    }
}

impl RollRequest {
    /// A pure attribute check: `dice_count` dice, no skill.
    pub fn attribute(dice_count: i64) -> Self {
        Self {
            dice_count,
            ..Self::default()
        }
    }

    /// A skill check with the tier classified from `skill_level` under the
    /// standard bands.
    pub fn skill(dice_count: i64, skill_level: u32) -> Self {
        Self::classified(dice_count, skill_level, &TierThresholds::STANDARD)
    }

    /// A skill check with the tier classified under `thresholds`.
    pub fn classified(dice_count: i64, skill_level: u32, thresholds: &TierThresholds) -> Self {
        Self {
            dice_count,
            skill_level,
            tier: Some(thresholds.classify(i64::from(skill_level))),
            ..Self::default()
        }
    }

    /// Override the tier.
    pub fn with_tier(mut self, tier: Tier) -> Self {
        self.tier = Some(tier);
        self
    }

    /// Set the tier from its name. An unknown name clears the tier, so no
    /// bonus policy applies.
    pub fn with_tier_name(mut self, name: &str) -> Self {
        self.tier = name.parse().ok();
        self
    }

    /// Spend (or not) a luck point on this roll.
    pub fn with_luck(mut self, use_luck: bool) -> Self {
        self.use_luck = use_luck;
        self
    }

    /// Add successes that need no dice.
    pub fn with_flat_successes(mut self, flat_successes: u32) -> Self {
        self.flat_successes = flat_successes;
        self
    }

    /// Requested pool size, floored to one die. The engine also caps it at
    /// the ruleset's `max_pool`.
    pub fn pool_size(&self) -> usize {
        usize::try_from(self.dice_count.max(1)).unwrap_or(usize::MAX)
    }
}

fn lenient_tier<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Tier>, D::Error> {
    let name: Option<String> = Option::deserialize(deserializer)?;
    Ok(name.and_then(|n| n.parse().ok()))
}

/// Resolves checks under a fixed [`RuleSet`].
///
/// The engine holds no roll state; the random source is supplied per call.
#[derive(Debug, Clone, Default)]
pub struct RollEngine {
    rules: RuleSet,
}

impl RollEngine {
    /// Create an engine for a ruleset.
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    /// The ruleset in use.
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// A skill check classified under this engine's tier bands.
    pub fn skill_request(&self, dice_count: i64, skill_level: u32) -> RollRequest {
        RollRequest::classified(dice_count, skill_level, &self.rules.tier_thresholds)
    }

    /// Resolve one check, drawing every die from `source`.
    ///
    /// Fails only if the source fails or yields an impossible face; a roll
    /// is never completed with substituted values.
    #[instrument(
        skip_all,
        fields(
            dice = request.dice_count,
            skill = request.skill_level,
            luck = request.use_luck
        )
    )]
    pub fn resolve<S: RandomSource + ?Sized>(
        &self,
        request: &RollRequest,
        source: &mut S,
    ) -> MechResult<RollOutcome> {
        let pool = self.rules.clamp_pool(request.pool_size());
        let mut faces = Vec::with_capacity(pool);
        for _ in 0..pool {
            faces.push(draw_face(source, CHECK_DIE)?);
        }
        debug!(?faces, "rolled base pool");

        let luck_reroll = if request.use_luck {
            reroll_lowest(&mut faces, source)?
        } else {
            None
        };
        if let Some(reroll) = &luck_reroll {
            debug!(
                index = reroll.die_index,
                from = reroll.previous,
                to = reroll.rerolled,
                "luck reroll"
            );
        }

        let base_len = faces.len();
        explode(&mut faces, self.rules.cascade, source)?;
        let critical_dice_added = count_u32(faces.len() - base_len);
        if critical_dice_added > 0 {
            debug!(critical_dice_added, "natural 10s exploded");
        }

        let base = faces.clone();
        let policy = BonusPolicy::for_tier(request.tier, request.skill_level);
        let bonus_applications = policy.apply(&mut faces, self.rules.success_threshold);
        debug!(?policy, ?bonus_applications, "skill bonus applied");

        let dice: Vec<DieResult> = base
            .into_iter()
            .zip(faces)
            .enumerate()
            .map(|(index, (base, value))| DieResult {
                base,
                value,
                critical: index >= base_len,
            })
            .collect();

        let dice_successes = count_u32(
            dice.iter()
                .filter(|d| d.is_success(self.rules.success_threshold))
                .count(),
        );
        let successes = dice_successes.saturating_add(request.flat_successes);
        debug!(successes, "roll resolved");

        Ok(RollOutcome {
            dice,
            successes,
            critical_dice_added,
            bonus_applications,
            luck_reroll,
            flat_successes: request.flat_successes,
            success_threshold: self.rules.success_threshold,
        })
    }
}

/// Resolve a check under the standard rules.
pub fn resolve_roll<S: RandomSource + ?Sized>(
    request: &RollRequest,
    source: &mut S,
) -> MechResult<RollOutcome> {
    RollEngine::default().resolve(request, source)
}

/// Replace the lowest face (first on ties) with a fresh draw.
fn reroll_lowest<S: RandomSource + ?Sized>(
    faces: &mut [u32],
    source: &mut S,
) -> MechResult<Option<LuckReroll>> {
    let Some((die_index, &previous)) = faces.iter().enumerate().min_by_key(|&(_, &v)| v) else {
        return Ok(None);
    };
    let rerolled = draw_face(source, CHECK_DIE)?;
    faces[die_index] = rerolled;
    Ok(Some(LuckReroll {
        die_index,
        previous,
        rerolled,
    }))
}

/// Append one critical die per natural 10, generation by generation.
///
/// Generation one comes from the base dice; each later generation comes
/// from the dice the previous one added.
fn explode<S: RandomSource + ?Sized>(
    faces: &mut Vec<u32>,
    cascade: CriticalCascade,
    source: &mut S,
) -> MechResult<()> {
    let max_face = CHECK_DIE.sides();
    let mut scan_from = 0;
    let mut generation = 0;

    loop {
        if cascade
            .max_generations()
            .is_some_and(|limit| generation >= limit)
        {
            break;
        }
        let scan_to = faces.len();
        let triggers = faces[scan_from..scan_to]
            .iter()
            .filter(|&&v| v == max_face)
            .count();
        if triggers == 0 {
            break;
        }
        for _ in 0..triggers {
            faces.push(draw_face(source, CHECK_DIE)?);
        }
        scan_from = scan_to;
        generation += 1;
    }

    Ok(())
}

fn count_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}
