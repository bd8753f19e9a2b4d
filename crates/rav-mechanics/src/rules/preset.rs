//! Pre-configured rulesets.
//!
//! These produce the same [`RuleSet`] that the equivalent JSON configuration
//! would, without having to ship a config file.

use crate::rules::{CriticalCascade, MAX_POOL, RuleSet, SUCCESS_THRESHOLD, TierThresholds};

/// Rise of Arcane and Valor as written.
///
/// Roll a pool of d10s, count 7+ as successes. Natural 10s explode at most
/// two generations deep.
pub fn standard() -> RuleSet {
    RuleSet {
        name: "rav".to_string(),
        success_threshold: SUCCESS_THRESHOLD,
        tier_thresholds: TierThresholds::STANDARD,
        max_pool: MAX_POOL,
        cascade: CriticalCascade::Bounded,
    }
}

/// The standard rules with fully open-ended critical explosions.
pub fn open_ended() -> RuleSet {
    RuleSet {
        name: "rav_open_ended".to_string(),
        cascade: CriticalCascade::Unbounded,
        ..standard()
    }
}
