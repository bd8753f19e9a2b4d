//! Property-based tests for the roll engine invariants.

use proptest::prelude::*;

use rav_mechanics::rules::preset;
use rav_mechanics::{
    BonusPolicy, RngSource, RollEngine, RollRequest, RuleSet, SUCCESS_THRESHOLD, ScriptedSource,
    Tier, apply_bonus_greedy, apply_bonus_to_one, resolve_roll,
};

/// Strategy: a pool of d10 faces.
fn faces_strategy() -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(1..=10u32, 1..8)
}

/// Strategy: any tier, or none.
fn tier_strategy() -> impl Strategy<Value = Option<Tier>> {
    prop_oneof![
        Just(None),
        Just(Some(Tier::Novice)),
        Just(Some(Tier::Expert)),
        Just(Some(Tier::Master)),
        Just(Some(Tier::Grandmaster)),
    ]
}

/// Strategy: a roll request with a seed to roll it with.
fn request_strategy() -> impl Strategy<Value = (RollRequest, u64)> {
    (
        -3i64..12,
        0u32..15,
        tier_strategy(),
        any::<bool>(),
        0u32..4,
        any::<u64>(),
    )
        .prop_map(|(dice_count, skill_level, tier, use_luck, flat, seed)| {
            let request = RollRequest {
                dice_count,
                skill_level,
                tier,
                use_luck,
                flat_successes: flat,
            };
            (request, seed)
        })
}

proptest! {
    // 1. Every final face stays on the die
    #[test]
    fn faces_stay_in_range((request, seed) in request_strategy()) {
        let outcome = resolve_roll(&request, &mut RngSource::seeded(seed)).unwrap();
        for die in &outcome.dice {
            prop_assert!((1..=10).contains(&die.value), "value={}", die.value);
            prop_assert!((1..=10).contains(&die.base), "base={}", die.base);
            prop_assert!(die.value >= die.base);
        }
    }

    // 2. Successes are the count of 7+ plus the flat bonus, bounded by pool size
    #[test]
    fn successes_match_faces((request, seed) in request_strategy()) {
        let outcome = resolve_roll(&request, &mut RngSource::seeded(seed)).unwrap();
        let counted = outcome.values().iter().filter(|&&v| v >= SUCCESS_THRESHOLD).count() as u32;
        prop_assert_eq!(outcome.successes, counted + request.flat_successes);
        prop_assert!(outcome.successes <= outcome.dice.len() as u32 + request.flat_successes);
    }

    // 3. Pool size is the floored request plus criticals; criticals sit at the end
    #[test]
    fn pool_size_and_critical_layout((request, seed) in request_strategy()) {
        let outcome = resolve_roll(&request, &mut RngSource::seeded(seed)).unwrap();
        let base = request.dice_count.max(1) as usize;
        prop_assert_eq!(outcome.dice.len(), base + outcome.critical_dice_added as usize);
        for (i, die) in outcome.dice.iter().enumerate() {
            prop_assert_eq!(die.critical, i >= base);
        }
    }

    // 4. Without skill there is no bonus trace and final equals base
    #[test]
    fn no_skill_no_bonus((mut request, seed) in request_strategy()) {
        request.skill_level = 0;
        let outcome = resolve_roll(&request, &mut RngSource::seeded(seed)).unwrap();
        prop_assert!(outcome.bonus_applications.is_empty());
        prop_assert_eq!(outcome.values(), outcome.base_values());
    }

    // 5. The bonus trace explains every difference between base and final
    #[test]
    fn trace_accounts_for_changes((request, seed) in request_strategy()) {
        let outcome = resolve_roll(&request, &mut RngSource::seeded(seed)).unwrap();
        let mut added = vec![0u32; outcome.dice.len()];
        for app in &outcome.bonus_applications {
            prop_assert!(app.amount > 0);
            added[app.die_index] += app.amount;
        }
        for (die, extra) in outcome.dice.iter().zip(added) {
            prop_assert_eq!(die.base + extra, die.value);
        }
        let policy = BonusPolicy::for_tier(request.tier, request.skill_level);
        prop_assert!(outcome.bonus_total() <= policy.total());
    }

    // 6. Same request, same seed, same outcome
    #[test]
    fn deterministic_for_seed((request, seed) in request_strategy()) {
        let a = resolve_roll(&request, &mut RngSource::seeded(seed)).unwrap();
        let b = resolve_roll(&request, &mut RngSource::seeded(seed)).unwrap();
        prop_assert_eq!(a, b);
    }

    // 7. Replaying the drawn faces through a scripted source reproduces the roll
    #[test]
    fn scripted_replay_matches(faces in prop::collection::vec(1..=9u32, 1..8), skill in 0u32..12) {
        // No 10s, so the pool is exactly the scripted faces.
        let request = RollRequest::skill(faces.len() as i64, skill);
        let outcome = resolve_roll(&request, &mut ScriptedSource::new(faces.clone())).unwrap();
        prop_assert_eq!(outcome.base_values(), faces);
        prop_assert_eq!(outcome.critical_dice_added, 0);
    }

    // 8. Luck always rerolls the first lowest base die
    #[test]
    fn luck_targets_first_lowest(faces in prop::collection::vec(1..=9u32, 1..8), reroll in 1..=9u32) {
        let request = RollRequest::attribute(faces.len() as i64).with_luck(true);
        let mut script = faces.clone();
        script.push(reroll);
        let outcome = resolve_roll(&request, &mut ScriptedSource::new(script)).unwrap();
        let lowest = *faces.iter().min().unwrap();
        let expected = faces.iter().position(|&v| v == lowest).unwrap();
        let luck = outcome.luck_reroll.unwrap();
        prop_assert_eq!(luck.die_index, expected);
        prop_assert_eq!(luck.previous, lowest);
        prop_assert_eq!(outcome.dice[expected].base, reroll);
    }

    // 9. Best fit never lowers successes and changes at most one die
    #[test]
    fn best_fit_single_change(faces in faces_strategy(), amount in 0u32..12) {
        let mut dice = faces.clone();
        let applied = apply_bonus_to_one(&mut dice, amount, SUCCESS_THRESHOLD);
        let changed = faces.iter().zip(&dice).filter(|(a, b)| a != b).count();
        prop_assert!(changed <= 1);
        prop_assert_eq!(changed == 1, applied.is_some());
        let before = faces.iter().filter(|&&v| v >= SUCCESS_THRESHOLD).count();
        let after = dice.iter().filter(|&&v| v >= SUCCESS_THRESHOLD).count();
        prop_assert!(after >= before);
    }

    // 10. Greedy never spends more than it has and never pushes past 10
    #[test]
    fn greedy_is_bounded(faces in faces_strategy(), amount in 0u32..30) {
        let mut dice = faces.clone();
        let applied = apply_bonus_greedy(&mut dice, amount, SUCCESS_THRESHOLD);
        let spent: u32 = applied.iter().map(|a| a.amount).sum();
        prop_assert!(spent <= amount);
        prop_assert!(dice.iter().all(|&v| (1..=10).contains(&v)));
        let gained: u32 = dice.iter().sum::<u32>() - faces.iter().sum::<u32>();
        prop_assert_eq!(gained, spent);
    }

    // 11. Any configured threshold drives both counting and single-die targeting
    #[test]
    fn threshold_drives_counting_and_targeting(
        (request, seed) in request_strategy(),
        threshold in 2..=10u32,
    ) {
        let engine = RollEngine::new(RuleSet {
            success_threshold: threshold,
            ..preset::standard()
        });
        let outcome = engine.resolve(&request, &mut RngSource::seeded(seed)).unwrap();
        prop_assert_eq!(outcome.success_threshold, threshold);
        let counted = outcome.values().iter().filter(|&&v| v >= threshold).count() as u32;
        prop_assert_eq!(outcome.successes, counted + request.flat_successes);

        let mut dice = outcome.base_values();
        let expected = apply_bonus_to_one(&mut dice, 1, threshold);
        if let Some(app) = expected {
            // +1 carries a die sitting one below the threshold when there is one.
            if outcome.base_values().contains(&(threshold - 1)) {
                prop_assert_eq!(dice[app.die_index], threshold);
            }
        }
    }
}
