//! Grand master greedy distribution.
//!
//! Points are spent on whichever failing die is closest to success, filling
//! exactly its gap, until the pool of points runs dry. Leftover points with
//! no failing die left all go on the highest die.

use crate::bonus::{BonusApplication, highest_where, raise};

/// Spread `amount` across `dice`, nearest-to-`threshold` first.
///
/// Each step picks the die with the smallest positive gap (first on ties)
/// and adds `min(remaining, gap)`. Once every die meets the threshold the
/// remainder is added to the highest die in one step, clamped at the
/// maximum face.
pub fn apply_bonus_greedy(dice: &mut [u32], amount: u32, threshold: u32) -> Vec<BonusApplication> {
    let mut applied = Vec::new();
    let mut remaining = amount;

    while remaining > 0 {
        let Some((index, gap)) = nearest_below(dice, threshold) else {
            if let Some(index) = highest_where(dice, |_| true) {
                applied.extend(raise(dice, index, remaining));
            }
            break;
        };
        let add = remaining.min(gap);
        dice[index] += add;
        remaining -= add;
        applied.push(BonusApplication {
            die_index: index,
            amount: add,
        });
    }

    applied
}

/// The failing die with the smallest gap to `threshold`, and that gap.
fn nearest_below(dice: &[u32], threshold: u32) -> Option<(usize, u32)> {
    dice.iter()
        .enumerate()
        .filter(|&(_, &value)| value < threshold)
        .map(|(index, &value)| (index, threshold - value))
        .min_by_key(|&(_, gap)| gap)
}
