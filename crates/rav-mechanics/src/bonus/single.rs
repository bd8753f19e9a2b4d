//! Single-die best fit.
//!
//! The whole bonus goes on one die. Prefer the worst die that the bonus can
//! still carry to a success; if none can be carried, strengthen the best
//! die that still has room below the maximum face.

use crate::bonus::{BonusApplication, MAX_FACE, highest_where, raise};

/// Apply `amount` to the single die that benefits most.
///
/// Among dice whose gap to `threshold` is positive and no larger than
/// `amount`, the lowest face wins (first on ties). With no such die, the
/// highest face below [`MAX_FACE`] is raised instead. The result is clamped
/// at [`MAX_FACE`]; `None` means no die changed.
pub fn apply_bonus_to_one(
    dice: &mut [u32],
    amount: u32,
    threshold: u32,
) -> Option<BonusApplication> {
    if amount == 0 {
        return None;
    }
    let index = lowest_reachable(dice, amount, threshold)
        .or_else(|| highest_where(dice, |value| value < MAX_FACE))?;
    raise(dice, index, amount)
}

fn lowest_reachable(dice: &[u32], amount: u32, threshold: u32) -> Option<usize> {
    dice.iter()
        .enumerate()
        .filter(|&(_, &value)| value < threshold && threshold - value <= amount)
        .min_by_key(|&(_, &value)| value)
        .map(|(index, _)| index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::SUCCESS_THRESHOLD;

    fn apply(dice: &mut [u32], amount: u32) -> Option<BonusApplication> {
        apply_bonus_to_one(dice, amount, SUCCESS_THRESHOLD)
    }

    #[test]
    fn picks_exactly_reachable_die() {
        let mut dice = vec![5, 3, 8];
        let applied = apply(&mut dice, 2);
        assert_eq!(dice, vec![7, 3, 8]);
        assert_eq!(
            applied,
            Some(BonusApplication {
                die_index: 0,
                amount: 2
            })
        );
    }

    #[test]
    fn prefers_lowest_reachable_die() {
        // Both the 4 and the 6 can reach 7 with +3; the 4 is worse, so it wins.
        let mut dice = vec![6, 4, 2];
        apply(&mut dice, 3);
        assert_eq!(dice, vec![6, 7, 2]);
    }

    #[test]
    fn first_on_ties() {
        let mut dice = vec![8, 5, 5];
        let applied = apply(&mut dice, 2).unwrap();
        assert_eq!(applied.die_index, 1);
        assert_eq!(dice, vec![8, 7, 5]);
    }

    #[test]
    fn falls_back_to_highest_die() {
        let mut dice = vec![2, 3];
        let applied = apply(&mut dice, 1);
        assert_eq!(dice, vec![2, 4]);
        assert_eq!(
            applied,
            Some(BonusApplication {
                die_index: 1,
                amount: 1
            })
        );
    }

    #[test]
    fn fallback_strengthens_existing_success() {
        // Nothing can reach 7 with +1, so the 8 becomes a 9.
        let mut dice = vec![3, 8, 1];
        apply(&mut dice, 1);
        assert_eq!(dice, vec![3, 9, 1]);
    }

    #[test]
    fn fallback_skips_maxed_dice() {
        let mut dice = vec![10, 2, 6];
        // The 6 is reachable with +1.
        apply(&mut dice, 1);
        assert_eq!(dice, vec![10, 2, 7]);

        let mut dice = vec![10, 2, 9];
        // Nothing reachable; 10 has no room, so the 9 takes it.
        let applied = apply(&mut dice, 1).unwrap();
        assert_eq!(applied.die_index, 2);
        assert_eq!(dice, vec![10, 2, 10]);
    }

    #[test]
    fn clamps_at_max_face() {
        let mut dice = vec![9, 1];
        // Gap of the 1 is 6 > 5, so the 9 is boosted and clamped.
        let applied = apply(&mut dice, 5).unwrap();
        assert_eq!(dice, vec![10, 1]);
        assert_eq!(applied.amount, 1);
    }

    #[test]
    fn all_tens_is_a_noop() {
        let mut dice = vec![10, 10];
        assert_eq!(apply(&mut dice, 4), None);
        assert_eq!(dice, vec![10, 10]);
    }

    #[test]
    fn zero_amount_and_empty_pool() {
        let mut dice = vec![3];
        assert_eq!(apply(&mut dice, 0), None);
        assert_eq!(dice, vec![3]);
        assert_eq!(apply(&mut [], 3), None);
    }

    #[test]
    fn large_bonus_lands_on_lowest_reachable() {
        // +9 reaches 7 from anywhere, so the 1 takes it.
        let mut dice = vec![6, 1, 4];
        apply(&mut dice, 9);
        assert_eq!(dice, vec![6, 10, 4]);
    }
}
