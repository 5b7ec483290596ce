//! True-count deviations from basic strategy (Hi-Lo). When the running
//! count crosses a play's threshold, the deviation supersedes every other
//! layer of the resolver.
//!
//! The conditions below are an ordered chain: the first match wins, and the
//! authored order encodes priority. Do not re-sort them.

use crate::hand::HandValue;
use crate::legality;
use crate::rules::{CountSystem, Rules};
use crate::Action;

/// Count-indicated play, or `None` when no deviation applies. Active only
/// when the caller supplied both a recognized counting system and a true
/// count. Thresholds compare `>=` for deviations toward standing, doubling,
/// or splitting and `<` for deviations toward hitting.
pub(crate) fn deviation(
    cards: &[u8],
    dealer_card: u8,
    value: HandValue,
    hand_count: u8,
    dealer_checked_blackjack: bool,
    rules: &Rules,
) -> Option<Action> {
    if rules.count.system != Some(CountSystem::HiLo) {
        return None;
    }
    let tc = rules.count.true_count?;

    // Insurance becomes profitable at +3; the only case where the engine
    // ever recommends taking it.
    if legality::can_insure(dealer_card, dealer_checked_blackjack, rules) && tc >= 3.0 {
        return Some(Action::Insurance);
    }

    // All remaining deviations are hard-total plays.
    if value.soft {
        return None;
    }
    let total = value.total;

    if total == 16 && dealer_card == 10 && tc >= 0.0 {
        return Some(Action::Stand);
    }
    if total == 15 && dealer_card == 10 && tc >= 4.0 {
        return Some(Action::Stand);
    }
    if legality::can_split(cards, hand_count, rules) && cards[0] == 10 {
        if dealer_card == 5 && tc >= 5.0 {
            return Some(Action::Split);
        }
        if dealer_card == 6 && tc >= 4.0 {
            return Some(Action::Split);
        }
    }
    if legality::can_double(cards, total, hand_count, rules) {
        if total == 10 && dealer_card == 10 && tc >= 4.0 {
            return Some(Action::Double);
        }
        if total == 11 && dealer_card == 1 && tc >= 1.0 {
            return Some(Action::Double);
        }
        if total == 9 && dealer_card == 2 && tc >= 1.0 {
            return Some(Action::Double);
        }
        if total == 10 && dealer_card == 1 && tc >= 4.0 {
            return Some(Action::Double);
        }
        if total == 9 && dealer_card == 7 && tc >= 3.0 {
            return Some(Action::Double);
        }
    }
    if total == 16 && dealer_card == 9 && tc >= 5.0 {
        return Some(Action::Stand);
    }
    if total == 12 && dealer_card == 3 && tc >= 2.0 {
        return Some(Action::Stand);
    }
    if total == 12 && dealer_card == 2 && tc >= 3.0 {
        return Some(Action::Stand);
    }

    // Negative counts: hit hands that basic strategy stands on.
    if total == 13 && dealer_card == 2 && tc < -1.0 {
        return Some(Action::Hit);
    }
    if total == 13 && dealer_card == 3 && tc < -2.0 {
        return Some(Action::Hit);
    }
    if total == 12 && dealer_card == 4 && tc < 0.0 {
        return Some(Action::Hit);
    }
    if total == 12 && dealer_card == 5 && tc < -2.0 {
        return Some(Action::Hit);
    }
    if total == 12 && dealer_card == 6 && tc < -1.0 {
        return Some(Action::Hit);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hand::hand_total;
    use crate::rules::CountOptions;

    fn counting_rules(true_count: f64) -> Rules {
        Rules {
            count: CountOptions {
                system: Some(CountSystem::HiLo),
                true_count: Some(true_count),
            },
            ..Rules::default()
        }
    }

    fn run(cards: &[u8], dealer: u8, rules: &Rules) -> Option<Action> {
        deviation(cards, dealer, hand_total(cards), 1, true, rules)
    }

    #[test]
    fn test_inactive_without_count() {
        assert_eq!(run(&[10, 6], 10, &Rules::default()), None);

        let mut rules = Rules::default();
        rules.count.system = Some(CountSystem::HiLo);
        // system without a true count is not enough
        assert_eq!(run(&[10, 6], 10, &rules), None);
    }

    #[test]
    fn test_insurance_at_plus_three() {
        let rules = counting_rules(3.0);
        assert_eq!(
            deviation(&[10, 10], 1, hand_total(&[10, 10]), 1, false, &rules),
            Some(Action::Insurance)
        );
        // after the hole card check, insurance is off the table
        assert_ne!(
            deviation(&[10, 10], 1, hand_total(&[10, 10]), 1, true, &rules),
            Some(Action::Insurance)
        );
        let rules = counting_rules(2.9);
        assert_eq!(
            deviation(&[10, 10], 1, hand_total(&[10, 10]), 1, false, &rules),
            None
        );
    }

    #[test]
    fn test_sixteen_vs_ten_stands_at_zero() {
        assert_eq!(run(&[10, 6], 10, &counting_rules(0.0)), Some(Action::Stand));
        assert_eq!(run(&[10, 6], 10, &counting_rules(-0.5)), None);
    }

    #[test]
    fn test_soft_hands_never_deviate() {
        // soft 16 vs 10 is not the hard-16 deviation
        assert_eq!(run(&[1, 5], 10, &counting_rules(5.0)), None);
    }

    #[test]
    fn test_split_tens_gated_on_legality() {
        let rules = counting_rules(5.0);
        assert_eq!(run(&[10, 10], 5, &rules), Some(Action::Split));
        assert_eq!(run(&[10, 10], 6, &rules), Some(Action::Split));
        // split budget exhausted: no deviation fires for hard 20
        assert_eq!(
            deviation(&[10, 10], 5, hand_total(&[10, 10]), 4, true, &rules),
            None
        );
    }

    #[test]
    fn test_double_deviations_gated_on_legality() {
        let rules = counting_rules(4.0);
        assert_eq!(run(&[6, 4], 10, &rules), Some(Action::Double));

        let mut no_double = counting_rules(4.0);
        no_double.double_range = (0, 0);
        assert_eq!(run(&[6, 4], 10, &no_double), None);

        // three-card 10 cannot double, so no deviation
        assert_eq!(run(&[2, 3, 5], 10, &rules), None);
    }

    #[test]
    fn test_eleven_vs_ace_doubles_at_one() {
        assert_eq!(run(&[6, 5], 1, &counting_rules(1.0)), Some(Action::Double));
        assert_eq!(run(&[6, 5], 1, &counting_rules(0.5)), None);
    }

    #[test]
    fn test_negative_count_hits() {
        assert_eq!(run(&[10, 2], 4, &counting_rules(-0.5)), Some(Action::Hit));
        assert_eq!(run(&[10, 2], 4, &counting_rules(0.0)), None);
        assert_eq!(run(&[10, 3], 2, &counting_rules(-1.5)), Some(Action::Hit));
        assert_eq!(run(&[10, 2], 6, &counting_rules(-2.0)), Some(Action::Hit));
    }

    #[test]
    fn test_twelve_vs_three_stands_at_two() {
        assert_eq!(run(&[10, 2], 3, &counting_rules(2.0)), Some(Action::Stand));
        assert_eq!(run(&[10, 2], 3, &counting_rules(1.9)), None);
    }
}
