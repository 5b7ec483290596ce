//! Exact-composition refinements: corrections to total-based strategy for
//! specific multisets of dealt ranks. Only consulted when the caller asked
//! for `exactComposition` complexity.

use crate::hand::{composed_of, hand_total, HandValue};
use crate::rules::{Complexity, Rules, Surrender};
use crate::Action;

struct OverrideEntry {
    /// Ranks sorted ascending; the matcher sorts the hand before comparing.
    hand: &'static [u8],
    dealer: u8,
    action: Action,
}

/// Exceptions to total-based strategy for two decks, dealer stands on
/// soft 17. From http://wizardofodds.com/games/blackjack/appendix/3b/
///
/// Authored order is authoritative: the first exact match wins, so
/// overlapping entries must stay most-specific first.
const TWO_DECK_STAND_17: &[OverrideEntry] = &[
    OverrideEntry { hand: &[2, 9], dealer: 1, action: Action::Hit },
    OverrideEntry { hand: &[3, 8], dealer: 1, action: Action::Hit },
    OverrideEntry { hand: &[2, 10], dealer: 4, action: Action::Hit },
    OverrideEntry { hand: &[4, 6, 6], dealer: 10, action: Action::Hit },
    OverrideEntry { hand: &[3, 6, 7], dealer: 10, action: Action::Hit },
    OverrideEntry { hand: &[2, 6, 8], dealer: 10, action: Action::Hit },
    OverrideEntry { hand: &[1, 6, 9], dealer: 10, action: Action::Hit },
    OverrideEntry { hand: &[3, 3, 10], dealer: 10, action: Action::Hit },
    OverrideEntry { hand: &[1, 1, 6], dealer: 1, action: Action::Hit },
    OverrideEntry { hand: &[2, 2, 6, 6], dealer: 10, action: Action::Hit },
    OverrideEntry { hand: &[1, 3, 6, 6], dealer: 10, action: Action::Hit },
    OverrideEntry { hand: &[1, 2, 6, 7], dealer: 10, action: Action::Hit },
    OverrideEntry { hand: &[1, 1, 6, 8], dealer: 10, action: Action::Hit },
    OverrideEntry { hand: &[2, 2, 2, 10], dealer: 10, action: Action::Hit },
    OverrideEntry { hand: &[1, 2, 3, 10], dealer: 10, action: Action::Hit },
    OverrideEntry { hand: &[4, 4, 4, 4], dealer: 9, action: Action::Stand },
    OverrideEntry { hand: &[3, 4, 4, 5], dealer: 9, action: Action::Stand },
    OverrideEntry { hand: &[3, 3, 5, 5], dealer: 9, action: Action::Stand },
    OverrideEntry { hand: &[2, 4, 5, 5], dealer: 9, action: Action::Stand },
    OverrideEntry { hand: &[1, 5, 5, 5], dealer: 9, action: Action::Stand },
    OverrideEntry { hand: &[2, 2, 3, 3, 6], dealer: 10, action: Action::Hit },
    OverrideEntry { hand: &[1, 1, 1, 6, 7], dealer: 10, action: Action::Hit },
    OverrideEntry { hand: &[1, 1, 2, 2, 10], dealer: 10, action: Action::Hit },
    OverrideEntry { hand: &[1, 1, 2, 6, 6], dealer: 10, action: Action::Hit },
    OverrideEntry { hand: &[1, 3, 4, 4, 4], dealer: 9, action: Action::Stand },
    OverrideEntry { hand: &[2, 2, 4, 4, 4], dealer: 9, action: Action::Stand },
    OverrideEntry { hand: &[2, 3, 3, 4, 4], dealer: 9, action: Action::Stand },
    OverrideEntry { hand: &[3, 3, 3, 3, 4], dealer: 9, action: Action::Stand },
    OverrideEntry { hand: &[1, 2, 3, 5, 5], dealer: 9, action: Action::Stand },
    OverrideEntry { hand: &[1, 2, 4, 4, 5], dealer: 9, action: Action::Stand },
    OverrideEntry { hand: &[1, 3, 3, 4, 5], dealer: 9, action: Action::Stand },
    OverrideEntry { hand: &[2, 2, 2, 5, 5], dealer: 9, action: Action::Stand },
    OverrideEntry { hand: &[2, 2, 3, 4, 5], dealer: 9, action: Action::Stand },
    OverrideEntry { hand: &[2, 3, 3, 3, 5], dealer: 9, action: Action::Stand },
];

/// Composition-based play override, or `None` when no table applies or
/// nothing matches. Tables exist for two decks with the dealer standing
/// on soft 17; every other variant falls through to total-based strategy.
pub(crate) fn override_action(cards: &[u8], dealer_card: u8, rules: &Rules) -> Option<Action> {
    if rules.complexity != Complexity::ExactComposition {
        return None;
    }
    if rules.number_of_decks == 2 && !rules.hit_soft_17 {
        return two_deck_stand_17(cards, dealer_card);
    }
    None
}

fn find_exception(
    cards: &[u8],
    dealer_card: u8,
    overrides: &'static [OverrideEntry],
) -> Option<Action> {
    let mut sorted = cards.to_vec();
    sorted.sort_unstable();

    overrides
        .iter()
        .find(|entry| entry.dealer == dealer_card && entry.hand == sorted.as_slice())
        .map(|entry| entry.action)
}

fn two_deck_stand_17(cards: &[u8], dealer_card: u8) -> Option<Action> {
    if let Some(action) = find_exception(cards, dealer_card, TWO_DECK_STAND_17) {
        return Some(action);
    }

    // Beyond the table: drawn-to 16 stands against a 10, and drawn-to
    // soft 18 stands against an ace.
    let value = hand_total(cards);
    if cards.len() >= 3 && value.total == 16 && !value.soft && dealer_card == 10 {
        return Some(Action::Stand);
    }
    if cards.len() >= 3 && value.total == 18 && value.soft && dealer_card == 1 {
        return Some(Action::Stand);
    }

    None
}

/// Composition-based surrender correction. `Some(true)` means surrender,
/// `Some(false)` means definitely keep playing, `None` means no opinion
/// (continue with the total-based surrender tables).
///
/// The caller has already established that surrender is structurally legal
/// and the hand is hard.
pub(crate) fn surrender_override(
    cards: &[u8],
    dealer_card: u8,
    value: HandValue,
    rules: &Rules,
) -> Option<bool> {
    if rules.complexity != Complexity::ExactComposition {
        return None;
    }

    let decks = rules.number_of_decks;

    if rules.surrender == Surrender::Early {
        // 14 against a 10 keeps its ten-rich compositions: 10+4 and 5+9
        // play on in single deck, 10+4 plays on in double deck.
        if value.total == 14 && dealer_card == 10 {
            if decks == 1 && (composed_of(cards, 4, 10) || composed_of(cards, 5, 9)) {
                return Some(false);
            }
            if decks == 2 && composed_of(cards, 4, 10) {
                return Some(false);
            }
        }
    } else if rules.hit_soft_17 && dealer_card == 1 {
        // 8+7 holds two of the cards that would bust a hit, so it plays on
        // in single and double deck; 10+7 and 7+10 give up in single deck.
        if value.total == 15 && decks <= 2 && composed_of(cards, 8, 7) {
            return Some(false);
        }
        if value.total == 17 && decks == 1 && composed_of(cards, 10, 7) {
            return Some(true);
        }
    } else if dealer_card == 1 {
        if value.total == 16 && decks == 1 && composed_of(cards, 9, 7) {
            return Some(false);
        }
    } else {
        if value.total == 15 && dealer_card == 10 && composed_of(cards, 8, 7) {
            return Some(false);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::RuleOptions;

    fn two_deck_stand_rules() -> Rules {
        Rules::resolve(Some(&RuleOptions {
            number_of_decks: Some(2),
            hit_soft17: Some(false),
            strategy_complexity: Some(Complexity::ExactComposition),
            ..Default::default()
        }))
    }

    #[test]
    fn test_inactive_without_exact_composition() {
        let mut rules = two_deck_stand_rules();
        rules.complexity = Complexity::Advanced;
        assert_eq!(override_action(&[2, 9], 1, &rules), None);
    }

    #[test]
    fn test_inactive_for_untabulated_variant() {
        let mut rules = two_deck_stand_rules();
        rules.number_of_decks = 6;
        assert_eq!(override_action(&[2, 9], 1, &rules), None);

        let mut rules = two_deck_stand_rules();
        rules.hit_soft_17 = true;
        assert_eq!(override_action(&[2, 9], 1, &rules), None);
    }

    #[test]
    fn test_matches_are_order_independent() {
        let rules = two_deck_stand_rules();
        // 11 vs ace would normally double or hit; the table says hit for 2+9
        assert_eq!(override_action(&[2, 9], 1, &rules), Some(Action::Hit));
        assert_eq!(override_action(&[9, 2], 1, &rules), Some(Action::Hit));
        assert_eq!(override_action(&[6, 4, 6], 10, &rules), Some(Action::Hit));
    }

    #[test]
    fn test_exact_length_required() {
        let rules = two_deck_stand_rules();
        // [3,3,10] hits vs 10 but [3,3,10] plus another card is not that entry
        assert_eq!(override_action(&[3, 3, 10], 10, &rules), Some(Action::Hit));
        assert_eq!(
            override_action(&[3, 3, 8, 2], 10, &rules),
            Some(Action::Stand) // falls through to the drawn-to-16 heuristic
        );
    }

    #[test]
    fn test_four_fours_stand_against_nine() {
        let rules = two_deck_stand_rules();
        assert_eq!(
            override_action(&[4, 4, 4, 4], 9, &rules),
            Some(Action::Stand)
        );
    }

    #[test]
    fn test_multicard_16_vs_10_stands() {
        let rules = two_deck_stand_rules();
        assert_eq!(
            override_action(&[10, 4, 2], 10, &rules),
            Some(Action::Stand)
        );
        // two-card 16 is not covered by the heuristic
        assert_eq!(override_action(&[10, 6], 10, &rules), None);
        // soft multi-card 16 is not a hard 16
        assert_eq!(override_action(&[1, 2, 3], 10, &rules), None);
    }

    #[test]
    fn test_multicard_soft_18_vs_ace_stands() {
        let rules = two_deck_stand_rules();
        assert_eq!(override_action(&[1, 3, 4], 1, &rules), Some(Action::Stand));
        assert_eq!(override_action(&[1, 7], 1, &rules), None);
    }

    #[test]
    fn test_surrender_override_early_14_vs_10() {
        let mut rules = Rules::resolve(Some(&RuleOptions {
            number_of_decks: Some(1),
            surrender: Some(Surrender::Early),
            strategy_complexity: Some(Complexity::ExactComposition),
            ..Default::default()
        }));
        let value = hand_total(&[10, 4]);
        assert_eq!(surrender_override(&[10, 4], 10, value, &rules), Some(false));
        assert_eq!(surrender_override(&[9, 5], 10, value, &rules), Some(false));
        // 8+6 has no opinion; the early-surrender table decides
        assert_eq!(surrender_override(&[8, 6], 10, value, &rules), None);

        rules.number_of_decks = 2;
        assert_eq!(surrender_override(&[10, 4], 10, value, &rules), Some(false));
        assert_eq!(surrender_override(&[9, 5], 10, value, &rules), None);
    }

    #[test]
    fn test_surrender_override_late_vs_ace() {
        let rules = Rules::resolve(Some(&RuleOptions {
            number_of_decks: Some(2),
            strategy_complexity: Some(Complexity::ExactComposition),
            ..Default::default()
        }));
        // dealer hits soft 17 by default
        let value = hand_total(&[8, 7]);
        assert_eq!(surrender_override(&[8, 7], 1, value, &rules), Some(false));
        assert_eq!(surrender_override(&[7, 8], 1, value, &rules), Some(false));
        assert_eq!(
            surrender_override(&[10, 5], 1, hand_total(&[10, 5]), &rules),
            None
        );
    }

    #[test]
    fn test_surrender_override_requires_exact_composition() {
        let rules = Rules::resolve(Some(&RuleOptions {
            number_of_decks: Some(2),
            strategy_complexity: Some(Complexity::Advanced),
            ..Default::default()
        }));
        assert_eq!(
            surrender_override(&[8, 7], 1, hand_total(&[8, 7]), &rules),
            None
        );
    }
}
