//! Total-based basic strategy: the priority-ordered split → double →
//! surrender → stand → hit chain, with the advanced-tier and single-deck
//! exceptions layered in. Stages never re-evaluate once one of them has
//! produced a verdict.

use crate::hand::{is_pair, HandValue};
use crate::rules::{Rules, Surrender};
use crate::{composition, legality, Action};

/// Run the chain for a hand the dispatcher has already screened for early
/// surrender, count deviations, and insurance.
pub(crate) fn resolve(
    cards: &[u8],
    dealer_card: u8,
    value: HandValue,
    hand_count: u8,
    rules: &Rules,
) -> Action {
    if let Some(action) = composition::override_action(cards, dealer_card, rules) {
        return action;
    }

    if should_split(cards, dealer_card, hand_count, rules) {
        Action::Split
    } else if should_double(cards, dealer_card, value, hand_count, rules) {
        Action::Double
    } else if rules.surrender != Surrender::Early
        && should_surrender(cards, dealer_card, value, hand_count, rules)
    {
        Action::Surrender
    } else if should_stand(cards, dealer_card, value, rules) {
        Action::Stand
    } else if value.total < 21 {
        Action::Hit
    } else {
        // A legal hand always resolves above; reaching here means the
        // chain is inconsistent.
        Action::None
    }
}

fn should_split(cards: &[u8], dealer_card: u8, hand_count: u8, rules: &Rules) -> bool {
    if !legality::can_split(cards, hand_count, rules) {
        return false;
    }

    let single_deck = rules.number_of_decks == 1;
    match cards[0] {
        // Always split aces
        1 => true,
        // Against 4-7, or 2 and 3 if you can double after split.
        // Single deck adds 3s against an 8 with double after split.
        2 | 3 => {
            matches!(dealer_card, 4..=7)
                || (matches!(dealer_card, 2 | 3) && rules.double_after_split)
                || (cards[0] == 3 && dealer_card == 8 && single_deck && rules.double_after_split)
        }
        // Against 5 or 6 (4 in single deck), and only with double after split
        4 => {
            (dealer_card == 5 || dealer_card == 6 || (dealer_card == 4 && single_deck))
                && rules.double_after_split
        }
        // Split 3-6, against a 2 with double after split or in single deck,
        // and against a 7 in single deck with double after split
        6 => {
            matches!(dealer_card, 3..=6)
                || (dealer_card == 2 && (rules.double_after_split || single_deck))
                || (dealer_card == 7 && single_deck && rules.double_after_split)
        }
        // Split on 2-7, plus 8 in single deck
        7 => matches!(dealer_card, 2..=7) || (dealer_card == 8 && single_deck),
        // Always split 8s UNLESS the dealer has an ace and hits soft 17 and
        // you can surrender (who knew). The exception is an advanced play;
        // basic complexity always splits.
        8 => {
            !rules.complexity.is_advanced()
                || !(dealer_card == 1 && rules.hit_soft_17 && rules.surrender != Surrender::None)
        }
        // Split against 2-9 except 7, plus the ace in single deck
        // when the dealer hits soft 17
        9 => {
            (matches!(dealer_card, 2..=9) && dealer_card != 7)
                || (dealer_card == 1 && single_deck && rules.hit_soft_17)
        }
        // Don't split 5s or 10s
        _ => false,
    }
}

fn should_double(
    cards: &[u8],
    dealer_card: u8,
    value: HandValue,
    hand_count: u8,
    rules: &Rules,
) -> bool {
    if !legality::can_double(cards, value.total, hand_count, rules) {
        return false;
    }

    let single_deck = rules.number_of_decks == 1;
    if value.soft {
        match value.total {
            // Against dealer 5 or 6, plus 4 in single deck
            13 | 14 => dealer_card == 5 || dealer_card == 6 || (dealer_card == 4 && single_deck),
            // Against dealer 4-6
            15 | 16 => matches!(dealer_card, 4..=6),
            // Against 3-6, plus 2 in single deck
            17 => matches!(dealer_card, 3..=6) || (dealer_card == 2 && single_deck),
            // Against 3-6, also 2 if the dealer hits soft 17 or in single deck
            18 => {
                matches!(dealer_card, 3..=6)
                    || (dealer_card == 2 && (rules.hit_soft_17 || single_deck))
            }
            // Against 6 if the dealer hits soft 17 or in single deck
            19 => dealer_card == 6 && (rules.hit_soft_17 || single_deck),
            _ => false,
        }
    } else {
        match value.total {
            // Single deck only, against the weakest upcards
            8 => single_deck && (dealer_card == 5 || dealer_card == 6),
            // Against 3-6, plus 2 at one or two decks
            9 => matches!(dealer_card, 3..=6) || (dealer_card == 2 && rules.number_of_decks <= 2),
            // Against 2-9
            10 => matches!(dealer_card, 2..=9),
            // Against everything except an ace when the dealer stands on
            // soft 17 with three or more decks
            11 => dealer_card != 1 || rules.hit_soft_17 || rules.number_of_decks <= 2,
            _ => false,
        }
    }
}

/// Total-based surrender tables, consulted after the composition override.
/// Early surrender is also checked by the dispatcher ahead of insurance,
/// since it logically precedes the dealer's blackjack check.
pub(crate) fn should_surrender(
    cards: &[u8],
    dealer_card: u8,
    value: HandValue,
    hand_count: u8,
    rules: &Rules,
) -> bool {
    if !legality::can_surrender(cards, hand_count, rules) {
        return false;
    }
    // Never surrender a soft hand
    if value.soft {
        return false;
    }

    if let Some(verdict) = composition::surrender_override(cards, dealer_card, value, rules) {
        return verdict;
    }

    let decks = rules.number_of_decks;
    let advanced = rules.complexity.is_advanced();

    if rules.surrender == Surrender::Early {
        match dealer_card {
            // Dealer ace: hard 5-7 and hard 12-17, plus a pair of 2s when
            // the dealer hits soft 17
            1 => {
                matches!(value.total, 5..=7)
                    || matches!(value.total, 12..=17)
                    || (is_pair(cards, 2) && rules.hit_soft_17)
            }
            // Dealer 10: hard 14-16. A pair of 8s normally splits instead;
            // the surrender is an advanced single-deck play that needs
            // double after split to be worth passing up.
            10 => {
                matches!(value.total, 14..=16)
                    && (!is_pair(cards, 8)
                        || (advanced && decks == 1 && rules.double_after_split))
            }
            // Dealer 9: 16 only, not a pair of 8s
            9 => value.total == 16 && !is_pair(cards, 8),
            _ => false,
        }
    } else if rules.hit_soft_17 {
        match value.total {
            // Advanced single-deck play: a pair of 7s against a 10
            14 => dealer_card == 10 && advanced && decks == 1 && is_pair(cards, 7),
            15 => dealer_card == 10 || dealer_card == 1,
            // Against 9 or 10 a pair of 8s splits instead; the ace case is
            // handled by declining the split (see should_split)
            16 => {
                dealer_card == 1
                    || ((dealer_card == 9 || dealer_card == 10) && !is_pair(cards, 8))
            }
            17 => dealer_card == 1,
            _ => false,
        }
    } else {
        match value.total {
            // Against a 10, except in single deck
            15 => dealer_card == 10 && decks > 1,
            // Against 10 or ace, and against 9 with four or more decks
            16 => {
                !is_pair(cards, 8)
                    && (dealer_card == 10
                        || dealer_card == 1
                        || (dealer_card == 9 && decks >= 4))
            }
            _ => false,
        }
    }
}

fn should_stand(cards: &[u8], dealer_card: u8, value: HandValue, rules: &Rules) -> bool {
    if value.soft {
        // Don't stand until you hit 18
        value.total > 18
            || (value.total == 18
                && (matches!(dealer_card, 2..=8)
                    || (dealer_card == 1 && rules.number_of_decks == 1 && !rules.hit_soft_17)))
    } else {
        value.total > 16
            || (matches!(value.total, 13..=16) && matches!(dealer_card, 2..=6))
            || (value.total == 12 && matches!(dealer_card, 4..=6))
            // Advanced single-deck play: a pair of 7s stands against a 10
            // (half the sevens that make 21 are already in your hand)
            || (value.total == 14
                && dealer_card == 10
                && rules.number_of_decks == 1
                && rules.complexity.is_advanced()
                && is_pair(cards, 7))
    }
}
