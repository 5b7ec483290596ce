//! Structural legality of each action, independent of whether it is a good
//! play. Shared by the base resolver and the count-deviation layer so the
//! two can never drift apart.

use crate::hand::is_any_pair;
use crate::rules::{Rules, Surrender};

/// A split requires a two-card pair with room left in the split budget.
/// Aces can only be resplit when the rules allow it.
pub(crate) fn can_split(cards: &[u8], hand_count: u8, rules: &Rules) -> bool {
    if !is_any_pair(cards) || hand_count >= rules.max_split_hands {
        return false;
    }
    if cards[0] == 1 && hand_count > 1 && !rules.resplit_aces {
        return false;
    }
    true
}

/// A double requires the original two cards (or a permitted post-split
/// hand) with a total inside the configured double-eligible range.
pub(crate) fn can_double(cards: &[u8], total: u8, hand_count: u8, rules: &Rules) -> bool {
    cards.len() == 2
        && (hand_count == 1 || rules.double_after_split)
        && total >= rules.double_range.0
        && total <= rules.double_range.1
}

/// Surrender is a first-decision option on the original two cards only.
pub(crate) fn can_surrender(cards: &[u8], hand_count: u8, rules: &Rules) -> bool {
    rules.surrender != Surrender::None && cards.len() == 2 && hand_count == 1
}

/// Insurance is offered on a dealer ace before the hole card is checked.
pub(crate) fn can_insure(dealer_card: u8, dealer_checked_blackjack: bool, rules: &Rules) -> bool {
    dealer_card == 1 && !dealer_checked_blackjack && rules.offer_insurance
}
