//! The three "Blackjack Calculation" rule-of-thumb providers. These are
//! documented teaching systems, not table-perfect play: each one frames the
//! whole game around the dealer's low card (2-6) versus high card (7-ace),
//! with progressively more refinements layered on.

use crate::hand::HandValue;
use crate::legality;
use crate::rules::Rules;
use crate::Action;

/// Dealer 2-6: likely to bust, so the player stops risking his own bust.
fn dealer_low(dealer_card: u8) -> bool {
    matches!(dealer_card, 2..=6)
}

/// Shared hit/stand tail: hit soft below 18; never bust into a low card;
/// mimic the dealer against a high card.
fn hit_or_stand(dealer_card: u8, value: HandValue) -> Action {
    if value.soft {
        return if value.total < 18 {
            Action::Hit
        } else {
            Action::Stand
        };
    }
    if value.total <= 11 {
        Action::Hit
    } else if dealer_low(dealer_card) {
        Action::Stand
    } else if value.total < 17 {
        Action::Hit
    } else {
        Action::Stand
    }
}

/// Split aces and 8s, double 9-10 into a low card and 11 always,
/// and the shared hit/stand tail.
pub(crate) fn super_easy(
    cards: &[u8],
    dealer_card: u8,
    value: HandValue,
    hand_count: u8,
    rules: &Rules,
) -> Action {
    if legality::can_split(cards, hand_count, rules) && (cards[0] == 1 || cards[0] == 8) {
        return Action::Split;
    }

    if legality::can_double(cards, value.total, hand_count, rules) {
        if (value.total == 9 || value.total == 10) && dealer_low(dealer_card) {
            return Action::Double;
        }
        if value.total == 11 {
            return Action::Double;
        }
    }

    hit_or_stand(dealer_card, value)
}

/// Super-easy plus: split everything but 4s, 5s, and 10s into a low card,
/// double 10 against 7-9, and double A6/A7 into a low card.
pub(crate) fn simple(
    cards: &[u8],
    dealer_card: u8,
    value: HandValue,
    hand_count: u8,
    rules: &Rules,
) -> Action {
    if legality::can_split(cards, hand_count, rules) {
        if cards[0] == 1 || cards[0] == 8 {
            return Action::Split;
        }
        if !matches!(cards[0], 4 | 5 | 10) && dealer_low(dealer_card) {
            return Action::Split;
        }
    }

    if legality::can_double(cards, value.total, hand_count, rules) {
        if value.total == 9 && dealer_low(dealer_card) {
            return Action::Double;
        }
        if value.total == 10 && matches!(dealer_card, 2..=9) {
            return Action::Double;
        }
        if cards.contains(&1)
            && (cards.contains(&6) || cards.contains(&7))
            && dealer_low(dealer_card)
        {
            return Action::Double;
        }
        if value.total == 11 {
            return Action::Double;
        }
    }

    hit_or_stand(dealer_card, value)
}

/// Simple plus: double A2-A5 against 5-6, hit soft 18 into a high card,
/// and hit 12 against a 2 or 3.
pub(crate) fn great(
    cards: &[u8],
    dealer_card: u8,
    value: HandValue,
    hand_count: u8,
    rules: &Rules,
) -> Action {
    if legality::can_split(cards, hand_count, rules) {
        if cards[0] == 1 || cards[0] == 8 {
            return Action::Split;
        }
        if !matches!(cards[0], 4 | 5 | 10) && dealer_low(dealer_card) {
            return Action::Split;
        }
    }

    if legality::can_double(cards, value.total, hand_count, rules) {
        if value.total == 9 && dealer_low(dealer_card) {
            return Action::Double;
        }
        if value.total == 10 && matches!(dealer_card, 2..=9) {
            return Action::Double;
        }
        if cards.contains(&1) {
            if (cards.contains(&6) || cards.contains(&7)) && dealer_low(dealer_card) {
                return Action::Double;
            }
            if cards.iter().any(|&c| matches!(c, 2..=5))
                && (dealer_card == 5 || dealer_card == 6)
            {
                return Action::Double;
            }
        }
        if value.total == 11 {
            return Action::Double;
        }
    }

    if value.soft {
        if value.total < 18 {
            return Action::Hit;
        }
        return if value.total == 18 && (dealer_card > 8 || dealer_card == 1) {
            Action::Hit
        } else {
            Action::Stand
        };
    }

    if value.total <= 11 {
        Action::Hit
    } else if value.total == 12 && (dealer_card == 2 || dealer_card == 3) {
        Action::Hit
    } else if dealer_low(dealer_card) {
        Action::Stand
    } else if value.total < 17 {
        Action::Hit
    } else {
        Action::Stand
    }
}
