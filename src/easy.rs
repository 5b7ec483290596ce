//! The "easy" provider: one memorizable table that trades a little expected
//! value for simplicity. No surrender, no soft-double nuance, and splits
//! that ignore the dealer's upcard beyond "never split 4s, 5s, or 10s".

use crate::hand::HandValue;
use crate::legality;
use crate::rules::Rules;
use crate::Action;

pub(crate) fn resolve(
    cards: &[u8],
    dealer_card: u8,
    value: HandValue,
    hand_count: u8,
    rules: &Rules,
) -> Action {
    // Split unless 4s, 5s, and 10s
    if legality::can_split(cards, hand_count, rules) && !matches!(cards[0], 4 | 5 | 10) {
        return Action::Split;
    }

    // Double on 9-11 only
    if legality::can_double(cards, value.total, hand_count, rules) {
        if value.total == 9 && matches!(dealer_card, 2..=6) {
            return Action::Double;
        }
        if value.total == 10 && matches!(dealer_card, 2..=9) {
            return Action::Double;
        }
        if value.total == 11 {
            return Action::Double;
        }
    }

    // Soft: hit until 18, and at 18 against dealer 9-ace
    if value.soft
        && (value.total < 18 || (value.total == 18 && (dealer_card >= 9 || dealer_card == 1)))
    {
        return Action::Hit;
    }

    if value.total <= 11 {
        Action::Hit
    } else if value.total >= 17 {
        Action::Stand
    } else if dealer_card >= 7 || dealer_card == 1 {
        Action::Hit
    } else {
        Action::Stand
    }
}
