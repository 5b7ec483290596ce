use serde::{Deserialize, Serialize};

/// Total and soft/hard status of a hand, computed fresh from its cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandValue {
    pub total: u8,
    pub soft: bool,
}

/// Calculate the value of a blackjack hand.
///
/// Ranks are 1-10 with 1 an ace and 10 any ten-value card. If an ace is
/// present and promoting it to 11 keeps the total at or under 21, exactly
/// one ace is counted as 11 and the hand is soft; additional aces always
/// count as 1.
pub fn hand_total(cards: &[u8]) -> HandValue {
    let mut total: u8 = 0;
    let mut has_ace = false;

    for &card in cards {
        total += card;
        if card == 1 {
            has_ace = true;
        }
    }

    if total <= 11 && has_ace {
        HandValue {
            total: total + 10,
            soft: true,
        }
    } else {
        HandValue { total, soft: false }
    }
}

/// Check whether the hand is exactly a pair of the given rank.
/// Order-independent, and false for any hand that is not two cards.
pub(crate) fn is_pair(cards: &[u8], rank: u8) -> bool {
    cards.len() == 2 && cards[0] == rank && cards[1] == rank
}

/// Check whether the hand is two cards of identical rank.
pub(crate) fn is_any_pair(cards: &[u8]) -> bool {
    cards.len() == 2 && cards[0] == cards[1]
}

/// Check whether two cards form the given (unordered) composition.
pub(crate) fn composed_of(cards: &[u8], a: u8, b: u8) -> bool {
    cards.len() == 2 && ((cards[0] == a && cards[1] == b) || (cards[0] == b && cards[1] == a))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hard_total() {
        assert_eq!(
            hand_total(&[9, 7]),
            HandValue {
                total: 16,
                soft: false
            }
        );
        assert_eq!(
            hand_total(&[10, 10]),
            HandValue {
                total: 20,
                soft: false
            }
        );
    }

    #[test]
    fn test_soft_total() {
        assert_eq!(
            hand_total(&[1, 6]),
            HandValue {
                total: 17,
                soft: true
            }
        );
        assert_eq!(
            hand_total(&[1, 10]),
            HandValue {
                total: 21,
                soft: true
            }
        );
    }

    #[test]
    fn test_ace_demoted_when_promotion_busts() {
        assert_eq!(
            hand_total(&[1, 6, 9]),
            HandValue {
                total: 16,
                soft: false
            }
        );
    }

    #[test]
    fn test_only_one_ace_promoted() {
        // A + A = 12 soft; A + A + 9 = 21 soft (one ace as 11, one as 1)
        assert_eq!(
            hand_total(&[1, 1]),
            HandValue {
                total: 12,
                soft: true
            }
        );
        assert_eq!(
            hand_total(&[1, 1, 9]),
            HandValue {
                total: 21,
                soft: true
            }
        );
        assert_eq!(
            hand_total(&[1, 1, 10]),
            HandValue {
                total: 12,
                soft: false
            }
        );
    }

    #[test]
    fn test_total_is_order_independent() {
        let hands: [&[u8]; 4] = [&[1, 6, 9], &[9, 1, 6], &[6, 9, 1], &[9, 6, 1]];
        for hand in hands {
            assert_eq!(hand_total(hand), hand_total(hands[0]));
        }
    }

    #[test]
    fn test_soft_hand_is_hard_total_plus_ten() {
        for other in 1..=9u8 {
            let value = hand_total(&[1, other]);
            assert!(value.soft);
            assert_eq!(value.total, 1 + other + 10);
        }
    }

    #[test]
    fn test_is_pair_order_independent() {
        assert!(is_pair(&[7, 7], 7));
        assert!(!is_pair(&[7, 8], 7));
        assert!(!is_pair(&[8, 7], 7));
        assert!(!is_pair(&[7, 7, 7], 7));
    }

    #[test]
    fn test_composed_of() {
        assert!(composed_of(&[8, 7], 7, 8));
        assert!(composed_of(&[7, 8], 7, 8));
        assert!(!composed_of(&[9, 6], 7, 8));
        assert!(!composed_of(&[7, 8, 1], 7, 8));
    }
}
