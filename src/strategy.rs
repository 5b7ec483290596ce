//! Top-level entry point: input validation, option resolution, and
//! provider dispatch.

use crate::hand::hand_total;
use crate::rules::{Complexity, RuleOptions, Rules, Surrender};
use crate::{basic, count, easy, guidelines, legality, Action, Error};

/// The statistically-recommended action for a single blackjack hand.
///
/// * `player_cards` — ranks 1-10 in as-dealt order (1 = ace, 10 = any
///   ten-value card)
/// * `dealer_card` — the dealer's upcard, 1-10
/// * `hand_count` — 1-based count of hands resulting from splits so far
/// * `dealer_checked_blackjack` — whether the hole card has been checked
///   (gates the insurance decision)
/// * `options` — partial rule configuration; unset fields take the
///   documented defaults
///
/// Stateless and pure: identical inputs always produce the identical
/// action.
pub fn recommended_action(
    player_cards: &[u8],
    dealer_card: u8,
    hand_count: u8,
    dealer_checked_blackjack: bool,
    options: Option<&RuleOptions>,
) -> Result<Action, Error> {
    if player_cards.is_empty() {
        return Err(Error::InvalidHandShape("empty hand".to_string()));
    }
    if hand_count == 0 {
        return Err(Error::InvalidHandShape(
            "hand count is 1-based; the original hand is 1".to_string(),
        ));
    }
    for &rank in player_cards {
        if !(1..=10).contains(&rank) {
            return Err(Error::InvalidCardRank(rank));
        }
    }
    if !(1..=10).contains(&dealer_card) {
        return Err(Error::InvalidCardRank(dealer_card));
    }

    let rules = Rules::resolve(options);
    let value = hand_total(player_cards);

    // Early surrender happens before the dealer checks for blackjack, so
    // it outranks every provider, including the insurance decision.
    if rules.surrender == Surrender::Early
        && basic::should_surrender(player_cards, dealer_card, value, hand_count, &rules)
    {
        return Ok(Action::Surrender);
    }

    // A sufficiently favorable count overrides everything below.
    if let Some(action) = count::deviation(
        player_cards,
        dealer_card,
        value,
        hand_count,
        dealer_checked_blackjack,
        &rules,
    ) {
        return Ok(action);
    }

    // Without a count edge, insurance is always declined.
    if legality::can_insure(dealer_card, dealer_checked_blackjack, &rules) {
        return Ok(Action::NoInsurance);
    }

    Ok(match rules.complexity {
        Complexity::Easy => easy::resolve(player_cards, dealer_card, value, hand_count, &rules),
        Complexity::BjcSuperEasy => {
            guidelines::super_easy(player_cards, dealer_card, value, hand_count, &rules)
        }
        Complexity::BjcSimple => {
            guidelines::simple(player_cards, dealer_card, value, hand_count, &rules)
        }
        Complexity::BjcGreat => {
            guidelines::great(player_cards, dealer_card, value, hand_count, &rules)
        }
        Complexity::Basic | Complexity::Simple | Complexity::Advanced
        | Complexity::ExactComposition => {
            basic::resolve(player_cards, dealer_card, value, hand_count, &rules)
        }
    })
}
