use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::Error;

/// Surrender variant offered by the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Surrender {
    /// No surrender offered
    None,
    /// Surrender after the dealer checks for blackjack
    Late,
    /// Surrender before the dealer checks for blackjack
    Early,
}

/// Legacy shorthand for when doubling is allowed.
/// Translated into an explicit total range at resolution time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DoubleRule {
    #[serde(rename = "none")]
    None,
    #[serde(rename = "10or11")]
    TenOrEleven,
    #[serde(rename = "9or10or11")]
    NineToEleven,
    #[serde(rename = "any")]
    Any,
}

impl DoubleRule {
    pub fn range(self) -> (u8, u8) {
        match self {
            DoubleRule::None => (0, 0),
            DoubleRule::TenOrEleven => (10, 11),
            DoubleRule::NineToEleven => (9, 11),
            DoubleRule::Any => (0, 21),
        }
    }
}

/// Which strategy provider answers the evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Complexity {
    /// Total-based basic strategy
    #[serde(rename = "basic")]
    Basic,
    /// Single simplified table (coarser than basic)
    #[serde(rename = "easy")]
    Easy,
    /// Same tables as basic
    #[serde(rename = "simple")]
    Simple,
    /// Basic plus pair-aware surrender/stand exceptions
    #[serde(rename = "advanced")]
    Advanced,
    /// Advanced plus exact-composition override tables
    #[serde(rename = "exactComposition")]
    ExactComposition,
    /// Blackjack Calculation "super easy" rules of thumb
    #[serde(rename = "bjc-supereasy")]
    BjcSuperEasy,
    /// Blackjack Calculation "simple" rules of thumb
    #[serde(rename = "bjc-simple")]
    BjcSimple,
    /// Blackjack Calculation "great" rules of thumb
    #[serde(rename = "bjc-great")]
    BjcGreat,
}

impl Complexity {
    /// Advanced-tier complexities unlock the pair-aware exceptions that
    /// basic strategy glosses over (e.g. surrendering 8s against an ace).
    pub(crate) fn is_advanced(self) -> bool {
        matches!(self, Complexity::Advanced | Complexity::ExactComposition)
    }
}

impl FromStr for Complexity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "basic" => Ok(Complexity::Basic),
            "easy" => Ok(Complexity::Easy),
            "simple" => Ok(Complexity::Simple),
            "advanced" => Ok(Complexity::Advanced),
            "exactComposition" => Ok(Complexity::ExactComposition),
            "bjc-supereasy" => Ok(Complexity::BjcSuperEasy),
            "bjc-simple" => Ok(Complexity::BjcSimple),
            "bjc-great" => Ok(Complexity::BjcGreat),
            _ => Err(Error::UnrecognizedComplexity(s.to_string())),
        }
    }
}

/// Recognized card counting systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CountSystem {
    #[serde(rename = "HiLo", alias = "hi-lo")]
    HiLo,
}

/// Caller-supplied running count state. Deviations only apply when both
/// a recognized system and a true count are present.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountOptions {
    pub system: Option<CountSystem>,
    pub true_count: Option<f64>,
}

/// Resolved, immutable rule configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rules {
    /// Dealer hits soft 17
    pub hit_soft_17: bool,

    /// Surrender offered: none, late, or early
    pub surrender: Surrender,

    /// Inclusive range of totals eligible for doubling
    pub double_range: (u8, u8),

    /// Can double after split
    pub double_after_split: bool,

    /// Can resplit aces
    pub resplit_aces: bool,

    /// Insurance is offered
    pub offer_insurance: bool,

    /// Number of decks in play
    pub number_of_decks: u8,

    /// Maximum number of hands you can have due to splits
    pub max_split_hands: u8,

    /// Strategy provider selection
    pub complexity: Complexity,

    /// Running count state, if the caller tracks one
    pub count: CountOptions,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            hit_soft_17: true,
            surrender: Surrender::Late,
            double_range: (0, 21),
            double_after_split: true,
            resplit_aces: false,
            offer_insurance: true,
            number_of_decks: 6,
            max_split_hands: 4,
            complexity: Complexity::Basic,
            count: CountOptions::default(),
        }
    }
}

/// Partial rule configuration as supplied by a caller. Every field is
/// independently optional; unset fields keep the documented defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RuleOptions {
    pub hit_soft17: Option<bool>,
    pub surrender: Option<Surrender>,
    /// Legacy shorthand, used only when `double_range` is absent
    pub double: Option<DoubleRule>,
    pub double_range: Option<(u8, u8)>,
    pub double_after_split: Option<bool>,
    pub resplit_aces: Option<bool>,
    pub offer_insurance: Option<bool>,
    pub number_of_decks: Option<u8>,
    pub max_split_hands: Option<u8>,
    pub strategy_complexity: Option<Complexity>,
    pub count: Option<CountOptions>,
}

impl Rules {
    /// Merge caller options over defaults, field by field. The legacy
    /// `double` shorthand is translated only when no explicit range was
    /// given; an explicit `double_range` always wins.
    pub fn resolve(options: Option<&RuleOptions>) -> Rules {
        let mut rules = Rules::default();
        let Some(options) = options else {
            return rules;
        };

        if let Some(hit_soft_17) = options.hit_soft17 {
            rules.hit_soft_17 = hit_soft_17;
        }
        if let Some(surrender) = options.surrender {
            rules.surrender = surrender;
        }
        if let Some(range) = options.double_range {
            rules.double_range = range;
        } else if let Some(double) = options.double {
            rules.double_range = double.range();
        }
        if let Some(das) = options.double_after_split {
            rules.double_after_split = das;
        }
        if let Some(resplit_aces) = options.resplit_aces {
            rules.resplit_aces = resplit_aces;
        }
        if let Some(offer_insurance) = options.offer_insurance {
            rules.offer_insurance = offer_insurance;
        }
        if let Some(number_of_decks) = options.number_of_decks {
            rules.number_of_decks = number_of_decks;
        }
        if let Some(max_split_hands) = options.max_split_hands {
            rules.max_split_hands = max_split_hands;
        }
        if let Some(complexity) = options.strategy_complexity {
            rules.complexity = complexity;
        }
        if let Some(count) = options.count {
            rules.count = count;
        }

        rules
    }
}
