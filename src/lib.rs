mod action;
mod basic;
mod composition;
mod count;
mod easy;
mod error;
mod guidelines;
mod hand;
mod legality;
mod rules;
mod strategy;

pub use action::Action;
pub use error::Error;
pub use hand::{hand_total, HandValue};
pub use rules::{
    Complexity, CountOptions, CountSystem, DoubleRule, RuleOptions, Rules, Surrender,
};
pub use strategy::recommended_action;
