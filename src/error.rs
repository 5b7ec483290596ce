use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid card rank: {0} (expected 1-10)")]
    InvalidCardRank(u8),
    #[error("Invalid hand: {0}")]
    InvalidHandShape(String),
    #[error("Unrecognized strategy complexity: {0}")]
    UnrecognizedComplexity(String),
}
