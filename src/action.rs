use serde::{Deserialize, Serialize};
use std::fmt;

/// Recommended play for a hand. Exactly one is returned per evaluation.
///
/// `None` is reserved for the logically unreachable case where no stage of
/// the resolver chain produced a verdict; callers should treat it as a
/// defect signal rather than a playable recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Split,
    Double,
    Surrender,
    Stand,
    Hit,
    Insurance,
    NoInsurance,
    None,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Split => "split",
            Action::Double => "double",
            Action::Surrender => "surrender",
            Action::Stand => "stand",
            Action::Hit => "hit",
            Action::Insurance => "insurance",
            Action::NoInsurance => "noinsurance",
            Action::None => "none",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
