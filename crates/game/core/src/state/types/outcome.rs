use std::fmt;

/// Why a game ended in failure.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum FailReason {
    /// Stepped into a pit.
    Pit,
    /// Walked into a live Wumpus.
    Wumpus,
    /// Climbed out of the entry cell without the gold.
    NoGold,
}

/// Terminal outcome of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// Gold retrieved and climbed out.
    Success,
    Fail(FailReason),
}

impl Outcome {
    pub const fn is_success(self) -> bool {
        matches!(self, Outcome::Success)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Success => f.write_str("SUCCESS"),
            Outcome::Fail(reason) => write!(f, "FAIL:{reason}"),
        }
    }
}
