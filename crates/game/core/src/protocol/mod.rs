//! Typed role-to-role messages.
//!
//! Roles exchange these as text frames (see [`wire`]); everything inside a
//! role works on the closed enums below.
pub mod wire;

pub use wire::{Frame, WireError};

use crate::action::Action;
use crate::engine::{EnvironmentError, Resolution};
use crate::perception::PerceptionSet;
use crate::state::Outcome;

/// Explorer → Environment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EnvironmentRequest {
    /// Perceptions at the current cell, no state change. Sent once at start.
    PerceptionQuery,
    Act(ActionCommand),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionCommand {
    pub action: Action,
}

/// Environment → Explorer, and Explorer → Navigator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PerceptionReport {
    pub perceptions: PerceptionSet,
}

/// Navigator → Explorer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RecommendedAction {
    pub action: Action,
}

/// Why the environment declined a request. State is never changed by a
/// refused request.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Refusal {
    InvalidAction { token: String },
    GameOver(Outcome),
    Halted,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EnvironmentReply {
    Perceptions(PerceptionReport),
    GameOver(Outcome),
    Refused(Refusal),
}

impl From<Resolution> for EnvironmentReply {
    fn from(resolution: Resolution) -> Self {
        match resolution {
            Resolution::Perceptions(perceptions) => {
                EnvironmentReply::Perceptions(PerceptionReport { perceptions })
            }
            Resolution::GameOver(outcome) => EnvironmentReply::GameOver(outcome),
        }
    }
}

impl From<&EnvironmentError> for Refusal {
    fn from(error: &EnvironmentError) -> Self {
        match error {
            EnvironmentError::GameOver(outcome) => Refusal::GameOver(*outcome),
            EnvironmentError::Halted | EnvironmentError::Transition { .. } => Refusal::Halted,
        }
    }
}
