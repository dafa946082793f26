//! Event types for different topics.

use std::fmt;

use serde::{Deserialize, Serialize};
use wumpus_core::{Action, Outcome, PerceptionSet};

/// An action accepted by the environment and what the explorer perceived
/// afterwards. Not emitted for the action that ends the game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurnEvent {
    pub turn: u64,
    pub action: Action,
    pub perceptions: PerceptionSet,
}

/// Session lifecycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SessionEvent {
    /// The initial perception query was answered.
    Started { perceptions: PerceptionSet },
    Ended { end: SessionEnd, turns: u64 },
}

/// How a session stopped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEnd {
    /// The environment declared a terminal outcome.
    Finished(Outcome),
    /// The configured action budget ran out first.
    TurnLimitReached { turns: u64 },
    /// A frame could not be decoded or the environment refused the action.
    /// The round was abandoned without retry.
    Stalled { reason: String },
}

impl SessionEnd {
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            SessionEnd::Finished(outcome) => Some(*outcome),
            _ => None,
        }
    }
}

impl fmt::Display for SessionEnd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionEnd::Finished(outcome) => write!(f, "finished: {outcome}"),
            SessionEnd::TurnLimitReached { turns } => write!(f, "turn limit reached after {turns}"),
            SessionEnd::Stalled { reason } => write!(f, "stalled: {reason}"),
        }
    }
}
