//! Error types for the action resolution pipeline.

use crate::action::{Action, TransitionError};
use crate::state::Outcome;

/// Identifies which stage of the transition pipeline produced an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum TransitionPhase {
    PreValidate,
    Apply,
    PostValidate,
}

/// Associates a transition phase with the underlying error.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransitionPhaseError<E> {
    pub phase: TransitionPhase,
    pub error: E,
}

impl<E> TransitionPhaseError<E> {
    pub fn new(phase: TransitionPhase, error: E) -> Self {
        Self { phase, error }
    }
}

impl<E: std::fmt::Display> std::fmt::Display for TransitionPhaseError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} failed: {}", self.phase, self.error)
    }
}

impl<E: std::fmt::Display + std::fmt::Debug> std::error::Error for TransitionPhaseError<E> {}

/// Errors surfaced by the [`super::Environment`].
///
/// `GameOver` and `Halted` are refusals: state is untouched and the caller may
/// keep the environment around. `Transition` is an invariant violation and
/// leaves the environment halted.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EnvironmentError {
    #[error("game already ended: {0}")]
    GameOver(Outcome),

    #[error("environment halted after an invariant violation")]
    Halted,

    #[error("{action} failed: {source}")]
    Transition {
        action: Action,
        source: TransitionPhaseError<TransitionError>,
    },
}

impl EnvironmentError {
    /// True if the environment can no longer serve any request.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            EnvironmentError::Halted | EnvironmentError::Transition { .. }
        )
    }
}
