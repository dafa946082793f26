//! Action vocabulary and per-action state transitions.
//!
//! Each accepted [`Action`] resolves through a concrete transition type
//! implementing [`ActionTransition`]. The engine drives every transition
//! through the same `pre_validate → apply → post_validate` pipeline.
mod error;
mod interact;
mod movement;
mod shoot;

pub use error::TransitionError;
pub use interact::{ClimbAction, GrabAction};
pub use movement::{ForwardAction, Rotation, TurnAction};
pub use shoot::ShootAction;

use crate::state::{GameState, Outcome};

/// Closed set of actions the explorer can submit.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum Action {
    TurnLeft,
    TurnRight,
    Forward,
    Shoot,
    Grab,
    Climb,
}

/// Observable side effects of a single resolved action.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionEffect {
    /// FORWARD hit the grid edge; the explorer did not move.
    pub bump: bool,
    /// The arrow killed the Wumpus.
    pub scream: bool,
    /// The action was accepted but changed nothing (spent arrow, nothing to
    /// grab, climbing away from the entry).
    pub no_op: bool,
    pub outcome: Option<Outcome>,
}

impl ActionEffect {
    pub(crate) fn no_op() -> Self {
        Self {
            no_op: true,
            ..Self::default()
        }
    }

    pub(crate) fn terminal(outcome: Outcome) -> Self {
        Self {
            outcome: Some(outcome),
            ..Self::default()
        }
    }
}

/// Defines how a concrete action mutates game state.
///
/// Implementors can override the validation hooks to surface pre- and
/// post-conditions that must hold around the state mutation. Validation hooks
/// must stay side-effect free.
pub trait ActionTransition {
    type Error;

    /// Validates pre-conditions using the state **before** mutation.
    fn pre_validate(&self, _state: &GameState) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies the action by mutating the game state directly. Implementations
    /// may assume that `pre_validate` has already run successfully.
    fn apply(&self, state: &mut GameState) -> Result<ActionEffect, Self::Error>;

    /// Validates post-conditions using the state **after** mutation.
    fn post_validate(&self, _state: &GameState) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Shared post-condition: the explorer stands on an existing cell.
pub(crate) fn explorer_on_grid(state: &GameState) -> Result<(), TransitionError> {
    let position = state.explorer.position;
    if !state.world.contains(position) {
        return Err(TransitionError::ExplorerOutOfBounds {
            position,
            size: state.world.size(),
        });
    }
    state
        .world
        .cell_at(position)
        .map(|_| ())
        .ok_or(TransitionError::MissingCell { position })
}
