//! Action transition dispatch.

use crate::action::{
    Action, ActionEffect, ActionTransition, ClimbAction, ForwardAction, GrabAction, Rotation,
    ShootAction, TransitionError, TurnAction,
};
use crate::state::GameState;

use super::errors::{TransitionPhase, TransitionPhaseError};

/// Executes a transition through the three-phase pipeline.
#[inline]
fn drive_transition<T>(
    transition: &T,
    state: &mut GameState,
) -> Result<ActionEffect, TransitionPhaseError<T::Error>>
where
    T: ActionTransition,
{
    transition
        .pre_validate(state)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PreValidate, error))?;

    let effect = transition
        .apply(state)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::Apply, error))?;

    transition
        .post_validate(state)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PostValidate, error))?;

    Ok(effect)
}

/// Routes an action to its transition.
pub(super) fn execute_transition(
    action: Action,
    state: &mut GameState,
) -> Result<ActionEffect, TransitionPhaseError<TransitionError>> {
    match action {
        Action::Forward => drive_transition(&ForwardAction, state),
        Action::TurnLeft => drive_transition(&TurnAction::new(Rotation::Left), state),
        Action::TurnRight => drive_transition(&TurnAction::new(Rotation::Right), state),
        Action::Shoot => drive_transition(&ShootAction, state),
        Action::Grab => drive_transition(&GrabAction, state),
        Action::Climb => drive_transition(&ClimbAction, state),
    }
}
