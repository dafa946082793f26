use crate::action::{ActionEffect, ActionTransition, TransitionError};
use crate::state::GameState;

/// Fires the single arrow along the explorer's orientation.
///
/// The trace starts at the explorer's own cell and runs to the grid edge. A
/// live Wumpus anywhere on it dies. Shooting without an arrow is accepted as
/// a no-op.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ShootAction;

impl ActionTransition for ShootAction {
    type Error = TransitionError;

    fn apply(&self, state: &mut GameState) -> Result<ActionEffect, Self::Error> {
        if !state.explorer.use_arrow() {
            return Ok(ActionEffect::no_op());
        }

        let direction = state.explorer.direction;
        let mut cursor = state.explorer.position;
        let mut hit = false;
        while let Some(cell) = state.world.cell_at(cursor) {
            if cell.has_wumpus && state.world.is_wumpus_alive() {
                hit = true;
                break;
            }
            cursor = cursor.step(direction);
        }

        if hit {
            state.world.set_wumpus_alive(false);
        }
        Ok(ActionEffect {
            scream: hit,
            ..ActionEffect::default()
        })
    }
}
