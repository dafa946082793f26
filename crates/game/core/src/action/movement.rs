use crate::action::{ActionEffect, ActionTransition, TransitionError, explorer_on_grid};
use crate::state::{FailReason, GameState, Outcome};

/// Moves the explorer one cell along its orientation.
///
/// Walking off the grid is a defined outcome (BUMP, pose unchanged). Entering
/// a pit or a live Wumpus ends the game before any perception is produced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ForwardAction;

impl ActionTransition for ForwardAction {
    type Error = TransitionError;

    fn pre_validate(&self, state: &GameState) -> Result<(), Self::Error> {
        explorer_on_grid(state)
    }

    fn apply(&self, state: &mut GameState) -> Result<ActionEffect, Self::Error> {
        let dimensions = state.world.dimensions();
        if !state.explorer.move_forward(dimensions) {
            return Ok(ActionEffect {
                bump: true,
                ..ActionEffect::default()
            });
        }

        let position = state.explorer.position;
        let wumpus_alive = state.world.is_wumpus_alive();
        let cell = state
            .world
            .cell_at_mut(position)
            .ok_or(TransitionError::MissingCell { position })?;

        if cell.has_pit {
            return Ok(ActionEffect::terminal(Outcome::Fail(FailReason::Pit)));
        }
        if cell.has_wumpus && wumpus_alive {
            return Ok(ActionEffect::terminal(Outcome::Fail(FailReason::Wumpus)));
        }
        cell.explored = true;
        Ok(ActionEffect::default())
    }

    fn post_validate(&self, state: &GameState) -> Result<(), Self::Error> {
        explorer_on_grid(state)
    }
}

/// Direction of a quarter turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rotation {
    Left,
    Right,
}

/// Pure 90° rotation. Always succeeds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TurnAction {
    pub rotation: Rotation,
}

impl TurnAction {
    pub const fn new(rotation: Rotation) -> Self {
        Self { rotation }
    }
}

impl ActionTransition for TurnAction {
    type Error = TransitionError;

    fn apply(&self, state: &mut GameState) -> Result<ActionEffect, Self::Error> {
        match self.rotation {
            Rotation::Left => state.explorer.turn_left(),
            Rotation::Right => state.explorer.turn_right(),
        }
        Ok(ActionEffect::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{CardinalDirection, Position};
    use crate::world::{WorldLayout, WorldModel};

    fn state() -> GameState {
        let layout = WorldLayout::new(Position::new(2, 0), Position::new(3, 3), [Position::new(1, 1)]);
        GameState::new(WorldModel::from_layout(4, &layout).unwrap())
    }

    #[test]
    fn forward_into_wall_bumps_without_moving() {
        let mut state = state();
        state.explorer.direction = CardinalDirection::North;

        let effect = ForwardAction.apply(&mut state).unwrap();

        assert!(effect.bump);
        assert_eq!(effect.outcome, None);
        assert_eq!(state.explorer.position, Position::ORIGIN);
    }

    #[test]
    fn forward_marks_destination_explored() {
        let mut state = state();
        state.explorer.direction = CardinalDirection::South;

        let effect = ForwardAction.apply(&mut state).unwrap();

        assert_eq!(effect, ActionEffect::default());
        assert_eq!(state.explorer.position, Position::new(0, 1));
        assert!(state.world.cell_at(Position::new(0, 1)).unwrap().explored);
    }

    #[test]
    fn forward_into_live_wumpus_is_fatal_but_dead_wumpus_is_not() {
        let mut state = state();
        state.explorer.position = Position::new(1, 0);

        let effect = ForwardAction.apply(&mut state).unwrap();
        assert_eq!(effect.outcome, Some(Outcome::Fail(FailReason::Wumpus)));

        let mut state = self::state();
        state.explorer.position = Position::new(1, 0);
        state.world.set_wumpus_alive(false);
        let effect = ForwardAction.apply(&mut state).unwrap();
        assert_eq!(effect.outcome, None);
        assert_eq!(state.explorer.position, Position::new(2, 0));
    }

    #[test]
    fn turns_only_rotate() {
        let mut state = state();
        TurnAction::new(Rotation::Left).apply(&mut state).unwrap();
        assert_eq!(state.explorer.direction, CardinalDirection::North);
        TurnAction::new(Rotation::Right).apply(&mut state).unwrap();
        TurnAction::new(Rotation::Right).apply(&mut state).unwrap();
        assert_eq!(state.explorer.direction, CardinalDirection::South);
        assert_eq!(state.explorer.position, Position::ORIGIN);
    }
}
