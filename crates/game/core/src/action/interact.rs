use crate::action::{ActionEffect, ActionTransition, TransitionError};
use crate::config::GameConfig;
use crate::state::{FailReason, GameState, Outcome};

/// Picks up the gold if it lies in the explorer's cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GrabAction;

impl ActionTransition for GrabAction {
    type Error = TransitionError;

    fn apply(&self, state: &mut GameState) -> Result<ActionEffect, Self::Error> {
        let position = state.explorer.position;
        let cell = state
            .world
            .cell_at_mut(position)
            .ok_or(TransitionError::MissingCell { position })?;

        if !cell.has_gold {
            return Ok(ActionEffect::no_op());
        }
        cell.has_gold = false;
        state.explorer.has_gold = true;
        Ok(ActionEffect::default())
    }

    fn post_validate(&self, state: &GameState) -> Result<(), Self::Error> {
        let position = state.explorer.position;
        match state.world.cell_at(position) {
            Some(cell) if cell.has_gold && state.explorer.has_gold => {
                Err(TransitionError::GoldNotCleared { position })
            }
            Some(_) => Ok(()),
            None => Err(TransitionError::MissingCell { position }),
        }
    }
}

/// Leaves the cave. Only meaningful on the entry cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClimbAction;

impl ActionTransition for ClimbAction {
    type Error = TransitionError;

    fn apply(&self, state: &mut GameState) -> Result<ActionEffect, Self::Error> {
        if state.explorer.position != GameConfig::ENTRY {
            return Ok(ActionEffect::no_op());
        }
        let outcome = if state.explorer.has_gold {
            Outcome::Success
        } else {
            Outcome::Fail(FailReason::NoGold)
        };
        Ok(ActionEffect::terminal(outcome))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Position;
    use crate::world::{WorldLayout, WorldModel};

    fn state() -> GameState {
        let layout = WorldLayout::new(Position::new(2, 0), Position::new(1, 0), [Position::new(1, 1)]);
        GameState::new(WorldModel::from_layout(4, &layout).unwrap())
    }

    #[test]
    fn grab_transfers_gold_once() {
        let mut state = state();
        assert!(GrabAction.apply(&mut state).unwrap().no_op);

        state.explorer.position = Position::new(1, 0);
        let effect = GrabAction.apply(&mut state).unwrap();
        assert!(!effect.no_op);
        assert!(state.explorer.has_gold);
        assert!(!state.world.cell_at(Position::new(1, 0)).unwrap().has_gold);
        assert!(GrabAction.post_validate(&state).is_ok());

        assert!(GrabAction.apply(&mut state).unwrap().no_op);
    }

    #[test]
    fn climb_outcome_depends_on_gold() {
        let mut state = state();
        assert_eq!(
            ClimbAction.apply(&mut state).unwrap().outcome,
            Some(Outcome::Fail(FailReason::NoGold))
        );

        state.explorer.has_gold = true;
        assert_eq!(
            ClimbAction.apply(&mut state).unwrap().outcome,
            Some(Outcome::Success)
        );
    }

    #[test]
    fn climb_away_from_entry_does_nothing() {
        let mut state = state();
        state.explorer.position = Position::new(0, 2);
        state.explorer.has_gold = true;
        let effect = ClimbAction.apply(&mut state).unwrap();
        assert!(effect.no_op);
        assert_eq!(effect.outcome, None);
    }
}
