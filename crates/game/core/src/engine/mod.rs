//! Action resolution state machine.
//!
//! The [`Environment`] is the sole writer of ground truth. It serves two kinds
//! of request: a perception query, which never mutates state, and an action,
//! which runs through the transition pipeline and either yields the
//! perceptions of the explorer's (possibly new) cell or ends the game.

mod errors;
mod transition;

pub use errors::{EnvironmentError, TransitionPhase, TransitionPhaseError};

use crate::action::{Action, ActionEffect};
use crate::perception::PerceptionSet;
use crate::state::{ExplorerState, GamePhase, GameState, Outcome, TurnState};
use crate::world::WorldModel;

/// Result of serving one request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Resolution {
    Perceptions(PerceptionSet),
    GameOver(Outcome),
}

/// Detailed record of an accepted action, for logging by the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResolvedAction {
    pub turn: u64,
    pub action: Action,
    pub effect: ActionEffect,
    pub resolution: Resolution,
}

/// Owns the ground-truth world, the explorer token and the turn counter.
#[derive(Clone, Debug)]
pub struct Environment {
    state: GameState,
}

impl Environment {
    pub fn new(world: WorldModel) -> Self {
        Self {
            state: GameState::new(world),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn world(&self) -> &WorldModel {
        &self.state.world
    }

    pub fn explorer(&self) -> &ExplorerState {
        &self.state.explorer
    }

    pub fn turn(&self) -> TurnState {
        self.state.turn
    }

    pub fn phase(&self) -> GamePhase {
        self.state.turn.phase
    }

    /// Perceptions at the explorer's current cell, without touching state.
    pub fn query(&self) -> Result<PerceptionSet, EnvironmentError> {
        self.ensure_accepting()?;
        Ok(self.perceptions(ActionEffect::default()))
    }

    /// Resolves one action.
    ///
    /// On success the turn counter advances and the phase returns to
    /// `AwaitingAction`, or moves to `Terminal` when the action ended the
    /// game. On an invariant violation the phase stays `Resolving` and every
    /// later request fails with [`EnvironmentError::Halted`].
    pub fn resolve(&mut self, action: Action) -> Result<ResolvedAction, EnvironmentError> {
        self.ensure_accepting()?;

        self.state.turn.phase = GamePhase::Resolving;
        let effect = transition::execute_transition(action, &mut self.state)
            .map_err(|source| EnvironmentError::Transition { action, source })?;

        self.state.turn.turn += 1;
        let resolution = match effect.outcome {
            Some(outcome) => {
                self.state.turn.phase = GamePhase::Terminal(outcome);
                Resolution::GameOver(outcome)
            }
            None => {
                self.state.turn.phase = GamePhase::AwaitingAction;
                Resolution::Perceptions(self.perceptions(effect))
            }
        };

        Ok(ResolvedAction {
            turn: self.state.turn.turn,
            action,
            effect,
            resolution,
        })
    }

    fn ensure_accepting(&self) -> Result<(), EnvironmentError> {
        match self.state.turn.phase {
            GamePhase::AwaitingAction => Ok(()),
            GamePhase::Resolving => Err(EnvironmentError::Halted),
            GamePhase::Terminal(outcome) => Err(EnvironmentError::GameOver(outcome)),
        }
    }

    fn perceptions(&self, effect: ActionEffect) -> PerceptionSet {
        let mut set = self
            .state
            .world
            .cell_at(self.state.explorer.position)
            .map(|cell| cell.perceptions())
            .unwrap_or_default();
        set.set(PerceptionSet::BUMP, effect.bump);
        set.set(PerceptionSet::SCREAM, effect.scream);
        set.or_safe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{CardinalDirection, FailReason, Position};
    use crate::world::WorldLayout;

    /// Wumpus (2,0), pit (1,1), gold (3,3).
    fn scenario() -> Environment {
        let layout = WorldLayout::new(Position::new(2, 0), Position::new(3, 3), [Position::new(1, 1)]);
        Environment::new(WorldModel::from_layout(4, &layout).unwrap())
    }

    fn perceptions(resolved: ResolvedAction) -> PerceptionSet {
        match resolved.resolution {
            Resolution::Perceptions(set) => set,
            Resolution::GameOver(outcome) => panic!("unexpected game over: {outcome}"),
        }
    }

    #[test]
    fn initial_query_is_safe_and_does_not_count() {
        let env = scenario();
        assert_eq!(env.query().unwrap(), PerceptionSet::SAFE);
        assert_eq!(env.turn().turn, 0);
        assert_eq!(env.explorer().direction, CardinalDirection::East);
        assert!(env.world().cell_at(Position::ORIGIN).unwrap().explored);
    }

    #[test]
    fn stench_and_breeze_next_to_hazards() {
        let mut env = scenario();
        let set = perceptions(env.resolve(Action::Forward).unwrap());
        assert_eq!(set, PerceptionSet::STENCH | PerceptionSet::BREEZE);
        assert_eq!(env.explorer().position, Position::new(1, 0));
        assert_eq!(env.turn().turn, 1);
    }

    #[test]
    fn bump_reports_current_cell_too() {
        let mut env = scenario();
        env.resolve(Action::TurnLeft).unwrap();
        let set = perceptions(env.resolve(Action::Forward).unwrap());
        assert_eq!(set, PerceptionSet::BUMP);
        assert_eq!(env.explorer().position, Position::ORIGIN);
    }

    #[test]
    fn scream_is_reported_once_and_stench_disappears() {
        let mut env = scenario();
        let shot = env.resolve(Action::Shoot).unwrap();
        assert!(shot.effect.scream);
        assert_eq!(perceptions(shot), PerceptionSet::SCREAM);
        assert!(!env.world().is_wumpus_alive());

        let set = perceptions(env.resolve(Action::Forward).unwrap());
        assert_eq!(set, PerceptionSet::BREEZE);
    }

    #[test]
    fn pit_ends_game_and_later_requests_are_refused() {
        let mut env = scenario();
        env.resolve(Action::TurnRight).unwrap();
        env.resolve(Action::Forward).unwrap();
        env.resolve(Action::TurnLeft).unwrap();

        let resolved = env.resolve(Action::Forward).unwrap();
        let outcome = Outcome::Fail(FailReason::Pit);
        assert_eq!(resolved.resolution, Resolution::GameOver(outcome));
        assert_eq!(env.phase(), GamePhase::Terminal(outcome));

        let turns = env.turn().turn;
        assert_eq!(env.resolve(Action::Climb), Err(EnvironmentError::GameOver(outcome)));
        assert_eq!(env.query(), Err(EnvironmentError::GameOver(outcome)));
        assert_eq!(env.turn().turn, turns);
    }

    #[test]
    fn climb_at_entry() {
        let mut env = scenario();
        let resolved = env.resolve(Action::Climb).unwrap();
        assert_eq!(
            resolved.resolution,
            Resolution::GameOver(Outcome::Fail(FailReason::NoGold))
        );

        let mut env = scenario();
        env.state.explorer.has_gold = true;
        let resolved = env.resolve(Action::Climb).unwrap();
        assert_eq!(resolved.resolution, Resolution::GameOver(Outcome::Success));
    }

    #[test]
    fn invariant_violation_halts_environment() {
        let mut env = scenario();
        env.state.explorer.position = Position::new(9, 9);

        let err = env.resolve(Action::Forward).unwrap_err();
        assert!(err.is_fatal());
        assert!(matches!(
            err,
            EnvironmentError::Transition {
                action: Action::Forward,
                source: TransitionPhaseError {
                    phase: TransitionPhase::PreValidate,
                    ..
                },
            }
        ));
        assert_eq!(env.phase(), GamePhase::Resolving);
        assert_eq!(env.query(), Err(EnvironmentError::Halted));
    }
}
