//! Authoritative game state representation.
//!
//! [`GameState`] bundles the ground-truth world, the explorer token and the
//! turn bookkeeping. It is owned by the environment and mutated only through
//! the action transitions in [`crate::action`].
pub mod types;

pub use types::{
    CardinalDirection, ExplorerState, FailReason, GamePhase, Outcome, Position, TurnState,
};

use crate::config::GameConfig;
use crate::world::WorldModel;

/// Canonical snapshot of the deterministic game state.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    pub world: WorldModel,
    pub explorer: ExplorerState,
    pub turn: TurnState,
}

impl GameState {
    /// Places a fresh explorer on the entry cell of `world` and marks that
    /// cell explored.
    pub fn new(mut world: WorldModel) -> Self {
        if let Some(entry) = world.cell_at_mut(GameConfig::ENTRY) {
            entry.explored = true;
        }
        Self {
            world,
            explorer: ExplorerState::new(GameConfig::ENTRY, GameConfig::START_DIRECTION),
            turn: TurnState::new(),
        }
    }
}
