use std::fmt;

use super::{CardinalDirection, Position};
use crate::env::GridDimensions;

/// Ground-truth pose and inventory of the explorer token.
///
/// Only the environment mutates this, in response to accepted actions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExplorerState {
    pub position: Position,
    pub direction: CardinalDirection,
    /// Single-use for the whole game.
    pub has_arrow: bool,
    pub has_gold: bool,
}

impl ExplorerState {
    /// Creates an explorer at `position` facing `direction` with one arrow and no gold.
    pub fn new(position: Position, direction: CardinalDirection) -> Self {
        Self {
            position,
            direction,
            has_arrow: true,
            has_gold: false,
        }
    }

    /// Cell directly ahead of the explorer (may be out of bounds).
    pub fn forward_cell(&self) -> Position {
        self.position.step(self.direction)
    }

    /// Moves one cell forward if the destination is inside the grid.
    ///
    /// Returns `false` (pose unchanged) when the move would leave the grid.
    pub fn move_forward(&mut self, dimensions: GridDimensions) -> bool {
        let destination = self.forward_cell();
        if !dimensions.contains(destination) {
            return false;
        }
        self.position = destination;
        true
    }

    pub fn turn_left(&mut self) {
        self.direction = self.direction.turn_left();
    }

    pub fn turn_right(&mut self) {
        self.direction = self.direction.turn_right();
    }

    /// Consumes the arrow. Returns `false` if it was already spent.
    pub fn use_arrow(&mut self) -> bool {
        std::mem::replace(&mut self.has_arrow, false)
    }
}

impl Default for ExplorerState {
    fn default() -> Self {
        Self::new(Position::ORIGIN, CardinalDirection::East)
    }
}

impl fmt::Display for ExplorerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "explorer at {} facing {} (arrow: {}, gold: {})",
            self.position, self.direction, self.has_arrow, self.has_gold
        )
    }
}
