use crate::state::{CardinalDirection, Position};

/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Side length of the square grid.
    pub grid_size: u32,
    /// Seed for world generation. The same seed reproduces the same world.
    pub seed: u64,
}

impl GameConfig {
    // ===== fixed rules =====
    /// Entry and exit cell.
    pub const ENTRY: Position = Position::ORIGIN;
    /// Orientation of the explorer at game start.
    pub const START_DIRECTION: CardinalDirection = CardinalDirection::East;
    /// Every world has at least this many pits...
    pub const MIN_PITS: u32 = 2;
    /// ...plus up to this many more, chosen at random.
    pub const MAX_EXTRA_PITS: u32 = 1;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_GRID_SIZE: u32 = 4;

    pub fn new() -> Self {
        Self {
            grid_size: Self::DEFAULT_GRID_SIZE,
            seed: 0,
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Self::new()
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Navigator policy switches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NavigatorConfig {
    /// Plan multi-step routes over known-safe cells: back to the entry once
    /// the gold is held, otherwise to the nearest safe unvisited cell. When
    /// off, the navigator only looks at adjacent cells and falls back to
    /// turning right.
    pub route_planning: bool,
}

impl NavigatorConfig {
    pub fn with_route_planning(route_planning: bool) -> Self {
        Self { route_planning }
    }
}
