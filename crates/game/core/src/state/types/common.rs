use std::fmt;

use arrayvec::ArrayVec;

use crate::env::GridDimensions;

/// Discrete grid position expressed in cell coordinates.
///
/// `y` grows southward: NORTH is `y - 1`, SOUTH is `y + 1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// The fixed entry/exit cell.
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    /// Orthogonal offsets in scan order: down, up, right, left.
    pub const NEIGHBOR_OFFSETS: [(i32, i32); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub const fn is_origin(self) -> bool {
        self.x == 0 && self.y == 0
    }

    /// Position one cell away in the given direction (may be out of bounds).
    pub fn step(self, direction: CardinalDirection) -> Self {
        let (dx, dy) = direction.delta();
        Self::new(self.x + dx, self.y + dy)
    }

    /// In-bounds orthogonal neighbors, in [`Self::NEIGHBOR_OFFSETS`] order.
    pub fn neighbors(self, dimensions: GridDimensions) -> ArrayVec<Position, 4> {
        Self::NEIGHBOR_OFFSETS
            .iter()
            .map(|&(dx, dy)| Position::new(self.x + dx, self.y + dy))
            .filter(|candidate| dimensions.contains(*candidate))
            .collect()
    }

    /// Direction of an orthogonally adjacent target, `None` if not adjacent.
    pub fn direction_to(self, target: Position) -> Option<CardinalDirection> {
        match (target.x - self.x, target.y - self.y) {
            (1, 0) => Some(CardinalDirection::East),
            (-1, 0) => Some(CardinalDirection::West),
            (0, 1) => Some(CardinalDirection::South),
            (0, -1) => Some(CardinalDirection::North),
            _ => None,
        }
    }

    /// Returns true if `target` lies strictly ahead on the cardinal ray that
    /// starts here and points in `facing`.
    pub fn sees_along(self, facing: CardinalDirection, target: Position) -> bool {
        match facing {
            CardinalDirection::North => target.x == self.x && target.y < self.y,
            CardinalDirection::South => target.x == self.x && target.y > self.y,
            CardinalDirection::East => target.y == self.y && target.x > self.x,
            CardinalDirection::West => target.y == self.y && target.x < self.x,
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Compass orientation of the explorer token.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum CardinalDirection {
    North,
    #[default]
    East,
    South,
    West,
}

impl CardinalDirection {
    pub const ALL: [CardinalDirection; 4] = [
        CardinalDirection::North,
        CardinalDirection::East,
        CardinalDirection::South,
        CardinalDirection::West,
    ];

    pub fn delta(self) -> (i32, i32) {
        match self {
            CardinalDirection::North => (0, -1),
            CardinalDirection::East => (1, 0),
            CardinalDirection::South => (0, 1),
            CardinalDirection::West => (-1, 0),
        }
    }

    /// Orientation after a 90° counter-clockwise rotation.
    pub fn turn_left(self) -> Self {
        match self {
            CardinalDirection::North => CardinalDirection::West,
            CardinalDirection::East => CardinalDirection::North,
            CardinalDirection::South => CardinalDirection::East,
            CardinalDirection::West => CardinalDirection::South,
        }
    }

    /// Orientation after a 90° clockwise rotation.
    pub fn turn_right(self) -> Self {
        match self {
            CardinalDirection::North => CardinalDirection::East,
            CardinalDirection::East => CardinalDirection::South,
            CardinalDirection::South => CardinalDirection::West,
            CardinalDirection::West => CardinalDirection::North,
        }
    }
}
