use crate::state::Position;

/// Square grid bounds. Valid coordinates satisfy `0 <= x, y < size`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridDimensions {
    pub size: u32,
}

impl GridDimensions {
    pub const fn new(size: u32) -> Self {
        Self { size }
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && position.x < self.size as i32
            && position.y < self.size as i32
    }

    pub const fn cell_count(&self) -> usize {
        (self.size as usize) * (self.size as usize)
    }

    /// Row-major index of an in-bounds position.
    pub fn index_of(&self, position: Position) -> Option<usize> {
        self.contains(position)
            .then(|| position.y as usize * self.size as usize + position.x as usize)
    }

    /// Inverse of [`Self::index_of`].
    pub fn position_of(&self, index: usize) -> Position {
        let size = self.size as usize;
        Position::new((index % size) as i32, (index / size) as i32)
    }

    /// All positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.cell_count()).map(|index| self.position_of(index))
    }
}
