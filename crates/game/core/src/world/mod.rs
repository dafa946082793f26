//! Ground-truth world model.
//!
//! [`WorldModel`] owns the grid of [`Cell`]s and the Wumpus liveness flag.
//! Hazard placement is fixed once the world exists; only the gold (when
//! grabbed) and the Wumpus liveness change afterwards. Stench and breeze are
//! recomputed from hazards, never written by callers.
mod cell;

pub use cell::Cell;

use crate::config::GameConfig;
use crate::env::{GridDimensions, PcgRng, RngOracle, compute_seed};
use crate::state::Position;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum WorldError {
    #[error("grid size must be at least 1")]
    EmptyGrid,

    #[error("a {size}x{size} grid cannot hold the Wumpus, the gold and {pits} pits")]
    GridTooSmall { size: u32, pits: u32 },

    #[error("{what} at {position} is outside the {size}x{size} grid")]
    OutOfBounds {
        what: &'static str,
        position: Position,
        size: u32,
    },

    #[error("{what} may not be placed on the entry cell")]
    OnEntry { what: &'static str },

    #[error("{position} holds more than one object")]
    Overlap { position: Position },
}

/// Explicit hazard and gold placement.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldLayout {
    pub wumpus: Position,
    pub gold: Position,
    pub pits: Vec<Position>,
}

impl WorldLayout {
    pub fn new(wumpus: Position, gold: Position, pits: impl IntoIterator<Item = Position>) -> Self {
        Self {
            wumpus,
            gold,
            pits: pits.into_iter().collect(),
        }
    }

    fn placements(&self) -> impl Iterator<Item = (&'static str, Position)> + '_ {
        [("wumpus", self.wumpus), ("gold", self.gold)]
            .into_iter()
            .chain(self.pits.iter().map(|pit| ("pit", *pit)))
    }
}

/// The authoritative grid.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldModel {
    dimensions: GridDimensions,
    cells: Vec<Cell>,
    wumpus_alive: bool,
}

impl WorldModel {
    /// Generates a world from `config` using the default PCG generator.
    pub fn generate(config: &GameConfig) -> Result<Self, WorldError> {
        Self::generate_with(config, &PcgRng)
    }

    /// Generates a world, placing one Wumpus, one gold and `2 + random(0,1)`
    /// pits on distinct cells other than the entry, drawn without replacement
    /// from a shuffled cell permutation.
    pub fn generate_with<R: RngOracle>(config: &GameConfig, rng: &R) -> Result<Self, WorldError> {
        let dimensions = GridDimensions::new(config.grid_size);
        if dimensions.size == 0 {
            return Err(WorldError::EmptyGrid);
        }

        let pit_count = rng.range(
            compute_seed(config.seed, 0, 1, 0),
            GameConfig::MIN_PITS,
            GameConfig::MIN_PITS + GameConfig::MAX_EXTRA_PITS,
        );
        let required = 2 + pit_count as usize;
        if dimensions.cell_count() - 1 < required {
            return Err(WorldError::GridTooSmall {
                size: dimensions.size,
                pits: pit_count,
            });
        }

        let mut available: Vec<Position> = dimensions
            .positions()
            .filter(|position| !position.is_origin())
            .collect();
        rng.shuffle(config.seed, &mut available);

        let mut draws = available.into_iter();
        // Enough cells were checked above.
        let mut draw = || {
            draws.next().ok_or(WorldError::GridTooSmall {
                size: dimensions.size,
                pits: pit_count,
            })
        };
        let wumpus = draw()?;
        let gold = draw()?;
        let pits = (0..pit_count).map(|_| draw()).collect::<Result<Vec<_>, _>>()?;

        Self::from_layout(config.grid_size, &WorldLayout::new(wumpus, gold, pits))
    }

    /// Builds a world from explicit positions.
    pub fn from_layout(size: u32, layout: &WorldLayout) -> Result<Self, WorldError> {
        let dimensions = GridDimensions::new(size);
        if size == 0 {
            return Err(WorldError::EmptyGrid);
        }

        let mut cells = vec![Cell::default(); dimensions.cell_count()];
        let mut occupied = vec![false; dimensions.cell_count()];

        for (what, position) in layout.placements() {
            let index = dimensions
                .index_of(position)
                .ok_or(WorldError::OutOfBounds {
                    what,
                    position,
                    size,
                })?;
            if position.is_origin() {
                return Err(WorldError::OnEntry { what });
            }
            if std::mem::replace(&mut occupied[index], true) {
                return Err(WorldError::Overlap { position });
            }
        }

        let mut mark = |position: Position, apply: fn(&mut Cell)| {
            if let Some(index) = dimensions.index_of(position) {
                apply(&mut cells[index]);
            }
        };
        mark(layout.wumpus, |cell| cell.has_wumpus = true);
        mark(layout.gold, |cell| cell.has_gold = true);
        for pit in &layout.pits {
            mark(*pit, |cell| cell.has_pit = true);
        }

        let mut world = Self {
            dimensions,
            cells,
            wumpus_alive: true,
        };
        world.recompute_derived_perceptions();
        Ok(world)
    }

    pub fn dimensions(&self) -> GridDimensions {
        self.dimensions
    }

    pub fn size(&self) -> u32 {
        self.dimensions.size
    }

    pub fn contains(&self, position: Position) -> bool {
        self.dimensions.contains(position)
    }

    /// Returns the cell at `position`, or `None` outside the grid.
    pub fn cell_at(&self, position: Position) -> Option<&Cell> {
        self.dimensions
            .index_of(position)
            .and_then(|index| self.cells.get(index))
    }

    pub(crate) fn cell_at_mut(&mut self, position: Position) -> Option<&mut Cell> {
        self.dimensions
            .index_of(position)
            .and_then(|index| self.cells.get_mut(index))
    }

    /// Clears every stench/breeze flag, then sets them around each pit and
    /// around the Wumpus if it is alive. Idempotent.
    pub fn recompute_derived_perceptions(&mut self) {
        for cell in &mut self.cells {
            cell.clear_derived();
        }

        let dimensions = self.dimensions;
        for index in 0..self.cells.len() {
            let cell = self.cells[index];
            let stench = cell.has_wumpus && self.wumpus_alive;
            if !stench && !cell.has_pit {
                continue;
            }
            for neighbor in dimensions.position_of(index).neighbors(dimensions) {
                if let Some(target) = self.cell_at_mut(neighbor) {
                    target.has_stench |= stench;
                    target.has_breeze |= cell.has_pit;
                }
            }
        }
    }

    pub fn is_wumpus_alive(&self) -> bool {
        self.wumpus_alive
    }

    /// Updates Wumpus liveness and recomputes derived perceptions.
    ///
    /// Death is irreversible: once dead, `set_wumpus_alive(true)` has no effect.
    pub fn set_wumpus_alive(&mut self, alive: bool) {
        self.wumpus_alive &= alive;
        self.recompute_derived_perceptions();
    }

    pub fn wumpus_position(&self) -> Option<Position> {
        self.find(|cell| cell.has_wumpus).next()
    }

    pub fn gold_position(&self) -> Option<Position> {
        self.find(|cell| cell.has_gold).next()
    }

    pub fn pit_positions(&self) -> Vec<Position> {
        self.find(|cell| cell.has_pit).collect()
    }

    fn find<'a>(
        &'a self,
        predicate: impl Fn(&Cell) -> bool + 'a,
    ) -> impl Iterator<Item = Position> + 'a {
        self.cells
            .iter()
            .enumerate()
            .filter(move |(_, cell)| predicate(cell))
            .map(|(index, _)| self.dimensions.position_of(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario_layout() -> WorldLayout {
        WorldLayout::new(Position::new(2, 0), Position::new(3, 3), [Position::new(1, 1)])
    }

    /// Checks stench/breeze against the hazards currently in the grid.
    fn assert_derived_flags_consistent(world: &WorldModel) {
        let dims = world.dimensions();
        for position in dims.positions() {
            let cell = world.cell_at(position).unwrap();
            let neighbors = position.neighbors(dims);
            let wumpus_adjacent = world.is_wumpus_alive()
                && neighbors
                    .iter()
                    .any(|n| world.cell_at(*n).unwrap().has_wumpus);
            let pit_adjacent = neighbors.iter().any(|n| world.cell_at(*n).unwrap().has_pit);
            assert_eq!(cell.has_stench, wumpus_adjacent, "stench at {position}");
            assert_eq!(cell.has_breeze, pit_adjacent, "breeze at {position}");
        }
    }

    #[test]
    fn generated_worlds_hold_required_objects() {
        for seed in 0..64 {
            let world = WorldModel::generate(&GameConfig::with_seed(seed)).unwrap();
            let dims = world.dimensions();
            let count = |f: fn(&Cell) -> bool| {
                dims.positions()
                    .filter(|p| f(world.cell_at(*p).unwrap()))
                    .count()
            };

            assert_eq!(count(|c| c.has_wumpus), 1, "seed {seed}");
            assert_eq!(count(|c| c.has_gold), 1, "seed {seed}");
            assert!((2..=3).contains(&count(|c| c.has_pit)), "seed {seed}");

            let entry = world.cell_at(Position::ORIGIN).unwrap();
            assert!(!entry.has_pit && !entry.has_gold && !entry.has_wumpus);
            assert_derived_flags_consistent(&world);
        }
    }

    #[test]
    fn same_seed_reproduces_world() {
        let config = GameConfig::with_seed(0xfeed);
        assert_eq!(
            WorldModel::generate(&config).unwrap(),
            WorldModel::generate(&config).unwrap()
        );
    }

    #[test]
    fn tiny_grid_is_rejected() {
        let config = GameConfig {
            grid_size: 2,
            ..GameConfig::with_seed(1)
        };
        assert!(matches!(
            WorldModel::generate(&config),
            Err(WorldError::GridTooSmall { size: 2, .. })
        ));
        assert_eq!(
            WorldModel::generate(&GameConfig {
                grid_size: 0,
                ..GameConfig::default()
            }),
            Err(WorldError::EmptyGrid)
        );
    }

    #[test]
    fn layout_validation() {
        let on_entry = WorldLayout::new(Position::ORIGIN, Position::new(1, 0), std::iter::empty());
        assert_eq!(
            WorldModel::from_layout(4, &on_entry),
            Err(WorldError::OnEntry { what: "wumpus" })
        );

        let overlap = WorldLayout::new(Position::new(2, 2), Position::new(2, 2), std::iter::empty());
        assert!(matches!(
            WorldModel::from_layout(4, &overlap),
            Err(WorldError::Overlap { .. })
        ));

        let outside = WorldLayout::new(
            Position::new(2, 2),
            Position::new(1, 1),
            [Position::new(4, 0)],
        );
        assert!(matches!(
            WorldModel::from_layout(4, &outside),
            Err(WorldError::OutOfBounds { what: "pit", .. })
        ));
    }

    #[test]
    fn recompute_is_idempotent() {
        let mut world = WorldModel::from_layout(4, &scenario_layout()).unwrap();
        let before = world.clone();
        world.recompute_derived_perceptions();
        world.recompute_derived_perceptions();
        assert_eq!(world, before);
        assert_derived_flags_consistent(&world);
    }

    #[test]
    fn killing_wumpus_clears_stench_for_good() {
        let mut world = WorldModel::from_layout(4, &scenario_layout()).unwrap();
        assert!(world.cell_at(Position::new(1, 0)).unwrap().has_stench);
        assert!(world.cell_at(Position::new(3, 0)).unwrap().has_stench);

        world.set_wumpus_alive(false);
        assert!(!world.is_wumpus_alive());
        assert!(
            world
                .dimensions()
                .positions()
                .all(|p| !world.cell_at(p).unwrap().has_stench)
        );
        // breeze around the pit is unaffected
        assert!(world.cell_at(Position::new(1, 0)).unwrap().has_breeze);

        world.set_wumpus_alive(true);
        assert!(!world.is_wumpus_alive());
        assert_derived_flags_consistent(&world);
    }

    #[test]
    fn cell_lookup_outside_grid_is_none() {
        let world = WorldModel::from_layout(4, &scenario_layout()).unwrap();
        assert!(world.cell_at(Position::new(-1, 0)).is_none());
        assert!(world.cell_at(Position::new(0, 4)).is_none());
    }

    #[test]
    fn object_lookups_scan_the_grid() {
        let layout = WorldLayout::new(
            Position::new(3, 3),
            Position::new(0, 1),
            [Position::new(2, 2), Position::new(1, 0)],
        );
        let world = WorldModel::from_layout(4, &layout).unwrap();

        assert_eq!(world.wumpus_position(), Some(Position::new(3, 3)));
        assert_eq!(world.gold_position(), Some(Position::new(0, 1)));
        // row-major order
        assert_eq!(world.pit_positions(), vec![Position::new(1, 0), Position::new(2, 2)]);
    }
}
