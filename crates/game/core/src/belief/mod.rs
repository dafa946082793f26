//! Navigator belief map and its inference rules.
//!
//! The map only ever learns from perceptions reported at the navigator's
//! believed position. Safety is monotonic: a cell promoted to safe is never
//! suspected again. Suspicion is one-hop: stench or breeze at a cell raises
//! suspicion on its unvisited, not-yet-safe neighbors. After each update a
//! unique remaining suspect is promoted to confirmed.
mod cell;

pub use cell::BeliefCell;

use crate::env::GridDimensions;
use crate::perception::PerceptionSet;
use crate::state::Position;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BeliefError {
    #[error("{position} is outside the {size}x{size} belief map")]
    OutOfBounds { position: Position, size: u32 },
}

/// Counts reported by [`BeliefMap::absorb`] for logging.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AbsorbSummary {
    pub newly_safe: usize,
    pub new_wumpus_suspects: usize,
    pub new_pit_suspects: usize,
    pub wumpus_confirmed: Option<Position>,
    pub pit_confirmed: Option<Position>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BeliefMap {
    dimensions: GridDimensions,
    cells: Vec<BeliefCell>,
    wumpus_alive: bool,
}

impl BeliefMap {
    pub fn new(dimensions: GridDimensions) -> Self {
        Self {
            dimensions,
            cells: vec![BeliefCell::default(); dimensions.cell_count()],
            wumpus_alive: true,
        }
    }

    pub fn dimensions(&self) -> GridDimensions {
        self.dimensions
    }

    pub fn cell(&self, position: Position) -> Option<&BeliefCell> {
        self.dimensions
            .index_of(position)
            .and_then(|index| self.cells.get(index))
    }

    fn cell_mut(&mut self, position: Position) -> Option<&mut BeliefCell> {
        self.dimensions
            .index_of(position)
            .and_then(|index| self.cells.get_mut(index))
    }

    /// Believed Wumpus liveness. Flips to false on SCREAM and never back.
    pub fn is_wumpus_alive(&self) -> bool {
        self.wumpus_alive
    }

    /// All cells with their positions, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &BeliefCell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(index, cell)| (self.dimensions.position_of(index), cell))
    }

    pub fn confirmed_wumpus(&self) -> Option<Position> {
        self.iter()
            .find(|(_, cell)| cell.wumpus_confirmed)
            .map(|(position, _)| position)
    }

    pub fn confirmed_pits(&self) -> Vec<Position> {
        self.iter()
            .filter(|(_, cell)| cell.pit_confirmed)
            .map(|(position, _)| position)
            .collect()
    }

    /// Marks a cell as visited and safe before any report about it, as for
    /// the entry the explorer starts on. Out-of-grid positions are ignored.
    pub fn assume_safe(&mut self, position: Position) {
        if let Some(cell) = self.cell_mut(position) {
            cell.visited = true;
            cell.promote_safe();
        }
    }

    /// Folds the perceptions observed at `position` into the map.
    pub fn absorb(
        &mut self,
        perceptions: PerceptionSet,
        position: Position,
    ) -> Result<AbsorbSummary, BeliefError> {
        let size = self.dimensions.size;
        let here = self
            .cell_mut(position)
            .ok_or(BeliefError::OutOfBounds { position, size })?;
        here.visited = true;
        here.perceived = perceptions & PerceptionSet::CELL;
        if perceptions.contains(PerceptionSet::GLITTER) {
            here.gold_confirmed = true;
        }

        if perceptions.contains(PerceptionSet::SCREAM) {
            self.wumpus_alive = false;
            for cell in &mut self.cells {
                cell.wumpus_suspect = false;
                cell.wumpus_confirmed = false;
            }
        }

        let mut summary = AbsorbSummary::default();
        let neighbors = position.neighbors(self.dimensions);
        if perceptions.is_hazard_free() {
            for target in std::iter::once(position).chain(neighbors) {
                let Some(cell) = self.cell_mut(target) else {
                    continue;
                };
                let eligible = target == position || !cell.visited;
                if eligible && !cell.safe {
                    cell.promote_safe();
                    summary.newly_safe += 1;
                }
            }
        } else {
            let stench = perceptions.contains(PerceptionSet::STENCH) && self.wumpus_alive;
            let breeze = perceptions.contains(PerceptionSet::BREEZE);
            for target in neighbors {
                let Some(cell) = self.cell_mut(target) else {
                    continue;
                };
                if cell.visited || cell.safe {
                    continue;
                }
                if stench && !cell.wumpus_suspect {
                    cell.wumpus_suspect = true;
                    summary.new_wumpus_suspects += 1;
                }
                if breeze && !cell.pit_suspect {
                    cell.pit_suspect = true;
                    summary.new_pit_suspects += 1;
                }
            }
        }

        let (wumpus, pit) = self.infer_true_locations();
        summary.wumpus_confirmed = wumpus;
        summary.pit_confirmed = pit;
        Ok(summary)
    }

    /// Unique-candidate confirmation.
    ///
    /// If exactly one non-safe cell is a Wumpus suspect (and the Wumpus is
    /// believed alive), it becomes confirmed; likewise for pits. Returns the
    /// cells newly confirmed by this call.
    pub fn infer_true_locations(&mut self) -> (Option<Position>, Option<Position>) {
        let wumpus = if self.wumpus_alive {
            self.confirm_unique(|cell| cell.wumpus_suspect, |cell| &mut cell.wumpus_confirmed)
        } else {
            None
        };
        let pit = self.confirm_unique(|cell| cell.pit_suspect, |cell| &mut cell.pit_confirmed);
        (wumpus, pit)
    }

    fn confirm_unique(
        &mut self,
        suspect: fn(&BeliefCell) -> bool,
        confirmed: fn(&mut BeliefCell) -> &mut bool,
    ) -> Option<Position> {
        let mut candidates = self
            .cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| suspect(cell) && !cell.safe)
            .map(|(index, _)| index);
        let index = candidates.next()?;
        if candidates.next().is_some() {
            return None;
        }

        let flag = confirmed(&mut self.cells[index]);
        if std::mem::replace(flag, true) {
            return None;
        }
        Some(self.dimensions.position_of(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map() -> BeliefMap {
        BeliefMap::new(GridDimensions::new(4))
    }

    fn cell(map: &BeliefMap, x: i32, y: i32) -> BeliefCell {
        *map.cell(Position::new(x, y)).unwrap()
    }

    #[test]
    fn safe_perception_propagates_one_hop() {
        let mut map = map();
        let summary = map.absorb(PerceptionSet::SAFE, Position::ORIGIN).unwrap();

        assert_eq!(summary.newly_safe, 3);
        assert!(cell(&map, 0, 0).visited && cell(&map, 0, 0).safe);
        assert!(cell(&map, 1, 0).safe && !cell(&map, 1, 0).visited);
        assert!(cell(&map, 0, 1).safe);
        assert!(!cell(&map, 1, 1).safe);
    }

    #[test]
    fn stench_marks_unvisited_neighbors_as_suspects() {
        let mut map = map();
        map.absorb(PerceptionSet::SAFE, Position::ORIGIN).unwrap();
        let summary = map
            .absorb(PerceptionSet::STENCH | PerceptionSet::BREEZE, Position::new(1, 0))
            .unwrap();

        assert_eq!(summary.new_wumpus_suspects, 2);
        assert!(cell(&map, 2, 0).wumpus_suspect && cell(&map, 2, 0).pit_suspect);
        assert!(cell(&map, 1, 1).wumpus_suspect && cell(&map, 1, 1).pit_suspect);
        // the entry was visited and is safe
        assert!(!cell(&map, 0, 0).wumpus_suspect);
        assert_eq!(map.confirmed_wumpus(), None);
    }

    #[test]
    fn safe_cells_are_never_downgraded() {
        let mut map = map();
        map.absorb(PerceptionSet::SAFE, Position::new(2, 1)).unwrap();
        assert!(cell(&map, 1, 1).safe && cell(&map, 2, 0).safe);

        map.absorb(PerceptionSet::STENCH | PerceptionSet::BREEZE, Position::new(1, 0))
            .unwrap();
        for (x, y) in [(1, 1), (2, 0)] {
            let c = cell(&map, x, y);
            assert!(c.safe && !c.wumpus_suspect && !c.pit_suspect, "({x}, {y})");
        }
        // the entry is the only unexplained neighbor left
        assert!(cell(&map, 0, 0).wumpus_suspect && cell(&map, 0, 0).pit_suspect);
        assert_eq!(map.confirmed_wumpus(), Some(Position::ORIGIN));
    }

    #[test]
    fn unique_candidate_is_confirmed_two_are_not() {
        let mut map = map();
        map.absorb(PerceptionSet::STENCH, Position::new(1, 0)).unwrap();
        assert_eq!(map.confirmed_wumpus(), None);

        // safety around (1,2) clears (1,1), leaving (0,0) and (2,0)
        map.absorb(PerceptionSet::SAFE, Position::new(1, 2)).unwrap();
        assert_eq!(map.confirmed_wumpus(), None);

        let summary = map.absorb(PerceptionSet::SAFE, Position::new(0, 1)).unwrap();
        assert_eq!(summary.wumpus_confirmed, Some(Position::new(2, 0)));
        assert_eq!(map.confirmed_wumpus(), Some(Position::new(2, 0)));
    }

    #[test]
    fn pits_are_confirmed_symmetrically() {
        let mut map = map();
        map.absorb(PerceptionSet::SAFE, Position::ORIGIN).unwrap();
        map.absorb(PerceptionSet::SAFE, Position::new(2, 1)).unwrap();
        let summary = map.absorb(PerceptionSet::BREEZE, Position::new(1, 0)).unwrap();

        assert_eq!(summary.pit_confirmed, None);
        // (2,0) and (1,1) are safe through (2,1); no suspects remain
        assert!(map.confirmed_pits().is_empty());

        let summary = map.absorb(PerceptionSet::BREEZE, Position::new(0, 1)).unwrap();
        assert_eq!(summary.pit_confirmed, Some(Position::new(0, 2)));
    }

    #[test]
    fn scream_clears_wumpus_knowledge_for_good() {
        let mut map = map();
        map.absorb(PerceptionSet::STENCH, Position::new(3, 0)).unwrap();
        map.absorb(PerceptionSet::SAFE, Position::new(3, 2)).unwrap();
        assert_eq!(map.confirmed_wumpus(), Some(Position::new(2, 0)));

        map.absorb(PerceptionSet::SCREAM, Position::new(3, 0)).unwrap();
        assert!(!map.is_wumpus_alive());
        assert_eq!(map.confirmed_wumpus(), None);
        assert!(map.iter().all(|(_, c)| !c.wumpus_suspect));

        // stale stench after the scream raises no suspicion
        map.absorb(PerceptionSet::STENCH, Position::new(1, 1)).unwrap();
        assert!(map.iter().all(|(_, c)| !c.wumpus_suspect));
    }

    #[test]
    fn glitter_is_recorded_until_it_disappears() {
        let mut map = map();
        map.absorb(PerceptionSet::GLITTER, Position::new(2, 2)).unwrap();
        assert!(cell(&map, 2, 2).gold_confirmed);
        assert!(cell(&map, 2, 2).perceived.contains(PerceptionSet::GLITTER));

        map.absorb(PerceptionSet::SAFE, Position::new(2, 2)).unwrap();
        assert!(!cell(&map, 2, 2).perceived.contains(PerceptionSet::GLITTER));
    }

    #[test]
    fn absorbing_outside_the_grid_fails() {
        let mut map = map();
        assert_eq!(
            map.absorb(PerceptionSet::SAFE, Position::new(4, 0)),
            Err(BeliefError::OutOfBounds {
                position: Position::new(4, 0),
                size: 4
            })
        );
    }
}
