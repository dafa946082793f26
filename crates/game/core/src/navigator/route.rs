use std::collections::VecDeque;

use crate::belief::{BeliefCell, BeliefMap};
use crate::state::Position;

/// First step of a shortest path from `start` to the nearest cell matching
/// `is_goal`, walking only through visited or safe cells.
///
/// Neighbors are expanded in scan order, so ties resolve the same way the
/// adjacent-cell rule does.
pub(super) fn first_step(
    belief: &BeliefMap,
    start: Position,
    is_goal: impl Fn(Position, &BeliefCell) -> bool,
) -> Option<Position> {
    let dimensions = belief.dimensions();
    let start_index = dimensions.index_of(start)?;
    let mut parent: Vec<Option<usize>> = vec![None; dimensions.cell_count()];
    let mut seen = vec![false; dimensions.cell_count()];
    seen[start_index] = true;

    let mut queue = VecDeque::from([start]);
    while let Some(current) = queue.pop_front() {
        let current_index = dimensions.index_of(current)?;
        for next in current.neighbors(dimensions) {
            let Some(next_index) = dimensions.index_of(next) else {
                continue;
            };
            let Some(cell) = belief.cell(next) else {
                continue;
            };
            if seen[next_index] || !cell.is_traversable() {
                continue;
            }
            seen[next_index] = true;
            parent[next_index] = Some(current_index);

            if is_goal(next, cell) {
                let mut step = next_index;
                while let Some(previous) = parent[step] {
                    if previous == start_index {
                        return Some(dimensions.position_of(step));
                    }
                    step = previous;
                }
                return None;
            }
            queue.push_back(next);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::GridDimensions;
    use crate::perception::PerceptionSet;

    #[test]
    fn finds_first_step_over_known_cells() {
        let mut belief = BeliefMap::new(GridDimensions::new(4));
        belief.absorb(PerceptionSet::SAFE, Position::ORIGIN).unwrap();
        belief.absorb(PerceptionSet::BREEZE, Position::new(1, 0)).unwrap();
        belief.absorb(PerceptionSet::BREEZE, Position::new(0, 1)).unwrap();

        // no frontier left; the entry is reachable from (1,0)
        let home = first_step(&belief, Position::new(1, 0), |p, _| p == Position::ORIGIN);
        assert_eq!(home, Some(Position::ORIGIN));
        assert_eq!(
            first_step(&belief, Position::new(1, 0), |_, c| c.is_frontier()),
            None
        );
    }

    #[test]
    fn path_longer_than_one_hop() {
        let mut belief = BeliefMap::new(GridDimensions::new(4));
        belief.absorb(PerceptionSet::SAFE, Position::ORIGIN).unwrap();
        belief.absorb(PerceptionSet::SAFE, Position::new(1, 0)).unwrap();
        belief.absorb(PerceptionSet::BREEZE, Position::new(2, 0)).unwrap();

        // from (2,0) back home goes through (1,0)
        let step = first_step(&belief, Position::new(2, 0), |p, _| p == Position::ORIGIN);
        assert_eq!(step, Some(Position::new(1, 0)));

        // nearest frontier from (2,0): (1,1) via (1,0)
        let step = first_step(&belief, Position::new(2, 0), |_, c| c.is_frontier());
        assert_eq!(step, Some(Position::new(1, 0)));
    }
}
