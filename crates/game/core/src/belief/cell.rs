use crate::perception::PerceptionSet;

/// Navigator's knowledge about one cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BeliefCell {
    pub visited: bool,
    /// Monotonic. Once set, both suspicion flags stay false.
    pub safe: bool,
    pub wumpus_suspect: bool,
    pub pit_suspect: bool,
    pub wumpus_confirmed: bool,
    pub pit_confirmed: bool,
    pub gold_confirmed: bool,
    /// STENCH/BREEZE/GLITTER as perceived on the latest visit.
    pub perceived: PerceptionSet,
}

impl BeliefCell {
    pub(super) fn promote_safe(&mut self) {
        self.safe = true;
        self.wumpus_suspect = false;
        self.pit_suspect = false;
        self.wumpus_confirmed = false;
        self.pit_confirmed = false;
    }

    /// Cells the navigator may walk through.
    pub fn is_traversable(&self) -> bool {
        self.visited || self.safe
    }

    /// Safe cells not yet stepped on.
    pub fn is_frontier(&self) -> bool {
        self.safe && !self.visited
    }
}
