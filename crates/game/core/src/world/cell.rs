use crate::perception::PerceptionSet;

/// Ground-truth contents of one grid cell.
///
/// Stench and breeze are derived flags: they are rewritten by
/// [`super::WorldModel::recompute_derived_perceptions`] and never set directly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub has_pit: bool,
    pub has_gold: bool,
    pub has_wumpus: bool,
    pub has_stench: bool,
    pub has_breeze: bool,
    pub explored: bool,
}

impl Cell {
    /// Perceptions that stem from the cell itself (STENCH, BREEZE, GLITTER).
    pub fn perceptions(&self) -> PerceptionSet {
        let mut set = PerceptionSet::empty();
        set.set(PerceptionSet::STENCH, self.has_stench);
        set.set(PerceptionSet::BREEZE, self.has_breeze);
        set.set(PerceptionSet::GLITTER, self.has_gold);
        set
    }

    pub(crate) fn clear_derived(&mut self) {
        self.has_stench = false;
        self.has_breeze = false;
    }
}
