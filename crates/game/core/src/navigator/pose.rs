use crate::action::Action;
use crate::config::GameConfig;
use crate::perception::PerceptionSet;
use crate::state::{CardinalDirection, Position};

/// Navigator's belief about the explorer's pose and inventory.
///
/// Updated optimistically when an action is recommended and compensated when
/// a later report contradicts it: a BUMP after FORWARD restores the position
/// the move started from. Orientation is never rolled back.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShadowPose {
    pub position: Position,
    pub direction: CardinalDirection,
    pub has_arrow: bool,
    pub has_gold: bool,
    /// Position before the last optimistic FORWARD, until the next report.
    pub(super) pending_move: Option<Position>,
}

impl ShadowPose {
    pub fn new() -> Self {
        Self {
            position: GameConfig::ENTRY,
            direction: GameConfig::START_DIRECTION,
            has_arrow: true,
            has_gold: false,
            pending_move: None,
        }
    }

    /// Applies the recommended action as if it succeeded.
    pub fn apply(&mut self, action: Action) {
        self.pending_move = None;
        match action {
            Action::Forward => {
                self.pending_move = Some(self.position);
                self.position = self.position.step(self.direction);
            }
            Action::TurnLeft => self.direction = self.direction.turn_left(),
            Action::TurnRight => self.direction = self.direction.turn_right(),
            Action::Shoot => self.has_arrow = false,
            Action::Grab => self.has_gold = true,
            Action::Climb => {}
        }
    }

    /// Reconciles with the next report. Returns the position restored by a
    /// BUMP rollback, if any.
    pub fn reconcile(&mut self, perceptions: PerceptionSet) -> Option<Position> {
        let origin = self.pending_move.take()?;
        if !perceptions.contains(PerceptionSet::BUMP) {
            return None;
        }
        self.position = origin;
        Some(origin)
    }
}

impl Default for ShadowPose {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bump_rolls_back_position_but_not_orientation() {
        let mut pose = ShadowPose::new();
        pose.apply(Action::TurnLeft);
        pose.apply(Action::Forward);
        assert_eq!(pose.position, Position::new(0, -1));

        assert_eq!(pose.reconcile(PerceptionSet::BUMP), Some(Position::ORIGIN));
        assert_eq!(pose.position, Position::ORIGIN);
        assert_eq!(pose.direction, CardinalDirection::North);
    }

    #[test]
    fn bump_without_pending_move_is_ignored() {
        let mut pose = ShadowPose::new();
        pose.apply(Action::Forward);
        assert_eq!(pose.reconcile(PerceptionSet::SAFE), None);
        assert_eq!(pose.position, Position::new(1, 0));

        pose.apply(Action::TurnRight);
        assert_eq!(pose.reconcile(PerceptionSet::BUMP), None);
        assert_eq!(pose.position, Position::new(1, 0));
    }

    #[test]
    fn inventory_follows_recommendations() {
        let mut pose = ShadowPose::new();
        pose.apply(Action::Shoot);
        pose.apply(Action::Grab);
        assert!(!pose.has_arrow);
        assert!(pose.has_gold);
    }
}
