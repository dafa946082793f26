//! Navigator role: belief update and next-action decision.
//!
//! The navigator never sees ground truth. Each report is attributed to the
//! [`ShadowPose`], folded into the [`BeliefMap`], and answered with a single
//! recommended action, which is then applied optimistically to the pose.
mod policy;
mod pose;
mod route;

pub use pose::ShadowPose;

use crate::action::Action;
use crate::belief::{AbsorbSummary, BeliefError, BeliefMap};
use crate::config::{GameConfig, NavigatorConfig};
use crate::env::GridDimensions;
use crate::perception::PerceptionSet;
use crate::state::Position;

/// Which policy rule produced a recommendation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Rule {
    ClimbOut,
    GrabGold,
    ShootWumpus,
    ExploreNeighbor,
    ReturnToEntry,
    RouteToFrontier,
    TurnFallback,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Decision {
    pub action: Action,
    pub rule: Rule,
}

impl Decision {
    pub const fn new(action: Action, rule: Rule) -> Self {
        Self { action, rule }
    }
}

/// Everything the navigator learned and decided for one report.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Observation {
    pub decision: Decision,
    /// Position the report was attributed to.
    pub position: Position,
    /// Set when a BUMP undid the previous optimistic FORWARD.
    pub rolled_back: bool,
    pub summary: AbsorbSummary,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum NavigatorError {
    #[error(transparent)]
    Belief(#[from] BeliefError),
}

#[derive(Clone, Debug)]
pub struct Navigator {
    config: NavigatorConfig,
    belief: BeliefMap,
    pose: ShadowPose,
}

impl Navigator {
    /// Starts at the entry, which is known safe before the first report.
    pub fn new(dimensions: GridDimensions, config: NavigatorConfig) -> Self {
        let mut belief = BeliefMap::new(dimensions);
        belief.assume_safe(GameConfig::ENTRY);
        Self {
            config,
            belief,
            pose: ShadowPose::new(),
        }
    }

    pub fn belief(&self) -> &BeliefMap {
        &self.belief
    }

    pub fn pose(&self) -> &ShadowPose {
        &self.pose
    }

    /// Absorbs one perception report and recommends the next action.
    ///
    /// A BUMP rollback happens before absorption, so the report is
    /// attributed to the cell the explorer actually stands on.
    pub fn observe(&mut self, perceptions: PerceptionSet) -> Result<Observation, NavigatorError> {
        let rolled_back = self.pose.reconcile(perceptions).is_some();
        let position = self.pose.position;
        let summary = self.belief.absorb(perceptions, position)?;

        let decision = policy::decide(&self.belief, &self.pose, self.config);
        self.pose.apply(decision.action);

        Ok(Observation {
            decision,
            position,
            rolled_back,
            summary,
        })
    }
}
