use crate::action::Action;
use crate::belief::BeliefMap;
use crate::config::{GameConfig, NavigatorConfig};
use crate::perception::PerceptionSet;
use crate::state::{CardinalDirection, Position};

use super::{Decision, Rule, ShadowPose, route};

/// Picks the next action. Rules are tried in priority order; the first
/// match wins.
pub(super) fn decide(belief: &BeliefMap, pose: &ShadowPose, config: NavigatorConfig) -> Decision {
    let here = pose.position;

    if pose.has_gold && here == GameConfig::ENTRY {
        return Decision::new(Action::Climb, Rule::ClimbOut);
    }

    let glitter = belief
        .cell(here)
        .is_some_and(|cell| cell.perceived.contains(PerceptionSet::GLITTER));
    if glitter {
        return Decision::new(Action::Grab, Rule::GrabGold);
    }

    if pose.has_arrow
        && belief.is_wumpus_alive()
        && let Some(target) = belief.confirmed_wumpus()
        && here.sees_along(pose.direction, target)
    {
        return Decision::new(Action::Shoot, Rule::ShootWumpus);
    }

    let neighbor = here
        .neighbors(belief.dimensions())
        .into_iter()
        .find(|next| belief.cell(*next).is_some_and(|cell| cell.is_frontier()));
    if let Some(decision) = neighbor.and_then(|next| step_toward(pose, next, Rule::ExploreNeighbor)) {
        return decision;
    }

    if config.route_planning {
        let planned = if pose.has_gold {
            route::first_step(belief, here, |position, _| position == GameConfig::ENTRY)
                .and_then(|next| step_toward(pose, next, Rule::ReturnToEntry))
        } else {
            route::first_step(belief, here, |_, cell| cell.is_frontier())
                .and_then(|next| step_toward(pose, next, Rule::RouteToFrontier))
        };
        if let Some(decision) = planned {
            return decision;
        }
    }

    Decision::new(Action::TurnRight, Rule::TurnFallback)
}

/// FORWARD when already facing the adjacent `next`, otherwise the single turn
/// toward it.
fn step_toward(pose: &ShadowPose, next: Position, rule: Rule) -> Option<Decision> {
    let target = pose.position.direction_to(next)?;
    Some(Decision::new(steer(pose.direction, target), rule))
}

/// TURN_RIGHT if the target is a right turn away, TURN_LEFT otherwise
/// (including a half turn).
pub(super) fn steer(facing: CardinalDirection, target: CardinalDirection) -> Action {
    if facing == target {
        Action::Forward
    } else if facing.turn_right() == target {
        Action::TurnRight
    } else {
        Action::TurnLeft
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::GridDimensions;

    fn belief() -> BeliefMap {
        BeliefMap::new(GridDimensions::new(4))
    }

    #[test]
    fn steer_prefers_right_only_for_a_right_turn() {
        use CardinalDirection::*;
        assert_eq!(steer(East, East), Action::Forward);
        assert_eq!(steer(East, South), Action::TurnRight);
        assert_eq!(steer(East, North), Action::TurnLeft);
        assert_eq!(steer(East, West), Action::TurnLeft);
    }

    #[test]
    fn climbs_with_gold_at_entry() {
        let mut belief = belief();
        belief.absorb(PerceptionSet::SAFE, Position::ORIGIN).unwrap();
        let pose = ShadowPose {
            has_gold: true,
            ..ShadowPose::new()
        };
        let decision = decide(&belief, &pose, NavigatorConfig::default());
        assert_eq!(decision, Decision::new(Action::Climb, Rule::ClimbOut));
    }

    #[test]
    fn grabs_on_glitter() {
        let mut belief = belief();
        belief.absorb(PerceptionSet::GLITTER, Position::ORIGIN).unwrap();
        let decision = decide(&belief, &ShadowPose::new(), NavigatorConfig::default());
        assert_eq!(decision.action, Action::Grab);
    }

    #[test]
    fn shoots_only_along_the_facing_ray() {
        let mut belief = belief();
        belief.absorb(PerceptionSet::STENCH, Position::ORIGIN).unwrap();
        belief.absorb(PerceptionSet::SAFE, Position::new(2, 0)).unwrap();
        assert_eq!(belief.confirmed_wumpus(), Some(Position::new(0, 1)));

        let mut pose = ShadowPose::new();
        let decision = decide(&belief, &pose, NavigatorConfig::default());
        assert_ne!(decision.action, Action::Shoot);

        pose.direction = CardinalDirection::South;
        let decision = decide(&belief, &pose, NavigatorConfig::default());
        assert_eq!(decision, Decision::new(Action::Shoot, Rule::ShootWumpus));

        pose.has_arrow = false;
        let decision = decide(&belief, &pose, NavigatorConfig::default());
        assert_ne!(decision.action, Action::Shoot);
    }

    #[test]
    fn explores_first_safe_neighbor_in_scan_order() {
        let mut belief = belief();
        belief.absorb(PerceptionSet::SAFE, Position::ORIGIN).unwrap();

        // (0,1) comes before (1,0): turn right from EAST to SOUTH
        let decision = decide(&belief, &ShadowPose::new(), NavigatorConfig::default());
        assert_eq!(decision, Decision::new(Action::TurnRight, Rule::ExploreNeighbor));

        let pose = ShadowPose {
            direction: CardinalDirection::South,
            ..ShadowPose::new()
        };
        let decision = decide(&belief, &pose, NavigatorConfig::default());
        assert_eq!(decision.action, Action::Forward);
    }

    #[test]
    fn falls_back_to_turning_right() {
        let mut belief = belief();
        belief.absorb(PerceptionSet::BREEZE, Position::ORIGIN).unwrap();
        let decision = decide(&belief, &ShadowPose::new(), NavigatorConfig::default());
        assert_eq!(decision, Decision::new(Action::TurnRight, Rule::TurnFallback));
    }

    #[test]
    fn route_planning_heads_home_with_gold() {
        let mut belief = belief();
        belief.absorb(PerceptionSet::SAFE, Position::ORIGIN).unwrap();
        belief.absorb(PerceptionSet::SAFE, Position::new(1, 0)).unwrap();
        belief.absorb(PerceptionSet::BREEZE, Position::new(2, 0)).unwrap();
        belief.absorb(PerceptionSet::BREEZE, Position::new(1, 1)).unwrap();
        belief.absorb(PerceptionSet::BREEZE, Position::new(0, 1)).unwrap();

        let pose = ShadowPose {
            position: Position::new(2, 0),
            has_gold: true,
            ..ShadowPose::new()
        };
        let planning = NavigatorConfig::with_route_planning(true);

        assert_eq!(
            decide(&belief, &pose, NavigatorConfig::default()).rule,
            Rule::TurnFallback
        );
        // facing EAST, home lies WEST through (1,0)
        assert_eq!(
            decide(&belief, &pose, planning),
            Decision::new(Action::TurnLeft, Rule::ReturnToEntry)
        );
    }

    #[test]
    fn route_planning_reaches_distant_frontier() {
        let mut belief = belief();
        belief.absorb(PerceptionSet::SAFE, Position::ORIGIN).unwrap();
        belief.absorb(PerceptionSet::BREEZE, Position::new(0, 1)).unwrap();
        belief.absorb(PerceptionSet::SAFE, Position::new(1, 0)).unwrap();
        belief.absorb(PerceptionSet::BREEZE, Position::new(1, 1)).unwrap();

        // (2,0) is the only frontier left, reached back through the entry
        let pose = ShadowPose {
            position: Position::new(0, 1),
            direction: CardinalDirection::North,
            ..ShadowPose::new()
        };
        let decision = decide(&belief, &pose, NavigatorConfig::with_route_planning(true));
        assert_eq!(decision, Decision::new(Action::Forward, Rule::RouteToFrontier));
    }
}
