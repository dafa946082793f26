//! Navigator worker that owns the belief map.
//!
//! Each report frame is decoded, absorbed and answered with one
//! recommendation frame.

use serde::{Deserialize, Serialize};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, error, info, warn};

use wumpus_core::{
    BeliefMap, Frame, GridDimensions, Navigator, NavigatorConfig, PerceptionReport,
    RecommendedAction, ShadowPose,
};

use crate::api::{Result, RuntimeError};

const TARGET: &str = "wumpus::navigator";

/// Read-only view of the navigator's private state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigatorSnapshot {
    pub belief: BeliefMap,
    pub pose: ShadowPose,
}

/// Commands that can be sent to the navigator worker
pub enum NavigatorCommand {
    /// One protocol round: a perception report in, a recommendation out.
    Report {
        frame: String,
        reply: oneshot::Sender<Result<String>>,
    },
    QueryBelief {
        reply: oneshot::Sender<NavigatorSnapshot>,
    },
}

pub struct NavigatorWorker {
    navigator: Navigator,
    command_rx: mpsc::Receiver<NavigatorCommand>,
    reports: u64,
}

impl NavigatorWorker {
    pub fn new(
        dimensions: GridDimensions,
        config: NavigatorConfig,
        command_rx: mpsc::Receiver<NavigatorCommand>,
    ) -> Self {
        info!(
            target: TARGET,
            size = dimensions.size,
            route_planning = config.route_planning,
            "NavigatorWorker initialized"
        );

        Self {
            navigator: Navigator::new(dimensions, config),
            command_rx,
            reports: 0,
        }
    }

    pub async fn run(mut self) {
        while let Some(cmd) = self.command_rx.recv().await {
            match cmd {
                NavigatorCommand::Report { frame, reply } => {
                    let result = self.handle_report(&frame);
                    let halt = matches!(result, Err(RuntimeError::Navigator(_)));
                    if reply.send(result).is_err() {
                        debug!(target: TARGET, "Report reply channel closed (caller dropped)");
                    }
                    if halt {
                        break;
                    }
                }
                NavigatorCommand::QueryBelief { reply } => {
                    let snapshot = NavigatorSnapshot {
                        belief: self.navigator.belief().clone(),
                        pose: *self.navigator.pose(),
                    };
                    if reply.send(snapshot).is_err() {
                        debug!(target: TARGET, "QueryBelief reply channel closed (caller dropped)");
                    }
                }
            }
        }
    }

    fn handle_report(&mut self, frame: &str) -> Result<String> {
        let report = PerceptionReport::decode(frame).inspect_err(|err| {
            warn!(target: TARGET, frame, error = %err, "unparsable perception report");
        })?;
        self.reports += 1;

        let observation = self.navigator.observe(report.perceptions).inspect_err(|err| {
            error!(target: TARGET, error = %err, "belief update failed");
        })?;

        let summary = observation.summary;
        if observation.rolled_back {
            debug!(target: TARGET, position = %observation.position, "bump: shadow pose rolled back");
        }
        debug!(
            target: TARGET,
            report = self.reports,
            position = %observation.position,
            perceptions = %report.perceptions,
            newly_safe = summary.newly_safe,
            wumpus_suspects = summary.new_wumpus_suspects,
            pit_suspects = summary.new_pit_suspects,
            "absorbed report"
        );
        if let Some(position) = summary.wumpus_confirmed {
            info!(target: TARGET, %position, "wumpus location confirmed");
        }
        if let Some(position) = summary.pit_confirmed {
            info!(target: TARGET, %position, "pit location confirmed");
        }

        let decision = observation.decision;
        debug!(
            target: TARGET,
            action = %decision.action,
            rule = %decision.rule,
            "recommending"
        );
        Ok(RecommendedAction {
            action: decision.action,
        }
        .encode())
    }
}
