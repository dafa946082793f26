//! Explorer role: the protocol coordinator.
//!
//! The explorer relays frames between its two peers in strict alternation:
//!
//! 1. request → environment (a perception query on the first turn, an action
//!    command afterwards)
//! 2. perception report → navigator
//! 3. recommended action → next request
//!
//! It holds no game state of its own beyond the turn counter. The session
//! ends on a terminal outcome, when the action budget is spent, or on a stall
//! (an undecodable frame or an environment refusal). Nothing is retried.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use wumpus_core::{
    ActionCommand, EnvironmentReply, EnvironmentRequest, ExplorerState, Frame, PerceptionReport,
    RecommendedAction, WireError,
};

use crate::api::{Endpoint, Result, RuntimeError};
use crate::events::{Event, EventBus, SessionEnd, SessionEvent, TurnEvent};

const TARGET: &str = "wumpus::explorer";

/// What to do when a peer's frame cannot be decoded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnparsablePolicy {
    /// End the session as [`SessionEnd::Stalled`].
    #[default]
    Stall,
    /// Fail the session with [`RuntimeError::Protocol`].
    Fail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExplorerConfig {
    /// Maximum number of accepted actions before the session is cut off.
    pub max_turns: u64,
    pub unparsable_policy: UnparsablePolicy,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            max_turns: 256,
            unparsable_policy: UnparsablePolicy::default(),
        }
    }
}

/// Result of one session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionReport {
    pub end: SessionEnd,
    /// Accepted actions. The initial query and refused actions do not count.
    pub turns: u64,
    pub elapsed: Duration,
    /// Ground-truth explorer pose at the end, when the environment could
    /// still be asked.
    pub final_pose: Option<ExplorerState>,
}

pub struct Explorer<E, N> {
    environment: E,
    navigator: N,
    config: ExplorerConfig,
    event_bus: EventBus,
}

impl<E: Endpoint, N: Endpoint> Explorer<E, N> {
    pub fn new(environment: E, navigator: N, config: ExplorerConfig, event_bus: EventBus) -> Self {
        Self {
            environment,
            navigator,
            config,
            event_bus,
        }
    }

    /// Drives turns until the session ends.
    pub async fn run(self) -> Result<SessionReport> {
        let started = Instant::now();
        let mut turns = 0u64;
        let mut request = EnvironmentRequest::PerceptionQuery;

        info!(target: TARGET, max_turns = self.config.max_turns, "session started");

        let end = loop {
            let frame = self.environment.exchange(request.encode()).await?;
            let reply = match EnvironmentReply::decode(&frame) {
                Ok(reply) => reply,
                Err(err) => {
                    warn!(target: TARGET, frame = %frame, error = %err, "unparsable environment reply");
                    break self.unparsable("environment reply", err)?;
                }
            };

            let report = match reply {
                EnvironmentReply::Refused(refusal) => {
                    warn!(target: TARGET, turn = turns, refusal = %refusal.encode(), "environment refused request");
                    break SessionEnd::Stalled {
                        reason: format!("environment refused {}: {}", request.encode(), refusal.encode()),
                    };
                }
                EnvironmentReply::GameOver(outcome) => {
                    turns += 1;
                    info!(target: TARGET, turn = turns, %outcome, "game over");
                    break SessionEnd::Finished(outcome);
                }
                EnvironmentReply::Perceptions(report) => report,
            };

            match request {
                EnvironmentRequest::PerceptionQuery => {
                    self.event_bus.publish(Event::Session(SessionEvent::Started {
                        perceptions: report.perceptions,
                    }));
                }
                EnvironmentRequest::Act(ActionCommand { action }) => {
                    turns += 1;
                    debug!(
                        target: TARGET,
                        turn = turns,
                        %action,
                        perceptions = %report.perceptions,
                        "turn complete"
                    );
                    self.event_bus.publish(Event::Turn(TurnEvent {
                        turn: turns,
                        action,
                        perceptions: report.perceptions,
                    }));
                }
            }

            if turns >= self.config.max_turns {
                warn!(target: TARGET, turns, "turn limit reached");
                break SessionEnd::TurnLimitReached { turns };
            }

            let recommendation = match self.consult(report).await {
                Ok(recommendation) => recommendation,
                Err(RuntimeError::Protocol(err)) => break self.unparsable("navigator exchange", err)?,
                Err(err) => return Err(err),
            };
            request = EnvironmentRequest::Act(ActionCommand {
                action: recommendation.action,
            });
        };

        self.event_bus.publish(Event::Session(SessionEvent::Ended {
            end: end.clone(),
            turns,
        }));

        Ok(SessionReport {
            end,
            turns,
            elapsed: started.elapsed(),
            final_pose: None,
        })
    }

    /// Forwards a report to the navigator and decodes its recommendation.
    async fn consult(&self, report: PerceptionReport) -> Result<RecommendedAction> {
        let frame = self.navigator.exchange(report.encode()).await?;
        RecommendedAction::decode(&frame).map_err(|err| {
            warn!(target: TARGET, frame = %frame, error = %err, "unparsable recommendation");
            RuntimeError::Protocol(err)
        })
    }

    fn unparsable(&self, what: &str, err: WireError) -> Result<SessionEnd> {
        match self.config.unparsable_policy {
            UnparsablePolicy::Stall => Ok(SessionEnd::Stalled {
                reason: format!("undecodable {what}: {err}"),
            }),
            UnparsablePolicy::Fail => Err(RuntimeError::Protocol(err)),
        }
    }
}
