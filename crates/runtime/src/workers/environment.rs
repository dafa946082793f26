//! Environment worker that owns the authoritative [`wumpus_core::GameState`].
//!
//! Receives frames from [`crate::api::EnvironmentEndpoint`], resolves them
//! through [`wumpus_core::Environment`] and replies with exactly one frame.

use std::time::Instant;

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, error, info, warn};

use wumpus_core::{
    Environment, EnvironmentReply, EnvironmentRequest, Frame, GameState, Refusal, Resolution,
    WorldModel,
};

const TARGET: &str = "wumpus::environment";

/// Commands that can be sent to the environment worker
pub enum EnvironmentCommand {
    /// One protocol round: a request frame in, a reply frame out.
    Exchange {
        frame: String,
        reply: oneshot::Sender<String>,
    },
    /// Query the current game state (read-only).
    QueryState { reply: oneshot::Sender<GameState> },
}

/// Background task that serves the environment role.
pub struct EnvironmentWorker {
    environment: Environment,
    command_rx: mpsc::Receiver<EnvironmentCommand>,
    started: Instant,
}

impl EnvironmentWorker {
    pub fn new(world: WorldModel, command_rx: mpsc::Receiver<EnvironmentCommand>) -> Self {
        info!(
            target: TARGET,
            size = world.size(),
            pits = world.pit_positions().len(),
            "EnvironmentWorker initialized"
        );
        debug!(
            target: TARGET,
            wumpus = ?world.wumpus_position(),
            gold = ?world.gold_position(),
            pits = ?world.pit_positions(),
            "hazard layout"
        );

        Self {
            environment: Environment::new(world),
            command_rx,
            started: Instant::now(),
        }
    }

    /// Main worker loop. Ends when every endpoint is dropped or after an
    /// invariant violation.
    pub async fn run(mut self) {
        while let Some(cmd) = self.command_rx.recv().await {
            match cmd {
                EnvironmentCommand::Exchange { frame, reply } => {
                    let (response, halt) = self.handle_frame(&frame);
                    if reply.send(response.encode()).is_err() {
                        debug!(target: TARGET, "Exchange reply channel closed (caller dropped)");
                    }
                    if halt {
                        error!(target: TARGET, "environment halted");
                        break;
                    }
                }
                EnvironmentCommand::QueryState { reply } => {
                    if reply.send(self.environment.state().clone()).is_err() {
                        debug!(target: TARGET, "QueryState reply channel closed (caller dropped)");
                    }
                }
            }
        }
    }

    /// Returns the reply and whether the worker must stop.
    fn handle_frame(&mut self, frame: &str) -> (EnvironmentReply, bool) {
        let request = match EnvironmentRequest::decode(frame) {
            Ok(request) => request,
            Err(err) => {
                warn!(target: TARGET, frame, error = %err, "refusing unknown action");
                let token = frame.trim().to_owned();
                return (EnvironmentReply::Refused(Refusal::InvalidAction { token }), false);
            }
        };

        let result = match request {
            EnvironmentRequest::PerceptionQuery => self.environment.query().map(|perceptions| {
                debug!(target: TARGET, perceptions = %perceptions, "served perception query");
                Resolution::Perceptions(perceptions)
            }),
            EnvironmentRequest::Act(command) => {
                self.environment.resolve(command.action).map(|resolved| {
                    let explorer = self.environment.explorer();
                    info!(
                        target: TARGET,
                        turn = resolved.turn,
                        action = %resolved.action,
                        position = %explorer.position,
                        direction = %explorer.direction,
                        "resolved action"
                    );
                    if resolved.effect.no_op {
                        debug!(target: TARGET, action = %resolved.action, "action had no effect");
                    }
                    resolved.resolution
                })
            }
        };

        match result {
            Ok(resolution) => {
                if let Resolution::GameOver(outcome) = resolution {
                    info!(
                        target: TARGET,
                        %outcome,
                        turns = self.environment.turn().turn,
                        elapsed_ms = self.started.elapsed().as_millis() as u64,
                        "game over"
                    );
                }
                (resolution.into(), false)
            }
            Err(err) if err.is_fatal() => {
                error!(target: TARGET, error = %err, "invariant violation");
                (EnvironmentReply::Refused(Refusal::from(&err)), true)
            }
            Err(err) => {
                warn!(target: TARGET, error = %err, "refusing request");
                (EnvironmentReply::Refused(Refusal::from(&err)), false)
            }
        }
    }
}
