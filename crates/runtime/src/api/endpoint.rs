//! Peer endpoints used by the explorer.
//!
//! The explorer never holds a reference to another role's state. It only
//! knows an [`Endpoint`] per peer: send one frame, await exactly one reply
//! frame. Channel-backed endpoints talk to the worker tasks; tests and other
//! embedders can plug in their own.
use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};

use wumpus_core::GameState;

use super::errors::{Result, Role, RuntimeError};
use crate::workers::{EnvironmentCommand, NavigatorCommand, NavigatorSnapshot};

#[async_trait]
pub trait Endpoint: Send + Sync {
    /// Sends one frame and waits, without timeout, for the single reply.
    async fn exchange(&self, frame: String) -> Result<String>;
}

/// Channel-backed endpoint of the environment worker.
#[derive(Clone)]
pub struct EnvironmentEndpoint {
    command_tx: mpsc::Sender<EnvironmentCommand>,
}

impl EnvironmentEndpoint {
    pub(crate) fn new(command_tx: mpsc::Sender<EnvironmentCommand>) -> Self {
        Self { command_tx }
    }

    /// Ground-truth snapshot. Not part of the role protocol; meant for
    /// reporting and tests.
    pub async fn query_state(&self) -> Result<GameState> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(EnvironmentCommand::QueryState { reply: reply_tx })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed {
                role: Role::Environment,
            })?;

        reply_rx
            .await
            .map_err(|source| RuntimeError::ReplyChannelClosed {
                role: Role::Environment,
                source,
            })
    }
}

#[async_trait]
impl Endpoint for EnvironmentEndpoint {
    async fn exchange(&self, frame: String) -> Result<String> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(EnvironmentCommand::Exchange {
                frame,
                reply: reply_tx,
            })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed {
                role: Role::Environment,
            })?;

        reply_rx
            .await
            .map_err(|source| RuntimeError::ReplyChannelClosed {
                role: Role::Environment,
                source,
            })
    }
}

/// Channel-backed endpoint of the navigator worker.
#[derive(Clone)]
pub struct NavigatorEndpoint {
    command_tx: mpsc::Sender<NavigatorCommand>,
}

impl NavigatorEndpoint {
    pub(crate) fn new(command_tx: mpsc::Sender<NavigatorCommand>) -> Self {
        Self { command_tx }
    }

    /// Belief map and shadow pose as currently held by the navigator.
    pub async fn query_belief(&self) -> Result<NavigatorSnapshot> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(NavigatorCommand::QueryBelief { reply: reply_tx })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed {
                role: Role::Navigator,
            })?;

        reply_rx
            .await
            .map_err(|source| RuntimeError::ReplyChannelClosed {
                role: Role::Navigator,
                source,
            })
    }
}

#[async_trait]
impl Endpoint for NavigatorEndpoint {
    async fn exchange(&self, frame: String) -> Result<String> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(NavigatorCommand::Report {
                frame,
                reply: reply_tx,
            })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed {
                role: Role::Navigator,
            })?;

        reply_rx
            .await
            .map_err(|source| RuntimeError::ReplyChannelClosed {
                role: Role::Navigator,
                source,
            })?
    }
}
