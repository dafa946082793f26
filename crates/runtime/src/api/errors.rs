//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from worker coordination, world construction and frame
//! decoding so clients can bubble them up with consistent context.
use std::fmt;

use thiserror::Error;
use tokio::sync::oneshot;

use wumpus_core::{NavigatorError, WireError, WorldError};

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("{role} worker command channel closed")]
    CommandChannelClosed { role: Role },

    #[error("{role} worker reply channel closed")]
    ReplyChannelClosed {
        role: Role,
        #[source]
        source: oneshot::error::RecvError,
    },

    #[error("{role} worker join failed")]
    WorkerJoin {
        role: Role,
        #[source]
        source: tokio::task::JoinError,
    },

    #[error("failed to build the world")]
    World(#[from] WorldError),

    #[error("undecodable frame")]
    Protocol(#[from] WireError),

    #[error("navigator halted")]
    Navigator(#[from] NavigatorError),
}

/// The three cooperating roles.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Role {
    Environment,
    Explorer,
    Navigator,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Role::Environment => "environment",
            Role::Explorer => "explorer",
            Role::Navigator => "navigator",
        };
        write!(f, "{}", label)
    }
}
