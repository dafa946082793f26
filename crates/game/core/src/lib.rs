//! Deterministic Wumpus World rules shared by the runtime and clients.
//!
//! `wumpus-core` defines the ground-truth world, the environment's action
//! resolution, the navigator's belief map and decision policy, and the typed
//! message vocabulary the roles exchange. Everything here is synchronous and
//! free of I/O; the runtime crate drives these types from its actor tasks.
pub mod action;
pub mod belief;
pub mod config;
pub mod engine;
pub mod env;
pub mod navigator;
pub mod perception;
pub mod protocol;
pub mod state;
pub mod world;

pub use action::{Action, ActionEffect, ActionTransition, TransitionError};
pub use belief::{AbsorbSummary, BeliefCell, BeliefError, BeliefMap};
pub use config::{GameConfig, NavigatorConfig};
pub use engine::{
    Environment, EnvironmentError, Resolution, ResolvedAction, TransitionPhase,
    TransitionPhaseError,
};
pub use env::{GridDimensions, PcgRng, RngOracle, compute_seed};
pub use navigator::{Decision, Navigator, NavigatorError, Observation, Rule, ShadowPose};
pub use perception::{Perception, PerceptionSet, UnknownPerception};
pub use protocol::{
    ActionCommand, EnvironmentReply, EnvironmentRequest, Frame, PerceptionReport,
    RecommendedAction, Refusal, WireError,
};
pub use state::{
    CardinalDirection, ExplorerState, FailReason, GamePhase, GameState, Outcome, Position,
    TurnState,
};
pub use world::{Cell, WorldError, WorldLayout, WorldModel};
