//! Actor runtime for the three Wumpus World roles.
//!
//! The environment and navigator each run as a worker task that exclusively
//! owns its state; the explorer coordinates them one frame at a time. Consumers
//! embed [`Runtime`] to run a session, subscribe to events, and inspect the
//! roles through [`RuntimeHandle`].
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] provides topic-based event bus for flexible event routing
//! - [`explorer`] is the protocol coordinator
//! - `workers` keeps background tasks internal to the crate
pub mod api;
pub mod events;
pub mod explorer;
pub mod runtime;

mod workers;

pub use api::{
    Endpoint, EnvironmentEndpoint, NavigatorEndpoint, Result, Role, RuntimeError, RuntimeHandle,
};
pub use events::{Event, EventBus, SessionEnd, SessionEvent, Topic, TurnEvent};
pub use explorer::{Explorer, ExplorerConfig, SessionReport, UnparsablePolicy};
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};
pub use workers::NavigatorSnapshot;
