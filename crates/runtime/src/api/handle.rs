//! Cloneable façade over the running roles.
//!
//! [`RuntimeHandle`] hides channel plumbing and offers async helpers for
//! inspecting the roles or streaming events from specific topics.
use tokio::sync::broadcast;

use wumpus_core::GameState;

use super::endpoint::{EnvironmentEndpoint, NavigatorEndpoint};
use super::errors::Result;
use crate::events::{Event, EventBus, Topic};
use crate::workers::NavigatorSnapshot;

/// Client-facing handle to interact with the runtime
#[derive(Clone)]
pub struct RuntimeHandle {
    environment: EnvironmentEndpoint,
    navigator: NavigatorEndpoint,
    event_bus: EventBus,
}

impl RuntimeHandle {
    pub(crate) fn new(
        environment: EnvironmentEndpoint,
        navigator: NavigatorEndpoint,
        event_bus: EventBus,
    ) -> Self {
        Self {
            environment,
            navigator,
            event_bus,
        }
    }

    pub fn environment(&self) -> EnvironmentEndpoint {
        self.environment.clone()
    }

    pub fn navigator(&self) -> NavigatorEndpoint {
        self.navigator.clone()
    }

    /// Subscribe to events from a specific topic
    ///
    /// # Topics
    ///
    /// - `Topic::Turn` - One event per accepted action
    /// - `Topic::Session` - Session start and end
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.event_bus.subscribe(topic)
    }

    /// Query the ground-truth game state (read-only snapshot)
    pub async fn query_state(&self) -> Result<GameState> {
        self.environment.query_state().await
    }

    /// Query the navigator's belief map and shadow pose
    pub async fn query_belief(&self) -> Result<NavigatorSnapshot> {
        self.navigator.query_belief().await
    }

    /// Get a reference to the event bus for advanced usage
    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }
}
