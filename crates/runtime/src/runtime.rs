//! High-level runtime orchestrator.
//!
//! The runtime owns the role workers, wires up command/event channels, and
//! exposes a builder-based API for clients to run sessions.

use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;
use tracing::debug;

use wumpus_core::{GameConfig, NavigatorConfig, WorldModel};

use crate::api::{Result, Role, RuntimeError, RuntimeHandle};
use crate::api::{EnvironmentEndpoint, NavigatorEndpoint};
use crate::events::{Event, EventBus, Topic};
use crate::explorer::{Explorer, ExplorerConfig, SessionReport, UnparsablePolicy};
use crate::workers::{EnvironmentCommand, EnvironmentWorker, NavigatorCommand, NavigatorWorker};

/// Runtime configuration shared across the orchestrator and workers.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub game: GameConfig,
    pub navigator: NavigatorConfig,
    pub event_buffer_size: usize,
    pub command_buffer_size: usize,
    /// Maximum number of accepted actions per session.
    pub max_turns: u64,
    pub unparsable_policy: UnparsablePolicy,
}

impl RuntimeConfig {
    fn explorer(&self) -> ExplorerConfig {
        ExplorerConfig {
            max_turns: self.max_turns,
            unparsable_policy: self.unparsable_policy,
        }
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        let explorer = ExplorerConfig::default();
        Self {
            game: GameConfig::default(),
            navigator: NavigatorConfig::default(),
            event_buffer_size: 100,
            command_buffer_size: 32,
            max_turns: explorer.max_turns,
            unparsable_policy: explorer.unparsable_policy,
        }
    }
}

/// Main runtime that hosts one game session.
///
/// Design: Runtime owns the environment and navigator workers; the explorer
/// runs as its own task per session. [`RuntimeHandle`] provides a cloneable
/// façade for clients.
pub struct Runtime {
    config: RuntimeConfig,
    handle: RuntimeHandle,

    // Background workers
    environment_worker: JoinHandle<()>,
    navigator_worker: JoinHandle<()>,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Get a cloneable handle to this runtime
    pub fn handle(&self) -> RuntimeHandle {
        self.handle.clone()
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    /// Subscribe to runtime events on one topic
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.handle.subscribe(topic)
    }

    /// Runs the session to its end with the built-in navigator.
    pub async fn run_session(&self) -> Result<SessionReport> {
        let explorer = Explorer::new(
            self.handle.environment(),
            self.handle.navigator(),
            self.config.explorer(),
            self.handle.event_bus().clone(),
        );

        let mut report = tokio::spawn(explorer.run())
            .await
            .map_err(|source| RuntimeError::WorkerJoin {
                role: Role::Explorer,
                source,
            })??;

        report.final_pose = match self.handle.query_state().await {
            Ok(state) => Some(state.explorer),
            Err(err) => {
                debug!(error = %err, "final pose unavailable");
                None
            }
        };
        Ok(report)
    }

    /// Shutdown the runtime gracefully
    pub async fn shutdown(self) -> Result<()> {
        drop(self.handle);

        self.environment_worker
            .await
            .map_err(|source| RuntimeError::WorkerJoin {
                role: Role::Environment,
                source,
            })?;
        self.navigator_worker
            .await
            .map_err(|source| RuntimeError::WorkerJoin {
                role: Role::Navigator,
                source,
            })?;

        Ok(())
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    world: Option<WorldModel>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            world: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Use a prepared world instead of generating one from the game config
    pub fn world(mut self, world: WorldModel) -> Self {
        self.world = Some(world);
        self
    }

    pub fn max_turns(mut self, max_turns: u64) -> Self {
        self.config.max_turns = max_turns;
        self
    }

    pub fn route_planning(mut self, enable: bool) -> Self {
        self.config.navigator.route_planning = enable;
        self
    }

    pub fn unparsable_policy(mut self, policy: UnparsablePolicy) -> Self {
        self.config.unparsable_policy = policy;
        self
    }

    /// Build the runtime and spawn the role workers
    pub async fn build(self) -> Result<Runtime> {
        let world = match self.world {
            Some(world) => world,
            None => WorldModel::generate(&self.config.game)?,
        };
        let dimensions = world.dimensions();

        let (environment_tx, environment_rx) =
            mpsc::channel::<EnvironmentCommand>(self.config.command_buffer_size);
        let (navigator_tx, navigator_rx) =
            mpsc::channel::<NavigatorCommand>(self.config.command_buffer_size);
        let event_bus = EventBus::with_capacity(self.config.event_buffer_size);

        let handle = RuntimeHandle::new(
            EnvironmentEndpoint::new(environment_tx),
            NavigatorEndpoint::new(navigator_tx),
            event_bus,
        );

        let environment = EnvironmentWorker::new(world, environment_rx);
        let environment_worker = tokio::spawn(async move {
            environment.run().await;
        });

        let navigator = NavigatorWorker::new(dimensions, self.config.navigator, navigator_rx);
        let navigator_worker = tokio::spawn(async move {
            navigator.run().await;
        });

        Ok(Runtime {
            config: self.config,
            handle,
            environment_worker,
            navigator_worker,
        })
    }
}
