//! Worker tasks that back the runtime orchestration.
//!
//! Each worker exclusively owns one role's state and serves it over a command
//! channel; nothing else can reach that state.

mod environment;
mod navigator;

pub use environment::{EnvironmentCommand, EnvironmentWorker};
pub use navigator::{NavigatorCommand, NavigatorSnapshot, NavigatorWorker};
