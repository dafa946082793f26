//! Public runtime API surface.
//!
//! This module gathers the types exposed to consumers of the runtime crate so
//! other layers can stay focused on orchestration or workers.

pub mod endpoint;
pub mod errors;
pub mod handle;

pub use endpoint::{Endpoint, EnvironmentEndpoint, NavigatorEndpoint};
pub use errors::{Result, Role, RuntimeError};
pub use handle::RuntimeHandle;
