//! Topic-based event bus for runtime events.
//!
//! The explorer publishes turn and session events here; consumers subscribe
//! only to the topics they need.

mod bus;
mod types;

pub use bus::{Event, EventBus, Topic};
pub use types::{SessionEnd, SessionEvent, TurnEvent};
