pub mod common;
pub mod explorer;
pub mod outcome;
pub mod turn;

pub use common::{CardinalDirection, Position};
pub use explorer::ExplorerState;
pub use outcome::{FailReason, Outcome};
pub use turn::{GamePhase, TurnState};
