use crate::state::Position;

/// Invariant violations detected while resolving an action.
///
/// None of these are reachable through valid input; they indicate a bug in
/// the rules and halt the environment.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionError {
    #[error("explorer at {position} is outside the {size}x{size} grid")]
    ExplorerOutOfBounds { position: Position, size: u32 },

    #[error("no cell at {position}")]
    MissingCell { position: Position },

    #[error("gold at {position} survived a successful grab")]
    GoldNotCleared { position: Position },
}
