use super::Outcome;

/// Phase of the environment's action-resolution state machine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GamePhase {
    #[default]
    AwaitingAction,
    /// Set for the duration of a resolution. Observed afterwards only if the
    /// resolution aborted on an invariant violation.
    Resolving,
    Terminal(Outcome),
}

/// Turn bookkeeping owned by the environment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnState {
    /// Number of accepted actions. Perception queries and refused actions
    /// are not counted.
    pub turn: u64,
    pub phase: GamePhase,
}

impl TurnState {
    pub fn new() -> Self {
        Self::default()
    }
}
