//! Read-only facts the rules consult: grid geometry and deterministic randomness.
//!
//! Nothing here owns game state. World generation borrows an [`RngOracle`] so
//! a seed reproduces a world exactly.
mod map;
mod rng;

pub use map::GridDimensions;
pub use rng::{PcgRng, RngOracle, compute_seed};
