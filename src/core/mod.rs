//! Core engine types: players, table state, RNG.

pub mod player;
pub mod rng;
pub mod state;

pub use player::{Player, PlayerId};
pub use rng::GameRng;
pub use state::TableState;
