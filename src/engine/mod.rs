//! The turn engine: state machine, decision-provider seam, and narration.

pub mod game;
pub mod observer;
pub mod provider;

pub use game::{EngineError, Game, GameBuilder, GameOutcome, TurnOutcome};
pub use observer::GameObserver;
pub use provider::{DecisionProvider, TurnChoice};
