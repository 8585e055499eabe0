//! # uno-engine
//!
//! A turn-based card game engine implementing the core rules of UNO:
//! deck composition, dealing, turn progression, card-matching legality,
//! special-card effects, and a rule-based automated opponent.
//!
//! ## Design
//!
//! - **Closed card variants**: card behavior is a tagged `CardKind`
//!   dispatched through one exhaustively matched effect resolver, not a
//!   class hierarchy.
//! - **Single owner of shared state**: the turn engine owns `TableState`
//!   and passes it by mutable reference into the resolver; one turn is
//!   atomic.
//! - **Decisions behind a seam**: every seat holds a `DecisionProvider`
//!   (interactive prompt, deterministic heuristic, scripted test double),
//!   selected at construction time. The engine re-validates everything a
//!   provider returns.
//! - **Deterministic by seed**: all shuffling and AI tie-breaking flows
//!   from one forkable `GameRng`, so games replay exactly.
//!
//! ## Modules
//!
//! - `cards`: colors, kinds, the `Card` value type, the 108-card pile
//! - `core`: players, table state, RNG
//! - `rules`: the permissive matching rule and legal-move derivation
//! - `effects`: the effect resolver
//! - `ai`: the priority heuristic and automated seat
//! - `engine`: builder, turn state machine, provider and observer seams
//! - `console`: stdin/stdout driver (thin glue, no rules logic)

pub mod ai;
pub mod cards;
pub mod console;
pub mod core;
pub mod effects;
pub mod engine;
pub mod rules;

// Re-export commonly used types
pub use crate::cards::{Card, CardKind, Color, Deck, DeckExhausted};
pub use crate::core::{GameRng, Player, PlayerId, TableState};
pub use crate::rules::{legal_moves, matches, LegalMoves};
pub use crate::effects::resolve;
pub use crate::ai::{AutoProvider, Heuristic};
pub use crate::engine::{
    DecisionProvider, EngineError, Game, GameBuilder, GameObserver, GameOutcome, TurnChoice,
    TurnOutcome,
};
