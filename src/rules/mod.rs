//! The card-matching legality rule and legal-move derivation.

pub mod matching;

pub use matching::{legal_moves, matches, LegalMoves};
