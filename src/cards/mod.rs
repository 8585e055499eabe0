//! Card system: colors, kinds, the `Card` value type, and the draw pile.

pub mod card;
pub mod deck;

pub use card::{Card, CardKind, Color, InvalidColorChoice};
pub use deck::{Deck, DeckExhausted};
