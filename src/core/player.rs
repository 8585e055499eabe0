//! Player identity and hand ownership.
//!
//! A `Player` owns a name and an insertion-ordered hand. Whether a seat is
//! human- or machine-controlled is not a property of the player: it is
//! which `DecisionProvider` implementation the engine holds for that seat.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Deck, DeckExhausted};

/// Seat identifier, 0-based in turn order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A player: seat ID, display name, and hand.
///
/// The hand keeps cards in the order they arrived; draws append, plays
/// remove at a chosen index. A player has won the instant the hand is
/// empty.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    name: String,
    hand: Vec<Card>,
}

impl Player {
    /// Create a player with an empty hand.
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            hand: Vec::new(),
        }
    }

    /// Get the seat ID.
    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// Get the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the hand, in insertion order.
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    /// Number of cards in hand.
    #[must_use]
    pub fn hand_size(&self) -> usize {
        self.hand.len()
    }

    /// Draw `n` cards from the deck, appending in draw order.
    pub fn draw_from(&mut self, deck: &mut Deck, n: usize) -> Result<(), DeckExhausted> {
        for _ in 0..n {
            self.hand.push(deck.draw()?);
        }
        Ok(())
    }

    /// Add a single card to the hand.
    pub fn give(&mut self, card: Card) {
        self.hand.push(card);
    }

    /// Remove and return the card at `index`.
    ///
    /// ## Panics
    ///
    /// Panics if `index` is out of range. The engine validates indices
    /// against the hand before removing.
    pub fn remove(&mut self, index: usize) -> Card {
        self.hand.remove(index)
    }

    /// Remove and return the most recently drawn card, if any.
    pub fn take_last(&mut self) -> Option<Card> {
        self.hand.pop()
    }

    /// Whether this player has won (hand is empty).
    #[must_use]
    pub fn has_won(&self) -> bool {
        self.hand.is_empty()
    }
}
