//! The draw pile: standard 108-card composition and draws.
//!
//! The pile is a stack; draws pop from the end. There is no discard-pile
//! recycling: drawing from an empty pile is `DeckExhausted`, which is fatal
//! for the run.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::rng::GameRng;

use super::card::{Card, CardKind, Color};

/// Fatal error: a draw was attempted on an empty pile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("draw pile is empty")]
pub struct DeckExhausted;

/// An ordered draw pile. The top of the pile is the end of the sequence.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Build and shuffle the standard 108-card deck.
    ///
    /// Per color: one 0, two each of ranks 1-9, two Skip, two Reverse,
    /// two Draw Two (25 cards). Plus 4 Wild and 4 Wild Draw Four.
    #[must_use]
    pub fn standard(rng: &mut GameRng) -> Self {
        let mut cards = Vec::with_capacity(108);

        for color in Color::ALL {
            for rank in 0..=9 {
                cards.push(Card::number(color, rank));
                if rank != 0 {
                    cards.push(Card::number(color, rank));
                }
            }
            for _ in 0..2 {
                cards.push(Card::action(color, CardKind::Skip));
                cards.push(Card::action(color, CardKind::Reverse));
                cards.push(Card::action(color, CardKind::DrawTwo));
            }
        }
        for _ in 0..4 {
            cards.push(Card::wild());
            cards.push(Card::wild_draw_four());
        }

        let mut deck = Self { cards };
        deck.shuffle(rng);
        deck
    }

    /// Build a pile with the given order. The last card is the top.
    ///
    /// Useful for scripted games and tests; `standard` is the normal path.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the pile is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Shuffle the pile in place.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
    }

    /// Remove and return the top card.
    pub fn draw(&mut self) -> Result<Card, DeckExhausted> {
        self.cards.pop().ok_or(DeckExhausted)
    }

    /// Draw until a Number card comes up, for the initial face-up card.
    ///
    /// A non-Number draw goes back to the bottom of the pile and the pile
    /// is reshuffled before redrawing, so no special effect can fire before
    /// the first turn. Returns the card together with its color.
    pub fn flip_starting_card(
        &mut self,
        rng: &mut GameRng,
    ) -> Result<(Card, Color), DeckExhausted> {
        loop {
            let card = self.draw()?;
            match (card.kind, card.color) {
                (CardKind::Number(_), Some(color)) => return Ok((card, color)),
                _ => {
                    self.cards.insert(0, card);
                    self.shuffle(rng);
                }
            }
        }
    }
}
