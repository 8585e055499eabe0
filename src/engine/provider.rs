//! The decision-provider seam between the engine and whoever is choosing.
//!
//! The engine never branches on "is this a human": every seat holds a
//! `DecisionProvider`, and the interactive prompt, the heuristic opponent,
//! and scripted test doubles are just different implementations selected
//! at construction time.

use crate::cards::{Card, Color};

/// A player's choice at the top of their turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnChoice {
    /// Draw one card instead of playing.
    Draw,
    /// Play the card at this hand index.
    Play(usize),
}

/// Per-seat decision source.
///
/// Implementations may block (a console prompt) or answer immediately (a
/// policy, a script). The engine treats returned indices as untrusted: an
/// out-of-range or illegal `Play` is rejected and the same seat is asked
/// again, without advancing turn state.
pub trait DecisionProvider {
    /// Choose to draw or to play a card.
    ///
    /// `legal` lists the hand indices that currently satisfy the matching
    /// rule, in hand order. It may be empty.
    fn choose_action(&mut self, hand: &[Card], legal: &[usize]) -> TurnChoice;

    /// After an explicit draw produced a playable card, decide whether to
    /// play it immediately.
    fn play_drawn_card(&mut self, drawn: &Card) -> bool;

    /// Declare a color for a just-played wild-kind card.
    ///
    /// `hand` is the chooser's remaining hand (the wild already removed).
    fn choose_color(&mut self, hand: &[Card]) -> Color;
}
