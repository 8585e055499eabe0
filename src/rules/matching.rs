//! The card-matching legality rule.
//!
//! A candidate is playable against the table if ANY of:
//! (a) its color equals the active color;
//! (b) its face value equals the top card's face value;
//! (c) it is wild-kind (colorless).
//!
//! The rule is deliberately permissive: condition (b) makes any two cards
//! of the same kind and rank mutually playable across colors, and even
//! against a wild-kind top card, independent of the active color. This
//! exact three-way disjunction is the contract; do not tighten it to a
//! color-or-value-against-top rule.

use smallvec::SmallVec;

use crate::cards::{Card, Color};

/// Legal hand indices, in hand order. Hands are small; typical legal sets
/// fit inline.
pub type LegalMoves = SmallVec<[usize; 8]>;

/// Whether `candidate` may be played on `top_card` under `active_color`.
#[must_use]
pub fn matches(candidate: &Card, top_card: &Card, active_color: Color) -> bool {
    candidate.color == Some(active_color)
        || candidate.kind == top_card.kind
        || candidate.color.is_none()
}

/// Indices of playable cards in `hand`, preserving hand order.
#[must_use]
pub fn legal_moves(hand: &[Card], top_card: &Card, active_color: Color) -> LegalMoves {
    hand.iter()
        .enumerate()
        .filter(|(_, card)| matches(card, top_card, active_color))
        .map(|(i, _)| i)
        .collect()
}
