//! Effect resolution: applying a played card to the table state.
//!
//! All card effects live in one exhaustive match over the closed
//! `CardKind` enum, so the whole effect table is auditable in one place.
//! The resolver is a pure function of (card, declared color) over a
//! mutably borrowed `TableState`; it never touches hands, the deck, or
//! turn order.

use crate::cards::{Card, CardKind, Color};
use crate::core::TableState;

/// Apply `card` to the table.
///
/// `declared` carries the chooser's color declaration and must be `Some`
/// exactly when the card is wild-kind; the engine obtains it from the
/// seat's decision provider before resolving, with the played card
/// already removed from the hand.
///
/// Effects per kind:
/// - Number: top card and active color change, nothing else.
/// - Skip: the next player's turn is skipped.
/// - Reverse: behaves as Skip; turn direction never changes.
/// - Draw Two: next player owes 2 cards and is skipped after drawing.
/// - Wild: active color becomes the declared color.
/// - Wild Draw Four: declared color, next player owes 4 and is skipped.
pub fn resolve(card: Card, declared: Option<Color>, state: &mut TableState) {
    debug_assert_eq!(card.is_wild(), declared.is_some(), "declared color iff wild");

    state.top_card = card;
    if let Some(color) = card.color.or(declared) {
        state.active_color = color;
    }

    match card.kind {
        CardKind::Number(_) | CardKind::Wild => {}
        CardKind::Skip | CardKind::Reverse => {
            state.skip_next = true;
        }
        CardKind::DrawTwo => {
            state.pending_draw += 2;
            state.force_skip_after_pending = true;
        }
        CardKind::WildDrawFour => {
            state.pending_draw += 4;
            state.force_skip_after_pending = true;
        }
    }
}
