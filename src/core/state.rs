//! Table state: the authoritative shared game state.
//!
//! `TableState` is owned by the turn engine and handed to the effect
//! resolver by mutable reference; nothing else mutates it. The active
//! color is tracked separately from the top card because a wild card's
//! declared color lives on the table, not on the card.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Color};

/// Shared state the matching rule and effect resolver operate on.
///
/// Invariants the engine maintains:
/// - `active_color` is always one of the four real colors once play starts.
/// - `pending_draw` is resolved (applied and zeroed) before the next
///   player's decision point.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableState {
    /// The most recently played card, defining the required match value.
    pub top_card: Card,
    /// The color that currently satisfies the matching rule's color
    /// condition. Differs from `top_card.color` after a wild declaration.
    pub active_color: Color,
    /// Accumulated forced-draw penalty owed by the next player.
    pub pending_draw: u8,
    /// Whether resolving `pending_draw` also skips that player's turn.
    pub force_skip_after_pending: bool,
    /// One-shot skip flag for the player about to act.
    pub skip_next: bool,
}

impl TableState {
    /// Create the state for a fresh game from the flipped starting card.
    #[must_use]
    pub fn new(top_card: Card, active_color: Color) -> Self {
        Self {
            top_card,
            active_color,
            pending_draw: 0,
            force_skip_after_pending: false,
            skip_next: false,
        }
    }

    /// Take the pending penalty, if any.
    ///
    /// Returns the owed draw count and zeroes it. If the penalty also
    /// forces a skip, the one-shot skip flag is armed here and the
    /// force-skip flag reset.
    pub fn take_pending(&mut self) -> Option<u8> {
        if self.pending_draw == 0 {
            return None;
        }
        let owed = self.pending_draw;
        self.pending_draw = 0;
        if self.force_skip_after_pending {
            self.skip_next = true;
            self.force_skip_after_pending = false;
        }
        Some(owed)
    }

    /// Take and reset the one-shot skip flag.
    pub fn take_skip(&mut self) -> bool {
        std::mem::take(&mut self.skip_next)
    }
}
