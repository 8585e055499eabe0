//! Narration interface.
//!
//! Observers hear about state changes but carry no game logic; the console
//! renderer is one subscriber, tests can attach recorders. All methods
//! default to doing nothing so a subscriber implements only what it needs.

use crate::cards::{Card, Color};
use crate::core::Player;

/// Receives game narration events from the engine.
pub trait GameObserver {
    /// A turn started: `player` is about to act against this table.
    fn turn_started(&mut self, _player: &Player, _top_card: &Card, _active_color: Color) {}

    /// `player` played `card`; `active_color` is the color now in force.
    fn card_played(&mut self, _player: &Player, _card: &Card, _active_color: Color) {}

    /// `player` drew `count` cards by choice or forced fallback.
    fn cards_drawn(&mut self, _player: &Player, _count: u8) {}

    /// `player` drew `count` cards as a pending-draw penalty.
    fn penalty_drawn(&mut self, _player: &Player, _count: u8) {}

    /// `player`'s turn was skipped.
    fn turn_skipped(&mut self, _player: &Player) {}

    /// `player` declared `color` for a wild-kind card.
    fn color_declared(&mut self, _player: &Player, _color: Color) {}

    /// `player` chose an illegal or out-of-range card; the engine will ask
    /// again.
    fn play_rejected(&mut self, _player: &Player) {}

    /// `player` emptied their hand and won.
    fn game_won(&mut self, _player: &Player) {}
}
