//! The automated opponent: a deterministic priority heuristic.
//!
//! Card choice is a pure function of (hand, legal indices); the only
//! randomness is tie-breaking between equally common colors when
//! declaring for a wild.

use log::debug;

use crate::cards::{Card, CardKind, Color};
use crate::core::GameRng;
use crate::engine::{DecisionProvider, TurnChoice};

/// Priority-ordered card selection and color declaration.
pub struct Heuristic;

impl Heuristic {
    /// Pick the hand index to play from a non-empty legal set.
    ///
    /// Strict priority, first match wins:
    /// 1. any Draw Two;
    /// 2. any Skip or Reverse;
    /// 3. the highest-rank Number (first occurrence on ties);
    /// 4. any Wild or Wild Draw Four;
    /// 5. the first legal index.
    ///
    /// ## Panics
    ///
    /// Panics if `legal` is empty; the engine only asks the policy to
    /// choose among a non-empty playable set.
    #[must_use]
    pub fn choose_card(hand: &[Card], legal: &[usize]) -> usize {
        assert!(!legal.is_empty(), "choose_card needs a non-empty legal set");

        if let Some(&i) = legal.iter().find(|&&i| hand[i].kind == CardKind::DrawTwo) {
            return i;
        }
        if let Some(&i) = legal
            .iter()
            .find(|&&i| matches!(hand[i].kind, CardKind::Skip | CardKind::Reverse))
        {
            return i;
        }

        let mut best: Option<(usize, u8)> = None;
        for &i in legal {
            if let CardKind::Number(rank) = hand[i].kind {
                if best.map_or(true, |(_, top)| rank > top) {
                    best = Some((i, rank));
                }
            }
        }
        if let Some((i, _)) = best {
            return i;
        }

        if let Some(&i) = legal.iter().find(|&&i| hand[i].is_wild()) {
            return i;
        }

        legal[0]
    }

    /// Declare a color for a wild: the most common color in the remaining
    /// hand, ties broken uniformly at random. A hand with no colored cards
    /// degenerates to a uniform choice among all four.
    #[must_use]
    pub fn choose_color(hand: &[Card], rng: &mut GameRng) -> Color {
        let mut counts = [0usize; 4];
        for card in hand {
            if let Some(color) = card.color {
                let slot = Color::ALL.iter().position(|c| *c == color);
                if let Some(slot) = slot {
                    counts[slot] += 1;
                }
            }
        }

        let top = counts.iter().copied().max().unwrap_or(0);
        let best: Vec<Color> = Color::ALL
            .iter()
            .zip(counts)
            .filter(|(_, n)| *n == top)
            .map(|(c, _)| *c)
            .collect();

        // `best` is never empty: every color reaches the max when all
        // counts are zero.
        *rng.choose(&best).unwrap_or(&Color::Red)
    }
}

/// An automated seat: `Heuristic` behind the `DecisionProvider` seam, with
/// its own forked RNG stream for tie-breaks.
pub struct AutoProvider {
    rng: GameRng,
}

impl AutoProvider {
    /// Create an automated seat from a forked RNG.
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }
}

impl DecisionProvider for AutoProvider {
    fn choose_action(&mut self, hand: &[Card], legal: &[usize]) -> TurnChoice {
        if legal.is_empty() {
            debug!("no legal move, drawing");
            return TurnChoice::Draw;
        }
        TurnChoice::Play(Heuristic::choose_card(hand, legal))
    }

    /// An automated seat never plays a card it just drew, even if legal.
    fn play_drawn_card(&mut self, _drawn: &Card) -> bool {
        false
    }

    fn choose_color(&mut self, hand: &[Card]) -> Color {
        Heuristic::choose_color(hand, &mut self.rng)
    }
}
