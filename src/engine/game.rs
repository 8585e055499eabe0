//! The turn engine: authoritative game state and the
//! play-draw-advance-skip cycle.
//!
//! `GameBuilder` wires seats to decision providers and deals the opening
//! position; `Game::play_turn` runs one full turn of the state machine;
//! `Game::run` loops turns to the win condition or a fatal deck
//! exhaustion.

use log::{debug, info, warn};
use thiserror::Error;

use crate::ai::AutoProvider;
use crate::cards::{Deck, DeckExhausted};
use crate::core::{GameRng, Player, PlayerId, TableState};
use crate::effects::resolve;
use crate::rules::{legal_moves, matches};

use super::observer::GameObserver;
use super::provider::{DecisionProvider, TurnChoice};

/// Fatal engine errors. Invalid player input never reaches this level; it
/// is re-requested at the provider boundary.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The draw pile ran out. There is no discard-pile recycling, so this
    /// ends the run.
    #[error(transparent)]
    DeckExhausted(#[from] DeckExhausted),

    /// A game needs between 2 and 10 seats.
    #[error("a game needs 2-10 seats, got {0}")]
    BadSeatCount(usize),
}

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameOutcome {
    /// The seat whose hand reached zero.
    pub winner: PlayerId,
}

/// Result of a single turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The game continues with the next player.
    Continued,
    /// This turn's play emptied a hand; the game is over.
    Won(PlayerId),
}

enum SeatProvider {
    External(Box<dyn DecisionProvider>),
    Auto,
}

/// Builder for a game: seats, hand size, and an optional rigged deck.
pub struct GameBuilder {
    seats: Vec<(String, SeatProvider)>,
    starting_hand_size: usize,
    deck: Option<Deck>,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self {
            seats: Vec::new(),
            starting_hand_size: 7,
            deck: None,
        }
    }
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a seat driven by the given provider (console, script, ...).
    /// Seats act in the order they are added.
    pub fn seat(mut self, name: impl Into<String>, provider: Box<dyn DecisionProvider>) -> Self {
        self.seats.push((name.into(), SeatProvider::External(provider)));
        self
    }

    /// Add an automated seat driven by the built-in heuristic.
    pub fn auto_seat(mut self, name: impl Into<String>) -> Self {
        self.seats.push((name.into(), SeatProvider::Auto));
        self
    }

    /// Cards dealt to each seat at setup (default 7).
    pub fn starting_hand_size(mut self, size: usize) -> Self {
        assert!(size >= 1, "Each seat needs at least one card");
        self.starting_hand_size = size;
        self
    }

    /// Replace the shuffled standard deck with a fixed pile. The pile is
    /// used as given (no shuffle); the top is the end of the sequence.
    pub fn deck(mut self, deck: Deck) -> Self {
        self.deck = Some(deck);
        self
    }

    /// Deal the opening position: shuffle (unless a deck was injected),
    /// give each seat its starting hand, and flip the first Number card.
    pub fn build(self, seed: u64) -> Result<Game, EngineError> {
        let seat_count = self.seats.len();
        if !(2..=10).contains(&seat_count) {
            return Err(EngineError::BadSeatCount(seat_count));
        }

        let mut rng = GameRng::new(seed);
        let mut deck = match self.deck {
            Some(deck) => deck,
            None => Deck::standard(&mut rng),
        };

        let mut players = Vec::with_capacity(seat_count);
        let mut providers: Vec<Box<dyn DecisionProvider>> = Vec::with_capacity(seat_count);
        for (index, (name, seat)) in self.seats.into_iter().enumerate() {
            players.push(Player::new(PlayerId::new(index as u8), name));
            providers.push(match seat {
                SeatProvider::External(provider) => provider,
                SeatProvider::Auto => Box::new(AutoProvider::new(rng.fork())),
            });
        }

        for player in &mut players {
            player.draw_from(&mut deck, self.starting_hand_size)?;
        }

        let (top_card, active_color) = deck.flip_starting_card(&mut rng)?;
        info!("game starts on {top_card}, {seat_count} seats");

        Ok(Game {
            deck,
            players,
            providers,
            state: TableState::new(top_card, active_color),
            observers: Vec::new(),
            turn: 0,
            winner: None,
        })
    }
}

/// A running game. Owns the deck, the players, and the table state; one
/// turn is atomic and nothing outside the engine mutates shared state.
pub struct Game {
    deck: Deck,
    players: Vec<Player>,
    providers: Vec<Box<dyn DecisionProvider>>,
    state: TableState,
    observers: Vec<Box<dyn GameObserver>>,
    turn: usize,
    winner: Option<PlayerId>,
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("deck", &self.deck)
            .field("players", &self.players)
            .field("state", &self.state)
            .field("turn", &self.turn)
            .field("winner", &self.winner)
            .finish_non_exhaustive()
    }
}

impl Game {
    /// Subscribe an observer to narration events.
    pub fn add_observer(&mut self, observer: Box<dyn GameObserver>) {
        self.observers.push(observer);
    }

    /// The table state.
    #[must_use]
    pub fn state(&self) -> &TableState {
        &self.state
    }

    /// All players, in turn order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// A player by seat ID.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    /// The seat about to act.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        PlayerId::new((self.turn % self.players.len()) as u8)
    }

    /// Cards left in the draw pile.
    pub fn deck_size(&self) -> usize {
        self.deck.len()
    }

    /// The winner, once a hand has emptied.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    /// Run turns until a player wins or the deck runs out.
    pub fn run(&mut self) -> Result<GameOutcome, EngineError> {
        loop {
            if let TurnOutcome::Won(winner) = self.play_turn()? {
                return Ok(GameOutcome { winner });
            }
        }
    }

    /// Play one full turn for the current seat.
    ///
    /// Protocol: ask the seat's provider to draw or play, re-requesting
    /// until the choice is valid; resolve a played card's effect; check
    /// the win condition immediately after the play, before any pending
    /// draw is applied or the turn advances; then resolve the pending
    /// penalty against the following seat and advance, honoring the
    /// one-shot skip flag.
    pub fn play_turn(&mut self) -> Result<TurnOutcome, EngineError> {
        let idx = self.turn % self.players.len();
        let legal = legal_moves(
            self.players[idx].hand(),
            &self.state.top_card,
            self.state.active_color,
        );
        for obs in &mut self.observers {
            obs.turn_started(&self.players[idx], &self.state.top_card, self.state.active_color);
        }
        debug!(
            "{}: {} cards, {} legal",
            self.players[idx].name(),
            self.players[idx].hand_size(),
            legal.len()
        );

        let played = loop {
            match self.providers[idx].choose_action(self.players[idx].hand(), &legal) {
                TurnChoice::Play(i) => {
                    let hand = self.players[idx].hand();
                    if i < hand.len()
                        && matches(&hand[i], &self.state.top_card, self.state.active_color)
                    {
                        break Some(self.players[idx].remove(i));
                    }
                    // Provider output is untrusted; ask the same seat again.
                    warn!("{} chose an illegal card, re-requesting", self.players[idx].name());
                    for obs in &mut self.observers {
                        obs.play_rejected(&self.players[idx]);
                    }
                }
                TurnChoice::Draw => {
                    let drawn = self.deck.draw()?;
                    self.players[idx].give(drawn);
                    debug!("{} drew a card", self.players[idx].name());
                    for obs in &mut self.observers {
                        obs.cards_drawn(&self.players[idx], 1);
                    }
                    if matches(&drawn, &self.state.top_card, self.state.active_color)
                        && self.providers[idx].play_drawn_card(&drawn)
                    {
                        break self.players[idx].take_last();
                    }
                    break None;
                }
            }
        };

        if let Some(card) = played {
            let declared = if card.is_wild() {
                let color = self.providers[idx].choose_color(self.players[idx].hand());
                for obs in &mut self.observers {
                    obs.color_declared(&self.players[idx], color);
                }
                Some(color)
            } else {
                None
            };

            resolve(card, declared, &mut self.state);
            info!(
                "{} played {card}, active color {}",
                self.players[idx].name(),
                self.state.active_color
            );
            for obs in &mut self.observers {
                obs.card_played(&self.players[idx], &self.state.top_card, self.state.active_color);
            }

            // Win check precedes pending-draw resolution and advancement.
            if self.players[idx].has_won() {
                let winner = self.players[idx].id();
                self.winner = Some(winner);
                info!("{} won", self.players[idx].name());
                for obs in &mut self.observers {
                    obs.game_won(&self.players[idx]);
                }
                return Ok(TurnOutcome::Won(winner));
            }
        }

        if let Some(owed) = self.state.take_pending() {
            let next = (self.turn + 1) % self.players.len();
            self.players[next].draw_from(&mut self.deck, owed as usize)?;
            info!("{} drew {owed} penalty cards", self.players[next].name());
            for obs in &mut self.observers {
                obs.penalty_drawn(&self.players[next], owed);
            }
        }

        self.turn = (self.turn + 1) % self.players.len();
        if self.state.take_skip() {
            let skipped = self.turn;
            info!("{}'s turn skipped", self.players[skipped].name());
            for obs in &mut self.observers {
                obs.turn_skipped(&self.players[skipped]);
            }
            self.turn = (self.turn + 1) % self.players.len();
        }

        Ok(TurnOutcome::Continued)
    }
}
