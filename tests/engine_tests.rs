//! Full-game tests driving the turn engine through scripted seats and
//! rigged decks.
//!
//! Deal order when rigging a deck: draws pop from the end, seat 0 is dealt
//! first, and the starting card is flipped after all hands are dealt. So a
//! pile is laid out bottom-to-top as
//! `[spare draws..., flip card, seat1 hand (reversed), seat0 hand (reversed)]`.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use uno_engine::{
    Card, CardKind, Color, DecisionProvider, Deck, EngineError, GameBuilder, GameObserver, Player,
    PlayerId, TurnChoice, TurnOutcome,
};

/// Scripted seat: replays queued answers, then falls back to drawing.
struct Scripted {
    actions: VecDeque<TurnChoice>,
    play_drawn: VecDeque<bool>,
    colors: VecDeque<Color>,
}

impl Scripted {
    fn new(actions: impl IntoIterator<Item = TurnChoice>) -> Self {
        Self {
            actions: actions.into_iter().collect(),
            play_drawn: VecDeque::new(),
            colors: VecDeque::new(),
        }
    }

    fn with_play_drawn(mut self, answers: impl IntoIterator<Item = bool>) -> Self {
        self.play_drawn = answers.into_iter().collect();
        self
    }

    fn with_colors(mut self, colors: impl IntoIterator<Item = Color>) -> Self {
        self.colors = colors.into_iter().collect();
        self
    }
}

impl DecisionProvider for Scripted {
    fn choose_action(&mut self, _hand: &[Card], _legal: &[usize]) -> TurnChoice {
        self.actions.pop_front().unwrap_or(TurnChoice::Draw)
    }

    fn play_drawn_card(&mut self, _drawn: &Card) -> bool {
        self.play_drawn.pop_front().unwrap_or(false)
    }

    fn choose_color(&mut self, _hand: &[Card]) -> Color {
        self.colors.pop_front().unwrap_or(Color::Red)
    }
}

/// Observer that records event names for assertions.
#[derive(Clone, Default)]
struct Recorder {
    events: Rc<RefCell<Vec<String>>>,
}

impl Recorder {
    fn events(&self) -> Vec<String> {
        self.events.borrow().clone()
    }

    fn push(&self, event: String) {
        self.events.borrow_mut().push(event);
    }
}

impl GameObserver for Recorder {
    fn card_played(&mut self, player: &Player, card: &Card, _active_color: Color) {
        self.push(format!("played {} {card}", player.id()));
    }

    fn cards_drawn(&mut self, player: &Player, count: u8) {
        self.push(format!("drew {} {count}", player.id()));
    }

    fn penalty_drawn(&mut self, player: &Player, count: u8) {
        self.push(format!("penalty {} {count}", player.id()));
    }

    fn turn_skipped(&mut self, player: &Player) {
        self.push(format!("skipped {}", player.id()));
    }

    fn color_declared(&mut self, player: &Player, color: Color) {
        self.push(format!("color {} {color}", player.id()));
    }

    fn play_rejected(&mut self, player: &Player) {
        self.push(format!("rejected {}", player.id()));
    }

    fn game_won(&mut self, player: &Player) {
        self.push(format!("won {}", player.id()));
    }
}

#[test]
fn win_check_precedes_pending_draw_resolution() {
    // Seat 0 holds a single Draw Two and plays it; the game must end
    // before seat 1 is made to draw the penalty.
    let deck = Deck::from_cards(vec![
        Card::number(Color::Red, 5),               // flip
        Card::number(Color::Blue, 3),              // seat 1 hand
        Card::action(Color::Red, CardKind::DrawTwo), // seat 0 hand
    ]);

    let mut game = GameBuilder::new()
        .seat("you", Box::new(Scripted::new([TurnChoice::Play(0)])))
        .seat("rival", Box::new(Scripted::new([])))
        .starting_hand_size(1)
        .deck(deck)
        .build(0)
        .unwrap();

    let outcome = game.run().unwrap();
    assert_eq!(outcome.winner, PlayerId::new(0));
    assert_eq!(game.winner(), Some(PlayerId::new(0)));

    // The penalty was never applied: seat 1 still has one card and the
    // debt is still on the table.
    assert_eq!(game.player(PlayerId::new(1)).hand_size(), 1);
    assert_eq!(game.state().pending_draw, 2);
}

#[test]
fn deck_exhaustion_is_fatal_not_a_loop() {
    // Nothing left to draw after the deal and flip; seat 0 has no legal
    // move scripted and asks to draw.
    let deck = Deck::from_cards(vec![
        Card::number(Color::Red, 5),  // flip
        Card::number(Color::Blue, 3), // seat 1
        Card::number(Color::Blue, 7), // seat 0 (illegal vs Red 5)
    ]);

    let mut game = GameBuilder::new()
        .seat("you", Box::new(Scripted::new([TurnChoice::Draw])))
        .seat("rival", Box::new(Scripted::new([])))
        .starting_hand_size(1)
        .deck(deck)
        .build(0)
        .unwrap();

    assert_eq!(game.deck_size(), 0);
    let err = game.play_turn().unwrap_err();
    assert!(matches!(err, EngineError::DeckExhausted(_)));
}

#[test]
fn illegal_choices_are_rerequested_without_advancing() {
    // Seat 0's only card doesn't match; it tries an illegal play, then an
    // out-of-range index, then draws. All within one turn.
    let deck = Deck::from_cards(vec![
        Card::number(Color::Green, 9), // spare draw (also illegal vs Red 5)
        Card::number(Color::Red, 5),   // flip
        Card::number(Color::Blue, 3),  // seat 1
        Card::number(Color::Blue, 7),  // seat 0
    ]);

    let recorder = Recorder::default();
    let mut game = GameBuilder::new()
        .seat(
            "you",
            Box::new(Scripted::new([
                TurnChoice::Play(0),
                TurnChoice::Play(7),
                TurnChoice::Draw,
            ])),
        )
        .seat("rival", Box::new(Scripted::new([])))
        .starting_hand_size(1)
        .deck(deck)
        .build(0)
        .unwrap();
    game.add_observer(Box::new(recorder.clone()));

    assert_eq!(game.play_turn().unwrap(), TurnOutcome::Continued);

    // One turn consumed, one card drawn, two rejections recorded.
    assert_eq!(game.current_player(), PlayerId::new(1));
    assert_eq!(game.player(PlayerId::new(0)).hand_size(), 2);
    let rejections = recorder
        .events()
        .iter()
        .filter(|e| e.starts_with("rejected"))
        .count();
    assert_eq!(rejections, 2);
}

#[test]
fn drawn_card_may_be_played_immediately() {
    // Seat 0 draws a Red 9, which matches the active color, and accepts
    // the offer to play it.
    let deck = Deck::from_cards(vec![
        Card::number(Color::Red, 9),  // spare draw, legal vs Red 5
        Card::number(Color::Red, 5),  // flip
        Card::number(Color::Blue, 3), // seat 1
        Card::number(Color::Blue, 7), // seat 0
    ]);

    let mut game = GameBuilder::new()
        .seat(
            "you",
            Box::new(Scripted::new([TurnChoice::Draw]).with_play_drawn([true])),
        )
        .seat("rival", Box::new(Scripted::new([])))
        .starting_hand_size(1)
        .deck(deck)
        .build(0)
        .unwrap();

    assert_eq!(game.play_turn().unwrap(), TurnOutcome::Continued);
    assert_eq!(game.state().top_card, Card::number(Color::Red, 9));
    assert_eq!(game.player(PlayerId::new(0)).hand_size(), 1);
}

#[test]
fn declined_drawn_card_stays_in_hand() {
    let deck = Deck::from_cards(vec![
        Card::number(Color::Red, 9),  // spare draw, legal vs Red 5
        Card::number(Color::Red, 5),  // flip
        Card::number(Color::Blue, 3), // seat 1
        Card::number(Color::Blue, 7), // seat 0
    ]);

    let mut game = GameBuilder::new()
        .seat(
            "you",
            Box::new(Scripted::new([TurnChoice::Draw]).with_play_drawn([false])),
        )
        .seat("rival", Box::new(Scripted::new([])))
        .starting_hand_size(1)
        .deck(deck)
        .build(0)
        .unwrap();

    assert_eq!(game.play_turn().unwrap(), TurnOutcome::Continued);
    assert_eq!(game.state().top_card, Card::number(Color::Red, 5));
    assert_eq!(game.player(PlayerId::new(0)).hand_size(), 2);
}

#[test]
fn skip_card_skips_the_next_seat() {
    let deck = Deck::from_cards(vec![
        Card::number(Color::Red, 5),            // flip
        Card::number(Color::Blue, 4),           // seat 1 hand[1]
        Card::number(Color::Blue, 3),           // seat 1 hand[0]
        Card::number(Color::Blue, 1),           // seat 0 hand[1]
        Card::action(Color::Red, CardKind::Skip), // seat 0 hand[0]
    ]);

    let recorder = Recorder::default();
    let mut game = GameBuilder::new()
        .seat("you", Box::new(Scripted::new([TurnChoice::Play(0)])))
        .seat("rival", Box::new(Scripted::new([])))
        .starting_hand_size(2)
        .deck(deck)
        .build(0)
        .unwrap();
    game.add_observer(Box::new(recorder.clone()));

    assert_eq!(game.play_turn().unwrap(), TurnOutcome::Continued);

    // Seat 1 was skipped; seat 0 acts again.
    assert_eq!(game.current_player(), PlayerId::new(0));
    assert!(recorder.events().contains(&"skipped Player 1".to_string()));
    assert!(!game.state().skip_next);
}

#[test]
fn reverse_acts_as_skip_with_three_seats() {
    // Turn direction never changes: with three seats, Reverse from seat 0
    // skips seat 1 and play lands on seat 2.
    let deck = Deck::from_cards(vec![
        Card::number(Color::Red, 5),               // flip
        Card::number(Color::Blue, 8),              // seat 2 hand[1]
        Card::number(Color::Blue, 7),              // seat 2 hand[0]
        Card::number(Color::Blue, 4),              // seat 1 hand[1]
        Card::number(Color::Blue, 3),              // seat 1 hand[0]
        Card::number(Color::Blue, 1),              // seat 0 hand[1]
        Card::action(Color::Red, CardKind::Reverse), // seat 0 hand[0]
    ]);

    let mut game = GameBuilder::new()
        .seat("a", Box::new(Scripted::new([TurnChoice::Play(0)])))
        .seat("b", Box::new(Scripted::new([])))
        .seat("c", Box::new(Scripted::new([])))
        .starting_hand_size(2)
        .deck(deck)
        .build(0)
        .unwrap();

    assert_eq!(game.play_turn().unwrap(), TurnOutcome::Continued);
    assert_eq!(game.current_player(), PlayerId::new(2));
}

#[test]
fn draw_two_penalty_is_applied_then_seat_skipped() {
    let deck = Deck::from_cards(vec![
        Card::number(Color::Green, 6),               // penalty draw
        Card::number(Color::Green, 2),               // penalty draw
        Card::number(Color::Red, 5),                 // flip
        Card::number(Color::Blue, 4),                // seat 1 hand[1]
        Card::number(Color::Blue, 3),                // seat 1 hand[0]
        Card::number(Color::Blue, 1),                // seat 0 hand[1]
        Card::action(Color::Red, CardKind::DrawTwo), // seat 0 hand[0]
    ]);

    let recorder = Recorder::default();
    let mut game = GameBuilder::new()
        .seat("you", Box::new(Scripted::new([TurnChoice::Play(0)])))
        .seat("rival", Box::new(Scripted::new([])))
        .starting_hand_size(2)
        .deck(deck)
        .build(0)
        .unwrap();
    game.add_observer(Box::new(recorder.clone()));

    assert_eq!(game.play_turn().unwrap(), TurnOutcome::Continued);

    // Penalty resolved before the next decision point, debt zeroed, and
    // the penalized seat lost its turn.
    assert_eq!(game.player(PlayerId::new(1)).hand_size(), 4);
    assert_eq!(game.state().pending_draw, 0);
    assert_eq!(game.current_player(), PlayerId::new(0));
    assert!(recorder.events().contains(&"penalty Player 1 2".to_string()));
    assert!(recorder.events().contains(&"skipped Player 1".to_string()));
}

#[test]
fn wild_declaration_sets_active_color_from_remaining_hand_owner() {
    let deck = Deck::from_cards(vec![
        Card::number(Color::Red, 5),   // flip
        Card::number(Color::Blue, 4),  // seat 1 hand[1]
        Card::number(Color::Blue, 3),  // seat 1 hand[0]
        Card::number(Color::Green, 1), // seat 0 hand[1]
        Card::wild(),                  // seat 0 hand[0]
    ]);

    let recorder = Recorder::default();
    let mut game = GameBuilder::new()
        .seat(
            "you",
            Box::new(Scripted::new([TurnChoice::Play(0)]).with_colors([Color::Green])),
        )
        .seat("rival", Box::new(Scripted::new([])))
        .starting_hand_size(2)
        .deck(deck)
        .build(0)
        .unwrap();
    game.add_observer(Box::new(recorder.clone()));

    assert_eq!(game.play_turn().unwrap(), TurnOutcome::Continued);

    assert_eq!(game.state().top_card, Card::wild());
    assert_eq!(game.state().top_card.color, None);
    assert_eq!(game.state().active_color, Color::Green);
    assert!(recorder.events().contains(&"color Player 0 Green".to_string()));
}

#[test]
fn automated_games_terminate() {
    for seed in [1, 7, 42, 1234, 987_654] {
        let mut game = GameBuilder::new()
            .auto_seat("alpha")
            .auto_seat("beta")
            .build(seed)
            .unwrap();

        let mut ended = false;
        for _ in 0..1000 {
            match game.play_turn() {
                Ok(TurnOutcome::Continued) => {}
                Ok(TurnOutcome::Won(_)) => {
                    ended = true;
                    break;
                }
                // Without discard recycling the pile can run dry; that is
                // a legitimate terminal state, not a hang.
                Err(EngineError::DeckExhausted(_)) => {
                    ended = true;
                    break;
                }
                Err(err) => panic!("unexpected error: {err}"),
            }
        }
        assert!(ended, "seed {seed} did not terminate within 1000 turns");
    }
}

#[test]
fn automated_games_are_deterministic_by_seed() {
    let run = |seed: u64| {
        let mut game = GameBuilder::new()
            .auto_seat("alpha")
            .auto_seat("beta")
            .build(seed)
            .unwrap();
        let mut turns = 0u32;
        loop {
            match game.play_turn() {
                Ok(TurnOutcome::Continued) => turns += 1,
                Ok(TurnOutcome::Won(winner)) => return (Some(winner), turns),
                Err(_) => return (None, turns),
            }
        }
    };

    assert_eq!(run(2024), run(2024));
}

#[test]
fn four_seat_game_runs() {
    let mut game = GameBuilder::new()
        .auto_seat("a")
        .auto_seat("b")
        .auto_seat("c")
        .auto_seat("d")
        .build(5)
        .unwrap();

    assert_eq!(game.players().len(), 4);
    // 108 - 4 * 7 dealt - 1 flipped; reflips return what they draw.
    assert_eq!(game.deck_size(), 79);

    for _ in 0..50 {
        match game.play_turn() {
            Ok(TurnOutcome::Continued) => {}
            Ok(TurnOutcome::Won(_)) | Err(_) => break,
        }
    }
}

#[test]
fn builder_rejects_bad_seat_counts() {
    let err = GameBuilder::new().auto_seat("solo").build(0).unwrap_err();
    assert!(matches!(err, EngineError::BadSeatCount(1)));
}
