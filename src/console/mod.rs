//! Console driver: a prompt-loop decision provider and a narration
//! renderer.
//!
//! This is thin I/O glue over the engine's seams. Malformed input is
//! recoverable and stays local to this boundary: the prompt loops until it
//! gets something parseable, and the engine separately re-validates every
//! index it receives. No rules logic lives here.

use std::io::{self, BufRead, Write};

use log::debug;

use crate::cards::{Card, Color};
use crate::core::Player;
use crate::engine::{DecisionProvider, GameObserver, TurnChoice};

/// Interactive seat reading decisions from stdin.
///
/// Prompts follow the classic convention: cards are listed 1-based and
/// `0` means draw. On end of input the provider falls back to drawing,
/// so a closed stdin cannot wedge the game.
#[derive(Default)]
pub struct ConsoleProvider;

impl ConsoleProvider {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn read_line(&self) -> Option<String> {
        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim().to_string()),
        }
    }

    fn prompt(&self, text: &str) -> Option<String> {
        print!("{text}");
        let _ = io::stdout().flush();
        self.read_line()
    }
}

impl DecisionProvider for ConsoleProvider {
    fn choose_action(&mut self, hand: &[Card], _legal: &[usize]) -> TurnChoice {
        println!("Your hand:");
        for (i, card) in hand.iter().enumerate() {
            println!("  {}. {card}", i + 1);
        }

        loop {
            let Some(input) = self.prompt("Enter card number or 0 to draw: ") else {
                debug!("stdin closed, drawing");
                return TurnChoice::Draw;
            };
            match input.parse::<usize>() {
                Ok(0) => return TurnChoice::Draw,
                // 1-based on screen; the engine validates range and legality.
                Ok(n) => return TurnChoice::Play(n - 1),
                Err(_) => println!("Invalid input."),
            }
        }
    }

    fn play_drawn_card(&mut self, drawn: &Card) -> bool {
        loop {
            let Some(input) = self.prompt(&format!("You drew: {drawn}. Play it? (y/n): ")) else {
                return false;
            };
            match input.to_ascii_lowercase().as_str() {
                "y" | "yes" => return true,
                "n" | "no" => return false,
                _ => println!("Please answer y or n."),
            }
        }
    }

    fn choose_color(&mut self, _hand: &[Card]) -> Color {
        loop {
            let Some(input) = self.prompt("Choose color (Red, Blue, Green, Yellow): ") else {
                return Color::Red;
            };
            match input.parse::<Color>() {
                Ok(color) => return color,
                Err(err) => println!("{err}. Try again."),
            }
        }
    }
}

/// Prints narration to stdout.
#[derive(Default)]
pub struct ConsoleObserver;

impl ConsoleObserver {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl GameObserver for ConsoleObserver {
    fn turn_started(&mut self, _player: &Player, top_card: &Card, active_color: Color) {
        println!();
        println!("Top card: {top_card} (Active color: {active_color})");
    }

    fn card_played(&mut self, player: &Player, card: &Card, _active_color: Color) {
        println!("{} played: {card}", player.name());
        println!("{} has {} cards left.", player.name(), player.hand_size());
    }

    fn cards_drawn(&mut self, player: &Player, _count: u8) {
        println!("{} drew a card.", player.name());
    }

    fn penalty_drawn(&mut self, player: &Player, count: u8) {
        println!("{} drew {count} cards!", player.name());
    }

    fn turn_skipped(&mut self, player: &Player) {
        println!("{}'s turn skipped!", player.name());
    }

    fn color_declared(&mut self, player: &Player, color: Color) {
        println!("{} chose color: {color}", player.name());
    }

    fn play_rejected(&mut self, _player: &Player) {
        println!("Invalid move!");
    }

    fn game_won(&mut self, player: &Player) {
        println!("{} won!", player.name());
    }
}
