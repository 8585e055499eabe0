//! Interactive two-seat game: you against the heuristic opponent.

use uno_engine::console::{ConsoleObserver, ConsoleProvider};
use uno_engine::GameBuilder;

fn main() {
    println!("Starting UNO");

    let seed = rand::random();
    let game = GameBuilder::new()
        .seat("You", Box::new(ConsoleProvider::new()))
        .auto_seat("Computer")
        .build(seed);

    let mut game = match game {
        Ok(game) => game,
        Err(err) => {
            eprintln!("Failed to set up game: {err}");
            std::process::exit(1);
        }
    };
    game.add_observer(Box::new(ConsoleObserver::new()));

    // The observer announces the winner; a dead deck is the only way out
    // with an error.
    if let Err(err) = game.run() {
        eprintln!("Game over: {err}");
        std::process::exit(1);
    }
}
