//! Example pitting the search engine against itself.
//!
//! Both sides play optimally, so the match always ends in a draw; the
//! board is printed after every move. Run with `RUST_LOG=debug` to see the
//! engine's move scores.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example self_play
//! ```

use parlor_core::Player;
use parlor_game::{Outcome, TicTacToe};

fn main() {
    env_logger::init();

    let mut game = TicTacToe::new(Player::X);
    let mut ply = 0;
    loop {
        let mover = game.turn();
        let Some(index) = game.engine_move() else {
            break;
        };
        ply += 1;
        println!("{ply}. {mover} plays {index}");
        println!("{}", game.board());
        println!();
    }

    match game.outcome() {
        Outcome::Draw => println!("Draw, as optimal play demands."),
        Outcome::Win(player) => println!("{player} wins."),
        Outcome::InProgress => unreachable!("engine stopped mid-game"),
    }
}
