//! Game session state for the Parlor games.
//!
//! The engine crates are pure functions over boards and grids; this crate
//! supplies the stateful layer a frontend talks to:
//!
//! - [`SudokuGame`] tracks a generated puzzle's given cells and the player's
//!   own entries, and checks a finished board against the stored solution.
//! - [`TicTacToe`] tracks an alternating-turn match and asks the search
//!   engine for the automated opponent's replies.
//!
//! # Examples
//!
//! ```
//! use parlor_game::{Outcome, TicTacToe};
//! use parlor_core::Player;
//!
//! let mut game = TicTacToe::new(Player::X);
//! game.play(4).unwrap();
//! assert_eq!(game.outcome(), Outcome::InProgress);
//!
//! // The engine answers for O
//! let reply = game.engine_move().unwrap();
//! assert_ne!(reply, 4);
//! ```

pub use self::{
    sudoku::{CellState, SudokuError, SudokuGame},
    tic_tac_toe::{Outcome, TicTacToe, TicTacToeError},
};

mod sudoku;
mod tic_tac_toe;
