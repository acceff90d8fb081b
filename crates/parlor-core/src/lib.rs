//! Core data structures for the Parlor game engines.
//!
//! This crate provides the fundamental value types shared by the search,
//! generation, and session crates. It has no I/O and no randomness; every
//! type here is plain value data owned by the caller.
//!
//! # Overview
//!
//! The crate covers two game domains:
//!
//! 1. **Sudoku**: types for 9×9 digit grids
//!    - [`digit`]: type-safe representation of digits 1-9
//!    - [`position`]: (x, y) board coordinates
//!    - [`digit_set`]: a compact set of digits, used for candidate queries
//!    - [`digit_grid`]: the 9×9 grid itself, with row/column/box constraint
//!      checks, parsing, and printing
//!
//! 2. **Tic-tac-toe**: types for the 9-cell board
//!    - [`board`]: players, cells, the board, and win-line detection
//!
//! # Examples
//!
//! ```
//! use parlor_core::{Board, Digit, DigitGrid, Player, Position};
//!
//! // Sudoku: an empty grid accepts any digit anywhere
//! let grid = DigitGrid::new();
//! assert!(grid.placement_fits(Position::new(4, 4), Digit::D5));
//!
//! // Tic-tac-toe: three in a row wins
//! let mut board = Board::new();
//! board.place(0, Player::X);
//! board.place(1, Player::X);
//! board.place(2, Player::X);
//! assert_eq!(board.winner(), Some(Player::X));
//! ```

pub mod board;
pub mod digit;
pub mod digit_grid;
pub mod digit_set;
pub mod position;

// Re-export commonly used types
pub use self::{
    board::{Board, Player, WIN_LINES},
    digit::Digit,
    digit_grid::{DigitGrid, ParseGridError},
    digit_set::DigitSet,
    position::Position,
};
