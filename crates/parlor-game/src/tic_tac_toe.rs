//! A tic-tac-toe match session.

use derive_more::{Display, Error};
use parlor_core::{Board, Player};
use parlor_minimax::best_move;

/// The result of a match so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Cells remain and nobody has won.
    InProgress,
    /// The given player completed a line.
    Win(Player),
    /// The board is full with no winner.
    Draw,
}

/// Error applying a move to a [`TicTacToe`] match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum TicTacToeError {
    /// The targeted cell already holds a mark.
    #[display("cell {index} is already occupied")]
    CellOccupied {
        /// The targeted cell index.
        index: usize,
    },
    /// The match has already been won or drawn.
    #[display("the match is over")]
    MatchOver,
}

/// An alternating-turn tic-tac-toe match.
///
/// Tracks the board and whose turn it is. Moves are validated: playing an
/// occupied cell or moving after the match has ended is rejected. Either
/// side can be handed to the search engine via
/// [`engine_move`](Self::engine_move), which plays the optimal move for
/// the player whose turn it is.
///
/// # Examples
///
/// ```
/// use parlor_core::Player;
/// use parlor_game::{Outcome, TicTacToe};
///
/// let mut game = TicTacToe::new(Player::X);
/// game.play(0).unwrap();
/// assert_eq!(game.turn(), Player::O);
/// assert_eq!(game.outcome(), Outcome::InProgress);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicTacToe {
    board: Board,
    turn: Player,
}

impl TicTacToe {
    /// Starts a match with an empty board and `first` to move.
    #[must_use]
    pub const fn new(first: Player) -> Self {
        Self {
            board: Board::new(),
            turn: first,
        }
    }

    /// Returns the current board.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is.
    #[must_use]
    pub const fn turn(&self) -> Player {
        self.turn
    }

    /// Returns the match result so far.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        if let Some(winner) = self.board.winner() {
            Outcome::Win(winner)
        } else if self.board.is_full() {
            Outcome::Draw
        } else {
            Outcome::InProgress
        }
    }

    /// Plays the current player's mark at `index` and passes the turn.
    ///
    /// # Errors
    ///
    /// Returns [`TicTacToeError::MatchOver`] if the match has ended, or
    /// [`TicTacToeError::CellOccupied`] if the cell is taken.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-8.
    pub fn play(&mut self, index: usize) -> Result<(), TicTacToeError> {
        if self.outcome() != Outcome::InProgress {
            return Err(TicTacToeError::MatchOver);
        }
        if self.board.cell(index).is_some() {
            return Err(TicTacToeError::CellOccupied { index });
        }
        self.board.place(index, self.turn);
        self.turn = self.turn.opponent();
        Ok(())
    }

    /// Lets the search engine play the current player's turn.
    ///
    /// Returns the cell index the engine chose, or `None` if the match is
    /// already over.
    pub fn engine_move(&mut self) -> Option<usize> {
        if self.outcome() != Outcome::InProgress {
            return None;
        }
        let index = best_move(&self.board, self.turn)?;
        self.board.place(index, self.turn);
        self.turn = self.turn.opponent();
        Some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alternating_turns() {
        let mut game = TicTacToe::new(Player::X);
        game.play(0).unwrap();
        assert_eq!(game.turn(), Player::O);
        game.play(4).unwrap();
        assert_eq!(game.turn(), Player::X);
        assert_eq!(game.board().cell(0), Some(Player::X));
        assert_eq!(game.board().cell(4), Some(Player::O));
    }

    #[test]
    fn test_rejects_occupied_cell() {
        let mut game = TicTacToe::new(Player::X);
        game.play(0).unwrap();
        assert_eq!(game.play(0), Err(TicTacToeError::CellOccupied { index: 0 }));
        // The failed move does not consume the turn
        assert_eq!(game.turn(), Player::O);
    }

    #[test]
    fn test_rejects_moves_after_win() {
        let mut game = TicTacToe::new(Player::X);
        for index in [0, 3, 1, 4, 2] {
            game.play(index).unwrap();
        }
        assert_eq!(game.outcome(), Outcome::Win(Player::X));
        assert_eq!(game.play(8), Err(TicTacToeError::MatchOver));
        assert_eq!(game.engine_move(), None);
    }

    #[test]
    fn test_engine_blocks_threat() {
        let mut game = TicTacToe::new(Player::X);
        game.play(0).unwrap(); // X
        game.play(4).unwrap(); // O
        game.play(1).unwrap(); // X threatens 0-1-2
        assert_eq!(game.engine_move(), Some(2));
        assert_eq!(game.board().cell(2), Some(Player::O));
    }

    #[test]
    fn test_engine_self_play_draws() {
        let mut game = TicTacToe::new(Player::X);
        while game.engine_move().is_some() {}
        assert_eq!(game.outcome(), Outcome::Draw);
    }
}
