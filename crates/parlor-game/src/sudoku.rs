//! A Sudoku game session.

use derive_more::{Display, Error};
use parlor_core::{Digit, DigitGrid, Position};
use parlor_generator::GeneratedPuzzle;

/// The state of a single cell in a [`SudokuGame`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    /// An empty cell the player has not filled yet.
    Empty,
    /// A clue from the puzzle; cannot be modified.
    Given(Digit),
    /// A digit entered by the player.
    Filled(Digit),
}

impl CellState {
    /// Returns the digit shown in this cell, if any.
    #[must_use]
    pub const fn digit(self) -> Option<Digit> {
        match self {
            Self::Empty => None,
            Self::Given(digit) | Self::Filled(digit) => Some(digit),
        }
    }
}

/// Error applying a player operation to a [`SudokuGame`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum SudokuError {
    /// The targeted cell is a given and cannot be changed.
    #[display("cell {position} is a given and cannot be modified")]
    CannotModifyGivenCell {
        /// The targeted position.
        position: Position,
    },
}

/// A Sudoku game session.
///
/// Created from a [`GeneratedPuzzle`], the session marks the puzzle's clues
/// as immutable givens and lets the player fill and clear the remaining
/// cells. The paired solution is stored for answer checking; it is the very
/// grid the puzzle was carved from, never recomputed.
///
/// # Examples
///
/// ```
/// use parlor_game::SudokuGame;
/// use parlor_generator::{Difficulty, PuzzleGenerator};
///
/// let puzzle = PuzzleGenerator::new(Difficulty::Easy).generate();
/// let game = SudokuGame::new(puzzle);
/// assert!(!game.is_complete());
/// assert!(!game.check_solution());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SudokuGame {
    cells: [CellState; 81],
    solution: DigitGrid,
}

impl SudokuGame {
    /// Creates a new game from a generated puzzle.
    ///
    /// Every filled cell of the puzzle's problem grid becomes a given;
    /// every empty cell starts as [`CellState::Empty`].
    #[must_use]
    pub fn new(puzzle: GeneratedPuzzle) -> Self {
        let GeneratedPuzzle {
            problem,
            solution,
            seed: _,
        } = puzzle;
        let mut cells = [CellState::Empty; 81];
        for pos in Position::all() {
            if let Some(digit) = problem.get(pos) {
                cells[pos.index()] = CellState::Given(digit);
            }
        }
        Self { cells, solution }
    }

    /// Returns the state of the cell at `pos`.
    #[must_use]
    pub const fn cell(&self, pos: Position) -> CellState {
        self.cells[pos.index()]
    }

    /// Returns the stored solution grid for this puzzle.
    #[must_use]
    pub const fn solution(&self) -> &DigitGrid {
        &self.solution
    }

    /// Enters a digit into a non-given cell, replacing any previous entry.
    ///
    /// # Errors
    ///
    /// Returns [`SudokuError::CannotModifyGivenCell`] if the cell is a given.
    pub fn set_digit(&mut self, pos: Position, digit: Digit) -> Result<(), SudokuError> {
        match self.cell(pos) {
            CellState::Given(_) => Err(SudokuError::CannotModifyGivenCell { position: pos }),
            CellState::Empty | CellState::Filled(_) => {
                self.cells[pos.index()] = CellState::Filled(digit);
                Ok(())
            }
        }
    }

    /// Clears a player-entered digit.
    ///
    /// Clearing an already-empty cell is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`SudokuError::CannotModifyGivenCell`] if the cell is a given.
    pub fn clear_cell(&mut self, pos: Position) -> Result<(), SudokuError> {
        match self.cell(pos) {
            CellState::Given(_) => Err(SudokuError::CannotModifyGivenCell { position: pos }),
            CellState::Empty | CellState::Filled(_) => {
                self.cells[pos.index()] = CellState::Empty;
                Ok(())
            }
        }
    }

    /// Returns the board as a plain grid: givens and player entries filled,
    /// everything else empty.
    #[must_use]
    pub fn to_grid(&self) -> DigitGrid {
        let mut grid = DigitGrid::new();
        for pos in Position::all() {
            grid.set(pos, self.cell(pos).digit());
        }
        grid
    }

    /// Returns `true` if every cell shows a digit.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(|cell| cell.digit().is_some())
    }

    /// Checks the player's board against the stored solution.
    ///
    /// Cell-by-cell equality: any empty cell fails the check, as does any
    /// digit differing from the solution.
    #[must_use]
    pub fn check_solution(&self) -> bool {
        Position::all().all(|pos| self.cell(pos).digit() == self.solution.get(pos))
    }
}
