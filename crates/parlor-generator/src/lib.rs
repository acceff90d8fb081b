//! Sudoku puzzle generation.
//!
//! A puzzle is produced in two phases:
//!
//! 1. **Fill**: an empty grid is completed into a random valid solution by
//!    backtracking, trying digits in a shuffled order at each cell.
//! 2. **Carve**: clues are removed from a copy of the solution one at a
//!    time. After each tentative removal the
//!    [uniqueness oracle](parlor_solver::has_unique_solution) is consulted;
//!    removals that would allow a second solution are rolled back. The
//!    result is guaranteed to have exactly one completion, and that
//!    completion is the solution the puzzle is paired with.
//!
//! Generation is driven entirely by a [`PuzzleSeed`]: the same seed always
//! yields the same puzzle, which is what the benchmarks and regression
//! tests rely on. [`PuzzleGenerator::generate`] draws a fresh seed per call.
//!
//! # Examples
//!
//! ```
//! use parlor_generator::{Difficulty, PuzzleGenerator};
//! use parlor_solver::has_unique_solution;
//!
//! let generator = PuzzleGenerator::new(Difficulty::Easy);
//! let puzzle = generator.generate();
//!
//! assert!(puzzle.solution.is_solved_grid());
//! assert!(has_unique_solution(&puzzle.problem));
//! ```

pub use self::{
    difficulty::Difficulty,
    generate::{GeneratedPuzzle, PuzzleGenerator},
    seed::{ParseSeedError, PuzzleSeed},
};

mod difficulty;
mod generate;
mod seed;
