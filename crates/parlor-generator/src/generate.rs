//! Solution filling and clue carving.

use parlor_core::{Digit, DigitGrid, Position};
use parlor_solver::has_unique_solution;
use rand::{RngExt as _, seq::SliceRandom as _};
use rand_pcg::Pcg64;

use crate::{Difficulty, PuzzleSeed};

/// Random cell picks allowed per targeted removal before carving gives up.
///
/// Picks that land on an already-empty cell or fail the uniqueness check do
/// not count toward the removal target, so the pick loop needs its own
/// bound to terminate when no further removal can succeed.
const PICKS_PER_REMOVAL: usize = 50;

/// A generated puzzle together with its unique solution and the seed that
/// produced it.
///
/// The invariant connecting the fields: `problem` has exactly one
/// completion, and that completion is `solution`. Consumers checking a
/// player's answer compare against `solution` directly; it is never
/// recomputed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The puzzle grid presented to the player, with carved cells empty.
    pub problem: DigitGrid,
    /// The completed grid the puzzle was carved from.
    pub solution: DigitGrid,
    /// The seed that reproduces this puzzle.
    pub seed: PuzzleSeed,
}

/// Generates puzzles of a fixed difficulty.
///
/// # Examples
///
/// ```
/// use parlor_generator::{Difficulty, PuzzleGenerator, PuzzleSeed};
///
/// let generator = PuzzleGenerator::new(Difficulty::Medium);
///
/// // Seeded generation is reproducible
/// let seed = PuzzleSeed::from_phrase("docs");
/// let a = generator.generate_with_seed(seed);
/// let b = generator.generate_with_seed(seed);
/// assert_eq!(a, b);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PuzzleGenerator {
    difficulty: Difficulty,
}

impl PuzzleGenerator {
    /// Creates a generator for the given difficulty.
    #[must_use]
    pub const fn new(difficulty: Difficulty) -> Self {
        Self { difficulty }
    }

    /// Returns the difficulty this generator was created with.
    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Generates a puzzle from a fresh random seed.
    #[must_use]
    pub fn generate(&self) -> GeneratedPuzzle {
        self.generate_with_seed(PuzzleSeed::random())
    }

    /// Generates the puzzle determined by `seed`.
    ///
    /// The same seed and difficulty always produce the same puzzle.
    #[must_use]
    pub fn generate_with_seed(&self, seed: PuzzleSeed) -> GeneratedPuzzle {
        let mut rng = seed.rng();
        let solution = fill_solution(&mut rng);
        let problem = carve(&solution, self.difficulty.target_removals(), &mut rng);
        log::debug!(
            "generated {} puzzle with {} givens (seed {seed})",
            self.difficulty,
            problem.filled_count(),
        );
        GeneratedPuzzle {
            problem,
            solution,
            seed,
        }
    }
}

/// Completes an empty grid into a random valid solution.
///
/// Cells are visited in row-major order; candidate digits are shuffled per
/// cell so different RNG states yield different solutions. The fill always
/// succeeds: the empty grid is completable, and backtracking explores until
/// a completion is found.
fn fill_solution(rng: &mut Pcg64) -> DigitGrid {
    let mut grid = DigitGrid::new();
    let filled = fill_from(&mut grid, rng);
    debug_assert!(filled, "empty grid must be completable");
    grid
}

fn fill_from(grid: &mut DigitGrid, rng: &mut Pcg64) -> bool {
    let Some(pos) = grid.first_empty() else {
        return true;
    };
    let mut digits = Digit::ALL;
    digits.shuffle(rng);
    for digit in digits {
        if !grid.placement_fits(pos, digit) {
            continue;
        }
        grid.set(pos, Some(digit));
        if fill_from(grid, rng) {
            return true;
        }
        grid.set(pos, None);
    }
    false
}

/// Removes up to `target` clues from a copy of `solution` while keeping the
/// puzzle uniquely solvable.
///
/// Each iteration picks a random cell; picks on already-empty cells are
/// retried without consuming the target. A removal only sticks if the
/// uniqueness oracle confirms a single completion remains; otherwise the
/// digit is restored. Total picks are bounded, so carving terminates even
/// when no further removal can succeed, returning the puzzle carved so far.
fn carve(solution: &DigitGrid, target: usize, rng: &mut Pcg64) -> DigitGrid {
    let mut puzzle = solution.clone();
    let mut remaining = target;
    let mut picks = target * PICKS_PER_REMOVAL;

    while remaining > 0 && picks > 0 {
        picks -= 1;
        let pos = Position::new(rng.random_range(0..9), rng.random_range(0..9));
        let Some(digit) = puzzle.get(pos) else {
            continue;
        };
        puzzle.set(pos, None);
        if has_unique_solution(&puzzle) {
            remaining -= 1;
            log::trace!("carved {pos}, {remaining} removals to go");
        } else {
            puzzle.set(pos, Some(digit));
        }
    }

    if remaining > 0 {
        log::debug!("carving stopped early with {remaining} removals unfulfilled");
    }
    puzzle
}
