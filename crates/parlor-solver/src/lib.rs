//! Backtracking completion search for sudoku grids.
//!
//! This crate answers two questions about a partially filled
//! [`DigitGrid`](parlor_core::DigitGrid):
//!
//! - *What does a completion look like?* [`solve`] returns the first
//!   completion found by depth-first search with digits tried in fixed
//!   ascending order.
//! - *How many completions are there?* [`count_solutions`] counts
//!   completions up to a caller-supplied limit, aborting the whole search
//!   the moment the limit is reached. [`has_unique_solution`] is the
//!   `limit = 2` special case used as the uniqueness oracle by the puzzle
//!   generator.
//!
//! Bounding the count is what keeps the oracle tractable: a sparse grid can
//! have an astronomical number of completions, but deciding "one or more
//! than one" only ever needs to find two.
//!
//! All entry points take the caller's grid by shared reference and search on
//! an owned working copy, so the input is never mutated. The running count
//! is threaded through the recursion as an explicit value; there is no
//! shared counter state, and concurrent calls cannot interfere.
//!
//! # Examples
//!
//! ```
//! use parlor_core::DigitGrid;
//! use parlor_solver::{count_solutions, has_unique_solution, solve};
//!
//! let empty = DigitGrid::new();
//!
//! // The empty grid has many completions; counting stops at the limit
//! assert_eq!(count_solutions(&empty, 2), 2);
//! assert!(!has_unique_solution(&empty));
//!
//! // Any completion is a valid solved grid
//! let solution = solve(&empty).unwrap();
//! assert!(solution.is_solved_grid());
//! ```

use parlor_core::DigitGrid;

/// Returns the first completion of `grid` found by backtracking, or `None`
/// if the grid has no completion.
///
/// Digits are tried in fixed ascending order, so the result is a pure
/// function of the input. A grid whose filled cells already violate a
/// row/column/box constraint has no completion.
///
/// # Examples
///
/// ```
/// use parlor_core::{Digit, DigitGrid, Position};
/// use parlor_solver::solve;
///
/// let mut grid = DigitGrid::new();
/// grid.set(Position::new(0, 0), Some(Digit::D1));
/// // Contradiction: two 1s in the same row
/// grid.set(Position::new(5, 0), Some(Digit::D1));
/// assert_eq!(solve(&grid), None);
/// ```
#[must_use]
pub fn solve(grid: &DigitGrid) -> Option<DigitGrid> {
    if !grid.is_consistent() {
        return None;
    }
    let mut work = grid.clone();
    fill_first(&mut work).then_some(work)
}

fn fill_first(work: &mut DigitGrid) -> bool {
    let Some(pos) = work.first_empty() else {
        return true;
    };
    for digit in work.candidates_at(pos) {
        work.set(pos, Some(digit));
        if fill_first(work) {
            return true;
        }
        work.set(pos, None);
    }
    false
}

/// Counts the completions of `grid`, stopping as soon as `limit` have been
/// found.
///
/// The return value is `min(limit, actual number of completions)`. Passing
/// `limit = 0` returns 0 without searching. An inconsistent grid has 0
/// completions.
///
/// # Examples
///
/// ```
/// use parlor_core::DigitGrid;
/// use parlor_solver::count_solutions;
///
/// // A solved grid has exactly one completion: itself
/// let solved: DigitGrid = "
///     534 678 912
///     672 195 348
///     198 342 567
///     859 761 423
///     426 853 791
///     713 924 856
///     961 537 284
///     287 419 635
///     345 286 179
/// "
/// .parse()
/// .unwrap();
/// assert_eq!(count_solutions(&solved, 2), 1);
/// ```
#[must_use]
pub fn count_solutions(grid: &DigitGrid, limit: usize) -> usize {
    if limit == 0 || !grid.is_consistent() {
        return 0;
    }
    let mut work = grid.clone();
    count_completions(&mut work, limit, 0)
}

/// Recursive core of [`count_solutions`].
///
/// `found` is the number of completions discovered so far; the updated
/// count is returned by value. Reaching `limit` aborts every frame on the
/// way back up, because each loop checks the count after its recursive
/// call returns.
fn count_completions(work: &mut DigitGrid, limit: usize, found: usize) -> usize {
    let Some(pos) = work.first_empty() else {
        return found + 1;
    };
    let mut found = found;
    for digit in work.candidates_at(pos) {
        work.set(pos, Some(digit));
        found = count_completions(work, limit, found);
        work.set(pos, None);
        if found >= limit {
            break;
        }
    }
    found
}

/// Returns `true` if `grid` has exactly one completion.
///
/// This is the uniqueness oracle queried by the puzzle carver after every
/// tentative clue removal. It always returns in bounded time because the
/// underlying count stops at 2.
///
/// # Examples
///
/// ```
/// use parlor_core::{DigitGrid, Position};
/// use parlor_solver::has_unique_solution;
///
/// let solved: DigitGrid = "
///     534 678 912
///     672 195 348
///     198 342 567
///     859 761 423
///     426 853 791
///     713 924 856
///     961 537 284
///     287 419 635
///     345 286 179
/// "
/// .parse()
/// .unwrap();
///
/// // Removing a single clue from a full solution keeps it unique
/// let mut grid = solved.clone();
/// grid.set(Position::new(4, 4), None);
/// assert!(has_unique_solution(&grid));
/// ```
#[must_use]
pub fn has_unique_solution(grid: &DigitGrid) -> bool {
    count_solutions(grid, 2) == 1
}
