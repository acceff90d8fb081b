//! The 9×9 sudoku grid.

use std::{
    fmt::{self, Display},
    ops::{Index, IndexMut},
    str::FromStr,
};

use derive_more::{Display, Error};

use crate::{Digit, DigitSet, Position};

/// A 9×9 grid of optional digits.
///
/// Cells are either empty (`None`) or hold a [`Digit`]. The grid is plain
/// value data: it is `Clone`, owned by the caller, and mutated only through
/// [`set`](Self::set) / [`IndexMut`]. Solvers and generators take their own
/// working copies and leave caller-owned grids untouched.
///
/// # Text format
///
/// [`FromStr`] accepts 81 cell characters in row-major order: digits `1`-`9`
/// for filled cells and `_`, `.`, or `0` for empty cells. Whitespace is
/// ignored, so grids can be laid out as nine rows:
///
/// ```
/// use parlor_core::DigitGrid;
///
/// let grid: DigitGrid = "
///     53_ _7_ ___
///     6__ 195 ___
///     _98 ___ _6_
///     8__ _6_ __3
///     4__ 8_3 __1
///     7__ _2_ __6
///     _6_ ___ 28_
///     ___ 419 __5
///     ___ _8_ _79
/// "
/// .parse()
/// .unwrap();
/// assert_eq!(grid.filled_count(), 30);
/// ```
///
/// [`Display`] prints the same format as a single 81-character line with `_`
/// for empty cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitGrid {
    cells: [Option<Digit>; 81],
}

impl Default for DigitGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl DigitGrid {
    /// Creates an empty grid.
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: [None; 81] }
    }

    /// Returns the cell at the given position.
    #[must_use]
    pub const fn get(&self, pos: Position) -> Option<Digit> {
        self.cells[pos.index()]
    }

    /// Sets the cell at the given position.
    pub const fn set(&mut self, pos: Position, digit: Option<Digit>) {
        self.cells[pos.index()] = digit;
    }

    /// Returns the number of filled cells.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Returns the first empty position in row-major order, if any.
    ///
    /// Backtracking solvers and the grid generator use this as their cell
    /// visiting order.
    #[must_use]
    pub fn first_empty(&self) -> Option<Position> {
        self.cells
            .iter()
            .position(Option::is_none)
            .map(Position::from_index)
    }

    /// Returns the set of digits that can be placed at `pos` without
    /// duplicating a digit in its row, column, or 3×3 box.
    ///
    /// The digit currently at `pos` (if any) is not excluded by itself, so
    /// the query is meaningful for both empty and filled cells.
    ///
    /// # Examples
    ///
    /// ```
    /// use parlor_core::{Digit, DigitGrid, Position};
    ///
    /// let mut grid = DigitGrid::new();
    /// grid.set(Position::new(0, 0), Some(Digit::D5));
    ///
    /// // 5 is no longer a candidate anywhere in row 0, column 0, or box 0
    /// assert!(!grid.candidates_at(Position::new(8, 0)).contains(Digit::D5));
    /// assert!(!grid.candidates_at(Position::new(0, 8)).contains(Digit::D5));
    /// assert!(!grid.candidates_at(Position::new(2, 2)).contains(Digit::D5));
    /// assert!(grid.candidates_at(Position::new(4, 4)).contains(Digit::D5));
    /// ```
    #[must_use]
    pub fn candidates_at(&self, pos: Position) -> DigitSet {
        let mut used = DigitSet::EMPTY;
        for i in 0..9 {
            if let Some(digit) = self.get(Position::new(i, pos.y()))
                && Position::new(i, pos.y()) != pos
            {
                used.insert(digit);
            }
            if let Some(digit) = self.get(Position::new(pos.x(), i))
                && Position::new(pos.x(), i) != pos
            {
                used.insert(digit);
            }
            let box_pos = Position::new(
                (pos.x() / 3) * 3 + i % 3,
                (pos.y() / 3) * 3 + i / 3,
            );
            if let Some(digit) = self.get(box_pos)
                && box_pos != pos
            {
                used.insert(digit);
            }
        }
        !used
    }

    /// Returns `true` if placing `digit` at `pos` keeps the row, column, and
    /// 3×3 box of `pos` free of duplicates.
    #[must_use]
    pub fn placement_fits(&self, pos: Position, digit: Digit) -> bool {
        self.candidates_at(pos).contains(digit)
    }

    /// Returns `true` if no filled cell duplicates a digit within its row,
    /// column, or 3×3 box.
    ///
    /// Empty cells are ignored, so a partially filled grid can be consistent.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        Position::all().all(|pos| match self.get(pos) {
            Some(digit) => self.candidates_at(pos).contains(digit),
            None => true,
        })
    }

    /// Returns `true` if the grid is a complete, valid solution: no empty
    /// cells, and every row, column, and 3×3 box is exactly the set 1-9.
    ///
    /// # Examples
    ///
    /// ```
    /// use parlor_core::DigitGrid;
    ///
    /// assert!(!DigitGrid::new().is_solved_grid());
    /// ```
    #[must_use]
    pub fn is_solved_grid(&self) -> bool {
        self.cells.iter().all(Option::is_some) && self.is_consistent()
    }
}

impl Index<Position> for DigitGrid {
    type Output = Option<Digit>;

    fn index(&self, pos: Position) -> &Option<Digit> {
        &self.cells[pos.index()]
    }
}

impl IndexMut<Position> for DigitGrid {
    fn index_mut(&mut self, pos: Position) -> &mut Option<Digit> {
        &mut self.cells[pos.index()]
    }
}

/// Error parsing a [`DigitGrid`] from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ParseGridError {
    /// A character was neither a digit, an empty-cell marker, nor whitespace.
    #[display("invalid grid character: {found:?}")]
    InvalidCharacter {
        /// The offending character.
        found: char,
    },
    /// The text did not contain exactly 81 cell characters.
    #[display("expected 81 cells, found {found}")]
    WrongCellCount {
        /// The number of cell characters found.
        found: usize,
    },
}

impl FromStr for DigitGrid {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Self, ParseGridError> {
        let mut grid = Self::new();
        let mut count = 0;
        for c in s.chars() {
            if c.is_whitespace() {
                continue;
            }
            let digit = match c {
                '_' | '.' | '0' => None,
                '1'..='9' => Digit::try_from_value(c as u8 - b'0'),
                _ => return Err(ParseGridError::InvalidCharacter { found: c }),
            };
            if count < 81 {
                grid.set(Position::from_index(count), digit);
            }
            count += 1;
        }
        if count != 81 {
            return Err(ParseGridError::WrongCellCount { found: count });
        }
        Ok(grid)
    }
}

impl Display for DigitGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            match cell {
                Some(digit) => write!(f, "{digit}")?,
                None => write!(f, "_")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    /// A complete, valid solution grid used as a fixture.
    const SOLVED: &str = "
        534 678 912
        672 195 348
        198 342 567
        859 761 423
        426 853 791
        713 924 856
        961 537 284
        287 419 635
        345 286 179
    ";

    #[test]
    fn test_empty_grid_candidates() {
        let grid = DigitGrid::new();
        for pos in Position::all() {
            assert_eq!(grid.candidates_at(pos), DigitSet::FULL);
        }
    }

    #[test]
    fn test_candidates_exclude_peers() {
        let mut grid = DigitGrid::new();
        grid.set(Position::new(0, 0), Some(Digit::D5));
        grid.set(Position::new(3, 0), Some(Digit::D7));

        let candidates = grid.candidates_at(Position::new(8, 0));
        assert!(!candidates.contains(Digit::D5));
        assert!(!candidates.contains(Digit::D7));
        assert_eq!(candidates.len(), 7);

        // Box peer that shares neither row nor column
        assert!(!grid.candidates_at(Position::new(1, 2)).contains(Digit::D5));
    }

    #[test]
    fn test_candidates_ignore_own_cell() {
        let grid: DigitGrid = SOLVED.parse().unwrap();
        for pos in Position::all() {
            let digit = grid.get(pos).unwrap();
            assert!(grid.placement_fits(pos, digit), "cell {pos} rejects its own digit");
        }
    }

    #[test]
    fn test_solved_grid_is_valid() {
        let grid: DigitGrid = SOLVED.parse().unwrap();
        assert!(grid.is_consistent());
        assert!(grid.is_solved_grid());
        assert_eq!(grid.filled_count(), 81);
        assert_eq!(grid.first_empty(), None);
    }

    #[test]
    fn test_duplicate_breaks_consistency() {
        let mut grid: DigitGrid = SOLVED.parse().unwrap();
        // Copy the digit at (0, 0) over its row neighbour
        let digit = grid.get(Position::new(0, 0));
        grid.set(Position::new(5, 0), digit);
        assert!(!grid.is_consistent());
        assert!(!grid.is_solved_grid());
    }

    #[test]
    fn test_first_empty_row_major() {
        let mut grid: DigitGrid = SOLVED.parse().unwrap();
        grid.set(Position::new(4, 2), None);
        grid.set(Position::new(1, 7), None);
        assert_eq!(grid.first_empty(), Some(Position::new(4, 2)));
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(
            "x".repeat(81).parse::<DigitGrid>(),
            Err(ParseGridError::InvalidCharacter { found: 'x' })
        );
        assert_eq!(
            "123".parse::<DigitGrid>(),
            Err(ParseGridError::WrongCellCount { found: 3 })
        );
        assert_eq!(
            "1".repeat(82).parse::<DigitGrid>(),
            Err(ParseGridError::WrongCellCount { found: 82 })
        );
    }

    #[test]
    fn test_display_parse_round_trip() {
        let grid: DigitGrid = SOLVED.parse().unwrap();
        let printed = grid.to_string();
        assert_eq!(printed.len(), 81);
        assert_eq!(printed.parse::<DigitGrid>().unwrap(), grid);

        let empty = DigitGrid::new().to_string();
        assert_eq!(empty, "_".repeat(81));
    }

    proptest! {
        #[test]
        fn prop_display_parse_round_trip(cells in prop::collection::vec(0u8..=9, 81)) {
            let mut grid = DigitGrid::new();
            for (i, value) in cells.iter().enumerate() {
                grid.set(Position::from_index(i), Digit::try_from_value(*value));
            }
            let reparsed: DigitGrid = grid.to_string().parse().unwrap();
            prop_assert_eq!(reparsed, grid);
        }
    }
}
