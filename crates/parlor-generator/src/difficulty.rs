//! Difficulty levels and their carving targets.

use std::fmt::{self, Display};

/// Puzzle difficulty, expressed as a target number of removed clues.
///
/// Difficulty maps to how many clues the carver tries to remove from the
/// 81-cell solution; more holes mean fewer givens and a harder puzzle. The
/// targets are 30, 40, and 50 successful removals for easy, medium, and
/// hard respectively. The target is a goal, not a guarantee: carving stops
/// early once no removal can preserve solution uniqueness, so a puzzle may
/// carry a few more givens than the target implies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    /// 30 removals; 51 givens when the target is reached.
    Easy,
    /// 40 removals; 41 givens when the target is reached.
    Medium,
    /// 50 removals; 31 givens when the target is reached.
    Hard,
}

impl Difficulty {
    /// All difficulty levels, easiest first.
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Returns the number of clue removals the carver aims for.
    #[must_use]
    pub const fn target_removals(self) -> usize {
        match self {
            Self::Easy => 30,
            Self::Medium => 40,
            Self::Hard => 50,
        }
    }
}

impl Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Easy => write!(f, "easy"),
            Self::Medium => write!(f, "medium"),
            Self::Hard => write!(f, "hard"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_targets_increase_with_difficulty() {
        let targets: Vec<_> = Difficulty::ALL
            .iter()
            .map(|difficulty| difficulty.target_removals())
            .collect();
        assert_eq!(targets, [30, 40, 50]);
        assert!(targets.is_sorted());
    }
}
