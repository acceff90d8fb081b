//! Best-move selection over the full game tree.

use parlor_core::{Board, Player};
use tinyvec::ArrayVec;

use crate::search::alpha_beta;

/// Returns the best cell index for `engine` to play on `board`.
///
/// Every empty cell is scored by [alpha-beta search](crate::position_score)
/// with the opponent to move next; the cell with the strictly greatest
/// score wins, and the first such cell wins ties. The result is therefore
/// a pure, deterministic function of `(board, engine)`.
///
/// Returns `None` when no move exists: the board is full or a side has
/// already won. Callers are expected to check game-over state before asking
/// for a move; `None` is the defined answer if they do not.
///
/// The caller's board is unchanged on return.
///
/// # Examples
///
/// ```
/// use parlor_core::{Board, Player};
/// use parlor_minimax::best_move;
///
/// // On an empty board the first cell is as good as any: perfect play
/// // draws from everywhere, and ties go to the lowest index.
/// assert_eq!(best_move(&Board::new(), Player::X), Some(0));
///
/// // No move on a decided board
/// let mut board = Board::new();
/// board.place(0, Player::X);
/// board.place(1, Player::X);
/// board.place(2, Player::X);
/// assert_eq!(best_move(&board, Player::O), None);
/// ```
#[must_use]
pub fn best_move(board: &Board, engine: Player) -> Option<usize> {
    if board.winner().is_some() {
        return None;
    }

    let mut work = *board;
    let candidates: ArrayVec<[usize; 9]> = work.empty_cells().collect();

    let mut best: Option<(usize, i8)> = None;
    for index in candidates {
        work.place(index, engine);
        let score = alpha_beta(&mut work, engine, 0, false, i8::MIN, i8::MAX);
        work.clear(index);
        log::trace!("cell {index} scores {score}");
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((index, score));
        }
    }

    if let Some((index, score)) = best {
        log::debug!("engine {engine} plays {index} (score {score})");
    }
    best.map(|(index, _)| index)
}
