//! Minimax evaluation with alpha-beta pruning.

use parlor_core::{Board, Player};

/// Score awarded for a win at depth 0. Depth is subtracted from wins and
/// added to losses so that faster wins outrank slower ones and slower
/// losses outrank faster ones; this is the tie-break across lines with the
/// same outcome.
const WIN_SCORE: i8 = 10;

/// Evaluates a position by exhaustive minimax from `engine`'s perspective.
///
/// `to_move` is the player whose turn it is. The returned score is in
/// `[-10, 10]`: positive when `engine` can force a win, negative when the
/// opponent can, and 0 when best play from both sides leads to a draw.
///
/// # Examples
///
/// ```
/// use parlor_core::{Board, Player};
/// use parlor_minimax::position_score;
///
/// // From the empty board, perfect play is a draw
/// assert_eq!(position_score(&Board::new(), Player::X, Player::X), 0);
///
/// // X threatens at indices 0 and 1 with X to move: a forced win
/// let mut board = Board::new();
/// board.place(0, Player::X);
/// board.place(1, Player::X);
/// assert!(position_score(&board, Player::X, Player::X) > 0);
/// ```
#[must_use]
pub fn position_score(board: &Board, engine: Player, to_move: Player) -> i8 {
    let mut work = *board;
    alpha_beta(
        &mut work,
        engine,
        0,
        to_move == engine,
        i8::MIN,
        i8::MAX,
    )
}

/// Recursive alpha-beta search.
///
/// Tries every empty cell in ascending index order, placing the mark of the
/// side to move and undoing the placement after the recursive call, so the
/// board is bit-identical on return. `maximizing` is `true` when `engine`
/// is to move.
pub(crate) fn alpha_beta(
    board: &mut Board,
    engine: Player,
    depth: i8,
    maximizing: bool,
    mut alpha: i8,
    mut beta: i8,
) -> i8 {
    // Terminal tests come before any recursion
    if let Some(winner) = board.winner() {
        return if winner == engine {
            WIN_SCORE - depth
        } else {
            depth - WIN_SCORE
        };
    }
    if board.is_full() {
        return 0;
    }

    if maximizing {
        let mut best = i8::MIN;
        for index in 0..9 {
            if board.cell(index).is_some() {
                continue;
            }
            board.place(index, engine);
            let score = alpha_beta(board, engine, depth + 1, false, alpha, beta);
            board.clear(index);
            best = best.max(score);
            alpha = alpha.max(score);
            if beta <= alpha {
                break;
            }
        }
        best
    } else {
        let mut best = i8::MAX;
        for index in 0..9 {
            if board.cell(index).is_some() {
                continue;
            }
            board.place(index, engine.opponent());
            let score = alpha_beta(board, engine, depth + 1, true, alpha, beta);
            board.clear(index);
            best = best.min(score);
            beta = beta.min(score);
            if beta <= alpha {
                break;
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_immediate_win_scores_ten() {
        let mut board = Board::new();
        board.place(0, Player::X);
        board.place(1, Player::X);
        board.place(2, Player::X);
        assert_eq!(position_score(&board, Player::X, Player::O), 10);
        assert_eq!(position_score(&board, Player::O, Player::O), -10);
    }

    #[test]
    fn test_faster_win_scores_higher() {
        // X to move with an open pair: winning takes one placement (depth 1)
        let mut board = Board::new();
        board.place(0, Player::X);
        board.place(1, Player::X);
        board.place(3, Player::O);
        board.place(4, Player::O);
        // X completes the top row before O can complete the middle row
        assert_eq!(position_score(&board, Player::X, Player::X), 9);
    }

    #[test]
    fn test_empty_board_is_a_draw() {
        for engine in [Player::X, Player::O] {
            for to_move in [Player::X, Player::O] {
                assert_eq!(position_score(&Board::new(), engine, to_move), 0);
            }
        }
    }

    #[test]
    fn test_board_restored_after_search() {
        let mut board = Board::new();
        board.place(4, Player::X);
        let snapshot = board;
        let _ = position_score(&board, Player::O, Player::O);
        assert_eq!(board, snapshot);
    }

    #[test]
    fn test_pruned_search_matches_full_window() {
        // Pruning must not change any value, only skip irrelevant branches.
        // Compare against a plain minimax on a handful of positions.
        fn plain_minimax(board: &mut Board, engine: Player, depth: i8, maximizing: bool) -> i8 {
            if let Some(winner) = board.winner() {
                return if winner == engine { 10 - depth } else { depth - 10 };
            }
            if board.is_full() {
                return 0;
            }
            let mover = if maximizing { engine } else { engine.opponent() };
            let mut scores = Vec::new();
            for index in 0..9 {
                if board.cell(index).is_none() {
                    board.place(index, mover);
                    scores.push(plain_minimax(board, engine, depth + 1, !maximizing));
                    board.clear(index);
                }
            }
            if maximizing {
                scores.into_iter().max().unwrap()
            } else {
                scores.into_iter().min().unwrap()
            }
        }

        let positions = [
            Board::new(),
            {
                let mut b = Board::new();
                b.place(4, Player::X);
                b
            },
            {
                let mut b = Board::new();
                b.place(0, Player::X);
                b.place(4, Player::O);
                b.place(8, Player::X);
                b
            },
            {
                let mut b = Board::new();
                b.place(0, Player::X);
                b.place(1, Player::X);
                b.place(3, Player::O);
                b
            },
        ];
        for board in positions {
            let mut work = board;
            let expected = plain_minimax(&mut work, Player::X, 0, true);
            assert_eq!(position_score(&board, Player::X, Player::X), expected);
        }
    }
}
