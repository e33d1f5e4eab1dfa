//! Tactical line scans over a board.
//!
//! Pure read-only queries; the opponent strategy composes them, and they
//! never fail on a valid board.

use crate::board::{Board, CENTER, WINNING_LINES};
use crate::types::{Mark, Square};
use tracing::instrument;

/// Finds the square that completes a line for `mark`.
///
/// Scans the fixed line table in order and returns the open index of the
/// first line holding exactly two squares of `mark` and one open square.
/// Called with the mover's own mark this is the winning move; with the
/// other mark it is the square that must be blocked.
#[instrument(skip(board))]
pub fn completing_move(board: &Board, mark: Mark) -> Option<usize> {
    for line in &WINNING_LINES {
        let mut held = 0;
        let mut open = None;
        for &index in line {
            match board.get(index) {
                Some(Square::Occupied(m)) if m == mark => held += 1,
                Some(Square::Empty) => open = Some(index),
                _ => {}
            }
        }
        if held == 2 && open.is_some() {
            return open;
        }
    }
    None
}

/// Returns the center index while it is still open.
#[instrument(skip(board))]
pub fn open_center(board: &Board) -> Option<usize> {
    if board.is_open(CENTER) { Some(CENTER) } else { None }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_completing_move_on_empty_board() {
        let board = Board::new();
        assert_eq!(completing_move(&board, Mark::X), None);
        assert_eq!(completing_move(&board, Mark::O), None);
    }

    #[test]
    fn test_no_completing_move_without_pairs() {
        let mut board = Board::new();
        board.mark(1, Mark::X).unwrap();
        board.mark(5, Mark::O).unwrap();
        board.mark(9, Mark::X).unwrap();
        assert_eq!(completing_move(&board, Mark::X), None);
        assert_eq!(completing_move(&board, Mark::O), None);
    }

    #[test]
    fn test_completing_move_finds_open_third() {
        let mut board = Board::new();
        board.mark(1, Mark::X).unwrap();
        board.mark(2, Mark::X).unwrap();
        assert_eq!(completing_move(&board, Mark::X), Some(3));
    }

    #[test]
    fn test_blocked_line_is_not_completable() {
        let mut board = Board::new();
        board.mark(1, Mark::X).unwrap();
        board.mark(2, Mark::X).unwrap();
        board.mark(3, Mark::O).unwrap();
        assert_eq!(completing_move(&board, Mark::X), None);
    }

    #[test]
    fn test_completing_move_respects_line_order() {
        // Two completable X lines; the row table entry comes first.
        let mut board = Board::new();
        board.mark(1, Mark::X).unwrap();
        board.mark(2, Mark::X).unwrap();
        board.mark(4, Mark::X).unwrap();
        assert_eq!(completing_move(&board, Mark::X), Some(3));
    }

    #[test]
    fn test_open_center() {
        let mut board = Board::new();
        assert_eq!(open_center(&board), Some(CENTER));
        board.mark(CENTER, Mark::O).unwrap();
        assert_eq!(open_center(&board), None);
    }
}
