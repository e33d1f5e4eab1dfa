//! Board-level properties: line detection, marking failures, reset.

use noughts_engine::{Board, BoardError, Mark, Square, WINNING_LINES};

#[test]
fn test_every_line_wins_when_fully_marked() {
    for mark in [Mark::X, Mark::O] {
        for line in WINNING_LINES {
            let mut board = Board::new();
            for index in line {
                board.mark(index, mark).unwrap();
            }
            assert_eq!(board.winning_mark(), Some(mark), "line {line:?}");
        }
    }
}

#[test]
fn test_two_of_three_is_not_a_win() {
    for line in WINNING_LINES {
        let mut board = Board::new();
        board.mark(line[0], Mark::X).unwrap();
        board.mark(line[1], Mark::X).unwrap();
        assert_eq!(board.winning_mark(), None, "line {line:?}");
    }
}

#[test]
fn test_simultaneous_wins_report_first_line() {
    // Rows 1 and 2 both belong to X; the row table entry for 1-2-3 leads.
    let mut board = Board::new();
    for index in [1, 2, 3, 4, 5, 6] {
        board.mark(index, Mark::X).unwrap();
    }
    assert_eq!(board.winning_mark(), Some(Mark::X));
}

#[test]
fn test_mark_out_of_range() {
    let mut board = Board::new();
    assert_eq!(board.mark(0, Mark::X), Err(BoardError::InvalidIndex(0)));
    assert_eq!(board.mark(10, Mark::X), Err(BoardError::InvalidIndex(10)));
    assert_eq!(board.empty_indices().len(), 9);
}

#[test]
fn test_mark_occupied_leaves_board_unchanged() {
    let mut board = Board::new();
    board.mark(1, Mark::X).unwrap();
    let before = board.clone();

    assert_eq!(board.mark(1, Mark::O), Err(BoardError::CellOccupied(1)));
    assert_eq!(board, before);
    assert_eq!(board.get(1), Some(Square::Occupied(Mark::X)));
}

#[test]
fn test_empty_indices_are_ascending() {
    let mut board = Board::new();
    board.mark(2, Mark::X).unwrap();
    board.mark(7, Mark::O).unwrap();
    assert_eq!(board.empty_indices(), vec![1, 3, 4, 5, 6, 8, 9]);
    assert!(!board.is_full());
}

#[test]
fn test_reset_clears_every_square() {
    let mut board = Board::new();
    for index in 1..=9 {
        let mark = if index % 2 == 0 { Mark::O } else { Mark::X };
        board.mark(index, mark).unwrap();
    }
    assert!(board.is_full());

    board.reset();
    assert_eq!(board.empty_indices().len(), 9);
    assert_eq!(board.winning_mark(), None);
}

#[test]
fn test_display_shows_indices_on_open_squares() {
    let mut board = Board::new();
    board.mark(1, Mark::X).unwrap();
    let grid = board.display();
    assert!(grid.starts_with("X|2|3"));
    assert!(grid.contains("-+-+-"));
}
