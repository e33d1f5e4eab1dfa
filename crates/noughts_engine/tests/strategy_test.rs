//! Priority invariants of the heuristic opponent.

use noughts_engine::{Board, BoardError, HeuristicOpponent, Mark};

fn board_with(xs: &[usize], os: &[usize]) -> Board {
    let mut board = Board::new();
    for &index in xs {
        board.mark(index, Mark::X).unwrap();
    }
    for &index in os {
        board.mark(index, Mark::O).unwrap();
    }
    board
}

#[test]
fn test_own_win_beats_block() {
    // O can complete 1-2-3; X can complete 4-5-6. Offense wins.
    let board = board_with(&[4, 5], &[1, 2]);
    let mut rival = HeuristicOpponent::with_seed(0);
    assert_eq!(rival.choose(&board, Mark::O), Some(3));
}

#[test]
fn test_block_beats_center() {
    // No O win anywhere, X threatens 1-2-3, and the center is already gone.
    let board = board_with(&[1, 2, 5], &[4, 7]);
    let mut rival = HeuristicOpponent::with_seed(0);
    assert_eq!(rival.choose(&board, Mark::O), Some(3));
}

#[test]
fn test_block_fires_even_with_center_open() {
    let board = board_with(&[1, 2], &[4]);
    let mut rival = HeuristicOpponent::with_seed(0);
    assert_eq!(rival.choose(&board, Mark::O), Some(3));
}

#[test]
fn test_center_when_no_tactics() {
    let board = board_with(&[1], &[]);
    let mut rival = HeuristicOpponent::with_seed(0);
    assert_eq!(rival.choose(&board, Mark::O), Some(5));
}

#[test]
fn test_random_fallback_hits_an_open_square() {
    // Center taken, no pair on the board for either mark.
    let board = board_with(&[5], &[]);
    for seed in 0..32 {
        let mut rival = HeuristicOpponent::with_seed(seed);
        let index = rival.choose(&board, Mark::O).unwrap();
        assert!(board.empty_indices().contains(&index), "seed {seed}");
    }
}

#[test]
fn test_full_board_yields_no_choice() {
    // A full, drawn board: X O X / X O O / O X X.
    let board = board_with(&[1, 3, 4, 8, 9], &[2, 5, 6, 7]);
    let mut rival = HeuristicOpponent::with_seed(0);
    assert_eq!(rival.choose(&board, Mark::O), None);

    let mut board = board;
    assert_eq!(
        rival.play(&mut board, Mark::O),
        Err(BoardError::CellOccupied(1))
    );
}
