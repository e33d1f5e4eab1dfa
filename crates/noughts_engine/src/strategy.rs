//! Heuristic move selection for the built-in opponent.

use crate::analysis::{completing_move, open_center};
use crate::board::{Board, BoardError, FIRST_INDEX};
use crate::types::Mark;
use tracing::{debug, instrument};

/// Non-learning opponent: take the win, else block, else the center, else
/// a random open square.
///
/// The priority order is the contract; a competent-but-beatable opponent
/// falls out of it. The RNG is owned by the strategy so a seeded instance
/// replays the same fallback choices.
#[derive(Debug)]
pub struct HeuristicOpponent {
    rng: fastrand::Rng,
}

impl HeuristicOpponent {
    /// Creates an opponent with an entropy-seeded RNG.
    pub fn new() -> Self {
        Self {
            rng: fastrand::Rng::new(),
        }
    }

    /// Creates an opponent whose fallback choices replay deterministically.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }

    /// Picks a square for `own` under the fixed priority.
    ///
    /// Returns `None` only when the board has no open square.
    #[instrument(skip(self, board))]
    pub fn choose(&mut self, board: &Board, own: Mark) -> Option<usize> {
        if let Some(index) = completing_move(board, own) {
            debug!(index, "taking the win");
            return Some(index);
        }
        if let Some(index) = completing_move(board, own.opponent()) {
            debug!(index, "blocking");
            return Some(index);
        }
        if let Some(index) = open_center(board) {
            debug!(index, "taking the center");
            return Some(index);
        }
        let open = board.empty_indices();
        if open.is_empty() {
            return None;
        }
        let index = open[self.rng.usize(..open.len())];
        debug!(index, "random fallback");
        Some(index)
    }

    /// Chooses a square for `own` and marks it.
    ///
    /// # Errors
    ///
    /// The same failures as [`Board::mark`]; on a full board the attempt
    /// falls through to the first square's occupied failure. Callers
    /// normally stop invoking the strategy once a round is decided.
    #[instrument(skip(self, board))]
    pub fn play(&mut self, board: &mut Board, own: Mark) -> Result<usize, BoardError> {
        let index = self.choose(board, own).unwrap_or(FIRST_INDEX);
        board.mark(index, own)?;
        Ok(index)
    }
}

impl Default for HeuristicOpponent {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_fallback_replays() {
        // Center held, no pairs anywhere: the choice is the random branch.
        let mut board = Board::new();
        board.mark(5, Mark::X).unwrap();

        let mut first = HeuristicOpponent::with_seed(42);
        let mut second = HeuristicOpponent::with_seed(42);
        let a = first.choose(&board, Mark::O).unwrap();
        let b = second.choose(&board, Mark::O).unwrap();
        assert_eq!(a, b);
        assert!(board.empty_indices().contains(&a));
    }

    #[test]
    fn test_play_marks_the_chosen_square() {
        let mut board = Board::new();
        let mut rival = HeuristicOpponent::with_seed(7);
        let index = rival.play(&mut board, Mark::O).unwrap();
        assert!(!board.is_open(index));
    }
}
