//! A single game from empty board to decided outcome.

use crate::board::{Board, BoardError};
use crate::types::Mark;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// How a decided round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// This mark completed a line.
    Won(Mark),
    /// The board filled with no completed line.
    Tied,
}

/// Errors that can occur when playing a square into a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The index is outside 1-9.
    #[display("square {_0} is outside 1-9")]
    #[error(ignore)]
    InvalidIndex(usize),
    /// The square already holds a mark.
    #[display("square {_0} is already occupied")]
    #[error(ignore)]
    CellOccupied(usize),
    /// The round has already been decided. Reaching this is a sequencing
    /// bug in the caller, not a user-facing condition.
    #[display("the round is already over")]
    RoundOver,
}

impl From<BoardError> for MoveError {
    fn from(err: BoardError) -> Self {
        match err {
            BoardError::InvalidIndex(index) => MoveError::InvalidIndex(index),
            BoardError::CellOccupied(index) => MoveError::CellOccupied(index),
        }
    }
}

/// One played-out game.
///
/// Starts awaiting the first mover's square; each successful play either
/// decides the round or hands the turn to the other mark. A decided round
/// accepts no further moves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Round {
    board: Board,
    to_move: Mark,
    outcome: Option<Outcome>,
}

impl Round {
    /// Creates a fresh round opening with `first_mover`.
    pub fn new(first_mover: Mark) -> Self {
        Self {
            board: Board::new(),
            to_move: first_mover,
            outcome: None,
        }
    }

    /// The board as it currently stands.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The mark whose turn it is, or `None` once the round is decided.
    pub fn to_move(&self) -> Option<Mark> {
        if self.outcome.is_some() {
            None
        } else {
            Some(self.to_move)
        }
    }

    /// The outcome, once the round is decided.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Whether the round has been decided.
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Plays the current mover onto the square at `index`.
    ///
    /// # Errors
    ///
    /// `RoundOver` on a decided round; `InvalidIndex`/`CellOccupied` from
    /// the board, which is left unchanged and keeps the same mover.
    #[instrument(skip(self), fields(mover = %self.to_move))]
    pub fn play(&mut self, index: usize) -> Result<(), MoveError> {
        if self.outcome.is_some() {
            return Err(MoveError::RoundOver);
        }
        self.board.mark(index, self.to_move)?;
        if let Some(mark) = self.board.winning_mark() {
            info!(%mark, "round won");
            self.outcome = Some(Outcome::Won(mark));
        } else if self.board.is_full() {
            info!("round tied");
            self.outcome = Some(Outcome::Tied);
        } else {
            self.to_move = self.to_move.opponent();
        }
        Ok(())
    }
}
