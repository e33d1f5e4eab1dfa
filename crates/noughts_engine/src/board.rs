//! Board storage and win-line queries.

use crate::types::{Mark, Square};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Lowest valid square index.
pub const FIRST_INDEX: usize = 1;
/// Highest valid square index.
pub const LAST_INDEX: usize = 9;
/// Index of the center square.
pub const CENTER: usize = 5;

/// The 8 index triples that decide a game: rows, then columns, then
/// diagonals.
///
/// Win and threat scans walk this table in order, so when more than one
/// line qualifies the earliest entry is the one reported.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [1, 2, 3],
    [4, 5, 6],
    [7, 8, 9],
    [1, 4, 7],
    [2, 5, 8],
    [3, 6, 9],
    [1, 5, 9],
    [3, 5, 7],
];

/// Errors that can occur when marking a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// The index is outside 1-9.
    #[display("square {_0} is outside 1-9")]
    #[error(ignore)]
    InvalidIndex(usize),
    /// The square already holds a mark.
    #[display("square {_0} is already occupied")]
    #[error(ignore)]
    CellOccupied(usize),
}

/// A 3x3 board addressed by square indices 1-9.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Squares stored row-major; index 1 is the top-left corner.
    squares: [Square; 9],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Returns the square at `index`, or `None` outside 1-9.
    pub fn get(&self, index: usize) -> Option<Square> {
        if (FIRST_INDEX..=LAST_INDEX).contains(&index) {
            Some(self.squares[index - 1])
        } else {
            None
        }
    }

    /// Whether the square at `index` is open. Out-of-range indices are
    /// never open.
    pub fn is_open(&self, index: usize) -> bool {
        self.get(index) == Some(Square::Empty)
    }

    /// Places `mark` on the square at `index`.
    ///
    /// # Errors
    ///
    /// `InvalidIndex` outside 1-9, `CellOccupied` if the square is already
    /// held. The board is unchanged on error.
    #[instrument(skip(self))]
    pub fn mark(&mut self, index: usize, mark: Mark) -> Result<(), BoardError> {
        match self.get(index) {
            None => Err(BoardError::InvalidIndex(index)),
            Some(Square::Occupied(_)) => Err(BoardError::CellOccupied(index)),
            Some(Square::Empty) => {
                self.squares[index - 1] = Square::Occupied(mark);
                debug!(index, %mark, "square marked");
                Ok(())
            }
        }
    }

    /// Indices of the open squares, in ascending order.
    ///
    /// The order is deterministic so a seeded random fallback over this
    /// list replays identically.
    pub fn empty_indices(&self) -> Vec<usize> {
        (FIRST_INDEX..=LAST_INDEX)
            .filter(|&index| self.is_open(index))
            .collect()
    }

    /// Whether every square holds a mark.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|square| *square != Square::Empty)
    }

    /// The mark holding a completed line, if any.
    ///
    /// Lines are scanned in the fixed [`WINNING_LINES`] order; simultaneous
    /// wins report the first line found.
    pub fn winning_mark(&self) -> Option<Mark> {
        for [a, b, c] in WINNING_LINES {
            let square = self.squares[a - 1];
            if square != Square::Empty
                && square == self.squares[b - 1]
                && square == self.squares[c - 1]
            {
                return match square {
                    Square::Occupied(mark) => Some(mark),
                    Square::Empty => None,
                };
            }
        }
        None
    }

    /// Clears every square.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.squares = [Square::Empty; 9];
        debug!("board reset");
    }

    /// Formats the board as a printable grid.
    ///
    /// Open squares show their index so a prompt like "choose 1, 2, or 5"
    /// lines up with the picture.
    pub fn display(&self) -> String {
        let mut out = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col + 1;
                match self.squares[index - 1] {
                    Square::Empty => out.push_str(&index.to_string()),
                    Square::Occupied(mark) => out.push_str(&mark.to_string()),
                }
                if col < 2 {
                    out.push('|');
                }
            }
            if row < 2 {
                out.push_str("\n-+-+-\n");
            }
        }
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
