//! Core domain types shared across the engine.

use serde::{Deserialize, Serialize};

/// One of the two marks that can occupy the board.
///
/// The engine only distinguishes the two sides; display glyphs are a
/// front-end concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// The mark conventionally drawn as a cross.
    X,
    /// The mark conventionally drawn as a nought.
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// No mark yet.
    Empty,
    /// Square held by a mark. Squares never revert to empty except through
    /// a full-board reset.
    Occupied(Mark),
}

impl Square {
    /// Whether the square is still open.
    pub fn is_empty(self) -> bool {
        self == Square::Empty
    }
}
