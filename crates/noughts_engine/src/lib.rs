//! Pure tic-tac-toe match logic.
//!
//! The crate models the board and its eight winning lines, the tactical
//! scans over them, a heuristic opponent, and the round/match state
//! machines that sequence games into a first-to-N-wins match. There is no
//! I/O here: front ends supply the human's choices and render the results,
//! and randomness enters only through the strategy's injected RNG.
//!
//! # Example
//!
//! ```
//! use noughts_engine::{HeuristicOpponent, Mark, Match};
//!
//! let arena = Match::new("Ada", "R2D2", Mark::X, 5);
//! let mut round = arena.start_round();
//! let mut rival = HeuristicOpponent::with_seed(7);
//!
//! round.play(1)?; // X opens in a corner
//! let reply = rival.choose(round.board(), Mark::O).unwrap();
//! assert_eq!(reply, 5); // nothing to win or block, so the center
//! round.play(reply)?;
//! # Ok::<(), noughts_engine::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod analysis;
mod board;
mod matches;
mod round;
mod strategy;
mod types;

pub use analysis::{completing_move, open_center};
pub use board::{Board, BoardError, CENTER, WINNING_LINES};
pub use matches::{DEFAULT_TARGET_WINS, Match, MatchError, MatchStatus, Player};
pub use round::{MoveError, Outcome, Round};
pub use strategy::HeuristicOpponent;
pub use types::{Mark, Square};
