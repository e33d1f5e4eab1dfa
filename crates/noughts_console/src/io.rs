//! Capability traits between the match driver and the front end.
//!
//! The driver suspends only at these seams; everything behind them is a
//! blocking request/response exchange with whoever is at the keyboard.

use anyhow::Result;
use async_trait::async_trait;
use noughts_engine::{Mark, Outcome, Player, Round};

/// Supplies the human's square choice.
#[async_trait]
pub trait MoveSource: Send {
    /// Picks one of `open`. Implementations keep prompting until the reply
    /// is a member of `open`; the driver re-elicits anyway if the engine
    /// rejects the square.
    async fn choose_cell(&mut self, open: &[usize]) -> Result<usize>;
}

/// Pure notification surface; nothing returned here feeds back into the
/// driver.
pub trait Renderer: Send {
    /// Shows the round's board.
    fn show_board(&mut self, round: &Round);
    /// Announces how a round ended.
    fn announce_round(&mut self, outcome: Outcome);
    /// Announces the running score after a round.
    fn announce_score(&mut self, player_x: &Player, player_o: &Player);
    /// Announces the match champion.
    fn announce_match(&mut self, champion: &Player);
}

/// Asks whether to start another match.
#[async_trait]
pub trait ReplayPrompt: Send {
    /// True to build a new match with fresh scores.
    async fn play_again(&mut self) -> Result<bool>;
}

/// Chooses which mark opens every round of a match.
#[async_trait]
pub trait FirstMoverChoice: Send {
    /// The mark that moves first, asked once per match.
    async fn first_mover(&mut self) -> Result<Mark>;
}
