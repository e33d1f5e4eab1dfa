//! Best-of-N match state: players, scores, and the win threshold.

use crate::round::{Outcome, Round};
use crate::types::Mark;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

/// Rounds a player must win to take a match, unless configured otherwise.
pub const DEFAULT_TARGET_WINS: u32 = 5;

/// A named participant and their running win count.
///
/// Wins persist across rounds and reset only when a fresh match is
/// constructed.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Player {
    /// Display name.
    name: String,
    /// The mark this player puts on the board.
    mark: Mark,
    /// Rounds won so far in the current match.
    wins: u32,
}

impl Player {
    fn new(name: impl Into<String>, mark: Mark) -> Self {
        Self {
            name: name.into(),
            mark,
            wins: 0,
        }
    }
}

/// Match progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchStatus {
    /// More rounds to play.
    Playing,
    /// The mark that reached the target first.
    Over(Mark),
}

/// Errors that can occur when recording into a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MatchError {
    /// The match already has a champion. Reaching this is a sequencing bug
    /// in the caller.
    #[display("the match is already over")]
    MatchOver,
}

/// First-to-N-wins sequence of rounds between two players.
///
/// The marks can never collide: X and O are assigned by construction. The
/// first mover is fixed when the match is created and every round of the
/// match opens with it; a rematch is a new value with fresh scores.
#[derive(Debug, Clone, Getters, Serialize, Deserialize)]
pub struct Match {
    /// The player marking X.
    player_x: Player,
    /// The player marking O.
    player_o: Player,
    /// The mark that opens every round of this match.
    first_mover: Mark,
    /// Round wins needed to take the match.
    target_wins: u32,
    /// Outcomes of the completed rounds, in play order.
    history: Vec<Outcome>,
    /// Whether a champion has been decided.
    status: MatchStatus,
}

impl Match {
    /// Creates a match between `x_name` (marking X) and `o_name`
    /// (marking O). A target below one round is raised to one.
    #[instrument(skip(x_name, o_name))]
    pub fn new(
        x_name: impl Into<String>,
        o_name: impl Into<String>,
        first_mover: Mark,
        target_wins: u32,
    ) -> Self {
        let arena = Self {
            player_x: Player::new(x_name, Mark::X),
            player_o: Player::new(o_name, Mark::O),
            first_mover,
            target_wins: target_wins.max(1),
            history: Vec::new(),
            status: MatchStatus::Playing,
        };
        info!(
            x = %arena.player_x.name,
            o = %arena.player_o.name,
            %first_mover,
            target_wins = arena.target_wins,
            "match created"
        );
        arena
    }

    /// The player holding `mark`.
    pub fn player(&self, mark: Mark) -> &Player {
        match mark {
            Mark::X => &self.player_x,
            Mark::O => &self.player_o,
        }
    }

    /// Number of completed rounds.
    pub fn rounds_played(&self) -> usize {
        self.history.len()
    }

    /// Starts the next round, opening with the match's first mover.
    pub fn start_round(&self) -> Round {
        Round::new(self.first_mover)
    }

    /// Records a decided round, crediting a win to its player.
    ///
    /// A tied round credits neither side. The returned status reports
    /// whether this round produced a champion.
    ///
    /// # Errors
    ///
    /// `MatchOver` if a champion was already decided.
    #[instrument(skip(self))]
    pub fn record_round(&mut self, outcome: Outcome) -> Result<MatchStatus, MatchError> {
        if let MatchStatus::Over(_) = self.status {
            warn!("round recorded into a finished match");
            return Err(MatchError::MatchOver);
        }
        self.history.push(outcome);
        if let Outcome::Won(mark) = outcome {
            let player = match mark {
                Mark::X => &mut self.player_x,
                Mark::O => &mut self.player_o,
            };
            player.wins += 1;
            info!(winner = %player.name, wins = player.wins, "round credited");
            if player.wins >= self.target_wins {
                self.status = MatchStatus::Over(mark);
                info!(champion = %player.name, "match over");
            }
        }
        Ok(self.status)
    }

    /// A fresh match with the same pairing and zeroed scores.
    ///
    /// Score reset is this explicit construction; the first mover is
    /// re-chosen by the caller.
    pub fn rematch(&self, first_mover: Mark) -> Self {
        Self::new(
            self.player_x.name.clone(),
            self.player_o.name.clone(),
            first_mover,
            self.target_wins,
        )
    }
}
