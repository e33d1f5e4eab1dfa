//! Drives rounds and matches between the human and the engine opponent.

use crate::io::{FirstMoverChoice, MoveSource, Renderer, ReplayPrompt};
use anyhow::{Context, Result, bail};
use noughts_engine::{HeuristicOpponent, Mark, Match, MatchStatus, MoveError, Outcome, Round};
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// The human always marks X.
pub const HUMAN_MARK: Mark = Mark::X;
/// The engine opponent always marks O.
pub const RIVAL_MARK: Mark = Mark::O;

/// Sequences rounds into first-to-N matches against a front end.
///
/// One match runs per first-mover choice; after a champion is announced
/// the replay prompt decides whether a fresh match starts.
pub struct Orchestrator<F> {
    front: F,
    rival: HeuristicOpponent,
    human_name: String,
    rival_name: String,
    target_wins: u32,
    thinking_delay: Duration,
}

impl<F> Orchestrator<F>
where
    F: MoveSource + Renderer + ReplayPrompt + FirstMoverChoice,
{
    /// Creates a driver over `front` with the engine opponent `rival`.
    pub fn new(
        front: F,
        rival: HeuristicOpponent,
        human_name: impl Into<String>,
        rival_name: impl Into<String>,
        target_wins: u32,
        thinking_delay: Duration,
    ) -> Self {
        Self {
            front,
            rival,
            human_name: human_name.into(),
            rival_name: rival_name.into(),
            target_wins,
            thinking_delay,
        }
    }

    /// Plays matches until the replay prompt declines.
    pub async fn run(&mut self) -> Result<()> {
        let first = self.front.first_mover().await?;
        let mut arena = Match::new(&self.human_name, &self.rival_name, first, self.target_wins);
        loop {
            self.play_match(&mut arena).await?;
            if !self.front.play_again().await? {
                info!("session over");
                return Ok(());
            }
            let first = self.front.first_mover().await?;
            arena = arena.rematch(first);
        }
    }

    /// Returns a reference to the front end.
    pub fn front(&self) -> &F {
        &self.front
    }

    #[instrument(skip_all)]
    async fn play_match(&mut self, arena: &mut Match) -> Result<()> {
        loop {
            let mut round = arena.start_round();
            let outcome = self.play_round(&mut round).await?;
            self.front.show_board(&round);
            self.front.announce_round(outcome);

            let status = arena
                .record_round(outcome)
                .context("recording a round into a finished match")?;
            self.front
                .announce_score(arena.player(Mark::X), arena.player(Mark::O));

            if let MatchStatus::Over(mark) = status {
                self.front.announce_match(arena.player(mark));
                return Ok(());
            }
        }
    }

    async fn play_round(&mut self, round: &mut Round) -> Result<Outcome> {
        loop {
            match round.to_move() {
                None => break,
                Some(mark) if mark == HUMAN_MARK => self.human_turn(round).await?,
                Some(_) => self.rival_turn(round).await?,
            }
        }
        round.outcome().context("round ended without an outcome")
    }

    async fn human_turn(&mut self, round: &mut Round) -> Result<()> {
        self.front.show_board(round);
        loop {
            let open = round.board().empty_indices();
            let index = self.front.choose_cell(&open).await?;
            match round.play(index) {
                Ok(()) => return Ok(()),
                Err(MoveError::InvalidIndex(_) | MoveError::CellOccupied(_)) => {
                    // The front end claimed it was valid; ask again.
                    warn!(index, "engine rejected the square, re-prompting");
                }
                Err(MoveError::RoundOver) => bail!("move sequenced into a decided round"),
            }
        }
    }

    async fn rival_turn(&mut self, round: &mut Round) -> Result<()> {
        if !self.thinking_delay.is_zero() {
            tokio::time::sleep(self.thinking_delay).await;
        }
        let Some(index) = self.rival.choose(round.board(), RIVAL_MARK) else {
            bail!("opponent asked to move on a full board");
        };
        round.play(index)?;
        debug!(index, "opponent played");
        Ok(())
    }
}
