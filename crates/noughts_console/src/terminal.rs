//! Line-oriented terminal implementation of the driver capabilities.

use crate::io::{FirstMoverChoice, MoveSource, Renderer, ReplayPrompt};
use anyhow::{Context, Result};
use async_trait::async_trait;
use noughts_engine::{Board, Mark, Outcome, Player, Round, Square};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::debug;

/// Joins indices into a prompt list: "1, 2, or 5".
pub fn join_or(items: &[usize]) -> String {
    let words: Vec<String> = items.iter().map(ToString::to_string).collect();
    match words.as_slice() {
        [] => String::new(),
        [only] => only.clone(),
        [first, second] => format!("{first} or {second}"),
        [head @ .., last] => format!("{}, or {last}", head.join(", ")),
    }
}

/// Console front end: prompts on stdout, reads replies from stdin.
///
/// The human always marks X and the engine opponent marks O; the glyphs
/// drawn for each are the terminal's own affair and never reach the
/// engine.
pub struct Terminal {
    lines: Lines<BufReader<Stdin>>,
    human_glyph: char,
    rival_glyph: char,
}

impl Terminal {
    /// Creates a terminal drawing `human_glyph` for X and `rival_glyph`
    /// for O.
    pub fn new(human_glyph: char, rival_glyph: char) -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
            human_glyph,
            rival_glyph,
        }
    }

    async fn read_line(&mut self) -> Result<String> {
        let line = self
            .lines
            .next_line()
            .await
            .context("reading from stdin")?
            .context("stdin closed")?;
        Ok(line.trim().to_string())
    }

    /// Prompts until a non-empty name comes back.
    pub async fn prompt_name(&mut self) -> Result<String> {
        loop {
            println!("What is your name?");
            let name = self.read_line().await?;
            if !name.is_empty() {
                return Ok(name);
            }
            println!("Please enter your name.");
        }
    }

    /// Opening banner.
    pub fn welcome(&self, target_wins: u32) {
        println!("Welcome to Tic Tac Toe!");
        println!("First to win {target_wins} rounds takes the match!");
        println!();
    }

    /// Closing banner.
    pub fn goodbye(&self) {
        println!("Thanks for playing Tic Tac Toe! Goodbye!");
    }

    fn glyph(&self, mark: Mark) -> char {
        match mark {
            Mark::X => self.human_glyph,
            Mark::O => self.rival_glyph,
        }
    }

    fn draw_board(&self, board: &Board) {
        for row in 0..3 {
            println!("     |     |");
            let cells: Vec<String> = (0..3)
                .map(|col| {
                    let index = row * 3 + col + 1;
                    match board.get(index) {
                        Some(Square::Occupied(mark)) => self.glyph(mark).to_string(),
                        _ => index.to_string(),
                    }
                })
                .collect();
            println!("  {}  |  {}  |  {}", cells[0], cells[1], cells[2]);
            println!("     |     |");
            if row < 2 {
                println!("-----+-----+-----");
            }
        }
    }
}

#[async_trait]
impl MoveSource for Terminal {
    async fn choose_cell(&mut self, open: &[usize]) -> Result<usize> {
        loop {
            println!("Choose a square: {}", join_or(open));
            let reply = self.read_line().await?;
            match reply.parse::<usize>() {
                Ok(index) if open.contains(&index) => {
                    debug!(index, "square chosen");
                    return Ok(index);
                }
                _ => println!("Sorry, that's not a valid choice."),
            }
        }
    }
}

impl Renderer for Terminal {
    fn show_board(&mut self, round: &Round) {
        println!();
        self.draw_board(round.board());
        println!();
    }

    fn announce_round(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Won(mark) => println!("{} wins the round!", self.glyph(mark)),
            Outcome::Tied => println!("It's a tie!"),
        }
    }

    fn announce_score(&mut self, player_x: &Player, player_o: &Player) {
        println!("{}: {}", player_x.name(), player_x.wins());
        println!("{}: {}", player_o.name(), player_o.wins());
        println!();
    }

    fn announce_match(&mut self, champion: &Player) {
        println!("{} takes the match!", champion.name());
    }
}

#[async_trait]
impl ReplayPrompt for Terminal {
    async fn play_again(&mut self) -> Result<bool> {
        loop {
            println!("Would you like to play again? (y/n)");
            match self.read_line().await?.to_lowercase().as_str() {
                "y" => return Ok(true),
                "n" => return Ok(false),
                _ => println!("Sorry, must be y or n."),
            }
        }
    }
}

#[async_trait]
impl FirstMoverChoice for Terminal {
    async fn first_mover(&mut self) -> Result<Mark> {
        loop {
            println!("Who should go first? (p)layer or (c)omputer?");
            match self.read_line().await?.to_lowercase().as_str() {
                "p" => return Ok(Mark::X),
                "c" => return Ok(Mark::O),
                _ => println!("Please enter p for player or c for computer."),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::join_or;

    #[test]
    fn test_join_or_empty() {
        assert_eq!(join_or(&[]), "");
    }

    #[test]
    fn test_join_or_single() {
        assert_eq!(join_or(&[4]), "4");
    }

    #[test]
    fn test_join_or_pair() {
        assert_eq!(join_or(&[4, 9]), "4 or 9");
    }

    #[test]
    fn test_join_or_many() {
        assert_eq!(join_or(&[1, 2, 5]), "1, 2, or 5");
    }
}
