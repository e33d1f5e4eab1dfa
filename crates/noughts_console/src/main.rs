//! Console tic-tac-toe: first to five round wins takes the match.

use anyhow::Result;
use clap::Parser;
use noughts_console::cli::Cli;
use noughts_console::orchestrator::Orchestrator;
use noughts_console::terminal::Terminal;
use noughts_engine::HeuristicOpponent;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Names the opponent introduces itself with.
const RIVAL_NAMES: [&str; 3] = ["R2D2", "Chappie", "Hal"];
/// Glyph the opponent marks squares with.
const RIVAL_GLYPH: char = 'O';

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so they never tear the board rendering.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let (mut naming_rng, rival) = match cli.seed {
        Some(seed) => (
            fastrand::Rng::with_seed(seed),
            HeuristicOpponent::with_seed(seed),
        ),
        None => (fastrand::Rng::new(), HeuristicOpponent::new()),
    };
    let rival_name = RIVAL_NAMES[naming_rng.usize(..RIVAL_NAMES.len())];

    let mut terminal = Terminal::new(cli.marker, RIVAL_GLYPH);
    terminal.welcome(cli.target);

    let human_name = match cli.name {
        Some(name) => name,
        None => terminal.prompt_name().await?,
    };
    info!(human = %human_name, rival = %rival_name, "session starting");

    let mut driver = Orchestrator::new(
        terminal,
        rival,
        human_name,
        rival_name,
        cli.target,
        Duration::from_millis(cli.delay_ms),
    );
    driver.run().await?;
    driver.front().goodbye();

    Ok(())
}
