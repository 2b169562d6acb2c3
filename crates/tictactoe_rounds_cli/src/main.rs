//! ttt-rounds - best-of-three tic-tac-toe in the terminal.

use anyhow::Result;
use clap::Parser;
use tictactoe_rounds::{GameEngine, OpeningPolicy};
use tictactoe_rounds_cli::{Cli, Command, Console, ConsoleConfig, ConsoleOptions, replay};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            opening,
            json,
        } => {
            let config = match config {
                Some(path) => ConsoleConfig::from_file(path)?,
                None => ConsoleConfig::default(),
            }
            .with_opening(opening);
            init_tracing(config.log_filter());
            run_play(&config, json)
        }
        Command::Replay { moves, opening } => {
            init_tracing("warn");
            run_replay(&moves, opening.unwrap_or_default())
        }
    }
}

/// Logs go to stderr so stdout carries only the game.
fn init_tracing(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Run the interactive console
#[instrument(skip(config))]
fn run_play(config: &ConsoleConfig, json: bool) -> Result<()> {
    info!(opening = %config.opening(), "Starting console game");

    let engine = GameEngine::with_opening(*config.opening());
    let options = ConsoleOptions {
        json,
        show_hints: *config.show_hints(),
    };
    let stdin = std::io::stdin();
    let mut console = Console::new(engine, std::io::stdout(), options);
    console.run(stdin.lock())?;

    info!(round = console.engine().current_round(), "Console closed");
    Ok(())
}

/// Run a scripted replay and print the final snapshot
#[instrument]
fn run_replay(moves: &str, opening: OpeningPolicy) -> Result<()> {
    let snapshot = replay(moves, opening)?;
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}
