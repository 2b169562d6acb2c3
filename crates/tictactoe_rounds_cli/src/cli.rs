//! Command-line interface.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictactoe_rounds::OpeningPolicy;

/// Best-of-three tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "ttt-rounds")]
#[command(about = "Multi-round tic-tac-toe for two players", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively on stdin/stdout
    Play {
        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Who opens each round (always-player-one, alternate-by-round)
        #[arg(long)]
        opening: Option<OpeningPolicy>,

        /// Print the engine snapshot as JSON instead of the grid
        #[arg(long)]
        json: bool,
    },

    /// Apply a scripted sequence such as "0,0 1,1 new 0,1" and print the final state as JSON
    Replay {
        /// Whitespace-separated moves (`row,column`) and commands (`new`, `restart`)
        moves: String,

        /// Who opens each round (always-player-one, alternate-by-round)
        #[arg(long)]
        opening: Option<OpeningPolicy>,
    },
}
