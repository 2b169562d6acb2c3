//! Terminal presenter for the multi-round tic-tac-toe engine.
//!
//! - **Cli**: argument parsing for the `ttt-rounds` binary
//! - **Config**: TOML settings with serde defaults
//! - **Console**: line-oriented play loop and scripted replay

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod console;

pub use cli::{Cli, Command};
pub use config::{ConfigError, ConsoleConfig};
pub use console::{
    Console, ConsoleCommand, ConsoleOptions, Flow, ParseCommandError, ReplayError, replay,
};
