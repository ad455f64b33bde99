//! Command-line interface.

use clap::Parser;

/// Two-player tic-tac-toe played in the terminal.
///
/// The game takes no arguments; the struct exists so clap provides
/// `--help` and `--version`.
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe played in the terminal")]
#[command(version)]
pub struct Cli {}
