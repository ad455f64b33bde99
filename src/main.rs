//! Tic-tac-toe console entry point.
//!
//! Serves as the composition root: wires the console interactor into the
//! match controller.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use tictactoe::{ConsoleInteractor, MatchController};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let _cli = cli::Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    info!("Starting tic-tac-toe");

    let interactor = ConsoleInteractor::new();
    let mut controller = MatchController::new(interactor);
    controller.run()
}
