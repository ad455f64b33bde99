//! Two-player tic-tac-toe for the terminal.
//!
//! # Architecture
//!
//! - **Board** ([`Board`]): owns the nine-cell grid, validates moves,
//!   evaluates win/tie conditions and renders itself as text.
//! - **MatchController** ([`MatchController`]): sequences turns, matches
//!   and the play-again decision.
//! - **UserInteractor** ([`UserInteractor`]): the seam to the console (or
//!   a test double) — announcements and move/continue prompts.
//!
//! # Example
//!
//! ```no_run
//! use tictactoe::{ConsoleInteractor, MatchController};
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut controller = MatchController::new(ConsoleInteractor::new());
//! controller.run()?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod game;
mod interact;
mod session;

// Crate-level exports - Board and domain types
pub use game::{Board, MatchState, MoveError, Player, Position, Square};

// Crate-level exports - Interaction seam
pub use interact::{ConsoleInteractor, UserInteractor};

// Crate-level exports - Session control
pub use session::MatchController;
