//! The seam between the game and its players.

mod console;

pub use console::ConsoleInteractor;

use crate::game::{Player, Position};
use anyhow::Result;

/// Capabilities the game needs from its surroundings.
///
/// The console implements this for real play; the session tests substitute
/// a scripted double.
pub trait UserInteractor {
    /// Displays text to the player(s).
    fn announce(&mut self, text: &str) -> Result<()>;

    /// Blocks until the active player supplies a position.
    ///
    /// Implementations own input validation: the returned position is
    /// in range by construction, and anything unparseable is re-prompted
    /// before this returns.
    fn request_move(&mut self, player: Player) -> Result<Position>;

    /// Asks whether another match should start.
    fn request_continue(&mut self) -> Result<bool>;
}
