//! Tie detection.

use super::super::{Board, Position};
use strum::IntoEnumIterator;
use tracing::instrument;

/// Checks if the board is full.
///
/// A full board with no winner is a tied game.
#[instrument]
pub fn is_full(board: &Board) -> bool {
    Position::iter().all(|position| !board.is_empty(position))
}
