//! Core domain types.

use super::position::Position;
use super::rules;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player 1 (goes first).
    X,
    /// Player 2 (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// The 1-indexed number used in prompts and announcements.
    pub fn number(self) -> u8 {
        match self {
            Player::X => 1,
            Player::O => 2,
        }
    }

    /// The token drawn on the board.
    pub fn mark(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

/// Errors that can occur when attempting a move.
///
/// An occupied cell is an expected outcome, not a fault: the caller
/// re-prompts for another position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The targeted cell already holds a mark.
    #[display("position {} is already occupied", position.number())]
    Occupied {
        /// Where the rejected move was aimed.
        position: Position,
    },
}

/// Evaluation of the board after a move. Recomputed from cell contents
/// every turn, never cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchState {
    /// The match is ongoing.
    InProgress,
    /// The match was won by a player.
    Won(Player),
    /// The board filled up with no winning line.
    Tied,
}

/// 3x3 tic-tac-toe board.
///
/// Marks are permanent for the life of a match: [`Board::try_move`] is the
/// only public mutation besides [`Board::reset`], and it refuses occupied
/// cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Clears every cell. Prior state is discarded irrecoverably, so this
    /// is only called between matches.
    pub fn reset(&mut self) {
        self.squares = [Square::Empty; 9];
    }

    /// Gets the square at the given position.
    pub fn get(&self, position: Position) -> Square {
        self.squares[position.to_index()]
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, position: Position) -> bool {
        self.get(position) == Square::Empty
    }

    /// Marks the cell for `player` if it is empty.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::Occupied`] and leaves the board unchanged if
    /// the cell already holds a mark.
    pub fn try_move(&mut self, position: Position, player: Player) -> Result<(), MoveError> {
        if !self.is_empty(position) {
            return Err(MoveError::Occupied { position });
        }
        self.squares[position.to_index()] = Square::Occupied(player);
        Ok(())
    }

    /// True iff any of the 8 lines is fully held by one player.
    ///
    /// Player-agnostic: it is consulted right after a move and before the
    /// turn switches, so the caller attributes the win to the player who
    /// just moved.
    pub fn has_win(&self) -> bool {
        rules::check_winner(self).is_some()
    }

    /// True iff no empty cells remain. Only consulted after [`Board::has_win`]
    /// returned false.
    pub fn has_tie(&self) -> bool {
        rules::is_full(self)
    }

    /// Evaluates the board into a [`MatchState`]. Win is checked before
    /// tie, so a move that fills the last cell and completes a line is a
    /// win, never a tie.
    pub fn state(&self) -> MatchState {
        if let Some(winner) = rules::check_winner(self) {
            MatchState::Won(winner)
        } else if rules::is_full(self) {
            MatchState::Tied
        } else {
            MatchState::InProgress
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    /// Renders the grid with marks on occupied cells and 1-indexed
    /// numbers on free ones.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            if row > 0 {
                write!(f, "\n---|---|---\n")?;
            }
            for col in 0..3 {
                if col > 0 {
                    write!(f, " |")?;
                }
                let index = row * 3 + col;
                match self.squares[index] {
                    Square::Empty => write!(f, " {}", index + 1)?,
                    Square::Occupied(player) => write!(f, " {}", player.mark())?,
                }
            }
        }
        Ok(())
    }
}
