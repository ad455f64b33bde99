//! Match and session control flow.

use crate::game::{Board, MatchState, Player};
use crate::interact::UserInteractor;
use anyhow::Result;
use tracing::{debug, info, instrument};

/// Drives the session → match → turn hierarchy.
///
/// Owns the board and the active player for the lifetime of the session;
/// every piece of I/O goes through the interactor, so the whole loop runs
/// unchanged against the console or a scripted double.
pub struct MatchController<I> {
    board: Board,
    interactor: I,
    current: Player,
}

impl<I: UserInteractor> MatchController<I> {
    /// Creates a controller for a fresh session.
    pub fn new(interactor: I) -> Self {
        Self {
            board: Board::new(),
            interactor,
            current: Player::X,
        }
    }

    /// Runs matches until the players decline another one.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<()> {
        info!("session started");

        loop {
            let outcome = self.run_match()?;
            info!(?outcome, "match finished");

            if !self.interactor.request_continue()? {
                break;
            }
        }

        info!("session ended");
        Ok(())
    }

    /// Plays one match to completion and reports its terminal state.
    fn run_match(&mut self) -> Result<MatchState> {
        self.board.reset();
        self.current = Player::X;

        loop {
            self.show_board()?;
            self.make_move()?;

            // Win before tie: a move that fills the last cell and
            // completes a line counts as a win. The winner reported by
            // the board is the player who just moved, since the turn has
            // not switched yet.
            match self.board.state() {
                MatchState::Won(winner) => {
                    self.show_board()?;
                    self.interactor
                        .announce(&format!("Player {} has Won!", winner.number()))?;
                    return Ok(MatchState::Won(winner));
                }
                MatchState::Tied => {
                    self.show_board()?;
                    self.interactor.announce("Tied game")?;
                    return Ok(MatchState::Tied);
                }
                MatchState::InProgress => self.current = self.current.opponent(),
            }
        }
    }

    /// Requests moves for the active player until one lands on a free
    /// cell. Unbounded: a human eventually supplies a legal move.
    fn make_move(&mut self) -> Result<()> {
        loop {
            let position = self.interactor.request_move(self.current)?;
            match self.board.try_move(position, self.current) {
                Ok(()) => {
                    debug!(player = ?self.current, %position, "move made");
                    return Ok(());
                }
                Err(e) => debug!(%e, "move rejected"),
            }
        }
    }

    fn show_board(&mut self) -> Result<()> {
        self.interactor.announce(&self.board.to_string())
    }
}
