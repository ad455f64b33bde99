//! Console implementation of the interaction seam.

use super::UserInteractor;
use crate::game::{Player, Position};
use anyhow::{Result, bail};
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal;
use std::io::{self, Write};
use tracing::debug;

/// Interacts with the players through the terminal, one key press at a
/// time.
#[derive(Debug, Default)]
pub struct ConsoleInteractor;

impl ConsoleInteractor {
    /// Creates a new console interactor.
    pub fn new() -> Self {
        Self
    }

    /// Reads a single key press, echoing printable characters.
    ///
    /// Raw mode is held only for the duration of the read so that
    /// announcements keep normal line discipline.
    fn read_key(&self) -> Result<KeyCode> {
        terminal::enable_raw_mode()?;
        let code = next_key_press();
        terminal::disable_raw_mode()?;
        let code = code?;

        if let KeyCode::Char(c) = code {
            // Raw mode suppresses echo; keep the console readable.
            let mut stdout = io::stdout();
            writeln!(stdout, "{c}")?;
            stdout.flush()?;
        }

        Ok(code)
    }
}

/// Waits for the next key-press event, surfacing Ctrl+C as an error since
/// raw mode swallows the usual signal.
fn next_key_press() -> Result<KeyCode> {
    loop {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if key.code == KeyCode::Char('c')
                    && key.modifiers.contains(KeyModifiers::CONTROL)
                {
                    bail!("interrupted");
                }
                return Ok(key.code);
            }
            _ => continue,
        }
    }
}

impl UserInteractor for ConsoleInteractor {
    fn announce(&mut self, text: &str) -> Result<()> {
        let mut stdout = io::stdout();
        writeln!(stdout, "{text}")?;
        stdout.flush()?;
        Ok(())
    }

    fn request_move(&mut self, player: Player) -> Result<Position> {
        loop {
            self.announce(&format!(
                "Player {}, enter your move (number): ",
                player.number()
            ))?;

            if let KeyCode::Char(c) = self.read_key()? {
                if let Some(digit) = c.to_digit(10) {
                    if (1..=9).contains(&digit) {
                        if let Some(position) = Position::from_index(digit as usize - 1) {
                            return Ok(position);
                        }
                    }
                }
            }

            debug!("rejected move input, prompting again");
        }
    }

    fn request_continue(&mut self) -> Result<bool> {
        loop {
            self.announce("Do you want to play again? (Y/N)")?;

            match self.read_key()? {
                KeyCode::Char('y' | 'Y') => return Ok(true),
                KeyCode::Char('n' | 'N') => return Ok(false),
                _ => debug!("rejected continue input, prompting again"),
            }
        }
    }
}
