//! Errors surfaced by the console game loop.
//!
//! The rules themselves cannot fail; only talking to the terminal can.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Stdin reached end of file while the game was waiting for a line.
    ///
    /// This ends the game without announcing a winner, so it is the one
    /// way out of `Game::run` other than a finished game.
    #[error("input closed before the game finished")]
    InputClosed,
}

pub type Result<T> = std::result::Result<T, GameError>;
