//! Where decisions come from.
//!
//! The game loop never touches stdin directly. It asks a `Console` for the
//! next decision and for the post-bust pause, so the same loop runs against
//! a terminal, a byte buffer, or a scripted list of answers.

use std::collections::VecDeque;
use std::io::BufRead;

use crate::core::action::Decision;
use crate::error::{GameError, Result};

/// Source of player input.
pub trait Console {
    /// Block until the active player answers the continue-or-bank prompt.
    fn read_decision(&mut self) -> Result<Decision>;

    /// Block until the player acknowledges a bust. The content is ignored.
    fn pause(&mut self) -> Result<()>;
}

/// Reads one line per request from any buffered reader.
///
/// ```
/// use std::io::Cursor;
/// use brain_dice::console::{Console, LineConsole};
/// use brain_dice::core::Decision;
///
/// let mut console = LineConsole::new(Cursor::new("y\nmaybe\n\nn\n"));
/// assert_eq!(console.read_decision().unwrap(), Decision::Continue);
/// assert_eq!(console.read_decision().unwrap(), Decision::Invalid);
/// console.pause().unwrap();
/// assert_eq!(console.read_decision().unwrap(), Decision::Bank);
/// assert!(console.read_decision().is_err());
/// ```
#[derive(Debug)]
pub struct LineConsole<R> {
    reader: R,
    line: String,
}

impl<R: BufRead> LineConsole<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
        }
    }

    fn read_line(&mut self) -> Result<&str> {
        self.line.clear();
        if self.reader.read_line(&mut self.line)? == 0 {
            return Err(GameError::InputClosed);
        }
        Ok(&self.line)
    }
}

impl<R: BufRead> Console for LineConsole<R> {
    fn read_decision(&mut self) -> Result<Decision> {
        let line = self.read_line()?;
        Ok(Decision::parse(line))
    }

    fn pause(&mut self) -> Result<()> {
        self.read_line().map(|_| ())
    }
}

/// Replays a fixed list of decisions. Pauses return immediately.
///
/// Running out of decisions is reported as `GameError::InputClosed`, the
/// same as a terminal reaching end of file.
#[derive(Clone, Debug, Default)]
pub struct ScriptedConsole {
    decisions: VecDeque<Decision>,
    pauses: usize,
}

impl ScriptedConsole {
    pub fn new(decisions: impl IntoIterator<Item = Decision>) -> Self {
        Self {
            decisions: decisions.into_iter().collect(),
            pauses: 0,
        }
    }

    /// Decisions not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.decisions.len()
    }

    /// How many times the game paused after a bust.
    #[must_use]
    pub fn pauses(&self) -> usize {
        self.pauses
    }
}

impl Console for ScriptedConsole {
    fn read_decision(&mut self) -> Result<Decision> {
        self.decisions.pop_front().ok_or(GameError::InputClosed)
    }

    fn pause(&mut self) -> Result<()> {
        self.pauses += 1;
        Ok(())
    }
}
