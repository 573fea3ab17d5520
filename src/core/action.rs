//! Player decisions and turn records.
//!
//! After a roll that does not bust, the active player answers one prompt.
//! The answer arrives as a `Decision`; a finished turn is recorded as a
//! `TurnRecord`.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// Answer to the continue-or-bank prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Decision {
    /// Roll again: runners are re-rolled, topped up from the pool.
    Continue,
    /// Stop and add this turn's brains to the score.
    Bank,
    /// Anything else. Has no effect on the game.
    Invalid,
}

impl Decision {
    /// Interpret one console line.
    ///
    /// A single trailing newline (`\n` or `\r\n`) is stripped; the rest must
    /// be exactly `y` or `n`. Surrounding spaces, capitals, and empty lines
    /// are all `Invalid`.
    ///
    /// ```
    /// use brain_dice::core::Decision;
    ///
    /// assert_eq!(Decision::parse("y\n"), Decision::Continue);
    /// assert_eq!(Decision::parse("n"), Decision::Bank);
    /// assert_eq!(Decision::parse("Y\n"), Decision::Invalid);
    /// ```
    #[must_use]
    pub fn parse(line: &str) -> Self {
        // A carriage return only counts as part of a CRLF ending.
        let line = match line.strip_suffix('\n') {
            Some(l) => l.strip_suffix('\r').unwrap_or(l),
            None => line,
        };
        match line {
            "y" => Decision::Continue,
            "n" => Decision::Bank,
            _ => Decision::Invalid,
        }
    }
}

/// How a turn ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// Three or more shotguns. The brains held this turn were lost.
    Bust { lost_brains: u32 },
    /// The player stopped and scored these brains.
    Bank { brains: u32 },
}

impl TurnOutcome {
    /// Brains added to the score by this turn.
    #[must_use]
    pub const fn scored(self) -> u32 {
        match self {
            TurnOutcome::Bust { .. } => 0,
            TurnOutcome::Bank { brains } => brains,
        }
    }
}

/// A completed turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// The player whose turn it was.
    pub player: PlayerId,

    /// Turn counter when the turn ended.
    pub turn: u32,

    /// Bust or bank.
    pub outcome: TurnOutcome,
}

impl TurnRecord {
    /// Create a new turn record.
    #[must_use]
    pub fn new(player: PlayerId, turn: u32, outcome: TurnOutcome) -> Self {
        Self {
            player,
            turn,
            outcome,
        }
    }
}
