//! Progress text for people watching the game.
//!
//! The output is line oriented and meant to be read, not parsed.

use std::io::Write;

use colored::{ColoredString, Colorize};

use crate::core::dice::Color;
use crate::core::player::PlayerId;
use crate::core::state::GameState;
use crate::error::Result;
use crate::rules::{GameResult, RolledDie};

/// Writes game progress to any `Write` sink.
#[derive(Debug)]
pub struct Reporter<W> {
    out: W,
    tint: bool,
}

impl<W: Write> Reporter<W> {
    /// Reporter that tints die colors, for terminals.
    pub fn new(out: W) -> Self {
        Self { out, tint: true }
    }

    /// Reporter with no escape codes, for buffers and logs.
    pub fn plain(out: W) -> Self {
        Self { out, tint: false }
    }

    /// Get the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn color(&self, color: Color) -> ColoredString {
        let name = color.to_string();
        if !self.tint {
            return name.normal();
        }
        match color {
            Color::Green => name.green(),
            Color::Yellow => name.yellow(),
            Color::Red => name.red(),
        }
    }

    /// Turn banner, scores, and pool size.
    pub fn turn_header(&mut self, state: &GameState) -> Result<()> {
        writeln!(
            self.out,
            "===> Turn: {} Player {}'s turn",
            state.turn_number,
            state.active_player.number()
        )?;
        self.scores(state)?;
        writeln!(self.out, "Available number of dice: {}", state.pool_size())?;
        Ok(())
    }

    fn scores(&mut self, state: &GameState) -> Result<()> {
        writeln!(
            self.out,
            "Score: Player 1: {} - Player 2: {}",
            state.score(PlayerId::ONE),
            state.score(PlayerId::TWO)
        )?;
        Ok(())
    }

    /// The dice about to be rolled.
    pub fn selected(&mut self, state: &GameState) -> Result<()> {
        let hand = state.zones.dice_in(crate::zones::Zone::AtHand);
        for (i, &id) in hand.iter().enumerate() {
            let color = self.color(state.zones.die(id).color);
            writeln!(self.out, "Selected die {}: {}", i + 1, color)?;
        }
        writeln!(self.out, "Rolling {} dice", hand.len())?;
        Ok(())
    }

    /// Each die's result.
    pub fn rolled(&mut self, rolled: &[RolledDie]) -> Result<()> {
        for (i, die) in rolled.iter().enumerate() {
            let color = self.color(die.color);
            writeln!(self.out, "Die {}: {} {}", i + 1, color, die.face)?;
        }
        Ok(())
    }

    /// Brain, runner, and shotgun counts held this turn.
    pub fn hand_summary(&mut self, state: &GameState) -> Result<()> {
        writeln!(
            self.out,
            "At hand: {} Brain - {} Runner - {} Shotgun",
            state.brains(),
            state.runners(),
            state.shotguns()
        )?;
        Ok(())
    }

    /// Bust notice and the "press enter" prompt.
    pub fn busted(&mut self) -> Result<()> {
        writeln!(self.out, "3 or more shotgun. Busted for this turn")?;
        write!(self.out, "Press enter to continue...")?;
        self.out.flush()?;
        Ok(())
    }

    /// Brains moved into a player's score.
    pub fn banked(&mut self, player: PlayerId, brains: u32) -> Result<()> {
        writeln!(self.out, "Player {} banked {} brains", player.number(), brains)?;
        Ok(())
    }

    /// Continue-or-bank prompt. No newline; the answer follows on the line.
    pub fn decision_prompt(&mut self) -> Result<()> {
        write!(self.out, "Continue? ... y/n ")?;
        self.out.flush()?;
        Ok(())
    }

    /// Winner and final scores.
    pub fn winner(&mut self, result: &GameResult) -> Result<()> {
        writeln!(
            self.out,
            "Player {} is winner after {} turns",
            result.winner.number(),
            result.turns
        )?;
        writeln!(
            self.out,
            "Final score: Player 1: {} - Player 2: {}",
            result.scores[PlayerId::ONE],
            result.scores[PlayerId::TWO]
        )?;
        self.out.flush()?;
        Ok(())
    }
}
