//! The console game loop.

use std::io::Write;

use tracing::debug;

use crate::console::{Console, Reporter};
use crate::core::rng::RandomSource;
use crate::core::state::GameState;
use crate::error::Result;
use crate::rules::{self, DecisionOutcome, GameResult};

/// A game in progress, wired to a random source, an input console, and a
/// progress reporter.
pub struct Game<R, C, W> {
    state: GameState,
    rng: R,
    console: C,
    reporter: Reporter<W>,
}

impl<R, C, W> Game<R, C, W>
where
    R: RandomSource,
    C: Console,
    W: Write,
{
    /// Start a new game: full pool, zero scores, player 1 to act.
    pub fn new(rng: R, console: C, reporter: Reporter<W>) -> Self {
        Self::with_state(GameState::new(), rng, console, reporter)
    }

    /// Resume from an existing state.
    pub fn with_state(state: GameState, rng: R, console: C, reporter: Reporter<W>) -> Self {
        Self {
            state,
            rng,
            console,
            reporter,
        }
    }

    /// Current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Input console.
    pub fn console(&self) -> &C {
        &self.console
    }

    /// Play until someone wins.
    pub fn run(&mut self) -> Result<GameResult> {
        loop {
            if let Some(result) = self.step()? {
                return Ok(result);
            }
        }
    }

    /// Play one pass of the loop: a win check, then one draw and roll
    /// followed by a bust or a decision.
    ///
    /// Returns the result once the game is over.
    pub fn step(&mut self) -> Result<Option<GameResult>> {
        if let Some(result) = rules::check_winner(&self.state) {
            self.reporter.winner(&result)?;
            return Ok(Some(result));
        }

        self.reporter.turn_header(&self.state)?;

        rules::draw(&mut self.state, &mut self.rng);
        self.reporter.selected(&self.state)?;

        let rolled = rules::roll(&mut self.state, &mut self.rng);
        self.reporter.rolled(&rolled)?;
        self.reporter.hand_summary(&self.state)?;

        if rules::is_bust(&self.state) {
            rules::resolve_bust(&mut self.state);
            self.reporter.busted()?;
            self.console.pause()?;
            return Ok(None);
        }

        self.reporter.decision_prompt()?;
        let decision = self.console.read_decision()?;
        let player = self.state.active_player;
        let outcome = rules::apply_decision(&mut self.state, decision);
        debug!(?decision, ?outcome, "decision applied");

        if let DecisionOutcome::Banked { brains } = outcome {
            self.reporter.banked(player, brains)?;
        }

        Ok(None)
    }

    /// Take the game apart, e.g. to inspect what was written.
    pub fn into_parts(self) -> (GameState, R, C, Reporter<W>) {
        (self.state, self.rng, self.console, self.reporter)
    }
}
