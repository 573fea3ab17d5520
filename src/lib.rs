//! # brain-dice
//!
//! A two-player push-your-luck dice game for the terminal.
//!
//! ## Rules
//!
//! Thirteen dice sit in a shared pool: 6 green, 4 yellow, 3 red. Each face
//! is a brain, a shotgun, or a runner, and redder dice carry more shotguns.
//! On your turn you draw three dice and roll them. Brains and shotguns stay
//! in front of you; runners may be rolled again. Keep rolling (topping the
//! hand back up to three from the pool) or bank your brains. Three shotguns
//! in one turn and you lose that turn's brains.
//!
//! The game ends at the start of a round in which someone holds 13 or more
//! brains, so player 2 always gets a reply to player 1 reaching the target.
//!
//! ## Modules
//!
//! - `core`: dice, players, state, decisions, RNG, fixed rules
//! - `zones`: die location tracking (pool and hand zones)
//! - `rules`: phase transitions (draw, roll, bust, decide, win check)
//! - `console`: decision input and progress output
//! - `game`: the loop tying rules to a console

pub mod core;
pub mod zones;
pub mod rules;
pub mod console;
pub mod game;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    Color, Die, DieId, Face,
    PlayerId, PlayerMap,
    GameRng, RandomSource, ScriptedRng,
    Decision, TurnOutcome, TurnRecord,
    GameState,
};

pub use crate::zones::{DiceZones, Zone};

pub use crate::rules::{DecisionOutcome, GameResult, RolledDie};

pub use crate::console::{Console, LineConsole, Reporter, ScriptedConsole};

pub use crate::game::Game;

pub use crate::error::{GameError, Result};
