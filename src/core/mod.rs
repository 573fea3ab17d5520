//! Core types: dice, players, state, decisions, RNG, fixed rules.

pub mod config;
pub mod dice;
pub mod player;
pub mod rng;
pub mod action;
pub mod state;

pub use dice::{Color, Die, DieId, Face};
pub use player::{PlayerId, PlayerMap};
pub use rng::{GameRng, RandomSource, ScriptedRng};
pub use action::{Decision, TurnOutcome, TurnRecord};
pub use state::GameState;
