//! Game rules.
//!
//! The rules are a set of phase transitions over `GameState`:
//! - Draw up to three dice, roll them, sort by face
//! - Bust at three shotguns
//! - Continue with runners, or bank brains
//! - Win check at the start of each round

pub mod engine;

pub use engine::{
    apply_decision, check_winner, draw, is_bust, resolve_bust, roll, DecisionOutcome, GameResult,
    RolledDie,
};
