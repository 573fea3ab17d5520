//! Zone system for die locations.
//!
//! ## Key Types
//!
//! - `Zone`: pool, at-hand, brain, shotgun, runner
//! - `DiceZones`: die location tracking and movement

pub mod manager;

pub use manager::{DiceZones, Zone};
