//! Game state.
//!
//! ## GameState
//!
//! Everything a game needs between phases:
//! - Die locations (pool and hand zones)
//! - Banked scores
//! - Active player and turn counter
//! - History of completed turns
//!
//! The rules in `crate::rules` take `&mut GameState` and return what
//! happened; there is no other mutable game data.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::TurnRecord;
use super::player::{PlayerId, PlayerMap};
use crate::zones::{DiceZones, Zone};

/// Complete game state.
///
/// Uses an `im` vector for history so snapshots clone in O(1).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameState {
    /// Die locations.
    pub zones: DiceZones,

    /// Banked brains per player. Never decreases.
    pub scores: PlayerMap<u32>,

    /// Player whose turn it is.
    pub active_player: PlayerId,

    /// Round counter (starts at 1). Advances when play returns to player 1.
    pub turn_number: u32,

    /// Completed turns, oldest first.
    pub history: Vector<TurnRecord>,
}

impl GameState {
    /// Create the starting state: all dice in the pool, scores at zero,
    /// player 1 to act, turn 1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            zones: DiceZones::standard(),
            scores: PlayerMap::with_value(0),
            // Seat the game "after player 2" so the opening alternation
            // lands on player 1.
            active_player: PlayerId::TWO.next(),
            turn_number: 1,
            history: Vector::new(),
        }
    }

    /// Banked score for a player.
    #[must_use]
    pub fn score(&self, player: PlayerId) -> u32 {
        self.scores[player]
    }

    /// Dice left in the pool.
    #[must_use]
    pub fn pool_size(&self) -> usize {
        self.zones.count(Zone::Pool)
    }

    /// Brains rolled this turn (not yet banked).
    #[must_use]
    pub fn brains(&self) -> usize {
        self.zones.count(Zone::Brain)
    }

    /// Shotguns rolled this turn.
    #[must_use]
    pub fn shotguns(&self) -> usize {
        self.zones.count(Zone::Shotgun)
    }

    /// Runners waiting to be re-rolled.
    #[must_use]
    pub fn runners(&self) -> usize {
        self.zones.count(Zone::Runner)
    }

    /// Dice drawn and not yet rolled.
    #[must_use]
    pub fn at_hand(&self) -> usize {
        self.zones.count(Zone::AtHand)
    }

    /// Hand the turn to the other player.
    ///
    /// The turn counter advances when play passes from player 2 back to
    /// player 1.
    pub fn pass_turn(&mut self) {
        self.active_player = self.active_player.next();
        if self.active_player == PlayerId::ONE {
            self.turn_number += 1;
        }
    }

    /// Record a completed turn.
    pub fn record_turn(&mut self, record: TurnRecord) {
        self.history.push_back(record);
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
