//! Zone manager for die locations and movement.
//!
//! `DiceZones` is a bag of dice keyed by `DieId`. Every die in the set is
//! in exactly one `Zone` at every instant; dice move between zones but are
//! never created or destroyed. Each zone keeps its ids sorted, so drawing
//! "the die at index i of the pool" is stable for a given pool content.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::config::standard_dice;
use crate::core::dice::{Color, Die, DieId, Face};
use crate::core::rng::RandomSource;

/// Where a die currently is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    /// The shared reserve ("selection box").
    Pool,
    /// Drawn into the hand, waiting to be rolled.
    AtHand,
    /// Rolled a brain this turn.
    Brain,
    /// Rolled a shotgun this turn.
    Shotgun,
    /// Rolled a runner this turn; may be rolled again.
    Runner,
}

impl Zone {
    /// All zones.
    pub const ALL: [Zone; 5] = [Zone::Pool, Zone::AtHand, Zone::Brain, Zone::Shotgun, Zone::Runner];

    /// Zones held by the active player during a turn.
    pub const HAND: [Zone; 4] = [Zone::AtHand, Zone::Brain, Zone::Shotgun, Zone::Runner];

    /// The zone a die moves to after rolling `face`.
    #[must_use]
    pub const fn for_face(face: Face) -> Zone {
        match face {
            Face::Brain => Zone::Brain,
            Face::Shotgun => Zone::Shotgun,
            Face::Runner => Zone::Runner,
        }
    }
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Zone::Pool => "pool",
            Zone::AtHand => "at hand",
            Zone::Brain => "brain",
            Zone::Shotgun => "shotgun",
            Zone::Runner => "runner",
        };
        f.write_str(name)
    }
}

/// Tracks which zone every die is in.
///
/// ## Usage
///
/// ```
/// use brain_dice::core::GameRng;
/// use brain_dice::zones::{DiceZones, Zone};
///
/// let mut zones = DiceZones::standard();
/// assert_eq!(zones.count(Zone::Pool), 13);
///
/// let mut rng = GameRng::new(1);
/// let id = zones.draw_random(&mut rng).unwrap();
/// assert_eq!(zones.zone_of(id), Some(Zone::AtHand));
/// assert_eq!(zones.count(Zone::Pool), 12);
///
/// zones.return_hand_to_pool();
/// assert_eq!(zones.count(Zone::Pool), 13);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DiceZones {
    /// Every die in the set, indexed by `DieId`.
    dice: Vec<Die>,

    /// Die locations: die_id -> zone
    locations: FxHashMap<DieId, Zone>,

    /// Sorted ids per zone.
    zone_order: FxHashMap<Zone, Vec<DieId>>,
}

impl DiceZones {
    /// Create zones holding `dice`, all in the pool.
    ///
    /// Panics if the dice ids are not exactly `0..dice.len()` in order.
    #[must_use]
    pub fn new(dice: Vec<Die>) -> Self {
        for (i, die) in dice.iter().enumerate() {
            assert_eq!(die.id.index(), i, "Die ids must be sequential from 0");
        }

        let mut zone_order: FxHashMap<Zone, Vec<DieId>> = Zone::ALL
            .iter()
            .map(|&zone| (zone, Vec::new()))
            .collect();
        let pool: Vec<DieId> = dice.iter().map(|d| d.id).collect();
        let locations = pool.iter().map(|&id| (id, Zone::Pool)).collect();
        zone_order.insert(Zone::Pool, pool);

        Self {
            dice,
            locations,
            zone_order,
        }
    }

    /// Create zones holding the standard 13-die set.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(standard_dice())
    }

    /// Look up a die by id.
    ///
    /// Panics if the id is not part of this set.
    #[must_use]
    pub fn die(&self, id: DieId) -> &Die {
        &self.dice[id.index()]
    }

    /// Get the zone a die is in.
    #[must_use]
    pub fn zone_of(&self, id: DieId) -> Option<Zone> {
        self.locations.get(&id).copied()
    }

    /// Ids in a zone, ascending.
    #[must_use]
    pub fn dice_in(&self, zone: Zone) -> &[DieId] {
        self.zone_order.get(&zone).map_or(&[], |v| v.as_slice())
    }

    /// Number of dice in a zone.
    #[must_use]
    pub fn count(&self, zone: Zone) -> usize {
        self.dice_in(zone).len()
    }

    /// Number of dice of `color` in a zone.
    #[must_use]
    pub fn count_color(&self, zone: Zone, color: Color) -> usize {
        self.dice_in(zone)
            .iter()
            .filter(|&&id| self.die(id).color == color)
            .count()
    }

    /// Number of dice held by the active player across all hand zones.
    #[must_use]
    pub fn hand_count(&self) -> usize {
        Zone::HAND.iter().map(|&zone| self.count(zone)).sum()
    }

    /// Move a die to another zone.
    ///
    /// Returns the old zone, or `None` if the die isn't part of this set.
    pub fn move_die(&mut self, id: DieId, to: Zone) -> Option<Zone> {
        let from = self.locations.get(&id).copied()?;
        if from == to {
            return Some(from);
        }

        if let Some(order) = self.zone_order.get_mut(&from) {
            order.retain(|&d| d != id);
        }

        self.locations.insert(id, to);

        let order = self.zone_order.entry(to).or_default();
        let pos = order.binary_search(&id).unwrap_or_else(|p| p);
        order.insert(pos, id);

        Some(from)
    }

    /// Move every die in `from` to `to`. Returns how many moved.
    pub fn move_all(&mut self, from: Zone, to: Zone) -> usize {
        if from == to {
            return 0;
        }
        let ids = self.dice_in(from).to_vec();
        for &id in &ids {
            self.move_die(id, to);
        }
        ids.len()
    }

    /// Move a uniformly random pool die into the hand.
    ///
    /// Returns `None` if the pool is empty.
    pub fn draw_random(&mut self, rng: &mut impl RandomSource) -> Option<DieId> {
        let pool = self.dice_in(Zone::Pool);
        if pool.is_empty() {
            return None;
        }
        let id = pool[rng.pick(pool.len())];
        self.move_die(id, Zone::AtHand);
        Some(id)
    }

    /// Flush every hand zone back into the pool. Returns how many moved.
    pub fn return_hand_to_pool(&mut self) -> usize {
        Zone::HAND
            .iter()
            .map(|&zone| self.move_all(zone, Zone::Pool))
            .sum()
    }

    /// Check that every die is in exactly one zone and that the zone lists
    /// agree with the location map.
    #[must_use]
    pub fn is_conserved(&self) -> bool {
        let listed: usize = Zone::ALL.iter().map(|&zone| self.count(zone)).sum();
        if listed != self.dice.len() || self.locations.len() != self.dice.len() {
            return false;
        }

        Zone::ALL.iter().all(|&zone| {
            self.dice_in(zone)
                .iter()
                .all(|id| self.locations.get(id) == Some(&zone))
        })
    }
}

impl Default for DiceZones {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::{GameRng, ScriptedRng};

    #[test]
    fn test_standard_starts_in_pool() {
        let zones = DiceZones::standard();
        assert_eq!(zones.count(Zone::Pool), 13);
        assert_eq!(zones.hand_count(), 0);
        assert_eq!(zones.count_color(Zone::Pool, Color::Green), 6);
        assert_eq!(zones.count_color(Zone::Pool, Color::Yellow), 4);
        assert_eq!(zones.count_color(Zone::Pool, Color::Red), 3);
        assert!(zones.is_conserved());
    }

    #[test]
    fn test_move_die() {
        let mut zones = DiceZones::standard();
        let id = DieId::new(3);

        assert_eq!(zones.move_die(id, Zone::Brain), Some(Zone::Pool));
        assert_eq!(zones.zone_of(id), Some(Zone::Brain));
        assert_eq!(zones.dice_in(Zone::Brain), &[id]);
        assert!(!zones.dice_in(Zone::Pool).contains(&id));

        // Same zone is a no-op
        assert_eq!(zones.move_die(id, Zone::Brain), Some(Zone::Brain));
        assert_eq!(zones.count(Zone::Brain), 1);

        // Unknown die
        assert_eq!(zones.move_die(DieId::new(40), Zone::Pool), None);
        assert!(zones.is_conserved());
    }

    #[test]
    fn test_zones_stay_sorted() {
        let mut zones = DiceZones::standard();
        for id in [9, 2, 11, 0] {
            zones.move_die(DieId::new(id), Zone::Runner);
        }
        let ids: Vec<u8> = zones.dice_in(Zone::Runner).iter().map(|d| d.0).collect();
        assert_eq!(ids, vec![0, 2, 9, 11]);

        zones.move_all(Zone::Runner, Zone::Pool);
        let pool: Vec<u8> = zones.dice_in(Zone::Pool).iter().map(|d| d.0).collect();
        assert_eq!(pool, (0..13).collect::<Vec<u8>>());
    }

    #[test]
    fn test_draw_random_uses_pool_index() {
        let mut zones = DiceZones::standard();
        let mut rng = ScriptedRng::new([12, 0]);

        assert_eq!(zones.draw_random(&mut rng), Some(DieId::new(12)));
        assert_eq!(zones.draw_random(&mut rng), Some(DieId::new(0)));
        assert_eq!(zones.count(Zone::AtHand), 2);
        assert_eq!(zones.count(Zone::Pool), 11);
    }

    #[test]
    fn test_draw_random_empty_pool() {
        let mut zones = DiceZones::standard();
        zones.move_all(Zone::Pool, Zone::Brain);

        let mut rng = ScriptedRng::default();
        assert_eq!(zones.draw_random(&mut rng), None);
    }

    #[test]
    fn test_draw_everything_then_return() {
        let mut zones = DiceZones::standard();
        let mut rng = GameRng::new(3);

        let mut drawn = Vec::new();
        while let Some(id) = zones.draw_random(&mut rng) {
            drawn.push(id);
        }
        drawn.sort();
        drawn.dedup();
        assert_eq!(drawn.len(), 13);
        assert_eq!(zones.count(Zone::AtHand), 13);

        assert_eq!(zones.return_hand_to_pool(), 13);
        assert_eq!(zones.count(Zone::Pool), 13);
        assert!(zones.is_conserved());
    }

    #[test]
    fn test_return_hand_from_every_zone() {
        let mut zones = DiceZones::standard();
        zones.move_die(DieId::new(0), Zone::AtHand);
        zones.move_die(DieId::new(1), Zone::Brain);
        zones.move_die(DieId::new(10), Zone::Shotgun);
        zones.move_die(DieId::new(7), Zone::Runner);
        assert_eq!(zones.hand_count(), 4);

        assert_eq!(zones.return_hand_to_pool(), 4);
        assert_eq!(zones.hand_count(), 0);
        assert_eq!(zones.count(Zone::Pool), 13);
    }

    #[test]
    fn test_zone_for_face() {
        assert_eq!(Zone::for_face(Face::Brain), Zone::Brain);
        assert_eq!(Zone::for_face(Face::Shotgun), Zone::Shotgun);
        assert_eq!(Zone::for_face(Face::Runner), Zone::Runner);
    }

    #[test]
    #[should_panic(expected = "Die ids must be sequential")]
    fn test_new_rejects_gapped_ids() {
        let _ = DiceZones::new(vec![Die::new(DieId::new(1), Color::Red)]);
    }
}
