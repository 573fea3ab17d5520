//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Identifies one of the two seats. Internally 0-based; displayed 1-based
//! ("Player 1", "Player 2") to match what is printed at the table.
//!
//! ## PlayerMap
//!
//! Fixed two-entry storage indexed by `PlayerId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::config::PLAYER_COUNT;

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(u8);

impl PlayerId {
    /// The player who acts first.
    pub const ONE: PlayerId = PlayerId(0);
    /// The player who acts second in every round.
    pub const TWO: PlayerId = PlayerId(1);

    /// Create a player ID from a 0-based index.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        assert!((index as usize) < PLAYER_COUNT, "Player index out of range");
        Self(index)
    }

    /// Get the 0-based index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the 1-based seat number shown to players.
    #[must_use]
    pub const fn number(self) -> u8 {
        self.0 + 1
    }

    /// The other player.
    ///
    /// ```
    /// use brain_dice::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::ONE.next(), PlayerId::TWO);
    /// assert_eq!(PlayerId::TWO.next(), PlayerId::ONE);
    /// ```
    #[must_use]
    pub const fn next(self) -> Self {
        if self.0 == Self::ONE.0 {
            Self::TWO
        } else {
            Self::ONE
        }
    }

    /// Iterate over both players in seat order.
    pub fn all() -> impl Iterator<Item = PlayerId> {
        [Self::ONE, Self::TWO].into_iter()
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// Per-player data storage.
///
/// ## Example
///
/// ```
/// use brain_dice::core::{PlayerId, PlayerMap};
///
/// let mut scores: PlayerMap<u32> = PlayerMap::with_default();
/// scores[PlayerId::TWO] += 4;
///
/// assert_eq!(scores[PlayerId::ONE], 0);
/// assert_eq!(scores[PlayerId::TWO], 4);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; PLAYER_COUNT],
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            data: [factory(PlayerId::ONE), factory(PlayerId::TWO)],
        }
    }

    /// Create a new PlayerMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Create a new PlayerMap with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::all().zip(self.data.iter())
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        assert_eq!(PlayerId::ONE.index(), 0);
        assert_eq!(PlayerId::TWO.index(), 1);
        assert_eq!(PlayerId::ONE.number(), 1);
        assert_eq!(format!("{}", PlayerId::TWO), "Player 2");
        assert_eq!(PlayerId::new(1), PlayerId::TWO);
    }

    #[test]
    fn test_next_is_an_involution() {
        for player in PlayerId::all() {
            assert_ne!(player.next(), player);
            assert_eq!(player.next().next(), player);
        }
    }

    #[test]
    #[should_panic(expected = "Player index out of range")]
    fn test_player_id_out_of_range() {
        let _ = PlayerId::new(2);
    }

    #[test]
    fn test_player_map_new() {
        let map: PlayerMap<u32> = PlayerMap::new(|p| p.number() as u32 * 10);
        assert_eq!(map[PlayerId::ONE], 10);
        assert_eq!(map[PlayerId::TWO], 20);
    }

    #[test]
    fn test_player_map_mutation() {
        let mut map: PlayerMap<u32> = PlayerMap::with_value(5);
        map[PlayerId::ONE] += 3;

        assert_eq!(map[PlayerId::ONE], 8);
        assert_eq!(map[PlayerId::TWO], 5);
    }

    #[test]
    fn test_player_map_iter() {
        let map: PlayerMap<u32> = PlayerMap::new(|p| p.index() as u32);
        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(PlayerId::ONE, &0), (PlayerId::TWO, &1)]);
    }

    #[test]
    fn test_player_map_serialization() {
        let map: PlayerMap<u32> = PlayerMap::new(|p| p.index() as u32 + 1);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: PlayerMap<u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}
