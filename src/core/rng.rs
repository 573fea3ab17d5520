//! Random number sources for drawing and rolling dice.
//!
//! ## Key Types
//!
//! - `RandomSource`: the seam the rules draw randomness through
//! - `GameRng`: seeded ChaCha8 generator used for real games
//! - `ScriptedRng`: replays a fixed list of picks, for tests and demos
//!
//! ## Usage
//!
//! ```
//! use brain_dice::core::{GameRng, RandomSource};
//!
//! let mut rng = GameRng::new(42);
//! let face = rng.pick(6);
//! assert!(face < 6);
//!
//! // Same seed, same sequence
//! let mut again = GameRng::new(42);
//! assert_eq!(again.pick(6), face);
//! ```

use std::collections::VecDeque;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of uniform random indices.
///
/// Every random choice in the game is "pick one of `upper` things":
/// a die from the pool, or a face from a die.
pub trait RandomSource {
    /// Return an index in `0..upper`. `upper` is never zero.
    fn pick(&mut self, upper: usize) -> usize;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn pick(&mut self, upper: usize) -> usize {
        (**self).pick(upper)
    }
}

/// Seeded RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the wall clock.
    ///
    /// Runs are not reproducible; use `new` when they need to be.
    #[must_use]
    pub fn from_clock() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();
        Self::new(nanos)
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for GameRng {
    fn pick(&mut self, upper: usize) -> usize {
        self.inner.gen_range(0..upper)
    }
}

/// Replays a fixed sequence of picks.
///
/// Each call to `pick` consumes the next scripted index. Panics when the
/// script runs out or an index is out of range for the request, since
/// either means the script no longer matches the game being driven.
///
/// ```
/// use brain_dice::core::{RandomSource, ScriptedRng};
///
/// let mut rng = ScriptedRng::new([2, 0]);
/// assert_eq!(rng.pick(3), 2);
/// assert_eq!(rng.pick(6), 0);
/// assert!(rng.is_exhausted());
/// ```
#[derive(Clone, Debug, Default)]
pub struct ScriptedRng {
    picks: VecDeque<usize>,
}

impl ScriptedRng {
    /// Create a scripted source from a list of indices.
    pub fn new(picks: impl IntoIterator<Item = usize>) -> Self {
        Self {
            picks: picks.into_iter().collect(),
        }
    }

    /// Number of picks left.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.picks.len()
    }

    /// Check if every scripted pick has been consumed.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.picks.is_empty()
    }
}

impl RandomSource for ScriptedRng {
    fn pick(&mut self, upper: usize) -> usize {
        let Some(value) = self.picks.pop_front() else {
            panic!("ScriptedRng exhausted (requested a pick in 0..{})", upper);
        };
        assert!(
            value < upper,
            "ScriptedRng pick {} out of range 0..{}",
            value,
            upper
        );
        value
    }
}
