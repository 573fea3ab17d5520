//! Dice, faces, and die identity.
//!
//! ## Colors
//!
//! Each color carries a fixed six-face layout:
//!
//! | Color  | Brain | Shotgun | Runner |
//! |--------|-------|---------|--------|
//! | Green  | 3     | 1       | 2      |
//! | Yellow | 2     | 2       | 2      |
//! | Red    | 1     | 3       | 2      |
//!
//! ## DieId
//!
//! Dice of the same color are otherwise indistinguishable, so every die
//! in the set carries a stable `DieId`. Zones track dice by id.

use serde::{Deserialize, Serialize};

use super::config::FACES_PER_DIE;
use super::rng::RandomSource;

/// Result shown on the top face of a rolled die.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Face {
    /// One point, kept if the turn is banked.
    Brain,
    /// A hit. Three in one turn bust the turn.
    Shotgun,
    /// The die may be rolled again if the player continues.
    Runner,
}

impl std::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Face::Brain => "Brain",
            Face::Shotgun => "Shotgun",
            Face::Runner => "Runner",
        };
        f.write_str(name)
    }
}

/// Die color. Determines the face layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    Green,
    Yellow,
    Red,
}

impl Color {
    /// The six faces of a die of this color, in a fixed order.
    #[must_use]
    pub const fn faces(self) -> [Face; FACES_PER_DIE] {
        use Face::{Brain as B, Runner as R, Shotgun as S};
        match self {
            Color::Green => [B, B, B, S, R, R],
            Color::Yellow => [B, B, S, S, R, R],
            Color::Red => [B, S, S, S, R, R],
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Color::Green => "Green",
            Color::Yellow => "Yellow",
            Color::Red => "Red",
        };
        f.write_str(name)
    }
}

/// Stable identifier for one physical die in the set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DieId(pub u8);

impl DieId {
    /// Create a new die ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for DieId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Die({})", self.0)
    }
}

/// One die: identity, color, and faces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Die {
    pub id: DieId,
    pub color: Color,
    pub faces: [Face; FACES_PER_DIE],
}

impl Die {
    /// Create a die of the given color.
    #[must_use]
    pub const fn new(id: DieId, color: Color) -> Self {
        Self {
            id,
            color,
            faces: color.faces(),
        }
    }

    /// Roll the die: a uniformly random face from its six.
    pub fn roll(&self, rng: &mut impl RandomSource) -> Face {
        self.faces[rng.pick(FACES_PER_DIE)]
    }
}
