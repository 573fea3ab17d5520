//! Fixed game rules.
//!
//! The rule set is not configurable: every game uses the same 13 dice,
//! the same hand size, and the same bust and win thresholds.

use super::dice::{Color, Die, DieId};

/// Number of players in a game.
pub const PLAYER_COUNT: usize = 2;

/// Banked brains needed to trigger the end of the game.
pub const TARGET_BRAINS: u32 = 13;

/// Shotguns in a single turn that bust the turn.
pub const BUST_SHOTGUNS: usize = 3;

/// Dice rolled per sub-roll.
pub const HAND_SIZE: usize = 3;

/// Faces on every die.
pub const FACES_PER_DIE: usize = 6;

/// Dice of each color in the set: 6 green, 4 yellow, 3 red.
pub const DICE_PER_COLOR: [(Color, usize); 3] = [
    (Color::Green, 6),
    (Color::Yellow, 4),
    (Color::Red, 3),
];

/// Total dice in the set.
pub const TOTAL_DICE: usize = 13;

/// Build the full die set.
///
/// Ids are assigned in color order, so green dice are `0..6`,
/// yellow `6..10`, and red `10..13`.
#[must_use]
pub fn standard_dice() -> Vec<Die> {
    DICE_PER_COLOR
        .iter()
        .flat_map(|&(color, count)| std::iter::repeat(color).take(count))
        .enumerate()
        .map(|(id, color)| Die::new(DieId::new(id as u8), color))
        .collect()
}
