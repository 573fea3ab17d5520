//! Turn phases as state transitions.
//!
//! Each function takes the explicit `GameState`, changes it for one phase,
//! and returns what happened so the caller can report it:
//!
//! 1. `check_winner` at the top of every round (player 1 only)
//! 2. `draw` tops the hand up to three dice from the pool
//! 3. `roll` rolls every at-hand die into brain / shotgun / runner
//! 4. `is_bust` then `resolve_bust`, or
//! 5. `apply_decision` for continue / bank / anything else
//!
//! No function here does I/O; see `crate::game` for the console loop.

use smallvec::SmallVec;
use tracing::{debug, info};

use crate::core::action::{Decision, TurnOutcome, TurnRecord};
use crate::core::config::{BUST_SHOTGUNS, HAND_SIZE, TARGET_BRAINS};
use crate::core::dice::{Color, DieId, Face};
use crate::core::player::{PlayerId, PlayerMap};
use crate::core::rng::RandomSource;
use crate::core::state::GameState;
use crate::zones::Zone;

/// Result of a finished game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameResult {
    /// Player with the strictly higher score; player 1 on a tie.
    pub winner: PlayerId,
    /// Final banked scores.
    pub scores: PlayerMap<u32>,
    /// Turn counter when the game ended.
    pub turns: u32,
}

/// One die after a roll.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RolledDie {
    pub id: DieId,
    pub color: Color,
    pub face: Face,
}

/// What a decision did to the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecisionOutcome {
    /// Runners moved back into the hand; same player rolls again.
    Continued { runners: usize },
    /// Brains were scored and the turn passed.
    Banked { brains: u32 },
    /// Unrecognized answer. Nothing changed.
    Ignored,
}

/// End the game if anyone has reached the target.
///
/// Only checked when player 1 is about to act, so player 2 always gets
/// to finish the round in which player 1 crossed the line.
#[must_use]
pub fn check_winner(state: &GameState) -> Option<GameResult> {
    if state.active_player != PlayerId::ONE {
        return None;
    }

    let one = state.score(PlayerId::ONE);
    let two = state.score(PlayerId::TWO);
    if one < TARGET_BRAINS && two < TARGET_BRAINS {
        return None;
    }

    let winner = if two > one { PlayerId::TWO } else { PlayerId::ONE };
    info!(%winner, one, two, turns = state.turn_number, "game over");

    Some(GameResult {
        winner,
        scores: state.scores.clone(),
        turns: state.turn_number,
    })
}

/// Draw pool dice into the hand until it holds three or the pool is empty.
///
/// Returns the newly drawn ids. Dice already at hand (carried runners)
/// count toward the three.
pub fn draw(state: &mut GameState, rng: &mut impl RandomSource) -> SmallVec<[DieId; HAND_SIZE]> {
    let mut drawn = SmallVec::new();

    while state.at_hand() < HAND_SIZE {
        match state.zones.draw_random(rng) {
            Some(id) => drawn.push(id),
            None => {
                // Unreachable with a full set and hands flushed at turn end.
                debug!(at_hand = state.at_hand(), "pool exhausted before hand was full");
                break;
            }
        }
    }

    debug!(
        player = %state.active_player,
        drawn = drawn.len(),
        pool = state.pool_size(),
        "draw"
    );
    drawn
}

/// Roll every at-hand die and sort it into the zone for its face.
pub fn roll(state: &mut GameState, rng: &mut impl RandomSource) -> SmallVec<[RolledDie; HAND_SIZE]> {
    let hand = state.zones.dice_in(Zone::AtHand).to_vec();

    let rolled: SmallVec<[RolledDie; HAND_SIZE]> = hand
        .into_iter()
        .map(|id| {
            let die = *state.zones.die(id);
            let face = die.roll(rng);
            state.zones.move_die(id, Zone::for_face(face));
            RolledDie {
                id,
                color: die.color,
                face,
            }
        })
        .collect();

    debug!(
        player = %state.active_player,
        brains = state.brains(),
        runners = state.runners(),
        shotguns = state.shotguns(),
        "roll"
    );
    rolled
}

/// Check whether this turn has taken too many shotguns.
#[must_use]
pub fn is_bust(state: &GameState) -> bool {
    state.shotguns() >= BUST_SHOTGUNS
}

/// End the turn with nothing scored.
///
/// Every hand die returns to the pool and the turn passes.
pub fn resolve_bust(state: &mut GameState) -> TurnOutcome {
    let player = state.active_player;
    let outcome = TurnOutcome::Bust {
        lost_brains: state.brains() as u32,
    };

    end_turn(state, outcome);
    info!(%player, shotguns = BUST_SHOTGUNS, "bust");
    outcome
}

/// Apply the active player's answer to the continue-or-bank prompt.
pub fn apply_decision(state: &mut GameState, decision: Decision) -> DecisionOutcome {
    let player = state.active_player;

    match decision {
        Decision::Continue => {
            let runners = state.zones.move_all(Zone::Runner, Zone::AtHand);
            debug!(%player, runners, "continue");
            DecisionOutcome::Continued { runners }
        }
        Decision::Bank => {
            let brains = state.brains() as u32;
            state.scores[player] += brains;
            end_turn(state, TurnOutcome::Bank { brains });
            info!(%player, brains, score = state.score(player), "bank");
            DecisionOutcome::Banked { brains }
        }
        Decision::Invalid => {
            debug!(%player, "unrecognized decision ignored");
            DecisionOutcome::Ignored
        }
    }
}

fn end_turn(state: &mut GameState, outcome: TurnOutcome) {
    let record = TurnRecord::new(state.active_player, state.turn_number, outcome);
    state.record_turn(record);
    state.zones.return_hand_to_pool();
    state.pass_turn();
}
