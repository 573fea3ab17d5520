//! Invariants checked over many randomly played games.

use proptest::prelude::*;

use brain_dice::core::config::{DICE_PER_COLOR, HAND_SIZE, TARGET_BRAINS, TOTAL_DICE};
use brain_dice::core::{Decision, GameRng, GameState, PlayerId};
use brain_dice::rules;
use brain_dice::zones::Zone;

/// Play with the rule functions directly, calling `check` after every
/// phase. Decisions cycle through `choices` (0 = continue, 1 = bank,
/// anything else = invalid). Returns the final state and whether the game
/// finished within `max_rolls`.
fn play(
    seed: u64,
    choices: &[u8],
    max_rolls: usize,
    mut check: impl FnMut(&GameState),
) -> (GameState, bool) {
    let mut state = GameState::new();
    let mut rng = GameRng::new(seed);

    for i in 0..max_rolls {
        if rules::check_winner(&state).is_some() {
            return (state, true);
        }

        rules::draw(&mut state, &mut rng);
        check(&state);
        rules::roll(&mut state, &mut rng);
        check(&state);

        if rules::is_bust(&state) {
            rules::resolve_bust(&mut state);
        } else {
            let decision = match choices[i % choices.len()] {
                0 => Decision::Continue,
                1 => Decision::Bank,
                _ => Decision::Invalid,
            };
            rules::apply_decision(&mut state, decision);
        }
        check(&state);
    }

    (state, false)
}

fn assert_conserved(state: &GameState) {
    assert!(state.zones.is_conserved());
    assert_eq!(state.pool_size() + state.zones.hand_count(), TOTAL_DICE);

    for (color, count) in DICE_PER_COLOR {
        let total: usize = Zone::ALL
            .iter()
            .map(|&zone| state.zones.count_color(zone, color))
            .sum();
        assert_eq!(total, count);
    }
}

proptest! {
    #[test]
    fn dice_are_never_created_or_destroyed(
        seed in any::<u64>(),
        choices in prop::collection::vec(0u8..3, 1..8),
    ) {
        play(seed, &choices, 500, assert_conserved);
    }

    #[test]
    fn scores_match_history_and_never_drop(
        seed in any::<u64>(),
        choices in prop::collection::vec(0u8..2, 1..6),
    ) {
        let mut last = (0, 0);
        let (state, _) = play(seed, &choices, 2000, |state| {
            let now = (state.score(PlayerId::ONE), state.score(PlayerId::TWO));
            assert!(now.0 >= last.0 && now.1 >= last.1);
            last = now;
        });

        for player in PlayerId::all() {
            let banked: u32 = state
                .history
                .iter()
                .filter(|r| r.player == player)
                .map(|r| r.outcome.scored())
                .sum();
            prop_assert_eq!(state.score(player), banked);
        }
    }

    #[test]
    fn fresh_turn_draws_exactly_three(
        seed in any::<u64>(),
        choices in prop::collection::vec(0u8..2, 1..6),
    ) {
        let mut rng = GameRng::new(seed);
        let (mut state, _) = play(seed, &choices, 50, |_| {});

        // Flush whatever the last turn left behind.
        state.zones.return_hand_to_pool();
        let pool_before = state.pool_size();

        let drawn = rules::draw(&mut state, &mut rng);

        prop_assert_eq!(drawn.len(), HAND_SIZE);
        prop_assert_eq!(state.at_hand(), HAND_SIZE);
        prop_assert_eq!(state.pool_size(), pool_before - HAND_SIZE);
        for id in &drawn {
            prop_assert!(!state.zones.dice_in(Zone::Pool).contains(id));
        }
    }

    #[test]
    fn game_ends_only_after_player_two(
        seed in any::<u64>(),
        choices in prop::collection::vec(0u8..2, 1..6),
    ) {
        let mut replies = 0;
        let (state, finished) = play(seed, &choices, 5000, |state| {
            // Player 1 has crossed the line and player 2 is still to play.
            if state.active_player == PlayerId::TWO
                && state.score(PlayerId::ONE) >= TARGET_BRAINS
            {
                replies += 1;
            }
        });

        if finished {
            if state.score(PlayerId::ONE) >= TARGET_BRAINS {
                prop_assert!(replies > 0);
            }
            prop_assert_eq!(state.active_player, PlayerId::ONE);
            prop_assert_eq!(state.history.back().map(|r| r.player), Some(PlayerId::TWO));
            prop_assert!(
                state.score(PlayerId::ONE) >= TARGET_BRAINS
                    || state.score(PlayerId::TWO) >= TARGET_BRAINS
            );
        }
    }

    #[test]
    fn turns_alternate_between_players(
        seed in any::<u64>(),
        choices in prop::collection::vec(0u8..2, 1..6),
    ) {
        let (state, _) = play(seed, &choices, 300, |_| {});

        let mut expected = PlayerId::ONE;
        for record in state.history.iter() {
            prop_assert_eq!(record.player, expected);
            expected = expected.next();
        }
        prop_assert_eq!(state.active_player, expected);
    }
}
