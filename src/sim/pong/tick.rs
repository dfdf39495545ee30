//! Fixed-rate Pong simulation tick

use super::collision::{resolve_paddles, resolve_walls};
use super::state::{PongState, Side};
use crate::sim::input::KeyState;
use crate::sim::{GameEvent, GameResult};

/// Advance the match by one simulation tick.
///
/// Returns the winner once a paddle has missed; after that the state is
/// frozen and further ticks are no-ops.
pub fn tick(state: &mut PongState, keys: &KeyState) -> Option<Side> {
    if state.winner.is_some() {
        return state.winner;
    }

    state.time_ticks += 1;

    state.ball.update();
    for paddle in &mut state.paddles {
        paddle.update(keys);
    }

    resolve_walls(state);
    if let Some(winner) = resolve_paddles(state) {
        log::info!(
            "{} player wins after {} ticks (ball speed {:.3})",
            winner.name(),
            state.time_ticks,
            state.ball.vel.x.abs()
        );
        state.winner = Some(winner);
        state
            .events
            .push(GameEvent::GameOver(GameResult::Winner(winner)));
    }

    state.winner
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::PongTuning;
    use glam::Vec2;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn state_with(tuning: &PongTuning, seed: u64) -> PongState {
        let mut rng = Pcg32::seed_from_u64(seed);
        PongState::new(Vec2::new(800.0, 600.0), tuning, &mut rng)
    }

    #[test]
    fn test_straight_serve_is_returned_by_stationary_paddle() {
        let mut state = state_with(&PongTuning::default(), 5);
        state.ball.vel.y = 0.0;
        let keys = KeyState::new();

        for _ in 0..400 {
            assert_eq!(tick(&mut state, &keys), None);
        }

        assert!(state.ball.vel.x < 0.0);
        assert!(state.ball.vel.x.abs() > 1.0);
        assert!(state.events.contains(&GameEvent::PaddleHit(Side::Right)));
    }

    #[test]
    fn test_tall_paddle_intercepts_drifting_serve() {
        let tuning = PongTuning {
            paddle_height: 560.0,
            ..Default::default()
        };
        for seed in 0..20 {
            let mut state = state_with(&tuning, seed);
            let keys = KeyState::new();
            for _ in 0..400 {
                tick(&mut state, &keys);
            }
            assert_eq!(state.winner, None, "seed {seed}");
            assert!(state.ball.vel.x < -1.0, "seed {seed}");
        }
    }

    #[test]
    fn test_missed_ball_ends_match_and_freezes_state() {
        let mut state = state_with(&PongTuning::default(), 5);
        state.ball.vel.y = 0.0;
        let mut keys = KeyState::new();
        // Right paddle runs to the top and stays there
        keys.press("w");

        let mut winner = None;
        for _ in 0..500 {
            winner = tick(&mut state, &keys);
            if winner.is_some() {
                break;
            }
        }

        assert_eq!(winner, Some(Side::Left));
        assert_eq!(
            state.events.last(),
            Some(&GameEvent::GameOver(GameResult::Winner(Side::Left)))
        );

        let frozen = state.ball.pos;
        let ticks = state.time_ticks;
        assert_eq!(tick(&mut state, &keys), Some(Side::Left));
        assert_eq!(state.ball.pos, frozen);
        assert_eq!(state.time_ticks, ticks);
    }

    proptest! {
        #[test]
        fn prop_vertical_speed_never_exceeds_horizontal(
            seed in any::<u64>(),
            presses in proptest::collection::vec((any::<bool>(), any::<bool>()), 1..40),
        ) {
            let tuning = PongTuning { paddle_speed: 4.0, ..Default::default() };
            let mut state = state_with(&tuning, seed);
            let mut keys = KeyState::new();

            for (left_up, right_down) in presses {
                if left_up { keys.press("ArrowUp") } else { keys.release("ArrowUp") }
                if right_down { keys.press("s") } else { keys.release("s") }
                for _ in 0..50 {
                    tick(&mut state, &keys);
                    prop_assert!(state.ball.vel.y.abs() <= state.ball.vel.x.abs());
                }
            }
        }
    }
}
