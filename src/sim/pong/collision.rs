//! Pong collision rules
//!
//! Runs after entity updates, walls first, then paddles.

use super::state::{Ball, Field, Paddle, PongState, Side};
use crate::sim::GameEvent;

/// Paddle contacts resolved in one tick at most. Only reached when the two
/// bounce lines cross, which would otherwise reflect the ball forever.
pub const MAX_PADDLE_CONTACTS_PER_TICK: u32 = 8;

/// Reflect the ball off the top or bottom wall when it crosses one while
/// moving toward it. Returns true on a bounce.
pub fn resolve_walls(state: &mut PongState) -> bool {
    let ball = &mut state.ball;
    let above_top = ball.pos.y < ball.radius && ball.vel.y < 0.0;
    let below_bottom = ball.pos.y > state.field.height - ball.radius && ball.vel.y > 0.0;

    if above_top || below_bottom {
        ball.bounce_y();
        state.events.push(GameEvent::WallHit);
        return true;
    }
    false
}

/// Resolve paddle contacts for this tick.
///
/// Loops while the ball sits in a bounce zone so that a reflected position
/// which still satisfies a zone test is resolved within the same tick.
/// Returns the winner if the approaching side missed.
pub fn resolve_paddles(state: &mut PongState) -> Option<Side> {
    let mut contacts = 0;
    while in_any_bounce_zone(&state.ball, &state.field) {
        if contacts == MAX_PADDLE_CONTACTS_PER_TICK {
            log::warn!("Paddle bounce zones overlap, deferring contact to the next tick");
            return None;
        }
        contacts += 1;

        let hit = Side::BOTH.into_iter().find(|&side| {
            in_bounce_zone(&state.ball, &state.field, side)
                && overlaps_paddle(&state.ball, state.paddle(side))
        });

        match hit {
            Some(side) => {
                let paddle = &state.paddles[side.index()];
                state
                    .ball
                    .bounce_x(paddle, &state.field, state.speed_multiplier);
                state.events.push(GameEvent::PaddleHit(side));
            }
            None => {
                if past_offset_line(&state.ball, &state.field) {
                    // The side the ball is heading toward failed to return it
                    return state.ball.heading().map(Side::opposite);
                }
                return None;
            }
        }
    }
    None
}

/// Ball is inside `side`'s band and travelling toward it
pub fn in_bounce_zone(ball: &Ball, field: &Field, side: Side) -> bool {
    match side {
        Side::Left => ball.is_moving_left() && ball.pos.x < field.bounce_line(Side::Left),
        Side::Right => ball.is_moving_right() && ball.pos.x > field.bounce_line(Side::Right),
    }
}

fn in_any_bounce_zone(ball: &Ball, field: &Field) -> bool {
    Side::BOTH
        .into_iter()
        .any(|side| in_bounce_zone(ball, field, side))
}

/// Ball center within reach of the paddle vertically
pub fn overlaps_paddle(ball: &Ball, paddle: &Paddle) -> bool {
    let reach = paddle.height / 2.0 + ball.radius;
    ball.pos.y >= paddle.pos.y - reach && ball.pos.y <= paddle.pos.y + reach
}

/// Ball center has passed a paddle's inner face
pub fn past_offset_line(ball: &Ball, field: &Field) -> bool {
    ball.pos.x < field.offset_line(Side::Left) || ball.pos.x > field.offset_line(Side::Right)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::PongTuning;
    use glam::Vec2;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn state() -> PongState {
        let mut rng = Pcg32::seed_from_u64(1);
        PongState::new(Vec2::new(800.0, 600.0), &PongTuning::default(), &mut rng)
    }

    #[test]
    fn test_wall_bounce_top() {
        let mut state = state();
        state.ball.pos = Vec2::new(400.0, 9.5);
        state.ball.vel = Vec2::new(1.0, -0.4);

        assert!(resolve_walls(&mut state));
        assert_eq!(state.ball.vel.y, 0.4);
        assert_eq!(state.events, vec![GameEvent::WallHit]);
    }

    #[test]
    fn test_wall_ignores_ball_already_leaving() {
        let mut state = state();
        state.ball.pos = Vec2::new(400.0, 595.0);
        state.ball.vel = Vec2::new(1.0, -0.4);

        assert!(!resolve_walls(&mut state));
        assert_eq!(state.ball.vel.y, -0.4);
    }

    #[test]
    fn test_bounce_zone_requires_approach() {
        let state = state();
        let mut ball = Ball::new(Vec2::new(775.0, 300.0), Vec2::new(1.0, 0.0), 10.0);
        assert!(in_bounce_zone(&ball, &state.field, Side::Right));
        ball.vel.x = -1.0;
        assert!(!in_bounce_zone(&ball, &state.field, Side::Right));
        assert!(!in_bounce_zone(&ball, &state.field, Side::Left));
    }

    #[test]
    fn test_paddle_hit_sends_ball_back() {
        let mut state = state();
        state.ball.pos = Vec2::new(773.0, 300.0);
        state.ball.vel = Vec2::new(1.0, 0.0);

        assert_eq!(resolve_paddles(&mut state), None);
        assert!(state.ball.is_moving_left());
        assert!((state.ball.pos.x - 771.0).abs() < 1e-4);
        assert_eq!(state.events, vec![GameEvent::PaddleHit(Side::Right)]);
    }

    #[test]
    fn test_overlapping_bounce_zones_cannot_loop_forever() {
        // 50px wide: left bounce line at 28 sits right of the right one at 22
        let mut rng = Pcg32::seed_from_u64(1);
        let mut state = PongState::new(Vec2::new(50.0, 600.0), &PongTuning::default(), &mut rng);
        state.ball.vel = Vec2::new(1.0, 0.0);

        assert_eq!(resolve_paddles(&mut state), None);
        assert_eq!(state.events.len(), MAX_PADDLE_CONTACTS_PER_TICK as usize);
    }

    #[test]
    fn test_wall_bounce_not_undone_while_still_past_wall() {
        let mut state = state();
        state.ball.pos = Vec2::new(400.0, 2.0);
        state.ball.vel = Vec2::new(1.0, -0.4);

        assert!(resolve_walls(&mut state));
        // Next tick the ball is still above the radius line but leaving
        state.ball.update();
        assert!(state.ball.pos.y < state.ball.radius);
        assert!(!resolve_walls(&mut state));
        assert_eq!(state.ball.vel.y, 0.4);

        for _ in 0..30 {
            state.ball.update();
            resolve_walls(&mut state);
        }
        assert!(state.ball.pos.y > state.ball.radius);
        assert_eq!(state.events, vec![GameEvent::WallHit]);
    }

    #[test]
    fn test_edge_contact_counts_as_hit() {
        let mut state = state();
        // Paddle half-height 40 + radius 10 = exactly at reach
        state.ball.pos = Vec2::new(27.0, 350.0);
        state.ball.vel = Vec2::new(-1.0, 0.0);

        assert_eq!(resolve_paddles(&mut state), None);
        assert!(state.ball.is_moving_right());
    }

    #[test]
    fn test_miss_inside_zone_but_before_line_is_not_decided() {
        let mut state = state();
        state.ball.pos = Vec2::new(780.0, 100.0);
        state.ball.vel = Vec2::new(1.0, 0.0);

        assert_eq!(resolve_paddles(&mut state), None);
        assert!(state.ball.is_moving_right());
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_miss_past_line_awards_opposite_side() {
        let mut state = state();
        state.ball.pos = Vec2::new(783.0, 100.0);
        state.ball.vel = Vec2::new(1.0, 0.0);
        assert_eq!(resolve_paddles(&mut state), Some(Side::Left));

        let mut state = self::state();
        state.ball.pos = Vec2::new(17.0, 500.0);
        state.ball.vel = Vec2::new(-1.0, 0.0);
        assert_eq!(resolve_paddles(&mut state), Some(Side::Right));
    }
}
