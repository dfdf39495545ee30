//! Pong entities and playfield geometry

use glam::Vec2;
use rand::Rng;

use crate::sim::GameEvent;
use crate::sim::input::KeyState;
use crate::tuning::{KeyBinding, PongTuning};

/// Which paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];

    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Side::Left => "Left",
            Side::Right => "Right",
        }
    }
}

/// Playfield lines derived once from the surface size
///
/// Each side has two vertical lines: the offset line at the paddle's inner
/// face, and the bounce line one ball radius further in. Paddle contact is
/// only evaluated between the bounce line and the wall.
#[derive(Debug, Clone, Copy)]
pub struct Field {
    pub width: f32,
    pub height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub ball_radius: f32,
    pub border_offset: f32,
}

impl Field {
    pub fn new(size: Vec2, tuning: &PongTuning) -> Self {
        Self {
            width: size.x,
            height: size.y,
            paddle_width: tuning.paddle_width,
            paddle_height: tuning.paddle_height,
            ball_radius: tuning.ball_radius,
            border_offset: tuning.border_offset,
        }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Inner face of the paddle on `side`
    pub fn offset_line(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.border_offset + self.paddle_width,
            Side::Right => self.width - self.border_offset - self.paddle_width,
        }
    }

    /// Ball-center line at which the ball touches the paddle face
    pub fn bounce_line(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.offset_line(Side::Left) + self.ball_radius,
            Side::Right => self.offset_line(Side::Right) - self.ball_radius,
        }
    }

    /// Center of the paddle line (paddle x, and where the guide lines are drawn)
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.border_offset + self.paddle_width / 2.0,
            Side::Right => self.width - self.border_offset - self.paddle_width / 2.0,
        }
    }

    /// Vertical travel range for a paddle center
    pub fn paddle_bounds(&self) -> (f32, f32) {
        let min = self.paddle_height / 2.0 + self.border_offset;
        let max = self.height - self.paddle_height / 2.0 - self.border_offset;
        (min, max)
    }
}

/// The ball
#[derive(Debug, Clone)]
pub struct Ball {
    pub pos: Vec2,
    /// Pixels per tick; x sign is the travel direction
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self { pos, vel, radius }
    }

    /// Advance one tick. Bounds are handled by the collision pass.
    pub fn update(&mut self) {
        self.pos += self.vel;
    }

    /// Wall reflection
    pub fn bounce_y(&mut self) {
        self.vel.y = -self.vel.y;
    }

    /// Paddle reflection: reverse and accelerate horizontally, pick up
    /// vertical english from the contact offset, and mirror the ball back
    /// across the paddle's bounce line.
    pub fn bounce_x(&mut self, paddle: &Paddle, field: &Field, multiplier: f32) {
        self.vel.x = -self.vel.x * multiplier;

        let english = (paddle.pos.y - self.pos.y) / (paddle.height / 2.0);
        let limit = self.vel.x.abs();
        self.vel.y = (self.vel.y - english).clamp(-limit, limit);

        self.pos.x = 2.0 * field.bounce_line(paddle.side) - self.pos.x;
    }

    pub fn is_moving_left(&self) -> bool {
        self.vel.x < 0.0
    }

    pub fn is_moving_right(&self) -> bool {
        self.vel.x > 0.0
    }

    /// Side the ball is travelling toward
    pub fn heading(&self) -> Option<Side> {
        if self.is_moving_left() {
            Some(Side::Left)
        } else if self.is_moving_right() {
            Some(Side::Right)
        } else {
            None
        }
    }
}

/// A player's paddle
#[derive(Debug, Clone)]
pub struct Paddle {
    pub side: Side,
    /// Center
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    /// Pixels per tick
    pub speed: f32,
    pub keys: KeyBinding,
    min_y: f32,
    max_y: f32,
}

impl Paddle {
    pub fn new(side: Side, field: &Field, tuning: &PongTuning) -> Self {
        let (min_y, max_y) = field.paddle_bounds();
        let keys = match side {
            Side::Left => tuning.left_keys.clone(),
            Side::Right => tuning.right_keys.clone(),
        };
        Self {
            side,
            pos: Vec2::new(field.paddle_x(side), field.height / 2.0),
            width: field.paddle_width,
            height: field.paddle_height,
            speed: tuning.paddle_speed,
            keys,
            min_y,
            max_y,
        }
    }

    /// Apply held keys (both held cancel out) and clamp into the travel range
    pub fn update(&mut self, keys: &KeyState) {
        if keys.is_pressed(&self.keys.up) {
            self.pos.y -= self.speed;
        }
        if keys.is_pressed(&self.keys.down) {
            self.pos.y += self.speed;
        }
        self.clamp_to_bounds();
    }

    fn clamp_to_bounds(&mut self) {
        // Not `f32::clamp`: a paddle taller than the field must not panic
        if self.pos.y > self.max_y {
            self.pos.y = self.max_y;
        }
        if self.pos.y < self.min_y {
            self.pos.y = self.min_y;
        }
    }
}

/// Complete Pong match state
#[derive(Debug, Clone)]
pub struct PongState {
    pub field: Field,
    pub ball: Ball,
    pub paddles: [Paddle; 2],
    pub speed_multiplier: f32,
    /// Set once, when a paddle misses
    pub winner: Option<Side>,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Events raised since the last drain
    pub events: Vec<GameEvent>,
}

impl PongState {
    /// Ball at the center moving right, with a small random vertical drift
    pub fn new<R: Rng>(size: Vec2, tuning: &PongTuning, rng: &mut R) -> Self {
        let field = Field::new(size, tuning);
        let drift = rng.random::<f32>() - 0.5;
        let ball = Ball::new(
            field.center(),
            Vec2::new(tuning.initial_ball_speed, drift),
            tuning.ball_radius,
        );

        Self {
            paddles: [
                Paddle::new(Side::Left, &field, tuning),
                Paddle::new(Side::Right, &field, tuning),
            ],
            field,
            ball,
            speed_multiplier: tuning.ball_speed_multiplier,
            winner: None,
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        &self.paddles[side.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn field() -> Field {
        Field::new(Vec2::new(800.0, 600.0), &PongTuning::default())
    }

    #[test]
    fn test_field_lines() {
        let field = field();
        assert_eq!(field.offset_line(Side::Left), 18.0);
        assert_eq!(field.offset_line(Side::Right), 782.0);
        assert_eq!(field.bounce_line(Side::Left), 28.0);
        assert_eq!(field.bounce_line(Side::Right), 772.0);
        assert_eq!(field.paddle_bounds(), (42.0, 558.0));
    }

    #[test]
    fn test_new_state_serves_from_center_toward_right() {
        let mut rng = Pcg32::seed_from_u64(3);
        let state = PongState::new(Vec2::new(800.0, 600.0), &PongTuning::default(), &mut rng);
        assert_eq!(state.ball.pos, Vec2::new(400.0, 300.0));
        assert_eq!(state.ball.vel.x, 1.0);
        assert!(state.ball.vel.y.abs() <= 0.5);
        assert_eq!(state.paddle(Side::Left).pos, Vec2::new(10.0, 300.0));
        assert_eq!(state.paddle(Side::Right).pos, Vec2::new(790.0, 300.0));
    }

    #[test]
    fn test_bounce_x_reverses_accelerates_and_mirrors() {
        let field = field();
        let paddle = Paddle::new(Side::Right, &field, &PongTuning::default());
        let mut ball = Ball::new(Vec2::new(774.0, 300.0), Vec2::new(2.0, 0.0), 10.0);

        ball.bounce_x(&paddle, &field, 1.01);

        assert!((ball.vel.x + 2.02).abs() < 1e-6);
        assert_eq!(ball.vel.y, 0.0);
        // Mirrored across x = 772
        assert!((ball.pos.x - 770.0).abs() < 1e-4);
    }

    #[test]
    fn test_bounce_x_adds_english_from_contact_offset() {
        let field = field();
        let paddle = Paddle::new(Side::Left, &field, &PongTuning::default());
        // 20px below the paddle center, half-height 40 -> +0.5
        let mut ball = Ball::new(Vec2::new(27.0, 320.0), Vec2::new(-1.0, 0.0), 10.0);

        ball.bounce_x(&paddle, &field, 1.01);

        assert!((ball.vel.y - 0.5).abs() < 1e-6);
        assert!(ball.is_moving_right());
    }

    #[test]
    fn test_bounce_x_clamps_vertical_speed() {
        let field = field();
        let paddle = Paddle::new(Side::Left, &field, &PongTuning::default());
        let mut ball = Ball::new(Vec2::new(27.0, 350.0), Vec2::new(-1.0, 0.9), 10.0);

        ball.bounce_x(&paddle, &field, 1.01);

        assert!((ball.vel.y - 1.01).abs() < 1e-6);
    }

    #[test]
    fn test_five_bounces_compound_speed() {
        let field = field();
        let tuning = PongTuning::default();
        let left = Paddle::new(Side::Left, &field, &tuning);
        let right = Paddle::new(Side::Right, &field, &tuning);
        let mut ball = Ball::new(Vec2::new(775.0, 300.0), Vec2::new(1.0, 0.0), 10.0);

        for i in 0..5 {
            let paddle = if i % 2 == 0 { &right } else { &left };
            ball.bounce_x(paddle, &field, 1.01);
        }

        assert!(ball.is_moving_left());
        assert!((ball.vel.x.abs() - 1.01f32.powi(5)).abs() < 1e-5);
        assert!((ball.vel.x.abs() - 1.051).abs() < 1e-3);
    }

    #[test]
    fn test_paddle_moves_and_clamps() {
        let field = field();
        let mut paddle = Paddle::new(Side::Left, &field, &PongTuning::default());
        let mut keys = KeyState::new();

        keys.press("ArrowUp");
        paddle.update(&keys);
        assert_eq!(paddle.pos.y, 299.0);

        keys.press("ArrowDown");
        paddle.update(&keys);
        assert_eq!(paddle.pos.y, 299.0);

        keys.release("ArrowDown");
        for _ in 0..1000 {
            paddle.update(&keys);
        }
        assert_eq!(paddle.pos.y, 42.0);
    }

    #[test]
    fn test_paddle_ignores_other_players_keys() {
        let field = field();
        let mut paddle = Paddle::new(Side::Right, &field, &PongTuning::default());
        let mut keys = KeyState::new();
        keys.press("ArrowUp");
        paddle.update(&keys);
        assert_eq!(paddle.pos.y, 300.0);
        keys.press("s");
        paddle.update(&keys);
        assert_eq!(paddle.pos.y, 301.0);
    }

    proptest! {
        #[test]
        fn prop_bounce_keeps_vertical_within_horizontal(
            vx in 0.1f32..50.0,
            vy in -50.0f32..50.0,
            paddle_y in 42.0f32..558.0,
            offset in -50.0f32..50.0,
        ) {
            let field = field();
            let mut paddle = Paddle::new(Side::Right, &field, &PongTuning::default());
            paddle.pos.y = paddle_y;
            let mut ball = Ball::new(Vec2::new(775.0, paddle_y + offset), Vec2::new(vx, vy), 10.0);

            ball.bounce_x(&paddle, &field, 1.01);

            prop_assert!(ball.vel.y.abs() <= ball.vel.x.abs());
            prop_assert!(ball.vel.x < 0.0);
            prop_assert!((ball.vel.x.abs() - vx * 1.01).abs() <= vx * 1e-5);
        }
    }
}
