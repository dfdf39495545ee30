//! Pong drawing

use glam::Vec2;

use super::draw_banner;
use super::surface::{Color, Surface};
use crate::sim::pong::{Ball, Paddle, PongState, Side};

const BACKGROUND: Color = Color::hex(0xF5DEB3);
const GUIDE_LINE: Color = Color::BLACK;
const BALL: Color = Color::hex(0x4C9900);
const NO_WINNER: Color = Color::hex(0x333333);

pub fn side_color(side: Side) -> Color {
    match side {
        Side::Left => Color::hex(0x66B2FF),
        Side::Right => Color::hex(0xFF6666),
    }
}

/// Full frame: background, paddle guide lines, ball, paddles
pub fn render(surface: &mut dyn Surface, state: &PongState) {
    let size = surface.size();
    surface.clear();
    surface.fill_rect(Vec2::ZERO, size, BACKGROUND);

    for side in Side::BOTH {
        let x = state.field.paddle_x(side);
        surface.stroke_line(Vec2::new(x, 0.0), Vec2::new(x, size.y), 1.0, GUIDE_LINE);
    }

    render_ball(surface, &state.ball);
    for paddle in &state.paddles {
        render_paddle(surface, paddle);
    }
}

fn render_ball(surface: &mut dyn Surface, ball: &Ball) {
    surface.fill_circle(ball.pos, ball.radius, BALL);
}

fn render_paddle(surface: &mut dyn Surface, paddle: &Paddle) {
    let size = Vec2::new(paddle.width, paddle.height);
    surface.fill_rect(paddle.pos - size / 2.0, size, side_color(paddle.side));
}

/// Result overlay drawn over the last frame
pub fn render_winner(surface: &mut dyn Surface, winner: Option<Side>) {
    match winner {
        Some(side) => draw_banner(
            surface,
            &format!("{} player has won!", side.name()),
            side_color(side),
        ),
        None => draw_banner(surface, "No winner", NO_WINNER),
    }
}
