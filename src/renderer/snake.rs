//! Snake drawing

use glam::Vec2;

use super::draw_banner;
use super::surface::{Color, Surface, TextAlign};
use crate::sim::snake::{Food, SnakeState};

const BACKGROUND: Color = Color::hex(0xD4EFDF);
const SNAKE_HEAD: Color = Color::hex(0x1E8449);
const SNAKE_SEGMENT: Color = Color::hex(0x27AE60);
/// Gap left around each body segment
const SEGMENT_PADDING: f32 = 1.0;
const FOOD_FONT_PX: f32 = 15.0;

/// Food color by value; everything from 10 up shares the last entry
const FOOD_COLORS: [Color; 11] = [
    Color::hex(0xFFFFFF), // white
    Color::hex(0xDCDCDC), // gainsboro
    Color::hex(0xFFE4C4), // bisque
    Color::hex(0xF5DEB3), // wheat
    Color::hex(0xDAA520), // goldenrod
    Color::hex(0xCD853F), // peru
    Color::hex(0xD2691E), // chocolate
    Color::hex(0x808000), // olive
    Color::hex(0x6B8E23), // olivedrab
    Color::hex(0x008000), // green
    Color::hex(0xFF0000), // red
];

pub fn food_color(value: u32) -> Color {
    FOOD_COLORS[(value as usize).min(FOOD_COLORS.len() - 1)]
}

/// Full frame: background, food, body, head
pub fn render(surface: &mut dyn Surface, state: &SnakeState) {
    let size = surface.size();
    surface.clear();
    surface.fill_rect(Vec2::ZERO, size, BACKGROUND);

    let cell = state.grid.cell;
    for food in &state.food {
        render_food(surface, food, cell);
    }

    let half = Vec2::splat(cell / 2.0);
    if let Some((head, body)) = state.snake.segments().split_first() {
        let inner = Vec2::splat(cell - SEGMENT_PADDING * 2.0);
        for segment in body {
            surface.fill_rect(
                *segment - half + Vec2::splat(SEGMENT_PADDING),
                inner,
                SNAKE_SEGMENT,
            );
        }
        surface.fill_rect(*head - half, Vec2::splat(cell), SNAKE_HEAD);
    }
}

fn render_food(surface: &mut dyn Surface, food: &Food, cell: f32) {
    surface.fill_rect(
        food.pos - Vec2::splat(cell / 2.0),
        Vec2::splat(cell),
        food_color(food.value),
    );

    let text_color = if food.value > 3 {
        Color::WHITE
    } else {
        Color::BLACK
    };
    surface.fill_text(
        &food.value.to_string(),
        food.pos + Vec2::new(0.0, 6.0),
        FOOD_FONT_PX,
        TextAlign::Center,
        text_color,
    );
}

/// Final score overlay drawn over the last frame
pub fn render_score(surface: &mut dyn Surface, score: usize) {
    draw_banner(surface, &format!("Score: {score}"), SNAKE_HEAD);
}
