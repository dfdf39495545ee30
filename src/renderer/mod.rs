//! 2D canvas rendering
//!
//! Stateless draw routines: each call translates simulation state into
//! drawing calls on the surface it is handed.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod pong;
pub mod recording;
pub mod snake;
pub mod surface;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use recording::{DrawCommand, RecordingSurface};
pub use surface::{Color, Surface, TextAlign};

use glam::Vec2;

const BANNER_SIZE: Vec2 = Vec2::new(350.0, 60.0);
const BANNER_BORDER: f32 = 2.0;
const BANNER_FONT_PX: f32 = 30.0;

/// Centered result box: colored frame, translucent white fill, colored text
pub fn draw_banner(surface: &mut dyn Surface, text: &str, color: Color) {
    let center = surface.size() / 2.0;
    let origin = center - BANNER_SIZE / 2.0;

    surface.fill_rect(
        origin - Vec2::splat(BANNER_BORDER),
        BANNER_SIZE + Vec2::splat(BANNER_BORDER * 2.0),
        color,
    );
    surface.fill_rect(origin, BANNER_SIZE, Color::WHITE.with_alpha(0.7));
    surface.fill_text(
        text,
        center + Vec2::new(0.0, 10.0),
        BANNER_FONT_PX,
        TextAlign::Center,
        color,
    );
}
