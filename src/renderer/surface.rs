//! Drawing surface abstraction
//!
//! Games receive a surface handle at construction and draw only through it.
//! The browser build backs it with a 2D canvas context; tests and the native
//! binary use [`super::RecordingSurface`].

use glam::Vec2;

/// RGBA color (alpha 0.0 - 1.0)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// From a 0xRRGGBB literal
    pub const fn hex(rgb: u32) -> Self {
        Self::rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }

    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// CSS color string for canvas fill/stroke styles
    pub fn to_css(&self) -> String {
        if self.a >= 1.0 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
        }
    }
}

/// Horizontal text anchoring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
}

/// A fixed-size 2D drawing target, y growing downward
pub trait Surface {
    /// Width and height in pixels
    fn size(&self) -> Vec2;

    /// Erase everything to transparent
    fn clear(&mut self);

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Color);

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color);

    /// Bold text with its baseline at `anchor.y`
    fn fill_text(&mut self, text: &str, anchor: Vec2, font_px: f32, align: TextAlign, color: Color);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_colors() {
        assert_eq!(Color::hex(0x66B2FF).to_css(), "#66b2ff");
        assert_eq!(Color::WHITE.with_alpha(0.7).to_css(), "rgba(255, 255, 255, 0.7)");
    }
}
