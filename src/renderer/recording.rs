//! Headless surface that records draw calls

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;

use super::surface::{Color, Surface, TextAlign};

/// One recorded drawing call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear,
    Rect {
        origin: Vec2,
        size: Vec2,
        color: Color,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    Line {
        from: Vec2,
        to: Vec2,
        width: f32,
        color: Color,
    },
    Text {
        text: String,
        anchor: Vec2,
        font_px: f32,
        align: TextAlign,
        color: Color,
    },
}

/// Records every call; clones share the same log, like clones of a canvas
/// context share the same canvas.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    size: Vec2,
    commands: Rc<RefCell<Vec<DrawCommand>>>,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
            commands: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Everything drawn so far
    pub fn commands(&self) -> Vec<DrawCommand> {
        self.commands.borrow().clone()
    }

    /// Commands issued after the most recent clear
    pub fn last_frame(&self) -> Vec<DrawCommand> {
        let commands = self.commands.borrow();
        let start = commands
            .iter()
            .rposition(|c| *c == DrawCommand::Clear)
            .map_or(0, |i| i + 1);
        commands[start..].to_vec()
    }

    /// Text strings drawn so far, in order
    pub fn texts(&self) -> Vec<String> {
        self.commands
            .borrow()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn clear_count(&self) -> usize {
        self.commands
            .borrow()
            .iter()
            .filter(|c| **c == DrawCommand::Clear)
            .count()
    }

    /// Forget recorded commands
    pub fn reset(&self) {
        self.commands.borrow_mut().clear();
    }

    fn push(&self, command: DrawCommand) {
        self.commands.borrow_mut().push(command);
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn clear(&mut self) {
        self.push(DrawCommand::Clear);
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Color) {
        self.push(DrawCommand::Rect {
            origin,
            size,
            color,
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color) {
        self.push(DrawCommand::Line {
            from,
            to,
            width,
            color,
        });
    }

    fn fill_text(&mut self, text: &str, anchor: Vec2, font_px: f32, align: TextAlign, color: Color) {
        self.push(DrawCommand::Text {
            text: text.to_string(),
            anchor,
            font_px,
            align,
            color,
        });
    }
}
