//! Keyboard input snapshots
//!
//! Event handlers write into these; simulation ticks only ever read them.

use std::collections::HashSet;

/// Keys currently held down, by `KeyboardEvent.key` name
#[derive(Debug, Clone, Default)]
pub struct KeyState {
    pressed: HashSet<String>,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: &str) {
        self.pressed.insert(key.to_string());
    }

    pub fn release(&mut self, key: &str) {
        self.pressed.remove(key);
    }

    pub fn is_pressed(&self, key: &str) -> bool {
        self.pressed.contains(key)
    }

    /// Drop every held key (input detached)
    pub fn clear(&mut self) {
        self.pressed.clear();
    }
}

/// Grid movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Map an arrow key name to a direction
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" => Some(Direction::Up),
            "ArrowDown" => Some(Direction::Down),
            "ArrowLeft" => Some(Direction::Left),
            "ArrowRight" => Some(Direction::Right),
            _ => None,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Unit step in screen coordinates (y grows downward)
    pub fn step(self) -> glam::Vec2 {
        match self {
            Direction::Up => glam::Vec2::new(0.0, -1.0),
            Direction::Down => glam::Vec2::new(0.0, 1.0),
            Direction::Left => glam::Vec2::new(-1.0, 0.0),
            Direction::Right => glam::Vec2::new(1.0, 0.0),
        }
    }
}
