//! Two-paddle Pong on a rectangular field

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{in_bounce_zone, overlaps_paddle, past_offset_line};
pub use state::{Ball, Field, Paddle, PongState, Side};
pub use tick::tick;
