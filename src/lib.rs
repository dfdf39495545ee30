//! Pocket Arcade - Snake and Pong on one canvas
//!
//! Core modules:
//! - `sim`: Deterministic simulations (entities, collisions, rules)
//! - `games`: Game controllers with fixed-rate schedules and lifecycle
//! - `manager`: Menu/game switching
//! - `renderer`: 2D drawing surface and per-game draw routines
//! - `tuning`: Data-driven game balance

#[cfg(target_arch = "wasm32")]
pub mod audio;
pub mod games;
pub mod manager;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use games::{Game, GameKind, Lifecycle};
pub use manager::{Manager, View};
pub use tuning::{Tuning, TuningError};

/// Shell constants
pub mod consts {
    /// Canvas size used when the page does not provide one
    pub const CANVAS_WIDTH: u32 = 800;
    pub const CANVAS_HEIGHT: u32 = 600;

    /// Frame delta assumed for the first animation frame (seconds)
    pub const FIRST_FRAME_DT: f32 = 1.0 / 60.0;
}
