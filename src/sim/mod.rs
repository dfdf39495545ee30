//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one call = one tick)
//! - Seeded RNG only
//! - Input arrives as snapshots, never read from the platform
//! - No rendering or platform dependencies

pub mod input;
pub mod pong;
pub mod snake;

pub use input::{Direction, KeyState};

use pong::Side;

/// Terminal outcome of a game, computed once at game over
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    /// Pong: the side that did not miss
    Winner(Side),
    /// Snake: segment count at the moment of the bite
    Score(usize),
}

/// Things that happened during a tick that the shell may react to (sound)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    PaddleHit(Side),
    WallHit,
    FoodEaten { value: u32 },
    GameOver(GameResult),
}
