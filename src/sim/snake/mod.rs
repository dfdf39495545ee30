//! Grid Snake on a wrapping playfield

pub mod spawn;
pub mod state;
pub mod tick;

pub use spawn::{random_free_cell, spawn_food, update_spawner};
pub use state::{Food, Grid, INITIAL_SEGMENTS, Snake, SnakeState, is_occupied};
pub use tick::{advance, resolve_collisions, tick};
