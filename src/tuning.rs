//! Data-driven game balance
//!
//! Every field has a default, so a tuning document only needs to name the
//! values it overrides. The browser build reads an optional inline JSON block;
//! nothing here is ever written back.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::CANVAS_WIDTH;

/// Largest value a single food item may be worth, special multiplier included
pub const MAX_FOOD_VALUE: u32 = 10_000;

/// Errors produced while loading a tuning document
#[derive(Debug, Error)]
pub enum TuningError {
    /// The document is not valid JSON for the tuning schema
    #[error("failed to parse tuning: {0}")]
    Parse(#[from] serde_json::Error),

    /// A value parsed but is outside its allowed range
    #[error("invalid tuning value `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Up/down key names for one paddle (`KeyboardEvent.key` values)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBinding {
    pub up: String,
    pub down: String,
}

impl KeyBinding {
    pub fn new(up: &str, down: &str) -> Self {
        Self {
            up: up.to_string(),
            down: down.to_string(),
        }
    }
}

/// Pong balance
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PongTuning {
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Pixels per simulation tick
    pub paddle_speed: f32,
    pub ball_radius: f32,
    /// Gap between the canvas edge and the paddle's outer edge
    pub border_offset: f32,
    /// Pixels per simulation tick
    pub initial_ball_speed: f32,
    /// Applied to horizontal speed on every paddle bounce (must be > 1)
    pub ball_speed_multiplier: f32,
    pub updates_per_second: f32,
    pub renders_per_second: f32,
    pub left_keys: KeyBinding,
    pub right_keys: KeyBinding,
}

impl Default for PongTuning {
    fn default() -> Self {
        Self {
            paddle_width: 16.0,
            paddle_height: 80.0,
            paddle_speed: 1.0,
            ball_radius: 10.0,
            border_offset: 2.0,
            initial_ball_speed: 1.0,
            ball_speed_multiplier: 1.01,
            updates_per_second: 250.0,
            renders_per_second: 60.0,
            left_keys: KeyBinding::new("ArrowUp", "ArrowDown"),
            right_keys: KeyBinding::new("w", "s"),
        }
    }
}

/// Snake balance
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SnakeTuning {
    /// Grid cell edge in pixels; the snake moves one cell per tick
    pub cell_size: f32,
    pub ticks_per_second: f32,
    pub initial_length: usize,
    pub max_food_count: usize,
    /// Ticks between spawn attempts
    pub food_spawn_interval: u32,
    pub max_spawn_retries: u32,
    pub food_value_min: u32,
    pub food_value_max: u32,
    /// Probability (0-1) that a spawned food is special
    pub special_food_chance: f64,
    pub special_food_multiplier: u32,
    /// Food above this value loses one point per tick until it reaches it
    pub food_fade_limit: u32,
    /// Remove food once it has faded down to the limit
    pub remove_decayed_food: bool,
}

impl Default for SnakeTuning {
    fn default() -> Self {
        Self {
            cell_size: 20.0,
            ticks_per_second: 15.0,
            initial_length: 10,
            max_food_count: 5,
            food_spawn_interval: 15,
            max_spawn_retries: 10,
            food_value_min: 1,
            food_value_max: 9,
            special_food_chance: 0.05,
            special_food_multiplier: 10,
            food_fade_limit: 10,
            remove_decayed_food: false,
        }
    }
}

/// Sound effect levels
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioTuning {
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    pub muted: bool,
}

impl Default for AudioTuning {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            muted: false,
        }
    }
}

/// Complete tuning document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub pong: PongTuning,
    pub snake: SnakeTuning,
    pub audio: AudioTuning,
    /// Fixed RNG seed; the page clock is used when absent
    pub seed: Option<u64>,
}

impl Tuning {
    /// Element id of the inline JSON block the browser build reads
    pub const ELEMENT_ID: &'static str = "tuning";

    /// Parse and validate a (possibly partial) JSON document
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Parse a document, falling back to defaults on any error
    pub fn from_json_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(tuning) => {
                log::info!("Loaded tuning overrides");
                tuning
            }
            Err(e) => {
                log::warn!("{e}; using default tuning");
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), TuningError> {
        fn positive(field: &'static str, value: f32) -> Result<(), TuningError> {
            if value > 0.0 && value.is_finite() {
                Ok(())
            } else {
                Err(TuningError::Invalid {
                    field,
                    reason: "must be positive",
                })
            }
        }

        let pong = &self.pong;
        positive("pong.paddle_width", pong.paddle_width)?;
        positive("pong.paddle_height", pong.paddle_height)?;
        positive("pong.ball_radius", pong.ball_radius)?;
        positive("pong.initial_ball_speed", pong.initial_ball_speed)?;
        positive("pong.updates_per_second", pong.updates_per_second)?;
        positive("pong.renders_per_second", pong.renders_per_second)?;
        if pong.ball_speed_multiplier <= 1.0 {
            return Err(TuningError::Invalid {
                field: "pong.ball_speed_multiplier",
                reason: "must be greater than 1",
            });
        }
        // Bounce zones of the two paddles must not overlap
        let reach = pong.border_offset + pong.paddle_width + pong.ball_radius;
        if 2.0 * reach >= CANVAS_WIDTH as f32 {
            return Err(TuningError::Invalid {
                field: "pong.paddle_width",
                reason: "paddles and ball do not fit across the canvas",
            });
        }

        let snake = &self.snake;
        positive("snake.cell_size", snake.cell_size)?;
        positive("snake.ticks_per_second", snake.ticks_per_second)?;
        if snake.initial_length == 0 {
            return Err(TuningError::Invalid {
                field: "snake.initial_length",
                reason: "must be at least 1",
            });
        }
        if snake.food_value_min == 0 || snake.food_value_min > snake.food_value_max {
            return Err(TuningError::Invalid {
                field: "snake.food_value_min",
                reason: "must be between 1 and food_value_max",
            });
        }
        let special_max = snake
            .food_value_max
            .checked_mul(snake.special_food_multiplier.max(1));
        if special_max.is_none_or(|max| max > MAX_FOOD_VALUE) {
            return Err(TuningError::Invalid {
                field: "snake.special_food_multiplier",
                reason: "special food value exceeds MAX_FOOD_VALUE",
            });
        }
        if !(0.0..=1.0).contains(&snake.special_food_chance) {
            return Err(TuningError::Invalid {
                field: "snake.special_food_chance",
                reason: "must be within 0..=1",
            });
        }

        if !(0.0..=1.0).contains(&self.audio.master_volume) {
            return Err(TuningError::Invalid {
                field: "audio.master_volume",
                reason: "must be within 0..=1",
            });
        }

        Ok(())
    }
}
