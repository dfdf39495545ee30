//! Snake controller: one render per simulation tick

use super::clock::FixedRate;
use super::{Game, GameKind, Lifecycle, transition};
use crate::renderer::{Surface, snake as draw};
use crate::sim::snake::{SnakeState, advance, resolve_collisions};
use crate::sim::{Direction, GameEvent, GameResult};
use crate::tuning::SnakeTuning;

pub struct SnakeGame<S: Surface> {
    surface: S,
    state: SnakeState,
    clock: FixedRate,
    lifecycle: Lifecycle,
}

impl<S: Surface> SnakeGame<S> {
    pub fn new(surface: S, tuning: &SnakeTuning, seed: u64) -> Self {
        let state = SnakeState::new(surface.size(), tuning, seed);
        log::info!(
            "Snake created on a {}x{} grid (seed {})",
            state.grid.cols(),
            state.grid.rows(),
            seed
        );
        Self {
            surface,
            state,
            clock: FixedRate::new(tuning.ticks_per_second),
            lifecycle: Lifecycle::Created,
        }
    }

    pub fn state(&self) -> &SnakeState {
        &self.state
    }
}

impl<S: Surface> Game for SnakeGame<S> {
    fn kind(&self) -> GameKind {
        GameKind::Snake
    }

    fn start(&mut self) {
        if transition(&mut self.lifecycle, Lifecycle::Running, GameKind::Snake) {
            self.clock.start();
            draw::render(&mut self.surface, &self.state);
        }
    }

    fn stop(&mut self) {
        if transition(&mut self.lifecycle, Lifecycle::Stopped, GameKind::Snake) {
            self.clock.cancel();
            draw::render_score(&mut self.surface, self.state.score());
        }
    }

    fn exit(&mut self) {
        if transition(&mut self.lifecycle, Lifecycle::Exited, GameKind::Snake) {
            self.surface.clear();
        }
    }

    fn frame(&mut self, dt: f32) {
        if self.lifecycle != Lifecycle::Running {
            return;
        }

        for _ in 0..self.clock.advance(dt) {
            // Drawn before collisions resolve, so a fatal move is visible
            advance(&mut self.state);
            draw::render(&mut self.surface, &self.state);
            if resolve_collisions(&mut self.state).is_some() {
                self.stop();
                return;
            }
        }
    }

    fn key_down(&mut self, key: &str) {
        if self.lifecycle != Lifecycle::Running {
            return;
        }
        if let Some(direction) = Direction::from_key(key) {
            self.state.request_direction(direction);
        }
    }

    fn key_up(&mut self, _key: &str) {}

    fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    fn result(&self) -> Option<GameResult> {
        self.state
            .game_over
            .then(|| GameResult::Score(self.state.score()))
    }

    fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.state.events)
    }
}
