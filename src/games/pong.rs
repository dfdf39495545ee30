//! Pong controller: 250 Hz simulation, independent 60 Hz rendering

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::clock::FixedRate;
use super::{Game, GameKind, Lifecycle, transition};
use crate::renderer::{Surface, pong as draw};
use crate::sim::pong::{PongState, tick};
use crate::sim::{GameEvent, GameResult, KeyState};
use crate::tuning::PongTuning;

pub struct PongGame<S: Surface> {
    surface: S,
    state: PongState,
    keys: KeyState,
    sim_clock: FixedRate,
    render_clock: FixedRate,
    lifecycle: Lifecycle,
}

impl<S: Surface> PongGame<S> {
    /// Playfield geometry comes from the surface size
    pub fn new(surface: S, tuning: &PongTuning, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let state = PongState::new(surface.size(), tuning, &mut rng);
        log::info!(
            "Pong created on {}x{} (seed {})",
            state.field.width,
            state.field.height,
            seed
        );
        Self {
            surface,
            state,
            keys: KeyState::new(),
            sim_clock: FixedRate::new(tuning.updates_per_second),
            render_clock: FixedRate::new(tuning.renders_per_second),
            lifecycle: Lifecycle::Created,
        }
    }

    pub fn state(&self) -> &PongState {
        &self.state
    }
}

impl<S: Surface> Game for PongGame<S> {
    fn kind(&self) -> GameKind {
        GameKind::Pong
    }

    fn start(&mut self) {
        if !transition(&mut self.lifecycle, Lifecycle::Running, GameKind::Pong) {
            return;
        }
        self.keys.clear();
        self.sim_clock.start();
        self.render_clock.start();
        draw::render(&mut self.surface, &self.state);
    }

    fn stop(&mut self) {
        if !transition(&mut self.lifecycle, Lifecycle::Stopped, GameKind::Pong) {
            return;
        }
        self.sim_clock.cancel();
        self.render_clock.cancel();
        self.keys.clear();
        draw::render_winner(&mut self.surface, self.state.winner);
    }

    fn exit(&mut self) {
        if transition(&mut self.lifecycle, Lifecycle::Exited, GameKind::Pong) {
            self.surface.clear();
        }
    }

    fn frame(&mut self, dt: f32) {
        if self.lifecycle != Lifecycle::Running {
            return;
        }

        for _ in 0..self.sim_clock.advance(dt) {
            if tick(&mut self.state, &self.keys).is_some() {
                draw::render(&mut self.surface, &self.state);
                self.stop();
                return;
            }
        }

        if self.render_clock.advance(dt) > 0 {
            draw::render(&mut self.surface, &self.state);
        }
    }

    fn key_down(&mut self, key: &str) {
        if self.lifecycle == Lifecycle::Running {
            self.keys.press(key);
        }
    }

    fn key_up(&mut self, key: &str) {
        if self.lifecycle == Lifecycle::Running {
            self.keys.release(key);
        }
    }

    fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    fn result(&self) -> Option<GameResult> {
        self.state.winner.map(GameResult::Winner)
    }

    fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.state.events)
    }
}
