//! Game controllers
//!
//! A controller owns one running simulation, its schedules, and the surface
//! it draws on. The shell only talks to it through [`Game`].

pub mod clock;
pub mod pong;
pub mod snake;

pub use clock::FixedRate;
pub use pong::PongGame;
pub use snake::SnakeGame;

use std::collections::HashMap;

use crate::renderer::Surface;
use crate::sim::{GameEvent, GameResult};
use crate::tuning::Tuning;

/// Registered game types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameKind {
    Snake,
    Pong,
}

impl GameKind {
    pub const ALL: [GameKind; 2] = [GameKind::Snake, GameKind::Pong];

    /// Identifier used by menu buttons
    pub fn id(self) -> &'static str {
        match self {
            GameKind::Snake => "snake",
            GameKind::Pong => "pong",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.id() == id)
    }
}

/// Controller lifecycle; transitions only move forward one step at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Created,
    Running,
    Stopped,
    Exited,
}

impl Lifecycle {
    pub fn next(self) -> Option<Lifecycle> {
        match self {
            Lifecycle::Created => Some(Lifecycle::Running),
            Lifecycle::Running => Some(Lifecycle::Stopped),
            Lifecycle::Stopped => Some(Lifecycle::Exited),
            Lifecycle::Exited => None,
        }
    }
}

/// Move `current` to `to` if that is the next state. Anything else is logged
/// and ignored.
pub(crate) fn transition(current: &mut Lifecycle, to: Lifecycle, kind: GameKind) -> bool {
    if current.next() != Some(to) {
        log::warn!(
            "{}: ignoring {:?} request while {:?}",
            kind.id(),
            to,
            current
        );
        return false;
    }
    log::info!("{}: {:?} -> {:?}", kind.id(), current, to);
    *current = to;
    true
}

/// Lifecycle contract shared by every game controller
pub trait Game {
    fn kind(&self) -> GameKind;

    /// Attach input and begin ticking
    fn start(&mut self);

    /// Cancel schedules, detach input and draw the result overlay
    fn stop(&mut self);

    /// Clear the surface
    fn exit(&mut self);

    /// Advance schedules by one animation frame of `dt` seconds
    fn frame(&mut self, dt: f32);

    fn key_down(&mut self, key: &str);

    fn key_up(&mut self, key: &str);

    fn lifecycle(&self) -> Lifecycle;

    /// Final result once the round has ended on its own
    fn result(&self) -> Option<GameResult>;

    /// Take the events emitted since the last call
    fn drain_events(&mut self) -> Vec<GameEvent>;
}

/// Builds a controller bound to a surface
pub type GameFactory<S> = fn(S, &Tuning, u64) -> Box<dyn Game>;

/// Factories for every [`GameKind`]
pub fn registry<S: Surface + 'static>() -> HashMap<GameKind, GameFactory<S>> {
    let mut registry: HashMap<GameKind, GameFactory<S>> = HashMap::new();
    registry.insert(GameKind::Snake, |surface, tuning, seed| {
        Box::new(SnakeGame::new(surface, &tuning.snake, seed))
    });
    registry.insert(GameKind::Pong, |surface, tuning, seed| {
        Box::new(PongGame::new(surface, &tuning.pong, seed))
    });
    registry
}
