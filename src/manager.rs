//! Menu manager
//!
//! Switches between the game menu and one running game on a shared surface.
//! Knows games only through the [`Game`] lifecycle contract.

use std::collections::HashMap;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::games::{Game, GameFactory, GameKind, Lifecycle, registry};
use crate::renderer::Surface;
use crate::sim::{GameEvent, GameResult};
use crate::tuning::Tuning;

/// Which part of the page is visible
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Game buttons shown, canvas hidden
    Menu,
    /// Canvas and back button shown
    Playing,
}

pub struct Manager<S: Surface + Clone + 'static> {
    surface: S,
    tuning: Tuning,
    registry: HashMap<GameKind, GameFactory<S>>,
    current: Option<Box<dyn Game>>,
    view: View,
    rng: Pcg32,
}

impl<S: Surface + Clone + 'static> Manager<S> {
    pub fn new(surface: S, tuning: Tuning, seed: u64) -> Self {
        Self {
            surface,
            tuning,
            registry: registry(),
            current: None,
            view: View::Menu,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn current_kind(&self) -> Option<GameKind> {
        self.current.as_ref().map(|game| game.kind())
    }

    pub fn current_lifecycle(&self) -> Option<Lifecycle> {
        self.current.as_ref().map(|game| game.lifecycle())
    }

    pub fn result(&self) -> Option<GameResult> {
        self.current.as_ref().and_then(|game| game.result())
    }

    /// Create and start the game registered under `id`, replacing any
    /// running one. Unknown ids leave everything as it was.
    pub fn start_game(&mut self, id: &str) -> bool {
        let Some(kind) = GameKind::from_id(id) else {
            log::warn!("Unknown game id: {:?}", id);
            return false;
        };
        let Some(factory) = self.registry.get(&kind).copied() else {
            log::warn!("No factory registered for {}", kind.id());
            return false;
        };

        self.teardown();

        let seed = self.rng.random();
        let mut game = factory(self.surface.clone(), &self.tuning, seed);
        game.start();
        self.current = Some(game);
        self.view = View::Playing;
        log::info!("Now playing {}", kind.id());
        true
    }

    /// Stop and exit the current game, then show the menu
    pub fn back(&mut self) {
        self.teardown();
        self.view = View::Menu;
        log::info!("Back to menu");
    }

    fn teardown(&mut self) {
        let Some(mut game) = self.current.take() else {
            return;
        };
        if game.lifecycle() == Lifecycle::Running {
            game.stop();
        }
        game.exit();
    }

    pub fn frame(&mut self, dt: f32) {
        if let Some(game) = self.current.as_mut() {
            game.frame(dt);
        }
    }

    pub fn key_down(&mut self, key: &str) {
        if let Some(game) = self.current.as_mut() {
            game.key_down(key);
        }
    }

    pub fn key_up(&mut self, key: &str) {
        if let Some(game) = self.current.as_mut() {
            game.key_up(key);
        }
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.current
            .as_mut()
            .map(|game| game.drain_events())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{DrawCommand, RecordingSurface};

    fn manager() -> (Manager<RecordingSurface>, RecordingSurface) {
        let surface = RecordingSurface::new(800.0, 600.0);
        (Manager::new(surface.clone(), Tuning::default(), 11), surface)
    }

    #[test]
    fn test_starts_in_menu() {
        let (manager, surface) = manager();
        assert_eq!(manager.view(), View::Menu);
        assert_eq!(manager.current_kind(), None);
        assert!(surface.commands().is_empty());
    }

    #[test]
    fn test_start_game_runs_it() {
        let (mut manager, surface) = manager();
        assert!(manager.start_game("snake"));
        assert_eq!(manager.view(), View::Playing);
        assert_eq!(manager.current_kind(), Some(GameKind::Snake));
        assert_eq!(manager.current_lifecycle(), Some(Lifecycle::Running));

        manager.frame(1.0 / 15.0);
        assert_eq!(surface.clear_count(), 2);
    }

    #[test]
    fn test_unknown_id_changes_nothing() {
        let (mut manager, _surface) = manager();
        manager.start_game("pong");
        assert!(!manager.start_game("breakout"));
        assert_eq!(manager.current_kind(), Some(GameKind::Pong));
        assert_eq!(manager.view(), View::Playing);
    }

    #[test]
    fn test_switching_games_tears_down_previous() {
        let (mut manager, surface) = manager();
        manager.start_game("snake");
        surface.reset();

        manager.start_game("pong");
        let commands = surface.commands();
        // Snake score banner, exit clear, then the first pong frame
        assert_eq!(surface.texts()[0], "Score: 3");
        assert!(commands.contains(&DrawCommand::Clear));
        assert_eq!(manager.current_kind(), Some(GameKind::Pong));
    }

    #[test]
    fn test_back_returns_to_menu_and_clears() {
        let (mut manager, surface) = manager();
        manager.start_game("pong");
        manager.frame(0.1);

        manager.back();
        assert_eq!(manager.view(), View::Menu);
        assert_eq!(manager.current_kind(), None);
        assert_eq!(surface.commands().last(), Some(&DrawCommand::Clear));

        // Input and frames with nothing running are no-ops
        let before = surface.commands().len();
        manager.key_down("w");
        manager.frame(0.1);
        assert_eq!(surface.commands().len(), before);
        assert!(manager.drain_events().is_empty());
    }

    #[test]
    fn test_events_drained_once() {
        let (mut manager, _surface) = manager();
        manager.start_game("pong");
        for _ in 0..40 {
            manager.frame(0.1);
        }
        assert!(!manager.drain_events().is_empty());
        assert!(manager.drain_events().is_empty());
    }
}
