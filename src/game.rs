//! Frame loop driver
//!
//! Owns the simulation and everything around it for one page session.
//! Input handlers only queue actions; all state changes happen in `frame`,
//! which the host calls once per display frame.

use crate::consts::MAX_FRAME_DT;
use crate::highscores::{HighScoreEntry, HighScores};
use crate::platform::{Action, FrameClock, time};
use crate::renderer::scene::{self, Scene};
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, TickInput, tick};

/// Game instance holding all state
pub struct Game {
    pub state: GameState,
    pub settings: Settings,
    pub high_scores: HighScores,
    input: TickInput,
    clock: FrameClock,
}

impl Game {
    pub fn new(settings: Settings, high_scores: HighScores, seed: u64) -> Self {
        let state = GameState::new(settings.map_config(), settings.rules(), seed);
        Self {
            state,
            settings,
            high_scores,
            input: TickInput::default(),
            clock: FrameClock::new(),
        }
    }

    /// Queue an action for the next frame
    pub fn queue(&mut self, action: Action) {
        action.apply_to(&mut self.input);
    }

    /// Pause if the game is currently playing (window lost focus)
    pub fn pause_if_running(&mut self) {
        if self.state.running && !self.state.collided && !self.input.pause {
            self.queue(Action::Pause);
            log::info!("Auto-paused (window blur)");
        }
    }

    /// Advance one display frame. `now_ms` is the host frame timestamp.
    pub fn frame(&mut self, now_ms: f64) {
        let dt = self.clock.delta(now_ms).min(MAX_FRAME_DT);
        let input = std::mem::take(&mut self.input);
        tick(&mut self.state, &input, dt);

        let events = std::mem::take(&mut self.state.events);
        for event in &events {
            self.handle_event(*event);
        }
        self.state.events = events;

        if self.settings.update_from_map(&self.state.map) {
            self.settings.save();
        }
    }

    fn handle_event(&mut self, event: GameEvent) {
        match event {
            GameEvent::Collided { score } => {
                let entry = HighScoreEntry {
                    score,
                    columns: self.state.map.columns,
                    enemies: self.state.map.enemy_count,
                    timestamp: time::unix_ms(),
                };
                if let Some(rank) = self.high_scores.add_score(entry) {
                    log::info!("New high score {} (rank {})", score, rank);
                    self.high_scores.save();
                }
            }
            GameEvent::Paused => log::info!("Paused"),
            GameEvent::Resumed => log::info!("Resumed"),
            _ => {}
        }
    }

    /// Draw list for the current state
    pub fn scene(&self) -> Scene {
        scene::build(&self.state, self.high_scores.top_score())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Direction, Enemy, PausePolicy};
    use glam::Vec2;

    fn quiet_game() -> Game {
        let settings = Settings {
            enemy_count: 0,
            ..Settings::default()
        };
        Game::new(settings, HighScores::new(), 7)
    }

    #[test]
    fn test_first_frame_does_not_move_enemies() {
        let mut game = Game::new(Settings::default(), HighScores::new(), 3);
        let before = game.state.enemies.clone();
        game.frame(123_456.0);
        assert_eq!(game.state.enemies, before);

        game.frame(123_506.0);
        assert_ne!(game.state.enemies, before);
    }

    #[test]
    fn test_frame_delta_is_clamped() {
        let mut game = Game::new(Settings::default(), HighScores::new(), 3);
        game.frame(0.0);
        let before = game.state.enemies.clone();
        // A ten second stall advances at most MAX_FRAME_DT
        game.frame(10_000.0);
        for (old, new) in before.iter().zip(&game.state.enemies) {
            let moved = new.pos.x - old.pos.x;
            if moved >= 0.0 {
                assert!(moved <= old.speed * MAX_FRAME_DT + 1e-3);
            }
        }
    }

    #[test]
    fn test_queued_moves_apply_on_next_frame() {
        let mut game = quiet_game();
        game.queue(Action::Move(Direction::Up));
        game.queue(Action::Move(Direction::Right));
        assert_eq!(game.state.player.pos, Vec2::new(0.0, 377.0));

        game.frame(0.0);
        assert_eq!(game.state.player.pos, Vec2::new(101.0, 294.0));

        // Input is consumed once
        game.frame(16.0);
        assert_eq!(game.state.player.pos, Vec2::new(101.0, 294.0));
    }

    #[test]
    fn test_collision_records_high_score() {
        let mut game = quiet_game();
        game.state.score = 3;
        game.state.map.enemy_count = 1;
        let y = game.state.player.pos.y;
        game.state.enemies.push(Enemy {
            pos: Vec2::new(0.0, y),
            speed: 40.0,
            lane: 0,
            radius: 49.5,
        });

        game.frame(0.0);
        assert!(game.state.collided);
        assert_eq!(game.high_scores.top_score(), Some(3));
        assert_eq!(game.state.events, vec![GameEvent::Collided { score: 3 }]);
    }

    #[test]
    fn test_resuming_after_hit_records_run_once() {
        let settings = Settings {
            enemy_count: 0,
            pause_policy: PausePolicy::Toggle,
            ..Settings::default()
        };
        let mut game = Game::new(settings, HighScores::new(), 7);
        game.state.score = 3;
        game.state.map.enemy_count = 1;
        let y = game.state.player.pos.y;
        game.state.enemies.push(Enemy {
            pos: Vec2::new(0.0, y),
            speed: 0.0,
            lane: 0,
            radius: 49.5,
        });

        game.frame(0.0);
        for i in 1..=3 {
            game.queue(Action::Pause);
            game.frame(i as f64 * 16.0);
        }
        assert!(game.state.collided);
        assert_eq!(game.high_scores.entries.len(), 1);
    }

    #[test]
    fn test_map_controls_update_settings() {
        let mut game = quiet_game();
        game.queue(Action::WiderMap);
        game.queue(Action::MoreEnemies);
        game.frame(0.0);
        assert_eq!(game.settings.columns, 6);
        assert_eq!(game.settings.enemy_count, 1);
        assert_eq!(game.scene().width, 606.0);
    }

    #[test]
    fn test_auto_pause() {
        let mut game = quiet_game();
        game.pause_if_running();
        game.pause_if_running();
        game.frame(0.0);
        assert!(!game.state.running);

        // Already paused: nothing to do
        game.pause_if_running();
        game.frame(16.0);
        assert!(!game.state.running);
    }
}
