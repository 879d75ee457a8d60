//! Bug Crossing - A lane-crossing arcade game
//!
//! Core modules:
//! - `sim`: Simulation (map grid, entities, collisions, tick)
//! - `game`: Frame loop driver around the simulation
//! - `renderer`: Scene building and Canvas 2D drawing
//! - `platform`: Browser/native platform abstraction
//! - `settings`, `highscores`: Persisted preferences and scores

pub mod game;
pub mod highscores;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::Game;
pub use highscores::HighScores;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Default map size (tiles)
    pub const DEFAULT_COLUMNS: u32 = 5;
    pub const DEFAULT_ROWS: u32 = 6;
    pub const DEFAULT_ENEMY_COUNT: u32 = 3;

    /// Tile size in pixels
    pub const TILE_WIDTH: f32 = 101.0;
    pub const TILE_HEIGHT: f32 = 83.0;

    /// Limits for the map controls
    pub const MAX_COLUMNS: u32 = 12;
    pub const MIN_ROWS: u32 = 4;
    pub const MAX_ROWS: u32 = 10;
    pub const MAX_ENEMIES: u32 = 16;

    /// Extra canvas height below the tile grid (sprites overhang their tiles)
    pub const CANVAS_EXTRA_HEIGHT: f32 = 108.0;

    /// Sprites are drawn this far above the bottom of their row
    pub const SPRITE_Y_OFFSET: f32 = 80.0;
    /// Highest y the player may reach (above the top row)
    pub const MIN_PLAYER_Y: f32 = -50.0;
    /// Vertical offset from sprite origin to its collision center
    pub const COLLISION_CENTER_Y: f32 = 120.0;

    /// Player collision radius
    pub const PLAYER_RADIUS: f32 = 30.0;

    /// Enemy speed range (pixels/second)
    pub const ENEMY_MIN_SPEED: f32 = 30.0;
    pub const ENEMY_MAX_SPEED: f32 = 100.0;
    /// First lane (counted up from the start row) enemies may use
    pub const FIRST_ENEMY_LANE: u32 = 2;

    /// Largest frame delta fed to the simulation (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;
}
