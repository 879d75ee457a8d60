//! Game state and core simulation types

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::grid::{Axis, MapConfig};
use crate::consts::*;

/// Images the game draws
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sprite {
    WaterBlock,
    StoneBlock,
    GrassBlock,
    EnemyBug,
    Player,
    /// Marks the player after a collision
    RedX,
}

impl Sprite {
    pub const ALL: [Sprite; 6] = [
        Sprite::StoneBlock,
        Sprite::WaterBlock,
        Sprite::GrassBlock,
        Sprite::EnemyBug,
        Sprite::Player,
        Sprite::RedX,
    ];

    /// Image URL relative to the page
    pub fn path(&self) -> &'static str {
        match self {
            Sprite::WaterBlock => "images/water-block.png",
            Sprite::StoneBlock => "images/stone-block.png",
            Sprite::GrassBlock => "images/grass-block.png",
            Sprite::EnemyBug => "images/enemy-bug.png",
            Sprite::Player => "images/char-princess-girl.png",
            Sprite::RedX => "images/red-x_mark.png",
        }
    }
}

/// A single-tile move request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Axis and pixel offset of a one-tile step
    pub fn step(&self, map: &MapConfig) -> (Axis, f32) {
        match self {
            Direction::Left => (Axis::X, -map.tile_width),
            Direction::Right => (Axis::X, map.tile_width),
            Direction::Up => (Axis::Y, -map.tile_height),
            Direction::Down => (Axis::Y, map.tile_height),
        }
    }
}

/// Collision center of a sprite drawn at `pos`.
///
/// The sprite images carry transparent padding, so the hit point sits well
/// below the sprite origin rather than at the image centroid.
#[inline]
pub fn collision_center(pos: Vec2, map: &MapConfig) -> Vec2 {
    Vec2::new(pos.x + map.tile_width / 2.0, pos.y + COLLISION_CENTER_Y)
}

/// An enemy bug running along a lane
#[derive(Debug, Clone, PartialEq)]
pub struct Enemy {
    pub pos: Vec2,
    /// Horizontal speed (pixels/second)
    pub speed: f32,
    pub lane: u32,
    pub radius: f32,
}

impl Enemy {
    /// Spawn at a random x on the given lane with a random speed
    pub fn spawn<R: Rng + ?Sized>(map: &MapConfig, lane: u32, rng: &mut R) -> Self {
        let speed = rng.random_range(ENEMY_MIN_SPEED..=ENEMY_MAX_SPEED);
        let x = rng.random_range(-map.tile_width..map.world_width());
        Self {
            pos: Vec2::new(x, map.lane_y(lane)),
            speed,
            lane,
            radius: (map.tile_width - 2.0) / 2.0,
        }
    }

    /// Move right by `speed * dt`, re-entering from the left past the edge.
    ///
    /// The overflow past the right edge is kept, so a wrapped enemy enters
    /// at `-tile_width + overflow`.
    pub fn advance(&mut self, dt: f32, map: &MapConfig) {
        let width = map.world_width();
        let mut x = self.pos.x + self.speed * dt;
        while x > width {
            x -= width + map.tile_width;
        }
        self.pos.x = x;
    }

    pub fn center(&self, map: &MapConfig) -> Vec2 {
        collision_center(self.pos, map)
    }
}

/// The player character
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub pos: Vec2,
    pub radius: f32,
}

impl Player {
    /// Player standing on the start tile
    pub fn at_start(map: &MapConfig) -> Self {
        Self {
            pos: Vec2::new(0.0, map.sprite_beginning_y()),
            radius: PLAYER_RADIUS,
        }
    }

    /// Move one tile if the target stays on the map; returns true if moved
    pub fn handle_input(&mut self, direction: Direction, map: &MapConfig) -> bool {
        let (axis, delta) = direction.step(map);
        let candidate = match axis {
            Axis::X => self.pos.x + delta,
            Axis::Y => self.pos.y + delta,
        };
        if !map.location_valid(candidate, axis) {
            return false;
        }
        match axis {
            Axis::X => self.pos.x = candidate,
            Axis::Y => self.pos.y = candidate,
        }
        true
    }

    pub fn center(&self, map: &MapConfig) -> Vec2 {
        collision_center(self.pos, map)
    }

    /// Reached the top row
    pub fn has_crossed(&self, map: &MapConfig) -> bool {
        self.pos.y <= map.top_row_y()
    }

    /// Pull the player back onto the map after it narrowed
    pub fn clamp_to_map(&mut self, map: &MapConfig) {
        if !map.location_valid(self.pos.x, Axis::X) {
            self.pos.x = self.pos.x.clamp(0.0, map.max_player_x());
        }
    }
}

/// What a pause request does while the player is collided
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PausePolicy {
    /// Pause is a no-op until the round is reset
    #[default]
    IgnoreWhenCollided,
    /// Pause always flips the running flag
    Toggle,
}

/// Product-level rule choices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rules {
    pub pause_policy: PausePolicy,
}

/// Something that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Player reached the water
    Crossed { score: u32 },
    /// Player was hit by a bug
    Collided { score: u32 },
    /// Explicit reset (score and collided cleared)
    RoundReset,
    Paused,
    Resumed,
    MapResized { columns: u32 },
    EnemyCountChanged { count: u32 },
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    pub map: MapConfig,
    pub rules: Rules,
    /// Simulation advances
    pub running: bool,
    /// Player was hit; terminal until an explicit reset
    pub collided: bool,
    pub score: u32,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    /// Events from the last tick
    pub events: Vec<GameEvent>,
    rng: Pcg32,
}

impl GameState {
    /// Create a new game state with a fresh round
    pub fn new(map: MapConfig, rules: Rules, seed: u64) -> Self {
        let player = Player::at_start(&map);
        let mut state = Self {
            map,
            rules,
            running: true,
            collided: false,
            score: 0,
            player,
            enemies: Vec::new(),
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
        };
        state.start_round();
        log::debug!("New game state (seed {})", seed);
        state
    }

    /// New enemy set and player back on the start tile.
    ///
    /// Leaves score and collided untouched.
    pub fn start_round(&mut self) {
        self.enemies.clear();
        self.sync_enemies();
        self.player = Player::at_start(&self.map);
    }

    /// Explicit reset: clears score and collided, resumes the simulation
    pub fn reset(&mut self) {
        self.score = 0;
        self.collided = false;
        self.running = true;
        self.start_round();
        self.events.push(GameEvent::RoundReset);
        log::info!("Round reset");
    }

    /// Match the enemy set to the configured count
    pub fn sync_enemies(&mut self) {
        let target = self.map.enemy_count as usize;
        self.enemies.truncate(target);
        while self.enemies.len() < target {
            let lane = self.rng.random_range(self.map.enemy_lanes());
            let enemy = Enemy::spawn(&self.map, lane, &mut self.rng);
            self.enemies.push(enemy);
        }
    }
}
