//! Game settings and preferences
//!
//! Persisted in LocalStorage. Map controls used during play (columns,
//! enemy count, debug overlay) are written back so the next visit starts
//! with the same board.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::platform::storage;
use crate::sim::{MapConfig, PausePolicy, Rules};

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Map ===
    pub columns: u32,
    pub rows: u32,
    pub enemy_count: u32,

    // === Rules ===
    /// Whether pausing works after being hit
    pub pause_policy: PausePolicy,

    // === Debug ===
    /// Draw collision circles
    pub debug: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            rows: DEFAULT_ROWS,
            enemy_count: DEFAULT_ENEMY_COUNT,
            pause_policy: PausePolicy::default(),
            debug: false,
        }
    }
}

impl Settings {
    /// LocalStorage key
    const STORAGE_KEY: &'static str = "bug_crossing_settings";

    /// Map configuration for a new game (out-of-range values are clamped)
    pub fn map_config(&self) -> MapConfig {
        let mut map = MapConfig {
            rows: self.rows.clamp(MIN_ROWS, MAX_ROWS),
            debug: self.debug,
            ..MapConfig::default()
        };
        map.set_columns(self.columns as i64);
        map.set_enemy_count(self.enemy_count as i64);
        map
    }

    pub fn rules(&self) -> Rules {
        Rules {
            pause_policy: self.pause_policy,
        }
    }

    /// Pick up map controls changed during play; returns true if anything changed
    pub fn update_from_map(&mut self, map: &MapConfig) -> bool {
        let before = self.clone();
        self.columns = map.columns;
        self.rows = map.rows;
        self.enemy_count = map.enemy_count;
        self.debug = map.debug;
        *self != before
    }

    /// Load settings from storage, falling back to defaults
    pub fn load() -> Self {
        match storage::load(Self::STORAGE_KEY) {
            Some(settings) => {
                log::info!("Loaded settings");
                settings
            }
            None => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    pub fn save(&self) {
        storage::save(Self::STORAGE_KEY, self);
        log::debug!("Settings saved");
    }
}
