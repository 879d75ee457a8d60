//! Tile grid geometry and the player bounds check
//!
//! Rows are counted from the top (row 0 is the water). Lanes are counted up
//! from the start row: lane 0 is the start row, lane `rows - 1` the water.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Axis tag for the bounds check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// Map dimensions and the controls that reshape it at runtime
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapConfig {
    pub columns: u32,
    pub rows: u32,
    pub tile_width: f32,
    pub tile_height: f32,
    pub enemy_count: u32,
    /// Draw collision circles
    pub debug: bool,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            rows: DEFAULT_ROWS,
            tile_width: TILE_WIDTH,
            tile_height: TILE_HEIGHT,
            enemy_count: DEFAULT_ENEMY_COUNT,
            debug: false,
        }
    }
}

impl MapConfig {
    /// Sprite y for the start row
    #[inline]
    pub fn sprite_beginning_y(&self) -> f32 {
        self.rows as f32 * self.tile_height - SPRITE_Y_OFFSET - (self.tile_height / 2.0).floor()
    }

    /// Sprite y for a lane
    #[inline]
    pub fn lane_y(&self, lane: u32) -> f32 {
        self.sprite_beginning_y() - lane as f32 * self.tile_height
    }

    /// Player y at or above which a crossing counts
    #[inline]
    pub fn top_row_y(&self) -> f32 {
        self.lane_y(self.rows.saturating_sub(1))
    }

    /// Width of the playfield in pixels
    #[inline]
    pub fn world_width(&self) -> f32 {
        self.columns as f32 * self.tile_width
    }

    /// Rightmost x the player may stand on
    #[inline]
    pub fn max_player_x(&self) -> f32 {
        self.columns.saturating_sub(1) as f32 * self.tile_width
    }

    /// Display surface size (width, height)
    pub fn canvas_size(&self) -> (f32, f32) {
        (
            self.world_width(),
            self.rows as f32 * self.tile_height + CANVAS_EXTRA_HEIGHT,
        )
    }

    /// Lanes enemies spawn in (the paved rows)
    pub fn enemy_lanes(&self) -> RangeInclusive<u32> {
        let last = self.rows.saturating_sub(2).max(FIRST_ENEMY_LANE);
        FIRST_ENEMY_LANE..=last
    }

    /// Check whether a candidate player coordinate stays on the map.
    ///
    /// Non-numeric input is never valid.
    pub fn location_valid(&self, value: f32, axis: Axis) -> bool {
        if value.is_nan() {
            return false;
        }
        match axis {
            Axis::X => (0.0..=self.max_player_x()).contains(&value),
            Axis::Y => (MIN_PLAYER_Y..=self.sprite_beginning_y()).contains(&value),
        }
    }

    /// Set the column count; returns true if it changed
    pub fn set_columns(&mut self, columns: i64) -> bool {
        let columns = columns.clamp(1, MAX_COLUMNS as i64) as u32;
        let changed = columns != self.columns;
        self.columns = columns;
        changed
    }

    /// Set the enemy count; returns true if it changed
    pub fn set_enemy_count(&mut self, count: i64) -> bool {
        let count = count.clamp(0, MAX_ENEMIES as i64) as u32;
        let changed = count != self.enemy_count;
        self.enemy_count = count;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_sprite_beginning_y() {
        let map = MapConfig::default();
        assert_eq!(map.sprite_beginning_y(), 377.0);
        assert_eq!(map.top_row_y(), 377.0 - 5.0 * 83.0);
    }

    #[test]
    fn test_canvas_size() {
        let map = MapConfig::default();
        assert_eq!(map.canvas_size(), (505.0, 606.0));
    }

    #[test]
    fn test_enemy_lanes_are_paved_rows() {
        let map = MapConfig::default();
        assert_eq!(map.enemy_lanes(), 2..=4);

        // Smallest map: one paved row below the water
        let small = MapConfig {
            rows: MIN_ROWS,
            ..MapConfig::default()
        };
        assert_eq!(small.enemy_lanes(), 2..=2);
        assert!(*small.enemy_lanes().end() < small.rows - 1);
    }

    #[test]
    fn test_location_valid_edges() {
        let map = MapConfig::default();
        assert!(map.location_valid(0.0, Axis::X));
        assert!(map.location_valid(404.0, Axis::X));
        assert!(!map.location_valid(-101.0, Axis::X));
        assert!(!map.location_valid(505.0, Axis::X));

        assert!(map.location_valid(-50.0, Axis::Y));
        assert!(map.location_valid(377.0, Axis::Y));
        assert!(!map.location_valid(-50.5, Axis::Y));
        assert!(!map.location_valid(460.0, Axis::Y));
    }

    #[test]
    fn test_location_valid_rejects_nan() {
        let map = MapConfig::default();
        assert!(!map.location_valid(f32::NAN, Axis::X));
        assert!(!map.location_valid(f32::NAN, Axis::Y));
    }

    #[test]
    fn test_set_columns_clamps() {
        let mut map = MapConfig::default();
        assert!(map.set_columns(0));
        assert_eq!(map.columns, 1);
        assert!(map.set_columns(100));
        assert_eq!(map.columns, MAX_COLUMNS);
        assert!(!map.set_columns(MAX_COLUMNS as i64));
    }

    #[test]
    fn test_set_enemy_count_clamps() {
        let mut map = MapConfig::default();
        assert!(map.set_enemy_count(-4));
        assert_eq!(map.enemy_count, 0);
        assert!(!map.set_enemy_count(0));
    }

    proptest! {
        #[test]
        fn prop_x_inside_range_is_valid(x in 0.0f32..=404.0) {
            prop_assert!(MapConfig::default().location_valid(x, Axis::X));
        }

        #[test]
        fn prop_x_outside_range_is_invalid(x in prop_oneof![-1.0e6f32..-0.001, 404.001f32..1.0e6]) {
            prop_assert!(!MapConfig::default().location_valid(x, Axis::X));
        }

        #[test]
        fn prop_y_inside_range_is_valid(y in -50.0f32..=377.0) {
            prop_assert!(MapConfig::default().location_valid(y, Axis::Y));
        }

        #[test]
        fn prop_y_outside_range_is_invalid(y in prop_oneof![-1.0e6f32..-50.001, 377.001f32..1.0e6]) {
            prop_assert!(!MapConfig::default().location_valid(y, Axis::Y));
        }
    }
}
