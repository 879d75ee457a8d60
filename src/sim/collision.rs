//! Circle overlap test between the player and the bugs
//!
//! Each entity is a circle around its collision center. There is no
//! response: a hit simply stops the simulation.

use glam::Vec2;

use super::grid::MapConfig;
use super::state::{Enemy, Player};

/// Two circles overlap when their centers are closer than the summed radii.
///
/// Touching circles (distance exactly equal to the sum) do not overlap.
#[inline]
pub fn circles_overlap(a: Vec2, a_radius: f32, b: Vec2, b_radius: f32) -> bool {
    a.distance(b) < a_radius + b_radius
}

/// Index of the first enemy touching the player, if any
pub fn first_collision(player: &Player, enemies: &[Enemy], map: &MapConfig) -> Option<usize> {
    let player_center = player.center(map);
    enemies.iter().position(|enemy| {
        circles_overlap(player_center, player.radius, enemy.center(map), enemy.radius)
    })
}
