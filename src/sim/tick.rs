//! Simulation tick
//!
//! Advances the game by one frame. All outside requests (moves, pause,
//! reset, map controls) arrive through `TickInput` and are consumed here,
//! so the state has a single writer.

use super::collision::first_collision;
use super::state::{Direction, GameEvent, GameState, PausePolicy};

/// Input commands for a single tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickInput {
    /// Queued one-tile moves, oldest first
    pub moves: Vec<Direction>,
    /// Pause toggle
    pub pause: bool,
    /// Reset score and start over
    pub reset: bool,
    /// Columns to add (negative removes)
    pub column_delta: i32,
    /// Enemies to add (negative removes)
    pub enemy_delta: i32,
    /// Flip the collision-circle overlay
    pub toggle_debug: bool,
}

/// Advance the game state by `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    state.events.clear();

    apply_map_controls(state, input);

    if input.reset {
        state.reset();
    }

    if input.pause {
        toggle_pause(state);
    }

    if state.running && !state.collided {
        for &direction in &input.moves {
            state.player.handle_input(direction, &state.map);
        }
    }

    if !state.running {
        return;
    }

    state.sync_enemies();
    for enemy in &mut state.enemies {
        enemy.advance(dt, &state.map);
    }

    // A run ends once; resuming after a hit must not end it again
    if !state.collided {
        if let Some(index) = first_collision(&state.player, &state.enemies, &state.map) {
            state.collided = true;
            state.running = false;
            state.events.push(GameEvent::Collided { score: state.score });
            log::info!(
                "Player hit by bug {} in lane {} (score {})",
                index,
                state.enemies[index].lane,
                state.score
            );
        }
    }

    if !state.collided && state.player.has_crossed(&state.map) {
        state.score += 1;
        state.events.push(GameEvent::Crossed { score: state.score });
        log::info!("Crossed! Score: {}", state.score);
        state.start_round();
    }
}

/// Resize the map, change the enemy count, flip debug
fn apply_map_controls(state: &mut GameState, input: &TickInput) {
    if input.column_delta != 0 {
        let columns = state.map.columns as i64 + input.column_delta as i64;
        if state.map.set_columns(columns) {
            state.player.clamp_to_map(&state.map);
            state.events.push(GameEvent::MapResized {
                columns: state.map.columns,
            });
            log::info!("Map resized to {} columns", state.map.columns);
        }
    }

    if input.enemy_delta != 0 {
        let count = state.map.enemy_count as i64 + input.enemy_delta as i64;
        if state.map.set_enemy_count(count) {
            state.events.push(GameEvent::EnemyCountChanged {
                count: state.map.enemy_count,
            });
            log::info!("Enemy count set to {}", state.map.enemy_count);
        }
    }

    if input.toggle_debug {
        state.map.debug = !state.map.debug;
        log::debug!("Debug overlay: {}", state.map.debug);
    }
}

fn toggle_pause(state: &mut GameState) {
    if state.collided && state.rules.pause_policy == PausePolicy::IgnoreWhenCollided {
        return;
    }
    state.running = !state.running;
    state.events.push(if state.running {
        GameEvent::Resumed
    } else {
        GameEvent::Paused
    });
}
