//! Draw list for a frame
//!
//! Turns the game state into plain drawing commands so the canvas layer
//! only has to replay them.

use glam::Vec2;

use crate::sim::{GameState, Sprite};

/// Horizontal text anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

impl TextAlign {
    /// Canvas `textAlign` value
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Clear a rectangle to transparent
    Clear {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
    /// Draw an image with its top-left corner at (x, y)
    Image { sprite: Sprite, x: f32, y: f32 },
    /// Stroke a circle outline
    Circle {
        center: Vec2,
        radius: f32,
        color: &'static str,
    },
    Text {
        text: String,
        x: f32,
        y: f32,
        font: &'static str,
        align: TextAlign,
        color: &'static str,
    },
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub width: f32,
    pub height: f32,
    pub commands: Vec<DrawCommand>,
}

/// Tile for a row: water on top, grass for the two start rows, stone between
pub fn row_sprite(row: u32, rows: u32) -> Sprite {
    if row == 0 {
        Sprite::WaterBlock
    } else if row + 2 >= rows {
        Sprite::GrassBlock
    } else {
        Sprite::StoneBlock
    }
}

/// Build the draw list for the current state
pub fn build(state: &GameState, best_score: Option<u32>) -> Scene {
    let map = &state.map;
    let (width, height) = map.canvas_size();
    let mut commands = Vec::with_capacity(
        (map.rows * map.columns) as usize + state.enemies.len() * 2 + 6,
    );

    // Sprites poke above the top row; clear that band so nothing smears
    commands.push(DrawCommand::Clear {
        x: 0.0,
        y: 0.0,
        width,
        height: map.tile_height,
    });

    for row in 0..map.rows {
        let sprite = row_sprite(row, map.rows);
        for col in 0..map.columns {
            commands.push(DrawCommand::Image {
                sprite,
                x: col as f32 * map.tile_width,
                y: row as f32 * map.tile_height,
            });
        }
    }

    for enemy in &state.enemies {
        commands.push(DrawCommand::Image {
            sprite: Sprite::EnemyBug,
            x: enemy.pos.x,
            y: enemy.pos.y,
        });
    }

    let player = &state.player;
    commands.push(DrawCommand::Image {
        sprite: Sprite::Player,
        x: player.pos.x,
        y: player.pos.y,
    });
    if state.collided {
        commands.push(DrawCommand::Image {
            sprite: Sprite::RedX,
            x: player.pos.x,
            y: player.pos.y,
        });
    }

    if map.debug {
        for enemy in &state.enemies {
            commands.push(DrawCommand::Circle {
                center: enemy.center(map),
                radius: enemy.radius,
                color: "yellow",
            });
        }
        commands.push(DrawCommand::Circle {
            center: player.center(map),
            radius: player.radius,
            color: "lime",
        });
    }

    push_status(&mut commands, state, best_score);

    Scene {
        width,
        height,
        commands,
    }
}

/// Score line, or the game-over banner after a hit
fn push_status(commands: &mut Vec<DrawCommand>, state: &GameState, best_score: Option<u32>) {
    let map = &state.map;
    let width = map.world_width();
    let banner_y = (map.tile_height * map.rows as f32 * 2.0 / 3.0).trunc();

    if state.collided {
        commands.push(DrawCommand::Text {
            text: format!("YOU GOT STINKED!! Score: {}", state.score),
            x: (width / 2.0).trunc(),
            y: banner_y,
            font: "25pt Calibri",
            align: TextAlign::Center,
            color: "black",
        });
        return;
    }

    let y = (map.tile_height / 2.0 + 40.0).trunc();
    commands.push(DrawCommand::Text {
        text: format!("Score: {}", state.score),
        x: (width - map.tile_width / 8.0).trunc(),
        y,
        font: "15pt Calibri",
        align: TextAlign::Right,
        color: "white",
    });
    if let Some(best) = best_score {
        commands.push(DrawCommand::Text {
            text: format!("Best: {}", best),
            x: (map.tile_width / 8.0).trunc(),
            y,
            font: "15pt Calibri",
            align: TextAlign::Left,
            color: "white",
        });
    }
    if !state.running {
        commands.push(DrawCommand::Text {
            text: "PAUSED".to_string(),
            x: (width / 2.0).trunc(),
            y: banner_y,
            font: "25pt Calibri",
            align: TextAlign::Center,
            color: "white",
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{MapConfig, Rules};

    fn state() -> GameState {
        GameState::new(MapConfig::default(), Rules::default(), 5)
    }

    fn texts(scene: &Scene) -> Vec<(&str, f32, f32)> {
        scene
            .commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, x, y, .. } => Some((text.as_str(), *x, *y)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_row_sprites() {
        let rows: Vec<Sprite> = (0..6).map(|r| row_sprite(r, 6)).collect();
        assert_eq!(
            rows,
            vec![
                Sprite::WaterBlock,
                Sprite::StoneBlock,
                Sprite::StoneBlock,
                Sprite::StoneBlock,
                Sprite::GrassBlock,
                Sprite::GrassBlock,
            ]
        );
    }

    #[test]
    fn test_scene_size_and_tiles() {
        let state = state();
        let scene = build(&state, None);
        assert_eq!((scene.width, scene.height), (505.0, 606.0));

        let tiles = scene
            .commands
            .iter()
            .filter(|c| {
                matches!(
                    c,
                    DrawCommand::Image {
                        sprite: Sprite::WaterBlock | Sprite::StoneBlock | Sprite::GrassBlock,
                        ..
                    }
                )
            })
            .count();
        assert_eq!(tiles, 30);

        let bugs = scene
            .commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Image { sprite: Sprite::EnemyBug, .. }))
            .count();
        assert_eq!(bugs, state.enemies.len());
    }

    #[test]
    fn test_score_line() {
        let mut state = state();
        state.score = 2;
        let scene = build(&state, Some(7));
        assert_eq!(
            texts(&scene),
            vec![("Score: 2", 492.0, 81.0), ("Best: 7", 12.0, 81.0)]
        );
    }

    #[test]
    fn test_collided_banner_and_marker() {
        let mut state = state();
        state.collided = true;
        state.running = false;
        state.score = 4;
        let scene = build(&state, Some(9));
        assert_eq!(
            texts(&scene),
            vec![("YOU GOT STINKED!! Score: 4", 252.0, 332.0)]
        );
        assert!(scene.commands.contains(&DrawCommand::Image {
            sprite: Sprite::RedX,
            x: state.player.pos.x,
            y: state.player.pos.y,
        }));
    }

    #[test]
    fn test_paused_banner_clear_of_score_line() {
        let mut state = state();
        state.map.set_columns(1);
        state.running = false;
        let scene = build(&state, None);
        assert_eq!(
            texts(&scene),
            vec![("Score: 0", 88.0, 81.0), ("PAUSED", 50.0, 332.0)]
        );
    }

    #[test]
    fn test_debug_circles() {
        let mut state = state();
        assert!(
            !build(&state, None)
                .commands
                .iter()
                .any(|c| matches!(c, DrawCommand::Circle { .. }))
        );

        state.map.debug = true;
        let circles = build(&state, None)
            .commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
            .count();
        assert_eq!(circles, state.enemies.len() + 1);
    }
}
