//! Keyboard mapping
//!
//! Key names follow `KeyboardEvent.key`.

use crate::sim::{Direction, TickInput};

/// A player or UI request, queued until the next tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Move(Direction),
    Pause,
    Reset,
    MoreEnemies,
    FewerEnemies,
    WiderMap,
    NarrowerMap,
    ToggleDebug,
}

impl Action {
    /// Record this action into the pending tick input
    pub fn apply_to(self, input: &mut TickInput) {
        match self {
            Action::Move(direction) => input.moves.push(direction),
            // Two presses in one frame cancel out
            Action::Pause => input.pause = !input.pause,
            Action::Reset => input.reset = true,
            Action::MoreEnemies => input.enemy_delta += 1,
            Action::FewerEnemies => input.enemy_delta -= 1,
            Action::WiderMap => input.column_delta += 1,
            Action::NarrowerMap => input.column_delta -= 1,
            Action::ToggleDebug => input.toggle_debug = !input.toggle_debug,
        }
    }
}

/// Map a key name to an action
pub fn action_for_key(key: &str) -> Option<Action> {
    let action = match key {
        "ArrowLeft" | "Left" => Action::Move(Direction::Left),
        "ArrowRight" | "Right" => Action::Move(Direction::Right),
        "ArrowUp" | "Up" => Action::Move(Direction::Up),
        "ArrowDown" | "Down" => Action::Move(Direction::Down),
        "p" | "P" | "Escape" => Action::Pause,
        "r" | "R" | "Enter" => Action::Reset,
        "+" | "=" => Action::MoreEnemies,
        "-" | "_" => Action::FewerEnemies,
        "]" => Action::WiderMap,
        "[" => Action::NarrowerMap,
        "d" | "D" => Action::ToggleDebug,
        _ => return None,
    };
    Some(action)
}
