//! Simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Time only enters through the `dt` passed to `tick`
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod grid;
pub mod state;
pub mod tick;

pub use collision::{circles_overlap, first_collision};
pub use grid::{Axis, MapConfig};
pub use state::{Direction, Enemy, GameEvent, GameState, PausePolicy, Player, Rules, Sprite};
pub use tick::{TickInput, tick};
