//! Rendering module
//!
//! `scene` builds a plain draw list from the game state; on the web the
//! canvas layer replays it onto a 2D context using the loaded sprites.

pub mod scene;

#[cfg(target_arch = "wasm32")]
pub mod canvas;
#[cfg(target_arch = "wasm32")]
pub mod resources;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
#[cfg(target_arch = "wasm32")]
pub use resources::Resources;
pub use scene::{DrawCommand, Scene, TextAlign};
