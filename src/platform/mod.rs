//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Input events (key names to game actions)
//! - Frame timing
//! - Storage (LocalStorage on web)

pub mod input;
pub mod storage;
pub mod time;

pub use input::{Action, action_for_key};
pub use time::FrameClock;
