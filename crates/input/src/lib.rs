//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` events into [`tui_arcade_types::InputEvent`] and provides a
//! pressed-state tracker suitable for terminal environments (including
//! terminals without key-release events).

pub mod map;
pub mod state;

pub use tui_arcade_types as types;

pub use map::{map_event, map_key, should_quit};
pub use state::KeyState;
