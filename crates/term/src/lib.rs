//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It intentionally avoids ratatui widgets/layout and instead renders into a
//! simple cell surface that can be flushed to a terminal backend.
//!
//! Goals:
//! - Keep game state deterministic and testable
//! - Provide a rendering pipeline that feels closer to a game renderer
//! - Keep the frame source behind a trait so tests can script time and input

pub mod backend;
pub mod renderer;
pub mod surface;
pub mod surfaces;

pub use tui_arcade_types as types;

pub use backend::{Backend, Frame, TerminalBackend};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use surface::{Cell, Surface};
pub use surfaces::SurfaceRegistry;
