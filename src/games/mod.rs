//! Example games built on the arcade stack.
//!
//! `breakout` is real-time and runs on the engine's frame loop; `tictactoe`
//! is turn-based and drives itself from blocking terminal events. Each game
//! embeds a complete default config and accepts a user overlay on top.

pub mod breakout;
pub mod tictactoe;
