//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the arcade.
//! All types are pure data structures with no external dependencies, making
//! them usable in any context (game logic, rendering, input mapping, tests).
//!
//! # Frame Timing
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_MS` | 16 | Target frame interval (~60 FPS) |
//! | `KEY_RELEASE_TIMEOUT_MS` | 150 | Auto-release window for held keys |
//!
//! The backend paces the loop at `FRAME_MS`, but games must never assume an
//! exact interval: all motion is scaled by the measured delta time.
//!
//! # Input Model
//!
//! Terminal input is normalized into [`InputEvent`]. The two named direction
//! concepts every game understands are [`Key::Left`] and [`Key::Right`]; each
//! is reachable via an arrow key or a legacy letter alias (`a`/`d`). Terminals
//! that never deliver key-release events are handled downstream with the
//! `KEY_RELEASE_TIMEOUT_MS` auto-release window.
//!
//! # Examples
//!
//! ```
//! use tui_arcade_types::{InputEvent, Key, Rgb};
//!
//! let event = InputEvent::KeyDown(Key::Left);
//! assert!(matches!(event, InputEvent::KeyDown(_)));
//!
//! let accent = Rgb::from_hex("#0095DD").unwrap();
//! assert_eq!(accent, Rgb::new(0x00, 0x95, 0xDD));
//! ```

/// Target frame interval in milliseconds (~60 FPS).
pub const FRAME_MS: u32 = 16;

/// Auto-release window for held keys in terminals without release events.
pub const KEY_RELEASE_TIMEOUT_MS: u32 = 150;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#RRGGBB` color (leading `#` optional).
    ///
    /// Returns `None` for anything that is not exactly six hex digits; config
    /// and style parsing treat that as "value absent" rather than an error.
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 {
            return None;
        }
        let r = u8::from_str_radix(hex.get(0..2)?, 16).ok()?;
        let g = u8::from_str_radix(hex.get(2..4)?, 16).ok()?;
        let b = u8::from_str_radix(hex.get(4..6)?, 16).ok()?;
        Some(Self { r, g, b })
    }
}

/// Minimal per-cell styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
    pub dim: bool,
}

impl Default for CellStyle {
    fn default() -> Self {
        Self {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        }
    }
}

/// Named keys the arcade cares about.
///
/// `Left` and `Right` are the two direction concepts shared by every game;
/// anything else arrives as `Char` (printable keys) or `Other` (function
/// keys, enter, escape, ...). Keeping the set small keeps game input handling
/// small.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Char(char),
    Other,
}

/// A normalized input event delivered to games between frames.
///
/// `Click` coordinates are in surface cells, already translated from terminal
/// coordinates by the backend (the renderer may center a small surface inside
/// a larger terminal).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    KeyDown(Key),
    KeyUp(Key),
    Click { x: u16, y: u16 },
    /// Quit requested by the player (`q` or `Ctrl-C`). Handled by the loop
    /// driver, never forwarded to games.
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_from_hex_parses_with_and_without_hash() {
        assert_eq!(Rgb::from_hex("#0095DD"), Some(Rgb::new(0x00, 0x95, 0xDD)));
        assert_eq!(Rgb::from_hex("0095dd"), Some(Rgb::new(0x00, 0x95, 0xDD)));
        assert_eq!(Rgb::from_hex("  #FFFFFF "), Some(Rgb::new(255, 255, 255)));
    }

    #[test]
    fn test_rgb_from_hex_rejects_malformed_input() {
        assert_eq!(Rgb::from_hex(""), None);
        assert_eq!(Rgb::from_hex("#fff"), None);
        assert_eq!(Rgb::from_hex("#00195DD"), None);
        assert_eq!(Rgb::from_hex("nothex"), None);
    }

    #[test]
    fn test_rgb_from_hex_rejects_multibyte_text() {
        // Six bytes long, but not six hex digits.
        assert_eq!(Rgb::from_hex("€abc"), None);
        assert_eq!(Rgb::from_hex("#€abc"), None);
        assert_eq!(Rgb::from_hex("ééé"), None);
    }

    #[test]
    fn test_cell_style_default_is_light_on_black() {
        let style = CellStyle::default();
        assert_eq!(style.bg, Rgb::new(0, 0, 0));
        assert!(!style.bold);
        assert!(!style.dim);
    }
}
