//! Pressed-state tracking for the two direction keys.
//!
//! Most terminals never emit key release events, so a "held" key is really a
//! stream of press repeats. A short auto-release timeout turns silence into a
//! release, preventing a single tap from becoming a sustained hold.

use tui_arcade_types::{InputEvent, Key, KEY_RELEASE_TIMEOUT_MS};

/// Boolean pressed flags for left/right, toggled on press/release events and
/// aged by the frame loop.
#[derive(Debug, Clone)]
pub struct KeyState {
    left: bool,
    right: bool,
    left_idle_ms: f32,
    right_idle_ms: f32,
    release_timeout_ms: f32,
}

impl KeyState {
    pub fn new() -> Self {
        Self::with_release_timeout(KEY_RELEASE_TIMEOUT_MS)
    }

    pub fn with_release_timeout(timeout_ms: u32) -> Self {
        Self {
            left: false,
            right: false,
            left_idle_ms: 0.0,
            right_idle_ms: 0.0,
            release_timeout_ms: timeout_ms as f32,
        }
    }

    /// Feed one input event. Press sets the flag and refreshes its hold
    /// timer; release clears it. Other events are ignored.
    pub fn apply(&mut self, event: &InputEvent) {
        match event {
            InputEvent::KeyDown(Key::Left) => {
                self.left = true;
                self.left_idle_ms = 0.0;
            }
            InputEvent::KeyDown(Key::Right) => {
                self.right = true;
                self.right_idle_ms = 0.0;
            }
            InputEvent::KeyUp(Key::Left) => {
                self.left = false;
                self.left_idle_ms = 0.0;
            }
            InputEvent::KeyUp(Key::Right) => {
                self.right = false;
                self.right_idle_ms = 0.0;
            }
            _ => {}
        }
    }

    /// Advance hold timers by elapsed time. A flag not refreshed within the
    /// release timeout auto-releases.
    pub fn tick(&mut self, dt_ms: f32) {
        if self.left {
            self.left_idle_ms += dt_ms;
            if self.left_idle_ms >= self.release_timeout_ms {
                self.left = false;
            }
        }
        if self.right {
            self.right_idle_ms += dt_ms;
            if self.right_idle_ms >= self.release_timeout_ms {
                self.right = false;
            }
        }
    }

    pub fn left(&self) -> bool {
        self.left
    }

    pub fn right(&self) -> bool {
        self.right
    }
}

impl Default for KeyState {
    fn default() -> Self {
        Self::new()
    }
}
