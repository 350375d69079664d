//! Frame source and presentation backend.
//!
//! The engine is generic over [`Backend`]: the host primitive that paces
//! frames, collects input, and flushes the finished surface. The terminal
//! implementation sleeps inside `event::poll` until the next frame deadline,
//! draining events while it waits. Tests substitute a scripted stub.

use std::time::{Duration, Instant};

use anyhow::Result;
use arrayvec::ArrayVec;
use crossterm::event;

use tui_arcade_input::map_event;
use tui_arcade_types::{InputEvent, FRAME_MS};

use crate::renderer::TerminalRenderer;
use crate::surface::Surface;

/// Upper bound on input events delivered with a single frame. Anything past
/// this within one frame interval is dropped.
pub const FRAME_EVENT_CAPACITY: usize = 32;

/// One frame from the host scheduler: a timestamp plus the input that
/// arrived while waiting for it.
#[derive(Debug, Clone)]
pub struct Frame {
    /// Milliseconds since the backend's clock origin.
    pub timestamp_ms: f64,
    pub events: ArrayVec<InputEvent, FRAME_EVENT_CAPACITY>,
}

impl Frame {
    pub fn new(timestamp_ms: f64) -> Self {
        Self {
            timestamp_ms,
            events: ArrayVec::new(),
        }
    }

    /// Add an event, dropping it if the frame is already full.
    pub fn push_event(&mut self, event: InputEvent) {
        let _ = self.events.try_push(event);
    }
}

/// Host services a running game loop needs.
pub trait Backend {
    /// Milliseconds elapsed on the backend's monotonic clock.
    fn now_ms(&self) -> f64;

    /// Block until the next display refresh is due.
    fn wait_frame(&mut self) -> Result<Frame>;

    /// Flush the surface to the output device. The surface contents after
    /// this call are unspecified; games redraw from scratch every frame.
    fn present(&mut self, surface: &mut Surface) -> Result<()>;
}

/// Real-terminal backend: crossterm input, diff-rendered output.
pub struct TerminalBackend {
    renderer: TerminalRenderer,
    epoch: Instant,
    frame: Duration,
    next_deadline: Instant,
}

impl TerminalBackend {
    pub fn new() -> Self {
        Self::with_frame_ms(FRAME_MS)
    }

    pub fn with_frame_ms(frame_ms: u32) -> Self {
        let frame = Duration::from_millis(u64::from(frame_ms.max(1)));
        let now = Instant::now();
        Self {
            renderer: TerminalRenderer::new(),
            epoch: now,
            frame,
            next_deadline: now + frame,
        }
    }

    /// Capture mouse clicks and deliver them as `Click` events.
    pub fn with_mouse(mut self, enabled: bool) -> Self {
        self.renderer = std::mem::take(&mut self.renderer).with_mouse(enabled);
        self
    }

    /// Enter raw mode and the alternate screen.
    pub fn enter(&mut self) -> Result<()> {
        self.renderer.enter()
    }

    /// Restore the terminal. Safe to call after a failed `enter`.
    pub fn exit(&mut self) -> Result<()> {
        self.renderer.exit()
    }
}

impl Default for TerminalBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl Backend for TerminalBackend {
    fn now_ms(&self) -> f64 {
        self.epoch.elapsed().as_secs_f64() * 1000.0
    }

    fn wait_frame(&mut self) -> Result<Frame> {
        let mut frame = Frame::new(0.0);

        // Drain input until the frame deadline.
        loop {
            let now = Instant::now();
            if now >= self.next_deadline {
                break;
            }
            let timeout = self.next_deadline - now;
            if event::poll(timeout)? {
                let raw = event::read()?;
                if let event::Event::Resize(..) = raw {
                    self.renderer.invalidate();
                    continue;
                }
                let Some(mapped) = map_event(&raw) else {
                    continue;
                };
                let mapped = match mapped {
                    // Clicks arrive in terminal coordinates; deliver them in
                    // surface coordinates, dropping clicks outside the board.
                    InputEvent::Click { x, y } => match self.renderer.to_surface(x, y) {
                        Some((sx, sy)) => InputEvent::Click { x: sx, y: sy },
                        None => continue,
                    },
                    other => other,
                };
                frame.push_event(mapped);
            }
        }

        // Schedule the next frame; if we fell behind, re-anchor instead of
        // bursting catch-up frames.
        self.next_deadline += self.frame;
        let now = Instant::now();
        if self.next_deadline < now {
            self.next_deadline = now + self.frame;
        }

        frame.timestamp_ms = self.now_ms();
        Ok(frame)
    }

    fn present(&mut self, surface: &mut Surface) -> Result<()> {
        self.renderer.draw_swap(surface)
    }
}
