//! Frame loop driver for real-time games.
//!
//! The engine owns the surface a game draws into and a [`Backend`] that
//! paces frames. Concrete games implement [`Game`]; the loop does the rest:
//! wait for the next frame, dispatch input, advance time, draw, present.
//!
//! Time is delta-based. Each frame carries the backend clock's timestamp,
//! and the game's `update` receives the elapsed milliseconds since the
//! previous frame, so gameplay speed does not depend on the refresh rate.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{anyhow, Result};

use tui_arcade_term::{Backend, Surface, SurfaceRegistry};
use tui_arcade_types::InputEvent;

/// Cooperative stop flag shared between the loop and the running game.
///
/// Stopping is best-effort, not preemptive: the frame during which the
/// token fires still completes in full. A fired token stays fired; the
/// engine never clears it.
#[derive(Debug, Clone, Default)]
pub struct StopToken(Arc<AtomicBool>);

impl StopToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request the loop to stop once the current frame completes.
    pub fn stop(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Behavior a concrete game plugs into the loop.
pub trait Game {
    /// React to one input event. Default: ignore input.
    fn handle_input(&mut self, _event: &InputEvent) {}

    /// Advance game state by `dt_ms` milliseconds. Motion must scale by
    /// `dt_ms`, not by frame count. Default: no-op.
    fn update(&mut self, _dt_ms: f32, _stop: &StopToken) {}

    /// Draw the current state onto the surface. Rendering is observational;
    /// taking `&self` makes that a compile-time guarantee. Default: no-op.
    fn render(&self, _surface: &mut Surface) {}
}

/// The loop driver.
#[derive(Debug)]
pub struct Engine<B: Backend> {
    backend: B,
    surface: Surface,
    last_ms: f64,
    stop: StopToken,
}

impl<B: Backend> Engine<B> {
    /// Take the named surface out of the registry and bind it to a backend.
    ///
    /// An unknown surface id is fatal; there is no retry. The backend clock
    /// is sampled here as the baseline for the first frame's delta.
    pub fn acquire(registry: &mut SurfaceRegistry, surface_id: &str, backend: B) -> Result<Self> {
        let surface = registry
            .take(surface_id)
            .ok_or_else(|| anyhow!("surface not found: {surface_id}"))?;
        let last_ms = backend.now_ms();
        Ok(Self {
            backend,
            surface,
            last_ms,
            stop: StopToken::new(),
        })
    }

    /// Request a stop. An in-flight frame still completes; a stop requested
    /// before `start` keeps any frame from being scheduled at all.
    pub fn stop(&self) {
        self.stop.stop();
    }

    /// Token handed to games (and outside callers) for cooperative stops.
    /// Clones share the flag, so a clone can cancel a loop already running.
    pub fn stop_token(&self) -> StopToken {
        self.stop.clone()
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Run the frame loop until the stop token fires.
    ///
    /// Each iteration: wait for the next frame, route its events (quit
    /// events cancel the token, everything else reaches `handle_input`),
    /// then `update` with the elapsed time, `render`, present. The frame
    /// during which stop was requested finishes in full; no further frame
    /// is scheduled after it.
    ///
    /// The token is checked at the top of each iteration and never cleared:
    /// once it has fired, `start` returns without scheduling a frame,
    /// including on a later call.
    pub fn start(&mut self, game: &mut dyn Game) -> Result<()> {
        while !self.stop.is_stopped() {
            let frame = self.backend.wait_frame()?;

            for event in &frame.events {
                match event {
                    InputEvent::Quit => self.stop.stop(),
                    other => game.handle_input(other),
                }
            }

            let dt_ms = (frame.timestamp_ms - self.last_ms) as f32;
            self.last_ms = frame.timestamp_ms;

            game.update(dt_ms, &self.stop);
            game.render(&mut self.surface);
            self.backend.present(&mut self.surface)?;
        }
        Ok(())
    }
}
