//! TerminalRenderer: flushes a surface to a real terminal.
//!
//! Output is queued into an in-memory buffer and written to stdout in one
//! syscall per frame. The surface is centered when the terminal is larger
//! than the game area, and consecutive frames are diffed so only changed
//! runs are re-encoded.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor, event,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use tui_arcade_types::{CellStyle, Rgb};

use crate::surface::Surface;

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<Surface>,
    buf: Vec<u8>,
    origin: (u16, u16),
    mouse: bool,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(64 * 1024),
            origin: (0, 0),
            mouse: false,
        }
    }

    /// Capture mouse clicks while in the alternate screen.
    pub fn with_mouse(mut self, enabled: bool) -> Self {
        self.mouse = enabled;
        self
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        if self.mouse {
            self.buf.queue(event::EnableMouseCapture)?;
        }
        self.flush_buf()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        if self.mouse {
            self.buf.queue(event::DisableMouseCapture)?;
        }
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to be a full redraw.
    ///
    /// Useful on terminal resize events.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Translate absolute terminal coordinates into surface coordinates.
    ///
    /// Returns `None` until a frame has been drawn, or when the position
    /// falls outside the drawn surface.
    pub fn to_surface(&self, column: u16, row: u16) -> Option<(u16, u16)> {
        let last = self.last.as_ref()?;
        translate(self.origin, (last.width(), last.height()), column, row)
    }

    /// Draw a surface, swapping it into internal state.
    ///
    /// Callers should keep one `Surface` and pass it in every frame. The
    /// renderer will diff against the previous frame and then swap buffers
    /// so the caller can reuse the old one without cloning.
    pub fn draw_swap(&mut self, surface: &mut Surface) -> Result<()> {
        let (term_w, term_h) =
            terminal::size().unwrap_or((surface.width(), surface.height()));
        let origin = (
            term_w.saturating_sub(surface.width()) / 2,
            term_h.saturating_sub(surface.height()) / 2,
        );
        if origin != self.origin {
            // The surface moved on screen; stale cells must be cleared.
            self.origin = origin;
            self.last = None;
        }

        let needs_full = match &self.last {
            Some(prev) => prev.width() != surface.width() || prev.height() != surface.height(),
            None => true,
        };
        if self.last.is_none() {
            self.last = Some(Surface::new(surface.width(), surface.height()));
        }

        // Take previous out to avoid borrow conflicts (no cloning).
        let mut prev = self.last.take().unwrap();

        if needs_full {
            self.buf.clear();
            encode_full_into(surface, self.origin, &mut self.buf)?;
            self.flush_buf()?;
            prev.resize(surface.width(), surface.height());
        } else {
            self.buf.clear();
            encode_diff_into(&prev, surface, self.origin, &mut self.buf)?;
            self.flush_buf()?;
        }

        // Swap current into prev so next frame can diff without cloning.
        std::mem::swap(&mut prev, surface);
        self.last = Some(prev);
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode a full-frame redraw into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_full_into(surface: &Surface, origin: (u16, u16), out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let mut current_style: Option<CellStyle> = None;
    for y in 0..surface.height() {
        out.queue(cursor::MoveTo(origin.0, origin.1.saturating_add(y)))?;
        for x in 0..surface.width() {
            let cell = surface.get(x, y).unwrap_or_default();
            if current_style != Some(cell.style) {
                apply_style_into(out, cell.style)?;
                current_style = Some(cell.style);
            }
            out.queue(Print(cell.ch))?;
        }
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Encode a diff redraw (changed runs) into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_diff_into(
    prev: &Surface,
    next: &Surface,
    origin: (u16, u16),
    out: &mut Vec<u8>,
) -> Result<()> {
    let mut current_style: Option<CellStyle> = None;

    for_each_changed_run(prev, next, |x, y, len| {
        out.queue(cursor::MoveTo(
            origin.0.saturating_add(x),
            origin.1.saturating_add(y),
        ))?;
        for dx in 0..len {
            let cell = next.get(x + dx, y).unwrap_or_default();
            if current_style != Some(cell.style) {
                apply_style_into(out, cell.style)?;
                current_style = Some(cell.style);
            }
            out.queue(Print(cell.ch))?;
        }
        Ok(())
    })?;

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn apply_style_into(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
    out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
    out.queue(SetAttribute(Attribute::Reset))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        out.queue(SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

fn translate(
    origin: (u16, u16),
    size: (u16, u16),
    column: u16,
    row: u16,
) -> Option<(u16, u16)> {
    let x = column.checked_sub(origin.0)?;
    let y = row.checked_sub(origin.1)?;
    if x >= size.0 || y >= size.1 {
        return None;
    }
    Some((x, y))
}

fn for_each_changed_run(
    prev: &Surface,
    next: &Surface,
    mut f: impl FnMut(u16, u16, u16) -> Result<()>,
) -> Result<()> {
    if prev.width() != next.width() || prev.height() != next.height() {
        // Size changed: treat everything as dirty in a single pass (row runs).
        for y in 0..next.height() {
            f(0, y, next.width())?;
        }
        return Ok(());
    }

    let w = next.width();
    let h = next.height();

    for y in 0..h {
        let mut x = 0;
        while x < w {
            let a = prev.get(x, y).unwrap_or_default();
            let b = next.get(x, y).unwrap_or_default();
            if a == b {
                x += 1;
                continue;
            }

            let start = x;
            x += 1;
            while x < w {
                let a2 = prev.get(x, y).unwrap_or_default();
                let b2 = next.get(x, y).unwrap_or_default();
                if a2 == b2 {
                    break;
                }
                x += 1;
            }
            let len = x - start;
            f(start, y, len)?;
        }
    }

    Ok(())
}
