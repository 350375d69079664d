//! Cell surface for terminal rendering.

use tui_arcade_types::CellStyle;

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: CellStyle::default(),
        }
    }
}

/// 2D surface of styled character cells.
///
/// Games draw into a surface every frame; the renderer diffs consecutive
/// surfaces and flushes only the changed runs to the terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Surface {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Surface {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::default(); len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize the surface.
    ///
    /// This preserves the underlying allocation when possible.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.cells.resize(len, Cell::default());
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = cell;
        }
    }

    pub fn clear(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        self.set(x, y, Cell { ch, style });
    }

    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: CellStyle) {
        let mut cx = x;
        for ch in s.chars() {
            if cx >= self.width {
                break;
            }
            self.put_char(cx, y, ch, style);
            cx += 1;
        }
    }

    pub fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, ch: char, style: CellStyle) {
        for dy in 0..h {
            for dx in 0..w {
                self.put_char(x.saturating_add(dx), y.saturating_add(dy), ch, style);
            }
        }
    }

    /// Fill an approximate disc centered at (`cx`, `cy`), in cell coordinates.
    ///
    /// Terminal cells are roughly twice as tall as they are wide, so rows are
    /// weighted double against the radius to keep the disc visually round.
    /// Cells outside the surface are clipped.
    pub fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, ch: char, style: CellStyle) {
        if radius <= 0.0 {
            return;
        }
        let min_x = (cx - radius).floor() as i32;
        let max_x = (cx + radius).ceil() as i32;
        let min_y = (cy - radius / 2.0).floor() as i32;
        let max_y = (cy + radius / 2.0).ceil() as i32;
        let r2 = radius * radius;
        for y in min_y..=max_y {
            for x in min_x..=max_x {
                if x < 0 || y < 0 {
                    continue;
                }
                let dx = x as f32 - cx;
                let dy = (y as f32 - cy) * 2.0;
                if dx * dx + dy * dy <= r2 {
                    self.put_char(x as u16, y as u16, ch, style);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_get_roundtrip() {
        let mut surface = Surface::new(4, 3);
        let cell = Cell {
            ch: '#',
            style: CellStyle::default(),
        };
        surface.set(2, 1, cell);
        assert_eq!(surface.get(2, 1), Some(cell));
        assert_eq!(surface.get(4, 0), None);
        assert_eq!(surface.get(0, 3), None);
    }

    #[test]
    fn out_of_bounds_writes_are_ignored() {
        let mut surface = Surface::new(2, 2);
        surface.put_char(5, 5, 'X', CellStyle::default());
        assert!(surface.cells().iter().all(|c| c.ch == ' '));
    }

    #[test]
    fn put_str_clips_at_right_edge() {
        let mut surface = Surface::new(3, 1);
        surface.put_str(1, 0, "abcdef", CellStyle::default());
        let row: String = surface.cells().iter().map(|c| c.ch).collect();
        assert_eq!(row, " ab");
    }

    #[test]
    fn fill_rect_covers_exact_area() {
        let mut surface = Surface::new(5, 4);
        surface.fill_rect(1, 1, 3, 2, '=', CellStyle::default());
        let filled = surface.cells().iter().filter(|c| c.ch == '=').count();
        assert_eq!(filled, 6);
        assert_eq!(surface.get(0, 0).unwrap().ch, ' ');
        assert_eq!(surface.get(1, 1).unwrap().ch, '=');
        assert_eq!(surface.get(3, 2).unwrap().ch, '=');
    }

    #[test]
    fn fill_circle_is_wider_than_tall() {
        let mut surface = Surface::new(11, 11);
        surface.fill_circle(5.0, 5.0, 3.0, 'o', CellStyle::default());

        // Horizontal extent matches the radius.
        assert_eq!(surface.get(2, 5).unwrap().ch, 'o');
        assert_eq!(surface.get(8, 5).unwrap().ch, 'o');
        // Vertical extent is compressed by the cell aspect ratio.
        assert_eq!(surface.get(5, 4).unwrap().ch, 'o');
        assert_eq!(surface.get(5, 6).unwrap().ch, 'o');
        assert_eq!(surface.get(5, 2).unwrap().ch, ' ');
        assert_eq!(surface.get(5, 8).unwrap().ch, ' ');
    }

    #[test]
    fn fill_circle_clips_at_surface_edges() {
        let mut surface = Surface::new(4, 4);
        surface.fill_circle(0.0, 0.0, 3.0, 'o', CellStyle::default());
        assert_eq!(surface.get(0, 0).unwrap().ch, 'o');
        // Negative coordinates must not wrap around.
        assert_eq!(surface.get(3, 3).unwrap().ch, ' ');
    }

    #[test]
    fn resize_preserves_dimensions() {
        let mut surface = Surface::new(2, 2);
        surface.resize(5, 3);
        assert_eq!(surface.width(), 5);
        assert_eq!(surface.height(), 3);
        assert_eq!(surface.cells().len(), 15);
    }
}
