//! Tic-tac-toe: two players share the keyboard and mouse.
//!
//! Unlike the real-time games this one is turn-based, so it skips the frame
//! loop entirely: it repaints its element tree after every event and blocks
//! on the next one. Clicks resolve through the tree's hit test to the cell
//! element that was hit, which carries its board position as `row`/`col`
//! attributes.

use std::fmt;

use anyhow::{anyhow, Result};
use crossterm::event::{self, Event};

use tui_arcade_config::Config;
use tui_arcade_dom::{hit_test, paint, Element, Style};
use tui_arcade_input::map_event;
use tui_arcade_term::{Cell, Surface, SurfaceRegistry, TerminalRenderer};
use tui_arcade_types::{CellStyle, InputEvent, Rgb};

/// Complete default config, embedded so the game runs with no files on disk.
pub const DEFAULT_CONFIG: &str = include_str!("tictactoe.game");

pub const SIZE: usize = 3;

pub fn default_config() -> Config {
    Config::parse(DEFAULT_CONFIG)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn other(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

pub struct TicTacToe {
    pub board: [[Option<Mark>; SIZE]; SIZE],
    pub current: Mark,
    pub game_over: bool,
    /// Modal outcome notice; while set, moves are blocked until a key
    /// acknowledges it.
    pub notice: Option<String>,
    width: u16,
    height: u16,
    cell_width: u16,
    cell_height: u16,
    x_color: Rgb,
    o_color: Rgb,
    cell_color: Rgb,
}

impl TicTacToe {
    pub fn from_config(config: &Config) -> Self {
        Self {
            board: [[None; SIZE]; SIZE],
            current: Mark::X,
            game_over: false,
            notice: None,
            width: config.get_u16("width").unwrap_or(27),
            height: config.get_u16("height").unwrap_or(15),
            cell_width: config.get_u16("cell_width").unwrap_or(7),
            cell_height: config.get_u16("cell_height").unwrap_or(3),
            x_color: config.get_color("x_color").unwrap_or(Rgb::new(0x00, 0x95, 0xDD)),
            o_color: config.get_color("o_color").unwrap_or(Rgb::new(0xDD, 0x95, 0x00)),
            cell_color: config.get_color("cell_color").unwrap_or(Rgb::new(0x16, 0x21, 0x3E)),
        }
    }

    /// Place the current player's mark. Ignored while the game is over, off
    /// the board, or on an occupied cell.
    pub fn click(&mut self, row: usize, col: usize) {
        if self.game_over || row >= SIZE || col >= SIZE {
            return;
        }
        if self.board[row][col].is_some() {
            return;
        }

        self.board[row][col] = Some(self.current);
        if self.check_winner(self.current) {
            self.notice = Some(format!("{} wins!", self.current));
            self.game_over = true;
        } else if self.is_board_full() {
            self.notice = Some("It's a draw!".to_string());
            self.game_over = true;
        } else {
            self.current = self.current.other();
        }
    }

    /// Dismiss the outcome notice; a finished game resets to an empty board.
    pub fn acknowledge_notice(&mut self) {
        if self.notice.take().is_some() && self.game_over {
            self.reset();
        }
    }

    pub fn reset(&mut self) {
        self.board = [[None; SIZE]; SIZE];
        self.current = Mark::X;
        self.game_over = false;
        self.notice = None;
    }

    /// True if `player` owns a full row, column, or diagonal.
    pub fn check_winner(&self, player: Mark) -> bool {
        let want = Some(player);
        for row in 0..SIZE {
            if (0..SIZE).all(|col| self.board[row][col] == want) {
                return true;
            }
        }
        for col in 0..SIZE {
            if (0..SIZE).all(|row| self.board[row][col] == want) {
                return true;
            }
        }
        (0..SIZE).all(|i| self.board[i][i] == want)
            || (0..SIZE).all(|i| self.board[i][SIZE - 1 - i] == want)
    }

    pub fn is_board_full(&self) -> bool {
        self.board
            .iter()
            .all(|row| row.iter().all(|cell| cell.is_some()))
    }

    fn mark_color(&self, mark: Mark) -> Rgb {
        match mark {
            Mark::X => self.x_color,
            Mark::O => self.o_color,
        }
    }

    /// Build the element tree for the current state: the bordered board,
    /// one `cell` per square tagged with `row`/`col`, a status line, and the
    /// modal notice on top when one is active.
    pub fn view(&self) -> Element {
        let mut root = Element::new("panel")
            .attr("w", self.width)
            .attr("h", self.height);

        for row in 0..SIZE {
            for col in 0..SIZE {
                let x = 2 + col as u16 * (self.cell_width + 1);
                let y = 2 + row as u16 * (self.cell_height + 1);
                let mut cell = Element::new("cell")
                    .attr("x", x)
                    .attr("y", y)
                    .attr("w", self.cell_width)
                    .attr("h", self.cell_height)
                    .attr("row", row)
                    .attr("col", col)
                    .style(Style {
                        bg: Some(self.cell_color),
                        ..Style::default()
                    });
                if let Some(mark) = self.board[row][col] {
                    cell = cell
                        .style(Style {
                            fg: Some(self.mark_color(mark)),
                            bold: true,
                            ..Style::default()
                        })
                        .child(mark.to_string());
                }
                root = root.child(cell);
            }
        }

        let status = if self.game_over {
            "press any key".to_string()
        } else {
            format!("{} to move", self.current)
        };
        root = root.child(
            Element::new("label")
                .attr("x", 2)
                .attr("y", self.height.saturating_sub(2))
                .child(status),
        );

        if let Some(notice) = &self.notice {
            root = root.child(notice_panel(notice, self.width, self.height));
        }

        root
    }
}

fn notice_panel(notice: &str, width: u16, height: u16) -> Element {
    let hint = "press any key";
    let notice_len = notice.chars().count() as u16;
    let w = notice_len.max(hint.len() as u16) + 4;
    let h = 5;
    Element::new("panel")
        .attr("x", width.saturating_sub(w) / 2)
        .attr("y", height.saturating_sub(h) / 2)
        .attr("w", w)
        .attr("h", h)
        .style(Style {
            bold: true,
            ..Style::default()
        })
        .child(
            Element::new("label")
                .attr("x", (w - notice_len) / 2)
                .attr("y", 1)
                .child(notice),
        )
        .child(
            Element::new("label")
                .attr("x", (w - hint.len() as u16) / 2)
                .attr("y", 3)
                .child(hint),
        )
}

fn attr_usize(element: &Element, name: &str) -> Option<usize> {
    element.get_attr(name)?.parse().ok()
}

/// Run the blocking event loop against a real terminal.
pub fn run(config: &Config, registry: &mut SurfaceRegistry) -> Result<()> {
    let surface_id = config.get("surface").unwrap_or("board");
    let mut surface = registry
        .take(surface_id)
        .ok_or_else(|| anyhow!("surface not found: {surface_id}"))?;
    let mut game = TicTacToe::from_config(config);

    let mut renderer = TerminalRenderer::new().with_mouse(true);
    renderer.enter()?;
    let result = event_loop(&mut game, &mut renderer, &mut surface);

    // Always try to restore terminal state.
    let _ = renderer.exit();
    result
}

fn event_loop(
    game: &mut TicTacToe,
    renderer: &mut TerminalRenderer,
    surface: &mut Surface,
) -> Result<()> {
    loop {
        let view = game.view();
        surface.clear(Cell {
            ch: ' ',
            style: CellStyle::default(),
        });
        paint(&view, surface);
        renderer.draw_swap(surface)?;

        // Turn-based: block until the next event.
        let raw = event::read()?;
        if let Event::Resize(..) = raw {
            renderer.invalidate();
            continue;
        }
        match map_event(&raw) {
            Some(InputEvent::Quit) => return Ok(()),
            Some(InputEvent::Click { x, y }) => {
                let Some((sx, sy)) = renderer.to_surface(x, y) else {
                    continue;
                };
                if let Some(element) = hit_test(&view, sx, sy) {
                    if let (Some(row), Some(col)) =
                        (attr_usize(element, "row"), attr_usize(element, "col"))
                    {
                        game.click(row, col);
                    }
                }
            }
            Some(InputEvent::KeyDown(_)) => game.acknowledge_notice(),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alternation_starts_with_x() {
        let mut game = TicTacToe::from_config(&default_config());
        assert_eq!(game.current, Mark::X);
        game.click(0, 0);
        assert_eq!(game.board[0][0], Some(Mark::X));
        assert_eq!(game.current, Mark::O);
        game.click(1, 1);
        assert_eq!(game.board[1][1], Some(Mark::O));
        assert_eq!(game.current, Mark::X);
    }

    #[test]
    fn occupied_cell_keeps_turn_and_mark() {
        let mut game = TicTacToe::from_config(&default_config());
        game.click(0, 0);
        game.click(0, 0);
        assert_eq!(game.board[0][0], Some(Mark::X));
        assert_eq!(game.current, Mark::O);
    }

    #[test]
    fn winner_raises_notice_and_blocks_moves() {
        let mut game = TicTacToe::from_config(&default_config());
        game.click(0, 0); // X
        game.click(1, 0); // O
        game.click(0, 1); // X
        game.click(1, 1); // O
        game.click(0, 2); // X wins the top row
        assert!(game.game_over);
        assert_eq!(game.notice.as_deref(), Some("X wins!"));

        game.click(2, 2);
        assert_eq!(game.board[2][2], None);
    }

    #[test]
    fn acknowledging_the_outcome_resets_the_board() {
        let mut game = TicTacToe::from_config(&default_config());
        game.click(0, 0);
        game.click(1, 0);
        game.click(0, 1);
        game.click(1, 1);
        game.click(0, 2);
        assert!(game.game_over);

        game.acknowledge_notice();
        assert!(!game.game_over);
        assert!(game.notice.is_none());
        assert!(game.board.iter().flatten().all(Option::is_none));
        assert_eq!(game.current, Mark::X);
    }
}
