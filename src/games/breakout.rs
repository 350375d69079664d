//! Breakout: a paddle, a ball, and a wall of bricks.
//!
//! Runs on the frame loop driver. All motion is scaled by the frame delta
//! (cells per second), so ball speed does not depend on the refresh rate.
//! Losing the ball freezes the world behind a game-over notice; any key
//! starts a fresh round.

use anyhow::Result;

use tui_arcade_config::Config;
use tui_arcade_engine::{Engine, Game, StopToken};
use tui_arcade_input::KeyState;
use tui_arcade_term::{Cell, Surface, SurfaceRegistry, TerminalBackend};
use tui_arcade_types::{CellStyle, InputEvent, Rgb};

/// Complete default config, embedded so the game runs with no files on disk.
pub const DEFAULT_CONFIG: &str = include_str!("breakout.game");

pub fn default_config() -> Config {
    Config::parse(DEFAULT_CONFIG)
}

/// Tunables read from config once at startup.
#[derive(Debug, Clone)]
pub struct Settings {
    pub width: f32,
    pub height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub ball_radius: f32,
    /// Horizontal speed scale applied on paddle impact.
    pub ball_speed: f32,
    pub ball_dx: f32,
    pub ball_dy: f32,
    pub brick_rows: usize,
    pub brick_cols: usize,
    pub brick_width: f32,
    pub brick_height: f32,
    pub brick_padding: f32,
    pub brick_offset_top: f32,
    pub brick_offset_left: f32,
    pub foreground: Rgb,
}

impl Settings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            width: config.get_f32("width").unwrap_or(96.0),
            height: config.get_f32("height").unwrap_or(32.0),
            paddle_width: config.get_f32("paddle_width").unwrap_or(14.0),
            paddle_height: config.get_f32("paddle_height").unwrap_or(1.0),
            paddle_speed: config.get_f32("paddle_speed").unwrap_or(60.0),
            ball_radius: config.get_f32("ball_radius").unwrap_or(2.0),
            ball_speed: config.get_f32("ball_speed").unwrap_or(50.0),
            ball_dx: config.get_f32("ball_dx").unwrap_or(30.0),
            ball_dy: config.get_f32("ball_dy").unwrap_or(-15.0),
            brick_rows: config.get_u32("brick_rows").unwrap_or(3) as usize,
            brick_cols: config.get_u32("brick_cols").unwrap_or(5) as usize,
            brick_width: config.get_f32("brick_width").unwrap_or(14.0),
            brick_height: config.get_f32("brick_height").unwrap_or(2.0),
            brick_padding: config.get_f32("brick_padding").unwrap_or(3.0),
            brick_offset_top: config.get_f32("brick_offset_top").unwrap_or(3.0),
            brick_offset_left: config.get_f32("brick_offset_left").unwrap_or(5.0),
            foreground: config.get_color("foreground").unwrap_or(Rgb::new(0x00, 0x95, 0xDD)),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub speed: f32,
}

#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub dx: f32,
    pub dy: f32,
}

#[derive(Debug, Clone, Copy)]
pub struct Brick {
    pub x: f32,
    pub y: f32,
    pub alive: bool,
}

pub struct Breakout {
    pub settings: Settings,
    pub paddle: Paddle,
    pub ball: Ball,
    /// Row-major brick grid; broken bricks stay in place with `alive: false`.
    pub bricks: Vec<Vec<Brick>>,
    pub game_over: bool,
    keys: KeyState,
}

impl Breakout {
    pub fn from_config(config: &Config) -> Self {
        Self::new(Settings::from_config(config))
    }

    pub fn new(settings: Settings) -> Self {
        let paddle = Paddle {
            x: (settings.width - settings.paddle_width) / 2.0,
            y: settings.height - 2.0,
            width: settings.paddle_width,
            height: settings.paddle_height,
            speed: settings.paddle_speed,
        };
        // Served resting on the paddle: ball bottom touches paddle top, so
        // the strict overlap test stays false until the first descent.
        let ball = Ball {
            x: settings.width / 2.0,
            y: paddle.y - settings.ball_radius,
            radius: settings.ball_radius,
            dx: settings.ball_dx,
            dy: settings.ball_dy,
        };
        let bricks = (0..settings.brick_rows)
            .map(|r| {
                (0..settings.brick_cols)
                    .map(|c| Brick {
                        x: c as f32 * (settings.brick_width + settings.brick_padding)
                            + settings.brick_offset_left,
                        y: r as f32 * (settings.brick_height + settings.brick_padding)
                            + settings.brick_offset_top,
                        alive: true,
                    })
                    .collect()
            })
            .collect();

        Self {
            settings,
            paddle,
            ball,
            bricks,
            game_over: false,
            keys: KeyState::new(),
        }
    }

    /// Back to the initial round: paddle centered, ball re-served, every
    /// brick restored.
    pub fn reset(&mut self) {
        *self = Self::new(self.settings.clone());
    }

    pub fn bricks_remaining(&self) -> usize {
        self.bricks
            .iter()
            .flatten()
            .filter(|brick| brick.alive)
            .count()
    }

    fn step(&mut self, dt_ms: f32) {
        let delta = dt_ms / 1000.0;

        // Paddle, clamped to the playfield. Both directions apply when both
        // keys are held.
        if self.keys.right() {
            self.paddle.x += self.paddle.speed * delta;
            if self.paddle.x + self.paddle.width > self.settings.width {
                self.paddle.x = self.settings.width - self.paddle.width;
            }
        }
        if self.keys.left() {
            self.paddle.x -= self.paddle.speed * delta;
            if self.paddle.x < 0.0 {
                self.paddle.x = 0.0;
            }
        }

        self.ball.x += self.ball.dx * delta;
        self.ball.y += self.ball.dy * delta;

        // Side walls reflect; position is not clamped, matching the arcade
        // feel of a bounce on the frame after contact.
        if self.ball.x + self.ball.radius > self.settings.width
            || self.ball.x - self.ball.radius < 0.0
        {
            self.ball.dx = -self.ball.dx;
        }
        if self.ball.y - self.ball.radius < 0.0 {
            self.ball.dy = -self.ball.dy;
        }
        // Bottom wall ends the round.
        if self.ball.y + self.ball.radius > self.settings.height {
            self.game_over = true;
        }

        // Paddle: reflect vertically and steer horizontally by how far from
        // the paddle center the ball struck, normalized to [-1, 1].
        if self.ball.x > self.paddle.x
            && self.ball.x < self.paddle.x + self.paddle.width
            && self.ball.y + self.ball.radius > self.paddle.y
            && self.ball.y - self.ball.radius < self.paddle.y + self.paddle.height
        {
            self.ball.dy = -self.ball.dy;
            let mut hit_point = self.ball.x - (self.paddle.x + self.paddle.width / 2.0);
            hit_point /= self.paddle.width / 2.0;
            self.ball.dx = hit_point * self.settings.ball_speed;
        }

        for row in &mut self.bricks {
            for brick in row {
                if brick.alive
                    && self.ball.x > brick.x
                    && self.ball.x < brick.x + self.settings.brick_width
                    && self.ball.y - self.ball.radius < brick.y + self.settings.brick_height
                    && self.ball.y + self.ball.radius > brick.y
                {
                    self.ball.dy = -self.ball.dy;
                    brick.alive = false;
                }
            }
        }
    }

    fn draw_notice(&self, surface: &mut Surface, style: CellStyle) {
        let line = "GAME OVER";
        let hint = "press any key";
        let x = (surface.width().saturating_sub(line.len() as u16)) / 2;
        let hx = (surface.width().saturating_sub(hint.len() as u16)) / 2;
        let y = surface.height() / 2;
        let bold = CellStyle { bold: true, ..style };
        surface.put_str(x, y.saturating_sub(1), line, bold);
        surface.put_str(hx, y.saturating_add(1), hint, style);
    }
}

impl Game for Breakout {
    fn handle_input(&mut self, event: &InputEvent) {
        if self.game_over {
            // Notice acknowledged: serve a fresh round.
            if matches!(event, InputEvent::KeyDown(_)) {
                self.reset();
            }
            return;
        }
        self.keys.apply(event);
    }

    fn update(&mut self, dt_ms: f32, _stop: &StopToken) {
        if self.game_over {
            return;
        }
        self.keys.tick(dt_ms);
        self.step(dt_ms);
    }

    fn render(&self, surface: &mut Surface) {
        let style = CellStyle {
            fg: self.settings.foreground,
            ..CellStyle::default()
        };
        surface.clear(Cell::default());

        for row in &self.bricks {
            for brick in row {
                if brick.alive {
                    surface.fill_rect(
                        brick.x.round() as u16,
                        brick.y.round() as u16,
                        self.settings.brick_width.round() as u16,
                        self.settings.brick_height.round() as u16,
                        '█',
                        style,
                    );
                }
            }
        }

        surface.fill_rect(
            self.paddle.x.round() as u16,
            self.paddle.y.round() as u16,
            self.paddle.width.round() as u16,
            self.paddle.height.round().max(1.0) as u16,
            '▀',
            style,
        );

        surface.fill_circle(self.ball.x, self.ball.y, self.ball.radius, '●', style);

        if self.game_over {
            self.draw_notice(surface, CellStyle::default());
        }
    }
}

/// Wire the game into a terminal-backed engine and run it to completion.
pub fn run(config: &Config, registry: &mut SurfaceRegistry) -> Result<()> {
    let surface_id = config.get("surface").unwrap_or("game");
    let backend = TerminalBackend::new();
    let mut engine = Engine::acquire(registry, surface_id, backend)?;
    let mut game = Breakout::from_config(config);

    engine.backend_mut().enter()?;
    let result = engine.start(&mut game);

    // Always try to restore terminal state.
    let _ = engine.backend_mut().exit();
    result
}
