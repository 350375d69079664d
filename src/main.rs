//! Arcade launcher (default binary).
//!
//! Picks a game by name, loads its embedded config plus an optional user
//! overlay file, registers the surface the config names, and hands control
//! to the game.

use std::env;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};

use tui_arcade::config::Config;
use tui_arcade::games;
use tui_arcade::term::{Surface, SurfaceRegistry};

const USAGE: &str = "usage: tui-arcade <breakout|tictactoe> [--config <path>]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GameKind {
    Breakout,
    TicTacToe,
}

impl GameKind {
    fn parse(name: &str) -> Option<Self> {
        match name {
            "breakout" => Some(Self::Breakout),
            "tictactoe" | "tic-tac-toe" => Some(Self::TicTacToe),
            _ => None,
        }
    }

    fn default_config(self) -> Config {
        match self {
            Self::Breakout => games::breakout::default_config(),
            Self::TicTacToe => games::tictactoe::default_config(),
        }
    }

    fn run(self, config: &Config, registry: &mut SurfaceRegistry) -> Result<()> {
        match self {
            Self::Breakout => games::breakout::run(config, registry),
            Self::TicTacToe => games::tictactoe::run(config, registry),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Launch {
    game: GameKind,
    config_path: Option<PathBuf>,
}

fn parse_args(args: &[String]) -> Result<Launch> {
    let mut game: Option<GameKind> = None;
    let mut config_path: Option<PathBuf> = None;
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --config"))?;
                config_path = Some(PathBuf::from(v));
            }
            other if !other.starts_with('-') && game.is_none() => {
                game = Some(
                    GameKind::parse(other).ok_or_else(|| anyhow!("unknown game: {other}\n{USAGE}"))?,
                );
            }
            other => {
                return Err(anyhow!("unknown argument: {other}\n{USAGE}"));
            }
        }
        i += 1;
    }
    let game = game.ok_or_else(|| anyhow!("{USAGE}"))?;
    Ok(Launch { game, config_path })
}

/// Create the surface the config names, sized by the config.
fn register_surface(config: &Config, registry: &mut SurfaceRegistry) -> Result<()> {
    let id = config.get("surface").context("config: missing surface id")?;
    let width = config
        .get_u16("width")
        .context("config: width must be a positive number")?;
    let height = config
        .get_u16("height")
        .context("config: height must be a positive number")?;
    registry.insert(id, Surface::new(width, height));
    Ok(())
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        println!("{USAGE}");
        return Ok(());
    }

    let launch = parse_args(&args)?;

    let mut config = launch.game.default_config();
    if let Some(path) = &launch.config_path {
        config.merge(Config::load(path)?);
    }

    let mut registry = SurfaceRegistry::new();
    register_surface(&config, &mut registry)?;

    launch.game.run(&config, &mut registry)
}
