//! TUI Arcade (workspace facade crate).
//!
//! This package keeps the `tui_arcade::{config,dom,engine,input,term,types}`
//! public API stable while the implementation lives in dedicated crates under
//! `crates/`. The example games ship here as modules on top of that API.

pub use tui_arcade_config as config;
pub use tui_arcade_dom as dom;
pub use tui_arcade_engine as engine;
pub use tui_arcade_input as input;
pub use tui_arcade_term as term;
pub use tui_arcade_types as types;

pub mod games;
