//! Retained element trees for screen-oriented games.
//!
//! Real-time games draw immediate-mode into a surface every frame; the
//! turn-based ones build a small tree of tagged elements instead and repaint
//! it after each move. This crate provides the element builder, the painter
//! that flattens a tree onto a [`tui_arcade_term::Surface`], and the hit
//! test that maps a click back to the element it landed on.

pub mod element;
pub mod paint;

pub use element::{create_element, Element, Node, Style};
pub use paint::{hit_test, paint};
