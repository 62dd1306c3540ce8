//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`]. 2048 has no
//! held-key mechanics, so every press maps to at most one action and terminal
//! auto-repeat is left to the caller to ignore.

pub mod map;

pub use tui_2048_types as types;

pub use map::{handle_key_event, should_quit};
