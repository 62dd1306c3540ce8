//! TUI 2048 (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_2048::{core,input,term,types}` and
//! hosts the application-edge pieces: environment configuration and the JSON
//! file store.

pub mod config;
pub mod file_store;

pub use tui_2048_core as core;
pub use tui_2048_input as input;
pub use tui_2048_term as term;
pub use tui_2048_types as types;

pub use config::AppConfig;
pub use file_store::JsonFileStore;
