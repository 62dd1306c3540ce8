//! Application configuration read from environment variables.
//!
//! - `TUI_2048_SAVE_PATH`: board file (default: "2048-board.json")
//! - `TUI_2048_SIZE`: grid size for a fresh game, 1 to 16 (default: 4)
//! - `TUI_2048_WIN_TILE`: win target for a fresh game (default: 2048)
//! - `TUI_2048_SEED`: RNG seed (default: random)
//! - `TUI_2048_LOG_PATH`: log file; logging is off when unset
//! - `TUI_2048_NO_SAVE`: set to "1" or "true" to disable persistence

use std::env;
use std::path::PathBuf;

use crate::types::{is_win_tile, DEFAULT_SIZE, DEFAULT_WIN_TILE, MAX_SIZE};

pub const DEFAULT_SAVE_PATH: &str = "2048-board.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub save_path: Option<PathBuf>,
    pub size: usize,
    pub win_tile: u32,
    pub seed: Option<u64>,
    pub log_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            save_path: Some(PathBuf::from(DEFAULT_SAVE_PATH)),
            size: DEFAULT_SIZE,
            win_tile: DEFAULT_WIN_TILE,
            seed: None,
            log_path: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (tests pass a map instead of the process env).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .and_then(|s| if s.is_empty() { None } else { Some(s) })
        };

        let no_save = non_empty("TUI_2048_NO_SAVE")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false);

        let save_path = if no_save {
            None
        } else {
            Some(
                non_empty("TUI_2048_SAVE_PATH")
                    .map(PathBuf::from)
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_SAVE_PATH)),
            )
        };

        let size = non_empty("TUI_2048_SIZE")
            .and_then(|s| s.parse().ok())
            .filter(|&n: &usize| n > 0 && n <= MAX_SIZE)
            .unwrap_or(DEFAULT_SIZE);

        let win_tile = non_empty("TUI_2048_WIN_TILE")
            .and_then(|s| s.parse().ok())
            .filter(|&v: &u32| is_win_tile(v))
            .unwrap_or(DEFAULT_WIN_TILE);

        let seed = non_empty("TUI_2048_SEED").and_then(|s| s.parse().ok());

        let log_path = non_empty("TUI_2048_LOG_PATH").map(PathBuf::from);

        Self {
            save_path,
            size,
            win_tile,
            seed,
            log_path,
        }
    }
}
