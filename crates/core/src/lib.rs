//! Core game logic module - pure, testable 2048 board engine
//!
//! This module contains all the game rules, state management, and persistence
//! encoding. It has **zero dependencies** on terminal UI or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Comprehensive unit tests for all game rules
//! - **Portable**: Can run behind any front end (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`grid`]: square tile grid with rotation, shift and merge-up
//! - [`board`]: session state: undo slot, win/game-over flags, spawning
//! - [`game`]: per-session state machine driven by [`types::GameAction`]
//! - [`rng`]: weighted tile values and uniform cell selection
//! - [`snapshot`]: persisted JSON form and the render-side view
//! - [`store`]: injected storage collaborator and an in-memory implementation
//!
//! # Game Rules
//!
//! - **One merge primitive**: every slide is "merge up" on a rotated copy of the grid
//! - **Single-pass merge**: `[2, 2, 2, 0]` slides up to `[4, 2, 0, 0]`
//! - **Spawning**: after every slide that changes the grid, a 2 (75%) or 4 (25%)
//!   lands on a random empty cell
//! - **Win**: the win tile (2048) appears anywhere
//! - **Game over**: the grid is full and no slide in any direction changes it
//! - **Undo**: one level, the grid from before the last slide
//!
//! # Example
//!
//! ```
//! use tui_2048_core::{BoardState, Grid};
//! use tui_2048_core::types::Direction;
//!
//! let grid = Grid::from_rows(vec![
//!     vec![2, 0, 0, 0],
//!     vec![2, 0, 0, 0],
//!     vec![2, 0, 0, 0],
//!     vec![0, 0, 0, 0],
//! ]).unwrap();
//! let mut board = BoardState::from_grid(grid, 2048, false);
//!
//! assert!(board.merge_direction(Direction::Up));
//! assert_eq!(board.tile_at(0, 0), Some(4));
//! assert_eq!(board.tile_at(1, 0), Some(2));
//!
//! assert!(board.undo());
//! assert_eq!(board.tile_at(2, 0), Some(2));
//! ```

pub mod board;
pub mod error;
pub mod game;
pub mod grid;
pub mod rng;
pub mod snapshot;
pub mod store;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use board::BoardState;
pub use error::BoardError;
pub use game::{ActionOutcome, Game};
pub use grid::Grid;
pub use snapshot::{deserialize, serialize, BoardSnapshot, GameSnapshot};
pub use store::{load_or_fresh, BoardStore, MemoryStore};
