//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Board Dimensions
//!
//! The canonical 2048 board:
//!
//! - **Size**: 4x4 cells, indexed `(row, col)` with `(0, 0)` at the top-left
//! - **Win tile**: 2048
//!
//! # Spawn Distribution
//!
//! New tiles are drawn uniformly from [`SPAWN_VALUES`]:
//!
//! | Value | Probability |
//! |-------|-------------|
//! | 2 | 75% |
//! | 4 | 25% |
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Direction, GameAction};
//!
//! // Parse from string (case-insensitive)
//! assert_eq!(Direction::from_str("left"), Some(Direction::Left));
//! assert_eq!(GameAction::from_str("undo"), Some(GameAction::Undo));
//!
//! // Each direction is reduced to "merge up" after a number of clockwise turns
//! assert_eq!(Direction::Up.rotations(), 0);
//! assert_eq!(Direction::Right.rotations(), 3);
//! ```

/// Canonical board size (cells per row and per column)
pub const DEFAULT_SIZE: usize = 4;

/// Canonical win target
pub const DEFAULT_WIN_TILE: u32 = 2048;

/// Weighted draw for newly spawned tiles (three 2s, one 4)
pub const SPAWN_VALUES: [u32; 4] = [2, 2, 2, 4];

/// Number of tiles placed on a fresh board
pub const STARTING_TILES: usize = 2;

/// Largest supported board size
pub const MAX_SIZE: usize = 16;

/// Largest tile a merge may produce; doubling it still fits in a `u32`
pub const MAX_TILE: u32 = 1 << 30;

/// A cell value: 0 (empty) or a power of two from 2 up to [`MAX_TILE`]
pub fn is_tile_value(value: u32) -> bool {
    value == 0 || (value >= 2 && value <= MAX_TILE && value.is_power_of_two())
}

/// A win target: a power of two from 4 up to [`MAX_TILE`]
pub fn is_win_tile(value: u32) -> bool {
    value >= 4 && value <= MAX_TILE && value.is_power_of_two()
}

/// Swipe direction
///
/// Every direction is implemented as "merge toward the top edge" after
/// rotating the grid clockwise [`Direction::rotations`] times, then rotating
/// back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions in a fixed order
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Clockwise quarter turns applied before merging up
    ///
    /// - Up: 0
    /// - Left: 1
    /// - Down: 2
    /// - Right: 3
    pub fn rotations(self) -> usize {
        match self {
            Direction::Up => 0,
            Direction::Left => 1,
            Direction::Down => 2,
            Direction::Right => 3,
        }
    }

    /// Clockwise quarter turns applied after merging up to restore orientation
    pub fn restore_rotations(self) -> usize {
        (4 - self.rotations()) % 4
    }

    /// Parse direction from string
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("UP"), Some(Direction::Up));
    /// assert_eq!(Direction::from_str("r"), Some(Direction::Right));
    /// assert_eq!(Direction::from_str("sideways"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" | "u" => Some(Direction::Up),
            "down" | "d" => Some(Direction::Down),
            "left" | "l" => Some(Direction::Left),
            "right" | "r" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Game actions that can be applied to a session
///
/// Produced by the input layer, consumed by the core `Game`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Slide and merge every tile toward one edge
    Slide(Direction),
    /// Restore the board from before the last slide
    Undo,
    /// Clear the board and start over with two fresh tiles
    Restart,
}

impl GameAction {
    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::{Direction, GameAction};
    ///
    /// assert_eq!(GameAction::from_str("slideLeft"), Some(GameAction::Slide(Direction::Left)));
    /// assert_eq!(GameAction::from_str("restart"), Some(GameAction::Restart));
    /// assert_eq!(GameAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "slideup" => Some(GameAction::Slide(Direction::Up)),
            "slidedown" => Some(GameAction::Slide(Direction::Down)),
            "slideleft" => Some(GameAction::Slide(Direction::Left)),
            "slideright" => Some(GameAction::Slide(Direction::Right)),
            "undo" => Some(GameAction::Undo),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Slide(Direction::Up) => "slideUp",
            GameAction::Slide(Direction::Down) => "slideDown",
            GameAction::Slide(Direction::Left) => "slideLeft",
            GameAction::Slide(Direction::Right) => "slideRight",
            GameAction::Undo => "undo",
            GameAction::Restart => "restart",
        }
    }
}

/// A cell coordinate on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

/// Session status derived from the board flags
///
/// `Won` takes precedence over `GameOver`; both are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Active,
    Won,
    GameOver,
}

impl Status {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Status::Active)
    }
}
