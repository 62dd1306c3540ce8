//! Snapshots - plain-data views of a board
//!
//! [`BoardSnapshot`] is the persisted form: it round-trips `size`, `win_tile`,
//! `game_over` and the grid rows as JSON. `win` is not stored; callers recompute
//! it with `check_win` after loading.
//!
//! [`GameSnapshot`] is the render-side view handed to the terminal layer.

use serde::{Deserialize, Serialize};

use crate::board::BoardState;
use crate::error::BoardError;
use crate::grid::Grid;
use crate::types::{is_tile_value, is_win_tile, Status, MAX_SIZE};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub size: usize,
    pub win_tile: u32,
    pub game_over: bool,
    pub board: Vec<Vec<u32>>,
}

impl BoardSnapshot {
    /// Validate and rebuild the board
    ///
    /// A ragged grid, a `size` that disagrees with the rows or exceeds [`MAX_SIZE`],
    /// a cell that is not a tile value, or an unusable `win_tile` is `CorruptState`.
    pub fn into_board(self) -> Result<BoardState, BoardError> {
        if self.size > MAX_SIZE {
            return Err(BoardError::CorruptState(format!(
                "size {} above {}",
                self.size, MAX_SIZE
            )));
        }
        if !is_win_tile(self.win_tile) {
            return Err(BoardError::CorruptState(format!(
                "bad win tile {}",
                self.win_tile
            )));
        }
        if let Some(bad) = self.board.iter().flatten().find(|&&v| !is_tile_value(v)) {
            return Err(BoardError::CorruptState(format!("bad tile {}", bad)));
        }
        if self.board.len() != self.size {
            return Err(BoardError::CorruptState(format!(
                "size {} but {} rows",
                self.size,
                self.board.len()
            )));
        }
        let grid = Grid::from_rows(self.board)
            .map_err(|e| BoardError::CorruptState(e.to_string()))?;
        Ok(BoardState::from_grid(grid, self.win_tile, self.game_over))
    }
}

impl From<&BoardState> for BoardSnapshot {
    fn from(board: &BoardState) -> Self {
        Self {
            size: board.size(),
            win_tile: board.win_tile(),
            game_over: board.game_over(),
            board: board.grid().to_rows(),
        }
    }
}

impl BoardState {
    pub fn to_snapshot(&self) -> BoardSnapshot {
        BoardSnapshot::from(self)
    }
}

/// Encode a board as JSON bytes
pub fn serialize(board: &BoardState) -> Result<Vec<u8>, BoardError> {
    Ok(serde_json::to_vec(&board.to_snapshot())?)
}

/// Decode JSON bytes into a board
///
/// The returned board has `win == false`; call `check_win` to refresh it.
pub fn deserialize(bytes: &[u8]) -> Result<BoardState, BoardError> {
    let snap: BoardSnapshot = serde_json::from_slice(bytes)?;
    snap.into_board()
}

/// Everything the renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub size: usize,
    pub board: Vec<Vec<u32>>,
    pub win_tile: u32,
    pub status: Status,
    pub can_undo: bool,
    pub max_tile: u32,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let board = BoardState::default();
        Self {
            size: board.size(),
            board: board.grid().to_rows(),
            win_tile: board.win_tile(),
            status: Status::Active,
            can_undo: false,
            max_tile: 0,
        }
    }
}
