//! Error type for board construction, spawning and persistence.
//!
//! Merge operations are total over any valid grid and never return errors.

use std::io;

#[derive(thiserror::Error, Debug)]
pub enum BoardError {
    /// A tile was requested on a board with no empty cell.
    #[error("no empty cell to spawn a tile into")]
    NoEmptyCell,
    /// Persisted state exists but could not be decoded into a valid board.
    #[error("corrupt board state: {0}")]
    CorruptState(String),
    /// No persisted state exists.
    #[error("no saved board found")]
    NotFound,
    /// Grid rows are ragged, or the grid is not square, or it has no cells.
    #[error("invalid grid dimensions: {rows} rows, row lengths {cols:?}")]
    InvalidDimensions { rows: usize, cols: Vec<usize> },
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

impl From<serde_json::Error> for BoardError {
    fn from(e: serde_json::Error) -> Self {
        BoardError::CorruptState(e.to_string())
    }
}
