//! Storage collaborator for persisted boards.
//!
//! The core never touches a filesystem; the front end injects a [`BoardStore`].
//! [`MemoryStore`] keeps the serialized bytes in memory and backs the tests.

use crate::board::BoardState;
use crate::error::BoardError;
use crate::snapshot::{deserialize, serialize};

pub trait BoardStore {
    /// Load the saved board
    ///
    /// `NotFound` when nothing was saved, `CorruptState` when the bytes don't decode.
    fn load(&self) -> Result<BoardState, BoardError>;

    /// Replace the saved board
    fn save(&mut self, board: &BoardState) -> Result<(), BoardError>;
}

/// In-memory store holding the last saved bytes
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    bytes: Option<Vec<u8>>,
    saves: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed the store with raw bytes (e.g. to simulate a corrupt save)
    pub fn with_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: Some(bytes.into()),
            saves: 0,
        }
    }

    pub fn bytes(&self) -> Option<&[u8]> {
        self.bytes.as_deref()
    }

    /// Number of successful saves
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl BoardStore for MemoryStore {
    fn load(&self) -> Result<BoardState, BoardError> {
        match &self.bytes {
            Some(bytes) => deserialize(bytes),
            None => Err(BoardError::NotFound),
        }
    }

    fn save(&mut self, board: &BoardState) -> Result<(), BoardError> {
        self.bytes = Some(serialize(board)?);
        self.saves += 1;
        Ok(())
    }
}

/// Load a saved board or fall back to a fresh one
///
/// Returns the board and whether it was restored. Errors are logged, never fatal.
pub fn load_or_fresh<S: BoardStore + ?Sized>(
    store: &S,
    fresh: impl FnOnce() -> BoardState,
) -> (BoardState, bool) {
    match store.load() {
        Ok(mut board) => {
            board.check_win();
            log::info!("restored saved board ({}x{})", board.size(), board.size());
            (board, true)
        }
        Err(BoardError::NotFound) => {
            log::info!("no saved board, starting fresh");
            (fresh(), false)
        }
        Err(e) => {
            log::warn!("discarding saved board: {}", e);
            (fresh(), false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;

    #[test]
    fn test_empty_store_not_found() {
        let store = MemoryStore::new();
        assert!(matches!(store.load(), Err(BoardError::NotFound)));
    }

    #[test]
    fn test_save_then_load() {
        let mut store = MemoryStore::new();
        let grid = Grid::from_rows(vec![vec![2, 4], vec![0, 8]]).unwrap();
        let board = BoardState::from_grid(grid, 8, false);
        store.save(&board).unwrap();
        assert_eq!(store.saves(), 1);

        let loaded = store.load().unwrap();
        assert_eq!(loaded.grid(), board.grid());
        assert_eq!(loaded.win_tile(), 8);
    }

    #[test]
    fn test_load_or_fresh_recomputes_win() {
        let mut store = MemoryStore::new();
        let grid = Grid::from_rows(vec![vec![2048, 0], vec![0, 0]]).unwrap();
        store.save(&BoardState::from_grid(grid, 2048, true)).unwrap();

        let (board, restored) = load_or_fresh(&store, BoardState::default);
        assert!(restored);
        assert!(board.win());
        assert!(board.game_over());
    }

    #[test]
    fn test_load_or_fresh_corrupt_falls_back() {
        let store = MemoryStore::with_bytes("{ nope");
        let (board, restored) = load_or_fresh(&store, BoardState::default);
        assert!(!restored);
        assert_eq!(board, BoardState::default());
    }

    #[test]
    fn test_load_or_fresh_missing_falls_back() {
        let store = MemoryStore::new();
        let (board, restored) = load_or_fresh(&store, BoardState::default);
        assert!(!restored);
        assert_eq!(board.empty_positions().len(), 16);
    }
}
