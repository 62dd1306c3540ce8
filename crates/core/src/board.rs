//! Board state module - one game session's grid plus bookkeeping
//!
//! Layers session state on top of [`Grid`]: a single-level undo slot, the cached
//! `win` / `game_over` flags, tile spawning and terminal-state detection.
//!
//! The flags are only authoritative immediately after [`BoardState::check_win`] or
//! [`BoardState::check_game_over`]; merges and spawns do not update them.

use log::debug;
use rand::Rng;

use crate::error::BoardError;
use crate::grid::Grid;
use crate::rng::{pick_position, pick_spawn_value};
use crate::types::{Direction, Position, DEFAULT_WIN_TILE};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardState {
    grid: Grid,
    /// Grid as it was before the last merge attempt
    previous: Option<Grid>,
    game_over: bool,
    win: bool,
    win_tile: u32,
}

impl BoardState {
    /// Create an all-empty board
    pub fn new(size: usize, win_tile: u32) -> Result<Self, BoardError> {
        Ok(Self::from_grid(Grid::new(size)?, win_tile, false))
    }

    /// Canonical 4x4 board with a 2048 target
    pub fn with_defaults() -> Self {
        Self::from_grid(Grid::default(), DEFAULT_WIN_TILE, false)
    }

    /// Wrap an existing grid; `win` starts false until the next check
    pub fn from_grid(grid: Grid, win_tile: u32, game_over: bool) -> Self {
        Self {
            grid,
            previous: None,
            game_over,
            win: false,
            win_tile,
        }
    }

    pub fn size(&self) -> usize {
        self.grid.size()
    }

    pub fn win_tile(&self) -> u32 {
        self.win_tile
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn previous(&self) -> Option<&Grid> {
        self.previous.as_ref()
    }

    pub fn tile_at(&self, row: usize, col: usize) -> Option<u32> {
        self.grid.get(row, col)
    }

    /// Cached win flag from the last [`BoardState::check_win`]
    pub fn win(&self) -> bool {
        self.win
    }

    /// Cached game-over flag from the last [`BoardState::check_game_over`]
    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Get a mutable reference to the grid (for testing)
    #[cfg(test)]
    pub(crate) fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// Zero every cell and reset `game_over`
    ///
    /// `win` is left as it was; it is recomputed by the next `check_win`.
    pub fn clear(&mut self) {
        self.game_over = false;
        self.grid.clear();
    }

    /// Every empty cell in row-major order
    pub fn empty_positions(&self) -> Vec<Position> {
        self.grid.empty_positions()
    }

    /// Place a 2 or 4 on a random empty cell
    ///
    /// Fails with `NoEmptyCell` and leaves the grid untouched when the board is full.
    pub fn spawn_tile<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(Position, u32), BoardError> {
        let empty = self.grid.empty_positions();
        let pos = pick_position(rng, &empty).ok_or(BoardError::NoEmptyCell)?;
        let value = pick_spawn_value(rng);
        self.grid.set(pos.row, pos.col, value);
        debug!("spawned {} at ({}, {})", value, pos.row, pos.col);
        Ok((pos, value))
    }

    /// Scan for the win tile and cache the result
    pub fn check_win(&mut self) -> bool {
        self.win = self.grid.contains(self.win_tile);
        self.win
    }

    /// Decide whether play is over and cache the result
    ///
    /// A win ends the game. Otherwise the game continues while any cell is empty
    /// or while merging up changes the grid in at least one of the four rotations.
    /// The live grid is never mutated.
    pub fn check_game_over(&mut self) -> bool {
        if self.win {
            self.game_over = true;
            return true;
        }
        if !self.grid.is_full() {
            self.game_over = false;
            return false;
        }

        let mut original = self.grid.clone();
        let mut probe = self.grid.clone();
        for _ in 0..4 {
            probe.merge_up();
            if probe != original {
                self.game_over = false;
                return false;
            }
            probe = probe.rotate_clockwise();
            original = original.rotate_clockwise();
        }

        self.game_over = true;
        true
    }

    /// Copy the live grid into the undo slot
    pub fn snapshot_for_undo(&mut self) {
        self.previous = Some(self.grid.clone());
    }

    /// Restore the grid captured by the last snapshot
    ///
    /// Returns false when nothing has been captured yet. Repeating an undo
    /// without an intervening merge restores the same grid again.
    pub fn undo(&mut self) -> bool {
        match &self.previous {
            Some(prev) => {
                self.grid = prev.clone();
                true
            }
            None => false,
        }
    }

    /// Drop the undo slot (used when a new game starts)
    pub fn discard_undo(&mut self) {
        self.previous = None;
    }

    /// Snapshot for undo, then slide and merge the live grid
    ///
    /// Returns whether the grid changed; callers spawn a tile only on change.
    pub fn merge_direction(&mut self, direction: Direction) -> bool {
        self.snapshot_for_undo();
        let changed = self.grid.merge_direction(direction);
        debug!("merge {} changed={}", direction.as_str(), changed);
        changed
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DEFAULT_SIZE;
    use rand::{rngs::StdRng, SeedableRng};

    fn board(rows: [[u32; 4]; 4]) -> BoardState {
        let grid = Grid::from_rows(rows.iter().map(|r| r.to_vec()).collect()).unwrap();
        BoardState::from_grid(grid, DEFAULT_WIN_TILE, false)
    }

    #[test]
    fn test_new_board_is_empty() {
        let b = BoardState::new(4, 2048).unwrap();
        assert_eq!(b.size(), 4);
        assert_eq!(b.win_tile(), 2048);
        assert_eq!(b.empty_positions().len(), 16);
        assert!(!b.win());
        assert!(!b.game_over());
        assert!(b.previous().is_none());
    }

    #[test]
    fn test_new_rejects_zero_size() {
        assert!(matches!(
            BoardState::new(0, 2048),
            Err(BoardError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_default_board() {
        let b = BoardState::default();
        assert_eq!(b.size(), DEFAULT_SIZE);
        assert_eq!(b.win_tile(), DEFAULT_WIN_TILE);
    }

    #[test]
    fn test_clear_keeps_win_flag() {
        let mut b = board([[2048, 0, 0, 0], [0; 4], [0; 4], [0; 4]]);
        assert!(b.check_win());
        assert!(b.check_game_over());

        b.clear();
        assert!(!b.game_over());
        assert_eq!(b.empty_positions().len(), 16);
        // Stale until the next check_win.
        assert!(b.win());
        assert!(!b.check_win());
    }

    #[test]
    fn test_spawn_on_single_empty_cell() {
        for seed in 0..32 {
            let mut b = board([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 0, 4], [4, 2, 4, 2]]);
            let mut rng = StdRng::seed_from_u64(seed);
            let (pos, value) = b.spawn_tile(&mut rng).unwrap();
            assert_eq!(pos, Position::new(2, 2));
            assert!(value == 2 || value == 4);
            assert_eq!(b.tile_at(2, 2), Some(value));
        }
    }

    #[test]
    fn test_spawn_on_full_board_is_error() {
        let mut b = board([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
        let before = b.grid().clone();
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            b.spawn_tile(&mut rng),
            Err(BoardError::NoEmptyCell)
        ));
        assert_eq!(b.grid(), &before);
    }

    #[test]
    fn test_spawn_fills_board_exactly() {
        let mut b = BoardState::new(4, 2048).unwrap();
        let mut rng = StdRng::seed_from_u64(5);
        for i in 0..16 {
            assert!(b.spawn_tile(&mut rng).is_ok(), "spawn {} failed", i);
        }
        assert!(b.empty_positions().is_empty());
        assert!(b.spawn_tile(&mut rng).is_err());
    }

    #[test]
    fn test_check_win_anywhere() {
        for row in 0..4 {
            for col in 0..4 {
                let mut b = BoardState::new(4, 2048).unwrap();
                b.grid_mut().set(row, col, 2048);
                assert!(b.check_win(), "win tile at ({}, {}) not detected", row, col);
            }
        }
        let mut b = board([[1024, 1024, 0, 0], [0; 4], [0; 4], [0; 4]]);
        assert!(!b.check_win());
        assert!(!b.win());
    }

    #[test]
    fn test_check_win_custom_target() {
        let grid = Grid::from_rows(vec![vec![2, 0], vec![0, 16]]).unwrap();
        let mut b = BoardState::from_grid(grid, 16, false);
        assert!(b.check_win());
    }

    #[test]
    fn test_check_game_over_with_empty_cell() {
        let mut b = board([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 0]]);
        assert!(!b.check_game_over());
        assert!(!b.game_over());
    }

    #[test]
    fn test_check_game_over_full_with_vertical_pair() {
        let mut b = board([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [2, 8, 16, 32]]);
        assert!(!b.check_game_over());
    }

    #[test]
    fn test_check_game_over_full_with_horizontal_pair() {
        let mut b = board([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 8, 8]]);
        assert!(!b.check_game_over());
    }

    #[test]
    fn test_check_game_over_stuck() {
        let mut b = board([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
        let before = b.grid().clone();
        assert!(b.check_game_over());
        assert!(b.game_over());
        assert_eq!(b.grid(), &before);
    }

    #[test]
    fn test_check_game_over_after_win() {
        let mut b = board([[2048, 0, 0, 0], [0; 4], [0; 4], [0; 4]]);
        assert!(!b.check_game_over());
        b.check_win();
        assert!(b.check_game_over());
    }

    #[test]
    fn test_merge_direction_snapshots_first() {
        let mut b = board([[2, 0, 0, 0], [2, 0, 0, 0], [0; 4], [0; 4]]);
        let before = b.grid().clone();
        assert!(b.merge_direction(Direction::Up));
        assert_eq!(b.previous(), Some(&before));
        assert_eq!(b.tile_at(0, 0), Some(4));
    }

    #[test]
    fn test_undo_restores_and_is_single_level() {
        let mut b = board([[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]);
        let start = b.grid().clone();

        assert!(b.merge_direction(Direction::Left));
        let after_first = b.grid().clone();
        b.grid_mut().set(3, 3, 2);
        assert!(b.merge_direction(Direction::Right));

        assert!(b.undo());
        assert_ne!(b.grid(), &start);
        let mut expected = after_first.clone();
        expected.set(3, 3, 2);
        assert_eq!(b.grid(), &expected);

        // Second undo repeats the same restore.
        assert!(b.undo());
        assert_eq!(b.grid(), &expected);
    }

    #[test]
    fn test_undo_without_snapshot() {
        let mut b = board([[2, 0, 0, 0], [0; 4], [0; 4], [0; 4]]);
        let before = b.grid().clone();
        assert!(!b.undo());
        assert_eq!(b.grid(), &before);
    }
}
