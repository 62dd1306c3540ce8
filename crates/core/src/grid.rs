//! Grid module - the square tile grid and its transformations
//!
//! The grid is a `size x size` square where each cell is 0 (empty) or a power of two.
//! Uses a flat row-major buffer with computed offsets; every access is bounds-checked.
//! Coordinates: (row, col) where row 0 is the top edge and col 0 is the left edge.
//!
//! All four swipe directions are reduced to a single primitive, [`Grid::merge_up`],
//! by rotating the grid clockwise before and after the merge.

use crate::error::BoardError;
use crate::types::{Direction, Position, DEFAULT_SIZE, MAX_SIZE, MAX_TILE};

/// Square grid of tile values
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    size: usize,
    /// Flat array of cells, row-major order (row * size + col)
    cells: Vec<u32>,
}

impl Grid {
    /// Create an all-empty grid
    ///
    /// Fails with `InvalidDimensions` for a zero size or one above [`MAX_SIZE`].
    pub fn new(size: usize) -> Result<Self, BoardError> {
        if size == 0 || size > MAX_SIZE {
            return Err(BoardError::InvalidDimensions {
                rows: size,
                cols: Vec::new(),
            });
        }
        Ok(Self {
            size,
            cells: vec![0; size * size],
        })
    }

    /// Build a grid from rows, rejecting ragged or non-square input
    pub fn from_rows(rows: Vec<Vec<u32>>) -> Result<Self, BoardError> {
        let size = rows.len();
        if size == 0 || size > MAX_SIZE || rows.iter().any(|row| row.len() != size) {
            return Err(BoardError::InvalidDimensions {
                rows: size,
                cols: rows.iter().map(Vec::len).collect(),
            });
        }
        Ok(Self {
            size,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// Copy out as a vector of rows
    pub fn to_rows(&self) -> Vec<Vec<u32>> {
        self.cells
            .chunks(self.size)
            .map(|row| row.to_vec())
            .collect()
    }

    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.size || col >= self.size {
            return None;
        }
        Some(row * self.size + col)
    }

    /// Cells per row (and rows per grid)
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get cell at (row, col)
    /// Returns None if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<u32> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at (row, col)
    /// Returns false if out of bounds
    pub fn set(&mut self, row: usize, col: usize, value: u32) -> bool {
        match self.index(row, col) {
            Some(idx) => {
                self.cells[idx] = value;
                true
            }
            None => false,
        }
    }

    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    /// Zero every cell in place
    pub fn clear(&mut self) {
        self.cells.fill(0);
    }

    /// Every empty cell in row-major order
    pub fn empty_positions(&self) -> Vec<Position> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, v)| **v == 0)
            .map(|(i, _)| Position::new(i / self.size, i % self.size))
            .collect()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&v| v != 0)
    }

    pub fn contains(&self, value: u32) -> bool {
        self.cells.contains(&value)
    }

    pub fn sum(&self) -> u64 {
        self.cells.iter().map(|&v| v as u64).sum()
    }

    pub fn max_tile(&self) -> u32 {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// Return a copy rotated 90 degrees clockwise
    ///
    /// Column `c` read top-to-bottom becomes row `c` read right-to-left.
    pub fn rotate_clockwise(&self) -> Grid {
        let n = self.size;
        let mut out = vec![0; n * n];
        for row in 0..n {
            for col in 0..n {
                out[col * n + (n - 1 - row)] = self.cells[row * n + col];
            }
        }
        Grid {
            size: n,
            cells: out,
        }
    }

    /// Rotate clockwise `turns` quarter turns
    pub fn rotated(&self, turns: usize) -> Grid {
        let mut grid = self.clone();
        for _ in 0..turns % 4 {
            grid = grid.rotate_clockwise();
        }
        grid
    }

    /// Compact the non-zero cells of `col` toward row 0, preserving order
    ///
    /// Out-of-range columns are ignored.
    pub fn shift_column_up(&mut self, col: usize) {
        if col >= self.size {
            return;
        }
        let n = self.size;
        let mut write = 0;
        for row in 0..n {
            let v = self.cells[row * n + col];
            if v != 0 {
                self.cells[write * n + col] = v;
                write += 1;
            }
        }
        for row in write..n {
            self.cells[row * n + col] = 0;
        }
    }

    /// Slide `col` up and merge adjacent equal pairs in a single top-down pass
    ///
    /// A freshly doubled tile is not merged again in the same pass, so `[2, 2, 2, 0]`
    /// becomes `[4, 2, 0, 0]`. A pair whose double would exceed [`MAX_TILE`] stays put.
    pub fn merge_column_up(&mut self, col: usize) {
        if col >= self.size {
            return;
        }
        let n = self.size;
        self.shift_column_up(col);
        for row in 0..n - 1 {
            let upper = row * n + col;
            let lower = upper + n;
            let v = self.cells[upper];
            if v == 0 || v != self.cells[lower] {
                continue;
            }
            if let Some(doubled) = v.checked_mul(2).filter(|&d| d <= MAX_TILE) {
                self.cells[upper] = doubled;
                self.cells[lower] = 0;
            }
        }
        self.shift_column_up(col);
    }

    /// Merge every column up; columns do not interact
    pub fn merge_up(&mut self) {
        for col in 0..self.size {
            self.merge_column_up(col);
        }
    }

    /// Slide and merge toward the edge named by `direction`
    ///
    /// Returns true if any cell changed.
    pub fn merge_direction(&mut self, direction: Direction) -> bool {
        let before = self.clone();
        let mut work = self.rotated(direction.rotations());
        work.merge_up();
        *self = work.rotated(direction.restore_rotations());
        *self != before
    }

}

impl Default for Grid {
    /// Empty canonical 4x4 grid
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            cells: vec![0; DEFAULT_SIZE * DEFAULT_SIZE],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[[u32; 4]; 4]) -> Grid {
        Grid::from_rows(rows.iter().map(|r| r.to_vec()).collect()).unwrap()
    }

    fn column(grid: &Grid, col: usize) -> Vec<u32> {
        (0..grid.size()).map(|row| grid.get(row, col).unwrap()).collect()
    }

    fn set_column(grid: &mut Grid, col: usize, values: [u32; 4]) {
        for (row, v) in values.iter().enumerate() {
            grid.set(row, col, *v);
        }
    }

    #[test]
    fn test_grid_index_calculation() {
        let g = Grid::new(4).unwrap();
        assert_eq!(g.index(0, 0), Some(0));
        assert_eq!(g.index(0, 3), Some(3));
        assert_eq!(g.index(1, 0), Some(4));
        assert_eq!(g.index(3, 3), Some(15));
        assert_eq!(g.index(4, 0), None);
        assert_eq!(g.index(0, 4), None);
    }

    #[test]
    fn test_zero_size_rejected() {
        assert!(matches!(
            Grid::new(0),
            Err(BoardError::InvalidDimensions { rows: 0, .. })
        ));
        assert!(Grid::from_rows(Vec::new()).is_err());
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let err = Grid::from_rows(vec![vec![0, 0], vec![0]]).unwrap_err();
        match err {
            BoardError::InvalidDimensions { rows, cols } => {
                assert_eq!(rows, 2);
                assert_eq!(cols, vec![2, 1]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_non_square_rejected() {
        assert!(Grid::from_rows(vec![vec![0, 0, 0], vec![0, 0, 0]]).is_err());
    }

    #[test]
    fn test_rows_round_trip() {
        let rows = vec![vec![2, 0], vec![0, 4]];
        let g = Grid::from_rows(rows.clone()).unwrap();
        assert_eq!(g.to_rows(), rows);
        assert_eq!(g.size(), 2);
    }

    #[test]
    fn test_rotate_clockwise_example() {
        let g = grid(&[[0, 1, 2, 3], [4, 5, 6, 7], [8, 9, 10, 11], [12, 13, 14, 15]]);
        let expected = grid(&[[12, 8, 4, 0], [13, 9, 5, 1], [14, 10, 6, 2], [15, 11, 7, 3]]);
        assert_eq!(g.rotate_clockwise(), expected);
    }

    #[test]
    fn test_rotate_does_not_mutate_input() {
        let g = grid(&[[2, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 4]]);
        let copy = g.clone();
        let _ = g.rotate_clockwise();
        assert_eq!(g, copy);
    }

    #[test]
    fn test_four_rotations_identity() {
        let g = grid(&[[2, 4, 8, 16], [0, 2, 0, 4], [32, 0, 64, 0], [0, 0, 2, 2]]);
        assert_eq!(g.rotated(4), g);
        assert_eq!(g.rotated(2), g.rotate_clockwise().rotate_clockwise());
    }

    #[test]
    fn test_shift_column_up_preserves_order() {
        let mut g = Grid::new(4).unwrap();
        set_column(&mut g, 1, [0, 4, 0, 2]);
        g.shift_column_up(1);
        assert_eq!(column(&g, 1), vec![4, 2, 0, 0]);
    }

    #[test]
    fn test_shift_column_up_does_not_merge() {
        let mut g = Grid::new(4).unwrap();
        set_column(&mut g, 0, [0, 2, 0, 2]);
        g.shift_column_up(0);
        assert_eq!(column(&g, 0), vec![2, 2, 0, 0]);
    }

    #[test]
    fn test_shift_column_up_idempotent() {
        let mut g = grid(&[[0, 2, 0, 0], [4, 0, 0, 8], [0, 2, 0, 0], [4, 0, 2, 8]]);
        for col in 0..4 {
            g.shift_column_up(col);
        }
        let once = g.clone();
        for col in 0..4 {
            g.shift_column_up(col);
        }
        assert_eq!(g, once);
    }

    #[test]
    fn test_merge_column_up_no_cascade() {
        let mut g = Grid::new(4).unwrap();
        set_column(&mut g, 0, [2, 2, 2, 0]);
        g.merge_column_up(0);
        assert_eq!(column(&g, 0), vec![4, 2, 0, 0]);
    }

    #[test]
    fn test_merge_column_up_two_pairs() {
        let mut g = Grid::new(4).unwrap();
        set_column(&mut g, 2, [2, 2, 4, 4]);
        g.merge_column_up(2);
        assert_eq!(column(&g, 2), vec![4, 8, 0, 0]);
    }

    #[test]
    fn test_merge_column_up_doubled_tile_stays() {
        let mut g = Grid::new(4).unwrap();
        set_column(&mut g, 3, [4, 4, 8, 0]);
        g.merge_column_up(3);
        assert_eq!(column(&g, 3), vec![8, 8, 0, 0]);
    }

    #[test]
    fn test_merge_column_up_across_gap() {
        let mut g = Grid::new(4).unwrap();
        set_column(&mut g, 0, [2, 0, 0, 2]);
        g.merge_column_up(0);
        assert_eq!(column(&g, 0), vec![4, 0, 0, 0]);
    }

    #[test]
    fn test_merge_up_columns_independent() {
        let mut g = grid(&[[2, 4, 0, 0], [2, 2, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);
        g.merge_up();
        assert_eq!(
            g,
            grid(&[[4, 4, 0, 0], [0, 2, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]])
        );
    }

    #[test]
    fn test_merge_direction_left() {
        let mut g = grid(&[[0, 2, 0, 2], [4, 4, 4, 0], [0, 0, 0, 8], [2, 4, 8, 16]]);
        assert!(g.merge_direction(Direction::Left));
        assert_eq!(
            g,
            grid(&[[4, 0, 0, 0], [8, 4, 0, 0], [8, 0, 0, 0], [2, 4, 8, 16]])
        );
    }

    #[test]
    fn test_merge_direction_right() {
        let mut g = grid(&[[2, 2, 2, 0], [0, 0, 0, 0], [4, 0, 0, 4], [0, 0, 0, 0]]);
        assert!(g.merge_direction(Direction::Right));
        assert_eq!(
            g,
            grid(&[[0, 0, 2, 4], [0, 0, 0, 0], [0, 0, 0, 8], [0, 0, 0, 0]])
        );
    }

    #[test]
    fn test_merge_direction_down() {
        let mut g = grid(&[[2, 0, 0, 0], [2, 0, 0, 0], [2, 0, 0, 0], [0, 0, 0, 4]]);
        assert!(g.merge_direction(Direction::Down));
        assert_eq!(
            g,
            grid(&[[0, 0, 0, 0], [0, 0, 0, 0], [2, 0, 0, 0], [4, 0, 0, 4]])
        );
    }

    #[test]
    fn test_merge_direction_reports_no_change() {
        let mut g = grid(&[[2, 4, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);
        assert!(!g.merge_direction(Direction::Up));
        assert!(!g.merge_direction(Direction::Left));
        assert!(g.merge_direction(Direction::Right));
    }

    #[test]
    fn test_empty_positions_row_major() {
        let g = grid(&[[2, 0, 2, 2], [2, 2, 2, 2], [2, 2, 2, 0], [2, 2, 2, 2]]);
        assert_eq!(
            g.empty_positions(),
            vec![Position::new(0, 1), Position::new(2, 3)]
        );
        assert!(!g.is_full());
    }

    #[test]
    fn test_merge_stops_at_max_tile() {
        let big = 1u32 << 31;
        let mut g = Grid::from_rows(vec![vec![big, 0], vec![big, 0]]).unwrap();
        assert!(!g.merge_direction(Direction::Up));
        assert_eq!(g.to_rows(), vec![vec![big, 0], vec![big, 0]]);

        let mut g = Grid::from_rows(vec![vec![MAX_TILE, 0], vec![MAX_TILE, 0]]).unwrap();
        g.merge_up();
        assert_eq!(g.to_rows(), vec![vec![MAX_TILE, 0], vec![MAX_TILE, 0]]);

        let half = MAX_TILE / 2;
        let mut g = Grid::from_rows(vec![vec![half, 0], vec![half, 0]]).unwrap();
        g.merge_up();
        assert_eq!(g.to_rows(), vec![vec![MAX_TILE, 0], vec![0, 0]]);
    }

    #[test]
    fn test_size_limits() {
        assert!(Grid::new(MAX_SIZE).is_ok());
        assert!(matches!(
            Grid::new(MAX_SIZE + 1),
            Err(BoardError::InvalidDimensions { .. })
        ));
        let rows = vec![vec![0; MAX_SIZE + 1]; MAX_SIZE + 1];
        assert!(matches!(
            Grid::from_rows(rows),
            Err(BoardError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_get_set_out_of_bounds() {
        let mut g = Grid::new(4).unwrap();
        assert_eq!(g.get(4, 0), None);
        assert!(!g.set(0, 4, 2));
        assert!(g.set(3, 3, 2));
        assert_eq!(g.get(3, 3), Some(2));
        assert_eq!(g.max_tile(), 2);
        assert_eq!(g.sum(), 2);
    }
}
