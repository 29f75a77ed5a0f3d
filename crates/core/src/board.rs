//! Board module - manages the tile grid
//!
//! The board is an N x N grid where each cell holds a tile or is transiently
//! empty during cascade resolution. Uses a flat vector for cache locality.
//! Coordinates: (row, col) with row 0 at the top, col 0 at the left.
//!
//! Out-of-range access is a programming error: all rule code computes its
//! indices internally, so `get`/`set`/`swap` assert bounds instead of
//! returning recoverable errors. External input is validated against
//! [`Board::in_bounds`] before it ever reaches these primitives.

use match_three_types::{Cell, Pos, Tile, MIN_TILE_KINDS};

use crate::rng::TileSource;
use crate::snapshot::BoardSnapshot;

/// The game board - a square tile grid in row-major flat storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    /// Flat array of cells, row-major order (row * size + col)
    cells: Vec<Cell>,
}

impl Board {
    /// Generate a settled board: every cell filled, no run of 3 anywhere.
    ///
    /// Cells are placed in row-major order; a candidate tile is redrawn while
    /// it would complete a run with its already-placed left or up neighbors.
    /// Later cells are not placed yet, so only those two directions can
    /// complete a run at placement time. With at least [`MIN_TILE_KINDS`]
    /// kinds at most two candidates are ever excluded, so the redraw loop
    /// terminates.
    pub fn generate(size: usize, tiles: &mut TileSource) -> Self {
        debug_assert!(tiles.kinds() >= MIN_TILE_KINDS);

        let mut board = Self {
            size,
            cells: vec![None; size * size],
        };

        for row in 0..size {
            for col in 0..size {
                loop {
                    let tile = tiles.draw();
                    if !board.completes_run(row, col, tile) {
                        board.cells[row * size + col] = Some(tile);
                        break;
                    }
                }
            }
        }

        board
    }

    /// Build a board from explicit rows. The grid must be square.
    ///
    /// Intended for tests and harnesses that need a known layout.
    pub fn from_grid(rows: &[Vec<Tile>]) -> Self {
        let size = rows.len();
        assert!(rows.iter().all(|row| row.len() == size), "grid must be square");

        let mut cells = Vec::with_capacity(size * size);
        for row in rows {
            cells.extend(row.iter().map(|tile| Some(*tile)));
        }
        Self { size, cells }
    }

    /// Whether placing `tile` at (row, col) would finish a run of 3 with the
    /// already-placed left/up neighbors.
    fn completes_run(&self, row: usize, col: usize, tile: Tile) -> bool {
        let want = Some(tile);
        let left_run = col >= 2
            && self.cells[row * self.size + col - 1] == want
            && self.cells[row * self.size + col - 2] == want;
        let up_run = row >= 2
            && self.cells[(row - 1) * self.size + col] == want
            && self.cells[(row - 2) * self.size + col] == want;
        left_run || up_run
    }

    /// Board edge length
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether a position lies on the board
    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    /// Calculate flat index, asserting bounds
    #[inline(always)]
    fn idx(&self, pos: Pos) -> usize {
        assert!(
            self.in_bounds(pos),
            "position ({}, {}) outside {}x{} board",
            pos.row,
            pos.col,
            self.size,
            self.size
        );
        pos.row * self.size + pos.col
    }

    /// Get cell at a position
    pub fn get(&self, pos: Pos) -> Cell {
        self.cells[self.idx(pos)]
    }

    /// Set cell at a position
    pub fn set(&mut self, pos: Pos, cell: Cell) {
        let idx = self.idx(pos);
        self.cells[idx] = cell;
    }

    /// Exchange two cell values in place
    pub fn swap(&mut self, a: Pos, b: Pos) {
        let (i, j) = (self.idx(a), self.idx(b));
        self.cells.swap(i, j);
    }

    /// Set every listed cell to empty
    pub fn clear_at(&mut self, positions: &[Pos]) {
        for &pos in positions {
            let idx = self.idx(pos);
            self.cells[idx] = None;
        }
    }

    /// Compact every column downward, preserving the relative order of its
    /// tiles and leaving empty cells only at the top.
    ///
    /// Two-pointer walk per column, bottom to top: each tile found at the
    /// read row drops to the lowest unwritten row. Deterministic, no
    /// randomness.
    pub fn apply_gravity(&mut self) {
        for col in 0..self.size {
            let mut write = self.size;
            for read in (0..self.size).rev() {
                let cell = self.cells[read * self.size + col];
                if cell.is_some() {
                    write -= 1;
                    if write != read {
                        self.cells[write * self.size + col] = cell;
                        self.cells[read * self.size + col] = None;
                    }
                }
            }
        }
    }

    /// Replace every empty cell with a fresh random tile.
    ///
    /// No adjacency constraint applies here: refill is allowed to create new
    /// matches, which is what keeps a cascade going.
    pub fn fill_empty(&mut self, tiles: &mut TileSource) {
        for cell in &mut self.cells {
            if cell.is_none() {
                *cell = Some(tiles.draw());
            }
        }
    }

    /// Number of empty cells
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_none()).count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Read-only u8 image of the board for presentation layers
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot::from_board(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matches::find_matches;

    fn tiles(indices: &[u8]) -> Vec<Tile> {
        indices
            .iter()
            .map(|i| Tile::from_index(*i).unwrap())
            .collect()
    }

    #[test]
    fn test_from_grid_layout() {
        let board = Board::from_grid(&[
            tiles(&[0, 1, 2]),
            tiles(&[1, 2, 0]),
            tiles(&[2, 0, 1]),
        ]);

        assert_eq!(board.size(), 3);
        assert_eq!(board.get(Pos::new(0, 0)), Some(Tile::Red));
        assert_eq!(board.get(Pos::new(1, 2)), Some(Tile::Red));
        assert_eq!(board.get(Pos::new(2, 1)), Some(Tile::Red));
        assert_eq!(board.get(Pos::new(2, 2)), Some(Tile::Orange));
    }

    #[test]
    #[should_panic(expected = "grid must be square")]
    fn test_from_grid_rejects_ragged_rows() {
        Board::from_grid(&[tiles(&[0, 1, 2]), tiles(&[1, 2])]);
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn test_get_out_of_bounds_panics() {
        let mut source = TileSource::new(4, 1);
        let board = Board::generate(4, &mut source);
        board.get(Pos::new(4, 0));
    }

    #[test]
    fn test_generate_fills_every_cell() {
        let mut source = TileSource::new(6, 99);
        let board = Board::generate(8, &mut source);

        assert_eq!(board.size(), 8);
        assert_eq!(board.empty_count(), 0);
        for &cell in board.cells() {
            assert!(cell.is_some());
        }
    }

    #[test]
    fn test_generate_has_no_initial_matches() {
        for seed in 1..=40 {
            let mut source = TileSource::new(4, seed);
            let board = Board::generate(8, &mut source);
            assert!(
                find_matches(&board).is_empty(),
                "seed {} generated a board with matches",
                seed
            );
        }
    }

    #[test]
    fn test_swap_exchanges_cells() {
        let mut board = Board::from_grid(&[
            tiles(&[0, 1, 2]),
            tiles(&[1, 2, 0]),
            tiles(&[2, 0, 1]),
        ]);

        board.swap(Pos::new(0, 0), Pos::new(0, 1));
        assert_eq!(board.get(Pos::new(0, 0)), Some(Tile::Orange));
        assert_eq!(board.get(Pos::new(0, 1)), Some(Tile::Red));

        // Swapping back restores the original layout.
        board.swap(Pos::new(0, 0), Pos::new(0, 1));
        assert_eq!(board.get(Pos::new(0, 0)), Some(Tile::Red));
        assert_eq!(board.get(Pos::new(0, 1)), Some(Tile::Orange));
    }

    #[test]
    fn test_clear_at_empties_cells() {
        let mut board = Board::from_grid(&[
            tiles(&[0, 1, 2]),
            tiles(&[1, 2, 0]),
            tiles(&[2, 0, 1]),
        ]);

        board.clear_at(&[Pos::new(0, 0), Pos::new(1, 1), Pos::new(2, 2)]);
        assert_eq!(board.empty_count(), 3);
        assert_eq!(board.get(Pos::new(0, 0)), None);
        assert_eq!(board.get(Pos::new(1, 1)), None);
        assert_eq!(board.get(Pos::new(2, 2)), None);
        assert_eq!(board.get(Pos::new(0, 1)), Some(Tile::Orange));
    }

    #[test]
    fn test_gravity_compacts_columns() {
        let mut board = Board::from_grid(&[
            tiles(&[0, 1, 2, 3]),
            tiles(&[1, 2, 3, 0]),
            tiles(&[2, 3, 0, 1]),
            tiles(&[3, 0, 1, 2]),
        ]);

        // Punch holes in column 0 at rows 1 and 3.
        board.clear_at(&[Pos::new(1, 0), Pos::new(3, 0)]);
        board.apply_gravity();

        // Survivors (rows 0 and 2: Red, Yellow) sink to the bottom in order.
        assert_eq!(board.get(Pos::new(0, 0)), None);
        assert_eq!(board.get(Pos::new(1, 0)), None);
        assert_eq!(board.get(Pos::new(2, 0)), Some(Tile::Red));
        assert_eq!(board.get(Pos::new(3, 0)), Some(Tile::Yellow));

        // Other columns are untouched.
        assert_eq!(board.get(Pos::new(0, 1)), Some(Tile::Orange));
        assert_eq!(board.get(Pos::new(3, 3)), Some(Tile::Yellow));
    }

    #[test]
    fn test_gravity_is_per_column() {
        let mut board = Board::from_grid(&[
            tiles(&[0, 1, 2]),
            tiles(&[1, 2, 0]),
            tiles(&[2, 0, 1]),
        ]);

        board.clear_at(&[Pos::new(2, 0), Pos::new(0, 1)]);
        board.apply_gravity();

        // Column 0: both survivors fall one row.
        assert_eq!(board.get(Pos::new(0, 0)), None);
        assert_eq!(board.get(Pos::new(1, 0)), Some(Tile::Red));
        assert_eq!(board.get(Pos::new(2, 0)), Some(Tile::Orange));

        // Column 1: hole was already at the top, nothing moves.
        assert_eq!(board.get(Pos::new(0, 1)), None);
        assert_eq!(board.get(Pos::new(1, 1)), Some(Tile::Yellow));
        assert_eq!(board.get(Pos::new(2, 1)), Some(Tile::Red));
    }

    #[test]
    fn test_fill_empty_leaves_no_holes() {
        let mut source = TileSource::new(5, 3);
        let mut board = Board::generate(6, &mut source);

        board.clear_at(&[Pos::new(0, 0), Pos::new(2, 3), Pos::new(5, 5)]);
        assert_eq!(board.empty_count(), 3);

        board.fill_empty(&mut source);
        assert_eq!(board.empty_count(), 0);
    }

    #[test]
    fn test_fill_empty_respects_alphabet_prefix() {
        let mut source = TileSource::new(3, 11);
        let mut board = Board::generate(6, &mut source);

        let holes: Vec<Pos> = (0..6).map(|col| Pos::new(0, col)).collect();
        board.clear_at(&holes);
        board.fill_empty(&mut source);

        for col in 0..6 {
            let tile = board.get(Pos::new(0, col)).unwrap();
            assert!(tile.index() < 3);
        }
    }
}
