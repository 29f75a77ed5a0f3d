//! Match detection - finds every position inside a run of 3+
//!
//! One run-length scan per row (left to right) and per column (top to
//! bottom). A run is flushed when its value changes and again at the line
//! boundary. O(N^2) over the whole board, no backtracking.

use std::collections::BTreeSet;

use match_three_types::{Cell, Pos, MIN_RUN};

use crate::board::Board;

/// Set of positions that belong to at least one run of [`MIN_RUN`] equal
/// tiles.
///
/// Set semantics: a cell shared by a horizontal and a vertical run is
/// recorded once. Iteration is row-major sorted, so downstream consumers
/// (traces, events) are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchSet {
    positions: BTreeSet<Pos>,
}

impl MatchSet {
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Number of distinct matched positions
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn contains(&self, pos: Pos) -> bool {
        self.positions.contains(&pos)
    }

    pub fn iter(&self) -> impl Iterator<Item = Pos> + '_ {
        self.positions.iter().copied()
    }

    /// Sorted positions, row-major
    pub fn to_vec(&self) -> Vec<Pos> {
        self.positions.iter().copied().collect()
    }

    fn insert(&mut self, pos: Pos) {
        self.positions.insert(pos);
    }
}

/// Scan the whole board for matches.
///
/// Empty cells never participate in a run.
pub fn find_matches(board: &Board) -> MatchSet {
    let size = board.size();
    let mut matches = MatchSet::default();

    // Horizontal runs: scan each row left to right.
    for row in 0..size {
        let mut run_len = 1usize;
        let mut run_tile = board.get(Pos::new(row, 0));
        for col in 1..size {
            let cell = board.get(Pos::new(row, col));
            if cell.is_some() && cell == run_tile {
                run_len += 1;
                continue;
            }
            flush_row_run(&mut matches, row, col, run_len, run_tile);
            run_len = 1;
            run_tile = cell;
        }
        flush_row_run(&mut matches, row, size, run_len, run_tile);
    }

    // Vertical runs: scan each column top to bottom.
    for col in 0..size {
        let mut run_len = 1usize;
        let mut run_tile = board.get(Pos::new(0, col));
        for row in 1..size {
            let cell = board.get(Pos::new(row, col));
            if cell.is_some() && cell == run_tile {
                run_len += 1;
                continue;
            }
            flush_col_run(&mut matches, col, row, run_len, run_tile);
            run_len = 1;
            run_tile = cell;
        }
        flush_col_run(&mut matches, col, size, run_len, run_tile);
    }

    matches
}

/// Record a finished horizontal run ending just before `end_col`.
fn flush_row_run(matches: &mut MatchSet, row: usize, end_col: usize, run_len: usize, run_tile: Cell) {
    if run_tile.is_some() && run_len >= MIN_RUN {
        for col in end_col - run_len..end_col {
            matches.insert(Pos::new(row, col));
        }
    }
}

/// Record a finished vertical run ending just before `end_row`.
fn flush_col_run(matches: &mut MatchSet, col: usize, end_row: usize, run_len: usize, run_tile: Cell) {
    if run_tile.is_some() && run_len >= MIN_RUN {
        for row in end_row - run_len..end_row {
            matches.insert(Pos::new(row, col));
        }
    }
}
