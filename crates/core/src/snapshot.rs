use match_three_types::Tile;

use crate::board::Board;

/// Read-only u8 image of the board: 0 = empty, otherwise tile index + 1.
///
/// Cheap to clone and hand to presentation layers; never aliases live engine
/// state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSnapshot {
    size: usize,
    cells: Vec<u8>,
}

impl BoardSnapshot {
    pub fn from_board(board: &Board) -> Self {
        let cells = board
            .cells()
            .iter()
            .map(|cell| match cell {
                Some(tile) => tile.index() + 1,
                None => 0,
            })
            .collect();
        Self {
            size: board.size(),
            cells,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Tile> {
        assert!(row < self.size && col < self.size);
        match self.cells[row * self.size + col] {
            0 => None,
            value => Tile::from_index(value - 1),
        }
    }

    /// Raw cell values, row-major
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }
}

/// Full observable session state for presentation layers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub board: BoardSnapshot,
    pub score: u32,
    pub moves_remaining: u32,
    pub game_over: bool,
    pub seed: u32,
}

impl SessionSnapshot {
    pub fn playable(&self) -> bool {
        !self.game_over
    }
}
