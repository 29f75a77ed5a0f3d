//! Cascade resolution - clear, gravity, refill, re-detect to a fixpoint
//!
//! One committed move triggers a cascade: matched tiles are removed, columns
//! compact downward, empty cells refill with fresh random tiles, and the
//! board is scanned again. The loop runs until a scan finds nothing, which is
//! the definition of a settled board. The full trace is computed
//! synchronously; playback pacing belongs entirely to the caller.

use match_three_types::{Pos, CASCADE_PASS_LIMIT, POINTS_PER_TILE};

use crate::board::Board;
use crate::matches::find_matches;
use crate::rng::TileSource;
use crate::snapshot::BoardSnapshot;

/// One pass of a cascade: what was cleared, and the board after gravity and
/// refill.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CascadePass {
    /// Cleared positions, row-major sorted.
    pub cleared: Vec<Pos>,
    /// Board state once this pass settled.
    pub board: BoardSnapshot,
}

/// Ordered record of every pass in one cascade.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CascadeTrace {
    pub passes: Vec<CascadePass>,
}

impl CascadeTrace {
    /// Total tiles cleared across all passes
    pub fn total_cleared(&self) -> usize {
        self.passes.iter().map(|pass| pass.cleared.len()).sum()
    }

    /// Points this cascade is worth
    pub fn score(&self) -> u32 {
        self.total_cleared() as u32 * POINTS_PER_TILE
    }

    pub fn is_empty(&self) -> bool {
        self.passes.is_empty()
    }
}

/// Fatal engine faults. These signal a logic bug, never a reachable game
/// state, and must not be swallowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    /// The cascade loop ran [`CASCADE_PASS_LIMIT`] passes without settling.
    CascadePassLimit,
}

impl EngineError {
    pub fn code(&self) -> &'static str {
        match self {
            EngineError::CascadePassLimit => "cascade_pass_limit",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            EngineError::CascadePassLimit => "cascade did not settle within the pass limit",
        }
    }
}

/// Drive `board` to a settled state, recording one pass per iteration.
///
/// Terminates with an empty trace when the board is already settled. The
/// pass cap is a defensive bound, not a game rule: refill values are
/// independent of what was cleared, so in practice cascades die out after a
/// handful of passes.
pub fn resolve(board: &mut Board, tiles: &mut TileSource) -> Result<CascadeTrace, EngineError> {
    let mut trace = CascadeTrace::default();

    loop {
        let matches = find_matches(board);
        if matches.is_empty() {
            debug_assert_eq!(board.empty_count(), 0, "settled board holds empty cells");
            return Ok(trace);
        }
        if trace.passes.len() >= CASCADE_PASS_LIMIT {
            return Err(EngineError::CascadePassLimit);
        }

        let cleared = matches.to_vec();
        board.clear_at(&cleared);
        board.apply_gravity();
        board.fill_empty(tiles);
        trace.passes.push(CascadePass {
            cleared,
            board: board.snapshot(),
        });
    }
}
