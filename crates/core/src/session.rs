//! Game session module - ties the core components together
//!
//! A [`GameSession`] owns one board, its game state (score, move budget,
//! terminal flag), and its RNG, so independent sessions can run side by side
//! and a fixed seed replays identically. Presentation layers talk to it
//! through three entry points (`attempt_move`, `request_hint`, `restart`)
//! and hear back through [`SessionObserver`] callbacks; they never mutate
//! engine state directly.

use match_three_types::{ConfigError, GameConfig, Pos};

use crate::board::Board;
use crate::cascade::{resolve, CascadeTrace, EngineError};
use crate::events::SessionObserver;
use crate::hint::find_hint;
use crate::matches::find_matches;
use crate::rng::TileSource;
use crate::snapshot::SessionSnapshot;

/// Why a move request was refused before touching the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidMoveReason {
    OutOfBounds,
    NotAdjacent,
    GameOver,
}

impl InvalidMoveReason {
    pub fn code(&self) -> &'static str {
        match self {
            InvalidMoveReason::OutOfBounds => "out_of_bounds",
            InvalidMoveReason::NotAdjacent => "not_adjacent",
            InvalidMoveReason::GameOver => "game_over",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            InvalidMoveReason::OutOfBounds => "coordinates are outside the board",
            InvalidMoveReason::NotAdjacent => "cells are not 4-directionally adjacent",
            InvalidMoveReason::GameOver => "the move budget is exhausted",
        }
    }
}

/// Result of a swap attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum MoveOutcome {
    /// Request refused without mutation or move cost.
    Invalid(InvalidMoveReason),
    /// Swap produced no match and was rolled back. No move cost.
    Rejected,
    /// Another move or hint is still resolving; retry once it settles.
    Busy,
    /// Swap committed; the trace records every settled cascade pass.
    Accepted(CascadeTrace),
}

/// One independent game: board + state + RNG + subscribers.
pub struct GameSession {
    config: GameConfig,
    board: Board,
    tiles: TileSource,
    seed: u32,
    score: u32,
    moves_remaining: u32,
    game_over: bool,
    processing: bool,
    observers: Vec<Box<dyn SessionObserver>>,
}

impl GameSession {
    /// Start a new game: validate the config, seed the RNG, and generate a
    /// settled board.
    pub fn new(config: GameConfig, seed: u32) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut tiles = TileSource::new(config.tile_kinds, seed);
        let board = Board::generate(config.board_size, &mut tiles);
        debug_assert!(find_matches(&board).is_empty(), "generated board has matches");

        Ok(Self {
            config,
            board,
            tiles,
            seed,
            score: 0,
            moves_remaining: config.max_moves,
            game_over: false,
            processing: false,
            observers: Vec::new(),
        })
    }

    /// Build a session around a preset board, used as-is.
    ///
    /// For tests and harnesses that need a known layout; the board must
    /// match the configured size.
    pub fn with_board(config: GameConfig, board: Board, seed: u32) -> Result<Self, ConfigError> {
        config.validate()?;
        assert_eq!(board.size(), config.board_size, "board does not match config");

        Ok(Self {
            config,
            board,
            tiles: TileSource::new(config.tile_kinds, seed),
            seed,
            score: 0,
            moves_remaining: config.max_moves,
            game_over: false,
            processing: false,
            observers: Vec::new(),
        })
    }

    /// Subscribe an observer to session events.
    pub fn subscribe(&mut self, observer: Box<dyn SessionObserver>) {
        self.observers.push(observer);
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn moves_remaining(&self) -> u32 {
        self.moves_remaining
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Whether a move is currently resolving. Callers that drive the session
    /// re-entrantly (from observer callbacks) must check this first.
    pub fn is_processing(&self) -> bool {
        self.processing
    }

    /// Seed this session was created with
    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            board: self.board.snapshot(),
            score: self.score,
            moves_remaining: self.moves_remaining,
            game_over: self.game_over,
            seed: self.seed,
        }
    }

    /// Reset to a fresh game: new board from the continuing RNG stream, full
    /// move budget, zero score.
    pub fn restart(&mut self) {
        self.board = Board::generate(self.config.board_size, &mut self.tiles);
        debug_assert!(find_matches(&self.board).is_empty(), "generated board has matches");
        self.score = 0;
        self.moves_remaining = self.config.max_moves;
        self.game_over = false;
        self.processing = false;

        let score = self.score;
        let remaining = self.moves_remaining;
        self.emit(|observer| observer.on_score_changed(score));
        self.emit(|observer| observer.on_moves_changed(remaining));
    }

    /// Attempt to swap two cells.
    ///
    /// Side effects are strictly ordered: the board is only touched once the
    /// request passed bounds and adjacency checks, and a swap that produces
    /// no match is undone before this returns, leaving the board
    /// bit-identical. Only an accepted move costs a move from the budget.
    ///
    /// `Err` means an internal invariant was violated mid-cascade; the
    /// session should be abandoned.
    pub fn attempt_move(&mut self, a: Pos, b: Pos) -> Result<MoveOutcome, EngineError> {
        if self.processing {
            return Ok(MoveOutcome::Busy);
        }
        if self.game_over {
            return Ok(MoveOutcome::Invalid(InvalidMoveReason::GameOver));
        }
        if !self.board.in_bounds(a) || !self.board.in_bounds(b) {
            return Ok(MoveOutcome::Invalid(InvalidMoveReason::OutOfBounds));
        }
        if !a.is_adjacent(b) {
            return Ok(MoveOutcome::Invalid(InvalidMoveReason::NotAdjacent));
        }

        self.processing = true;
        self.board.swap(a, b);

        if find_matches(&self.board).is_empty() {
            // No match: restore the exact prior state, no move cost.
            self.board.swap(a, b);
            self.processing = false;
            return Ok(MoveOutcome::Rejected);
        }

        self.moves_remaining -= 1;
        let remaining = self.moves_remaining;
        self.emit(|observer| observer.on_moves_changed(remaining));

        let trace = match resolve(&mut self.board, &mut self.tiles) {
            Ok(trace) => trace,
            Err(err) => {
                self.processing = false;
                return Err(err);
            }
        };

        self.score += trace.score();
        for pass in &trace.passes {
            self.emit(|observer| observer.on_cascade_pass(pass));
        }
        let score = self.score;
        self.emit(|observer| observer.on_score_changed(score));

        if self.moves_remaining == 0 {
            self.game_over = true;
            self.emit(|observer| observer.on_game_over(score));
        }

        self.processing = false;
        Ok(MoveOutcome::Accepted(trace))
    }

    /// First swap that would produce a match, or `None` if the board has no
    /// legal moves (or a move is still resolving, or the game is over).
    ///
    /// Committed state is restored bit-identically after the search.
    pub fn request_hint(&mut self) -> Option<(Pos, Pos)> {
        if self.processing || self.game_over {
            return None;
        }

        self.processing = true;
        let hint = find_hint(&mut self.board);
        self.processing = false;
        hint
    }

    fn emit<F: FnMut(&mut dyn SessionObserver)>(&mut self, mut f: F) {
        for observer in &mut self.observers {
            f(observer.as_mut());
        }
    }
}
