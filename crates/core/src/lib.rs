//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the entire match-resolution engine: board model,
//! match detection, cascade resolution, move validation, and hint search.
//! It has **zero dependencies** on rendering, input, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games (for testing and AI play)
//! - **Testable**: Comprehensive unit tests for all rules
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`board`]: N x N tile grid with generation, gravity, and refill
//! - [`matches`]: run-length scan that finds all positions in runs of 3+
//! - [`cascade`]: clear / gravity / refill loop driven to a settled board
//! - [`session`]: game session owning board, score, move budget, and events
//! - [`hint`]: first-found trial-swap search for a legal move
//! - [`rng`]: deterministic LCG and uniform tile drawing
//! - [`snapshot`]: read-only board and session views for presentation layers
//! - [`events`]: observer trait presentation layers subscribe to
//!
//! # Example
//!
//! ```
//! use match_three_core::{GameSession, MoveOutcome};
//! use match_three_types::GameConfig;
//!
//! let mut session = GameSession::new(GameConfig::default(), 12345).unwrap();
//!
//! // A freshly generated board is settled: no matches, no empty cells.
//! assert_eq!(session.score(), 0);
//! assert!(!session.game_over());
//!
//! // Hints are always safe to ask for; committed state is never changed.
//! if let Some((a, b)) = session.request_hint() {
//!     let outcome = session.attempt_move(a, b).unwrap();
//!     assert!(matches!(outcome, MoveOutcome::Accepted(_)));
//! }
//! ```

pub mod board;
pub mod cascade;
pub mod events;
pub mod hint;
pub mod matches;
pub mod rng;
pub mod session;
pub mod snapshot;

pub use match_three_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use cascade::{resolve, CascadePass, CascadeTrace, EngineError};
pub use events::SessionObserver;
pub use hint::find_hint;
pub use matches::{find_matches, MatchSet};
pub use rng::{SimpleRng, TileSource};
pub use session::{GameSession, InvalidMoveReason, MoveOutcome};
pub use snapshot::{BoardSnapshot, SessionSnapshot};
