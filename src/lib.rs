//! Match-three engine (workspace facade crate).
//!
//! This package keeps the public `match_three::{core,engine,types}` API in
//! one place while the implementation lives in dedicated crates under
//! `crates/`.

pub use match_three_core as core;
pub use match_three_engine as engine;
pub use match_three_types as types;
