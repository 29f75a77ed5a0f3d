//! Higher-level drivers built on top of the core engine.
//!
//! The core crate owns the rules; this crate owns strategies for driving a
//! session without a human attached, used by the headless binary and by
//! tests that need whole games played end to end.

pub mod autoplay;

pub use autoplay::{play_to_end, PlayError, PlaySummary};
