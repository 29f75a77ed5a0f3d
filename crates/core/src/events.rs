use crate::cascade::CascadePass;

/// Callbacks a presentation layer (or any collaborator) subscribes to.
///
/// The engine is the sole writer: it invokes these synchronously right after
/// the corresponding state transition and never waits on the subscriber.
/// Pacing (animation delays, stepped playback of a cascade) is entirely the
/// subscriber's concern; the full trace is already computed when
/// `on_cascade_pass` fires.
///
/// All methods default to no-ops so observers implement only what they need.
pub trait SessionObserver {
    /// One settled cascade pass (cleared positions + resulting board).
    fn on_cascade_pass(&mut self, _pass: &CascadePass) {}

    /// Score changed; carries the new total.
    fn on_score_changed(&mut self, _score: u32) {}

    /// Move budget changed; carries the remaining count.
    fn on_moves_changed(&mut self, _remaining: u32) {}

    /// The move budget is exhausted; carries the final score.
    fn on_game_over(&mut self, _final_score: u32) {}
}
