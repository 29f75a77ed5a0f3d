use match_three_core::{EngineError, GameSession, MoveOutcome};

/// Why an autoplay run had to stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayError {
    /// The hint search proposed a swap the session then refused. The two
    /// disagree about the same board, which is a logic bug.
    HintNotAccepted,
    /// Fatal fault bubbled up from cascade resolution.
    Engine(EngineError),
}

impl PlayError {
    pub fn code(&self) -> &'static str {
        match self {
            PlayError::HintNotAccepted => "hint_not_accepted",
            PlayError::Engine(err) => err.code(),
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            PlayError::HintNotAccepted => "hint swap was not accepted by the session",
            PlayError::Engine(err) => err.message(),
        }
    }
}

/// Outcome of driving one session to the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaySummary {
    /// Accepted moves played.
    pub moves_played: u32,
    /// Tiles cleared across every cascade of the run.
    pub total_cleared: usize,
    pub final_score: u32,
    /// True when the board ran out of legal moves before the budget did.
    pub stalled: bool,
}

/// Play a session until the move budget is exhausted or no legal move
/// remains, always taking the first hint.
///
/// This is the simplest complete player: it exercises every engine path
/// (hint search, move validation, cascade resolution, terminal handling)
/// and, with a fixed seed, replays identically.
pub fn play_to_end(session: &mut GameSession) -> Result<PlaySummary, PlayError> {
    let mut summary = PlaySummary {
        moves_played: 0,
        total_cleared: 0,
        final_score: 0,
        stalled: false,
    };

    while !session.game_over() {
        let Some((a, b)) = session.request_hint() else {
            summary.stalled = true;
            break;
        };

        match session.attempt_move(a, b).map_err(PlayError::Engine)? {
            MoveOutcome::Accepted(trace) => {
                summary.moves_played += 1;
                summary.total_cleared += trace.total_cleared();
            }
            _ => return Err(PlayError::HintNotAccepted),
        }
    }

    summary.final_score = session.score();
    Ok(summary)
}
