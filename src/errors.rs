//! Error types for engine operations.

use crate::engine::pacing::MAX_DEAL_DELAY_MS;
use crate::players::PlayerId;
use thiserror::Error;

/// Errors surfaced by [`GameEngine`](crate::engine::GameEngine) operations.
///
/// Every variant is raised before any state mutation takes effect, and
/// nothing is retried. Roster and callback lookup misses are reported as
/// `Option`/`bool`, never through this type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Deal delay outside the accepted range.
    #[error("deal delay must lie in 0..={MAX_DEAL_DELAY_MS}ms, got {0}ms")]
    InvalidDelay(u64),

    /// A player-targeted deal named an id that is not in the roster.
    #[error("no player registered with id `{0}`")]
    UnknownPlayer(PlayerId),

    /// A draw was attempted on an empty deck mid-round.
    #[error("deck exhausted before the turn reached the bust level")]
    DeckExhausted,
}
