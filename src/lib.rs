//! # half-deck
//!
//! A simplified blackjack-style card game engine. A house deals to itself
//! and to a roster of registered players from a shuffled 28-card "half
//! deck" (the ranks scoring 8 and up); each turn accumulates card scores
//! until it reaches the bust level of 42, and every player's result is
//! settled against the house's to move point balances by the staged bet.
//!
//! ## Design Notes
//!
//! 1. **Single-owner state**: the engine owns its deck and roster; the
//!    deck is rebuilt after every house deal and never shared.
//!
//! 2. **Identity-ordered roster**: players live in an ordered map keyed
//!    by id, so iteration order is identity order by construction.
//!
//! 3. **Ordered synchronous observers**: life-cycle hooks fire in
//!    registration order on the caller's thread; semantics depend on that
//!    ordering, so there is no parallel dispatch.
//!
//! 4. **Pacing as a seam**: the inter-draw delay goes through the
//!    [`Pacer`] trait, keeping the blocking default swappable for a
//!    cancellable implementation.
//!
//! ## Modules
//!
//! - `cards`: suits, ranks, and the fixed card scoring function
//! - `deck`: half-deck construction and draw-one semantics
//! - `players`: player identity, points, bets, and round results
//! - `engine`: the deal/bust loop and round orchestration
//! - `engine::callbacks`: ordered observer registration and dispatch
//! - `engine::pacing`: inter-draw delay strategies
//! - `errors`: engine error taxonomy
//! - `rng`: seedable shuffle RNG
//! - `view`: a `tracing`-backed logging observer

pub mod cards;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod players;
pub mod rng;
pub mod view;

// Re-export commonly used types
pub use crate::cards::{PlayingCard, Rank, Suit, INVALID_SCORE};
pub use crate::deck::{Deck, HALF_DECK_SIZE};
pub use crate::engine::callbacks::{CallbackId, CallbackRegistry, GameEngineCallback};
pub use crate::engine::pacing::{
    NoopPacer, Pacer, PauseInterrupted, ThreadPacer, MAX_DEAL_DELAY_MS,
};
pub use crate::engine::{GameEngine, BUST_LEVEL};
pub use crate::errors::EngineError;
pub use crate::players::{Player, PlayerId};
pub use crate::rng::GameRng;
pub use crate::view::LoggingCallback;
