//! Inter-draw pacing.
//!
//! The deal loop pauses between consecutive draws to simulate dealing
//! speed. Pacing is a trait so the blocking default can be swapped for a
//! cooperative or cancellable implementation without touching the loop;
//! an interrupted pause is reported to the engine, which logs it and
//! carries on as though the full delay elapsed.

use std::thread;
use std::time::Duration;

/// Upper bound on the accepted per-draw delay, in milliseconds.
pub const MAX_DEAL_DELAY_MS: u64 = 1000;

/// Signal that a pause ended before the requested delay elapsed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PauseInterrupted;

/// A pause between consecutive card draws.
pub trait Pacer {
    /// Suspend the calling thread of control for `delay`.
    ///
    /// Returns `Err(PauseInterrupted)` when the pause was cut short
    /// externally. The engine treats that as best-effort pacing, never as
    /// a failed deal.
    fn pause(&mut self, delay: Duration) -> Result<(), PauseInterrupted>;
}

/// Default pacer: blocks the calling thread with [`thread::sleep`].
///
/// A plain sleep has no interruption mechanism, so this pacer never
/// reports [`PauseInterrupted`].
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadPacer;

impl Pacer for ThreadPacer {
    fn pause(&mut self, delay: Duration) -> Result<(), PauseInterrupted> {
        if !delay.is_zero() {
            thread::sleep(delay);
        }
        Ok(())
    }
}

/// Pacer that skips every delay. Suited to tests and headless runs.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopPacer;

impl Pacer for NoopPacer {
    fn pause(&mut self, _delay: Duration) -> Result<(), PauseInterrupted> {
        Ok(())
    }
}
