//! Ordered, synchronous round-event dispatch.
//!
//! Observers implement any subset of [`GameEngineCallback`]; every hook
//! defaults to a no-op. The registry preserves registration order and the
//! engine invokes hooks synchronously on its caller's thread, so an
//! observer registered first always hears an event before one registered
//! later. There is no failure isolation: a panicking observer aborts the
//! remaining notifications along with the engine call that fired them.

use crate::cards::PlayingCard;
use crate::players::Player;

/// Handle identifying one registration in a [`CallbackRegistry`].
///
/// Removal is by handle: trait objects have no general notion of
/// equality, and handles also keep duplicate registrations of the same
/// observer individually addressable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CallbackId(u32);

impl CallbackId {
    /// The raw handle value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CallbackId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Callback({})", self.0)
    }
}

/// Life-cycle hooks fired by the engine during a round.
pub trait GameEngineCallback {
    /// A card was dealt to a player and kept (did not bust the turn).
    fn on_card_dealt(&mut self, player: &Player, card: &PlayingCard) {
        let _ = (player, card);
    }

    /// A player's turn busted; `card` is the discarded overshoot card.
    fn on_bust_card(&mut self, player: &Player, card: &PlayingCard) {
        let _ = (player, card);
    }

    /// A player's turn finished with the given final sum. Fires on every
    /// player turn, bust or not.
    fn on_player_result(&mut self, player: &Player, result: i32) {
        let _ = (player, result);
    }

    /// A card was dealt to the house and kept.
    fn on_house_card_dealt(&mut self, card: &PlayingCard) {
        let _ = card;
    }

    /// The house turn busted; `card` is the discarded overshoot card.
    fn on_house_bust_card(&mut self, card: &PlayingCard) {
        let _ = card;
    }

    /// Win/loss has been applied to every player; `players` is the
    /// roster in identity order after resolution. Fires exactly once per
    /// house deal.
    fn on_house_result(&mut self, result: i32, players: &[Player]) {
        let _ = (result, players);
    }
}

/// Append-only ordered list of registered observers.
#[derive(Default)]
pub struct CallbackRegistry {
    entries: Vec<(CallbackId, Box<dyn GameEngineCallback>)>,
    next_id: u32,
}

impl CallbackRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an observer and return its handle.
    ///
    /// Registering the same logical observer twice yields two entries and
    /// duplicate notifications; the registry never deduplicates.
    pub fn register(&mut self, callback: Box<dyn GameEngineCallback>) -> CallbackId {
        let id = CallbackId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, callback));
        id
    }

    /// Remove the first entry with the given handle.
    ///
    /// Returns whether an entry was removed; an unknown handle is a
    /// lookup miss, not an error.
    pub fn remove(&mut self, id: CallbackId) -> bool {
        match self.entries.iter().position(|(entry_id, _)| *entry_id == id) {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }

    /// Number of registered observers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no observers are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Invoke `notify` for every observer, in registration order.
    pub fn each(&mut self, mut notify: impl FnMut(&mut dyn GameEngineCallback)) {
        for (_, callback) in &mut self.entries {
            notify(callback.as_mut());
        }
    }
}

impl std::fmt::Debug for CallbackRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallbackRegistry")
            .field("len", &self.entries.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}
