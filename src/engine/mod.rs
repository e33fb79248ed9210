//! Game engine: deck ownership, the deal/bust loop, and round resolution.
//!
//! The engine owns one deck and one roster. A round is driven from the
//! outside: register players and observers, stage a bet per player, deal
//! each player in turn, then deal the house. The house deal resolves
//! every player's win/loss against the house total, fires the house
//! result exactly once per observer, and rebuilds a fresh shuffled deck
//! for the next round.
//!
//! ## Execution model
//!
//! Strictly single-threaded and synchronous: every operation, including
//! observer notification and the inter-draw pause, runs to completion on
//! the caller's thread. A multi-threaded wrapper must serialize all entry
//! points; nothing here tolerates concurrent deck or roster access.

pub mod callbacks;
pub mod pacing;

use std::time::Duration;

use im::OrdMap;
use smallvec::SmallVec;

use crate::cards::PlayingCard;
use crate::deck::Deck;
use crate::errors::EngineError;
use crate::players::{Player, PlayerId};
use crate::rng::GameRng;

use callbacks::{CallbackId, CallbackRegistry, GameEngineCallback};
use pacing::{Pacer, ThreadPacer, MAX_DEAL_DELAY_MS};

/// A turn busts once its accumulated score reaches or exceeds this value.
///
/// Landing on exactly 42 is the one exception: the turn ends cleanly with
/// the full 42 and no bust event. This asymmetry with the general bust
/// adjustment is a domain rule, preserved as observed.
pub const BUST_LEVEL: i32 = 42;

/// Outcome of one deal/bust loop invocation.
struct TurnOutcome {
    /// Final sum after the bust adjustment, if any.
    total: i32,
    /// The discarded overshoot card, when the turn busted past 42.
    bust_card: Option<PlayingCard>,
    /// Cards kept by the turn, in draw order.
    kept: SmallVec<[PlayingCard; 8]>,
}

/// The stateful game engine.
///
/// ## Example
///
/// ```
/// use half_deck::{GameEngine, NoopPacer, Player, PlayerId};
///
/// let mut engine = GameEngine::with_seed(7);
/// engine.set_pacer(Box::new(NoopPacer));
///
/// engine.add_player(Player::new("1", "Alice", 1000));
/// let alice = PlayerId::new("1");
///
/// assert!(engine.place_bet(&alice, 100));
/// engine.deal_player(&alice, 0).unwrap();
/// let house_total = engine.deal_house(0).unwrap();
/// assert!(house_total >= 0);
/// ```
pub struct GameEngine {
    deck: Deck,
    roster: OrdMap<PlayerId, Player>,
    callbacks: CallbackRegistry,
    rng: GameRng,
    pacer: Box<dyn Pacer>,
}

impl GameEngine {
    /// Create an engine with an entropy-seeded deck and blocking pacing.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(GameRng::from_entropy())
    }

    /// Create an engine with a fixed shuffle seed.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(GameRng::new(seed))
    }

    fn with_rng(mut rng: GameRng) -> Self {
        let deck = Deck::shuffled_half_deck(&mut rng);
        Self {
            deck,
            roster: OrdMap::new(),
            callbacks: CallbackRegistry::new(),
            rng,
            pacer: Box::new(ThreadPacer),
        }
    }

    /// Replace the inter-draw pacer.
    pub fn set_pacer(&mut self, pacer: Box<dyn Pacer>) {
        self.pacer = pacer;
    }

    // === Rounds ===

    /// Deal one turn for a registered player.
    ///
    /// Validates `delay_ms` (at most [`MAX_DEAL_DELAY_MS`]) and the
    /// player id before any card is drawn or observer notified. Runs the
    /// deal/bust loop, records the adjusted sum as the player's result,
    /// then fires `on_bust_card` (when the turn busted) followed by
    /// `on_player_result`. Returns the recorded result.
    pub fn deal_player(&mut self, id: &PlayerId, delay_ms: u64) -> Result<i32, EngineError> {
        let delay = validate_delay(delay_ms)?;
        if !self.roster.contains_key(id) {
            return Err(EngineError::UnknownPlayer(id.clone()));
        }

        let outcome = self.run_turn(Some(id), delay)?;
        if let Some(player) = self.roster.get_mut(id) {
            player.set_result(outcome.total);
        }
        tracing::debug!(
            player = %id,
            cards = outcome.kept.len(),
            total = outcome.total,
            "player turn complete"
        );

        if let Some(player) = self.roster.get(id) {
            if let Some(bust) = outcome.bust_card {
                self.callbacks.each(|cb| cb.on_bust_card(player, &bust));
            }
            self.callbacks.each(|cb| cb.on_player_result(player, outcome.total));
        }
        Ok(outcome.total)
    }

    /// Deal the house turn and resolve the round.
    ///
    /// Runs the deal/bust loop attributed to the house, applies win/loss
    /// to every registered player in identity order, fires
    /// `on_house_result` exactly once per observer with the resolved
    /// standings, then replaces the deck with a fresh shuffle for the
    /// next round. Returns the house total.
    pub fn deal_house(&mut self, delay_ms: u64) -> Result<i32, EngineError> {
        let delay = validate_delay(delay_ms)?;

        let outcome = self.run_turn(None, delay)?;
        let house_result = outcome.total;
        if let Some(bust) = outcome.bust_card {
            self.callbacks.each(|cb| cb.on_house_bust_card(&bust));
        }
        tracing::debug!(
            cards = outcome.kept.len(),
            total = house_result,
            "house turn complete"
        );

        let ids: Vec<PlayerId> = self.roster.keys().cloned().collect();
        for id in &ids {
            if let Some(player) = self.roster.get_mut(id) {
                Self::apply_win_loss(player, house_result);
            }
        }

        let standings: Vec<Player> = self.roster.values().cloned().collect();
        self.callbacks.each(|cb| cb.on_house_result(house_result, &standings));

        self.deck = Deck::shuffled_half_deck(&mut self.rng);
        Ok(house_result)
    }

    /// Apply win/loss resolution to one player.
    ///
    /// A result below the house total costs the staged bet, a result
    /// above it wins the staged bet, and a push leaves points untouched.
    /// Points may go negative; the bet stays staged until replaced or
    /// reset.
    pub fn apply_win_loss(player: &mut Player, house_result: i32) {
        if player.result() < house_result {
            player.set_points(player.points() - player.bet());
        } else if player.result() > house_result {
            player.set_points(player.points() + player.bet());
        }
    }

    /// Stage a bet for a registered player.
    ///
    /// Returns whether the bet was accepted (`0 < amount <= points`). An
    /// unknown id reports `false`, never an error.
    pub fn place_bet(&mut self, id: &PlayerId, amount: i32) -> bool {
        match self.roster.get_mut(id) {
            Some(player) => player.place_bet(amount),
            None => false,
        }
    }

    /// Shared deal/bust loop for players and the house.
    ///
    /// Draws from the front of the deck, announcing each kept card, until
    /// the running sum reaches [`BUST_LEVEL`]. Exactly 42 ends the turn
    /// cleanly; anything above it discards the last card from the sum and
    /// reports it as the bust card.
    fn run_turn(
        &mut self,
        acting: Option<&PlayerId>,
        delay: Duration,
    ) -> Result<TurnOutcome, EngineError> {
        let mut kept: SmallVec<[PlayingCard; 8]> = SmallVec::new();
        let mut card = self.deck.draw()?;
        let mut total = card.score();

        while total < BUST_LEVEL {
            match acting {
                Some(id) => {
                    if let Some(player) = self.roster.get(id) {
                        self.callbacks.each(|cb| cb.on_card_dealt(player, &card));
                    }
                }
                None => self.callbacks.each(|cb| cb.on_house_card_dealt(&card)),
            }
            kept.push(card);

            card = self.deck.draw()?;
            total += card.score();

            if self.pacer.pause(delay).is_err() {
                // best-effort pacing: an interrupted pause never fails the deal
                tracing::warn!(
                    delay_ms = delay.as_millis() as u64,
                    "deal pacing interrupted, continuing the round"
                );
            }
        }

        let bust_card = if total == BUST_LEVEL {
            None
        } else {
            total -= card.score();
            Some(card)
        };

        Ok(TurnOutcome { total, bust_card, kept })
    }

    // === Roster ===

    /// Register a player.
    ///
    /// Duplicate identity is a no-op: the existing entry is kept and
    /// `false` returned.
    pub fn add_player(&mut self, player: Player) -> bool {
        if self.roster.contains_key(player.id()) {
            return false;
        }
        self.roster.insert(player.id().clone(), player);
        true
    }

    /// Remove a player; returns whether the id was registered.
    pub fn remove_player(&mut self, id: &PlayerId) -> bool {
        self.roster.remove(id).is_some()
    }

    /// Look up a registered player.
    #[must_use]
    pub fn player(&self, id: &PlayerId) -> Option<&Player> {
        self.roster.get(id)
    }

    /// Iterate the roster in identity order.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.roster.values()
    }

    /// Number of registered players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.roster.len()
    }

    // === Observers ===

    /// Append an observer; notifications follow registration order.
    pub fn add_callback(&mut self, callback: Box<dyn GameEngineCallback>) -> CallbackId {
        self.callbacks.register(callback)
    }

    /// Remove the first observer registered under this handle.
    pub fn remove_callback(&mut self, id: CallbackId) -> bool {
        self.callbacks.remove(id)
    }

    // === Deck ===

    /// Produce a freshly shuffled 28-card half deck from the engine RNG.
    #[must_use]
    pub fn shuffled_half_deck(&mut self) -> Deck {
        Deck::shuffled_half_deck(&mut self.rng)
    }

    /// Replace the current deck, e.g. with a stacked one for scenarios.
    pub fn stack_deck(&mut self, deck: Deck) {
        self.deck = deck;
    }

    /// The deck that the next turn will draw from.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for GameEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameEngine")
            .field("deck_len", &self.deck.len())
            .field("players", &self.roster.len())
            .field("callbacks", &self.callbacks.len())
            .finish()
    }
}

fn validate_delay(delay_ms: u64) -> Result<Duration, EngineError> {
    if delay_ms > MAX_DEAL_DELAY_MS {
        return Err(EngineError::InvalidDelay(delay_ms));
    }
    Ok(Duration::from_millis(delay_ms))
}
