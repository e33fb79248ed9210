//! Logging observer.
//!
//! [`LoggingCallback`] is a stateless notification sink that renders the
//! round's life cycle through `tracing`: intermediate cards at DEBUG,
//! bust cards and final results at INFO, and the full standings list
//! after the house result. Installing a subscriber is the embedder's
//! concern; without one these events are dropped for free.

use tracing::{debug, info};

use crate::cards::PlayingCard;
use crate::engine::callbacks::GameEngineCallback;
use crate::players::Player;

/// Observer that logs every round event.
#[derive(Clone, Copy, Debug, Default)]
pub struct LoggingCallback;

impl GameEngineCallback for LoggingCallback {
    fn on_card_dealt(&mut self, player: &Player, card: &PlayingCard) {
        debug!(player = %player.name(), card = %card, score = card.score(), "card dealt");
    }

    fn on_bust_card(&mut self, player: &Player, card: &PlayingCard) {
        info!(player = %player.name(), card = %card, "bust card discarded");
    }

    fn on_player_result(&mut self, player: &Player, result: i32) {
        info!(player = %player.name(), result, "final player result");
    }

    fn on_house_card_dealt(&mut self, card: &PlayingCard) {
        debug!(card = %card, score = card.score(), "card dealt to house");
    }

    fn on_house_bust_card(&mut self, card: &PlayingCard) {
        info!(card = %card, "house bust card discarded");
    }

    fn on_house_result(&mut self, result: i32, players: &[Player]) {
        info!(result, "house final result");
        for player in players {
            info!(standing = %player, "round standing");
        }
    }
}
