//! Player identity and per-round state.
//!
//! A player carries a point balance, the currently staged bet, and the
//! result of their last turn. Identity ordering is lexicographic on the
//! id; the engine's roster is keyed by [`PlayerId`], so iteration order
//! follows identity order without any re-sorting.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique, lexicographically ordered player identifier.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(String);

impl PlayerId {
    /// Create a player id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw id string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PlayerId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Mutable player state: identity, points, staged bet, last round result.
///
/// The point balance may go negative through loss application; the engine
/// enforces no floor. The staged bet persists across rounds until it is
/// replaced by an accepted bet or reset explicitly.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    name: String,
    points: i32,
    bet: i32,
    result: i32,
}

impl Player {
    /// Create a player with a starting point balance, no staged bet, and
    /// no recorded result.
    pub fn new(id: impl Into<PlayerId>, name: impl Into<String>, points: i32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            points,
            bet: 0,
            result: 0,
        }
    }

    /// The player's identity.
    #[must_use]
    pub fn id(&self) -> &PlayerId {
        &self.id
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replace the display name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Current point balance.
    #[must_use]
    pub const fn points(&self) -> i32 {
        self.points
    }

    /// Replace the point balance.
    pub fn set_points(&mut self, points: i32) {
        self.points = points;
    }

    /// The currently staged bet.
    #[must_use]
    pub const fn bet(&self) -> i32 {
        self.bet
    }

    /// Stage a bet.
    ///
    /// Accepted iff `0 < amount <= points`. On rejection the previously
    /// staged bet is left unchanged and `false` is returned.
    pub fn place_bet(&mut self, amount: i32) -> bool {
        let accepted = amount > 0 && amount <= self.points;
        if accepted {
            self.bet = amount;
        }
        accepted
    }

    /// Clear the staged bet back to zero.
    pub fn reset_bet(&mut self) {
        self.bet = 0;
    }

    /// The last recorded turn result (0 until the first deal).
    #[must_use]
    pub const fn result(&self) -> i32 {
        self.result
    }

    /// Record a turn result.
    pub fn set_result(&mut self, result: i32) {
        self.result = result;
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Player: id={}, name={}, bet={}, points={}",
            self.id, self.name, self.bet, self.points
        )?;
        if self.result > 0 {
            write!(f, ", result={}", self.result)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bet_accepted_within_points() {
        let mut player = Player::new("1", "Alice", 100);
        assert!(player.place_bet(1));
        assert!(player.place_bet(100));
        assert_eq!(player.bet(), 100);
    }

    #[test]
    fn test_rejected_bet_keeps_previous_stake() {
        let mut player = Player::new("1", "Alice", 100);
        assert!(player.place_bet(30));

        assert!(!player.place_bet(0));
        assert!(!player.place_bet(-5));
        assert!(!player.place_bet(101));
        assert_eq!(player.bet(), 30);
    }

    #[test]
    fn test_reset_bet_clears_stake() {
        let mut player = Player::new("1", "Alice", 100);
        player.place_bet(40);
        player.reset_bet();
        assert_eq!(player.bet(), 0);
    }

    #[test]
    fn test_bet_against_negative_balance_rejected() {
        let mut player = Player::new("1", "Alice", -10);
        assert!(!player.place_bet(5));
        assert_eq!(player.bet(), 0);
    }

    #[test]
    fn test_id_ordering_is_lexicographic() {
        let a = PlayerId::new("A10");
        let b = PlayerId::new("A2");
        // lexicographic, not numeric: "A10" sorts before "A2"
        assert!(a < b);
    }

    #[test]
    fn test_display_hides_zero_result() {
        let mut player = Player::new("7", "Bob", 50);
        assert!(!player.to_string().contains("result"));
        player.set_result(21);
        assert!(player.to_string().contains("result=21"));
    }
}
