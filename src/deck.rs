//! Deck construction and draw-one semantics.
//!
//! A deck is an ordered sequence of cards drawn strictly from the front.
//! The engine rebuilds a fresh shuffled deck after every house deal; a
//! deck instance never survives across rounds.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::{PlayingCard, Rank, Suit};
use crate::errors::EngineError;
use crate::rng::GameRng;

/// Number of cards in the half deck: 4 suits × 7 scoring ranks.
pub const HALF_DECK_SIZE: usize = 28;

/// An ordered, finite sequence of cards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vector<PlayingCard>,
}

impl Deck {
    /// Build the 28-card half deck and shuffle it uniformly.
    ///
    /// The multiset of cards is always exactly
    /// `Suit::ALL × Rank::SCORING`; only the order varies.
    #[must_use]
    pub fn shuffled_half_deck(rng: &mut GameRng) -> Self {
        let mut cards: Vec<PlayingCard> = Suit::ALL
            .iter()
            .flat_map(|&suit| Rank::SCORING.iter().map(move |&rank| PlayingCard::new(suit, rank)))
            .collect();
        rng.shuffle(&mut cards);
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Build a deck with a fixed card order.
    ///
    /// The first card passed in is the first card drawn. Used for
    /// stacked-deck scenarios and tests.
    #[must_use]
    pub fn from_cards(cards: impl IntoIterator<Item = PlayingCard>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Remove and return the front card.
    ///
    /// Fails with [`EngineError::DeckExhausted`] on an empty deck instead
    /// of leaving the behavior undefined.
    pub fn draw(&mut self) -> Result<PlayingCard, EngineError> {
        self.cards.pop_front().ok_or(EngineError::DeckExhausted)
    }

    /// Number of cards left to draw.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the deck has been fully drawn.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
