//! A single 52-card deck owned by a round.

use alloc::vec::Vec;

use log::trace;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Suit};
use crate::error::DealError;

/// An ordered sequence of cards dealt from the front.
///
/// Cards removed by [`Deck::deal`] are never returned; build a new deck to
/// start over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates an unshuffled deck with every rank/suit combination.
    ///
    /// Cards are generated rank-major, suit-minor: `A♠ A♥ A♦ A♣ 2♠ ...`.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::{Card, Deck, DECK_SIZE, Suit};
    ///
    /// let deck = Deck::new();
    /// assert_eq!(deck.len(), DECK_SIZE);
    /// assert_eq!(deck.cards()[0], Card::new(1, Suit::Spades));
    /// ```
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for rank in 1..=13 {
            for suit in Suit::ALL {
                cards.push(Card::new(rank, suit));
            }
        }

        Self { cards }
    }

    /// Creates a deck that deals the given cards in order.
    ///
    /// Useful for replaying a known shuffle or stacking a deck in tests.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Creates a full deck and shuffles it with the given random source.
    #[must_use]
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::new();
        deck.shuffle(rng);
        deck
    }

    /// Applies a uniform random permutation to the remaining cards.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
        trace!("shuffled {} cards", self.cards.len());
    }

    /// Removes and returns the first `count` cards.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::DeckExhausted`] if fewer than `count` cards remain.
    /// The deck is left untouched in that case.
    pub fn deal(&mut self, count: usize) -> Result<Vec<Card>, DealError> {
        if count > self.cards.len() {
            return Err(DealError::DeckExhausted {
                requested: count,
                remaining: self.cards.len(),
            });
        }

        Ok(self.cards.drain(..count).collect())
    }

    /// Removes and returns the next card.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::DeckExhausted`] if the deck is empty.
    pub fn deal_one(&mut self) -> Result<Card, DealError> {
        if self.cards.is_empty() {
            return Err(DealError::DeckExhausted {
                requested: 1,
                remaining: 0,
            });
        }

        let card = self.cards.remove(0);
        trace!("dealt {card}");
        Ok(card)
    }

    /// Returns the remaining cards in dealing order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
