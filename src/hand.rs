//! Hand scoring and the hand representation shared by player and dealer.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;

const fn non_ace_value(rank: u8) -> u8 {
    if rank > 10 { 10 } else { rank }
}

/// Computes the total of a set of cards.
///
/// Non-aces count their rank, capped at 10. With `a` aces, the first ace is
/// counted as 11 and the rest as 1 when the non-ace sum is below `10 + a`;
/// otherwise every ace counts as 1. The threshold is taken against the
/// non-ace sum, so some hands with several aces score above 21 even though an
/// all-ones count would not.
///
/// The total is not capped; bust detection is left to the caller.
///
/// # Example
///
/// ```
/// use bjsim::{Card, Suit, score};
///
/// let ace = Card::new(1, Suit::Spades);
/// let nine = Card::new(9, Suit::Hearts);
/// assert_eq!(score(&[ace, nine, ace]), 21);
/// ```
#[must_use]
pub fn score(cards: &[Card]) -> u8 {
    let mut value: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.is_ace() {
            aces = aces.saturating_add(1);
        } else {
            value = value.saturating_add(non_ace_value(card.rank));
        }
    }

    if aces == 0 {
        return value;
    }

    let soft_threshold = 10u8.saturating_add(aces);
    if value < soft_threshold {
        value.saturating_add(soft_threshold)
    } else {
        value.saturating_add(aces)
    }
}

/// Returns whether the cards form a blackjack: exactly two cards totalling 21.
#[must_use]
pub fn is_blackjack(cards: &[Card]) -> bool {
    cards.len() == 2 && score(cards) == 21
}

/// A hand of cards held by the player or the dealer.
///
/// Hands only grow; cards are appended as they are dealt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates an empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the first card, shown face up for the dealer.
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Calculates the value of the hand. See [`score`].
    #[must_use]
    pub fn value(&self) -> u8 {
        score(&self.cards)
    }

    /// Returns whether the hand is a two-card 21.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        is_blackjack(&self.cards)
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > 21
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Extend<Card> for Hand {
    fn extend<T: IntoIterator<Item = Card>>(&mut self, iter: T) {
        self.cards.extend(iter);
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, card) in self.cards.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        write!(f, " = {}", self.value())
    }
}
