use alloc::vec::Vec;

use log::debug;

use crate::card::Card;
use crate::error::RoundError;
use crate::event::{Event, EventSink};
use crate::hand::{Hand, score};
use crate::pacing::Pacer;

use super::{Round, RoundState};

/// Dealer stands once their total reaches this value.
pub const DEALER_STANDS_ON: u8 = 17;

/// Returns whether the dealer must take another card.
///
/// The dealer hits on 16 or less and stands on 17 or more, soft or hard.
///
/// # Example
///
/// ```
/// use bjsim::{Card, Suit};
/// use bjsim::game::should_dealer_hit;
///
/// let ten = Card::new(10, Suit::Clubs);
/// assert!(should_dealer_hit(&[ten, Card::new(6, Suit::Hearts)]));
/// assert!(!should_dealer_hit(&[ten, Card::new(7, Suit::Hearts)]));
/// ```
#[must_use]
pub fn should_dealer_hit(cards: &[Card]) -> bool {
    score(cards) < DEALER_STANDS_ON
}

impl Round {
    /// Dealer plays their hand according to the fixed policy.
    ///
    /// The pacer is invoked before every decision, including the final one
    /// to stand. Bust is not checked here; it is settled with the outcome.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in dealer turn state or the deck
    /// is empty while the dealer must draw.
    pub fn dealer_play<P: Pacer + ?Sized>(
        &mut self,
        pacer: &mut P,
    ) -> Result<Vec<Card>, RoundError> {
        let mut drawn_cards = Vec::new();
        self.dealer_turn_with(pacer, |card, _| drawn_cards.push(card))?;
        Ok(drawn_cards)
    }

    pub(super) fn dealer_turn<E, P>(
        &mut self,
        events: &mut E,
        pacer: &mut P,
    ) -> Result<(), RoundError>
    where
        E: EventSink + ?Sized,
        P: Pacer + ?Sized,
    {
        if self.state == RoundState::DealerTurn {
            events.emit(&Event::DealerRevealed { hand: &self.dealer });
        }
        self.dealer_turn_with(pacer, |card, hand| {
            events.emit(&Event::DealerDrew { card, hand });
        })
    }

    fn dealer_turn_with<P, F>(&mut self, pacer: &mut P, mut on_draw: F) -> Result<(), RoundError>
    where
        P: Pacer + ?Sized,
        F: FnMut(Card, &Hand),
    {
        if self.state != RoundState::DealerTurn {
            return Err(RoundError::InvalidState);
        }

        loop {
            pacer.pause();
            if !should_dealer_hit(self.dealer.cards()) {
                break;
            }

            let card = self.deck.deal_one()?;
            self.dealer.add_card(card);
            debug!("dealer hits {card}, total {}", self.dealer.value());
            on_draw(card, &self.dealer);
        }

        debug!("dealer stands on {}", self.dealer.value());
        self.dealer_played = true;
        self.state = RoundState::RoundOver;

        Ok(())
    }
}
