//! Notifications emitted for presentation.
//!
//! The engine never formats text. It reports what happened through an
//! [`EventSink`] and leaves rendering to the caller.

use crate::card::Card;
use crate::hand::Hand;
use crate::result::Outcome;

/// Who holds a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Holder {
    /// The player.
    Player,
    /// The dealer.
    Dealer,
}

/// Something the presentation layer may want to show.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event<'a> {
    /// Starting cards are on the table; only the dealer's up card is visible.
    InitialDeal {
        /// The player's two cards.
        player: &'a Hand,
        /// The dealer's face-up card.
        dealer_up: Card,
    },
    /// A blackjack was found in the starting hands.
    Blackjack {
        /// Who holds it.
        holder: Holder,
        /// The full hand, hole card included.
        hand: &'a Hand,
    },
    /// The player hit and received a card.
    PlayerDrew {
        /// The card received.
        card: Card,
        /// The hand after the hit.
        hand: &'a Hand,
    },
    /// The player's hit took them over 21.
    PlayerBusted {
        /// The busted total.
        value: u8,
    },
    /// The player's hit reached exactly 21; the turn ends.
    PlayerTwentyOne,
    /// The dealer turned over the hole card.
    DealerRevealed {
        /// The dealer's hand.
        hand: &'a Hand,
    },
    /// The dealer hit and received a card.
    DealerDrew {
        /// The card received.
        card: Card,
        /// The hand after the hit.
        hand: &'a Hand,
    },
    /// The round was settled.
    Outcome {
        /// The outcome.
        outcome: Outcome,
        /// Signed change to the balance.
        payout: f64,
    },
    /// A bet was rejected; the session prompts again.
    InvalidBet {
        /// The rejected amount.
        amount: f64,
        /// The balance at the time.
        balance: f64,
    },
    /// The balance changed after a round.
    BalanceUpdated {
        /// The new balance.
        balance: f64,
    },
    /// The session ended.
    SessionEnded {
        /// The balance the player leaves with.
        balance: f64,
    },
}

/// Receives engine notifications.
pub trait EventSink {
    /// Handles one event.
    fn emit(&mut self, event: &Event<'_>);
}

/// Discards every event.
impl EventSink for () {
    fn emit(&mut self, _event: &Event<'_>) {}
}
