//! Round engine and state management.

use log::debug;
use rand::Rng;

use crate::deck::Deck;
use crate::error::RoundError;
use crate::event::{Event, EventSink, Holder};
use crate::hand::Hand;
use crate::input::InputProvider;
use crate::pacing::Pacer;
use crate::result::{Outcome, RoundResult, resolve};

mod actions;
mod dealer;
pub mod state;

pub use dealer::{DEALER_STANDS_ON, should_dealer_hit};
pub use state::{PlayerTurnState, RoundState};

/// A single round of blackjack.
///
/// The round owns its deck and both hands and is discarded once settled.
/// Play it step by step with [`Round::deal`], [`Round::hit`],
/// [`Round::stand`], and [`Round::dealer_play`], or all at once with
/// [`Round::play`].
#[derive(Debug, Clone)]
pub struct Round {
    /// Cards not yet dealt.
    deck: Deck,
    /// The player's hand.
    player: Hand,
    /// The dealer's hand.
    dealer: Hand,
    /// Amount wagered.
    bet: f64,
    /// Current phase.
    state: RoundState,
    /// Player turn progress.
    turn: PlayerTurnState,
    /// Outcome decided by the starting hands, if any.
    natural: Option<Outcome>,
    /// Whether the dealer played out their hand.
    dealer_played: bool,
}

impl Round {
    /// Creates a round with a freshly shuffled deck.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::{Round, RoundState};
    /// use rand::SeedableRng;
    /// use rand_chacha::ChaCha8Rng;
    ///
    /// let mut rng = ChaCha8Rng::seed_from_u64(7);
    /// let round = Round::new(10.0, &mut rng);
    /// assert_eq!(round.state(), RoundState::Ready);
    /// ```
    #[must_use]
    pub fn new<R: Rng + ?Sized>(bet: f64, rng: &mut R) -> Self {
        Self::with_deck(bet, Deck::shuffled(rng))
    }

    /// Creates a round that deals from the given deck.
    #[must_use]
    pub const fn with_deck(bet: f64, deck: Deck) -> Self {
        Self {
            deck,
            player: Hand::new(),
            dealer: Hand::new(),
            bet,
            state: RoundState::Ready,
            turn: PlayerTurnState::AwaitingChoice,
            natural: None,
            dealer_played: false,
        }
    }

    /// Deals the starting hands: two cards to the dealer, then two to the player.
    ///
    /// # Errors
    ///
    /// Returns an error if the round was already dealt or the deck runs out.
    pub fn deal(&mut self) -> Result<(), RoundError> {
        if self.state != RoundState::Ready {
            return Err(RoundError::InvalidState);
        }

        self.dealer.extend(self.deck.deal(2)?);
        self.player.extend(self.deck.deal(2)?);
        self.state = RoundState::Dealt;

        debug!(
            "dealt player {} vs dealer up card {:?}",
            self.player,
            self.dealer.up_card()
        );

        Ok(())
    }

    /// Checks the starting hands for blackjacks.
    ///
    /// If either side has one, the round is over and no turns are played.
    /// Otherwise the player's turn begins.
    ///
    /// # Errors
    ///
    /// Returns an error if the starting hands have not just been dealt.
    pub fn check_naturals(&mut self) -> Result<Option<Outcome>, RoundError> {
        if self.state != RoundState::Dealt {
            return Err(RoundError::InvalidState);
        }

        self.natural = Outcome::from_naturals(&self.player, &self.dealer);
        self.state = if let Some(outcome) = self.natural {
            debug!("starting hands settle the round: {outcome:?}");
            RoundState::RoundOver
        } else {
            RoundState::PlayerTurn
        };

        Ok(self.natural)
    }

    /// Plays the whole round with the given collaborators.
    ///
    /// Input failures are treated as a stand. Pacing is only applied between
    /// dealer decisions.
    ///
    /// # Errors
    ///
    /// Returns an error if the round was already started or the deck runs out.
    pub fn play<I, E, P>(
        &mut self,
        input: &mut I,
        events: &mut E,
        pacer: &mut P,
    ) -> Result<RoundResult, RoundError>
    where
        I: InputProvider + ?Sized,
        E: EventSink + ?Sized,
        P: Pacer + ?Sized,
    {
        self.deal()?;
        if let Some(&dealer_up) = self.dealer.up_card() {
            events.emit(&Event::InitialDeal {
                player: &self.player,
                dealer_up,
            });
        }

        match self.check_naturals()? {
            Some(Outcome::PlayerBlackjack) => events.emit(&Event::Blackjack {
                holder: Holder::Player,
                hand: &self.player,
            }),
            Some(Outcome::DealerBlackjack) => events.emit(&Event::Blackjack {
                holder: Holder::Dealer,
                hand: &self.dealer,
            }),
            Some(_) => {
                events.emit(&Event::Blackjack {
                    holder: Holder::Player,
                    hand: &self.player,
                });
                events.emit(&Event::Blackjack {
                    holder: Holder::Dealer,
                    hand: &self.dealer,
                });
            }
            None => {
                self.player_turn(input, events)?;
                if self.state == RoundState::DealerTurn {
                    self.dealer_turn(events, pacer)?;
                }
            }
        }

        let result = self.result()?;
        events.emit(&Event::Outcome {
            outcome: result.outcome,
            payout: result.payout,
        });
        Ok(result)
    }

    /// Returns the outcome once the round is over.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is still in progress.
    pub fn outcome(&self) -> Result<Outcome, RoundError> {
        if self.state != RoundState::RoundOver {
            return Err(RoundError::InvalidState);
        }

        let outcome = self.natural.unwrap_or_else(|| {
            if self.turn == PlayerTurnState::Busted {
                Outcome::PlayerLoss
            } else {
                resolve(&self.player, &self.dealer)
            }
        });
        Ok(outcome)
    }

    /// Returns the settled result of the round.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is still in progress.
    pub fn result(&self) -> Result<RoundResult, RoundError> {
        let outcome = self.outcome()?;
        Ok(RoundResult {
            outcome,
            bet: self.bet,
            payout: outcome.payout(self.bet),
            player_value: self.player.value(),
            dealer_value: self.dealer.value(),
            dealer_played: self.dealer_played,
        })
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the player's turn state.
    #[must_use]
    pub const fn turn_state(&self) -> PlayerTurnState {
        self.turn
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &Hand {
        &self.dealer
    }

    /// Returns the amount wagered.
    #[must_use]
    pub const fn bet(&self) -> f64 {
        self.bet
    }

    /// Returns the number of cards left in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }
}
