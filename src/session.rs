//! Betting session: balance bookkeeping across rounds.

use log::{debug, info};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::error::{BetError, SessionError};
use crate::event::{Event, EventSink};
use crate::game::Round;
use crate::input::{BetInput, InputProvider};
use crate::options::SessionOptions;
use crate::pacing::Pacer;
use crate::result::RoundResult;

/// Totals reported when a session ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionSummary {
    /// Balance at the start of the session.
    pub starting_balance: f64,
    /// Balance the player leaves with.
    pub final_balance: f64,
    /// Number of rounds settled.
    pub rounds_played: usize,
}

/// A single player's betting session against the dealer.
///
/// The session owns the balance and the random source; every round gets a
/// freshly shuffled deck drawn from that source.
#[derive(Debug, Clone)]
pub struct Session {
    /// Session options.
    options: SessionOptions,
    /// Current balance.
    balance: f64,
    /// Rounds settled so far.
    rounds_played: usize,
    /// Random number generator used for shuffling.
    rng: ChaCha8Rng,
}

impl Session {
    /// Creates a session whose shuffles are derived from the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::{Session, SessionOptions};
    ///
    /// let session = Session::new(SessionOptions::default(), 42);
    /// assert_eq!(session.balance(), 100.0);
    /// ```
    #[must_use]
    pub fn new(options: SessionOptions, seed: u64) -> Self {
        Self::with_rng(options, ChaCha8Rng::seed_from_u64(seed))
    }

    /// Creates a session seeded from operating system entropy.
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    #[must_use]
    pub fn from_entropy(options: SessionOptions) -> Self {
        Self::with_rng(options, ChaCha8Rng::from_os_rng())
    }

    const fn with_rng(options: SessionOptions, rng: ChaCha8Rng) -> Self {
        Self {
            balance: options.starting_balance,
            options,
            rounds_played: 0,
            rng,
        }
    }

    /// Returns the current balance.
    #[must_use]
    pub const fn balance(&self) -> f64 {
        self.balance
    }

    /// Returns the number of rounds settled.
    #[must_use]
    pub const fn rounds_played(&self) -> usize {
        self.rounds_played
    }

    /// Returns the session options.
    #[must_use]
    pub const fn options(&self) -> &SessionOptions {
        &self.options
    }

    /// Returns whether the balance is exhausted.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.balance <= 0.0
    }

    /// Checks that a bet can be placed: `0 < amount <= balance`.
    ///
    /// # Errors
    ///
    /// Returns an error describing why the bet is rejected.
    pub fn validate_bet(&self, amount: f64) -> Result<(), BetError> {
        if self.is_over() {
            return Err(BetError::SessionOver);
        }
        if !amount.is_finite() {
            return Err(BetError::NotFinite);
        }
        if amount <= 0.0 {
            return Err(BetError::NotPositive);
        }
        if amount > self.balance {
            return Err(BetError::ExceedsBalance);
        }
        Ok(())
    }

    /// Plays one round for the given bet and applies its payout.
    ///
    /// # Errors
    ///
    /// Returns an error if the bet is rejected or the round fails. The
    /// balance is unchanged in either case.
    pub fn play_round<I, E, P>(
        &mut self,
        bet: f64,
        input: &mut I,
        events: &mut E,
        pacer: &mut P,
    ) -> Result<RoundResult, SessionError>
    where
        I: InputProvider + ?Sized,
        E: EventSink + ?Sized,
        P: Pacer + ?Sized,
    {
        self.validate_bet(bet)?;

        let mut round = Round::new(bet, &mut self.rng);
        let result = round.play(input, events, pacer)?;

        self.balance += result.payout;
        self.rounds_played += 1;
        debug!(
            "round {} settled {:?}, payout {}, balance {}",
            self.rounds_played, result.outcome, result.payout, self.balance
        );
        events.emit(&Event::BalanceUpdated {
            balance: self.balance,
        });

        Ok(result)
    }

    /// Runs rounds until the balance is exhausted or the player quits.
    ///
    /// A non-numeric bet, or a failure reading one, quits. Invalid amounts
    /// are reported and asked for again.
    ///
    /// # Errors
    ///
    /// Returns an error if a round fails.
    pub fn run<I, E, P>(
        &mut self,
        input: &mut I,
        events: &mut E,
        pacer: &mut P,
    ) -> Result<SessionSummary, SessionError>
    where
        I: InputProvider + ?Sized,
        E: EventSink + ?Sized,
        P: Pacer + ?Sized,
    {
        while !self.is_over() {
            let BetInput::Amount(bet) = BetInput::read(input, self.balance) else {
                break;
            };

            match self.play_round(bet, input, events, pacer) {
                Ok(_) => {}
                Err(SessionError::Bet(err)) => {
                    debug!("rejected bet {bet}: {err}");
                    events.emit(&Event::InvalidBet {
                        amount: bet,
                        balance: self.balance,
                    });
                }
                Err(err) => return Err(err),
            }
        }

        info!(
            "session ended after {} round(s) with balance {}",
            self.rounds_played, self.balance
        );
        events.emit(&Event::SessionEnded {
            balance: self.balance,
        });

        Ok(SessionSummary {
            starting_balance: self.options.starting_balance,
            final_balance: self.balance,
            rounds_played: self.rounds_played,
        })
    }
}
