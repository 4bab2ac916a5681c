//! Player input collaborator and the parsing of its answers.

use alloc::string::String;

use log::warn;

use crate::error::InputError;

/// What the engine is asking for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Prompt {
    /// A bet amount for the next round.
    Bet {
        /// The current balance.
        balance: f64,
    },
    /// Hit or stand during the player's turn.
    HitOrStand,
}

/// Supplies one trimmed line of text per request.
///
/// Reads block until a line is available. Failures are not fatal: the engine
/// substitutes a default answer.
pub trait InputProvider {
    /// Reads one line in answer to `prompt`.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::Unavailable`] if no line could be read.
    fn read_line(&mut self, prompt: Prompt) -> Result<String, InputError>;
}

impl<F> InputProvider for F
where
    F: FnMut(Prompt) -> Result<String, InputError>,
{
    fn read_line(&mut self, prompt: Prompt) -> Result<String, InputError> {
        self(prompt)
    }
}

/// The player's decision during their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerChoice {
    /// Take another card.
    Hit,
    /// Keep the current hand.
    Stand,
}

impl PlayerChoice {
    /// Parses a line of input. `h` or `hit` (any case) hits; anything else stands.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::PlayerChoice;
    ///
    /// assert_eq!(PlayerChoice::parse("H"), PlayerChoice::Hit);
    /// assert_eq!(PlayerChoice::parse("s"), PlayerChoice::Stand);
    /// assert_eq!(PlayerChoice::parse(""), PlayerChoice::Stand);
    /// ```
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.eq_ignore_ascii_case("h") || line.eq_ignore_ascii_case("hit") {
            Self::Hit
        } else {
            Self::Stand
        }
    }

    /// Asks the input collaborator for a choice. A failed read stands.
    pub fn read<I: InputProvider + ?Sized>(input: &mut I) -> Self {
        match input.read_line(Prompt::HitOrStand) {
            Ok(line) => Self::parse(&line),
            Err(err) => {
                warn!("reading hit/stand choice failed, standing: {err}");
                Self::Stand
            }
        }
    }
}

/// The player's answer to a bet prompt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BetInput {
    /// A numeric bet, not yet validated against the balance.
    Amount(f64),
    /// Anything that is not a number ends the session.
    Quit,
}

impl BetInput {
    /// Parses a line of input.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::BetInput;
    ///
    /// assert_eq!(BetInput::parse("12.5"), BetInput::Amount(12.5));
    /// assert_eq!(BetInput::parse("q"), BetInput::Quit);
    /// ```
    #[must_use]
    pub fn parse(line: &str) -> Self {
        line.trim().parse().map_or(Self::Quit, Self::Amount)
    }

    /// Asks the input collaborator for a bet. A failed read quits.
    pub fn read<I: InputProvider + ?Sized>(input: &mut I, balance: f64) -> Self {
        match input.read_line(Prompt::Bet { balance }) {
            Ok(line) => Self::parse(&line),
            Err(err) => {
                warn!("reading bet failed, quitting: {err}");
                Self::Quit
            }
        }
    }
}
