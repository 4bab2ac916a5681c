//! Error types for engine and session operations.

use thiserror::Error;

/// Errors that can occur while dealing from a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// More cards were requested than remain in the deck.
    #[error("deck exhausted: requested {requested} card(s), {remaining} remaining")]
    DeckExhausted {
        /// Number of cards requested.
        requested: usize,
        /// Number of cards left in the deck.
        remaining: usize,
    },
}

/// Errors that can occur while playing a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// The round is not in the right phase for this operation.
    #[error("invalid round state for this operation")]
    InvalidState,
    /// The deck could not supply a card.
    #[error(transparent)]
    Deal(#[from] DealError),
}

/// Errors that can occur when placing a bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Bet amount is zero or negative.
    #[error("bet must be greater than zero")]
    NotPositive,
    /// Bet amount is not a finite number.
    #[error("bet must be a finite number")]
    NotFinite,
    /// Bet amount exceeds the current balance.
    #[error("bet exceeds balance")]
    ExceedsBalance,
    /// The session has no balance left to bet with.
    #[error("session is over")]
    SessionOver,
}

/// Errors reported by an input collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    /// No line could be read.
    #[error("input unavailable")]
    Unavailable,
}

/// Errors that can occur while driving a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The bet was rejected.
    #[error(transparent)]
    Bet(#[from] BetError),
    /// The round failed.
    #[error(transparent)]
    Round(#[from] RoundError),
}
