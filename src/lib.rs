//! A single-player blackjack simulator with optional `no_std` support.
//!
//! The crate provides a [`Round`] type that plays one hand against a
//! fixed-policy dealer and a [`Session`] type that carries the balance across
//! rounds. Input, output, and dealer pacing are supplied by the caller through
//! the [`InputProvider`], [`EventSink`], and [`Pacer`] traits.
//!
//! # Example
//!
//! ```
//! use bjsim::{InputError, NoPause, Prompt, Session, SessionOptions};
//!
//! let mut session = Session::new(SessionOptions::default(), 42);
//! // Nobody at the keyboard: every prompt fails, so the player stands.
//! let mut input = |_: Prompt| -> Result<String, InputError> { Err(InputError::Unavailable) };
//! let result = session.play_round(10.0, &mut input, &mut (), &mut NoPause).unwrap();
//! assert_eq!(session.balance(), 100.0 + result.payout);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod event;
pub mod game;
pub mod hand;
pub mod input;
pub mod options;
pub mod pacing;
pub mod result;
pub mod session;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use deck::Deck;
pub use error::{BetError, DealError, InputError, RoundError, SessionError};
pub use event::{Event, EventSink, Holder};
pub use game::{PlayerTurnState, Round, RoundState};
pub use hand::{Hand, is_blackjack, score};
pub use input::{BetInput, InputProvider, PlayerChoice, Prompt};
pub use options::SessionOptions;
#[cfg(feature = "std")]
pub use pacing::SleepPacer;
pub use pacing::{NoPause, Pacer};
pub use result::{BLACKJACK_PAYS, Outcome, RoundResult, resolve};
pub use session::{Session, SessionSummary};
