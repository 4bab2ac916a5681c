//! Round and turn state types.

/// Phase of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// Deck is ready; no cards dealt yet.
    Ready,
    /// Starting hands dealt; blackjacks not yet checked.
    Dealt,
    /// Waiting for the player's hit/stand decisions.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round has ended and the outcome can be read.
    RoundOver,
}

/// State of the player's turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerTurnState {
    /// The player may hit or stand.
    AwaitingChoice,
    /// The player went over 21 and lost the round.
    Busted,
    /// The player chose to stand.
    Standing,
    /// The player reached exactly 21 by hitting; no further hits.
    TwentyOne,
}

impl PlayerTurnState {
    /// Returns whether the turn is over.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::AwaitingChoice)
    }
}
