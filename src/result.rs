//! Round outcomes and payouts.

use crate::hand::Hand;

/// Blackjack payout ratio applied to the bet.
pub const BLACKJACK_PAYS: f64 = 1.5;

/// Result of a round from the player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Player was dealt a blackjack and the dealer was not.
    PlayerBlackjack,
    /// Dealer was dealt a blackjack and the player was not.
    DealerBlackjack,
    /// Tie, including both sides being dealt a blackjack.
    Push,
    /// Player beat the dealer or the dealer busted.
    PlayerWin,
    /// Player busted or the dealer finished higher.
    PlayerLoss,
}

impl Outcome {
    /// Returns the signed change to the player's balance for the given bet.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::Outcome;
    ///
    /// assert_eq!(Outcome::PlayerBlackjack.payout(10.0), 15.0);
    /// assert_eq!(Outcome::DealerBlackjack.payout(10.0), -10.0);
    /// ```
    #[must_use]
    pub fn payout(self, bet: f64) -> f64 {
        match self {
            Self::PlayerBlackjack => bet * BLACKJACK_PAYS,
            Self::PlayerWin => bet,
            Self::Push => 0.0,
            Self::DealerBlackjack | Self::PlayerLoss => -bet,
        }
    }

    /// Checks the starting hands for blackjacks.
    ///
    /// Returns `None` when neither side has one and the turns must be played.
    #[must_use]
    pub fn from_naturals(player: &Hand, dealer: &Hand) -> Option<Self> {
        match (player.is_blackjack(), dealer.is_blackjack()) {
            (true, false) => Some(Self::PlayerBlackjack),
            (true, true) => Some(Self::Push),
            (false, true) => Some(Self::DealerBlackjack),
            (false, false) => None,
        }
    }
}

/// Compares two finished hands.
///
/// A busted player always loses. Otherwise equal totals push, and the player
/// wins with the higher total or when the dealer busts.
#[must_use]
pub fn resolve(player: &Hand, dealer: &Hand) -> Outcome {
    let player_value = player.value();
    let dealer_value = dealer.value();

    if player_value > 21 {
        Outcome::PlayerLoss
    } else if player_value == dealer_value {
        Outcome::Push
    } else if player_value > dealer_value || dealer_value > 21 {
        Outcome::PlayerWin
    } else {
        Outcome::PlayerLoss
    }
}

/// Summary of a finished round.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundResult {
    /// The outcome of the round.
    pub outcome: Outcome,
    /// The amount wagered.
    pub bet: f64,
    /// Signed change to the balance.
    pub payout: f64,
    /// The player's final hand value.
    pub player_value: u8,
    /// The dealer's final hand value.
    pub dealer_value: u8,
    /// Whether the dealer played out their hand.
    pub dealer_played: bool,
}
