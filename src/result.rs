//! Round outcomes and payouts.

/// How a settled round ended, from the player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Dealer busted or the player finished higher.
    PlayerWin,
    /// Player busted or the dealer finished higher.
    DealerWin,
    /// Equal totals.
    Push,
}

impl Outcome {
    /// Decides the outcome of a round the player stood on.
    #[must_use]
    pub const fn from_totals(player_total: u8, dealer_total: u8, dealer_bust: bool) -> Self {
        if dealer_bust || player_total > dealer_total {
            Self::PlayerWin
        } else if player_total < dealer_total {
            Self::DealerWin
        } else {
            Self::Push
        }
    }

    /// Chips credited back to the player for a wager of `bet`.
    #[must_use]
    pub const fn payout(self, bet: usize) -> usize {
        match self {
            Self::PlayerWin => bet.saturating_mul(2),
            Self::Push => bet,
            Self::DealerWin => 0,
        }
    }
}
