//! Round phase and the read-only snapshot handed to presentation code.

use alloc::vec::Vec;

use crate::card::CardView;
use crate::result::Outcome;

/// Round phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Waiting for a bet to start the first round.
    AwaitingBet,
    /// Waiting for the player to hit or stand.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round is over and chips have been settled.
    Settled,
}

impl Phase {
    /// Returns whether a round is mid-play.
    #[must_use]
    pub const fn is_in_progress(self) -> bool {
        matches!(self, Self::PlayerTurn | Self::DealerTurn)
    }
}

/// Snapshot of the table after an engine call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundState {
    /// Player's cards in the order they were dealt.
    pub player_cards: Vec<CardView>,
    /// Player's hand total.
    pub player_total: u8,
    /// Dealer's cards in the order they were dealt.
    pub dealer_cards: Vec<CardView>,
    /// Dealer's hand total.
    pub dealer_total: u8,
    /// Player's chip balance.
    pub chips: usize,
    /// Wager riding on the current or last round (0 before the first).
    pub bet: usize,
    /// Current phase.
    pub phase: Phase,
    /// Outcome, once settled.
    pub outcome: Option<Outcome>,
}

impl RoundState {
    /// Returns whether the player is broke between rounds and must either
    /// reset their chips or leave.
    #[must_use]
    pub const fn is_out_of_chips(&self) -> bool {
        self.chips == 0 && !self.phase.is_in_progress()
    }
}
