//! Player records and the chip economy.

use alloc::string::String;

use crate::error::BetError;
use crate::hand::Hand;

/// Chips a new player sits down with.
pub const STARTING_CHIPS: usize = 100;

/// A party at the table: the human player or the dealer.
///
/// Wagers are deducted from `chips` when placed, so settlement only ever
/// credits. The dealer is a `Player` that never bets and holds no chips.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    hand: Hand,
    chips: usize,
}

impl Player {
    /// Creates a player with the given chip balance.
    #[must_use]
    pub fn new(name: impl Into<String>, chips: usize) -> Self {
        Self {
            name: name.into(),
            hand: Hand::new(),
            chips,
        }
    }

    /// Creates a dealer record (no chips).
    #[must_use]
    pub fn dealer(name: impl Into<String>) -> Self {
        Self::new(name, 0)
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the player's current hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    pub(crate) const fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    /// Discards the current hand.
    pub(crate) fn clear_hand(&mut self) {
        self.hand = Hand::new();
    }

    /// Returns the current chip balance.
    #[must_use]
    pub const fn chips(&self) -> usize {
        self.chips
    }

    /// Commits a wager, deducting it from the balance.
    ///
    /// Returns the committed amount. On error the balance is untouched.
    ///
    /// # Errors
    ///
    /// Returns [`BetError::InvalidBet`] for a zero bet and
    /// [`BetError::InsufficientChips`] if `amount` exceeds the balance.
    pub const fn place_bet(&mut self, amount: usize) -> Result<usize, BetError> {
        if amount == 0 {
            return Err(BetError::InvalidBet);
        }
        if amount > self.chips {
            return Err(BetError::InsufficientChips);
        }

        self.chips -= amount;
        Ok(amount)
    }

    /// Pays out a won wager: the stake comes back plus equal winnings.
    pub const fn settle_win(&mut self, amount: usize) {
        self.chips = self.chips.saturating_add(amount.saturating_mul(2));
    }

    /// Returns the stake of a tied round.
    pub const fn settle_push(&mut self, amount: usize) {
        self.chips = self.chips.saturating_add(amount);
    }

    /// A lost wager was already deducted when it was placed.
    pub const fn settle_loss(&mut self) {}

    pub(crate) const fn set_chips(&mut self, chips: usize) {
        self.chips = chips;
    }
}

/// Parses a bet typed by the user.
///
/// Surrounding whitespace is ignored. Anything that is not a positive whole
/// number is rejected.
///
/// # Errors
///
/// Returns [`BetError::InvalidBet`] for empty, negative, zero, or non-numeric
/// input.
///
/// # Example
///
/// ```
/// use bjcore::{BetError, parse_bet};
///
/// assert_eq!(parse_bet(" 25 "), Ok(25));
/// assert_eq!(parse_bet("0"), Err(BetError::InvalidBet));
/// assert_eq!(parse_bet("ten"), Err(BetError::InvalidBet));
/// ```
pub fn parse_bet(input: &str) -> Result<usize, BetError> {
    match input.trim().parse::<usize>() {
        Ok(0) | Err(_) => Err(BetError::InvalidBet),
        Ok(amount) => Ok(amount),
    }
}
