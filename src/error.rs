//! Error types for engine operations.

use thiserror::Error;

use crate::card::Card;

/// Errors that can occur when placing a bet or starting a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Bet amount is zero or not a number.
    #[error("bet must be a positive whole number")]
    InvalidBet,
    /// Bet exceeds the player's chips.
    #[error("insufficient chips")]
    InsufficientChips,
    /// A round is still being played.
    #[error("a round is already in progress")]
    RoundInProgress,
    /// The supplied deck cannot cover the opening deal.
    #[error("not enough cards in the deck")]
    NotEnoughCards,
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// No round has been started.
    #[error("no round has been started")]
    NoActiveRound,
    /// The round has already been settled.
    #[error("round is already settled")]
    RoundAlreadySettled,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    EmptyDeck,
}

impl From<DeckError> for ActionError {
    fn from(_: DeckError) -> Self {
        Self::EmptyDeck
    }
}

/// Errors that can occur when building or drawing from a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// No cards left to draw.
    #[error("deck is empty")]
    Empty,
    /// A stacked deck named the same card twice.
    #[error("card {0} appears more than once")]
    DuplicateCard(Card),
}

/// Errors that can occur when restoring the starting chips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ResetError {
    /// The player still has chips to play with.
    #[error("player still has chips")]
    ChipsRemaining,
    /// A round is still being played.
    #[error("a round is already in progress")]
    RoundInProgress,
}
