//! The 52-card deck a round is dealt from.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DeckError;

/// An ordered stack of cards. The top of the deck is the end of the vector.
///
/// Every deck starts out holding each of the 52 cards exactly once and only
/// ever shrinks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a full deck and shuffles it with `rng`.
    ///
    /// Every permutation is equally likely for a uniform `rng`.
    #[must_use]
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::ordered();
        deck.cards.shuffle(rng);
        deck
    }

    /// Creates a full, unshuffled deck.
    ///
    /// Suits come in [`Suit::ALL`] order and ranks Two through Ace within each
    /// suit, so the first draw is the Ace of Clubs.
    #[must_use]
    pub fn ordered() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }

        Self { cards }
    }

    /// Creates a full deck whose first draws are `top`, in order.
    ///
    /// The cards not named in `top` follow in [`Deck::ordered`] draw order.
    /// Useful for replaying a known round.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::DuplicateCard`] if `top` names a card twice.
    pub fn stacked(top: &[Card]) -> Result<Self, DeckError> {
        let mut rest = Self::ordered().cards;

        for card in top {
            let index = rest
                .iter()
                .position(|c| c == card)
                .ok_or(DeckError::DuplicateCard(*card))?;
            rest.remove(index);
        }

        rest.extend(top.iter().rev());
        Ok(Self { cards: rest })
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] when no cards remain.
    pub fn draw_one(&mut self) -> Result<Card, DeckError> {
        self.cards.pop().ok_or(DeckError::Empty)
    }

    /// Returns the remaining cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
