use rand::Rng;

use crate::deck::Deck;
use crate::error::{BetError, DeckError};

use super::{Phase, Round, RoundEngine, RoundState};

/// Cards consumed by the opening deal: two for the player, one for the dealer.
const OPENING_DEAL: usize = 3;

impl<R: Rng> RoundEngine<R> {
    /// Places a bet and deals a new round from a freshly shuffled deck.
    ///
    /// The player receives two cards and the dealer one.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is still in progress, the bet is zero, or
    /// the bet exceeds the player's chips. Nothing changes on error.
    pub fn start_round(&mut self, bet: usize) -> Result<RoundState, BetError> {
        self.ensure_can_bet()?;
        let wager = self.player.place_bet(bet)?;
        let deck = Deck::new(&mut self.rng);

        self.deal(wager, deck)
    }

    /// Places a bet and deals a new round from the given deck.
    ///
    /// Behaves like [`start_round`](Self::start_round) but skips the shuffle,
    /// so a known sequence of cards can be replayed.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is still in progress, the bet is invalid,
    /// or `deck` holds fewer cards than the opening deal needs. Nothing
    /// changes on error.
    pub fn start_round_with_deck(&mut self, bet: usize, deck: Deck) -> Result<RoundState, BetError> {
        self.ensure_can_bet()?;
        if deck.len() < OPENING_DEAL {
            return Err(BetError::NotEnoughCards);
        }
        let wager = self.player.place_bet(bet)?;

        self.deal(wager, deck)
    }

    fn ensure_can_bet(&self) -> Result<(), BetError> {
        if self.phase().is_in_progress() {
            return Err(BetError::RoundInProgress);
        }
        Ok(())
    }

    fn deal(&mut self, bet: usize, mut deck: Deck) -> Result<RoundState, BetError> {
        self.player.clear_hand();
        self.dealer.clear_hand();

        self.deal_opening(&mut deck)
            .map_err(|_| BetError::NotEnoughCards)?;

        log::debug!(
            "round started: bet {bet}, player {}, dealer shows {}",
            self.player.hand(),
            self.dealer.hand()
        );

        self.round = Some(Round {
            deck,
            bet,
            phase: Phase::PlayerTurn,
            outcome: None,
        });

        Ok(self.state())
    }

    fn deal_opening(&mut self, deck: &mut Deck) -> Result<(), DeckError> {
        self.player.hand_mut().add_card(deck.draw_one()?);
        self.player.hand_mut().add_card(deck.draw_one()?);
        self.dealer.hand_mut().add_card(deck.draw_one()?);
        Ok(())
    }
}
