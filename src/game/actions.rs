use rand::Rng;

use crate::error::ActionError;
use crate::result::Outcome;

use super::{Phase, RoundEngine, RoundState};

impl<R: Rng> RoundEngine<R> {
    fn ensure_player_turn(&self) -> Result<(), ActionError> {
        match self.phase() {
            Phase::PlayerTurn => Ok(()),
            Phase::AwaitingBet => Err(ActionError::NoActiveRound),
            Phase::DealerTurn | Phase::Settled => Err(ActionError::RoundAlreadySettled),
        }
    }

    pub(super) fn set_phase(&mut self, phase: Phase) {
        if let Some(round) = self.round.as_mut() {
            round.phase = phase;
        }
    }

    /// Player action: Hit (draw a card).
    ///
    /// Going over 21 settles the round as a dealer win straight away; the
    /// dealer does not draw.
    ///
    /// # Errors
    ///
    /// Returns an error if no round has been started, the round is already
    /// settled, or the deck is empty.
    pub fn hit(&mut self) -> Result<RoundState, ActionError> {
        self.ensure_player_turn()?;

        let round = self.round.as_mut().ok_or(ActionError::NoActiveRound)?;
        let card = round.deck.draw_one()?;

        let hand = self.player.hand_mut();
        hand.add_card(card);
        log::debug!("player draws {card}, total {}", hand.total());

        if hand.is_bust() {
            self.settle(Outcome::DealerWin);
        }

        Ok(self.state())
    }

    /// Player action: Stand (keep current hand).
    ///
    /// The dealer then plays out their hand and the round is settled.
    ///
    /// # Errors
    ///
    /// Returns an error if no round has been started, the round is already
    /// settled, or the deck runs out while the dealer must draw. In the last
    /// case the round stays on the player's turn, untouched.
    pub fn stand(&mut self) -> Result<RoundState, ActionError> {
        self.ensure_player_turn()?;
        log::debug!("player stands on {}", self.player.hand().total());

        self.set_phase(Phase::DealerTurn);
        if let Err(err) = self.dealer_play() {
            self.set_phase(Phase::PlayerTurn);
            return Err(err);
        }

        let dealer = self.dealer.hand();
        let outcome = Outcome::from_totals(
            self.player.hand().total(),
            dealer.total(),
            dealer.is_bust(),
        );
        self.settle(outcome);

        Ok(self.state())
    }
}
