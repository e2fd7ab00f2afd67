use rand::Rng;

use crate::error::ActionError;
use crate::result::Outcome;

use super::{Phase, RoundEngine};

/// The dealer draws below this total and stands on it or anything higher,
/// soft totals included.
pub const DEALER_STANDS_ON: u8 = 17;

impl<R: Rng> RoundEngine<R> {
    /// Dealer plays their hand according to the rules.
    ///
    /// Draws are made against copies of the deck and the dealer's hand and
    /// committed together, so an exhausted deck leaves both untouched.
    pub(super) fn dealer_play(&mut self) -> Result<(), ActionError> {
        let round = self.round.as_mut().ok_or(ActionError::NoActiveRound)?;

        let mut deck = round.deck.clone();
        let mut hand = self.dealer.hand().clone();

        while hand.total() < DEALER_STANDS_ON {
            let card = deck.draw_one()?;
            hand.add_card(card);
            log::debug!("dealer draws {card}, total {}", hand.total());
        }

        round.deck = deck;
        *self.dealer.hand_mut() = hand;

        Ok(())
    }

    /// Credits the player according to `outcome` and closes the round.
    pub(super) fn settle(&mut self, outcome: Outcome) {
        let Some(bet) = self.round.as_ref().map(|round| round.bet) else {
            return;
        };

        match outcome {
            Outcome::PlayerWin => self.player.settle_win(bet),
            Outcome::Push => self.player.settle_push(bet),
            Outcome::DealerWin => self.player.settle_loss(),
        }

        if let Some(round) = self.round.as_mut() {
            round.outcome = Some(outcome);
        }
        self.set_phase(Phase::Settled);

        log::info!(
            "round settled: {outcome:?} (player {}, dealer {}), bet {bet}, paid {}, chips {}",
            self.player.hand().total(),
            self.dealer.hand().total(),
            outcome.payout(bet),
            self.player.chips()
        );
    }
}
