//! Round engine and session state.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::ResetError;
use crate::options::TableOptions;
use crate::player::Player;
use crate::result::Outcome;

mod actions;
mod bet;
mod dealer;
pub mod state;

pub use dealer::DEALER_STANDS_ON;
pub use state::{Phase, RoundState};

/// Bookkeeping for the round being played.
#[derive(Debug, Clone)]
struct Round {
    deck: Deck,
    bet: usize,
    phase: Phase,
    outcome: Option<Outcome>,
}

/// A single-player blackjack engine.
///
/// The engine owns the session: the human player and their chips, the
/// dealer, the random source, and the round in play. Each round is dealt from
/// a freshly shuffled 52-card deck.
///
/// The dealer is dealt a single card at the start of a round and plays out
/// the rest after the player stands; there is no hole card.
#[derive(Debug)]
pub struct RoundEngine<R = ChaCha8Rng> {
    options: TableOptions,
    player: Player,
    dealer: Player,
    round: Option<Round>,
    rng: R,
}

impl RoundEngine<ChaCha8Rng> {
    /// Creates a new engine with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcore::{Phase, RoundEngine, TableOptions};
    ///
    /// let engine = RoundEngine::new(TableOptions::default(), 42);
    /// assert_eq!(engine.phase(), Phase::AwaitingBet);
    /// assert_eq!(engine.player().chips(), 100);
    /// ```
    #[must_use]
    pub fn new(options: TableOptions, seed: u64) -> Self {
        Self::with_rng(options, ChaCha8Rng::seed_from_u64(seed))
    }

    /// Creates a new engine seeded from the operating system.
    ///
    /// # Panics
    ///
    /// Panics if the operating system's randomness source is unavailable.
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    #[must_use]
    pub fn from_entropy(options: TableOptions) -> Self {
        Self::with_rng(options, ChaCha8Rng::from_os_rng())
    }
}

impl<R: Rng> RoundEngine<R> {
    /// Creates a new engine drawing its shuffles from `rng`.
    #[must_use]
    pub fn with_rng(options: TableOptions, rng: R) -> Self {
        let player = Player::new(options.player_name.clone(), options.starting_chips);
        Self::with_player(options, player, rng)
    }

    /// Resumes a session for an existing player.
    #[must_use]
    pub fn with_player(options: TableOptions, player: Player, rng: R) -> Self {
        let dealer = Player::dealer(options.dealer_name.clone());

        Self {
            options,
            player,
            dealer,
            round: None,
            rng,
        }
    }

    /// Ends the session and hands back the player record.
    ///
    /// A wager still on the table is forfeited.
    #[must_use]
    pub fn into_player(self) -> Player {
        self.player
    }

    /// Returns the table options.
    #[must_use]
    pub const fn options(&self) -> &TableOptions {
        &self.options
    }

    /// Returns the human player.
    #[must_use]
    pub const fn player(&self) -> &Player {
        &self.player
    }

    /// Returns the dealer.
    #[must_use]
    pub const fn dealer(&self) -> &Player {
        &self.dealer
    }

    /// Returns the current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.round.as_ref().map_or(Phase::AwaitingBet, |round| round.phase)
    }

    /// Returns the outcome of the last settled round.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        self.round.as_ref().and_then(|round| round.outcome)
    }

    /// Returns the number of cards left in this round's deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.round.as_ref().map_or(0, |round| round.deck.len())
    }

    /// Returns whether the player has run out of chips between rounds.
    ///
    /// The engine takes no action on its own; the caller decides whether to
    /// [`reset_chips`](Self::reset_chips) or end the session.
    #[must_use]
    pub fn is_out_of_chips(&self) -> bool {
        self.player.chips() == 0 && !self.phase().is_in_progress()
    }

    /// Restores the player's chips to the starting balance.
    ///
    /// # Errors
    ///
    /// Returns an error if the player still has chips or a round is in
    /// progress.
    pub fn reset_chips(&mut self) -> Result<RoundState, ResetError> {
        if self.phase().is_in_progress() {
            return Err(ResetError::RoundInProgress);
        }
        if self.player.chips() > 0 {
            return Err(ResetError::ChipsRemaining);
        }

        self.player.set_chips(self.options.starting_chips);
        log::info!(
            "{} restarts with {} chips",
            self.player.name(),
            self.options.starting_chips
        );

        Ok(self.state())
    }

    /// Returns a snapshot of the table.
    #[must_use]
    pub fn state(&self) -> RoundState {
        let player_hand = self.player.hand();
        let dealer_hand = self.dealer.hand();

        RoundState {
            player_cards: player_hand.cards().iter().map(Card::view).collect(),
            player_total: player_hand.total(),
            dealer_cards: dealer_hand.cards().iter().map(Card::view).collect(),
            dealer_total: dealer_hand.total(),
            chips: self.player.chips(),
            bet: self.round.as_ref().map_or(0, |round| round.bet),
            phase: self.phase(),
            outcome: self.outcome(),
        }
    }
}
