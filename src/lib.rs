//! A single-player blackjack round engine with optional `no_std` support.
//!
//! The crate provides a [`RoundEngine`] that owns a player's chip balance and
//! plays rounds against a dealer: betting, hit and stand, the dealer's
//! drawing policy, and settlement. Presentation is left to the caller, which
//! reads a [`RoundState`] snapshot back after every call.
//!
//! # Example
//!
//! ```
//! use bjcore::{Phase, RoundEngine, TableOptions};
//!
//! let mut engine = RoundEngine::new(TableOptions::default(), 42);
//! let state = engine.start_round(10).unwrap();
//! assert_eq!(state.player_cards.len(), 2);
//! assert_eq!(state.dealer_cards.len(), 1);
//! assert_eq!(state.chips, 90);
//!
//! let state = engine.stand().unwrap();
//! assert_eq!(state.phase, Phase::Settled);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod player;
pub mod result;

// Re-export main types
pub use card::{Card, CardView, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{ActionError, BetError, DeckError, ResetError};
pub use game::{DEALER_STANDS_ON, Phase, RoundEngine, RoundState};
pub use hand::{BLACKJACK, Hand};
pub use options::TableOptions;
pub use player::{Player, STARTING_CHIPS, parse_bet};
pub use result::Outcome;
