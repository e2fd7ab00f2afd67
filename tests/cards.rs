//! Card, deck, hand, and chip economy tests.

use std::collections::HashSet;

use bjcore::{
    BetError, Card, DECK_SIZE, Deck, DeckError, Hand, Outcome, Player, Rank, STARTING_CHIPS,
    Suit, parse_bet,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

fn hand_of(cards: &[Card]) -> Hand {
    let mut hand = Hand::new();
    for &card in cards {
        hand.add_card(card);
    }
    hand
}

#[test]
fn card_values_follow_the_rank_table() {
    let expected = [2, 3, 4, 5, 6, 7, 8, 9, 10, 10, 10, 10, 11];
    for (rank, value) in Rank::ALL.into_iter().zip(expected) {
        assert_eq!(card(Suit::Clubs, rank).value(), value, "{rank:?}");
    }
}

#[test]
fn card_display_and_view() {
    let ace = card(Suit::Spades, Rank::Ace);
    assert_eq!(ace.to_string(), "Ace of Spades");
    assert!(ace.is_ace());

    let view = card(Suit::Hearts, Rank::Queen).view();
    assert_eq!(view.rank, "Queen");
    assert_eq!(view.suit, "Hearts");
    assert_eq!(view.to_string(), "Queen of Hearts");
}

#[test]
fn fresh_decks_hold_every_card_once() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    for deck in [Deck::ordered(), Deck::new(&mut rng), Deck::new(&mut rng)] {
        assert_eq!(deck.len(), DECK_SIZE);
        let unique: HashSet<Card> = deck.cards().iter().copied().collect();
        assert_eq!(unique.len(), DECK_SIZE);
    }
}

#[test]
fn shuffling_changes_the_order() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let first = Deck::new(&mut rng);
    let second = Deck::new(&mut rng);

    assert_ne!(first, Deck::ordered());
    assert_ne!(first, second);
}

#[test]
fn draws_never_repeat_and_account_for_every_card() {
    let mut deck = Deck::new(&mut ChaCha8Rng::seed_from_u64(5));
    let mut seen = HashSet::new();

    while !deck.is_empty() {
        let card = deck.draw_one().unwrap();
        assert!(seen.insert(card), "{card} drawn twice");
        assert_eq!(seen.len() + deck.len(), DECK_SIZE);
    }

    assert_eq!(seen.len(), DECK_SIZE);
    assert_eq!(deck.draw_one().unwrap_err(), DeckError::Empty);
}

#[test]
fn ordered_deck_draws_from_the_top() {
    let mut deck = Deck::ordered();
    assert_eq!(deck.draw_one().unwrap(), card(Suit::Clubs, Rank::Ace));
    assert_eq!(deck.draw_one().unwrap(), card(Suit::Clubs, Rank::King));
    assert_eq!(deck.len(), DECK_SIZE - 2);
}

#[test]
fn stacked_deck_draws_the_given_cards_first() {
    let top = [
        card(Suit::Hearts, Rank::Ace),
        card(Suit::Clubs, Rank::Ace),
        card(Suit::Spades, Rank::Two),
    ];
    let mut deck = Deck::stacked(&top).unwrap();
    assert_eq!(deck.len(), DECK_SIZE);

    for expected in top {
        assert_eq!(deck.draw_one().unwrap(), expected);
    }
    // Ace of Clubs was pulled to the top, so the canonical order resumes below it.
    assert_eq!(deck.draw_one().unwrap(), card(Suit::Clubs, Rank::King));
}

#[test]
fn stacked_deck_rejects_duplicates() {
    let twice = card(Suit::Diamonds, Rank::Seven);
    assert_eq!(
        Deck::stacked(&[twice, card(Suit::Hearts, Rank::Two), twice]).unwrap_err(),
        DeckError::DuplicateCard(twice)
    );
}

#[test]
fn ace_and_nine_make_twenty_with_or_without_a_ten() {
    let mut hand = hand_of(&[card(Suit::Hearts, Rank::Ace), card(Suit::Clubs, Rank::Nine)]);
    assert_eq!(hand.total(), 20);
    assert_eq!(hand.soft_aces(), 1);
    assert!(hand.is_soft());

    hand.add_card(card(Suit::Spades, Rank::Ten));
    assert_eq!(hand.total(), 20);
    assert_eq!(hand.soft_aces(), 0);
    assert!(!hand.is_bust());
}

#[test]
fn each_ace_is_demoted_at_most_once() {
    let pair = hand_of(&[card(Suit::Hearts, Rank::Ace), card(Suit::Clubs, Rank::Ace)]);
    assert_eq!(pair.total(), 12);
    assert_eq!(pair.soft_aces(), 1);

    let twenty_one = hand_of(&[
        card(Suit::Hearts, Rank::Ace),
        card(Suit::Clubs, Rank::Ace),
        card(Suit::Spades, Rank::Nine),
    ]);
    assert_eq!(twenty_one.total(), 21);

    let bust = hand_of(&[
        card(Suit::Hearts, Rank::Ace),
        card(Suit::Clubs, Rank::King),
        card(Suit::Spades, Rank::Queen),
        card(Suit::Diamonds, Rank::Two),
    ]);
    assert_eq!(bust.total(), 23);
    assert!(bust.is_bust());
}

#[test]
fn ace_adjustment_holds_after_every_card() {
    for seed in 0..32 {
        let mut deck = Deck::new(&mut ChaCha8Rng::seed_from_u64(seed));
        let mut hand = Hand::new();
        let mut hard_total = 0_u32;

        while let Ok(card) = deck.draw_one() {
            hand.add_card(card);
            hard_total += if card.is_ace() { 1 } else { u32::from(card.value()) };

            assert!(hand.total() <= 21 || hand.soft_aces() == 0);
            assert_eq!(
                u32::from(hand.total()),
                hard_total + 10 * u32::from(hand.soft_aces())
            );
            if hand.total() > 21 {
                break;
            }
        }
    }
}

#[test]
fn hand_display_lists_cards_and_value() {
    let hand = hand_of(&[card(Suit::Hearts, Rank::Ten), card(Suit::Spades, Rank::Ace)]);
    assert_eq!(hand.to_string(), "Ten of Hearts, Ace of Spades (Value: 21)");
    assert_eq!(Hand::new().to_string(), " (Value: 0)");
}

#[test]
fn chip_laws() {
    let mut win = Player::new("You", STARTING_CHIPS);
    let bet = win.place_bet(10).unwrap();
    win.settle_win(bet);
    assert_eq!(win.chips(), 110);

    let mut loss = Player::new("You", STARTING_CHIPS);
    loss.place_bet(10).unwrap();
    loss.settle_loss();
    assert_eq!(loss.chips(), 90);

    let mut push = Player::new("You", STARTING_CHIPS);
    let bet = push.place_bet(10).unwrap();
    push.settle_push(bet);
    assert_eq!(push.chips(), 100);
}

#[test]
fn rejected_bets_leave_the_balance_alone() {
    let mut player = Player::new("You", 100);
    assert_eq!(player.place_bet(150).unwrap_err(), BetError::InsufficientChips);
    assert_eq!(player.place_bet(0).unwrap_err(), BetError::InvalidBet);
    assert_eq!(player.chips(), 100);

    assert_eq!(player.place_bet(100), Ok(100));
    assert_eq!(player.chips(), 0);
}

#[test]
fn dealer_record_has_no_chips() {
    let mut dealer = Player::dealer("Dealer");
    assert_eq!(dealer.chips(), 0);
    assert!(dealer.hand().is_empty());
    assert_eq!(dealer.place_bet(1).unwrap_err(), BetError::InsufficientChips);
}

#[test]
fn bet_parsing_at_the_boundary() {
    assert_eq!(parse_bet("10"), Ok(10));
    assert_eq!(parse_bet("  7\n"), Ok(7));
    assert_eq!(parse_bet(""), Err(BetError::InvalidBet));
    assert_eq!(parse_bet("0"), Err(BetError::InvalidBet));
    assert_eq!(parse_bet("-5"), Err(BetError::InvalidBet));
    assert_eq!(parse_bet("2.5"), Err(BetError::InvalidBet));
    assert_eq!(parse_bet("lots"), Err(BetError::InvalidBet));
}

#[test]
fn outcomes_compare_totals() {
    assert_eq!(Outcome::from_totals(18, 22, true), Outcome::PlayerWin);
    assert_eq!(Outcome::from_totals(20, 19, false), Outcome::PlayerWin);
    assert_eq!(Outcome::from_totals(17, 19, false), Outcome::DealerWin);
    assert_eq!(Outcome::from_totals(18, 18, false), Outcome::Push);

    assert_eq!(Outcome::PlayerWin.payout(10), 20);
    assert_eq!(Outcome::Push.payout(10), 10);
    assert_eq!(Outcome::DealerWin.payout(10), 0);
}
