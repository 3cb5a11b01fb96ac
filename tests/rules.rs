//! Deck, hand and move legality tests.

use std::collections::HashSet;

use crazy8s::deck::{create_deck, shuffle_deck};
use crazy8s::rules::is_valid_move;
use crazy8s::{Card, DECK_SIZE, Hand, Rank, Suit};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const fn card(id: u8, suit: Suit, rank: Rank) -> Card {
    Card::new(id, suit, rank)
}

#[test]
fn deck_has_every_suit_and_rank_once() {
    let deck = create_deck();
    assert_eq!(deck.len(), DECK_SIZE);

    let ids: HashSet<u8> = deck.iter().map(|c| c.id).collect();
    assert_eq!(ids.len(), DECK_SIZE);

    let faces: HashSet<(Suit, Rank)> = deck.iter().map(|c| (c.suit, c.rank)).collect();
    assert_eq!(faces.len(), DECK_SIZE);

    for (index, c) in deck.iter().enumerate() {
        assert_eq!(c.id as usize, index);
    }
    assert_eq!(create_deck(), deck);
}

#[test]
fn shuffle_keeps_cards_and_input() {
    let deck = create_deck();
    let mut rng = ChaCha8Rng::seed_from_u64(5);

    let shuffled = shuffle_deck(&deck, &mut rng);
    assert_eq!(deck, create_deck());
    assert_ne!(shuffled, deck);

    let mut sorted = shuffled.clone();
    sorted.sort_by_key(|c| c.id);
    assert_eq!(sorted, deck);
}

#[test]
fn shuffle_has_no_positional_bias() {
    const ROUNDS: usize = 5200;

    let deck = create_deck();
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let mut first_card_positions = [0usize; DECK_SIZE];
    let mut top_ids = [0usize; DECK_SIZE];

    for _ in 0..ROUNDS {
        let shuffled = shuffle_deck(&deck, &mut rng);
        let position = shuffled.iter().position(|c| c.id == 0).unwrap();
        first_card_positions[position] += 1;
        top_ids[shuffled[DECK_SIZE - 1].id as usize] += 1;
    }

    // Expected 100 per bucket; the bounds are about five standard deviations.
    for count in first_card_positions.iter().chain(&top_ids) {
        assert!((50..=150).contains(count), "bucket count {count} out of range");
    }
}

#[test]
fn eight_is_always_playable() {
    let top = card(0, Suit::Hearts, Rank::Seven);
    for suit in Suit::ALL {
        for active in Suit::ALL {
            assert!(is_valid_move(&card(1, suit, Rank::Eight), active, Some(&top)));
        }
    }
}

#[test]
fn rank_match_is_playable() {
    let top = card(0, Suit::Hearts, Rank::Seven);
    assert!(is_valid_move(&card(1, Suit::Spades, Rank::Seven), Suit::Hearts, Some(&top)));
}

#[test]
fn active_suit_match_is_playable() {
    let top = card(0, Suit::Hearts, Rank::Eight);
    // After an eight the chosen suit counts, not the eight's own suit.
    assert!(is_valid_move(&card(1, Suit::Clubs, Rank::Two), Suit::Clubs, Some(&top)));
    assert!(!is_valid_move(&card(2, Suit::Hearts, Rank::Two), Suit::Clubs, Some(&top)));
}

#[test]
fn unmatched_card_is_not_playable() {
    let top = card(0, Suit::Hearts, Rank::Seven);
    for rank in Rank::ALL {
        if rank == Rank::Seven || rank == Rank::Eight {
            continue;
        }
        assert!(!is_valid_move(&card(1, Suit::Clubs, rank), Suit::Hearts, Some(&top)));
    }
}

#[test]
fn nothing_is_playable_without_a_discard() {
    assert!(!is_valid_move(&card(1, Suit::Clubs, Rank::Eight), Suit::Clubs, None));
    assert!(!is_valid_move(&card(2, Suit::Clubs, Rank::Two), Suit::Clubs, None));
}

#[test]
fn suit_counts_break_ties_in_suit_order() {
    let mut hand = Hand::new();
    hand.add_card(card(0, Suit::Spades, Rank::Two));
    hand.add_card(card(1, Suit::Clubs, Rank::Three));
    hand.add_card(card(2, Suit::Spades, Rank::Four));
    hand.add_card(card(3, Suit::Clubs, Rank::Five));

    let counts = hand.suit_counts(None);
    assert_eq!(counts.get(Suit::Spades), 2);
    assert_eq!(counts.get(Suit::Clubs), 2);
    assert_eq!(counts.most_common(), Suit::Clubs);

    assert_eq!(hand.suit_counts(Some(1)).most_common(), Suit::Spades);
    assert_eq!(Hand::new().suit_counts(None).most_common(), Suit::Hearts);
}

#[test]
fn hand_removes_by_id() {
    let mut hand = Hand::new();
    hand.add_card(card(4, Suit::Hearts, Rank::Ace));
    hand.add_card(card(9, Suit::Clubs, Rank::King));

    assert_eq!(hand.remove_card(7), None);
    assert_eq!(hand.remove_card(4), Some(card(4, Suit::Hearts, Rank::Ace)));
    assert_eq!(hand.cards(), &[card(9, Suit::Clubs, Rank::King)]);
    assert!(hand.get(4).is_none());
}

#[test]
fn suit_names_parse_and_display() {
    for suit in Suit::ALL {
        assert_eq!(suit.name().parse::<Suit>(), Ok(suit));
        assert_eq!(suit.to_string(), suit.name());
    }
    assert_eq!(" SPADES ".parse::<Suit>(), Ok(Suit::Spades));
    assert!("joker".parse::<Suit>().is_err());
    assert_eq!(card(0, Suit::Hearts, Rank::Ten).to_string(), "10♥");
    assert_eq!(card(1, Suit::Spades, Rank::Queen).to_string(), "Q♠");
}
