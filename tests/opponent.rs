//! Opponent policy tests.

use crazy8s::game::opponent::decide;
use crazy8s::{AiDecision, Card, Hand, Rank, Suit};

const fn card(id: u8, suit: Suit, rank: Rank) -> Card {
    Card::new(id, suit, rank)
}

fn hand(cards: &[Card]) -> Hand {
    let mut hand = Hand::new();
    for c in cards {
        hand.add_card(*c);
    }
    hand
}

const TOP: Card = card(0, Suit::Hearts, Rank::King);

#[test]
fn draws_when_nothing_matches() {
    let ai = hand(&[card(1, Suit::Clubs, Rank::Two), card(2, Suit::Spades, Rank::Three)]);
    assert_eq!(decide(&ai, Suit::Hearts, Some(&TOP), 3), AiDecision::Draw);
}

#[test]
fn passes_when_nothing_matches_and_deck_is_empty() {
    let ai = hand(&[card(1, Suit::Clubs, Rank::Two)]);
    assert_eq!(decide(&ai, Suit::Hearts, Some(&TOP), 0), AiDecision::Pass);
}

#[test]
fn plays_first_legal_card_in_hand_order() {
    let ai = hand(&[
        card(1, Suit::Clubs, Rank::Two),
        card(2, Suit::Spades, Rank::King),
        card(3, Suit::Hearts, Rank::Four),
    ]);
    assert_eq!(
        decide(&ai, Suit::Hearts, Some(&TOP), 3),
        AiDecision::Play {
            card_id: 2,
            suit: None
        }
    );
}

#[test]
fn saves_eight_while_a_plain_card_is_legal() {
    let ai = hand(&[
        card(1, Suit::Diamonds, Rank::Eight),
        card(2, Suit::Clubs, Rank::Nine),
        card(3, Suit::Hearts, Rank::Four),
    ]);
    assert_eq!(
        decide(&ai, Suit::Hearts, Some(&TOP), 0),
        AiDecision::Play {
            card_id: 3,
            suit: None
        }
    );
}

#[test]
fn eight_names_most_held_suit_excluding_itself() {
    let ai = hand(&[
        card(1, Suit::Spades, Rank::Eight),
        card(2, Suit::Spades, Rank::Two),
        card(3, Suit::Clubs, Rank::Three),
        card(4, Suit::Diamonds, Rank::Four),
        card(5, Suit::Spades, Rank::Five),
    ]);
    assert_eq!(
        decide(&ai, Suit::Hearts, Some(&TOP), 10),
        AiDecision::Play {
            card_id: 1,
            suit: Some(Suit::Spades)
        }
    );
}

#[test]
fn eight_breaks_suit_ties_in_enumeration_order() {
    let ai = hand(&[
        card(1, Suit::Hearts, Rank::Eight),
        card(2, Suit::Spades, Rank::Two),
        card(3, Suit::Diamonds, Rank::Three),
        card(4, Suit::Clubs, Rank::Four),
    ]);
    assert_eq!(
        decide(&ai, Suit::Hearts, Some(&TOP), 10),
        AiDecision::Play {
            card_id: 1,
            suit: Some(Suit::Diamonds)
        }
    );
}

#[test]
fn lone_eight_names_hearts() {
    let ai = hand(&[card(1, Suit::Clubs, Rank::Eight)]);
    assert_eq!(
        decide(&ai, Suit::Spades, Some(&TOP), 0),
        AiDecision::Play {
            card_id: 1,
            suit: Some(Suit::Hearts)
        }
    );
}
