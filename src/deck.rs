//! Deck construction and shuffling.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};

/// Builds the 52-card deck in suit-major order.
///
/// Ids run from 0 to 51 in the same order, so `deck[i].id == i`.
///
/// ```
/// use crazy8s::deck::create_deck;
/// use crazy8s::{Rank, Suit};
///
/// let deck = create_deck();
/// assert_eq!(deck.len(), 52);
/// assert_eq!((deck[0].suit, deck[0].rank), (Suit::Hearts, Rank::Ace));
/// assert_eq!((deck[51].suit, deck[51].rank), (Suit::Spades, Rank::King));
/// ```
#[must_use]
pub fn create_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);

    for suit in Suit::ALL {
        for rank in Rank::ALL {
            cards.push(Card::new(cards.len() as u8, suit, rank));
        }
    }

    cards
}

/// Returns a uniformly shuffled copy of `deck`.
///
/// The input is left untouched.
#[must_use]
pub fn shuffle_deck<R: Rng + ?Sized>(deck: &[Card], rng: &mut R) -> Vec<Card> {
    let mut cards = deck.to_vec();
    cards.shuffle(rng);
    cards
}
