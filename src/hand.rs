//! Hands held by the player and the opponent.

use alloc::vec::Vec;

use crate::card::{Card, CardId, Suit};
use crate::rules::is_valid_move;

/// Number of cards of each suit, indexed in [`Suit::ALL`] order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SuitCounts([usize; 4]);

impl SuitCounts {
    /// Returns the count for `suit`.
    #[must_use]
    pub const fn get(&self, suit: Suit) -> usize {
        self.0[suit.index()]
    }

    /// Returns the suit with the strictly highest count.
    ///
    /// Ties go to the suit that comes first in [`Suit::ALL`], so an all-zero
    /// tally yields [`Suit::Hearts`].
    #[must_use]
    pub fn most_common(&self) -> Suit {
        let mut best = Suit::Hearts;
        for suit in Suit::ALL {
            if self.get(suit) > self.get(best) {
                best = suit;
            }
        }
        best
    }
}

/// A hand of cards.
///
/// Order is kept as dealt and drawn; it only matters for display and for the
/// opponent's first-found tie-breaking.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Removes the card with `id`, returning it if it was held.
    pub fn remove_card(&mut self, id: CardId) -> Option<Card> {
        let index = self.cards.iter().position(|card| card.id == id)?;
        Some(self.cards.remove(index))
    }

    /// Returns the card with `id`, if held.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|card| card.id == id)
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the held cards that are legal against the given discard state,
    /// in hand order.
    pub fn playable<'a>(
        &'a self,
        active_suit: Suit,
        top_discard: Option<&'a Card>,
    ) -> impl Iterator<Item = &'a Card> + 'a {
        self.cards
            .iter()
            .filter(move |card| is_valid_move(card, active_suit, top_discard))
    }

    /// Tallies held cards per suit, skipping the card with id `except`.
    #[must_use]
    pub fn suit_counts(&self, except: Option<CardId>) -> SuitCounts {
        let mut counts = SuitCounts::default();
        for card in &self.cards {
            if Some(card.id) != except {
                counts.0[card.suit.index()] += 1;
            }
        }
        counts
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
