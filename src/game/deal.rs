use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;
use crate::error::DealError;

use super::{Game, Side, Status, Table};

/// Removes the starting discard from `deck`.
///
/// Scans from the top for the first card that is not an eight. If only eights
/// remain, the top card is taken anyway so the discard pile is never empty.
fn take_starter(deck: &mut Vec<Card>) -> Option<Card> {
    let index = deck
        .iter()
        .rposition(|card| !card.is_wild())
        .or_else(|| deck.len().checked_sub(1))?;
    Some(deck.remove(index))
}

impl Game {
    /// Deals a new game from `deck` instead of a shuffled one.
    ///
    /// The top of the deck is the last element. Cards are dealt one at a time,
    /// alternating player then opponent, until both hands hold
    /// [`GameOptions::hand_size`](crate::GameOptions::hand_size) cards.
    ///
    /// # Errors
    ///
    /// Returns an error if the hand size is zero or `deck` cannot supply both
    /// hands plus a starting discard.
    pub fn start_with_deck(&self, deck: Vec<Card>) -> Result<(), DealError> {
        let hand_size = self.options.hand_size;
        if hand_size == 0 {
            return Err(DealError::InvalidHandSize);
        }
        if deck.len() < self.options.cards_needed() {
            return Err(DealError::NotEnoughCards);
        }

        self.table.with(|table| {
            *table = Table::new();
            table.deck = deck;

            for _ in 0..hand_size {
                for side in [Side::Player, Side::Ai] {
                    if let Some(card) = table.deck.pop() {
                        table.hand_mut(side).add_card(card);
                    }
                }
            }

            let starter = take_starter(&mut table.deck);
            if let Some(card) = starter {
                table.discard_pile.push(card);
                table.active_suit = Some(card.suit);
            }

            table.turn = Side::Player;
            table.status = Status::Playing;
            table.message = String::from("Your turn! Match the suit or rank, or play an 8.");
            self.advance_generation();

            tracing::debug!(
                starter = ?starter,
                deck = table.deck.len(),
                "dealt new game"
            );
        });

        Ok(())
    }
}
