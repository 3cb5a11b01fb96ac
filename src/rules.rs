//! Move legality.

use crate::card::{Card, Suit};

/// Returns whether `card` may be played.
///
/// An eight is always playable; any other card must match the active suit or
/// the rank of the top discard. Without a top discard nothing is playable.
///
/// ```
/// use crazy8s::rules::is_valid_move;
/// use crazy8s::{Card, Rank, Suit};
///
/// let top = Card::new(0, Suit::Hearts, Rank::Seven);
/// let seven_of_clubs = Card::new(1, Suit::Clubs, Rank::Seven);
/// let two_of_clubs = Card::new(2, Suit::Clubs, Rank::Two);
///
/// assert!(is_valid_move(&seven_of_clubs, Suit::Hearts, Some(&top)));
/// assert!(!is_valid_move(&two_of_clubs, Suit::Hearts, Some(&top)));
/// assert!(!is_valid_move(&two_of_clubs, Suit::Clubs, None));
/// ```
#[must_use]
pub fn is_valid_move(card: &Card, active_suit: Suit, top_discard: Option<&Card>) -> bool {
    let Some(top) = top_discard else {
        return false;
    };

    card.is_wild() || card.suit == active_suit || card.rank == top.rank
}
