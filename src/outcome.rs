//! Results of successful game transitions.

use crate::card::{Card, Suit};

/// Result of a card played by the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    /// Card was played and the turn passed to the opponent.
    Played(Card),
    /// An eight was played; a suit must be chosen before play continues.
    ChooseSuit(Card),
    /// The card was the player's last and the game is over.
    Won(Card),
}

/// Result of a draw by the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawOutcome {
    /// A card was drawn into the player's hand.
    Drew(Card),
    /// The deck was empty; the turn passed without drawing.
    Passed,
}

/// What the opponent did on its turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiAction {
    /// Played a non-wild card.
    Played(Card),
    /// Played an eight and named a suit.
    PlayedWild {
        /// The eight that was played.
        card: Card,
        /// The suit named.
        suit: Suit,
    },
    /// Drew one card from the deck.
    Drew,
    /// Had no legal card and the deck was empty.
    Passed,
}

impl AiAction {
    /// Returns the card played, if any.
    #[must_use]
    pub const fn card(&self) -> Option<Card> {
        match self {
            Self::Played(card) | Self::PlayedWild { card, .. } => Some(*card),
            Self::Drew | Self::Passed => None,
        }
    }
}
