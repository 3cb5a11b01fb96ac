//! Game state types.

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::{Card, Suit};
use crate::hand::Hand;

/// Game status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// No game has been dealt yet.
    Waiting,
    /// Waiting for the side whose turn it is to play or draw.
    Playing,
    /// The player played an eight and must name a suit.
    SuitSelection,
    /// Someone emptied their hand.
    GameOver,
}

/// One of the two sides at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// The human player.
    Player,
    /// The computer opponent.
    Ai,
}

impl Side {
    /// Returns the opposing side.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Player => Self::Ai,
            Self::Ai => Self::Player,
        }
    }
}

/// Everything on the table for one game.
///
/// Every card of the deck is in exactly one of `deck`, `discard_pile`,
/// `player_hand` or `ai_hand`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    /// Undealt cards; the top of the deck is the last element.
    pub deck: Vec<Card>,
    /// Played cards; the top discard is the last element.
    pub discard_pile: Vec<Card>,
    /// The human player's hand.
    pub player_hand: Hand,
    /// The opponent's hand.
    pub ai_hand: Hand,
    /// Side to act.
    pub turn: Side,
    /// Current status.
    pub status: Status,
    /// Winner, once the game is over.
    pub winner: Option<Side>,
    /// Suit the next card must match, unless it matches the top discard's
    /// rank or is an eight.
    pub active_suit: Option<Suit>,
    /// Human-readable status line, replaced after every transition.
    pub message: String,
}

impl Table {
    /// Creates an empty table waiting for a deal.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            deck: Vec::new(),
            discard_pile: Vec::new(),
            player_hand: Hand::new(),
            ai_hand: Hand::new(),
            turn: Side::Player,
            status: Status::Waiting,
            winner: None,
            active_suit: None,
            message: String::new(),
        }
    }

    /// Returns the top card of the discard pile.
    #[must_use]
    pub fn top_discard(&self) -> Option<&Card> {
        self.discard_pile.last()
    }

    /// Returns the hand held by `side`.
    #[must_use]
    pub const fn hand(&self, side: Side) -> &Hand {
        match side {
            Side::Player => &self.player_hand,
            Side::Ai => &self.ai_hand,
        }
    }

    /// Returns the hand held by `side` mutably.
    pub const fn hand_mut(&mut self, side: Side) -> &mut Hand {
        match side {
            Side::Player => &mut self.player_hand,
            Side::Ai => &mut self.ai_hand,
        }
    }

    /// Returns every card on the table, in no particular order.
    pub fn all_cards(&self) -> impl Iterator<Item = &Card> {
        self.deck
            .iter()
            .chain(&self.discard_pile)
            .chain(self.player_hand.cards())
            .chain(self.ai_hand.cards())
    }

    /// Returns whether `side` may act right now.
    #[must_use]
    pub fn is_turn_of(&self, side: Side) -> bool {
        self.status == Status::Playing && self.turn == side && self.winner.is_none()
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}
