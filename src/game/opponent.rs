//! The scripted opponent.
//!
//! The opponent plays the first legal non-eight in hand order, falls back to
//! an eight, and otherwise draws (or passes on an empty deck). When it plays an
//! eight it names the suit it holds most of. There is no lookahead and no
//! memory of earlier plays.

use alloc::format;
use alloc::string::String;

use crate::card::{Card, CardId, Suit};
use crate::error::AiTurnError;
use crate::hand::Hand;
use crate::outcome::AiAction;

use super::{Game, Side, Status, Table};

/// What the opponent intends to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiDecision {
    /// Play the card with this id.
    Play {
        /// The card to play.
        card_id: CardId,
        /// Suit to name; set only when the card is an eight.
        suit: Option<Suit>,
    },
    /// Draw one card.
    Draw,
    /// Pass without drawing.
    Pass,
}

/// Picks the opponent's move for the given table position.
///
/// # Example
///
/// ```
/// use crazy8s::game::opponent::decide;
/// use crazy8s::{AiDecision, Card, Hand, Rank, Suit};
///
/// let mut hand = Hand::new();
/// hand.add_card(Card::new(1, Suit::Spades, Rank::Eight));
/// hand.add_card(Card::new(2, Suit::Hearts, Rank::Four));
/// let top = Card::new(0, Suit::Hearts, Rank::King);
///
/// // The four follows suit, so the eight is saved.
/// assert_eq!(
///     decide(&hand, Suit::Hearts, Some(&top), 10),
///     AiDecision::Play { card_id: 2, suit: None },
/// );
/// ```
#[must_use]
pub fn decide(
    hand: &Hand,
    active_suit: Suit,
    top_discard: Option<&Card>,
    deck_remaining: usize,
) -> AiDecision {
    let choice = hand
        .playable(active_suit, top_discard)
        .find(|card| !card.is_wild())
        .or_else(|| hand.playable(active_suit, top_discard).next());

    match choice {
        Some(card) if card.is_wild() => AiDecision::Play {
            card_id: card.id,
            suit: Some(hand.suit_counts(Some(card.id)).most_common()),
        },
        Some(card) => AiDecision::Play {
            card_id: card.id,
            suit: None,
        },
        None if deck_remaining > 0 => AiDecision::Draw,
        None => AiDecision::Pass,
    }
}

/// Handle for a scheduled opponent turn.
///
/// Obtained from [`Game::pending_ai_turn`]. It goes stale as soon as any other
/// transition (including a restart) happens, and a stale ticket is refused by
/// [`Game::run_ai_turn`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AiTurnTicket {
    /// Generation of the game when the turn was scheduled.
    pub generation: u32,
    /// How long the host should wait before running the turn.
    pub delay_ms: u32,
}

fn describe(action: AiAction, table: &Table) -> String {
    if table.winner == Some(Side::Ai) {
        let card = action.card().map_or_else(String::new, |card| format!(" {card}"));
        return format!("AI played its last card{card}. AI wins!");
    }

    match action {
        AiAction::Played(card) => format!("AI played {card}. Your turn!"),
        AiAction::PlayedWild { card, suit } => {
            format!("AI played {card} and changed the suit to {suit}. Your turn!")
        }
        AiAction::Drew => String::from("AI drew a card. Your turn!"),
        AiAction::Passed => String::from("AI can't play and the deck is empty. Your turn!"),
    }
}

impl Game {
    /// Returns a ticket for the opponent's turn if the opponent is due to act.
    ///
    /// The host should wait [`AiTurnTicket::delay_ms`] and then pass the ticket
    /// to [`Game::run_ai_turn`].
    pub fn pending_ai_turn(&self) -> Option<AiTurnTicket> {
        self.table.with(|table| {
            table.is_turn_of(Side::Ai).then(|| AiTurnTicket {
                generation: self.generation(),
                delay_ms: self.options.ai_delay_ms,
            })
        })
    }

    /// Runs the opponent's turn.
    ///
    /// An eight is resolved in the same step: the opponent names its suit
    /// and the turn passes without ever entering [`Status::SuitSelection`].
    ///
    /// # Errors
    ///
    /// Returns an error if the ticket is stale, the game is not in playing
    /// state, or it is not the opponent's turn. Nothing changes in any of
    /// these cases.
    pub fn run_ai_turn(&self, ticket: AiTurnTicket) -> Result<AiAction, AiTurnError> {
        self.table.with(|table| {
            if ticket.generation != self.generation() {
                tracing::debug!(
                    ticket = ticket.generation,
                    current = self.generation(),
                    "dropping stale opponent turn"
                );
                return Err(AiTurnError::Stale);
            }
            if table.status != Status::Playing || table.winner.is_some() {
                return Err(AiTurnError::InvalidState);
            }
            if table.turn != Side::Ai {
                return Err(AiTurnError::NotAiTurn);
            }
            let active_suit = table.active_suit.ok_or(AiTurnError::InvalidState)?;

            let decision = decide(
                &table.ai_hand,
                active_suit,
                table.top_discard(),
                table.deck.len(),
            );
            tracing::trace!(decision = ?decision, "opponent decided");

            let action = match decision {
                AiDecision::Play { card_id, suit } => {
                    let card = table.discard_from(Side::Ai, card_id)?;
                    let suit = suit.unwrap_or(card.suit);
                    table.active_suit = Some(suit);
                    if !table.check_win(Side::Ai) {
                        table.pass_turn();
                    }

                    if card.is_wild() {
                        AiAction::PlayedWild { card, suit }
                    } else {
                        AiAction::Played(card)
                    }
                }
                AiDecision::Draw => {
                    if let Some(card) = table.deck.pop() {
                        table.ai_hand.add_card(card);
                    }
                    table.pass_turn();
                    AiAction::Drew
                }
                AiDecision::Pass => {
                    table.pass_turn();
                    AiAction::Passed
                }
            };

            self.advance_generation();
            table.message = describe(action, table);
            tracing::debug!(action = ?action, side = ?Side::Ai, "opponent acted");

            Ok(action)
        })
    }
}
