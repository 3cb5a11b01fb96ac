use alloc::format;
use alloc::string::String;

use crate::card::{Card, CardId, Suit};
use crate::error::{DrawError, PlayError, SuitError};
use crate::outcome::{DrawOutcome, PlayOutcome};
use crate::rules::is_valid_move;

use super::{Game, Side, Status, Table};

impl Table {
    /// Moves a card from `side`'s hand onto the discard pile.
    ///
    /// Nothing changes unless it is `side`'s turn in [`Status::Playing`], the
    /// card is held, and it is a legal play.
    pub(super) fn discard_from(&mut self, side: Side, card_id: CardId) -> Result<Card, PlayError> {
        if self.status != Status::Playing || self.winner.is_some() {
            return Err(PlayError::InvalidState);
        }
        if self.turn != side {
            return Err(PlayError::NotYourTurn);
        }

        let card = *self.hand(side).get(card_id).ok_or(PlayError::CardNotInHand)?;
        let active_suit = self.active_suit.ok_or(PlayError::InvalidState)?;
        if !is_valid_move(&card, active_suit, self.top_discard()) {
            return Err(PlayError::IllegalMove);
        }

        let card = self
            .hand_mut(side)
            .remove_card(card_id)
            .ok_or(PlayError::CardNotInHand)?;
        self.discard_pile.push(card);

        Ok(card)
    }

    /// Ends the game if `side` has no cards left. Returns whether it did.
    pub(super) fn check_win(&mut self, side: Side) -> bool {
        if !self.hand(side).is_empty() {
            return false;
        }

        self.status = Status::GameOver;
        self.winner = Some(side);
        true
    }

    pub(super) const fn pass_turn(&mut self) {
        self.turn = self.turn.other();
    }

    fn rejection_message(&self, err: PlayError) -> String {
        match err {
            PlayError::InvalidState => match self.status {
                Status::Waiting => String::from("Start a new game to play."),
                Status::SuitSelection => String::from("Choose a suit for your 8 first."),
                Status::GameOver => String::from("The game is over. Start a new game!"),
                Status::Playing => String::from("You can't play a card right now."),
            },
            PlayError::NotYourTurn => String::from("Wait for your turn!"),
            PlayError::CardNotInHand => String::from("That card isn't in your hand."),
            PlayError::IllegalMove => match (self.active_suit, self.top_discard()) {
                (Some(suit), Some(top)) => format!(
                    "Invalid move! Play a {suit} card, a {}, or an 8.",
                    top.rank
                ),
                _ => String::from("Invalid move!"),
            },
        }
    }
}

impl Game {
    /// Player action: play a card from the player's hand.
    ///
    /// Playing an eight moves the game to [`Status::SuitSelection`] until
    /// [`Game::choose_suit`] is called. Playing the last card in hand ends the
    /// game immediately, whatever its rank.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in playing state, it is not the
    /// player's turn, the card is not in the player's hand, or the card is
    /// not a legal play. The status message explains the rejection; nothing
    /// else changes.
    pub fn play_card(&self, card_id: CardId) -> Result<PlayOutcome, PlayError> {
        self.table.with(|table| {
            let card = match table.discard_from(Side::Player, card_id) {
                Ok(card) => card,
                Err(err) => {
                    tracing::debug!(card_id, error = %err, "play rejected");
                    table.message = table.rejection_message(err);
                    return Err(err);
                }
            };
            self.advance_generation();
            tracing::debug!(card = %card, side = ?Side::Player, "card played");

            if !card.is_wild() {
                table.active_suit = Some(card.suit);
            }

            if table.check_win(Side::Player) {
                table.message = format!("You played {card} and won the game!");
                return Ok(PlayOutcome::Won(card));
            }

            if card.is_wild() {
                table.status = Status::SuitSelection;
                table.message = format!("You played {card}. Choose a new suit.");
                return Ok(PlayOutcome::ChooseSuit(card));
            }

            table.pass_turn();
            table.message = format!("You played {card}. AI is thinking...");
            Ok(PlayOutcome::Played(card))
        })
    }

    /// Player action: draw a card, ending the turn.
    ///
    /// With an empty deck nothing is drawn and the turn passes to the
    /// opponent anyway.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in playing state or it is not the
    /// player's turn. The status message is left as is.
    pub fn draw_card(&self) -> Result<DrawOutcome, DrawError> {
        self.table.with(|table| {
            if table.status != Status::Playing || table.winner.is_some() {
                return Err(DrawError::InvalidState);
            }
            if table.turn != Side::Player {
                return Err(DrawError::NotYourTurn);
            }

            let outcome = match table.deck.pop() {
                Some(card) => {
                    table.player_hand.add_card(card);
                    table.message = format!("You drew {card}. AI is thinking...");
                    DrawOutcome::Drew(card)
                }
                None => {
                    table.message = String::from("The deck is empty! Passing the turn to AI.");
                    DrawOutcome::Passed
                }
            };
            table.pass_turn();
            self.advance_generation();
            tracing::debug!(outcome = ?outcome, "player drew");

            Ok(outcome)
        })
    }

    /// Player action: name the suit after playing an eight.
    ///
    /// The suit becomes active and the turn passes to the opponent.
    ///
    /// # Errors
    ///
    /// Returns an error if no suit selection is pending.
    pub fn choose_suit(&self, suit: Suit) -> Result<(), SuitError> {
        self.table.with(|table| {
            if table.status != Status::SuitSelection {
                return Err(SuitError::InvalidState);
            }

            table.active_suit = Some(suit);
            table.status = Status::Playing;
            table.turn = Side::Ai;
            table.message = format!("Suit changed to {suit}. AI is thinking...");
            self.advance_generation();
            tracing::debug!(suit = %suit, "suit chosen");

            Ok(())
        })
    }
}
