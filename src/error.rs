//! Error types for game operations.
//!
//! None of these are fatal: every rejected action leaves the game unchanged,
//! and a new game can always be started.

use thiserror::Error;

/// Errors that can occur when starting a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Hand size is zero.
    #[error("hand size must be at least one card")]
    InvalidHandSize,
    /// The deck cannot supply both hands and a starting discard.
    #[error("not enough cards in the deck")]
    NotEnoughCards,
}

/// Errors that can occur when playing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    /// Invalid game state for playing.
    #[error("invalid game state for playing a card")]
    InvalidState,
    /// Not this side's turn.
    #[error("not your turn")]
    NotYourTurn,
    /// The card is not in the acting hand.
    #[error("card is not in hand")]
    CardNotInHand,
    /// The card matches neither the active suit nor the top discard's rank.
    #[error("card does not match the active suit or the top discard")]
    IllegalMove,
}

/// Errors that can occur when drawing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// Invalid game state for drawing.
    #[error("invalid game state for drawing")]
    InvalidState,
    /// Not the player's turn.
    #[error("not your turn")]
    NotYourTurn,
}

/// Errors that can occur when choosing a suit after playing an eight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SuitError {
    /// No suit choice is pending.
    #[error("no suit selection is pending")]
    InvalidState,
}

/// Errors that can occur when running a scheduled opponent turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AiTurnError {
    /// The game moved on after the turn was scheduled.
    #[error("scheduled opponent turn is stale")]
    Stale,
    /// Invalid game state for the opponent to act.
    #[error("invalid game state for the opponent")]
    InvalidState,
    /// Not the opponent's turn.
    #[error("not the opponent's turn")]
    NotAiTurn,
    /// The opponent's chosen card was rejected.
    #[error(transparent)]
    Play(#[from] PlayError),
}

/// Error returned when parsing an unknown suit name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown suit name")]
pub struct ParseSuitError;
