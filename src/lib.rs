//! A Crazy Eights game engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that runs a single-player game against a
//! scripted opponent: dealing, move legality, turn alternation, the wild eight
//! and its suit choice, and win detection. Rendering is left to the host; it
//! sends intents ([`Game::play_card`], [`Game::draw_card`],
//! [`Game::choose_suit`], [`Game::start_new_game`]) and reads back a
//! [`Table`] snapshot.
//!
//! # Example
//!
//! ```
//! use crazy8s::{Game, GameOptions, Side};
//!
//! let game = Game::new(GameOptions::default(), 42);
//! game.start_new_game().unwrap();
//!
//! if game.draw_card().is_ok() {
//!     assert_eq!(game.turn(), Side::Ai);
//!     if let Some(ticket) = game.pending_ai_turn() {
//!         game.run_ai_turn(ticket).unwrap();
//!     }
//! }
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod outcome;
pub mod rules;
mod sync;

// Re-export main types
pub use card::{Card, CardId, DECK_SIZE, Rank, Suit};
pub use error::{AiTurnError, DealError, DrawError, ParseSuitError, PlayError, SuitError};
pub use game::{AiDecision, AiTurnTicket, Game, Side, Status, Table};
pub use hand::{Hand, SuitCounts};
pub use options::GameOptions;
pub use outcome::{AiAction, DrawOutcome, PlayOutcome};
