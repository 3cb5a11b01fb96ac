//! Game engine and state management.

use core::sync::atomic::{AtomicU32, Ordering};

use alloc::string::String;
use alloc::vec::Vec;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::sync::Mutex;

use crate::card::{Card, CardId, Suit};
use crate::deck::{create_deck, shuffle_deck};
use crate::error::DealError;
use crate::hand::Hand;
use crate::options::GameOptions;

mod actions;
mod deal;
pub mod opponent;
pub mod state;

pub use opponent::{AiDecision, AiTurnTicket};
pub use state::{Side, Status, Table};

/// A Crazy Eights game between a human player and a scripted opponent.
///
/// The game owns the table (deck, discard pile, both hands, turn and status)
/// behind a single lock; every transition holds it for its whole duration.
/// Use [`GameOptions`] to configure the hand size and opponent pacing.
pub struct Game {
    /// Game options.
    pub options: GameOptions,
    /// The table for the current game.
    pub(crate) table: Mutex<Table>,
    /// Bumped by every successful transition; used to spot stale AI turns.
    generation: AtomicU32,
    /// Random number generator.
    rng: Mutex<ChaCha8Rng>,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// Nothing is dealt until [`Game::start_new_game`] is called.
    ///
    /// # Example
    ///
    /// ```
    /// use crazy8s::{Game, GameOptions, Status};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.status(), Status::Waiting);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self {
            options,
            table: Mutex::new(Table::new()),
            generation: AtomicU32::new(0),
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    /// Shuffles a fresh deck and deals a new game, discarding any game in
    /// progress.
    ///
    /// Any opponent turn scheduled before the restart becomes stale.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured hand size is zero or too large for
    /// one deck.
    ///
    /// # Example
    ///
    /// ```
    /// use crazy8s::{Game, GameOptions, Side, Status};
    ///
    /// let game = Game::new(GameOptions::default(), 7);
    /// game.start_new_game().unwrap();
    /// assert_eq!(game.status(), Status::Playing);
    /// assert_eq!(game.turn(), Side::Player);
    /// assert_eq!(game.player_hand().len(), 8);
    /// ```
    pub fn start_new_game(&self) -> Result<(), DealError> {
        let deck = shuffle_deck(&create_deck(), &mut *self.rng.lock());
        self.start_with_deck(deck)
    }

    /// Returns the current generation.
    pub(crate) fn generation(&self) -> u32 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Marks a transition, invalidating outstanding opponent tickets.
    fn advance_generation(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    /// Returns a copy of the whole table.
    pub fn snapshot(&self) -> Table {
        self.table.lock().clone()
    }

    /// Returns the current game status.
    pub fn status(&self) -> Status {
        self.table.lock().status
    }

    /// Returns the side whose turn it is.
    pub fn turn(&self) -> Side {
        self.table.lock().turn
    }

    /// Returns the winner, once the game is over.
    pub fn winner(&self) -> Option<Side> {
        self.table.lock().winner
    }

    /// Returns the suit the next card must match.
    ///
    /// Returns `None` before the first deal.
    pub fn active_suit(&self) -> Option<Suit> {
        self.table.lock().active_suit
    }

    /// Returns the top card of the discard pile.
    pub fn top_discard(&self) -> Option<Card> {
        self.table.lock().top_discard().copied()
    }

    /// Returns the current status message.
    pub fn message(&self) -> String {
        self.table.lock().message.clone()
    }

    /// Returns the number of cards left in the deck.
    pub fn cards_remaining(&self) -> usize {
        self.table.lock().deck.len()
    }

    /// Returns a clone of the player's hand.
    pub fn player_hand(&self) -> Hand {
        self.table.lock().player_hand.clone()
    }

    /// Returns a clone of the opponent's hand.
    pub fn ai_hand(&self) -> Hand {
        self.table.lock().ai_hand.clone()
    }

    /// Returns the ids of the player's cards that can be played right now.
    ///
    /// Empty unless it is the player's turn in [`Status::Playing`].
    pub fn playable_cards(&self) -> Vec<CardId> {
        self.table.with(|table| {
            let Some(active_suit) = table.active_suit else {
                return Vec::new();
            };
            if !table.is_turn_of(Side::Player) {
                return Vec::new();
            }

            table
                .player_hand
                .playable(active_suit, table.top_discard())
                .map(|card| card.id)
                .collect()
        })
    }
}
