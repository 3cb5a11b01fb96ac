//! Game configuration options.

/// Configuration options for a Crazy Eights game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use crazy8s::GameOptions;
///
/// let options = GameOptions::default()
///     .with_hand_size(7)
///     .with_ai_delay_ms(500);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Cards dealt to each side at the start of a game.
    pub hand_size: usize,
    /// Pause, in milliseconds, before a scheduled opponent turn should run.
    ///
    /// Pacing only; the engine never sleeps.
    pub ai_delay_ms: u32,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            hand_size: 8,
            ai_delay_ms: 1000,
        }
    }
}

impl GameOptions {
    /// Sets the number of cards dealt to each side.
    ///
    /// # Example
    ///
    /// ```
    /// use crazy8s::GameOptions;
    ///
    /// let options = GameOptions::default().with_hand_size(5);
    /// assert_eq!(options.hand_size, 5);
    /// ```
    #[must_use]
    pub const fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Sets the opponent's thinking delay.
    ///
    /// # Example
    ///
    /// ```
    /// use crazy8s::GameOptions;
    ///
    /// let options = GameOptions::default().with_ai_delay_ms(0);
    /// assert_eq!(options.ai_delay_ms, 0);
    /// ```
    #[must_use]
    pub const fn with_ai_delay_ms(mut self, delay_ms: u32) -> Self {
        self.ai_delay_ms = delay_ms;
        self
    }

    /// Cards needed to deal both hands plus the starting discard.
    ///
    /// Saturates instead of overflowing for absurd hand sizes.
    #[must_use]
    pub const fn cards_needed(&self) -> usize {
        self.hand_size.saturating_mul(2).saturating_add(1)
    }
}
