//! Round configuration options.

use crate::money::Money;

/// Configuration options for a round.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use holdem_round::{Money, RoundOptions};
///
/// let options = RoundOptions::default()
///     .with_blinds(Money::new(50), Money::new(100))
///     .with_all_in_always_reopens(true);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundOptions {
    /// Small blind amount.
    pub small_blind: Money,
    /// Big blind amount.
    pub big_blind: Money,
    /// Whether every all-in reopens the betting, even one that does not
    /// cover the current highest commitment.
    ///
    /// Off by default: an all-in for less than the call is treated like a
    /// call.
    pub all_in_always_reopens: bool,
}

impl Default for RoundOptions {
    fn default() -> Self {
        Self {
            small_blind: Money::new(25),
            big_blind: Money::new(50),
            all_in_always_reopens: false,
        }
    }
}

impl RoundOptions {
    /// Sets the small blind.
    ///
    /// # Example
    ///
    /// ```
    /// use holdem_round::{Money, RoundOptions};
    ///
    /// let options = RoundOptions::default().with_small_blind(Money::new(10));
    /// assert_eq!(options.small_blind, Money::new(10));
    /// ```
    #[must_use]
    pub const fn with_small_blind(mut self, amount: Money) -> Self {
        self.small_blind = amount;
        self
    }

    /// Sets the big blind.
    ///
    /// # Example
    ///
    /// ```
    /// use holdem_round::{Money, RoundOptions};
    ///
    /// let options = RoundOptions::default().with_big_blind(Money::new(20));
    /// assert_eq!(options.big_blind, Money::new(20));
    /// ```
    #[must_use]
    pub const fn with_big_blind(mut self, amount: Money) -> Self {
        self.big_blind = amount;
        self
    }

    /// Sets both blinds.
    #[must_use]
    pub const fn with_blinds(self, small: Money, big: Money) -> Self {
        self.with_small_blind(small).with_big_blind(big)
    }

    /// Sets whether every all-in reopens the betting.
    ///
    /// # Example
    ///
    /// ```
    /// use holdem_round::RoundOptions;
    ///
    /// let options = RoundOptions::default().with_all_in_always_reopens(true);
    /// assert!(options.all_in_always_reopens);
    /// ```
    #[must_use]
    pub const fn with_all_in_always_reopens(mut self, reopens: bool) -> Self {
        self.all_in_always_reopens = reopens;
        self
    }
}
