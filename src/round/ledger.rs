//! Chips committed during a round.

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::money::Money;
use crate::table::PlayerId;

/// Tracks what each player has committed on the current street, the pot
/// collected from earlier streets, and each player's total for the round.
///
/// The street commitments plus the pot always equal the chips moved off the
/// players' stacks since the round started.
#[derive(Debug, Clone, Default)]
pub struct BetLedger {
    /// Commitments on the current street (`player_id` -> amount).
    street: HashMap<PlayerId, Money>,
    /// Chips collected from finished streets.
    pot: Money,
    /// Commitments over the whole round (`player_id` -> amount).
    round: HashMap<PlayerId, Money>,
}

impl BetLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns what the player has committed on the current street.
    #[must_use]
    pub fn committed(&self, player: PlayerId) -> Money {
        self.street.get(&player).copied().unwrap_or_default()
    }

    /// Returns what the player has committed over the whole round.
    #[must_use]
    pub fn contributed(&self, player: PlayerId) -> Money {
        self.round.get(&player).copied().unwrap_or_default()
    }

    /// Returns the highest commitment on the current street.
    #[must_use]
    pub fn highest(&self) -> Money {
        self.street.values().copied().max().unwrap_or_default()
    }

    /// Returns the amount the player must add to match the highest commitment.
    #[must_use]
    pub fn to_call(&self, player: PlayerId) -> Money {
        self.highest().saturating_sub(self.committed(player))
    }

    /// Returns the total committed on the current street.
    #[must_use]
    pub fn street_total(&self) -> Money {
        self.street.values().sum()
    }

    /// Returns the pot collected from finished streets.
    #[must_use]
    pub const fn pot(&self) -> Money {
        self.pot
    }

    /// Adds chips the player has already taken off their stack.
    pub fn commit(&mut self, player: PlayerId, amount: Money) {
        *self.street.entry(player).or_default() += amount;
        *self.round.entry(player).or_default() += amount;
    }

    /// Moves the street's commitments into the pot.
    ///
    /// Returns the amount collected.
    pub fn collect(&mut self) -> Money {
        let collected = self.street_total();
        self.pot += collected;
        self.street.clear();
        collected
    }
}
