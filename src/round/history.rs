//! The record of actions taken during a round.

use alloc::vec::Vec;

use crate::money::Money;
use crate::table::PlayerId;

/// Kind of action a player took.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    /// Posted the small blind.
    SmallBlind,
    /// Posted the big blind.
    BigBlind,
    /// Checked.
    Check,
    /// Called.
    Call,
    /// Raised.
    Raise,
    /// Went all-in.
    AllIn,
    /// Folded.
    Fold,
}

/// A single logged action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Action {
    /// The acting player.
    pub player: PlayerId,
    /// What the player did.
    pub kind: ActionKind,
    /// Chips moved from the player's stack by this action.
    pub amount: Money,
}

impl Action {
    /// Creates an action record.
    #[must_use]
    pub const fn new(player: PlayerId, kind: ActionKind, amount: Money) -> Self {
        Self {
            player,
            kind,
            amount,
        }
    }
}

/// Append-only list of the actions taken in a round.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionLog {
    actions: Vec<Action>,
}

impl ActionLog {
    /// Creates an empty log.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            actions: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, action: Action) {
        self.actions.push(action);
    }

    /// Returns the actions in the order they were taken.
    #[must_use]
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// Returns the number of logged actions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Returns whether nothing has been logged.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}
