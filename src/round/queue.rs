//! The "left to act" queue.
//!
//! The queue holds every player still in the hand for the current street.
//! The front entry is the player whose decision is awaited. Acting pops the
//! front entry and, unless the player folded, appends it to the back with a
//! status describing what they did. The street is over once nobody in the
//! queue still owes a decision.

use alloc::collections::VecDeque;

use crate::error::RoundError;
use crate::table::PlayerId;

/// What a queued player has done on the current street.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TurnStatus {
    /// Still owes a decision.
    StillToAct,
    /// Posted the small blind; still owes a decision.
    SmallBlind,
    /// Posted the big blind; still owes a decision.
    BigBlind,
    /// Checked or called.
    Actioned,
    /// Raised or went all-in for more than the call.
    AggressivelyActioned,
}

impl TurnStatus {
    /// Returns whether the player has made their decision for this street.
    #[must_use]
    pub const fn has_acted(self) -> bool {
        match self {
            Self::Actioned | Self::AggressivelyActioned => true,
            Self::StillToAct | Self::SmallBlind | Self::BigBlind => false,
        }
    }
}

/// A player in the queue and their status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QueueEntry {
    /// The queued player.
    pub player: PlayerId,
    /// What the player has done on this street.
    pub status: TurnStatus,
}

/// The ordered queue of players still to act on a street.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TurnQueue {
    entries: VecDeque<QueueEntry>,
}

impl TurnQueue {
    /// Creates a queue in the given order with every player still to act.
    pub fn seed(players: impl IntoIterator<Item = PlayerId>) -> Self {
        Self {
            entries: players
                .into_iter()
                .map(|player| QueueEntry {
                    player,
                    status: TurnStatus::StillToAct,
                })
                .collect(),
        }
    }

    /// Returns the entries from front to back.
    pub fn iter(&self) -> impl Iterator<Item = &QueueEntry> {
        self.entries.iter()
    }

    /// Returns the number of queued players.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the queue is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns whether the player is queued.
    #[must_use]
    pub fn contains(&self, player: PlayerId) -> bool {
        self.entries.iter().any(|entry| entry.player == player)
    }

    /// Returns the status of a queued player.
    #[must_use]
    pub fn status(&self, player: PlayerId) -> Option<TurnStatus> {
        self.entries
            .iter()
            .find(|entry| entry.player == player)
            .map(|entry| entry.status)
    }

    /// Returns the player at the front of the queue.
    #[must_use]
    pub fn front(&self) -> Option<PlayerId> {
        self.entries.front().map(|entry| entry.player)
    }

    /// Returns the player whose turn it is, or `None` when betting on this
    /// street is closed.
    ///
    /// Betting is closed once every queued player has checked, called or
    /// raised, or when at most one player is left.
    #[must_use]
    pub fn whos_turn_is_it(&self) -> Option<PlayerId> {
        if self.entries.len() <= 1 {
            return None;
        }
        if self.entries.iter().all(|entry| entry.status.has_acted()) {
            return None;
        }
        self.front()
    }

    /// Fails with [`RoundError::OutOfTurn`] unless `player` is at the front.
    ///
    /// # Errors
    ///
    /// Returns an error if `player` is not at the front of the queue.
    pub fn ensure_turn(&self, player: PlayerId) -> Result<(), RoundError> {
        if self.front() == Some(player) {
            Ok(())
        } else {
            Err(RoundError::OutOfTurn)
        }
    }

    fn pop_front_for(&mut self, player: PlayerId) -> Result<QueueEntry, RoundError> {
        self.ensure_turn(player)?;
        self.entries.pop_front().ok_or(RoundError::OutOfTurn)
    }

    fn requeue(&mut self, player: PlayerId, status: TurnStatus) -> Result<(), RoundError> {
        let mut entry = self.pop_front_for(player)?;
        entry.status = status;
        self.entries.push_back(entry);
        Ok(())
    }

    /// Records a posted small blind.
    ///
    /// # Errors
    ///
    /// Returns an error if `player` is not at the front of the queue.
    pub fn post_small_blind(&mut self, player: PlayerId) -> Result<(), RoundError> {
        self.requeue(player, TurnStatus::SmallBlind)
    }

    /// Records a posted big blind.
    ///
    /// # Errors
    ///
    /// Returns an error if `player` is not at the front of the queue.
    pub fn post_big_blind(&mut self, player: PlayerId) -> Result<(), RoundError> {
        self.requeue(player, TurnStatus::BigBlind)
    }

    /// Records a check, call, or an all-in that does not raise.
    ///
    /// # Errors
    ///
    /// Returns an error if `player` is not at the front of the queue.
    pub fn actioned(&mut self, player: PlayerId) -> Result<(), RoundError> {
        self.requeue(player, TurnStatus::Actioned)
    }

    /// Records a raise, sending everyone else back to still-to-act.
    ///
    /// # Errors
    ///
    /// Returns an error if `player` is not at the front of the queue.
    pub fn aggressively_actioned(&mut self, player: PlayerId) -> Result<(), RoundError> {
        self.requeue(player, TurnStatus::AggressivelyActioned)?;
        let others = self.entries.len() - 1;
        for entry in self.entries.iter_mut().take(others) {
            entry.status = TurnStatus::StillToAct;
        }
        Ok(())
    }

    /// Removes the folding player from the queue.
    ///
    /// # Errors
    ///
    /// Returns an error if `player` is not at the front of the queue.
    pub fn fold(&mut self, player: PlayerId) -> Result<(), RoundError> {
        self.pop_front_for(player).map(|_| ())
    }

    /// Removes a player from anywhere in the queue, keeping the order of the
    /// others. Returns whether the player was queued.
    pub fn remove(&mut self, player: PlayerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.player != player);
        self.entries.len() != before
    }
}
