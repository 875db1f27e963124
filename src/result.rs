//! Round result types.

use alloc::vec::Vec;

use crate::money::Money;
use crate::pot::Pot;
use crate::table::PlayerId;

/// Result for a single player once the round has ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerResult {
    /// The player ID.
    pub player_id: PlayerId,
    /// Chip stack left after the round, before any pot is paid out.
    pub chips: Money,
    /// Total put into the pot during the round.
    pub contributed: Money,
    /// Whether the player was still in the hand at the end.
    pub still_in: bool,
}

/// Result of the entire round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// Results for each player of the round, in seat order.
    pub players: Vec<PlayerResult>,
    /// Everything collected into the pot.
    pub total_pot: Money,
    /// The pot split into a main pot and side pots.
    pub pots: Vec<Pot>,
    /// The last player standing, if everybody else folded.
    pub uncontested_winner: Option<PlayerId>,
}
