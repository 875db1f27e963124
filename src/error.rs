//! Error types for table and round operations.

use thiserror::Error;

/// Errors produced by chip arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoneyError {
    /// A negative amount was supplied.
    #[error("amount is negative")]
    Negative,
    /// The stack does not hold enough chips.
    #[error("insufficient chips")]
    Insufficient,
    /// The amount does not fit in a chip count.
    #[error("chip count overflow")]
    Overflow,
}

/// Errors produced by a [`Dealer`](crate::dealer::Dealer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Not enough cards left in the deck.
    #[error("not enough cards in the deck")]
    NotEnoughCards,
}

/// Errors that can occur while managing the seating at a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TableError {
    /// The button can only be given to a player who is sat down.
    #[error("button can only be given to a sat down player")]
    InvalidButtonTarget,
    /// No seated player matches.
    #[error("player is not registered at this table")]
    NotRegistered,
    /// Another seated player already uses this name.
    #[error("player name is already taken at this table")]
    NameTaken,
    /// The chips at the table would no longer fit in a chip count.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// Errors that can occur during a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// The player is not at the front of the turn queue.
    #[error("not this player's turn")]
    OutOfTurn,
    /// The amount is not valid for this action or exceeds the player's stack.
    #[error("invalid amount for this action")]
    InvalidAmount,
    /// This street has already been dealt.
    #[error("street has already been dealt")]
    StreetAlreadyDealt,
    /// Players still have to act on the current street.
    #[error("players still have to act on this street")]
    StreetNotReady,
    /// The previous street has not been dealt yet.
    #[error("previous street has not been dealt")]
    OutOfOrderStreet,
    /// The player is not part of this round.
    #[error("player is not part of this round")]
    UnknownPlayer,
    /// The round has already ended.
    #[error("round has already ended")]
    RoundAlreadyEnded,
    /// Fewer than two players are sat down.
    #[error("a round needs at least two sat down players")]
    NotEnoughPlayers,
    /// Hole cards have already been dealt this round.
    #[error("hands have already been dealt")]
    HandsAlreadyDealt,
    /// The blind is posted by the wrong player, twice, or after pre-flop.
    #[error("blind cannot be posted here")]
    UnexpectedBlind,
    /// The dealer could not supply cards.
    #[error(transparent)]
    Deal(#[from] DealError),
}
