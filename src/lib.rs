//! A Texas Hold'em betting-round engine with optional `no_std` support.
//!
//! The crate provides a [`Table`] that keeps the seating and the dealer
//! button between hands, and a [`Round`] that plays out a single hand:
//! blinds, strict turn order on every street, bet accounting, and the end of
//! the hand. Hand evaluation and paying out pots are left to the caller.
//!
//! # Example
//!
//! ```
//! use holdem_round::{Deck, Money, Round, RoundOptions, Table};
//!
//! let mut table = Table::new();
//! let alice = table.join("alice", Money::new(1000)).unwrap();
//! let bob = table.join("bob", Money::new(1000)).unwrap();
//!
//! let mut round = Round::start(&table, Deck::new(42), RoundOptions::default()).unwrap();
//! round.deal_hands().unwrap();
//! round.post_small_blind(alice).unwrap();
//! round.post_big_blind(bob).unwrap();
//! round.player_folds_hand(alice).unwrap();
//!
//! let result = round.result().unwrap();
//! assert_eq!(result.uncontested_winner, Some(bob));
//! table.settle(&result).unwrap();
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod dealer;
pub mod error;
pub mod money;
pub mod options;
pub mod pot;
pub mod result;
pub mod round;
pub mod table;

// Re-export main types
pub use card::{Card, DECK_SIZE, HoleCards, Suit};
pub use dealer::{Dealer, Deck};
pub use error::{DealError, MoneyError, RoundError, TableError};
pub use money::Money;
pub use options::RoundOptions;
pub use pot::{Pot, split_into_pots};
pub use result::{PlayerResult, RoundResult};
pub use round::{
    Action, ActionKind, ActionLog, BetLedger, BlindPositions, QueueEntry, Round, Street,
    TurnQueue, TurnStatus,
};
pub use table::{Player, PlayerId, Table};
