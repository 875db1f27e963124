//! Round engine and state management.

use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
use log::{debug, info};
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::card::{Card, HoleCards};
use crate::dealer::Dealer;
use crate::error::RoundError;
use crate::money::Money;
use crate::options::RoundOptions;
use crate::pot::{Pot, split_into_pots};
use crate::result::{PlayerResult, RoundResult};
use crate::table::{Player, PlayerId, Table};

mod actions;
pub mod history;
pub mod ledger;
pub mod queue;
pub mod state;
mod streets;

pub use history::{Action, ActionKind, ActionLog};
pub use ledger::BetLedger;
pub use queue::{QueueEntry, TurnQueue, TurnStatus};
pub use state::{BlindPositions, Street};

/// A single hand of Texas Hold'em.
///
/// The round takes a snapshot of the sat-down players when it starts and
/// owns it from then on, along with the turn queue, the bet ledger, the
/// action log and the dealer. Every mutating call validates fully before
/// changing anything, so a failed action leaves the round as it was.
#[derive(Debug)]
pub struct Round<D> {
    /// Round options.
    options: RoundOptions,
    /// Card source.
    dealer: D,
    /// Players dealt into the round, in seat order.
    players: Vec<Player>,
    /// Button and blind seats.
    positions: BlindPositions,
    /// Players who have neither folded nor sat out, in seat order.
    still_in: Vec<PlayerId>,
    /// Current street.
    street: Street,
    /// Players left to act on this street.
    queue: TurnQueue,
    /// Chips committed this round.
    ledger: BetLedger,
    /// Actions taken this round.
    actions: ActionLog,
    /// Hole cards (`player_id` -> hand).
    hands: HashMap<PlayerId, HoleCards>,
    hands_dealt: bool,
    /// Board cards.
    community: Vec<Card>,
    small_blind_posted: bool,
    big_blind_posted: bool,
}

impl<D: Dealer> Round<D> {
    /// Starts a round with the players currently sat down at `table`.
    ///
    /// The button is resolved against the sat-down players and the blinds
    /// are assigned from it. Pre-flop, the small blind is first to act.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::NotEnoughPlayers`] if fewer than two players
    /// are sat down.
    pub fn start(table: &Table, dealer: D, options: RoundOptions) -> Result<Self, RoundError> {
        let players: Vec<Player> = table.players_sat_down().into_iter().cloned().collect();
        if players.len() < 2 {
            return Err(RoundError::NotEnoughPlayers);
        }
        let button = table
            .button_position()
            .ok_or(RoundError::NotEnoughPlayers)?;
        let positions = BlindPositions::assign(button, players.len());
        let still_in = players.iter().map(Player::id).collect();

        let mut round = Self {
            options,
            dealer,
            players,
            positions,
            still_in,
            street: Street::PreFlop,
            queue: TurnQueue::default(),
            ledger: BetLedger::new(),
            actions: ActionLog::new(),
            hands: HashMap::new(),
            hands_dealt: false,
            community: Vec::new(),
            small_blind_posted: false,
            big_blind_posted: false,
        };
        round.queue = TurnQueue::seed(round.seat_order_from(positions.small_blind));

        info!(
            "round started with {} players, button {}, blinds {}/{}",
            round.players.len(),
            round.player_with_button().name(),
            options.small_blind,
            options.big_blind
        );
        Ok(round)
    }
}

impl<D> Round<D> {
    /// Returns the round options.
    pub const fn options(&self) -> &RoundOptions {
        &self.options
    }

    /// Returns the dealer.
    pub const fn dealer(&self) -> &D {
        &self.dealer
    }

    /// Returns the players dealt into the round, with their current stacks.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the round's copy of a player.
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|player| player.id() == id)
    }

    /// Returns the button and blind seats.
    pub const fn positions(&self) -> BlindPositions {
        self.positions
    }

    /// Returns the player with the dealer button.
    pub fn player_with_button(&self) -> &Player {
        &self.players[self.positions.button]
    }

    /// Returns the player posting the small blind.
    pub fn player_with_small_blind(&self) -> &Player {
        &self.players[self.positions.small_blind]
    }

    /// Returns the player posting the big blind.
    pub fn player_with_big_blind(&self) -> &Player {
        &self.players[self.positions.big_blind]
    }

    /// Returns the current street.
    pub const fn street(&self) -> Street {
        self.street
    }

    /// Returns whether the round has ended.
    pub const fn is_ended(&self) -> bool {
        matches!(self.street, Street::Ended)
    }

    /// Returns the player whose decision is awaited.
    ///
    /// Returns `None` when betting on the current street is closed, when a
    /// single player is left, or once the round has ended.
    pub fn whos_turn_is_it(&self) -> Option<PlayerId> {
        if self.is_ended() {
            return None;
        }
        self.queue.whos_turn_is_it()
    }

    /// Returns the players left to act on this street.
    pub const fn turn_queue(&self) -> &TurnQueue {
        &self.queue
    }

    /// Returns the players still in the hand, in seat order.
    pub fn players_still_in(&self) -> Vec<&Player> {
        self.players
            .iter()
            .filter(|player| self.still_in.contains(&player.id()))
            .collect()
    }

    /// Returns whether the player has neither folded nor sat out.
    pub fn player_is_still_in(&self, id: PlayerId) -> bool {
        self.still_in.contains(&id)
    }

    /// Returns what the player has committed on the current street.
    pub fn player_bet_stack(&self, id: PlayerId) -> Money {
        self.ledger.committed(id)
    }

    /// Returns the total committed on the current street.
    pub fn bet_stacks_total(&self) -> Money {
        self.ledger.street_total()
    }

    /// Returns the pot collected from finished streets.
    pub const fn total_pot(&self) -> Money {
        self.ledger.pot()
    }

    /// Returns the bet ledger.
    pub const fn ledger(&self) -> &BetLedger {
        &self.ledger
    }

    /// Returns the actions taken so far.
    pub const fn player_actions(&self) -> &ActionLog {
        &self.actions
    }

    /// Returns the community cards dealt so far.
    pub fn community_cards(&self) -> &[Card] {
        &self.community
    }

    /// Returns the hole cards dealt to a player.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::UnknownPlayer`] if the player was not dealt a
    /// hand.
    pub fn player_hand(&self, id: PlayerId) -> Result<HoleCards, RoundError> {
        self.hands.get(&id).copied().ok_or(RoundError::UnknownPlayer)
    }

    /// Splits everything committed so far into a main pot and side pots.
    pub fn pots(&self) -> Vec<Pot> {
        let contributions: Vec<(PlayerId, Money)> = self
            .players
            .iter()
            .map(|player| (player.id(), self.ledger.contributed(player.id())))
            .collect();
        split_into_pots(&contributions, &self.still_in)
    }

    /// Returns the result once the round has ended.
    pub fn result(&self) -> Option<RoundResult> {
        self.is_ended().then(|| self.build_result())
    }

    /// Takes a player out of the hand without waiting for their turn.
    ///
    /// Chips already committed stay in the pot. The player is skipped when
    /// hands are dealt and in turn order. If only one player is left, the
    /// round ends.
    ///
    /// # Errors
    ///
    /// Returns an error if the round has ended or the player is not part of
    /// the round.
    pub fn sit_player_out(&mut self, id: PlayerId) -> Result<(), RoundError> {
        self.ensure_not_ended()?;
        self.ensure_known(id)?;

        self.queue.remove(id);
        if self.player_is_still_in(id) {
            debug!("{id} sat out mid-round");
            self.remove_from_hand(id);
        }
        Ok(())
    }

    fn build_result(&self) -> RoundResult {
        let players = self
            .players
            .iter()
            .map(|player| PlayerResult {
                player_id: player.id(),
                chips: player.chips(),
                contributed: self.ledger.contributed(player.id()),
                still_in: self.player_is_still_in(player.id()),
            })
            .collect();
        let uncontested_winner = match self.still_in.as_slice() {
            [winner] => Some(*winner),
            _ => None,
        };

        RoundResult {
            players,
            total_pot: self.ledger.pot() + self.ledger.street_total(),
            pots: self.pots(),
            uncontested_winner,
        }
    }

    fn ensure_not_ended(&self) -> Result<(), RoundError> {
        if self.is_ended() {
            Err(RoundError::RoundAlreadyEnded)
        } else {
            Ok(())
        }
    }

    fn ensure_known(&self, id: PlayerId) -> Result<(), RoundError> {
        if self.player(id).is_some() {
            Ok(())
        } else {
            Err(RoundError::UnknownPlayer)
        }
    }

    fn player_mut(&mut self, id: PlayerId) -> Result<&mut Player, RoundError> {
        self.players
            .iter_mut()
            .find(|player| player.id() == id)
            .ok_or(RoundError::UnknownPlayer)
    }

    /// Still-in players in seat order, starting at seat `start`.
    fn seat_order_from(&self, start: usize) -> Vec<PlayerId> {
        let seats = self.players.len();
        (0..seats)
            .map(|offset| self.players[(start + offset) % seats].id())
            .filter(|id| self.still_in.contains(id))
            .collect()
    }

    fn remove_from_hand(&mut self, id: PlayerId) {
        self.still_in.retain(|&still_in| still_in != id);
        if let [winner] = self.still_in.as_slice() {
            info!("{winner} is the last player in the hand");
            self.finish();
        }
    }

    fn finish(&mut self) {
        let collected = self.ledger.collect();
        self.street = Street::Ended;
        info!(
            "round ended, collected {collected}, pot {}",
            self.ledger.pot()
        );
    }
}
