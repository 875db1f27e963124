//! Seating and the dealer button.
//!
//! A [`Table`] owns the seated players and the button between rounds. A
//! round only reads a snapshot of the sat-down order when it starts; stack
//! changes come back through [`Table::settle`].

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use log::debug;

use crate::error::{MoneyError, TableError};
use crate::money::Money;
use crate::result::RoundResult;

/// Identifies a player at a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlayerId(pub u32);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A seated player and their chip stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    id: PlayerId,
    name: String,
    chips: Money,
}

impl Player {
    /// Creates a player.
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>, chips: Money) -> Self {
        Self {
            id,
            name: name.into(),
            chips,
        }
    }

    /// Returns the player's id.
    #[must_use]
    pub const fn id(&self) -> PlayerId {
        self.id
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the player's chip stack.
    #[must_use]
    pub const fn chips(&self) -> Money {
        self.chips
    }

    /// Takes `amount` off the chip stack.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::Insufficient`] if the stack is smaller than
    /// `amount`; the stack is left untouched.
    pub fn bet(&mut self, amount: Money) -> Result<(), MoneyError> {
        self.chips = self
            .chips
            .checked_sub(amount)
            .ok_or(MoneyError::Insufficient)?;
        Ok(())
    }
}

/// The seats at a table, the sat-out players, and the button.
#[derive(Debug, Clone, Default)]
pub struct Table {
    /// Seated players in seat order.
    players: Vec<Player>,
    /// Seated players excluded from the next round.
    sat_out: Vec<PlayerId>,
    /// Button index into the sat-down ordering.
    button: usize,
    next_id: u32,
}

impl Table {
    /// Creates an empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            players: Vec::new(),
            sat_out: Vec::new(),
            button: 0,
            next_id: 0,
        }
    }

    /// Seats a new player in the next seat.
    ///
    /// Returns the assigned player ID.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::NameTaken`] if a seated player already uses
    /// `name`, or [`MoneyError::Overflow`] if the table's chips would no
    /// longer fit in a chip count.
    pub fn join(&mut self, name: &str, chips: Money) -> Result<PlayerId, TableError> {
        if self.find_player_by_name(name).is_some() {
            return Err(TableError::NameTaken);
        }
        self.total_chips_with(chips)?;

        let id = PlayerId(self.next_id);
        self.next_id += 1;
        self.players.push(Player::new(id, name, chips));
        debug!("{name} joined as {id} with {chips} chips");
        Ok(id)
    }

    /// Returns every seated player in seat order, sat out or not.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the seated player with the given id.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|player| player.id == id)
    }

    /// Returns the players who will take part in the next round, in seat order.
    #[must_use]
    pub fn players_sat_down(&self) -> Vec<&Player> {
        self.players
            .iter()
            .filter(|player| !self.sat_out.contains(&player.id))
            .collect()
    }

    /// Returns whether the player is seated and not sat out.
    #[must_use]
    pub fn is_sat_down(&self, id: PlayerId) -> bool {
        self.player(id).is_some() && !self.sat_out.contains(&id)
    }

    /// Sits a player out of the coming rounds.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::NotRegistered`] if the player is not seated.
    pub fn sit_player_out(&mut self, id: PlayerId) -> Result<(), TableError> {
        if self.player(id).is_none() {
            return Err(TableError::NotRegistered);
        }
        if !self.sat_out.contains(&id) {
            self.sat_out.push(id);
        }
        Ok(())
    }

    /// Brings a sat-out player back into the coming rounds.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::NotRegistered`] if the player is not seated.
    pub fn sit_player_in(&mut self, id: PlayerId) -> Result<(), TableError> {
        if self.player(id).is_none() {
            return Err(TableError::NotRegistered);
        }
        self.sat_out.retain(|&sat_out| sat_out != id);
        Ok(())
    }

    /// Returns the stored button index, which may be stale.
    #[must_use]
    pub const fn button(&self) -> usize {
        self.button
    }

    /// Resolves the button against the current sat-down list without
    /// changing the table.
    ///
    /// An out-of-range index resolves to the first sat-down player. Returns
    /// `None` if nobody is sat down.
    #[must_use]
    pub fn button_position(&self) -> Option<usize> {
        let sat_down = self.players_sat_down().len();
        if sat_down == 0 {
            None
        } else if self.button < sat_down {
            Some(self.button)
        } else {
            Some(0)
        }
    }

    /// Returns the player holding the button, moving a stale button back to
    /// the first sat-down player.
    pub fn locate_button(&mut self) -> Option<&Player> {
        let position = self.button_position()?;
        if position != self.button {
            debug!("button index {} is stale, resetting to 0", self.button);
            self.button = position;
        }
        self.players_sat_down().get(position).copied()
    }

    /// Gives the button to a sat-down player.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::InvalidButtonTarget`] if the player is not
    /// currently sat down.
    pub fn give_button_to_player(&mut self, id: PlayerId) -> Result<(), TableError> {
        let position = self
            .players_sat_down()
            .iter()
            .position(|player| player.id == id)
            .ok_or(TableError::InvalidButtonTarget)?;
        self.button = position;
        Ok(())
    }

    /// Moves the button to the next sat-down player.
    pub fn move_button(&mut self) {
        let sat_down = self.players_sat_down().len();
        self.button += 1;
        if self.button >= sat_down {
            self.button = 0;
        }
    }

    /// Returns the seat index of the player.
    #[must_use]
    pub fn find_seat(&self, id: PlayerId) -> Option<usize> {
        self.players.iter().position(|player| player.id == id)
    }

    /// Returns the seated player with the given name.
    #[must_use]
    pub fn find_player_by_name(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|player| player.name == name)
    }

    /// Removes the player with the given name from the table.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::NotRegistered`] if no seated player has that name.
    pub fn remove_player(&mut self, name: &str) -> Result<Player, TableError> {
        let seat = self
            .players
            .iter()
            .position(|player| player.name == name)
            .ok_or(TableError::NotRegistered)?;
        let player = self.players.remove(seat);
        self.sat_out.retain(|&id| id != player.id);
        debug!("{} left the table", player.name);
        Ok(player)
    }

    /// Writes the final chip stacks of a finished round back to the seats.
    ///
    /// Players who left the table in the meantime are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::Overflow`] if the table's chips would no longer
    /// fit in a chip count; no stack is changed.
    pub fn settle(&mut self, result: &RoundResult) -> Result<(), TableError> {
        let settled = |player: &Player| {
            result
                .players
                .iter()
                .find(|outcome| outcome.player_id == player.id)
                .map_or(player.chips, |outcome| outcome.chips)
        };
        self.players
            .iter()
            .try_fold(Money::ZERO, |total, player| total.checked_add(settled(player)))
            .ok_or(MoneyError::Overflow)?;

        for outcome in &result.players {
            if let Some(player) = self.players.iter_mut().find(|p| p.id == outcome.player_id) {
                player.chips = outcome.chips;
            }
        }
        Ok(())
    }

    /// Pays `amount` to a seated player, e.g. a pot won at showdown.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::NotRegistered`] if the player is not seated,
    /// or [`MoneyError::Overflow`] if the table's chips would no longer fit
    /// in a chip count.
    pub fn award(&mut self, id: PlayerId, amount: Money) -> Result<(), TableError> {
        let seat = self.find_seat(id).ok_or(TableError::NotRegistered)?;
        self.total_chips_with(amount)?;

        let player = &mut self.players[seat];
        player.chips = player
            .chips
            .checked_add(amount)
            .ok_or(MoneyError::Overflow)?;
        debug!("{} awarded {amount}", player.name);
        Ok(())
    }

    /// Returns the chips held by every seated player.
    #[must_use]
    pub fn total_chips(&self) -> Money {
        self.players.iter().map(|player| player.chips).sum()
    }

    /// Checks that `extra` more chips still fit at the table.
    fn total_chips_with(&self, extra: Money) -> Result<Money, MoneyError> {
        self.players
            .iter()
            .try_fold(extra, |total, player| total.checked_add(player.chips))
            .ok_or(MoneyError::Overflow)
    }
}
