use log::debug;

use crate::error::RoundError;
use crate::money::Money;
use crate::table::PlayerId;

use super::{Action, ActionKind, Round, Street};

impl<D> Round<D> {
    fn ensure_player_turn(&self, player: PlayerId) -> Result<(), RoundError> {
        self.ensure_not_ended()?;
        self.ensure_known(player)?;

        if self.whos_turn_is_it() != Some(player) {
            return Err(RoundError::OutOfTurn);
        }

        Ok(())
    }

    fn ensure_stack_covers(&self, player: PlayerId, amount: Money) -> Result<(), RoundError> {
        let chips = self.player(player).ok_or(RoundError::UnknownPlayer)?.chips();
        if chips < amount {
            return Err(RoundError::InvalidAmount);
        }
        Ok(())
    }

    /// Moves chips from the player's stack into the ledger and logs the action.
    fn apply(
        &mut self,
        player: PlayerId,
        kind: ActionKind,
        amount: Money,
    ) -> Result<(), RoundError> {
        self.player_mut(player)?
            .bet(amount)
            .map_err(|_| RoundError::InvalidAmount)?;
        self.ledger.commit(player, amount);
        self.actions.push(Action::new(player, kind, amount));
        debug!("{player} {kind:?} {amount}");
        Ok(())
    }

    /// Posts the small blind.
    ///
    /// # Errors
    ///
    /// Returns an error if the round has ended, it is not the player's turn,
    /// the player is not the small blind or has already posted it, it is no
    /// longer pre-flop, or the player cannot cover the blind.
    pub fn post_small_blind(&mut self, player: PlayerId) -> Result<(), RoundError> {
        self.ensure_player_turn(player)?;

        if self.street != Street::PreFlop
            || self.small_blind_posted
            || self.player_with_small_blind().id() != player
        {
            return Err(RoundError::UnexpectedBlind);
        }

        let amount = self.options.small_blind;
        self.ensure_stack_covers(player, amount)?;

        self.apply(player, ActionKind::SmallBlind, amount)?;
        self.queue.post_small_blind(player)?;
        self.small_blind_posted = true;

        Ok(())
    }

    /// Posts the big blind.
    ///
    /// # Errors
    ///
    /// Returns an error if the round has ended, it is not the player's turn,
    /// the player is not the big blind or has already posted it, it is no
    /// longer pre-flop, or the player cannot cover the blind.
    pub fn post_big_blind(&mut self, player: PlayerId) -> Result<(), RoundError> {
        self.ensure_player_turn(player)?;

        if self.street != Street::PreFlop
            || self.big_blind_posted
            || self.player_with_big_blind().id() != player
        {
            return Err(RoundError::UnexpectedBlind);
        }

        let amount = self.options.big_blind;
        self.ensure_stack_covers(player, amount)?;

        self.apply(player, ActionKind::BigBlind, amount)?;
        self.queue.post_big_blind(player)?;
        self.big_blind_posted = true;

        Ok(())
    }

    /// Player action: Check.
    ///
    /// # Errors
    ///
    /// Returns an error if the round has ended, it is not the player's turn,
    /// or the player has not matched the highest commitment on this street.
    pub fn player_checks(&mut self, player: PlayerId) -> Result<(), RoundError> {
        self.ensure_player_turn(player)?;

        if self.ledger.committed(player) != self.ledger.highest() {
            return Err(RoundError::InvalidAmount);
        }

        self.apply(player, ActionKind::Check, Money::ZERO)?;
        self.queue.actioned(player)?;

        Ok(())
    }

    /// Player action: Call (match the highest commitment on this street).
    ///
    /// # Errors
    ///
    /// Returns an error if the round has ended, it is not the player's turn,
    /// or the player cannot cover the call. A short stack has to go all-in
    /// instead.
    pub fn player_calls(&mut self, player: PlayerId) -> Result<(), RoundError> {
        self.ensure_player_turn(player)?;

        let amount = self.ledger.to_call(player);
        self.ensure_stack_covers(player, amount)?;

        self.apply(player, ActionKind::Call, amount)?;
        self.queue.actioned(player)?;

        Ok(())
    }

    /// Player action: Raise, bringing the player's commitment on this street
    /// up to `to`.
    ///
    /// # Errors
    ///
    /// Returns an error if the round has ended, it is not the player's turn,
    /// `to` does not exceed the highest commitment, or the player cannot
    /// cover it.
    pub fn player_raises(&mut self, player: PlayerId, to: Money) -> Result<(), RoundError> {
        self.ensure_player_turn(player)?;

        if to <= self.ledger.highest() {
            return Err(RoundError::InvalidAmount);
        }

        let amount = to
            .checked_sub(self.ledger.committed(player))
            .ok_or(RoundError::InvalidAmount)?;
        self.ensure_stack_covers(player, amount)?;

        self.apply(player, ActionKind::Raise, amount)?;
        self.queue.aggressively_actioned(player)?;

        Ok(())
    }

    /// Player action: All-in (commit the whole remaining stack).
    ///
    /// The all-in reopens the betting when it takes the player above the
    /// highest commitment, or always when
    /// [`RoundOptions::all_in_always_reopens`](crate::RoundOptions::all_in_always_reopens)
    /// is set. Otherwise it counts as a call for less.
    ///
    /// # Errors
    ///
    /// Returns an error if the round has ended or it is not the player's turn.
    pub fn player_pushes_all_in(&mut self, player: PlayerId) -> Result<(), RoundError> {
        self.ensure_player_turn(player)?;

        let amount = self.player(player).ok_or(RoundError::UnknownPlayer)?.chips();
        let reopens = self.options.all_in_always_reopens
            || self.ledger.committed(player) + amount > self.ledger.highest();

        self.apply(player, ActionKind::AllIn, amount)?;
        if reopens {
            self.queue.aggressively_actioned(player)?;
        } else {
            self.queue.actioned(player)?;
        }

        Ok(())
    }

    /// Player action: Fold.
    ///
    /// Ends the round if only one player is left in the hand.
    ///
    /// # Errors
    ///
    /// Returns an error if the round has ended or it is not the player's turn.
    pub fn player_folds_hand(&mut self, player: PlayerId) -> Result<(), RoundError> {
        self.ensure_player_turn(player)?;

        self.apply(player, ActionKind::Fold, Money::ZERO)?;
        self.queue.fold(player)?;
        self.remove_from_hand(player);

        Ok(())
    }
}
