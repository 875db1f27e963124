use alloc::vec::Vec;

use log::{debug, info};

use crate::dealer::Dealer;
use crate::error::{DealError, RoundError};
use crate::result::RoundResult;

use super::{Round, Street, TurnQueue};

impl<D: Dealer> Round<D> {
    /// Deals two hole cards to every player still in the hand.
    ///
    /// # Errors
    ///
    /// Returns an error if the round has ended, hands have already been
    /// dealt, or the dealer runs out of cards.
    pub fn deal_hands(&mut self) -> Result<(), RoundError> {
        self.ensure_not_ended()?;
        if self.hands_dealt {
            return Err(RoundError::HandsAlreadyDealt);
        }

        let order = self.seat_order_from(self.positions.button + 1);
        if self.dealer.cards_remaining() < order.len() * 2 {
            return Err(DealError::NotEnoughCards.into());
        }
        let hands = self.dealer.deal_hole_cards(order.len())?;

        self.hands.extend(order.into_iter().zip(hands));
        self.hands_dealt = true;
        debug!("dealt {} hands", self.hands.len());

        Ok(())
    }

    /// Collects the pre-flop bets, burns a card and deals three community
    /// cards.
    ///
    /// # Errors
    ///
    /// Returns an error if the round has ended, the flop was already dealt,
    /// players still have to act, or the dealer runs out of cards.
    pub fn deal_flop(&mut self) -> Result<(), RoundError> {
        self.deal_street(Street::Flop, 3)
    }

    /// Collects the flop bets, burns a card and deals the turn card.
    ///
    /// # Errors
    ///
    /// Returns an error if the round has ended, the turn was already dealt,
    /// the flop has not been dealt, players still have to act, or the
    /// dealer runs out of cards.
    pub fn deal_turn(&mut self) -> Result<(), RoundError> {
        self.deal_street(Street::Turn, 1)
    }

    /// Collects the turn bets, burns a card and deals the river card.
    ///
    /// # Errors
    ///
    /// Returns an error if the round has ended, the river was already dealt,
    /// the turn has not been dealt, players still have to act, or the
    /// dealer runs out of cards.
    pub fn deal_river(&mut self) -> Result<(), RoundError> {
        self.deal_street(Street::River, 1)
    }

    fn deal_street(&mut self, street: Street, cards: usize) -> Result<(), RoundError> {
        self.ensure_not_ended()?;
        if self.street >= street {
            return Err(RoundError::StreetAlreadyDealt);
        }
        if street.previous() != Some(self.street) {
            return Err(RoundError::OutOfOrderStreet);
        }
        if self.whos_turn_is_it().is_some() {
            return Err(RoundError::StreetNotReady);
        }

        // The burn card plus the street.
        if self.dealer.cards_remaining() <= cards {
            return Err(DealError::NotEnoughCards.into());
        }

        self.dealer.burn_one()?;
        let dealt: Vec<_> = self.dealer.deal_community_cards(cards)?;

        let collected = self.ledger.collect();
        self.community.extend(dealt);
        self.street = street;
        self.queue = TurnQueue::seed(self.seat_order_from(self.positions.button + 1));

        info!(
            "{street:?} dealt, collected {collected}, pot {}",
            self.ledger.pot()
        );
        Ok(())
    }
}

impl<D> Round<D> {
    /// Ends the round, collecting any outstanding bets into the pot.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::RoundAlreadyEnded`] if the round has already
    /// ended, including when everyone but one player folded.
    pub fn end(&mut self) -> Result<RoundResult, RoundError> {
        self.ensure_not_ended()?;
        self.finish();
        Ok(self.build_result())
    }
}
