//! The dealer interface consumed by a round, and a seeded deck implementing it.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, HoleCards, Suit};
use crate::error::DealError;

/// Supplies cards to a round.
///
/// The round never looks inside the cards it receives; how they are shuffled
/// and represented is up to the implementation.
pub trait Dealer {
    /// Deals `n` two-card hands.
    ///
    /// # Errors
    ///
    /// Returns an error if there are not enough cards left.
    fn deal_hole_cards(&mut self, n: usize) -> Result<Vec<HoleCards>, DealError>;

    /// Deals `n` community cards.
    ///
    /// # Errors
    ///
    /// Returns an error if there are not enough cards left.
    fn deal_community_cards(&mut self, n: usize) -> Result<Vec<Card>, DealError>;

    /// Discards the top card.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck is empty.
    fn burn_one(&mut self) -> Result<(), DealError>;

    /// Returns the number of cards left to deal.
    fn cards_remaining(&self) -> usize;
}

/// A single 52-card deck shuffled from a seed.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a shuffled deck from the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use holdem_round::{Dealer, Deck};
    ///
    /// let deck = Deck::new(42);
    /// assert_eq!(deck.cards_remaining(), 52);
    /// ```
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in 2..=14 {
                cards.push(Card::new(suit, rank));
            }
        }

        cards.shuffle(&mut rng);
        Self { cards }
    }

    /// Creates a deck that deals `cards` in the given order.
    #[must_use]
    pub fn from_cards(mut cards: Vec<Card>) -> Self {
        cards.reverse();
        Self { cards }
    }

    fn draw(&mut self, n: usize) -> Result<Vec<Card>, DealError> {
        if self.cards.len() < n {
            return Err(DealError::NotEnoughCards);
        }
        let mut drawn = self.cards.split_off(self.cards.len() - n);
        drawn.reverse();
        Ok(drawn)
    }
}

impl Dealer for Deck {
    fn deal_hole_cards(&mut self, n: usize) -> Result<Vec<HoleCards>, DealError> {
        let cards = self.draw(n * 2)?;
        // One card around the table, then the second.
        Ok((0..n)
            .map(|seat| HoleCards([cards[seat], cards[seat + n]]))
            .collect())
    }

    fn deal_community_cards(&mut self, n: usize) -> Result<Vec<Card>, DealError> {
        self.draw(n)
    }

    fn burn_one(&mut self) -> Result<(), DealError> {
        self.draw(1).map(|_| ())
    }

    fn cards_remaining(&self) -> usize {
        self.cards.len()
    }
}
