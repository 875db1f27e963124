//! Card types.
//!
//! Cards are opaque to the round engine: it only hands them out and keeps
//! them for whoever evaluates hands afterwards.

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

impl Suit {
    /// All four suits.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Clubs, Self::Spades];
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (2..=10, 11 = Jack, 12 = Queen, 13 = King, 14 = Ace).
    pub rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }
}

/// The two private cards dealt to a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HoleCards(pub [Card; 2]);

impl HoleCards {
    /// Returns the cards.
    #[must_use]
    pub const fn cards(&self) -> &[Card; 2] {
        &self.0
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
