//! Round state types.

/// The phase a round is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Street {
    /// Blinds and the first betting round.
    PreFlop,
    /// Three community cards are out.
    Flop,
    /// Four community cards are out.
    Turn,
    /// All five community cards are out.
    River,
    /// The round is over; no more actions are accepted.
    Ended,
}

impl Street {
    /// Returns the street dealt before this one.
    #[must_use]
    pub const fn previous(self) -> Option<Self> {
        match self {
            Self::PreFlop => None,
            Self::Flop => Some(Self::PreFlop),
            Self::Turn => Some(Self::Flop),
            Self::River => Some(Self::Turn),
            Self::Ended => Some(Self::River),
        }
    }
}

/// Seat positions, as indexes into the round's players, fixed at round start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlindPositions {
    /// The player with the dealer button.
    pub button: usize,
    /// The player posting the small blind.
    pub small_blind: usize,
    /// The player posting the big blind.
    pub big_blind: usize,
}

impl BlindPositions {
    /// Assigns the blinds for `players` seated players with the button at
    /// `button`.
    ///
    /// Heads-up the button posts the small blind; otherwise the two players
    /// after the button post the blinds.
    #[must_use]
    pub const fn assign(button: usize, players: usize) -> Self {
        if players == 2 {
            Self {
                button,
                small_blind: button,
                big_blind: (button + 1) % players,
            }
        } else {
            let small_blind = (button + 1) % players;
            Self {
                button,
                small_blind,
                big_blind: (small_blind + 1) % players,
            }
        }
    }
}
