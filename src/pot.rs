//! Splitting a round's contributions into a main pot and side pots.

use alloc::vec::Vec;

use log::trace;

use crate::money::Money;
use crate::table::PlayerId;

/// One layer of the pot and the players who can win it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pot {
    /// Chips in this layer.
    pub amount: Money,
    /// Still-in players eligible to win this layer, in seat order.
    pub eligible: Vec<PlayerId>,
}

/// Splits round contributions into layered pots.
///
/// `contributions` holds what every player put in over the whole round,
/// folded players included, in seat order. One layer is carved for each
/// distinct contribution level among `still_in` players, lowest first; a
/// layer takes from every contributor the part of their chips between the
/// previous level and this one, and is eligible to the still-in players who
/// reached the level. Chips a folded player put in above the top level go
/// to the last layer.
///
/// The first returned pot is the main pot. Layers always sum to the total
/// of `contributions`.
#[must_use]
pub fn split_into_pots(contributions: &[(PlayerId, Money)], still_in: &[PlayerId]) -> Vec<Pot> {
    let mut levels: Vec<Money> = contributions
        .iter()
        .filter(|(player, amount)| still_in.contains(player) && !amount.is_zero())
        .map(|&(_, amount)| amount)
        .collect();
    levels.sort_unstable();
    levels.dedup();

    let mut pots: Vec<Pot> = Vec::with_capacity(levels.len());
    let mut previous = Money::ZERO;

    for level in levels {
        let amount: Money = contributions
            .iter()
            .map(|&(_, contributed)| {
                contributed
                    .min(level)
                    .saturating_sub(contributed.min(previous))
            })
            .sum();
        let eligible: Vec<PlayerId> = contributions
            .iter()
            .filter(|&&(player, contributed)| still_in.contains(&player) && contributed >= level)
            .map(|&(player, _)| player)
            .collect();
        trace!("pot layer up to {level}: {amount}");
        pots.push(Pot { amount, eligible });
        previous = level;
    }

    let total: Money = contributions.iter().map(|&(_, amount)| amount).sum();
    let layered: Money = pots.iter().map(|pot| pot.amount).sum();
    let dead = total.saturating_sub(layered);
    if !dead.is_zero() {
        match pots.last_mut() {
            Some(last) => last.amount += dead,
            None => pots.push(Pot {
                amount: dead,
                eligible: still_in.to_vec(),
            }),
        }
    }

    pots
}
