//! Property-based tests driving rounds with random action sequences.
//!
//! Whatever the players try, chips are never created or lost, a rejected
//! action leaves the round untouched, and the player whose turn it is always
//! sits at the front of the queue.

use holdem_round::{
    Deck, Money, PlayerId, Round, RoundOptions, Street, Table, TurnQueue,
};
use proptest::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Snapshot {
    stacks: Vec<Money>,
    street_total: Money,
    pot: Money,
    queue: TurnQueue,
    actions: usize,
    street: Street,
    still_in: usize,
}

fn snapshot(round: &Round<Deck>) -> Snapshot {
    Snapshot {
        stacks: round.players().iter().map(|player| player.chips()).collect(),
        street_total: round.bet_stacks_total(),
        pot: round.total_pot(),
        queue: round.turn_queue().clone(),
        actions: round.player_actions().len(),
        street: round.street(),
        still_in: round.players_still_in().len(),
    }
}

fn chips_in_play(round: &Round<Deck>) -> Money {
    let stacks: Money = round.players().iter().map(|player| player.chips()).sum();
    stacks + round.bet_stacks_total() + round.total_pot()
}

fn try_action(
    round: &mut Round<Deck>,
    player: PlayerId,
    choice: u8,
    extra: u64,
) -> Result<(), holdem_round::RoundError> {
    match choice % 6 {
        0 => round.player_checks(player),
        1 => round.player_calls(player),
        2 => {
            let to = round.ledger().highest() + Money::new(extra);
            round.player_raises(player, to)
        }
        3 => round.player_pushes_all_in(player),
        4 => round.player_folds_hand(player),
        _ => {
            if round.player_with_small_blind().id() == player {
                round.post_small_blind(player)
            } else {
                round.post_big_blind(player)
            }
        }
    }
}

fn advance(round: &mut Round<Deck>) -> Result<(), holdem_round::RoundError> {
    match round.street() {
        Street::PreFlop => round.deal_flop(),
        Street::Flop => round.deal_turn(),
        Street::Turn => round.deal_river(),
        Street::River => round.end().map(|_| ()),
        Street::Ended => Ok(()),
    }
}

fn round_strategy() -> impl Strategy<Value = (Vec<u64>, usize, u64, Vec<(u8, u64)>)> {
    (
        prop::collection::vec(0u64..=600, 2..=6),
        0usize..6,
        any::<u64>(),
        prop::collection::vec((any::<u8>(), 1u64..=300), 0..120),
    )
}

proptest! {
    #[test]
    fn random_rounds_conserve_chips((stacks, button, seed, choices) in round_strategy()) {
        let mut table = Table::new();
        let seats: Vec<PlayerId> = stacks
            .iter()
            .enumerate()
            .map(|(seat, &amount)| table.join(&format!("p{seat}"), Money::new(amount)).unwrap())
            .collect();
        table.give_button_to_player(seats[button % seats.len()]).unwrap();

        let initial: Money = stacks.iter().copied().map(Money::new).sum();
        let mut round = Round::start(&table, Deck::new(seed), RoundOptions::default()).unwrap();
        round.deal_hands().unwrap();

        for (choice, extra) in choices {
            if round.is_ended() {
                break;
            }

            match round.whos_turn_is_it() {
                Some(player) => {
                    prop_assert_eq!(round.turn_queue().front(), Some(player));
                    prop_assert!(round.player_is_still_in(player));

                    let before = snapshot(&round);
                    if try_action(&mut round, player, choice, extra).is_err() {
                        prop_assert_eq!(&snapshot(&round), &before);
                    }
                }
                None => advance(&mut round).unwrap(),
            }

            prop_assert_eq!(chips_in_play(&round), initial);
            for entry in round.turn_queue().iter() {
                prop_assert!(round.player_is_still_in(entry.player));
            }
        }

        if !round.is_ended() {
            round.end().unwrap();
        }
        let result = round.result().unwrap();
        let pots: Money = result.pots.iter().map(|pot| pot.amount).sum();
        let contributed: Money = result.players.iter().map(|player| player.contributed).sum();

        prop_assert_eq!(chips_in_play(&round), initial);
        prop_assert_eq!(round.bet_stacks_total(), Money::ZERO);
        prop_assert_eq!(result.total_pot, round.total_pot());
        prop_assert_eq!(pots, result.total_pot);
        prop_assert_eq!(contributed, result.total_pot);
    }

    #[test]
    fn out_of_turn_actions_are_always_rejected(
        players in 3usize..=6,
        choice in any::<u8>(),
        extra in 1u64..=300,
    ) {
        let mut table = Table::new();
        let seats: Vec<PlayerId> = (0..players)
            .map(|seat| table.join(&format!("p{seat}"), Money::new(1000)).unwrap())
            .collect();
        let mut round = Round::start(&table, Deck::new(0), RoundOptions::default()).unwrap();

        let waiting = round.whos_turn_is_it().unwrap();
        let before = snapshot(&round);
        for &player in seats.iter().filter(|&&player| player != waiting) {
            let err = try_action(&mut round, player, choice, extra).unwrap_err();
            prop_assert_eq!(err, holdem_round::RoundError::OutOfTurn);
        }
        prop_assert_eq!(snapshot(&round), before);
    }
}
