//! Table, player and chip tests.

use holdem_round::{
    Deck, Money, MoneyError, Player, PlayerId, PlayerResult, Round, RoundOptions, RoundResult,
    Table, TableError,
};

fn table_with(players: usize) -> (Table, Vec<PlayerId>) {
    let mut table = Table::new();
    let seats = (1..=players)
        .map(|seat| {
            table
                .join(&format!("player{seat}"), Money::new(1000))
                .unwrap()
        })
        .collect();
    (table, seats)
}

#[test]
fn players_join_in_seat_order() {
    let (table, s) = table_with(3);

    let ids: Vec<PlayerId> = table.players().iter().map(Player::id).collect();
    assert_eq!(ids, s);
    assert_eq!(table.find_seat(s[2]), Some(2));
    assert_eq!(table.player(s[1]).unwrap().name(), "player2");
}

#[test]
fn name_can_only_be_taken_once() {
    let (mut table, _) = table_with(2);

    assert_eq!(
        table.join("player1", Money::new(500)).unwrap_err(),
        TableError::NameTaken
    );
    assert_eq!(table.players().len(), 2);
}

#[test]
fn sat_out_players_are_skipped() {
    let (mut table, s) = table_with(4);

    table.sit_player_out(s[1]).unwrap();
    table.sit_player_out(s[1]).unwrap();

    let sat_down: Vec<PlayerId> = table.players_sat_down().iter().map(|p| p.id()).collect();
    assert_eq!(sat_down, vec![s[0], s[2], s[3]]);
    assert!(!table.is_sat_down(s[1]));

    table.sit_player_in(s[1]).unwrap();
    assert_eq!(table.players_sat_down().len(), 4);
    assert!(table.is_sat_down(s[1]));
}

#[test]
fn unknown_player_cannot_sit_out() {
    let (mut table, _) = table_with(2);

    assert_eq!(
        table.sit_player_out(PlayerId(42)).unwrap_err(),
        TableError::NotRegistered
    );
    assert_eq!(
        table.sit_player_in(PlayerId(42)).unwrap_err(),
        TableError::NotRegistered
    );
}

#[test]
fn button_starts_on_first_player() {
    let (mut table, s) = table_with(3);

    assert_eq!(table.button_position(), Some(0));
    assert_eq!(table.locate_button().unwrap().id(), s[0]);
}

#[test]
fn empty_table_has_no_button() {
    let mut table = Table::new();

    assert_eq!(table.button_position(), None);
    assert!(table.locate_button().is_none());
}

#[test]
fn button_can_be_given_to_a_sat_down_player() {
    let (mut table, s) = table_with(4);

    table.give_button_to_player(s[2]).unwrap();
    assert_eq!(table.button(), 2);
    assert_eq!(table.locate_button().unwrap().id(), s[2]);
}

#[test]
fn button_cannot_go_to_a_sat_out_or_unknown_player() {
    let (mut table, s) = table_with(4);
    table.sit_player_out(s[3]).unwrap();

    assert_eq!(
        table.give_button_to_player(s[3]).unwrap_err(),
        TableError::InvalidButtonTarget
    );
    assert_eq!(
        table.give_button_to_player(PlayerId(99)).unwrap_err(),
        TableError::InvalidButtonTarget
    );
    assert_eq!(table.button(), 0);
}

#[test]
fn stale_button_resets_to_first_player() {
    let (mut table, s) = table_with(4);
    table.give_button_to_player(s[3]).unwrap();
    table.sit_player_out(s[3]).unwrap();

    // Resolving alone does not touch the table.
    assert_eq!(table.button_position(), Some(0));
    assert_eq!(table.button(), 3);

    assert_eq!(table.locate_button().unwrap().id(), s[0]);
    assert_eq!(table.button(), 0);
}

#[test]
fn round_uses_the_resolved_button() {
    let (mut table, s) = table_with(4);
    table.give_button_to_player(s[3]).unwrap();
    table.sit_player_out(s[3]).unwrap();

    let round = Round::start(&table, Deck::new(5), RoundOptions::default()).unwrap();

    assert_eq!(round.player_with_button().id(), s[0]);
    assert_eq!(round.player_with_small_blind().id(), s[1]);
    assert_eq!(round.player_with_big_blind().id(), s[2]);
}

#[test]
fn button_moves_around_the_table() {
    let (mut table, s) = table_with(3);

    table.move_button();
    assert_eq!(table.locate_button().unwrap().id(), s[1]);
    table.move_button();
    assert_eq!(table.locate_button().unwrap().id(), s[2]);
    table.move_button();
    assert_eq!(table.locate_button().unwrap().id(), s[0]);
}

#[test]
fn moving_the_button_skips_sat_out_players() {
    let (mut table, s) = table_with(4);
    table.sit_player_out(s[1]).unwrap();

    table.move_button();
    assert_eq!(table.locate_button().unwrap().id(), s[2]);
}

#[test]
fn players_are_found_by_name() {
    let (table, s) = table_with(3);

    assert_eq!(table.find_player_by_name("player3").unwrap().id(), s[2]);
    assert!(table.find_player_by_name("nobody").is_none());
}

#[test]
fn players_can_leave_the_table() {
    let (mut table, s) = table_with(3);
    table.sit_player_out(s[1]).unwrap();

    let removed = table.remove_player("player2").unwrap();

    assert_eq!(removed.id(), s[1]);
    assert_eq!(table.players().len(), 2);
    assert_eq!(table.players_sat_down().len(), 2);
    assert_eq!(
        table.remove_player("player2").unwrap_err(),
        TableError::NotRegistered
    );
}

#[test]
fn ids_are_not_reused_after_a_player_leaves() {
    let (mut table, s) = table_with(2);

    table.remove_player("player2").unwrap();
    let rejoined = table.join("player2", Money::new(1000)).unwrap();

    assert_ne!(rejoined, s[1]);
}

#[test]
fn settle_writes_back_round_stacks() {
    let (mut table, s) = table_with(3);
    let mut round = Round::start(&table, Deck::new(11), RoundOptions::default()).unwrap();

    round.post_small_blind(s[1]).unwrap();
    round.post_big_blind(s[2]).unwrap();
    round.player_folds_hand(s[0]).unwrap();
    round.player_folds_hand(s[1]).unwrap();

    let result = round.result().unwrap();
    assert_eq!(result.uncontested_winner, Some(s[2]));

    table.settle(&result).unwrap();
    table.award(s[2], result.total_pot).unwrap();

    assert_eq!(table.player(s[0]).unwrap().chips(), Money::new(1000));
    assert_eq!(table.player(s[1]).unwrap().chips(), Money::new(975));
    assert_eq!(table.player(s[2]).unwrap().chips(), Money::new(1025));
}

#[test]
fn award_needs_a_seated_player() {
    let (mut table, _) = table_with(2);

    assert_eq!(
        table.award(PlayerId(7), Money::new(100)).unwrap_err(),
        TableError::NotRegistered
    );
}

#[test]
fn player_cannot_bet_more_than_their_stack() {
    let mut player = Player::new(PlayerId(0), "short", Money::new(30));

    assert_eq!(
        player.bet(Money::new(31)).unwrap_err(),
        MoneyError::Insufficient
    );
    player.bet(Money::new(30)).unwrap();
    assert_eq!(player.chips(), Money::ZERO);
}

#[test]
fn negative_amounts_are_rejected() {
    assert_eq!(Money::try_from(-1_i64).unwrap_err(), MoneyError::Negative);
    assert_eq!(Money::try_from(250_i64).unwrap(), Money::new(250));
}

#[test]
fn money_arithmetic_does_not_wrap() {
    let stack = Money::new(100);

    assert_eq!(stack.checked_sub(Money::new(101)), None);
    assert_eq!(stack.saturating_sub(Money::new(101)), Money::ZERO);
    assert_eq!(Money::new(u64::MAX).checked_add(Money::new(1)), None);
    assert_eq!(stack + Money::new(50), Money::new(150));
}

#[test]
fn award_cannot_overflow_a_stack() {
    let mut table = Table::new();
    let player = table.join("player1", Money::new(10)).unwrap();

    assert_eq!(
        table.award(player, Money::new(u64::MAX)).unwrap_err(),
        TableError::Money(MoneyError::Overflow)
    );
    assert_eq!(table.player(player).unwrap().chips(), Money::new(10));
}

#[test]
fn table_chips_must_fit_in_a_chip_count() {
    let mut table = Table::new();
    let first = table.join("player1", Money::new(u64::MAX - 100)).unwrap();
    let second = table.join("player2", Money::new(100)).unwrap();

    assert_eq!(
        table.join("player3", Money::new(1)).unwrap_err(),
        TableError::Money(MoneyError::Overflow)
    );
    assert_eq!(
        table.award(first, Money::new(1)).unwrap_err(),
        TableError::Money(MoneyError::Overflow)
    );
    assert_eq!(table.players().len(), 2);
    assert_eq!(table.total_chips(), Money::new(u64::MAX));

    // A full table still plays a round without overflowing.
    let mut round = Round::start(&table, Deck::new(3), RoundOptions::default()).unwrap();
    round.post_small_blind(first).unwrap();
    round.post_big_blind(second).unwrap();
    round.player_pushes_all_in(first).unwrap();
    round.player_pushes_all_in(second).unwrap();

    assert_eq!(round.bet_stacks_total(), Money::new(u64::MAX));
    let result = round.end().unwrap();
    assert_eq!(result.total_pot, Money::new(u64::MAX));

    table.settle(&result).unwrap();
    table.award(first, result.total_pot).unwrap();
    assert_eq!(table.total_chips(), Money::new(u64::MAX));
}

#[test]
fn settle_rejects_stacks_that_do_not_fit() {
    let (mut table, s) = table_with(2);
    let result = RoundResult {
        players: vec![PlayerResult {
            player_id: s[0],
            chips: Money::new(u64::MAX),
            contributed: Money::ZERO,
            still_in: true,
        }],
        total_pot: Money::ZERO,
        pots: Vec::new(),
        uncontested_winner: None,
    };

    assert_eq!(
        table.settle(&result).unwrap_err(),
        TableError::Money(MoneyError::Overflow)
    );
    assert_eq!(table.player(s[0]).unwrap().chips(), Money::new(1000));
}
