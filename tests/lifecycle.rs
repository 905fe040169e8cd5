//! Integration tests for the round lifecycle and tournament closure.

use chess_tournament_web::{
    apply_round_results, close_tournament, finalize_round, start_round, Player, Tournament,
    TournamentError,
};

fn ledger(n: usize) -> Vec<Player> {
    (0..n)
        .map(|i| Player::new(format!("First{i}"), format!("Last{i}"), "1990-01-01"))
        .collect()
}

fn tournament_with(players: &[Player], number_of_rounds: u32) -> Tournament {
    let mut t = Tournament::new(
        "Spring Open",
        "Lyon",
        "2025-03-01",
        "2025-03-02",
        "",
        number_of_rounds,
    );
    t.register_players(players.iter().map(|p| p.id.clone()));
    t
}

#[test]
fn start_round_appends_an_open_round() {
    let players = ledger(4);
    let mut t = tournament_with(&players, 4);

    start_round(&mut t, &players).unwrap();

    assert_eq!(t.current_round, 1);
    assert_eq!(t.rounds.len(), 1);
    assert_eq!(t.rounds[0].name, "Round 1");
    assert!(t.rounds[0].is_open());
    assert!(t.has_open_round());
}

#[test]
fn start_round_fails_once_budget_is_spent() {
    let players = ledger(4);
    let mut t = tournament_with(&players, 1);

    start_round(&mut t, &players).unwrap();
    finalize_round(&mut t);

    let result = start_round(&mut t, &players);
    assert!(matches!(result, Err(TournamentError::AllRoundsPlayed)));
    assert_eq!(t.current_round, 1);
    assert_eq!(t.rounds.len(), 1);
}

#[test]
fn start_round_requires_two_enrolled_players() {
    let players = ledger(1);
    let mut t = tournament_with(&players, 4);

    let result = start_round(&mut t, &players);
    assert!(matches!(result, Err(TournamentError::InsufficientPlayers)));
    assert_eq!(t.current_round, 0);
    assert!(t.rounds.is_empty());
}

#[test]
fn register_player_has_set_semantics() {
    let players = ledger(2);
    let mut t = tournament_with(&players, 4);

    assert!(!t.register_player(players[0].id.clone()));
    assert_eq!(t.players.len(), 2);
}

#[test]
fn bye_matches_leave_no_trace_in_pairing_history() {
    let mut players = ledger(3);
    let mut t = tournament_with(&players, 4);

    start_round(&mut t, &players).unwrap();
    let results: Vec<(f64, f64)> = t.rounds[0].matches.iter().map(|_| (1.0, 0.0)).collect();
    let round = t.current_open_round_mut().unwrap();
    apply_round_results(round, &results, &mut players).unwrap();

    // One real match, one bye: only the real pair enters the history.
    assert_eq!(t.past_pairs().len(), 1);
}

#[test]
fn finalize_round_is_a_noop_without_rounds() {
    let players = ledger(4);
    let mut t = tournament_with(&players, 4);
    finalize_round(&mut t);
    assert!(t.rounds.is_empty());
}

#[test]
fn finalize_round_sets_the_end_timestamp_once() {
    let players = ledger(4);
    let mut t = tournament_with(&players, 4);

    start_round(&mut t, &players).unwrap();
    finalize_round(&mut t);
    let first = t.rounds[0].ended_at;
    assert!(first.is_some());

    finalize_round(&mut t);
    assert_eq!(t.rounds[0].ended_at, first);
}

#[test]
fn close_is_refused_while_a_round_is_open() {
    let players = ledger(4);
    let mut t = tournament_with(&players, 4);

    start_round(&mut t, &players).unwrap();
    assert!(!close_tournament(&mut t));
    assert!(!t.is_closed);
}

#[test]
fn close_succeeds_once_every_round_is_finalized() {
    let players = ledger(4);
    let mut t = tournament_with(&players, 4);

    start_round(&mut t, &players).unwrap();
    finalize_round(&mut t);
    assert!(close_tournament(&mut t));
    assert!(t.is_closed);
}

#[test]
fn close_succeeds_with_no_rounds_played() {
    let players = ledger(4);
    let mut t = tournament_with(&players, 4);
    assert!(close_tournament(&mut t));
    assert!(t.is_closed);
}

#[test]
fn open_round_accessor_tracks_the_lifecycle() {
    let players = ledger(4);
    let mut t = tournament_with(&players, 4);
    assert!(t.current_open_round().is_none());

    start_round(&mut t, &players).unwrap();
    assert_eq!(t.current_open_round().map(|r| r.name.as_str()), Some("Round 1"));

    finalize_round(&mut t);
    assert!(t.current_open_round().is_none());
}

#[test]
fn successive_rounds_avoid_earlier_opponents() {
    let players = ledger(4);
    let mut t = tournament_with(&players, 4);

    start_round(&mut t, &players).unwrap();
    finalize_round(&mut t);
    let first_pairs = t.past_pairs();

    start_round(&mut t, &players).unwrap();
    for m in &t.rounds[1].matches {
        if let Some(key) = m.pair_key() {
            assert!(!first_pairs.contains(&key), "repeat pairing {key:?}");
        }
    }
}
