//! Integration tests for round-robin fixture generation.

use round_robin_web::{round_robin_fixtures, Fixture, TournamentError};
use std::collections::HashSet;

fn roster(n: usize) -> Vec<String> {
    (1..=n).map(|i| format!("P{i}")).collect()
}

#[test]
fn fewer_than_two_players_yields_no_fixtures() {
    assert!(round_robin_fixtures::<String>(&[]).unwrap().is_empty());
    assert!(round_robin_fixtures(&["Solo"]).unwrap().is_empty());
}

#[test]
fn three_players_in_roster_order() {
    let fixtures = round_robin_fixtures(&["A", "B", "C"]).unwrap();
    assert_eq!(
        fixtures,
        vec![
            Fixture::new(1, "A", "B"),
            Fixture::new(2, "A", "C"),
            Fixture::new(3, "B", "C"),
        ]
    );
}

#[test]
fn every_pair_once_with_dense_match_numbers() {
    for n in 2..=12 {
        let names = roster(n);
        let fixtures = round_robin_fixtures(&names).unwrap();
        assert_eq!(fixtures.len(), n * (n - 1) / 2);

        let numbers: Vec<u32> = fixtures.iter().map(|f| f.match_no).collect();
        let expected: Vec<u32> = (1..=fixtures.len() as u32).collect();
        assert_eq!(numbers, expected);

        let pairs: HashSet<(String, String)> = fixtures
            .iter()
            .map(|f| {
                let mut pair = [f.player_a.clone(), f.player_b.clone()];
                pair.sort();
                (pair[0].clone(), pair[1].clone())
            })
            .collect();
        assert_eq!(pairs.len(), fixtures.len());
    }
}

#[test]
fn slot_a_follows_roster_index() {
    let forward = round_robin_fixtures(&["X", "Y"]).unwrap();
    let reversed = round_robin_fixtures(&["Y", "X"]).unwrap();
    assert_eq!((forward[0].player_a.as_str(), forward[0].player_b.as_str()), ("X", "Y"));
    assert_eq!((reversed[0].player_a.as_str(), reversed[0].player_b.as_str()), ("Y", "X"));
}

#[test]
fn duplicate_names_are_rejected() {
    assert_eq!(
        round_robin_fixtures(&["A", "B", "A"]),
        Err(TournamentError::InvalidRoster("A".to_string()))
    );
}
